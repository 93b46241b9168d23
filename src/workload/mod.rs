/*!
 * Workload Module
 * Loading partition sizes and event sequences from text files
 */

mod parser;
pub mod types;

pub use types::*;
