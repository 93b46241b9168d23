/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (always non-zero for a real owner)
pub type Pid = u32;

/// Address type for partition offsets
pub type Address = usize;

/// Size type for block capacities
pub type Size = usize;
