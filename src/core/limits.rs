/*!
 * Simulator Limits and Constants
 *
 * Centralized location for the magic numbers shared by the workload parser,
 * the CLI and the report renderer.
 */

// =============================================================================
// WORKLOAD FORMAT
// =============================================================================

/// Reserved pid value that requests a coalesce/compact pass
pub const COALESCE_MARKER: i64 = -99_999;

/// Comment prefix for workload files
pub const COMMENT_PREFIX: char = '#';

// =============================================================================
// REPORT FORMAT
// =============================================================================

/// Banner line printed around every event header
pub const EVENT_BANNER: &str = "************************";

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Default placement policy when neither CLI nor environment choose one
pub const ENV_POLICY: &str = "MMU_POLICY";

/// Output format override (`text` or `json`)
pub const ENV_OUTPUT: &str = "MMU_OUTPUT";

/// Switch tracing to JSON lines
pub const ENV_TRACE_JSON: &str = "MMU_TRACE_JSON";
