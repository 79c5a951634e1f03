//! Application-wide constants
//!
//! Centralized constants to avoid duplication and ensure consistency.

// =============================================================================
// History
// =============================================================================

/// Maximum number of entries kept in the persisted history
pub const MAX_LOGS: usize = 200;

/// Storage slot holding the JSON-serialized entry list (newest-first)
pub const LOGS_KEY: &str = "inspector_logs_v3";

/// Storage slot holding the configured base URL
pub const BASE_URL_KEY: &str = "inspector_base_url";

/// Status sentinel recorded when a call never produced an HTTP response
pub const NETWORK_STATUS: &str = "NET";

// =============================================================================
// Rendering
// =============================================================================

/// Placeholder shown in place of a missing field
pub const NO_VALUE: &str = "—";

/// Text shown when a response carried no body
pub const NO_RESPONSE: &str = "— no response —";

/// Text shown for an empty list
pub const EMPTY_LIST: &str = "— empty —";

/// Number of characters kept from a timestamp when showing dates
pub const DATE_LEN: usize = 10;

// =============================================================================
// Transport
// =============================================================================

/// Default request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// UI
// =============================================================================

/// Frame duration for TUI loop (milliseconds, ~60 FPS)
pub const FRAME_DURATION_MS: u64 = 16;

/// Number of entries to move per page (PageUp/PageDown)
pub const PAGE_SCROLL_LINES: usize = 10;

/// Status message display timeout (seconds)
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 2;

/// Width threshold for wide/narrow layout switch
pub const WIDE_THRESHOLD: u16 = 80;

/// Width of filter sidebar in wide mode
pub const SIDEBAR_WIDTH: u16 = 16;
