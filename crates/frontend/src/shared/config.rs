//! Compile-time settings of the dashboard.

/// Port the shop API listens on; host and protocol follow the page location.
pub const API_PORT: u16 = 3000;

pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const PAGE_SIZE_OPTIONS: &[u32] = &[10, 25, 50, 100];

/// Quiet window before a typed search term triggers a request.
pub const SEARCH_DEBOUNCE_MS: u64 = 400;

pub const TOAST_TTL_MS: u32 = 4_000;
pub const TOAST_LIMIT: usize = 4;
