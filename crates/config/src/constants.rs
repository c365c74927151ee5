//! Centralized constants for the azsearch-deploy workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Search Service Defaults
// =============================================================================

/// Default REST API version sent as the `api-version` query parameter.
pub const DEFAULT_API_VERSION: &str = "2019-05-06";

/// DNS suffix used to derive the search endpoint from a service name.
pub const SEARCH_DOMAIN_SUFFIX: &str = "search.windows.net";

/// Header carrying the admin API key on every search-service request.
pub const API_KEY_HEADER: &str = "api-key";

// =============================================================================
// Management Plane Defaults
// =============================================================================

/// Default Azure Resource Manager endpoint used to resolve admin keys.
pub const DEFAULT_MANAGEMENT_ENDPOINT: &str = "https://management.azure.com";

/// API version of the `listAdminKeys` management operation.
pub const MANAGEMENT_API_VERSION: &str = "2020-08-01";

// =============================================================================
// Throttling Defaults
// =============================================================================

/// Default number of index calls allowed before a rate-limit pause.
pub const DEFAULT_MAX_CALL_COUNT: u32 = 20;

/// Default rate-limit pause in seconds.
pub const DEFAULT_PAUSE_SECS: u64 = 120;

// =============================================================================
// Connection Defaults
// =============================================================================

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Discovery
// =============================================================================

/// File extension (case-insensitive) of index definition files.
pub const INDEX_FILE_EXTENSION: &str = "json";
