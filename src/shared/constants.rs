// =============================================================================
// ADMIN SESSION
// =============================================================================

/// Name of the HTTP-only cookie carrying the admin token
pub const ADMIN_TOKEN_COOKIE: &str = "admin-token";

/// Lifetime of an admin token and its cookie (24 hours)
pub const ADMIN_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Admin login page
pub const ADMIN_LOGIN_PATH: &str = "/admin";

/// Prefix of every protected admin page
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

// =============================================================================
// CATALOG
// =============================================================================

/// Maximum number of images attached to a product
pub const MAX_PRODUCT_IMAGES: usize = 4;

/// Product enquiries at or above this quantity raise an urgent notification
pub const URGENT_ENQUIRY_QUANTITY: i32 = 10;
