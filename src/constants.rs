pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const CONFIG_FILE: &str = ".admin-console.json";

// Environment overrides
pub const ENV_API_URL: &str = "ADMIN_API_URL";
pub const ENV_TABLE_TAKE: &str = "ADMIN_TABLE_TAKE";
pub const ENV_AUTH_TOKEN: &str = "ADMIN_AUTH_TOKEN";

/// Rows requested per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Minimum time a loading indicator stays visible, in milliseconds.
pub const DEFAULT_MIN_LOADING_MS: u64 = 1500;

pub const LOGOUT_ENDPOINT: &str = "public/auth/logout";

pub const BRAND_NAME: &str = "Byte Benders";
pub const BRAND_SHORT: &str = "B";

/// Base used to parse console locations such as `/projetos?page=2`.
pub const LOCATION_BASE: &str = "http://console.local";
