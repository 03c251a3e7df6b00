/// Default delay in seconds between two polls of the transaction list while an
/// order is still in progress
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REST_TIMEOUT: u64 = 30;
/// Default base URL of the Nightrader backend gateway
pub const DEFAULT_BASE_URL: &str = "http://localhost";
/// User agent string used in HTTP requests to identify this client to the backend
pub const USER_AGENT: &str = "nightrader-client/0.1.0";
