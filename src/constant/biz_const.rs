/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// sample address the email field starts with
pub const SAMPLE_EMAIL: &str = "jonas_kahnwald@gmail.com";

/// accessible labels of the visibility toggle, naming the action it will perform
pub const SHOW_PASSWORD_LABEL: &str = "Show password";
pub const HIDE_PASSWORD_LABEL: &str = "Hide password";

/// stands in for the password in diagnostics outside of local development
pub const REDACTED: &str = "[REDACTED]";

/// routes
pub const LOGIN_PATH: &str = "/login";
pub const VISIBILITY_PATH: &str = "/login/visibility";
