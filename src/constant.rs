// Window size constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;
pub const DEFAULT_WINDOW_TITLE: &str = "Query Diff";

/// Application name and metadata constants
pub const APP_QUALIFIER: &str = "app";
pub const APP_ORGANIZATION: &str = "QueryDiff";
pub const APP_NAME: &str = "Query Diff";

/// App related Magic Numbers
pub const DEFAULT_COLLAPSE_THRESHOLD: usize = 8;
pub const DEFAULT_FONT_SIZE: f32 = 14.0;
pub const TOAST_SECONDS: u64 = 2;
pub const QUERY_FILE_EXTENSIONS: &[&str] = &["sql", "txt"];
