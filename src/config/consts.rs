// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Sources (name, raw document URL), harvested in this order
pub const DEFAULT_SOURCES: &[(&str, &str)] = &[(
    "SimplifyJobs",
    "https://raw.githubusercontent.com/SimplifyJobs/Summer2025-Internships/dev/README.md",
)];

// Row pre-filter
pub const FIELD_SEP: char = '|';
pub const MIN_FIELDS: usize = 4;
pub const INTERN_MARKER: &str = "intern";
pub const TARGET_YEARS: &[&str] = &["2025"];
pub const CONTINUATION_MARK: &str = "↳";

// Output files
pub const FULL_PREFIX: &str = "business_internships_full";
pub const SUMMARY_PREFIX: &str = "business_internships_summary";
pub const FILE_EXT: &str = "csv";
pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Viewer
pub const FILTER_ALL: &str = "All";
pub const WINDOW_W: f32 = 1200.0;
pub const WINDOW_H: f32 = 760.0;
pub const APP_TITLE: &str = "2025 Business Internships";
pub const ROW_HEIGHT: f32 = 20.0;
