/// Default digit tokens, the outer loop of the identifier cross-product
pub(crate) const DEFAULT_NUMBERS: [&str; 3] = ["1", "2", "3"];

/// Default letter tokens, the inner loop of the identifier cross-product
pub(crate) const DEFAULT_LETTERS: [&str; 3] = ["A", "B", "C"];

pub(crate) const DEFAULT_IMAGES_DIR: &str = "images";
pub(crate) const DEFAULT_MANIFEST_FILE: &str = "images.json";

pub(crate) const DEFAULT_GIT: &str = "git";
pub(crate) const DEFAULT_REMOTE: &str = "origin";
pub(crate) const DEFAULT_BRANCH: &str = "main";

/// Run timestamp embedded in image filenames: "20250115_093000"
pub(crate) const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Timestamp shown in chart titles: "2025-01-15 09:30:00"
pub(crate) const TITLE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp used in commit messages: "2025-01-15 09:30"
pub(crate) const COMMIT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format accepted by `--at`
pub(crate) const PINNED_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub(crate) const COMMIT_MESSAGE_PREFIX: &str = "Automated plot update";

pub(crate) const PLOT_WIDTH: u32 = 640;
pub(crate) const PLOT_HEIGHT: u32 = 480;

/// Number of samples along the x axis
pub(crate) const SAMPLE_COUNT: usize = 100;
pub(crate) const X_MIN: f64 = 0.0;
pub(crate) const X_MAX: f64 = 10.0;

/// Standard deviation of the gaussian noise added to each sample
pub(crate) const NOISE_STD_DEV: f64 = 0.5;
