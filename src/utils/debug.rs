use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

pub(crate) fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

pub(crate) fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

pub(crate) fn set_quiet(enabled: bool) {
    QUIET.store(enabled, Ordering::Relaxed);
}

pub(crate) fn quiet_enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Progress line on stderr, hidden by `--quiet`
macro_rules! progress {
    ($($arg:tt)*) => {
        if !$crate::utils::quiet_enabled() {
            eprintln!($($arg)*);
        }
    };
}

/// Diagnostic line on stderr, shown only with `--debug`
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::utils::debug_enabled() {
            eprintln!("[DEBUG] {}", format_args!($($arg)*));
        }
    };
}

pub(crate) use {debug_log, progress};
