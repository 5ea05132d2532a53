pub(crate) mod clock;
pub(crate) mod debug;
pub(crate) mod timezone;

pub(crate) use clock::{Clock, FixedClock, SystemClock};
pub(crate) use debug::{debug_enabled, debug_log, progress, quiet_enabled, set_debug, set_quiet};
pub(crate) use timezone::Timezone;
