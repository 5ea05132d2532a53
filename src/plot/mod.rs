pub(crate) mod generator;
pub(crate) mod id;
pub(crate) mod signal;

pub(crate) use generator::{GeneratedRun, GenerationConfig, generate_plots};
