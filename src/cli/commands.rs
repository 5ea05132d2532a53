//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// Generate plots, write the manifest, then commit and push (default)
    Run,
    /// Generate plots and write the manifest without publishing
    Generate,
    /// Commit and push the existing output directory and manifest
    Publish,
    /// Show manifest entries and the images accumulated on disk
    Status,
}

impl Commands {
    /// Resolve the command to run; no subcommand means `run`
    pub(crate) fn resolve(cmd: Option<Commands>) -> Commands {
        cmd.unwrap_or(Commands::Run)
    }

    pub(crate) fn generates(self) -> bool {
        matches!(self, Commands::Run | Commands::Generate)
    }

    /// Whether the command publishes, before `--no-push` is taken into account
    pub(crate) fn publishes(self) -> bool {
        matches!(self, Commands::Run | Commands::Publish)
    }
}
