//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::consts::{
    DEFAULT_BRANCH, DEFAULT_GIT, DEFAULT_IMAGES_DIR, DEFAULT_LETTERS, DEFAULT_MANIFEST_FILE,
    DEFAULT_NUMBERS, DEFAULT_REMOTE,
};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(name = "plotpush")]
#[command(
    about = "Generate placeholder plots, index them in a manifest, and push them with git",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Digit tokens, comma separated (default: 1,2,3)
    #[arg(long, global = true, value_delimiter = ',', value_name = "LIST")]
    pub(crate) numbers: Option<Vec<String>>,

    /// Letter tokens, comma separated (default: A,B,C)
    #[arg(long, global = true, value_delimiter = ',', value_name = "LIST")]
    pub(crate) letters: Option<Vec<String>>,

    /// Directory the images are written to (default: images)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub(crate) output_dir: Option<PathBuf>,

    /// Manifest file path (default: images.json)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub(crate) manifest: Option<PathBuf>,

    /// Remote to push to (default: origin)
    #[arg(long, global = true)]
    pub(crate) remote: Option<String>,

    /// Branch to push (default: main)
    #[arg(long, global = true)]
    pub(crate) branch: Option<String>,

    /// Git executable (default: git)
    #[arg(long, global = true, value_name = "BIN")]
    pub(crate) git: Option<String>,

    /// Skip the commit and push after generating
    #[arg(long, global = true)]
    pub(crate) no_push: bool,

    /// Seed for the plot noise, for reproducible images
    #[arg(long, global = true)]
    pub(crate) seed: Option<u64>,

    /// Pin the clock to a fixed instant (YYYY-MM-DDTHH:MM:SS)
    #[arg(long, global = true, value_name = "DATETIME")]
    pub(crate) at: Option<String>,

    /// Timezone for timestamps (e.g., "UTC", "Europe/Berlin"; default: local)
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Output a JSON report on stdout
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Suppress progress messages
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    /// Enable debug output (git output, timings)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_push && config.no_push {
            self.no_push = true;
        }
        if !self.quiet && config.quiet {
            self.quiet = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        // Valued options: only apply if CLI didn't set them
        if self.numbers.is_none() {
            self.numbers = config.numbers.clone();
        }
        if self.letters.is_none() {
            self.letters = config.letters.clone();
        }
        if self.output_dir.is_none() {
            self.output_dir = config.output_dir.clone();
        }
        if self.manifest.is_none() {
            self.manifest = config.manifest.clone();
        }
        if self.remote.is_none() {
            self.remote = config.remote.clone();
        }
        if self.branch.is_none() {
            self.branch = config.branch.clone();
        }
        if self.git.is_none() {
            self.git = config.git.clone();
        }
        if self.seed.is_none() {
            self.seed = config.seed;
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color || self.json {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn numbers(&self) -> Vec<String> {
        tokens_or_default(self.numbers.as_deref(), &DEFAULT_NUMBERS)
    }

    pub(crate) fn letters(&self) -> Vec<String> {
        tokens_or_default(self.letters.as_deref(), &DEFAULT_LETTERS)
    }

    pub(crate) fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR))
    }

    pub(crate) fn manifest_path(&self) -> PathBuf {
        self.manifest
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_FILE))
    }

    pub(crate) fn remote(&self) -> &str {
        self.remote.as_deref().unwrap_or(DEFAULT_REMOTE)
    }

    pub(crate) fn branch(&self) -> &str {
        self.branch.as_deref().unwrap_or(DEFAULT_BRANCH)
    }

    pub(crate) fn git(&self) -> &str {
        self.git.as_deref().unwrap_or(DEFAULT_GIT)
    }
}

/// Trimmed, non-empty tokens; falls back to `default` when none were given
fn tokens_or_default(tokens: Option<&[String]>, default: &[&str]) -> Vec<String> {
    match tokens {
        Some(list) => list
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect(),
        None => default.iter().map(|s| s.to_string()).collect(),
    }
}
