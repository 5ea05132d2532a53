use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Invalid timestamp \"{input}\" (expected YYYY-MM-DDTHH:MM:SS)")]
    InvalidTimestamp { input: String },

    #[error("Identifier set \"{name}\" is empty")]
    EmptyIdentifierSet { name: &'static str },

    #[error("Duplicate plot identifier: {id}")]
    DuplicatePlotId { id: String },

    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write manifest {}: {source}", .path.display())]
    ManifestWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed manifest {}: {source}", .path.display())]
    ManifestFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to render plot {id}: {source}")]
    Render { id: String, source: RenderError },

    #[error("Invalid image pattern {pattern}: {source}")]
    ImagePattern {
        pattern: String,
        source: glob::PatternError,
    },
}

#[derive(Debug, Error)]
pub(crate) enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Empty data provided")]
    EmptyData,

    #[error("Data length mismatch: x has {x_len} elements, y has {y_len} elements")]
    DataLengthMismatch { x_len: usize, y_len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

#[derive(Debug, Error)]
pub(crate) enum PublishError {
    #[error("'{program}' command not found. Make sure Git is installed and in your PATH.")]
    ToolMissing { program: String },

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{step} failed (exit code {}): {stderr}", exit_code_label(.code))]
    CommandFailed {
        step: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_code_label(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

impl PublishError {
    /// Machine-readable status used in JSON reports
    pub(crate) fn status(&self) -> &'static str {
        match self {
            PublishError::ToolMissing { .. } => "tool_missing",
            PublishError::Spawn { .. } | PublishError::CommandFailed { .. } => "command_failed",
        }
    }
}
