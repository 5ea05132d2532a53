//! Publishing generated plots with git
//!
//! Stages the output directory and manifest, commits, and pushes. Failures
//! come back as `PublishError` values; deciding to log and carry on is left
//! to the caller.

pub(crate) mod git;

use std::path::Path;

use chrono::NaiveDateTime;

use crate::consts::{COMMIT_MESSAGE_PREFIX, COMMIT_TIMESTAMP_FORMAT};
use crate::error::PublishError;

pub(crate) use git::GitRunner;

/// What a successful publish did
#[derive(Debug, Clone)]
pub(crate) struct PublishReport {
    pub(crate) remote: String,
    pub(crate) branch: String,
    pub(crate) message: String,
    pub(crate) staged: Vec<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct Publisher {
    git: GitRunner,
    remote: String,
    branch: String,
}

pub(crate) fn commit_message(now: NaiveDateTime) -> String {
    format!(
        "{COMMIT_MESSAGE_PREFIX}: {}",
        now.format(COMMIT_TIMESTAMP_FORMAT)
    )
}

impl Publisher {
    pub(crate) fn new(git: GitRunner, remote: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            git,
            remote: remote.into(),
            branch: branch.into(),
        }
    }

    /// `git add <paths>`, `git commit -m <message>`, `git push <remote> <branch>`, in order.
    ///
    /// Stops at the first failing step.
    pub(crate) fn publish(&self, paths: &[&Path], message: &str) -> Result<PublishReport, PublishError> {
        let staged: Vec<String> = paths
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();

        let mut add_args = vec!["add"];
        add_args.extend(staged.iter().map(String::as_str));
        self.git.run(&add_args, "git add")?;

        self.git.run(&["commit", "-m", message], "git commit")?;

        self.git
            .run(&["push", &self.remote, &self.branch], "git push")?;

        Ok(PublishReport {
            remote: self.remote.clone(),
            branch: self.branch.clone(),
            message: message.to_string(),
            staged,
        })
    }
}
