use std::path::PathBuf;
use std::process::{Command, Output};

use crate::error::PublishError;
use crate::utils::debug_log;

/// Runs one git subcommand at a time, blocking until it exits
#[derive(Debug, Clone)]
pub(crate) struct GitRunner {
    program: String,
    workdir: Option<PathBuf>,
}

impl GitRunner {
    pub(crate) fn new(program: impl Into<String>, workdir: Option<PathBuf>) -> Self {
        Self {
            program: program.into(),
            workdir,
        }
    }

    /// Run `<program> <args>`; a non-zero exit becomes `CommandFailed` labelled with `step`
    pub(crate) fn run(&self, args: &[&str], step: &str) -> Result<Output, PublishError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            // A missing working directory would otherwise surface as NotFound
            if !dir.is_dir() {
                return Err(PublishError::Spawn {
                    program: self.program.clone(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        format!("working directory {} does not exist", dir.display()),
                    ),
                });
            }
            cmd.current_dir(dir);
        }

        debug_log!("Running {} {}", self.program, args.join(" "));
        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PublishError::ToolMissing {
                    program: self.program.clone(),
                }
            } else {
                PublishError::Spawn {
                    program: self.program.clone(),
                    source: e,
                }
            }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stdout.trim().is_empty() {
            debug_log!("{step} stdout: {}", stdout.trim());
        }
        if !stderr.trim().is_empty() {
            debug_log!("{step} stderr: {}", stderr.trim());
        }

        if output.status.success() {
            Ok(output)
        } else {
            // `git commit` reports "nothing to commit" on stdout
            let detail = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            Err(PublishError::CommandFailed {
                step: step.to_string(),
                code: output.status.code(),
                stderr: detail,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_tool_missing() {
        let git = GitRunner::new("plotpush-no-such-binary", None);
        let err = git.run(&["--version"], "version").unwrap_err();
        assert!(
            matches!(err, PublishError::ToolMissing { ref program } if program == "plotpush-no-such-binary")
        );
    }

    #[test]
    fn bad_workdir_is_spawn_error() {
        let git = GitRunner::new("git", Some(PathBuf::from("/nonexistent/path/that/does/not/exist")));
        let err = git.run(&["status"], "git status").unwrap_err();
        assert!(matches!(err, PublishError::Spawn { .. }));
        assert!(err.to_string().contains("does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_command_failed() {
        let runner = GitRunner::new("sh", None);
        let err = runner
            .run(&["-c", "echo boom >&2; exit 3"], "sh step")
            .unwrap_err();
        match err {
            PublishError::CommandFailed { step, code, stderr } => {
                assert_eq!(step, "sh step");
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn stdout_is_used_when_stderr_is_empty() {
        let runner = GitRunner::new("sh", None);
        let err = runner
            .run(&["-c", "echo 'nothing to commit'; exit 1"], "git commit")
            .unwrap_err();
        assert!(
            matches!(err, PublishError::CommandFailed { ref stderr, .. } if stderr == "nothing to commit")
        );
    }

    #[cfg(unix)]
    #[test]
    fn success_returns_output() {
        let runner = GitRunner::new("sh", None);
        let output = runner.run(&["-c", "echo ok"], "sh").unwrap();
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "ok");
    }
}
