use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rand::Rng;

use crate::cli::{Cli, Commands};
use crate::error::{AppError, PublishError};
use crate::manifest::Manifest;
use crate::output::{
    output_run_json, output_status_json, print_plot_table, print_publish_line, print_status_table,
};
use crate::plot::{GenerationConfig, generate_plots};
use crate::publish::{PublishReport, Publisher, commit_message};
use crate::utils::{Clock, debug_log, progress};

/// How the publish step ended
#[derive(Debug)]
pub(crate) enum PublishOutcome {
    Pushed(PublishReport),
    Skipped,
    Failed(PublishError),
}

/// Everything a command produced, for reporting
#[derive(Debug)]
pub(crate) struct RunSummary {
    /// Batch timestamp; absent when nothing was generated
    pub(crate) timestamp: Option<NaiveDateTime>,
    pub(crate) manifest_path: PathBuf,
    pub(crate) manifest: Manifest,
    pub(crate) publish: PublishOutcome,
}

/// One manifest entry as seen on disk
#[derive(Debug, Clone)]
pub(crate) struct StatusEntry {
    pub(crate) id: String,
    pub(crate) path: String,
    pub(crate) exists: bool,
}

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) config: GenerationConfig,
    pub(crate) publisher: Publisher,
    pub(crate) clock: &'a dyn Clock,
}

/// Stage, commit and push; failures are logged here and never propagated.
fn publish_step(ctx: &CommandContext<'_>) -> PublishOutcome {
    progress!("--- Starting Git push process ---");
    let paths = [ctx.config.output_dir.as_path(), ctx.config.manifest_path.as_path()];
    let message = commit_message(ctx.clock.now());

    match ctx.publisher.publish(&paths, &message) {
        Ok(report) => {
            progress!(
                "--- Successfully pushed updates to {}/{}. ---",
                report.remote,
                report.branch
            );
            PublishOutcome::Pushed(report)
        }
        Err(err @ PublishError::ToolMissing { .. }) => {
            eprintln!("!!! {err}");
            PublishOutcome::Failed(err)
        }
        Err(err) => {
            eprintln!("!!! An error occurred during the git process: {err}");
            PublishOutcome::Failed(err)
        }
    }
}

/// Generate plots and write the manifest, then optionally publish.
pub(crate) fn run_pipeline<R: Rng + ?Sized>(
    ctx: &CommandContext<'_>,
    rng: &mut R,
    publish: bool,
) -> Result<RunSummary, AppError> {
    let run = generate_plots(&ctx.config, ctx.clock, rng)?;

    run.manifest.write(&ctx.config.manifest_path)?;
    progress!(
        "--- Manifest file '{}' created/updated. ---",
        ctx.config.manifest_path.display()
    );

    let publish = if publish {
        publish_step(ctx)
    } else {
        debug_log!("Publishing skipped");
        PublishOutcome::Skipped
    };

    Ok(RunSummary {
        timestamp: Some(run.timestamp),
        manifest_path: ctx.config.manifest_path.clone(),
        manifest: run.manifest,
        publish,
    })
}

/// Publish what a previous `generate` left on disk; the manifest must exist.
pub(crate) fn publish_existing(ctx: &CommandContext<'_>) -> Result<RunSummary, AppError> {
    let manifest = Manifest::load(&ctx.config.manifest_path)?;
    let publish = publish_step(ctx);
    Ok(RunSummary {
        timestamp: None,
        manifest_path: ctx.config.manifest_path.clone(),
        manifest,
        publish,
    })
}

/// Manifest entries with on-disk existence, plus how many plot images the
/// output directory has accumulated across runs.
pub(crate) fn collect_status(
    config: &GenerationConfig,
) -> Result<(Vec<StatusEntry>, usize), AppError> {
    let entries = if config.manifest_path.exists() {
        Manifest::load(&config.manifest_path)?
            .iter()
            .map(|(id, path)| StatusEntry {
                id: id.to_string(),
                path: path.to_string(),
                exists: Path::new(path).is_file(),
            })
            .collect()
    } else {
        Vec::new()
    };

    // The directory is matched literally; only the file name is a pattern
    let pattern = format!(
        "{}/plot_*.png",
        glob::Pattern::escape(&config.output_dir.to_string_lossy())
    );
    let accumulated = glob::glob(&pattern)
        .map_err(|source| AppError::ImagePattern {
            pattern: pattern.clone(),
            source,
        })?
        .filter_map(Result::ok)
        .count();

    Ok((entries, accumulated))
}

/// Dispatch a resolved command and print its report.
pub(crate) fn handle_command<R: Rng + ?Sized>(
    command: Commands,
    ctx: &CommandContext<'_>,
    rng: &mut R,
) -> Result<(), AppError> {
    let use_color = ctx.cli.use_color();

    if command == Commands::Status {
        let (entries, accumulated) = collect_status(&ctx.config)?;
        if ctx.cli.json {
            println!(
                "{}",
                output_status_json(&ctx.config.manifest_path, &entries, accumulated)
            );
        } else {
            print_status_table(&ctx.config.manifest_path, &entries, accumulated, use_color);
        }
        return Ok(());
    }

    let summary = if command.generates() {
        let publish = command.publishes() && !ctx.cli.no_push;
        run_pipeline(ctx, rng, publish)?
    } else {
        publish_existing(ctx)?
    };

    if ctx.cli.json {
        println!("{}", output_run_json(&summary));
    } else {
        if command.generates() {
            print_plot_table(&summary.manifest, use_color);
        }
        print_publish_line(&summary.publish, use_color);
    }
    Ok(())
}
