mod app;
mod cli;
mod config;
mod consts;
mod error;
mod manifest;
mod output;
mod plot;
mod publish;
mod render;
mod utils;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use app::{CommandContext, handle_command};
use cli::{Cli, Commands};
use config::Config;
use error::AppError;
use plot::GenerationConfig;
use publish::{GitRunner, Publisher};
use utils::{Clock, FixedClock, SystemClock, Timezone, debug_log, set_debug, set_quiet};

fn run(cli: &Cli) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let clock: Box<dyn Clock> = match cli.at.as_deref() {
        Some(at) => Box::new(FixedClock::parse(at)?),
        None => Box::new(SystemClock::new(timezone)),
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let ctx = CommandContext {
        cli,
        config: GenerationConfig {
            numbers: cli.numbers(),
            letters: cli.letters(),
            output_dir: cli.output_dir(),
            manifest_path: cli.manifest_path(),
        },
        publisher: Publisher::new(GitRunner::new(cli.git(), None), cli.remote(), cli.branch()),
        clock: clock.as_ref(),
    };
    debug_log!(
        "Sets {:?} x {:?}, output {}, manifest {}",
        ctx.config.numbers,
        ctx.config.letters,
        ctx.config.output_dir.display(),
        ctx.config.manifest_path.display()
    );

    handle_command(Commands::resolve(cli.command), &ctx, &mut rng)
}

fn main() {
    let cli = Cli::parse();

    let config = if cli.quiet {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    set_quiet(cli.quiet);
    set_debug(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
