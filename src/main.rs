use std::io;
use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use avl::config::Config;
use avl::shell::Shell;
use avl::source::read_keys;

fn main() {
    let config = Config::parse();

    setup_logging(config.debug);

    if let Err(err) = run(&config) {
        eprintln!("Error: {}", err);
        process::exit(err.exit_code());
    }
}

fn run(config: &Config) -> avl::Result<()> {
    let keys = read_keys(&config.input)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());

    shell.seed(keys, config.quiet)?;
    if config.no_menu {
        shell.show()
    } else {
        shell.run()
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // Logs go to stderr so they never interleave with the rendered trees on stdout
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!(?level, "logging initialized");
}
