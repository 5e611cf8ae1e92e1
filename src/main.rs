use clap::Parser as _;
use supports_color::Stream;
use tracing::debug;

use dirror::{
    application::{Application, ApplicationError},
    cli::Cli,
};

#[compio::main]
#[snafu::report]
async fn main() -> Result<(), ApplicationError> {
    let cli_args = Cli::parse();
    setup_tracing(&cli_args);
    debug!("Parsed CLI arguments: {cli_args:?}");

    Application::run(cli_args).await?;

    Ok(())
}

fn setup_tracing(cli_args: &Cli) {
    let use_colors = supports_color::on(Stream::Stderr).is_some();
    colored::control::set_override(use_colors);

    if let Some(level) = cli_args.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .with_ansi(use_colors)
            .without_time()
            .compact()
            .init();
    }
}
