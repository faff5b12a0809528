use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    coursenav::logging::init().context("init logging")?;

    let cli = coursenav::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let catalog =
        coursenav::catalog::Catalog::resolve(cli.catalog.as_deref()).context("resolve catalog")?;
    coursenav::commands::run(&catalog, cli.command).context("run command")?;

    Ok(())
}
