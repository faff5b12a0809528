use std::io::Write as _;

use anyhow::Context as _;
use serde::Serialize;

use crate::breadcrumbs::{generate_breadcrumbs, request_path};
use crate::catalog::Catalog;
use crate::cli::{BreadcrumbsArgs, Command, CompletedArgs, DayArgs, ProgressArgs};
use crate::navigation::{build_course_sidebar, build_day_navigation};
use crate::progress::{ProgressPolicy, calculate_progress_with, parse_day_list};

pub fn run(catalog: &Catalog, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Phases => print_json(&catalog.phases()),
        Command::Phase(args) => phase(catalog, args),
        Command::Nav(args) => print_json(&build_day_navigation(args.day)),
        Command::Breadcrumbs(args) => breadcrumbs(catalog, args),
        Command::Progress(args) => progress(catalog, args),
        Command::Sidebar(args) => sidebar(catalog, args),
    }
}

fn phase(catalog: &Catalog, args: DayArgs) -> anyhow::Result<()> {
    let Some(phase) = catalog.phase_for_day(args.day) else {
        anyhow::bail!(
            "no phase owns day {} (course has {} days)",
            args.day,
            catalog.total_days()
        );
    };
    print_json(phase)
}

fn breadcrumbs(catalog: &Catalog, args: BreadcrumbsArgs) -> anyhow::Result<()> {
    let path = request_path(&args.path);
    tracing::debug!(input = %args.path, %path, "resolved request path");
    print_json(&generate_breadcrumbs(catalog, &path))
}

fn progress(catalog: &Catalog, args: ProgressArgs) -> anyhow::Result<()> {
    let completed = parse_day_list(&args.completed.completed).context("parse --completed")?;
    let policy = if args.known_days_only {
        ProgressPolicy::KnownDaysOnly
    } else {
        ProgressPolicy::Permissive
    };
    print_json(&calculate_progress_with(catalog, &completed, policy))
}

fn sidebar(catalog: &Catalog, args: CompletedArgs) -> anyhow::Result<()> {
    let completed = parse_day_list(&args.completed).context("parse --completed")?;
    print_json(&build_course_sidebar(catalog, &completed))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("serialize json output")?;
    out.write_all(b"\n").context("write output newline")?;
    out.flush().context("flush stdout")?;
    Ok(())
}
