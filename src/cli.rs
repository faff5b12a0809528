use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Catalog YAML file (default: `$COURSENAV_CATALOG`, then the built-in course).
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every phase of the course.
    Phases,
    /// Show the phase that owns a day.
    Phase(DayArgs),
    /// Build the navigation tree for a day.
    Nav(DayArgs),
    /// Build the breadcrumb trail for a site path.
    Breadcrumbs(BreadcrumbsArgs),
    /// Compute overall and per-phase completion percentages.
    Progress(ProgressArgs),
    /// Build the course sidebar with completion flags.
    Sidebar(CompletedArgs),
}

#[derive(Debug, Args)]
pub struct DayArgs {
    /// Day number.
    #[arg(long)]
    pub day: u32,
}

#[derive(Debug, Args)]
pub struct BreadcrumbsArgs {
    /// Site path (e.g. `/course/day-15/exercise`) or absolute URL.
    #[arg(long)]
    pub path: String,
}

#[derive(Debug, Args)]
pub struct CompletedArgs {
    /// Comma separated completed day numbers.
    #[arg(long, default_value = "")]
    pub completed: String,
}

#[derive(Debug, Args)]
pub struct ProgressArgs {
    #[command(flatten)]
    pub completed: CompletedArgs,

    /// Ignore completed days that fall outside the course.
    #[arg(long)]
    pub known_days_only: bool,
}
