use std::collections::BTreeSet;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::formats::{PhaseProgress, ProgressSnapshot};

/// How `overall` treats day numbers the catalog does not know.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressPolicy {
    /// Every supplied day counts toward `overall`, even days outside the
    /// course. `overall` can exceed 100.
    #[default]
    Permissive,
    /// Days outside `1..=total_days` are ignored.
    KnownDaysOnly,
}

/// Completed day numbers as supplied by callers. Signed so that values
/// outside the course, negative ones included, can be expressed and then
/// handled by [`ProgressPolicy`].
pub type CompletedDays = BTreeSet<i64>;

pub fn calculate_progress(catalog: &Catalog, completed: &CompletedDays) -> ProgressSnapshot {
    calculate_progress_with(catalog, completed, ProgressPolicy::Permissive)
}

pub fn calculate_progress_with(
    catalog: &Catalog,
    completed: &CompletedDays,
    policy: ProgressPolicy,
) -> ProgressSnapshot {
    let counted = match policy {
        ProgressPolicy::Permissive => completed.len(),
        ProgressPolicy::KnownDaysOnly => completed
            .range(1..=i64::from(catalog.total_days()))
            .count(),
    };
    if counted != completed.len() {
        tracing::debug!(
            supplied = completed.len(),
            counted,
            "ignored completed days outside the course"
        );
    }

    let overall = percent(counted as u64, u64::from(catalog.total_days())).round() as u32;

    let phases = catalog
        .phases()
        .iter()
        .map(|phase| {
            let done = completed
                .range(i64::from(phase.first_day)..=i64::from(phase.last_day))
                .count();
            PhaseProgress {
                id: phase.id,
                progress: percent(done as u64, u64::from(phase.len())),
            }
        })
        .collect();

    ProgressSnapshot { overall, phases }
}

/// Parses a comma separated day list such as `1,2, 3`. Blank input is the
/// empty set. Any integer is accepted; range checks belong to the policy.
pub fn parse_day_list(input: &str) -> anyhow::Result<CompletedDays> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .with_context(|| format!("invalid day number: {s:?}"))
        })
        .collect()
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    100.0 * part as f64 / whole as f64
}
