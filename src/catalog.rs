use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

pub const CATALOG_ENV: &str = "COURSENAV_CATALOG";

/// A contiguous block of course days sharing a theme.
///
/// The ordered day sequence is stored as the inclusive range
/// `first_day..=last_day`; [`Phase::days`] yields it in ascending order.
/// Serialized output carries the bounds, not the expanded list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub first_day: u32,
    pub last_day: u32,
    pub color: String,
    pub icon: String,
}

impl Phase {
    pub fn days(&self) -> RangeInclusive<u32> {
        self.first_day..=self.last_day
    }

    pub fn contains(&self, day: u32) -> bool {
        self.days().contains(&day)
    }

    pub fn len(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.last_day - self.first_day + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.last_day < self.first_day
    }
}

/// On-disk shape of a catalog (`catalog.yaml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub total_days: u32,
    pub phases: Vec<Phase>,
}

/// Ordered, validated set of phases partitioning `1..=total_days`.
///
/// Built once at startup and shared read-only with every builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    total_days: u32,
    phases: Vec<Phase>,
}

impl Catalog {
    pub fn new(total_days: u32, phases: Vec<Phase>) -> anyhow::Result<Self> {
        if phases.is_empty() {
            anyhow::bail!("catalog has no phases");
        }

        // `None` once a phase ends at `u32::MAX`; nothing may follow it.
        let mut next_day = Some(1u32);
        let mut last_day = 0u32;
        for (idx, phase) in phases.iter().enumerate() {
            let expected_id = idx as u32 + 1;
            if phase.id != expected_id {
                anyhow::bail!(
                    "phase ids must ascend from 1: expected {expected_id}, found {}",
                    phase.id
                );
            }
            if phase.title.trim().is_empty() {
                anyhow::bail!("phase {} title is empty", phase.id);
            }
            if phase.is_empty() {
                anyhow::bail!(
                    "phase {} has an empty day range ({}..={})",
                    phase.id,
                    phase.first_day,
                    phase.last_day
                );
            }
            let Some(expected_first) = next_day else {
                anyhow::bail!(
                    "phase {} follows a phase ending at day {last_day}, the largest day number",
                    phase.id
                );
            };
            if phase.first_day > expected_first {
                anyhow::bail!(
                    "days {expected_first}..={} are not covered by any phase",
                    phase.first_day - 1
                );
            }
            if phase.first_day < expected_first {
                anyhow::bail!(
                    "phase {} overlaps the previous phase at day {}",
                    phase.id,
                    phase.first_day
                );
            }
            last_day = phase.last_day;
            next_day = last_day.checked_add(1);
        }

        if last_day != total_days {
            anyhow::bail!("phases end at day {last_day} but total_days is {total_days}");
        }

        Ok(Self { total_days, phases })
    }

    /// The 60-day, five-phase course shipped with the site.
    pub fn reference() -> Self {
        let phase = |id: u32, title: &str, description: &str, color: &str, icon: &str| {
            let first_day = (id - 1) * 12 + 1;
            Phase {
                id,
                title: title.to_owned(),
                description: description.to_owned(),
                first_day,
                last_day: first_day + 11,
                color: color.to_owned(),
                icon: icon.to_owned(),
            }
        };

        Self {
            total_days: 60,
            phases: vec![
                phase(
                    1,
                    "Foundations",
                    "Syntax, tooling and the habits every later day builds on",
                    "blue",
                    "book-open",
                ),
                phase(
                    2,
                    "Core Concepts",
                    "Data structures, functions and error handling in depth",
                    "green",
                    "layers",
                ),
                phase(
                    3,
                    "Web Fundamentals",
                    "HTTP, the DOM and building interactive pages",
                    "purple",
                    "globe",
                ),
                phase(
                    4,
                    "Backend & Data",
                    "Servers, databases and designing APIs",
                    "orange",
                    "database",
                ),
                phase(
                    5,
                    "Capstone",
                    "Plan, build and ship a complete project",
                    "red",
                    "rocket",
                ),
            ],
        }
    }

    pub fn from_file(file: CatalogFile) -> anyhow::Result<Self> {
        Self::new(file.total_days, file.phases)
    }

    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(yaml).context("parse catalog yaml")?;
        Self::from_file(file).context("validate catalog")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("read catalog: {}", path.display()))?;
        Self::from_yaml_str(&yaml).with_context(|| format!("load catalog: {}", path.display()))
    }

    /// Resolves the catalog from an explicit path, then `COURSENAV_CATALOG`,
    /// then the built-in reference course.
    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        let from_env = std::env::var(CATALOG_ENV)
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        match path.map(Path::to_path_buf).or(from_env) {
            Some(path) => {
                let catalog = Self::load(&path)?;
                tracing::info!(
                    path = %path.display(),
                    phases = catalog.phases.len(),
                    total_days = catalog.total_days,
                    "loaded catalog"
                );
                Ok(catalog)
            }
            None => {
                tracing::debug!("using reference catalog");
                Ok(Self::reference())
            }
        }
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    pub fn phase_for_day(&self, day: u32) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.contains(day))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}
