use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NavItemType {
    Theory,
    Practice,
    Solution,
    Overview,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    #[serde(rename = "type")]
    pub kind: NavItemType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub children: Vec<NavItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl NavItem {
    pub fn leaf(label: impl Into<String>, href: impl Into<String>, kind: NavItemType) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            kind,
            icon: None,
            children: Vec::new(),
            completed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: String,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseProgress {
    pub id: u32,
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressSnapshot {
    pub overall: u32,
    pub phases: Vec<PhaseProgress>,
}
