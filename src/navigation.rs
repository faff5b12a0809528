use crate::catalog::Catalog;
use crate::formats::{NavItem, NavItemType};
use crate::progress::CompletedDays;

struct Branch {
    label: &'static str,
    segment: Option<&'static str>,
    kind: NavItemType,
    icon: &'static str,
    anchors: [(&'static str, &'static str); 3],
}

const DAY_BRANCHES: [Branch; 4] = [
    Branch {
        label: "Content",
        segment: None,
        kind: NavItemType::Theory,
        icon: "book-open",
        anchors: [
            ("Overview", "overview"),
            ("Key Concepts", "concepts"),
            ("Details", "details"),
        ],
    },
    Branch {
        label: "Code Examples",
        segment: Some("code"),
        kind: NavItemType::Practice,
        icon: "code",
        anchors: [
            ("Basic Example", "basic"),
            ("Advanced Example", "advanced"),
            ("Real-World Example", "real-world"),
        ],
    },
    Branch {
        label: "Exercise",
        segment: Some("exercise"),
        kind: NavItemType::Practice,
        icon: "pencil",
        anchors: [
            ("Instructions", "instructions"),
            ("Success Criteria", "criteria"),
            ("Hints", "hints"),
        ],
    },
    Branch {
        label: "Solution",
        segment: Some("solution"),
        kind: NavItemType::Solution,
        icon: "check-circle",
        anchors: [
            ("Solution Code", "code"),
            ("Approach", "approach"),
            ("Optimization", "optimization"),
        ],
    },
];

pub fn day_href(day: u32) -> String {
    format!("/course/day-{day}")
}

pub fn phase_href(phase_id: u32) -> String {
    format!("/phase-{phase_id}")
}

/// Per-day sidebar tree: content, code examples, exercise and solution,
/// each with three in-page anchors. The day is not checked against any
/// catalog.
pub fn build_day_navigation(day: u32) -> Vec<NavItem> {
    let base = day_href(day);

    DAY_BRANCHES
        .iter()
        .map(|branch| {
            let href = match branch.segment {
                Some(segment) => format!("{base}/{segment}"),
                None => base.clone(),
            };
            let children = branch
                .anchors
                .iter()
                .map(|(label, anchor)| NavItem::leaf(*label, format!("{href}#{anchor}"), branch.kind))
                .collect();

            NavItem {
                label: branch.label.to_owned(),
                href,
                kind: branch.kind,
                icon: Some(branch.icon.to_owned()),
                children,
                completed: None,
            }
        })
        .collect()
}

/// Course-wide sidebar: one entry per phase with its days underneath,
/// flagged with completion state.
pub fn build_course_sidebar(catalog: &Catalog, completed: &CompletedDays) -> Vec<NavItem> {
    catalog
        .phases()
        .iter()
        .map(|phase| {
            let children = phase
                .days()
                .map(|day| NavItem {
                    completed: Some(completed.contains(&i64::from(day))),
                    ..NavItem::leaf(format!("Day {day}"), day_href(day), NavItemType::Theory)
                })
                .collect::<Vec<_>>();
            let phase_done = children.iter().all(|item| item.completed == Some(true));

            NavItem {
                label: phase.title.clone(),
                href: phase_href(phase.id),
                kind: NavItemType::Overview,
                icon: Some(phase.icon.clone()),
                children,
                completed: Some(phase_done),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_navigation_has_four_fixed_branches_for_any_day() {
        for day in [0, 1, 15, 60, 999, u32::MAX] {
            let nav = build_day_navigation(day);
            let kinds = nav.iter().map(|item| item.kind).collect::<Vec<_>>();
            assert_eq!(
                kinds,
                vec![
                    NavItemType::Theory,
                    NavItemType::Practice,
                    NavItemType::Practice,
                    NavItemType::Solution,
                ],
                "day {day}"
            );
            for item in &nav {
                assert_eq!(item.children.len(), 3, "day {day} {}", item.label);
                assert!(item.children.iter().all(|c| c.children.is_empty()));
            }
        }
    }

    #[test]
    fn day_navigation_hrefs_follow_the_day() {
        let nav = build_day_navigation(7);
        let labels = nav.iter().map(|i| i.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, ["Content", "Code Examples", "Exercise", "Solution"]);

        assert_eq!(nav[0].href, "/course/day-7");
        assert_eq!(nav[0].children[0].href, "/course/day-7#overview");
        assert_eq!(nav[0].children[1].href, "/course/day-7#concepts");
        assert_eq!(nav[0].children[2].href, "/course/day-7#details");

        assert_eq!(nav[1].href, "/course/day-7/code");
        assert_eq!(nav[1].children[2].href, "/course/day-7/code#real-world");

        assert_eq!(nav[2].children[0].href, "/course/day-7/exercise#instructions");
        assert_eq!(nav[2].children[1].href, "/course/day-7/exercise#criteria");
        assert_eq!(nav[2].children[2].href, "/course/day-7/exercise#hints");

        assert_eq!(nav[3].children[0].href, "/course/day-7/solution#code");
        assert_eq!(nav[3].children[2].href, "/course/day-7/solution#optimization");
    }

    #[test]
    fn day_navigation_is_deterministic() {
        assert_eq!(build_day_navigation(42), build_day_navigation(42));
        assert_ne!(build_day_navigation(42), build_day_navigation(43));
    }

    #[test]
    fn sidebar_marks_completed_days_and_phases() {
        let catalog = Catalog::reference();
        let completed = (1..=12).chain([13, 14, -3, 500]).collect::<CompletedDays>();

        let sidebar = build_course_sidebar(&catalog, &completed);
        assert_eq!(sidebar.len(), 5);
        assert!(sidebar.iter().all(|p| p.kind == NavItemType::Overview));

        assert_eq!(sidebar[0].href, "/phase-1");
        assert_eq!(sidebar[0].completed, Some(true));
        assert_eq!(sidebar[1].completed, Some(false));
        assert_eq!(sidebar[1].children[0].label, "Day 13");
        assert_eq!(sidebar[1].children[0].href, "/course/day-13");
        assert_eq!(sidebar[1].children[1].completed, Some(true));
        assert_eq!(sidebar[1].children[2].completed, Some(false));

        let day_count = sidebar.iter().map(|p| p.children.len()).sum::<usize>();
        assert_eq!(day_count, 60);
    }
}
