use url::Url;

use crate::catalog::Catalog;
use crate::formats::BreadcrumbItem;
use crate::navigation::{day_href, phase_href};

const SECTION_LABELS: [(&str, &str); 3] = [
    ("code", "Code Examples"),
    ("exercise", "Exercise"),
    ("solution", "Solution"),
];

/// Builds the breadcrumb trail for a site path.
///
/// Always starts at `Home`. Only `/course/day-<n>[/<section>]` paths grow
/// beyond the root; anything else yields the root alone.
pub fn generate_breadcrumbs(catalog: &Catalog, path: &str) -> Vec<BreadcrumbItem> {
    let parts = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>();

    let mut crumbs = vec![BreadcrumbItem::new("Home", "/")];

    let day = match parts.as_slice() {
        ["course", day_segment, ..] => parse_day_segment(day_segment),
        _ => None,
    };
    let Some(day) = day else {
        return crumbs;
    };

    match catalog.phase_for_day(day) {
        Some(phase) => crumbs.push(BreadcrumbItem::new(&phase.title, phase_href(phase.id))),
        None => tracing::debug!(day, "no phase owns day; omitting phase breadcrumb"),
    }

    crumbs.push(BreadcrumbItem::new(format!("Day {day}"), day_href(day)));

    if let Some(section) = parts.get(2) {
        let label = SECTION_LABELS
            .iter()
            .find(|(segment, _)| segment == section)
            .map_or(*section, |(_, label)| *label);
        crumbs.push(BreadcrumbItem::new(label, format!("/{}", parts.join("/"))));
    }

    crumbs
}

/// Reduces caller input to the path component: absolute URLs yield their
/// path, bare paths lose any query string or fragment.
pub fn request_path(input: &str) -> String {
    let input = input.trim();
    if let Ok(url) = Url::parse(input)
        && url.has_host()
    {
        return url.path().to_owned();
    }

    let end = input.find(['?', '#']).unwrap_or(input.len());
    input[..end].to_owned()
}

fn parse_day_segment(segment: &str) -> Option<u32> {
    let digits = segment.strip_prefix("day-")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumbs(path: &str) -> Vec<(String, String)> {
        generate_breadcrumbs(&Catalog::reference(), path)
            .into_iter()
            .map(|c| (c.label, c.href))
            .collect()
    }

    fn pair(label: &str, href: &str) -> (String, String) {
        (label.to_owned(), href.to_owned())
    }

    #[test]
    fn root_path_yields_only_home() {
        assert_eq!(crumbs("/"), vec![pair("Home", "/")]);
        assert_eq!(crumbs(""), vec![pair("Home", "/")]);
    }

    #[test]
    fn day_path_includes_phase_and_day() {
        assert_eq!(
            crumbs("/course/day-15"),
            vec![
                pair("Home", "/"),
                pair("Core Concepts", "/phase-2"),
                pair("Day 15", "/course/day-15"),
            ]
        );
    }

    #[test]
    fn known_section_uses_its_label() {
        assert_eq!(
            crumbs("/course/day-15/exercise"),
            vec![
                pair("Home", "/"),
                pair("Core Concepts", "/phase-2"),
                pair("Day 15", "/course/day-15"),
                pair("Exercise", "/course/day-15/exercise"),
            ]
        );
        assert_eq!(crumbs("/course/day-1/code")[3], pair("Code Examples", "/course/day-1/code"));
        assert_eq!(
            crumbs("/course/day-60/solution")[3],
            pair("Solution", "/course/day-60/solution")
        );
    }

    #[test]
    fn unknown_section_uses_raw_segment_and_full_path() {
        assert_eq!(
            crumbs("/course/day-3/notes/extra"),
            vec![
                pair("Home", "/"),
                pair("Foundations", "/phase-1"),
                pair("Day 3", "/course/day-3"),
                pair("notes", "/course/day-3/notes/extra"),
            ]
        );
    }

    #[test]
    fn empty_segments_are_ignored() {
        assert_eq!(crumbs("//course///day-15//"), crumbs("/course/day-15"));
    }

    #[test]
    fn day_without_phase_skips_phase_crumb() {
        assert_eq!(
            crumbs("/course/day-0"),
            vec![pair("Home", "/"), pair("Day 0", "/course/day-0")]
        );
        assert_eq!(
            crumbs("/course/day-999/code"),
            vec![
                pair("Home", "/"),
                pair("Day 999", "/course/day-999"),
                pair("Code Examples", "/course/day-999/code"),
            ]
        );
    }

    #[test]
    fn malformed_paths_degrade_to_home() {
        for path in [
            "/course",
            "/course/day-",
            "/course/day-abc",
            "/course/day--1",
            "/course/day-+3",
            "/course/week-2",
            "/blog/day-3",
            "/course/day-99999999999999999999",
        ] {
            assert_eq!(crumbs(path), vec![pair("Home", "/")], "{path}");
        }
    }

    #[test]
    fn request_path_strips_url_parts() {
        assert_eq!(
            request_path("https://course.example.com/course/day-15/code?tab=2#basic"),
            "/course/day-15/code"
        );
        assert_eq!(request_path("/course/day-3?x=1"), "/course/day-3");
        assert_eq!(request_path("/course/day-3#hints"), "/course/day-3");
        assert_eq!(request_path(" /course/day-3 "), "/course/day-3");
        assert_eq!(request_path(""), "");
    }

    #[test]
    fn breadcrumbs_are_idempotent() {
        let catalog = Catalog::reference();
        assert_eq!(
            generate_breadcrumbs(&catalog, "/course/day-20/exercise"),
            generate_breadcrumbs(&catalog, "/course/day-20/exercise")
        );
    }
}
