//! Shared query parameter helpers for API handlers.

/// Parse a comma-separated `skills` query value into a filter list.
///
/// Blank entries are dropped; an empty or all-blank value means no filter.
pub fn parse_skills(raw: Option<&str>) -> Option<Vec<String>> {
    let skills: Vec<String> = raw?
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if skills.is_empty() {
        None
    } else {
        Some(skills)
    }
}
