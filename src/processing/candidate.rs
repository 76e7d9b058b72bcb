//! Candidate display names

/// Returned when a resume has no text to take a name from
pub const NAME_NOT_FOUND: &str = "Name not found";

/// First non-empty line of the resume, trimmed.
///
/// A best-effort heuristic: resumes that open with a heading or contact line
/// get that line as their name.
pub fn candidate_name(text: &str) -> String {
    text.trim()
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| NAME_NOT_FOUND.to_string())
}
