//! # Summary section extraction
//!
//! The language model is instructed to emit five named sections, but the
//! output is free text and the heading rendering drifts between runs. This
//! module slices the raw summary into per-section bodies by heading-pattern
//! matching, tolerating the renderings the model actually produces.

use regex::Regex;

/// Section labels in document order. Each heading's body ends where the
/// next heading begins.
pub const SECTION_HEADINGS: [&str; 5] = [
    "Overview",
    "Key Points",
    "Practical Takeaways",
    "Notable Quotes or Examples",
    "Recommended Actions",
];

/// Placeholder body when a heading cannot be located in the summary text.
pub const FALLBACK_TEXT: &str = "Not available";

/// Matches a heading in any of the renderings the model emits:
/// `1. **Title:**`, `### Title`, `**Title**`, `Title:`.
fn heading_regex(title: &str) -> Regex {
    let pattern = format!(
        r"(?i)(?:###\s*|\d+\.\s*)?\*{{0,2}}{}\*{{0,2}}:?\*{{0,2}}\s*:?",
        regex::escape(title)
    );
    Regex::new(&pattern).expect("escaped heading pattern is a valid regex")
}

/// Returns the body between `title`'s heading and `next_title`'s heading,
/// or end-of-text when `next_title` is `None` or absent.
///
/// Bodies span newlines, so multi-paragraph sections come out whole. A
/// missing heading yields [`FALLBACK_TEXT`] instead of an error.
pub fn extract_section(text: &str, title: &str, next_title: Option<&str>) -> String {
    let Some(start) = heading_regex(title).find(text) else {
        return FALLBACK_TEXT.to_string();
    };

    let body_start = start.end();
    let body_end = next_title
        .and_then(|next| heading_regex(next).find_at(text, body_start))
        .map_or(text.len(), |m| m.start());

    tidy(&text[body_start..body_end])
}

/// Extracts every section of [`SECTION_HEADINGS`] in order.
pub fn extract_all(text: &str) -> Vec<(&'static str, String)> {
    SECTION_HEADINGS
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let next = SECTION_HEADINGS.get(i + 1).copied();
            (*title, extract_section(text, title, next))
        })
        .collect()
}

/// Trims the body and rewrites `- ` list bullets into an HTML line-break
/// bullet rendering, collapsing any doubled glyph.
fn tidy(body: &str) -> String {
    body.trim().replace("- ", "<br>• ").replace("• •", "•")
}
