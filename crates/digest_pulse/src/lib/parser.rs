//! # Video metadata parsers
//!
//! Pure text-to-data helpers for the two wire formats the pipeline reads:
//! ISO-8601 content durations from the video metadata API, and timedtext
//! XML caption tracks.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Error;

/// Converts an ISO-8601 duration (`PT1H2M3S`, `P1DT2H`, ...) to seconds.
///
/// Returns `None` for anything that is not a well-formed duration. The
/// caller treats an unparseable duration the same as a missing one.
pub fn parse_iso8601_duration(value: &str) -> Option<u64> {
    let rest = value.strip_prefix('P')?;

    let mut seconds = 0u64;
    let mut in_time = false;
    let mut digits = String::new();

    for c in rest.chars() {
        match c {
            'T' if !in_time => in_time = true,
            '0'..='9' => digits.push(c),
            unit => {
                let n: u64 = digits.parse().ok()?;
                digits.clear();
                let multiplier = match (unit, in_time) {
                    ('W', false) => 604_800,
                    ('D', false) => 86_400,
                    ('H', true) => 3_600,
                    ('M', true) => 60,
                    ('S', true) => 1,
                    _ => return None,
                };
                seconds += n * multiplier;
            }
        }
    }

    // trailing digits with no unit designator
    if !digits.is_empty() {
        return None;
    }

    Some(seconds)
}

/// Flattens a timedtext XML caption track into plain transcript text.
///
/// Each `<text>` cue becomes one line; all timing attributes and markup are
/// dropped. Cue bodies arrive double-escaped (`&amp;#39;`), so entities are
/// unescaped twice.
pub fn parse_timedtext(xml: &str) -> Result<String, Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut in_cue = false;
    let mut lines: Vec<String> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"text" => in_cue = true,
            Ok(Event::End(e)) if e.name().as_ref() == b"text" => in_cue = false,
            Ok(Event::Text(e)) if in_cue => {
                let cue = e.unescape().unwrap_or_default();
                let cue = quick_xml::escape::unescape(&cue)
                    .map(|c| c.into_owned())
                    .unwrap_or_else(|_| cue.into_owned());
                if !cue.is_empty() {
                    lines.push(cue);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}
