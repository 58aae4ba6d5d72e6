//! HTML rendering for the heartbeat and summary emails.

use std::sync::LazyLock;

use regex::Regex;

use crate::{sections, types::VideoRef};

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"));

pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

pub fn render_heartbeat() -> RenderedEmail {
    let now = chrono::Utc::now().format("%Y-%m-%d %H:%M");
    RenderedEmail {
        subject: "Digest pipeline ran".to_string(),
        html: format!("<p>The digest pipeline ran at {now} UTC</p>"),
    }
}

pub fn render_summary(video: &VideoRef, summary: &str) -> RenderedEmail {
    let clean_summary = normalize_summary(summary);
    let clean_title = unescape_title(&video.title);

    // Sections are cut out while the markdown emphasis around headings is
    // still intact; the bold rewrite happens per body afterwards.
    let section_html = sections::extract_all(&clean_summary)
        .into_iter()
        .map(|(title, body)| {
            let body = BOLD_RE.replace_all(&body, "<strong>$1</strong>");
            format!("        <p><strong>{title}</strong><br>{body}</p>")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let html = format!(
        r#"<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6;">
    <h2>New Video Summary</h2>
    <p><strong>Title:</strong> {clean_title}</p>
    <p><a href="{url}" style="color: #0066cc;">Watch here</a></p>

    <h3>Summary:</h3>
    <div style="margin-left: 20px;">
{section_html}
    </div>
</body>
</html>
"#,
        url = video.url,
    );

    RenderedEmail {
        subject: format!("New Video Summary: {clean_title}"),
        html,
    }
}

/// Removes non-breaking spaces and any non-ASCII character.
fn normalize_summary(summary: &str) -> String {
    summary
        .replace('\u{a0}', " ")
        .chars()
        .filter(char::is_ascii)
        .collect()
}

/// Video titles arrive HTML-escaped from the metadata API.
fn unescape_title(title: &str) -> String {
    quick_xml::escape::unescape(title)
        .map(|t| t.into_owned())
        .unwrap_or_else(|_| title.to_string())
}
