//! Assembles converter outputs into replies for a chat frontend.
//!
//! Two shapes are produced: a single message listing every conversion under
//! its label, bounded by a character budget, and one inline result per
//! converter whose description is a byte-bounded preview of the content.

use serde::Serialize;
use tracing::debug;

use crate::converter::Converter;
use crate::settings::settings;

/// One conversion result, labelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendition {
    pub id: &'static str,
    pub label: &'static str,
    pub output: String,
}

/// Inline query answer for one converter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineResult {
    pub id: String,
    pub title: &'static str,
    pub content: String,
    pub description: String,
}

/// Run every converter over `text`, in order.
pub fn render_all(text: &str, converters: &[Converter]) -> Vec<Rendition> {
    converters
        .iter()
        .map(|&c| Rendition {
            id: c.id(),
            label: c.label(),
            output: c.apply(text),
        })
        .collect()
}

/// Whether a chat message should be answered at all: empty text and bot
/// commands (`/start`, `/help@bot`) are ignored.
pub fn should_reply(text: &str) -> bool {
    !text.is_empty() && !text.starts_with('/')
}

/// Lay out `"\n" + label + "\n" + output + "\n"` for each converter while the
/// running character count stays strictly below `max_chars`.
///
/// Stops at the first block that does not fit. Returns `None` when not even
/// the first block fits.
pub fn render_message(text: &str, converters: &[Converter], max_chars: usize) -> Option<String> {
    let mut out = String::new();
    let mut used = 0;
    for rendition in render_all(text, converters) {
        let block_len =
            1 + rendition.label.chars().count() + 1 + rendition.output.chars().count() + 1;
        if used + block_len >= max_chars {
            debug!(converter = rendition.id, used, block_len, "message budget exhausted");
            break;
        }
        used += block_len;
        out.push('\n');
        out.push_str(rendition.label);
        out.push('\n');
        out.push_str(&rendition.output);
        out.push('\n');
    }
    (!out.is_empty()).then_some(out)
}

/// Reply for a chat message using the global settings, or `None` when the
/// message should be ignored.
pub fn reply_to_message(text: &str) -> Option<String> {
    if !should_reply(text) {
        return None;
    }
    let s = settings();
    Some(
        render_message(text, s.converters(), s.message.max_chars)
            .unwrap_or_else(|| s.message.too_long.clone()),
    )
}

/// Longest prefix of `s` that is at most `max_bytes` long and ends on a char
/// boundary.
pub fn truncate_to_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// One inline result per converter; none for an empty query.
pub fn inline_results(
    query_id: &str,
    query: &str,
    converters: &[Converter],
    max_desc_bytes: usize,
) -> Vec<InlineResult> {
    if query.is_empty() {
        return Vec::new();
    }
    render_all(query, converters)
        .into_iter()
        .map(|r| InlineResult {
            id: format!("{query_id}{}", r.id),
            title: r.label,
            description: truncate_to_char_boundary(&r.output, max_desc_bytes).to_string(),
            content: r.output,
        })
        .collect()
}

/// [`inline_results`] with the configured converters and description limit.
pub fn answer_inline_query(query_id: &str, query: &str) -> Vec<InlineResult> {
    let s = settings();
    inline_results(query_id, query, s.converters(), s.inline.description_max_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_lists_every_converter() {
        let msg = render_message("か", &Converter::ALL, 4096).unwrap();
        assert_eq!(
            msg,
            "\n濁点（結合文字）\nが\n\n半濁点（結合文字）\nか\u{309A}\n\nSpaces\nか\n\nFullwidth Spaces\nか\n\n濁点\nか゛\n\n半濁点\nか゜\n"
        );
    }

    #[test]
    fn message_stops_at_budget() {
        // First block: 1 + 8 + 1 + 1 + 1 = 12 chars.
        let msg = render_message("か", &Converter::ALL, 13).unwrap();
        assert_eq!(msg, "\n濁点（結合文字）\nが\n");
        // The bound is strict.
        assert_eq!(render_message("か", &Converter::ALL, 12), None);
    }

    #[test]
    fn message_budget_counts_chars_not_bytes() {
        let text = "あ".repeat(10);
        let msg = render_message(&text, &[Converter::HalfwidthSpaces], 1 + 6 + 1 + 19 + 1 + 1)
            .unwrap();
        assert_eq!(msg.chars().count(), 28);
    }

    #[test]
    fn reply_ignores_commands_and_empty() {
        assert_eq!(reply_to_message(""), None);
        assert_eq!(reply_to_message("/start"), None);
        assert!(reply_to_message("か").is_some());
    }

    #[test]
    fn reply_reports_too_long() {
        let text = "か".repeat(5000);
        assert_eq!(reply_to_message(&text).as_deref(), Some("Input is too long!"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_to_char_boundary("abc", 64), "abc");
        assert_eq!(truncate_to_char_boundary("abc", 2), "ab");
        // Each kana is three bytes.
        assert_eq!(truncate_to_char_boundary("かきく", 7), "かき");
        assert_eq!(truncate_to_char_boundary("かきく", 6), "かき");
        assert_eq!(truncate_to_char_boundary("かきく", 2), "");
    }

    #[test]
    fn inline_results_per_converter() {
        let results = inline_results("q1", "は", &Converter::ALL, 64);
        assert_eq!(results.len(), 6);
        assert_eq!(results[0].id, "q1dc");
        assert_eq!(results[0].title, "濁点（結合文字）");
        assert_eq!(results[0].content, "ば");
        assert_eq!(results[0].description, "ば");
        assert_eq!(results[5].id, "q1he");
        assert_eq!(results[5].content, "は゜");
    }

    #[test]
    fn inline_description_is_truncated() {
        let query = "か".repeat(40);
        let results = inline_results("q", &query, &[Converter::ExternalDakuon], 64);
        // か゛ is six bytes; ten pairs plus one more か fit in 64 bytes.
        assert_eq!(results[0].description.len(), 63);
        assert_eq!(results[0].content.chars().count(), 80);
    }

    #[test]
    fn inline_empty_query() {
        assert!(inline_results("q", "", &Converter::ALL, 64).is_empty());
        assert!(answer_inline_query("q", "").is_empty());
    }
}
