//! Markdown-flavored completion text to HTML for the output pane.
//!
//! The completion endpoint returns prose with markdown-ish constructs
//! (headings, emphasis, code spans, pipe tables, lists). This module rewrites
//! that text into the small HTML subset the FLTK `HelpView` widget renders.
//!
//! The rewrites are an ordered chain of independent text transforms, and the
//! order is load-bearing:
//!
//! - bold runs before italic so `**` pairs are consumed before single `*`
//! - `###`/`##`/`#` headings match longest prefix first
//! - list markers are normalized before lines are wrapped into row markup
//!
//! Formatting never fails: malformed or partial markdown is left as literal
//! text rather than rejected.

use regex_lite::{Captures, Regex};
use std::sync::LazyLock;

/// A pipe table: header row, separator row of dashes/colons, then one or
/// more data rows. Every row, including the last, must end with a newline;
/// a header plus separator with no data rows is left as plain text.
static TABLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\|(.+)\|\n\|(?:[-:]+\|)+\n((?:\|.*\|\n)+)")
        .expect("table pattern is valid")
});

/// `- item` or `* item` at line start, with optional indentation.
static BULLET_ITEM_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*[-*][ \t]+(.*)$").expect("bullet item pattern is valid")
});

/// A line carrying a list marker: either the bullet produced by
/// [`BULLET_ITEM_PATTERN`] or a numeric `1.` marker, which passes through
/// with its number intact. Matching is anchored to line start so decimal
/// numbers mid-sentence are never mistaken for list items.
static LIST_ROW_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(•|\d+\.)[ \t]+(.*)$").expect("list row pattern is valid")
});

static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

static ITALIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern is valid"));

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code pattern is valid"));

static H3_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").expect("h3 pattern is valid"));

static H2_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").expect("h2 pattern is valid"));

static H1_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").expect("h1 pattern is valid"));

/// Any markup tag, including a dangling unterminated one at end of input.
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>?").expect("tag pattern is valid"));

/// Rewrite completion text into HTML for the output pane.
///
/// Pure and infallible; empty input yields an empty paragraph.
///
/// # Examples
///
/// ```
/// use explain_pad::app::formatter::format_markdown;
///
/// assert_eq!(format_markdown("plain words"), "<p>plain words</p>");
/// assert_eq!(format_markdown("# Title"), "<h1>Title</h1>");
/// ```
pub fn format_markdown(raw: &str) -> String {
    // Tables first: their rows would otherwise be chewed up by the
    // line-oriented rules below.
    let formatted = TABLE_PATTERN.replace_all(raw, |caps: &Captures| table_to_html(caps));

    // Normalize `-`/`*` items to a bullet, then wrap bullet and numeric
    // markers into two-slot rows.
    let formatted = BULLET_ITEM_PATTERN.replace_all(&formatted, "• $1");
    let formatted = LIST_ROW_PATTERN.replace_all(
        &formatted,
        "<div class=\"list-row\"><span class=\"list-marker\">$1</span><span>$2</span></div>",
    );

    let formatted = BOLD_PATTERN.replace_all(&formatted, "<strong>$1</strong>");
    let formatted = ITALIC_PATTERN.replace_all(&formatted, "<em>$1</em>");
    let formatted = CODE_PATTERN.replace_all(&formatted, "<code>$1</code>");

    // Longest heading prefix first.
    let formatted = H3_PATTERN.replace_all(&formatted, "<h3>$1</h3>");
    let formatted = H2_PATTERN.replace_all(&formatted, "<h2>$1</h2>");
    let formatted = H1_PATTERN.replace_all(&formatted, "<h1>$1</h1>");

    // Blank lines become paragraph boundaries.
    let formatted = formatted.replace("\n\n", "</p><p>");

    if formatted.starts_with('<') {
        formatted
    } else {
        format!("<p>{formatted}</p>")
    }
}

/// Strip all markup tags, leaving plain text. Used for the export file.
pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

fn table_to_html(caps: &Captures) -> String {
    let headers: Vec<&str> = caps[1]
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect();

    let mut html = String::from("<table border=\"1\"><thead><tr>");
    for header in &headers {
        html.push_str("<th>");
        html.push_str(header);
        html.push_str("</th>");
    }
    html.push_str("</tr></thead><tbody>");

    for row in caps[2].trim().lines() {
        html.push_str("<tr>");
        // A pipe-delimited row splits into an empty leading field, the
        // cells, and an empty trailing field; keep only cells that fall
        // under a header column.
        for (index, cell) in row.split('|').enumerate() {
            if index == 0 || index > headers.len() {
                continue;
            }
            html.push_str("<td>");
            html.push_str(cell.trim());
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_paragraph() {
        assert_eq!(format_markdown(""), "<p></p>");
    }

    #[test]
    fn test_bold() {
        let html = format_markdown("**bold**");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(!html.contains('*'));
    }

    #[test]
    fn test_italic_after_bold() {
        let html = format_markdown("**b** and *i*");
        assert!(html.contains("<strong>b</strong>"));
        assert!(html.contains("<em>i</em>"));
    }

    #[test]
    fn test_inline_code() {
        let html = format_markdown("run `cargo build` now");
        assert!(html.contains("<code>cargo build</code>"));
        assert!(!html.contains('`'));
    }

    #[test]
    fn test_headings_by_prefix_length() {
        let top = format_markdown("# Title");
        assert_eq!(top, "<h1>Title</h1>");

        let sub = format_markdown("### Sub");
        assert_eq!(sub, "<h3>Sub</h3>");

        assert_ne!(top, sub);
    }

    #[test]
    fn test_bullet_list_row() {
        let html = format_markdown("- item one");
        assert!(html.contains("•"));
        assert!(html.contains("<span>item one</span>"));
        assert!(html.contains("list-row"));
    }

    #[test]
    fn test_numbered_list_row_keeps_marker() {
        let html = format_markdown("2. second");
        assert!(html.contains("2."));
        assert!(html.contains("<span>second</span>"));
    }

    #[test]
    fn test_decimal_mid_sentence_is_not_a_list() {
        let html = format_markdown("Pi is 3.14 today");
        assert_eq!(html, "<p>Pi is 3.14 today</p>");
    }

    #[test]
    fn test_table_two_by_two() {
        let input = "| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\n";
        let html = format_markdown(input);

        assert_eq!(html.matches("<th>").count(), 2);
        assert!(html.contains("<th>A</th>"));
        assert!(html.contains("<th>B</th>"));

        // Header row plus two body rows.
        assert_eq!(html.matches("<tr>").count(), 3);
        assert_eq!(html.matches("<td>").count(), 4);
        for cell in ["<td>1</td>", "<td>2</td>", "<td>3</td>", "<td>4</td>"] {
            assert!(html.contains(cell), "missing {cell} in {html}");
        }
    }

    #[test]
    fn test_table_bounds_rows_to_header_width() {
        let input = "| A | B |\n|---|---|\n| 1 | 2 | 3 | 4 |\n";
        let html = format_markdown(input);
        assert_eq!(html.matches("<td>").count(), 2);
        assert!(!html.contains("<td>3</td>"));
    }

    #[test]
    fn test_table_without_data_rows_stays_text() {
        let input = "|A|B|\n|---|---|\nno rows here";
        let html = format_markdown(input);
        assert!(html.contains("|A|B|"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_paragraph_breaks() {
        let html = format_markdown("one\n\ntwo");
        assert_eq!(html, "<p>one</p><p>two</p>");
    }

    #[test]
    fn test_plain_prose_is_wrapped_once() {
        let html = format_markdown("just words");
        assert_eq!(html, "<p>just words</p>");
    }

    #[test]
    fn test_leading_markup_is_not_rewrapped() {
        let html = format_markdown("# Title\nbody");
        assert!(html.starts_with("<h1>"));
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p><strong>hi</strong> there</p>"), "hi there");
        assert_eq!(strip_tags("no tags at all"), "no tags at all");
        // Dangling unterminated tag at end of input is dropped too.
        assert_eq!(strip_tags("done<p"), "done");
    }

    #[test]
    fn test_strip_tags_of_formatted_output() {
        let html = format_markdown("# Title\n\n- item one");
        let plain = strip_tags(&html);
        assert!(plain.contains("Title"));
        assert!(plain.contains("item one"));
        assert!(!plain.contains('<'));
    }
}
