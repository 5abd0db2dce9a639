use std::fmt;

use serde::Serialize;

use crate::category::Category;
use crate::error::PagefreqError;
use crate::frequency::FrequencyTable;
use crate::report::Report;

/// Shown in place of an empty category list.
pub const NO_WORDS: &str = "no words found";
/// Shown in place of an empty phrase list.
pub const NO_PHRASES: &str = "no phrases found";

/// Plain-text view of a report, limited to the `top_k` entries per table.
pub struct TextReport<'a> {
    pub report: &'a Report,
    pub top_k: usize,
}

fn write_top(
    f: &mut fmt::Formatter<'_>,
    table: &FrequencyTable,
    top_k: usize,
    empty: &str,
) -> fmt::Result {
    if table.is_empty() {
        return writeln!(f, "    ({empty})");
    }
    for (key, count) in table.most_common(top_k) {
        writeln!(f, "    {key}: {count}")?;
    }
    Ok(())
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Analysis for {} ==", self.report.url())?;
        writeln!(f)?;
        writeln!(f, "Word counts by category:")?;
        for c in self.report.categories() {
            writeln!(f, "  {}: {} words", c.category, c.total)?;
            write_top(f, &c.words, self.top_k, NO_WORDS)?;
        }
        writeln!(f)?;
        writeln!(f, "Phrase counts:")?;
        for p in self.report.phrases() {
            writeln!(f, "  {}-word phrases:", p.n)?;
            write_top(f, &p.phrases, self.top_k, NO_PHRASES)?;
        }
        Ok(())
    }
}

/// Render `report` as a titled text section.
pub fn render_text(report: &Report, top_k: usize) -> String {
    TextReport { report, top_k }.to_string()
}

/// Text shown for a URL that could not be analyzed.
pub fn render_failure(url: &str, err: &PagefreqError) -> String {
    format!("== Analysis for {url} ==\nerror: {err}\n")
}

/// One table in a JSON report, limited to its top entries.
#[derive(Serialize)]
struct JsonTable<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    n: Option<usize>,
    total: usize,
    distinct: usize,
    top: Vec<(&'a str, usize)>,
}

impl<'a> JsonTable<'a> {
    fn new(table: &'a FrequencyTable, top_k: usize) -> Self {
        Self {
            category: None,
            selector: None,
            n: None,
            total: table.total(),
            distinct: table.len(),
            top: table.most_common(top_k),
        }
    }
}

/// One JSON line: a report, or the error that replaced it.
#[derive(Serialize)]
struct JsonLine<'a> {
    url: &'a str,
    ok: bool,
    categories: Option<Vec<JsonTable<'a>>>,
    phrases: Option<Vec<JsonTable<'a>>>,
    error: Option<String>,
}

/// Render `report` as one line of JSON with `top_k` entries per table.
pub fn render_json(report: &Report, top_k: usize) -> serde_json::Result<String> {
    let categories = report
        .categories()
        .iter()
        .map(|c| JsonTable {
            category: Some(c.category),
            selector: Some(c.category.selector().css()),
            ..JsonTable::new(&c.words, top_k)
        })
        .collect();
    let phrases = report
        .phrases()
        .iter()
        .map(|p| JsonTable {
            n: Some(p.n),
            ..JsonTable::new(&p.phrases, top_k)
        })
        .collect();
    serde_json::to_string(&JsonLine {
        url: report.url(),
        ok: true,
        categories: Some(categories),
        phrases: Some(phrases),
        error: None,
    })
}

/// JSON line for a URL that could not be analyzed.
pub fn render_json_failure(url: &str, err: &PagefreqError) -> serde_json::Result<String> {
    serde_json::to_string(&JsonLine {
        url,
        ok: false,
        categories: None,
        phrases: None,
        error: Some(err.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn sample() -> Report {
        Report::from_html(
            "https://example.com",
            "<body><a>Click here</a><p>Plain text</p></body>",
        )
    }

    #[test]
    fn test_text_sections() {
        let out = render_text(&sample(), 10);
        let expected = "\
== Analysis for https://example.com ==

Word counts by category:
  Linked Words: 2 words
    click: 1
    here: 1
  Unlinked Words: 2 words
    plain: 1
    text: 1
  Footer Linked Words: 0 words
    (no words found)
  Footer Unlinked Words: 0 words
    (no words found)
  Navigation Linked Words: 0 words
    (no words found)
  Navigation Unlinked Words: 0 words
    (no words found)
  Body Words: 4 words
    click: 1
    here: 1
    plain: 1
    text: 1
  Body Unlinked Words: 2 words
    plain: 1
    text: 1

Phrase counts:
  1-word phrases:
    click: 1
    here: 1
    plain: 1
    text: 1
  2-word phrases:
    click here: 1
    here plain: 1
    plain text: 1
  3-word phrases:
    click here plain: 1
    here plain text: 1
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_text_top_k_limits_lists() {
        let r = Report::from_html("u", "<p>a b c d e a</p>");
        let out = render_text(&r, 2);
        assert!(out.contains("  Unlinked Words: 6 words\n    a: 2\n    b: 1\n  Footer"));
    }

    #[test]
    fn test_text_no_phrases() {
        let r = Report::from_html("u", "<p>single</p>");
        let out = render_text(&r, 10);
        assert!(out.contains("  2-word phrases:\n    (no phrases found)\n"));
        assert!(out.contains("  3-word phrases:\n    (no phrases found)\n"));
    }

    #[test]
    fn test_failure_names_url_and_cause() {
        let err = PagefreqError::Status {
            url: "https://down.example".into(),
            status: 503,
        };
        let out = render_failure("https://down.example", &err);
        assert!(out.contains("https://down.example"));
        assert!(out.contains("HTTP 503"));
    }

    fn parse(line: serde_json::Result<String>) -> Value {
        serde_json::from_str(&line.unwrap()).unwrap()
    }

    #[test]
    fn test_json_report() {
        let v = parse(render_json(&sample(), 1));
        assert_eq!(v["url"], "https://example.com");
        assert_eq!(v["ok"], true);
        assert_eq!(v["error"], Value::Null);
        assert_eq!(v["categories"].as_array().unwrap().len(), 8);
        assert_eq!(v["categories"][0]["category"], "Linked Words");
        assert_eq!(v["categories"][0]["selector"], "a");
        assert_eq!(v["categories"][0]["total"], 2);
        assert_eq!(v["categories"][0]["distinct"], 2);
        assert_eq!(v["categories"][0]["top"], json!([["click", 1]]));
        assert_eq!(v["categories"][3]["selector"], "footer :not(a)");
        assert_eq!(v["categories"][2]["top"], json!([]));
        assert_eq!(v["phrases"][1]["n"], 2);
        assert_eq!(v["phrases"][1]["total"], 3);
        assert!(v["phrases"][1].get("category").is_none());
    }

    #[test]
    fn test_json_is_single_line() {
        let line = render_json(&sample(), 10).unwrap();
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_json_failure() {
        let err = PagefreqError::InvalidUrl {
            url: "nope".into(),
            reason: "relative URL without a base".into(),
        };
        let v = parse(render_json_failure("nope", &err));
        assert_eq!(v["ok"], false);
        assert_eq!(v["url"], "nope");
        assert_eq!(v["categories"], Value::Null);
        assert!(v["error"].as_str().unwrap().contains("nope"));
    }
}
