use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::cli::ExtractArgs;
use crate::error::VocabError;

/// One vocabulary entry, in the exact shape persisted to the store.
///
/// `id` is the record's position among data rows at parse time and is
/// never reassigned. `seen` only ever flips false -> true, when the
/// record is picked for a weekly batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VocabRecord {
    pub kanji: String,
    pub furigana: String,
    pub romaji: String,
    pub meaning: String,
    pub id: u32,
    pub seen: bool,
}

/// Declared column schema for a data row: cell position N feeds the
/// field named here at position N.
const COLUMNS: [&str; 4] = ["kanji", "furigana", "romaji", "meaning"];

/// Parse the vocabulary page into records.
///
/// Every `<tr>` in the document is a row; each row's `<td>`/`<th>` cells
/// are flattened to plain text and read positionally as
/// `[kanji, furigana, romaji, meaning]`. The first row is the column
/// header and is dropped before ids are assigned, so data rows are
/// numbered `0..n` in document order. A data row whose cell count does
/// not match the schema fails the whole parse rather than misaligning
/// fields silently.
pub fn records(html: &str) -> Result<Vec<VocabRecord>, VocabError> {
    let lower = ascii_lowercase(html);

    let mut rows = Vec::new();
    let mut from = 0;
    while let Some(span) = next_tag_block(html, &lower, "tr", from) {
        rows.push(&html[span.start..span.end]);
        from = span.resume;
    }

    let mut out = Vec::new();
    for (idx, row) in rows.iter().skip(1).enumerate() {
        let cells = row_cells(row);
        if cells.len() != COLUMNS.len() {
            return Err(VocabError::MalformedRow {
                row: idx,
                cells: cells.len(),
            });
        }

        let mut cells = cells.into_iter();
        out.push(VocabRecord {
            kanji: cells.next().unwrap_or_default(),
            furigana: cells.next().unwrap_or_default(),
            romaji: cells.next().unwrap_or_default(),
            meaning: cells.next().unwrap_or_default(),
            id: idx as u32,
            seen: false,
        });
    }

    Ok(out)
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let input_path = Path::new(&args.input);
    let out_path = Path::new(&args.out);
    if out_path.exists() {
        anyhow::bail!("store output already exists: {}", out_path.display());
    }

    let html = std::fs::read_to_string(input_path)
        .with_context(|| format!("read raw page: {}", input_path.display()))?;
    let records = records(&html).context("parse vocabulary table")?;
    if records.is_empty() {
        anyhow::bail!("no vocabulary rows found in {}", input_path.display());
    }

    tracing::info!(count = records.len(), "extracted vocabulary records");
    crate::store::save(out_path, &records).context("save store")?;
    Ok(())
}

struct TagSpan {
    /// Byte offset of the inner content, just past the opening tag's `>`.
    start: usize,
    /// Byte offset of the matching close tag.
    end: usize,
    /// Byte offset just past the close tag; next scan resumes here.
    resume: usize,
}

/// Find the next `<tag ...>...</tag>` block at or after `from`.
///
/// `lower` must be the ASCII-lowercased copy of `s` (byte offsets line
/// up because non-ASCII chars are left untouched). Tag matching is
/// case-insensitive and tolerates attributes; nested same-name tags are
/// not handled, which real vocabulary tables do not need.
fn next_tag_block(s: &str, lower: &str, tag: &str, from: usize) -> Option<TagSpan> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");

    let mut at = from;
    let open_at = loop {
        let hit = lower.get(at..)?.find(&open)? + at;
        let next = lower[hit + open.len()..].chars().next()?;
        if next == '>' || next == '/' || next.is_ascii_whitespace() {
            break hit;
        }
        // Prefix collision, e.g. `<track>` while scanning for `<tr>`.
        at = hit + open.len();
    };

    let start = s[open_at..].find('>')? + open_at + 1;
    let end = lower[start..].find(&close)? + start;
    Some(TagSpan {
        start,
        end,
        resume: end + close.len(),
    })
}

/// Flattened text of each `<td>`/`<th>` cell in a row block, in order.
fn row_cells(row: &str) -> Vec<String> {
    let lower = ascii_lowercase(row);

    let mut cells = Vec::new();
    let mut from = 0;
    loop {
        let td = next_tag_block(row, &lower, "td", from);
        let th = next_tag_block(row, &lower, "th", from);

        let span = match (td, th) {
            (Some(td), Some(th)) => {
                if th.start < td.start {
                    th
                } else {
                    td
                }
            }
            (Some(td), None) => td,
            (None, Some(th)) => th,
            (None, None) => break,
        };

        cells.push(cell_text(&row[span.start..span.end]));
        from = span.resume;
    }
    cells
}

fn cell_text(cell: &str) -> String {
    normalize_ws(&decode_entities(&strip_tags(cell)))
}

fn ascii_lowercase(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!doctype html>
<html>
  <body>
    <h1>JLPT N5 vocabulary</h1>
    <table>
      <tr><th>Kanji</th><th>Furigana</th><th>Romaji</th><th>Meaning</th></tr>
      <TR class="odd">
        <td><strong>会う</strong></td>
        <td>あう</td>
        <td>au</td>
        <td>to meet</td>
      </TR>
      <tr><td>青</td><td>あお</td><td>ao</td><td>blue</td></tr>
      <tr><td>赤い</td><td>あかい</td><td>akai</td><td>red</td></tr>
    </table>
  </body>
</html>
"#;

    #[test]
    fn header_row_is_dropped_before_numbering() -> anyhow::Result<()> {
        let records = records(PAGE)?;

        assert_eq!(records.len(), 3);
        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(records.iter().all(|r| r.kanji != "Kanji"));
        assert!(records.iter().all(|r| !r.seen));

        assert_eq!(records[0].kanji, "会う");
        assert_eq!(records[0].furigana, "あう");
        assert_eq!(records[0].romaji, "au");
        assert_eq!(records[0].meaning, "to meet");
        assert_eq!(records[2].kanji, "赤い");
        Ok(())
    }

    #[test]
    fn short_row_fails_the_whole_parse() {
        let page = "<table>\
            <tr><th>a</th><th>b</th><th>c</th><th>d</th></tr>\
            <tr><td>青</td><td>あお</td><td>ao</td><td>blue</td></tr>\
            <tr><td>青</td><td>あお</td></tr>\
            </table>";

        let err = records(page).unwrap_err();
        assert!(matches!(err, VocabError::MalformedRow { row: 1, cells: 2 }));
    }

    #[test]
    fn extra_cells_fail_the_whole_parse() {
        let page = "<table>\
            <tr><th>h</th></tr>\
            <tr><td>a</td><td>b</td><td>c</td><td>d</td><td>e</td></tr>\
            </table>";

        let err = records(page).unwrap_err();
        assert!(matches!(err, VocabError::MalformedRow { row: 0, cells: 5 }));
    }

    #[test]
    fn markup_and_entities_are_flattened() {
        let page = "<table>\
            <tr><th>h</th></tr>\
            <tr><td> <em>A&amp;B</em>\n</td><td>&nbsp;x </td><td>y</td><td>z&#39;s</td></tr>\
            </table>";

        let records = records(page).expect("parse");
        assert_eq!(records[0].kanji, "A&B");
        assert_eq!(records[0].furigana, "x");
        assert_eq!(records[0].meaning, "z's");
    }

    #[test]
    fn page_without_rows_yields_no_records() -> anyhow::Result<()> {
        assert!(records("<html><body>nothing here</body></html>")?.is_empty());
        Ok(())
    }

    #[test]
    fn track_tag_is_not_mistaken_for_a_row() -> anyhow::Result<()> {
        let page = "<track src=\"x\"></track>\
            <table><tr><th>h</th></tr>\
            <tr><td>a</td><td>b</td><td>c</td><td>d</td></tr></table>";

        let records = records(page)?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kanji, "a");
        Ok(())
    }
}
