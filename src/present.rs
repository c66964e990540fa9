use crate::extract::VocabRecord;

const COL: usize = 20;

/// Render the weekly selection as a fixed-width three-column table:
/// meaning left-aligned, furigana centred, kanji right-aligned.
pub fn table(records: &[VocabRecord]) -> String {
    let mut out = String::new();
    out.push_str(&row("Meaning", "Furigana", "Kanji"));
    for record in records {
        out.push_str(&row(&record.meaning, &record.furigana, &record.kanji));
    }
    out
}

fn row(meaning: &str, furigana: &str, kanji: &str) -> String {
    format!("{meaning:<COL$}{furigana:^COL$}{kanji:>COL$}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(meaning: &str, furigana: &str, kanji: &str) -> VocabRecord {
        VocabRecord {
            kanji: kanji.to_owned(),
            furigana: furigana.to_owned(),
            romaji: String::new(),
            meaning: meaning.to_owned(),
            id: 0,
            seen: true,
        }
    }

    #[test]
    fn header_then_one_line_per_record() {
        let text = table(&[record("to meet", "あう", "会う"), record("blue", "あお", "青")]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("{:<20}{:^20}{:>20}", "Meaning", "Furigana", "Kanji"));
        assert!(lines[1].starts_with("to meet"));
        assert!(lines[1].ends_with("会う"));
        assert!(lines[2].starts_with("blue"));
    }

    #[test]
    fn empty_fields_render_as_blank_cells() {
        let text = table(&[record("", "", "")]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].trim().is_empty());
    }
}
