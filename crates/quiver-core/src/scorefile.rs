//! Tabular projection of the score side-channels (`.sc` report).

use crate::error::{Result, ValidationError};
use crate::io::QuiverReader;
use crate::model::{Container, Entry, Score, Tag};
use crate::ops::replace_file;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Marker rendered when a scored entry lacks one of the table's
/// columns. An explicit token, never a coerced zero or empty field.
pub const ABSENT_MARKER: &str = "NaN";

/// Rows are the scored entries in container order; columns are the
/// union of score keys across those rows, in first-seen order. Entries
/// without a score contribute nothing, not a blank row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    columns: Vec<String>,
    rows: Vec<(Tag, Score)>,
}

impl ScoreTable {
    pub fn from_container(container: &Container) -> Self {
        let mut table = ScoreTable::default();
        for entry in container {
            table.add_entry(entry);
        }
        table
    }

    /// Builds the table from a stream of entries, dropping each body as
    /// soon as its score has been recorded.
    pub fn read_from(entries: impl Iterator<Item = Result<Entry>>) -> Result<Self> {
        let mut table = ScoreTable::default();
        for entry in entries {
            table.add_entry(&entry?);
        }
        Ok(table)
    }

    fn add_entry(&mut self, entry: &Entry) {
        let Some(score) = entry.score() else { return };
        for key in score.keys() {
            if !self.columns.iter().any(|c| c == key) {
                self.columns.push(key.to_string());
            }
        }
        self.rows.push((entry.tag().clone(), score.clone()));
    }

    /// Score keys in first-seen order (the `tag` column is added by the
    /// renderer, not stored here).
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[(Tag, Score)] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the tab-delimited report: a header row (`tag` first,
    /// then the score keys in table order) and one row per scored tag.
    pub fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        let mut out = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);

        let mut header = Vec::with_capacity(self.columns.len() + 1);
        header.push("tag");
        header.extend(self.columns.iter().map(String::as_str));
        out.write_record(&header)?;

        for (tag, score) in &self.rows {
            let mut record = Vec::with_capacity(self.columns.len() + 1);
            record.push(tag.to_string());
            for column in &self.columns {
                match score.get(column) {
                    Some(value) => record.push(value.to_string()),
                    None => record.push(ABSENT_MARKER.to_string()),
                }
            }
            out.write_record(&record)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Extracts the score table of a container file into `<stem>.sc` next
/// to it, replacing any previous report atomically.
///
/// A container with no score lines is refused rather than producing a
/// header-only file.
pub fn extract_score_file(container_path: impl AsRef<Path>) -> Result<PathBuf> {
    let container_path = container_path.as_ref();
    let table = ScoreTable::read_from(QuiverReader::open(container_path)?)?;
    if table.is_empty() {
        return Err(ValidationError::NoScores.into());
    }
    let dest = container_path.with_extension("sc");
    replace_file(&dest, |w| table.write_to(w))?;
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scored_container() -> Container {
        let mut c = Container::new();
        c.push(Entry::new(
            Tag::new("t0").unwrap(),
            Some(Score::parse_pairs("rms=1.5|score=0.8").unwrap()),
            vec!["ATOM 0".to_string()],
        ))
        .unwrap();
        c.push(Entry::new(
            Tag::new("unscored").unwrap(),
            None,
            vec!["ATOM 1".to_string()],
        ))
        .unwrap();
        c.push(Entry::new(
            Tag::new("t2").unwrap(),
            Some(Score::parse_pairs("score=0.1|plddt=91.2").unwrap()),
            vec!["ATOM 2".to_string()],
        ))
        .unwrap();
        c
    }

    #[test]
    fn columns_are_key_union_in_first_seen_order() {
        let table = ScoreTable::from_container(&scored_container());
        assert_eq!(table.columns(), ["rms", "score", "plddt"]);
    }

    #[test]
    fn unscored_entries_are_skipped() {
        let table = ScoreTable::from_container(&scored_container());
        let tags: Vec<_> = table.rows().iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tags, ["t0", "t2"]);
    }

    #[test]
    fn renders_header_rows_and_absent_markers() {
        let table = ScoreTable::from_container(&scored_container());
        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "tag\trms\tscore\tplddt");
        assert_eq!(lines[1], "t0\t1.5\t0.8\tNaN");
        assert_eq!(lines[2], "t2\tNaN\t0.1\t91.2");
    }

    #[test]
    fn extracts_next_to_the_container() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("designs.qv");
        scored_container().write_to_path(&path).unwrap();

        let dest = extract_score_file(&path).unwrap();
        assert_eq!(dest, dir.path().join("designs.sc"));
        let text = fs::read_to_string(&dest).unwrap();
        assert!(text.starts_with("tag\trms\tscore\tplddt\n"));
    }

    #[test]
    fn scoreless_container_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.qv");
        fs::write(&path, "QV_TAG t0\nATOM 1\n").unwrap();

        let err = extract_score_file(&path).unwrap_err();
        assert!(matches!(
            err,
            crate::error::QuiverError::Validation(ValidationError::NoScores)
        ));
        assert!(!dir.path().join("plain.sc").exists());
    }
}
