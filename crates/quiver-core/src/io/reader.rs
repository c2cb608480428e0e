use crate::error::{ParseErrorKind, QuiverError, Result};
use crate::model::{Entry, Score, Tag};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const TAG_KEYWORD: &str = "QV_TAG";
const SCORE_KEYWORD: &str = "QV_SCORE";

/// What a single input line is, after token-level classification.
enum Line {
    Header(Tag),
    Score { tag: String, pairs: String },
    Body(String),
}

/// A lazy, single-forward-scan reader over a container stream.
///
/// Entries are yielded one at a time, so memory use scales with the
/// largest single entry rather than with the stream. Framing is
/// validated as the scan advances; the tag index (tag → entry position)
/// is built incrementally and doubles as the duplicate-tag check, so no
/// second pass is ever needed.
pub struct QuiverReader<R: BufRead> {
    lines: std::io::Lines<R>,
    /// 1-based number of the last line pulled from the stream.
    line_no: usize,
    /// The header of the next entry, already consumed by the body scan
    /// of the previous one.
    pending: Option<Tag>,
    index: HashMap<Tag, usize>,
    failed: bool,
}

impl QuiverReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(QuiverReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> QuiverReader<R> {
    pub fn new(reader: R) -> Self {
        QuiverReader {
            lines: reader.lines(),
            line_no: 0,
            pending: None,
            index: HashMap::new(),
            failed: false,
        }
    }

    /// Tag index over the entries yielded so far.
    pub fn index(&self) -> &HashMap<Tag, usize> {
        &self.index
    }

    fn next_line(&mut self) -> Option<std::io::Result<String>> {
        let line = self.lines.next();
        if line.is_some() {
            self.line_no += 1;
        }
        line
    }

    fn classify(&self, line: String) -> Result<Line> {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some(TAG_KEYWORD) => {
                let tag = tokens
                    .next()
                    .ok_or_else(|| {
                        QuiverError::parse(self.line_no, ParseErrorKind::MalformedHeader)
                    })
                    .and_then(|t| {
                        Tag::new(t).map_err(|_| {
                            QuiverError::parse(self.line_no, ParseErrorKind::MalformedHeader)
                        })
                    })?;
                // Trailing tokens would be silently lost on re-encode.
                if tokens.next().is_some() {
                    return Err(QuiverError::parse(
                        self.line_no,
                        ParseErrorKind::MalformedHeader,
                    ));
                }
                Ok(Line::Header(tag))
            }
            Some(SCORE_KEYWORD) => {
                let rest = line.trim_start();
                let rest = rest[SCORE_KEYWORD.len()..].trim_start();
                let (tag, pairs) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| {
                        QuiverError::parse(
                            self.line_no,
                            ParseErrorKind::MalformedScore {
                                reason: "missing key=value pairs".to_string(),
                            },
                        )
                    })?;
                Ok(Line::Score {
                    tag: tag.to_string(),
                    pairs: pairs.to_string(),
                })
            }
            _ => Ok(Line::Body(line)),
        }
    }

    /// Reads one entry starting at `header`, leaving the next header
    /// (if one was hit) in `self.pending`.
    fn read_entry(&mut self, header: Tag) -> Result<Entry> {
        let header_line = self.line_no;
        if self.index.contains_key(header.as_str()) {
            return Err(QuiverError::parse(
                header_line,
                ParseErrorKind::DuplicateTag {
                    tag: header.to_string(),
                },
            ));
        }

        let mut score: Option<Score> = None;
        let mut body: Vec<String> = Vec::new();
        let mut at_score_position = true;

        loop {
            let Some(line) = self.next_line() else {
                if body.is_empty() {
                    return Err(QuiverError::parse(
                        self.line_no,
                        ParseErrorKind::UnexpectedEndOfStream {
                            tag: header.to_string(),
                        },
                    ));
                }
                break;
            };
            match self.classify(line?)? {
                Line::Header(next) => {
                    if body.is_empty() {
                        return Err(QuiverError::parse(
                            self.line_no,
                            ParseErrorKind::EmptyEntry {
                                tag: header.to_string(),
                            },
                        ));
                    }
                    self.pending = Some(next);
                    break;
                }
                Line::Score { tag, pairs } => {
                    if !at_score_position {
                        return Err(QuiverError::parse(
                            self.line_no,
                            ParseErrorKind::MalformedScore {
                                reason: format!(
                                    "QV_SCORE must immediately follow the {} header",
                                    TAG_KEYWORD
                                ),
                            },
                        ));
                    }
                    if tag != header.as_str() {
                        return Err(QuiverError::parse(
                            self.line_no,
                            ParseErrorKind::TagMismatch {
                                expected: header.to_string(),
                                found: tag,
                            },
                        ));
                    }
                    score = Some(Score::parse_pairs(&pairs).map_err(|reason| {
                        QuiverError::parse(
                            self.line_no,
                            ParseErrorKind::MalformedScore { reason },
                        )
                    })?);
                    at_score_position = false;
                }
                Line::Body(line) => {
                    body.push(line);
                    at_score_position = false;
                }
            }
        }

        self.index.insert(header.clone(), self.index.len());
        Ok(Entry::new(header, score, body))
    }

    fn next_entry(&mut self) -> Result<Option<Entry>> {
        let header = match self.pending.take() {
            Some(header) => header,
            None => {
                let Some(line) = self.next_line() else {
                    // Clean end of stream; an empty stream is an empty
                    // container, not an error.
                    return Ok(None);
                };
                match self.classify(line?)? {
                    Line::Header(tag) => tag,
                    Line::Score { .. } => {
                        return Err(QuiverError::parse(
                            self.line_no,
                            ParseErrorKind::MalformedScore {
                                reason: format!(
                                    "QV_SCORE must immediately follow the {} header",
                                    TAG_KEYWORD
                                ),
                            },
                        ));
                    }
                    Line::Body(_) => {
                        return Err(QuiverError::parse(
                            self.line_no,
                            ParseErrorKind::MalformedHeader,
                        ));
                    }
                }
            }
        };
        self.read_entry(header).map(Some)
    }
}

impl<R: BufRead> Iterator for QuiverReader<R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_entry() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => None,
            Err(err) => {
                // A framing error poisons the rest of the scan.
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuiverError;
    use crate::model::ScoreValue;
    use std::io::Cursor;

    fn read_all(text: &str) -> Result<Vec<Entry>> {
        QuiverReader::new(Cursor::new(text.to_string())).collect()
    }

    #[test]
    fn empty_stream_is_an_empty_container() {
        assert_eq!(read_all("").unwrap(), Vec::new());
    }

    #[test]
    fn reads_entries_in_stream_order() {
        let text = "QV_TAG t0\nATOM 1\nATOM 2\nQV_TAG t1\nATOM 3\n";
        let entries = read_all(text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].tag(), "t0");
        assert_eq!(entries[0].body(), ["ATOM 1", "ATOM 2"]);
        assert_eq!(entries[1].tag(), "t1");
        assert_eq!(entries[1].body(), ["ATOM 3"]);
    }

    #[test]
    fn reads_the_optional_score_line() {
        let text = "QV_TAG t0\nQV_SCORE t0 rms=1.5|score=0.8\nATOM 1\n";
        let entries = read_all(text).unwrap();
        let score = entries[0].score().unwrap();
        assert_eq!(score.get("rms"), Some(&ScoreValue::Number(1.5)));
        assert_eq!(score.get("score"), Some(&ScoreValue::Number(0.8)));
        assert_eq!(entries[0].body(), ["ATOM 1"]);
    }

    #[test]
    fn body_lines_are_verbatim() {
        let text = "QV_TAG t0\n  ATOM    1  N \n\nEND   \n";
        let entries = read_all(text).unwrap();
        assert_eq!(entries[0].body(), ["  ATOM    1  N ", "", "END   "]);
    }

    #[test]
    fn crlf_terminators_are_normalized() {
        let text = "QV_TAG t0\r\nATOM 1\r\n";
        let entries = read_all(text).unwrap();
        assert_eq!(entries[0].body(), ["ATOM 1"]);
    }

    #[test]
    fn duplicate_tag_fails_with_line_number() {
        let text = "QV_TAG dup\nATOM 1\nQV_TAG dup\nATOM 2\n";
        let err = read_all(text).unwrap_err();
        match err {
            QuiverError::Parse { line, kind } => {
                assert_eq!(line, 3);
                assert_eq!(
                    kind,
                    ParseErrorKind::DuplicateTag {
                        tag: "dup".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn score_tag_mismatch_fails() {
        let text = "QV_TAG t0\nQV_SCORE other rms=1.5\nATOM 1\n";
        let err = read_all(text).unwrap_err();
        match err {
            QuiverError::Parse { line, kind } => {
                assert_eq!(line, 2);
                assert_eq!(
                    kind,
                    ParseErrorKind::TagMismatch {
                        expected: "t0".to_string(),
                        found: "other".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn score_line_after_body_fails() {
        let text = "QV_TAG t0\nATOM 1\nQV_SCORE t0 rms=1.5\n";
        let err = read_all(text).unwrap_err();
        assert!(matches!(
            err,
            QuiverError::Parse {
                line: 3,
                kind: ParseErrorKind::MalformedScore { .. }
            }
        ));
    }

    #[test]
    fn content_before_the_first_header_fails() {
        let err = read_all("ATOM 1\nQV_TAG t0\nATOM 1\n").unwrap_err();
        assert!(matches!(
            err,
            QuiverError::Parse {
                line: 1,
                kind: ParseErrorKind::MalformedHeader
            }
        ));
    }

    #[test]
    fn header_without_a_tag_fails() {
        let err = read_all("QV_TAG\nATOM 1\n").unwrap_err();
        assert!(matches!(
            err,
            QuiverError::Parse {
                line: 1,
                kind: ParseErrorKind::MalformedHeader
            }
        ));
    }

    #[test]
    fn header_with_trailing_tokens_fails() {
        let err = read_all("QV_TAG t0 extra\nATOM 1\n").unwrap_err();
        assert!(matches!(
            err,
            QuiverError::Parse {
                line: 1,
                kind: ParseErrorKind::MalformedHeader
            }
        ));
    }

    #[test]
    fn consecutive_headers_fail() {
        let err = read_all("QV_TAG t0\nQV_TAG t1\nATOM 1\n").unwrap_err();
        assert!(matches!(
            err,
            QuiverError::Parse {
                line: 2,
                kind: ParseErrorKind::EmptyEntry { .. }
            }
        ));
    }

    #[test]
    fn header_at_end_of_stream_fails() {
        let err = read_all("QV_TAG t0\nATOM 1\nQV_TAG t1\n").unwrap_err();
        assert!(matches!(
            err,
            QuiverError::Parse {
                line: 3,
                kind: ParseErrorKind::UnexpectedEndOfStream { .. }
            }
        ));
    }

    #[test]
    fn index_tracks_positions_incrementally() {
        let text = "QV_TAG t0\nATOM 1\nQV_TAG t1\nATOM 2\n";
        let mut reader = QuiverReader::new(Cursor::new(text.to_string()));
        assert!(reader.index().is_empty());
        reader.next().unwrap().unwrap();
        assert_eq!(reader.index().get("t0").copied(), Some(0));
        reader.next().unwrap().unwrap();
        assert_eq!(reader.index().get("t1").copied(), Some(1));
        assert!(reader.next().is_none());
    }
}
