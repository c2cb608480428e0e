use crate::error::Result;
use crate::model::Entry;
use std::io::Write;

/// Streaming encoder for the container framing.
///
/// For each entry: the `QV_TAG` header, the `QV_SCORE` line only when a
/// score is present, then the body lines verbatim, each with a single
/// `\n` terminator. `parse(write(C))` is structurally identical to `C`.
pub struct QuiverWriter<W: Write> {
    inner: W,
}

impl<W: Write> QuiverWriter<W> {
    pub fn new(inner: W) -> Self {
        QuiverWriter { inner }
    }

    pub fn write_entry(&mut self, entry: &Entry) -> Result<()> {
        writeln!(self.inner, "QV_TAG {}", entry.tag())?;
        if let Some(score) = entry.score() {
            writeln!(self.inner, "QV_SCORE {} {}", entry.tag(), score)?;
        }
        for line in entry.body() {
            writeln!(self.inner, "{}", line)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
