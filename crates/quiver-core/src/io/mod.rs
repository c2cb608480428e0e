//! Encode/decode engine for the container framing.
//!
//! [`reader::QuiverReader`] streams entries out of a container;
//! [`writer::QuiverWriter`] serializes them back. The convenience
//! methods on [`Container`] cover the whole-file cases; operations that
//! must not materialize every body at once use the reader directly.

pub mod reader;
pub mod writer;

pub use reader::QuiverReader;
pub use writer::QuiverWriter;

use crate::error::Result;
use crate::model::Container;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

impl Container {
    /// Decodes a whole container from a buffered reader.
    pub fn read_from(reader: impl BufRead) -> Result<Self> {
        let mut container = Container::new();
        for entry in QuiverReader::new(reader) {
            container.push(entry?)?;
        }
        Ok(container)
    }

    pub fn read_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Encodes every entry, in order, into `writer`.
    pub fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        let mut encoder = QuiverWriter::new(writer);
        for entry in self {
            encoder.write_entry(entry)?;
        }
        encoder.flush()
    }

    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
    }
}
