//! Tag-oriented operations over container files.
//!
//! Every mutating operation is a read → transform → write-new cycle:
//! output is produced into a temporary file in the destination
//! directory and renamed over the target only after it is complete, so
//! a failure partway through never leaves a partially-written
//! destination observable and never touches the source.

pub mod list;
pub mod rename;
pub mod slice;
pub mod split;

pub use list::list_tags;
pub use rename::{rename_tags, rename_tags_in_file};
pub use slice::{slice, slice_to_file};
pub use split::{split, split_to_files};

use crate::error::{QuiverError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `dest` through a temp file in the same directory, so the
/// final `persist` is a same-filesystem rename. On any error the temp
/// file is dropped and `dest` is left exactly as it was.
pub(crate) fn replace_file<F>(dest: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<()>,
{
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }
    tmp.persist(dest).map_err(|e| QuiverError::Io(e.error))?;
    Ok(())
}
