use crate::error::Result;
use crate::io::QuiverReader;
use crate::model::Tag;
use std::path::Path;

/// Lists tags in container order by streaming the file.
///
/// Bodies are dropped as soon as each entry is yielded, so a container
/// holding millions of coordinate blocks costs one entry of memory.
/// In-memory containers answer the same question via
/// [`crate::model::Container::tags`].
pub fn list_tags(path: impl AsRef<Path>) -> Result<Vec<Tag>> {
    QuiverReader::open(path)?
        .map(|entry| entry.map(|e| e.into_tag()))
        .collect()
}
