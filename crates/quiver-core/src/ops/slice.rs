use super::replace_file;
use crate::error::{Result, ValidationError};
use crate::io::{QuiverReader, QuiverWriter};
use crate::model::{Container, Tag};
use std::collections::HashSet;
use std::path::Path;

/// Copies the requested entries into a new container.
///
/// Every requested tag must exist, otherwise the whole operation fails
/// with `UnknownTag` and nothing is produced. Output entries keep the
/// **original container order**, not the order of the request; bodies
/// and scores are copied unchanged.
pub fn slice(container: &Container, requested: &[Tag]) -> Result<Container> {
    for tag in requested {
        if !container.contains(tag.as_str()) {
            return Err(ValidationError::UnknownTag {
                tag: tag.to_string(),
            }
            .into());
        }
    }
    let wanted: HashSet<&str> = requested.iter().map(Tag::as_str).collect();
    let mut sliced = Container::new();
    for entry in container {
        if wanted.contains(entry.tag().as_str()) {
            sliced.push(entry.clone())?;
        }
    }
    Ok(sliced)
}

/// Streaming slice of a container file into `output`.
///
/// Matching entries are written to a temp file as the single forward
/// scan encounters them (container order by construction); the temp
/// file is only persisted once every requested tag has been seen, so a
/// missing tag produces no output at all.
pub fn slice_to_file(
    input: impl AsRef<Path>,
    requested: &[Tag],
    output: impl AsRef<Path>,
) -> Result<()> {
    let input = input.as_ref();
    replace_file(output.as_ref(), |w| {
        let wanted: HashSet<&str> = requested.iter().map(Tag::as_str).collect();
        let mut missing: HashSet<&str> = wanted.clone();
        let mut writer = QuiverWriter::new(w);
        for entry in QuiverReader::open(input)? {
            let entry = entry?;
            if wanted.contains(entry.tag().as_str()) {
                missing.remove(entry.tag().as_str());
                writer.write_entry(&entry)?;
            }
        }
        if let Some(absent) = requested.iter().find(|t| missing.contains(t.as_str())) {
            return Err(ValidationError::UnknownTag {
                tag: absent.to_string(),
            }
            .into());
        }
        writer.flush()
    })
}
