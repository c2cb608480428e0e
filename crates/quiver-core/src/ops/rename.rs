use super::replace_file;
use crate::error::{Result, ValidationError};
use crate::model::{Container, Tag};
use std::collections::HashSet;
use std::path::Path;

/// Produces a new container where entry *i* carries `new_tags[i]`.
///
/// Bodies, scores, and entry order are untouched; the score line of a
/// renamed entry restates the new tag when re-encoded. Fails before
/// building anything if the count or mutual distinctness of `new_tags`
/// is off.
pub fn rename_tags(container: &Container, new_tags: Vec<Tag>) -> Result<Container> {
    if new_tags.len() != container.len() {
        return Err(ValidationError::LengthMismatch {
            expected: container.len(),
            actual: new_tags.len(),
        }
        .into());
    }
    {
        let mut seen: HashSet<&Tag> = HashSet::with_capacity(new_tags.len());
        for tag in &new_tags {
            if !seen.insert(tag) {
                return Err(ValidationError::DuplicateTargetTag {
                    tag: tag.to_string(),
                }
                .into());
            }
        }
    }

    let mut renamed = Container::new();
    for (entry, tag) in container.iter().zip(new_tags) {
        renamed.push(entry.clone().with_tag(tag))?;
    }
    Ok(renamed)
}

/// Rewrites the tags of a container file positionally, replacing the
/// file atomically; a validation failure leaves it byte-identical.
pub fn rename_tags_in_file(path: impl AsRef<Path>, new_tags: Vec<Tag>) -> Result<()> {
    let path = path.as_ref();
    let container = Container::read_from_path(path)?;
    let renamed = rename_tags(&container, new_tags)?;
    replace_file(path, |w| renamed.write_to(w))
}
