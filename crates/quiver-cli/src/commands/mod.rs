pub mod extract;
pub mod from_pdb;
pub mod ls;
pub mod rename;
pub mod scorefile;
pub mod slice;
pub mod split;

use crate::error::{CliError, Result};
use quiver::Tag;

/// Parses user-supplied tag strings, surfacing the first invalid one as
/// an argument error.
pub(crate) fn parse_tags<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Tag>> {
    raw.iter()
        .map(|s| Tag::new(s.as_ref()).map_err(|e| CliError::Argument(e.to_string())))
        .collect()
}
