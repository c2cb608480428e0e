//! Conversion between standalone PDB files and container entries.
//!
//! The tag of an imported file is its base name without extension, so
//! the filesystem namespace and the tag namespace stay in lockstep in
//! both directions. Structure text is opaque payload throughout.

use crate::error::{Result, ValidationError};
use crate::io::QuiverReader;
use crate::model::{Container, Entry, Tag};
use crate::ops::replace_file;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Extension given to files materialized by [`to_files`].
pub const DEFAULT_EXTENSION: &str = "pdb";

fn tag_from_path(path: &Path) -> Result<Tag> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    Tag::new(stem).map_err(|_| {
        ValidationError::InvalidTag {
            value: path.display().to_string(),
            reason: "file name does not yield a usable tag",
        }
        .into()
    })
}

/// Builds a container from standalone structure files.
///
/// Each file becomes one entry: tag = file stem, body = file lines, no
/// score. Two paths deriving the same tag fail with `DuplicateTag`.
pub fn from_files<P: AsRef<Path>>(paths: &[P]) -> Result<Container> {
    let mut container = Container::new();
    for path in paths {
        let path = path.as_ref();
        let tag = tag_from_path(path)?;
        let file = File::open(path)?;
        let body = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        container.push(Entry::new(tag, None, body))?;
    }
    Ok(container)
}

fn write_entry_file(entry: &Entry, outdir: &Path) -> Result<()> {
    let dest = outdir.join(format!("{}.{}", entry.tag(), DEFAULT_EXTENSION));
    replace_file(&dest, |w| {
        for line in entry.body() {
            writeln!(w, "{}", line)?;
        }
        Ok(())
    })
}

/// Materializes every entry of an in-memory container as
/// `outdir/<tag>.pdb`, overwriting existing files. `outdir` is created
/// if absent. Returns the number of files written.
pub fn to_files(container: &Container, outdir: impl AsRef<Path>) -> Result<usize> {
    let outdir = outdir.as_ref();
    fs::create_dir_all(outdir)?;
    for entry in container {
        write_entry_file(entry, outdir)?;
    }
    Ok(container.len())
}

/// Streaming equivalent of [`to_files`] working straight off a
/// container file, holding one entry in memory at a time.
pub fn extract_to_files(
    container_path: impl AsRef<Path>,
    outdir: impl AsRef<Path>,
) -> Result<usize> {
    extract_to_files_with(container_path, outdir, |_| {})
}

/// [`extract_to_files`] with a per-entry observer, letting callers
/// report progress while the scan runs.
pub fn extract_to_files_with(
    container_path: impl AsRef<Path>,
    outdir: impl AsRef<Path>,
    mut observe: impl FnMut(&Tag),
) -> Result<usize> {
    let outdir = outdir.as_ref();
    fs::create_dir_all(outdir)?;
    let mut count = 0usize;
    for entry in QuiverReader::open(container_path)? {
        let entry = entry?;
        write_entry_file(&entry, outdir)?;
        observe(entry.tag());
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn from_files_derives_tags_from_stems() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();
        for name in ["a", "b", "c"] {
            let path = dir.path().join(format!("{}.pdb", name));
            fs::write(&path, "ATOM      1  N   ALA A   1\n").unwrap();
            paths.push(path);
        }

        let container = from_files(&paths).unwrap();
        let tags: Vec<_> = container.tags().map(Tag::as_str).collect();
        assert_eq!(tags, ["a", "b", "c"]);
        assert_eq!(
            container.get("a").unwrap().body(),
            ["ATOM      1  N   ALA A   1"]
        );
        assert!(container.get("a").unwrap().score().is_none());
    }

    #[test]
    fn colliding_stems_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        let first = dir.path().join("same.pdb");
        let second = sub.join("same.pdb");
        fs::write(&first, "ATOM 1\n").unwrap();
        fs::write(&second, "ATOM 2\n").unwrap();

        let err = from_files(&[first, second]).unwrap_err();
        assert!(matches!(
            err,
            crate::error::QuiverError::Validation(ValidationError::DuplicateTag { .. })
        ));
    }

    #[test]
    fn round_trips_through_a_container_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("model_x.pdb");
        fs::write(&source, "ATOM      1  N   ALA A   1\nEND\n").unwrap();

        let container = from_files(&[&source]).unwrap();
        let qv = dir.path().join("all.qv");
        container.write_to_path(&qv).unwrap();

        let outdir = dir.path().join("extracted");
        let count = extract_to_files(&qv, &outdir).unwrap();
        assert_eq!(count, 1);
        assert_eq!(
            fs::read_to_string(outdir.join("model_x.pdb")).unwrap(),
            fs::read_to_string(&source).unwrap()
        );
    }

    #[test]
    fn to_files_overwrites_existing_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut container = Container::new();
        container
            .push(Entry::new(
                Tag::new("t0").unwrap(),
                None,
                vec!["fresh".to_string()],
            ))
            .unwrap();

        let stale = dir.path().join("t0.pdb");
        fs::write(&stale, "stale\n").unwrap();
        to_files(&container, dir.path()).unwrap();
        assert_eq!(fs::read_to_string(&stale).unwrap(), "fresh\n");
    }

    #[test]
    fn extract_reports_each_tag() {
        let dir = tempfile::tempdir().unwrap();
        let qv = dir.path().join("in.qv");
        fs::write(&qv, "QV_TAG t0\nATOM 1\nQV_TAG t1\nATOM 2\n").unwrap();

        let mut seen = Vec::new();
        let count =
            extract_to_files_with(&qv, dir.path(), |tag| seen.push(tag.to_string())).unwrap();
        assert_eq!(count, 2);
        assert_eq!(seen, ["t0", "t1"]);
    }
}
