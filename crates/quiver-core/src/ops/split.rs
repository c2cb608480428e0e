use super::replace_file;
use crate::error::{Result, ValidationError};
use crate::io::{QuiverReader, QuiverWriter};
use crate::model::Container;
use std::fs;
use std::path::{Path, PathBuf};

/// Partitions a container into consecutive chunks of `chunk_size`.
///
/// Chunk *k* is named `{prefix}_{k}`, 0-based and not zero-padded. The
/// last chunk may be smaller but is never empty; concatenating all
/// chunks in order reproduces the container exactly.
pub fn split(
    container: &Container,
    chunk_size: usize,
    prefix: &str,
) -> Result<Vec<(String, Container)>> {
    if chunk_size == 0 {
        return Err(ValidationError::InvalidChunkSize.into());
    }
    let mut chunks = Vec::new();
    for (idx, entries) in container.entries().chunks(chunk_size).enumerate() {
        let mut chunk = Container::new();
        for entry in entries {
            chunk.push(entry.clone())?;
        }
        chunks.push((format!("{}_{}", prefix, idx), chunk));
    }
    Ok(chunks)
}

/// Streaming split of a container file into `{prefix}_{k}.qv` files
/// under `outdir` (created if absent).
///
/// Each chunk goes through its own temp file, so an interrupted run
/// leaves complete chunks and no torn one. Returns the written paths in
/// chunk order.
pub fn split_to_files(
    input: impl AsRef<Path>,
    chunk_size: usize,
    prefix: &str,
    outdir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    if chunk_size == 0 {
        return Err(ValidationError::InvalidChunkSize.into());
    }
    let outdir = outdir.as_ref();
    fs::create_dir_all(outdir)?;

    let mut reader = QuiverReader::open(input)?;
    let mut written = Vec::new();
    let mut idx = 0usize;
    loop {
        let Some(first) = reader.next() else { break };
        let first = first?;
        let dest = outdir.join(format!("{}_{}.qv", prefix, idx));
        replace_file(&dest, |w| {
            let mut writer = QuiverWriter::new(w);
            writer.write_entry(&first)?;
            for _ in 1..chunk_size {
                match reader.next() {
                    Some(entry) => writer.write_entry(&entry?)?,
                    None => break,
                }
            }
            writer.flush()
        })?;
        written.push(dest);
        idx += 1;
    }
    Ok(written)
}
