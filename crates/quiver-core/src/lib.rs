//! # Quiver Core Library
//!
//! Engine for the Quiver container format: many PDB-like structure
//! records bundled into one flat, tag-addressed text file, so
//! high-throughput structure-generation pipelines avoid the filesystem
//! overhead of millions of tiny files.
//!
//! ## Architecture
//!
//! - **[`model`]: The Data.** Validated [`model::Tag`]s, the ordered
//!   [`model::Score`] side-channel, and the [`model::Container`] of
//!   entries with its incrementally built tag index.
//!
//! - **[`io`]: The Framing.** A lazy, single-pass reader and a
//!   streaming encoder obeying the round-trip law: decoding an encoded
//!   container reproduces it exactly, body lines byte for byte.
//!
//! - **[`ops`], [`scorefile`], [`bridge`]: The Operations.** Tag
//!   listing, positional renaming, slicing, fixed-size splitting, score
//!   table extraction, and conversion to and from standalone PDB files.
//!   Every mutating operation computes its full output into a temporary
//!   file before atomically replacing the destination; a partial
//!   failure never corrupts the original.

pub mod bridge;
pub mod error;
pub mod io;
pub mod model;
pub mod ops;
pub mod scorefile;

pub use error::{ParseErrorKind, QuiverError, Result, ValidationError};
pub use model::{Container, Entry, Score, ScoreValue, Tag};
