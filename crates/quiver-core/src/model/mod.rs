//! Data model for the Quiver container format.
//!
//! A container is an ordered sequence of [`entry::Entry`] values, each
//! addressed by a unique validated [`tag::Tag`] and optionally carrying
//! an ordered key/value [`score::Score`] side-channel. The model is
//! format-agnostic; the on-stream framing lives in [`crate::io`].

pub mod entry;
pub mod score;
pub mod tag;

pub use entry::{Container, Entry};
pub use score::{Score, ScoreValue};
pub use tag::Tag;
