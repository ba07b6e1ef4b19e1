//! Domain models for Wellspring.
//!
//! # Core Concepts
//!
//! ## Pain log
//!
//! - [`PainEntry`]: A single self-report check-in. Created once by a save,
//!   optionally amended once with relief data ([`ReliefInput`]), never edited
//!   or deleted afterwards.
//! - [`Insights`]: Read-only statistics derived on demand from the pain log.
//!
//! ## Journal
//!
//! - [`JournalEntry`]: A free-text note with a decorative emoji marker.
//!
//! Both entry kinds are identified by an [`EntryId`] and live newest-first in
//! their owning store.

mod id;
mod insights;
mod journal;
mod pain;

pub use id::*;
pub use insights::*;
pub use journal::*;
pub use pain::*;
