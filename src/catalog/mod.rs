//! Combination catalog - the static dojo syllabus
//!
//! Each entry binds an attack, an entry movement, a technique, and a
//! resolution to the grade at which the combination is first taught. The
//! table is build-time data; nothing mutates it at run time.

pub mod entry;
pub mod syllabus;

pub use entry::{Catalog, CombinationEntry, Resolution, TechniqueRef};
pub use syllabus::SYLLABUS;
