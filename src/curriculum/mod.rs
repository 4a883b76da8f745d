//! Curriculum index - per-grade rosters derived once from the catalog

pub mod index;

pub use index::CurriculumIndex;
