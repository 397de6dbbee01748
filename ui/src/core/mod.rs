//! Pure domain logic: the in-memory table model, dataset loading, masking,
//! filtering, and the filtered categorical/numeric summarizer.

pub mod columns;
pub mod dataset;
pub mod filter;
pub mod format;
pub mod mask;
pub mod summary;
pub mod table;
