//! The console's concrete collections: record shapes, seed data, forms and screen presets.

pub mod forms;
pub mod presets;
pub mod records;
pub mod report;
pub mod seed;
pub mod taxonomy;
pub mod test_builder;

pub use presets::Collection;
pub use records::*;
pub use taxonomy::Taxonomy;
pub use test_builder::{TestBuilder, TestPaper};
