//! Extraction core: attribute resolution, quantities, materials,
//! DIN 276 classification and record assembly.

pub mod assembler;
pub mod classifier;
pub mod materials;
pub mod properties;
pub mod quantities;

pub use assembler::{build_record, extract_records};
pub use classifier::{classify, cost_group_label};
