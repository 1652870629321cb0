//! # ifc2lca
//!
//! Extracts quantities, materials and DIN 276 cost groups from IFC
//! building models and writes them as CSV for eLCA life-cycle assessment.
//!
//! ## Features
//!
//! - Parse IFC STEP files (IFC2x3 and IFC4 schemas)
//! - Resolve areas, volumes and material densities per element
//! - Classify elements into DIN 276 cost groups
//! - Export to semicolon-separated CSV and JSON
//!
//! ## Example
//!
//! ```no_run
//! use ifc2lca::extract::extract_records;
//! use ifc2lca::parser::parse_ifc_file;
//!
//! let model = parse_ifc_file("model.ifc").expect("Failed to parse");
//! for record in extract_records(&model) {
//!     println!("{:?} -> {:?}", record.name, record.cost_group);
//! }
//! ```

pub mod error;
pub mod export;
pub mod extract;
pub mod model;
pub mod parser;
