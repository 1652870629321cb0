pub mod element;
pub mod graph;
pub mod material;
pub mod psets;
pub mod record;
pub mod units;

/// STEP entity instance id (`#123`).
pub type EntityId = u64;

pub use element::{Element, ElementKind};
pub use graph::{Group, ModelGraph, Storey};
pub use material::{Material, MaterialAssignment, MaterialConstituent, MaterialLayer, MaterialProfile};
pub use psets::{AttrValue, DefinitionSet, PropertySet, Quantity, QuantitySet, SingleValue};
pub use record::ClassificationRecord;
pub use units::{DeclaredUnit, UnitTable};
