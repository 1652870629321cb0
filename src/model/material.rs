use super::psets::PropertySet;
use super::EntityId;

/// A material with the property sets attached to it through
/// IfcMaterialProperties back-references (density lives in
/// `Pset_MaterialCommon`).
#[derive(Debug, Clone)]
pub struct Material {
    pub name: String,
    pub property_sets: Vec<PropertySet>,
}

/// One layer of a layer set: material reference plus thickness.
#[derive(Debug, Clone)]
pub struct MaterialLayer {
    pub material: Option<EntityId>,
    pub thickness: Option<f64>,
}

/// One profile of a profile set.
#[derive(Debug, Clone)]
pub struct MaterialProfile {
    pub material: Option<EntityId>,
}

/// One named constituent of a constituent set.
#[derive(Debug, Clone)]
pub struct MaterialConstituent {
    pub name: Option<String>,
    pub material: Option<EntityId>,
}

/// The seven shapes an IfcRelAssociatesMaterial can point at. Usages wrap
/// a set by reference; the aggregator follows the indirection.
#[derive(Debug, Clone)]
pub enum MaterialAssignment {
    Material(EntityId),
    MaterialList { materials: Vec<EntityId> },
    LayerSet { layers: Vec<MaterialLayer> },
    LayerSetUsage { for_layer_set: EntityId },
    ProfileSet { profiles: Vec<MaterialProfile> },
    ProfileSetUsage { for_profile_set: EntityId },
    ConstituentSet { constituents: Vec<MaterialConstituent> },
}
