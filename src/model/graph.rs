use std::collections::HashMap;

use super::material::{Material, MaterialAssignment};
use super::psets::DefinitionSet;
use super::units::UnitTable;
use super::{Element, EntityId};

#[derive(Debug, Clone)]
pub struct Storey {
    pub id: EntityId,
    pub name: Option<String>,
    pub elevation: Option<f64>,
}

/// A group an element can be assigned to (IfcSystem, IfcDistributionSystem,
/// IfcGroup). The object type string carries the system naming convention
/// the classifier matches against.
#[derive(Debug, Clone)]
pub struct Group {
    pub id: EntityId,
    pub name: Option<String>,
    pub object_type: Option<String>,
}

/// The read-only graph store the extraction core traverses. Built once by
/// the parser; elements are kept in ascending entity-id order so every run
/// over the same file produces the same rows.
#[derive(Debug, Default)]
pub struct ModelGraph {
    pub schema: String,
    pub elements: Vec<Element>,
    pub units: UnitTable,
    pub storeys: HashMap<EntityId, Storey>,
    pub definition_sets: HashMap<EntityId, DefinitionSet>, // set id → typed set
    pub materials: HashMap<EntityId, Material>,            // material id → material
    pub material_assignments: HashMap<EntityId, MaterialAssignment>, // node id → shape
    pub groups: HashMap<EntityId, Group>,                  // group id → group
}

impl ModelGraph {
    #[must_use]
    pub fn definition_set(&self, id: EntityId) -> Option<&DefinitionSet> {
        self.definition_sets.get(&id)
    }

    #[must_use]
    pub fn material(&self, id: EntityId) -> Option<&Material> {
        self.materials.get(&id)
    }

    #[must_use]
    pub fn material_assignment(&self, id: EntityId) -> Option<&MaterialAssignment> {
        self.material_assignments.get(&id)
    }

    #[must_use]
    pub fn group(&self, id: EntityId) -> Option<&Group> {
        self.groups.get(&id)
    }

    #[must_use]
    pub fn storey_name(&self, id: EntityId) -> Option<&str> {
        self.storeys.get(&id).and_then(|storey| storey.name.as_deref())
    }
}
