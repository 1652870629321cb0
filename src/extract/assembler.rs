//! Per-element record assembly.
//!
//! Each output field resolves independently: malformed model data behind
//! one field is logged and leaves that field empty while the rest of the
//! record still fills in. Classification runs last so it sees the same
//! defaulted predefined type the record reports.

use tracing::{debug, warn};

use crate::error::ResolveError;
use crate::model::{ClassificationRecord, Element, ModelGraph};

use super::classifier::classify;
use super::materials::{layer_thicknesses, resolve_material};
use super::quantities::{derive_mass, resolve_area, resolve_volume, to_base_unit};

/// Predefined type reported when the model leaves the attribute empty.
const DEFAULT_PREDEFINED: &str = "STANDARD";

/// Builds one record per element, in model order.
#[must_use]
pub fn extract_records(model: &ModelGraph) -> Vec<ClassificationRecord> {
    model
        .elements
        .iter()
        .map(|element| build_record(model, element))
        .collect()
}

/// Assembles the record for a single element.
#[must_use]
pub fn build_record(model: &ModelGraph, element: &Element) -> ClassificationRecord {
    let predefined = predefined_or_default(element);

    let mut record = ClassificationRecord {
        name: element.name.clone(),
        type_tag: Some(element.type_tag.clone()),
        global_id: Some(element.global_id.clone()),
        predefined_type: Some(predefined.clone()),
        storey: element
            .storey
            .and_then(|id| model.storey_name(id))
            .map(str::to_string),
        ..ClassificationRecord::default()
    };

    match resolve_area(model, element) {
        Ok((Some(value), unit)) => {
            // Unitless quantities fall back to the model-wide area unit.
            let unit = unit.unwrap_or_else(|| model.units.default_area());
            let (scaled, base_name) = to_base_unit(value, &unit);
            record.area = Some(scaled);
            record.unit = Some(base_name);
        }
        Ok((None, _)) => {}
        Err(error) => warn_field(element, "area", &error),
    }

    let mut density = None;
    match resolve_material(model, element) {
        Ok((descriptor, resolved_density)) => {
            if !descriptor.is_empty() {
                record.material = Some(descriptor);
            }
            density = resolved_density;
        }
        Err(error) => warn_field(element, "material", &error),
    }

    let mut volume = None;
    match resolve_volume(model, element) {
        Ok(value) => volume = value,
        Err(error) => warn_field(element, "volume", &error),
    }
    record.mass = derive_mass(volume, density);

    match layer_thicknesses(model, element) {
        Ok(thicknesses) => record.layer_thicknesses = thicknesses,
        Err(error) => warn_field(element, "layers", &error),
    }

    match classify(model, element, &predefined) {
        Ok(code) => record.cost_group = code,
        Err(error) => warn_field(element, "cost group", &error),
    }

    debug!(
        element = %element.global_id,
        type_tag = %element.type_tag,
        cost_group = record.cost_group,
        "element classified"
    );

    record
}

/// `NOTDEFINED` carries no information and reads as the default.
fn predefined_or_default(element: &Element) -> String {
    match element.predefined_type.as_deref() {
        None | Some("NOTDEFINED") => DEFAULT_PREDEFINED.to_string(),
        Some(other) => other.to_string(),
    }
}

fn warn_field(element: &Element, field: &str, error: &ResolveError) {
    warn!(
        element = %element.global_id,
        field,
        %error,
        "field skipped, model data is malformed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AttrValue, DefinitionSet, ElementKind, Material, MaterialAssignment, PropertySet,
        Quantity, QuantitySet, SingleValue, Storey,
    };
    use pretty_assertions::assert_eq;

    fn quantity_set(set_name: &str, entries: &[(&str, &str, f64)]) -> DefinitionSet {
        DefinitionSet::Quantities(QuantitySet {
            name: set_name.into(),
            quantities: entries
                .iter()
                .map(|&(name, field, value)| Quantity {
                    name: name.into(),
                    fields: vec![(field.into(), AttrValue::Number(value))],
                    unit: None,
                })
                .collect(),
        })
    }

    fn flags_set(set_name: &str, flags: &[(&str, bool)]) -> DefinitionSet {
        DefinitionSet::Properties(PropertySet {
            name: set_name.into(),
            properties: flags
                .iter()
                .map(|&(name, value)| SingleValue {
                    name: name.into(),
                    value: AttrValue::Flag(value),
                    unit: None,
                })
                .collect(),
        })
    }

    fn concrete(density: f64) -> Material {
        Material {
            name: "Beton".into(),
            property_sets: vec![PropertySet {
                name: "Pset_MaterialCommon".into(),
                properties: vec![SingleValue {
                    name: "MassDensity".into(),
                    value: AttrValue::Number(density),
                    unit: None,
                }],
            }],
        }
    }

    #[test]
    fn bare_element_keeps_identity_fields_only() {
        let model = ModelGraph::default();
        let element = Element {
            global_id: "0aBcDeFgHiJkLmNoPqRsT1".into(),
            name: Some("Wand 1".into()),
            type_tag: "IfcWallStandardCase".into(),
            kind: Some(ElementKind::Wall),
            ..Element::default()
        };
        let record = build_record(&model, &element);
        assert_eq!(record.name.as_deref(), Some("Wand 1"));
        assert_eq!(record.global_id.as_deref(), Some("0aBcDeFgHiJkLmNoPqRsT1"));
        assert_eq!(record.type_tag.as_deref(), Some("IfcWallStandardCase"));
        assert_eq!(record.predefined_type.as_deref(), Some("STANDARD"));
        assert_eq!(record.cost_group, None);
        assert_eq!(record.area, None);
        assert_eq!(record.mass, None);
        assert_eq!(record.material, None);
        assert_eq!(record.storey, None);
    }

    #[test]
    fn notdefined_reads_as_the_default_type() {
        let model = ModelGraph::default();
        let element = Element {
            predefined_type: Some("NOTDEFINED".into()),
            ..Element::default()
        };
        let record = build_record(&model, &element);
        assert_eq!(record.predefined_type.as_deref(), Some("STANDARD"));
    }

    #[test]
    fn classification_sees_the_raw_enumeration() {
        let model = ModelGraph::default();
        let element = Element {
            kind: Some(ElementKind::Slab),
            predefined_type: Some("BASESLAB".into()),
            ..Element::default()
        };
        let record = build_record(&model, &element);
        assert_eq!(record.cost_group, Some(322));
        assert_eq!(record.predefined_type.as_deref(), Some("BASESLAB"));
    }

    #[test]
    fn area_defaults_to_the_model_area_unit() {
        let mut model = ModelGraph::default();
        model.definition_sets.insert(
            1,
            quantity_set("BaseQuantities", &[("NetSideArea", "AreaValue", 12.5)]),
        );
        let element = Element {
            kind: Some(ElementKind::Wall),
            property_sets: vec![1],
            ..Element::default()
        };
        let record = build_record(&model, &element);
        assert_eq!(record.area, Some(12.5));
        assert_eq!(record.unit.as_deref(), Some("SQUARE_METRE"));
    }

    #[test]
    fn mass_multiplies_volume_and_material_density() {
        let mut model = ModelGraph::default();
        model.definition_sets.insert(
            1,
            quantity_set("BaseQuantities", &[("GrossVolume", "VolumeValue", 2.0)]),
        );
        model.materials.insert(5, concrete(2400.0));
        model.material_assignments.insert(6, MaterialAssignment::Material(5));
        let element = Element {
            kind: Some(ElementKind::Wall),
            property_sets: vec![1],
            material_associations: vec![6],
            ..Element::default()
        };
        let record = build_record(&model, &element);
        assert_eq!(record.material.as_deref(), Some("Beton"));
        assert_eq!(record.mass, Some(2.0 * 2400.0));
    }

    #[test]
    fn storey_names_resolve_through_the_graph() {
        let mut model = ModelGraph::default();
        model.storeys.insert(
            3,
            Storey {
                id: 3,
                name: Some("EG".into()),
                elevation: Some(0.0),
            },
        );
        let element = Element {
            storey: Some(3),
            ..Element::default()
        };
        let record = build_record(&model, &element);
        assert_eq!(record.storey.as_deref(), Some("EG"));
    }

    #[test]
    fn malformed_flag_spoils_only_the_cost_group() {
        let mut model = ModelGraph::default();
        model.definition_sets.insert(
            1,
            DefinitionSet::Properties(PropertySet {
                name: "Pset_WallCommon".into(),
                properties: vec![SingleValue {
                    name: "IsExternal".into(),
                    value: AttrValue::Text("ja".into()),
                    unit: None,
                }],
            }),
        );
        model.definition_sets.insert(
            2,
            quantity_set("BaseQuantities", &[("NetSideArea", "AreaValue", 8.0)]),
        );
        let element = Element {
            global_id: "1aBcDeFgHiJkLmNoPqRsT2".into(),
            kind: Some(ElementKind::Wall),
            property_sets: vec![1, 2],
            ..Element::default()
        };
        let record = build_record(&model, &element);
        assert_eq!(record.cost_group, None);
        assert_eq!(record.area, Some(8.0));
    }

    #[test]
    fn records_come_out_in_model_order() {
        let mut model = ModelGraph::default();
        model.elements = vec![
            Element {
                global_id: "0aBcDeFgHiJkLmNoPqRsT1".into(),
                ..Element::default()
            },
            Element {
                global_id: "0aBcDeFgHiJkLmNoPqRsT2".into(),
                ..Element::default()
            },
        ];
        let records = extract_records(&model);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].global_id.as_deref(), Some("0aBcDeFgHiJkLmNoPqRsT1"));
        assert_eq!(records[1].global_id.as_deref(), Some("0aBcDeFgHiJkLmNoPqRsT2"));
    }
}
