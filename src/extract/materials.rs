//! Material aggregation across the seven assignment shapes.
//!
//! Every association contributes (name, density) pairs; the reduction
//! yields one descriptor string and one density. The density survives
//! only when it is unambiguous across all contributing materials.

use crate::error::ResolveError;
use crate::model::{
    AttrValue, Element, EntityId, Material, MaterialAssignment, MaterialLayer, MaterialProfile,
    ModelGraph,
};

use super::properties::find_material_property;

const MATERIAL_PSET: &str = "Pset_MaterialCommon";
const DENSITY_PROPERTY: &str = "MassDensity";

/// Resolves the material descriptor and density of an element.
///
/// No associations reduce to an empty descriptor. A dangling assignment
/// reference or a set entry without a material is malformed data and
/// surfaces as an error for the assembler to log.
pub fn resolve_material(
    model: &ModelGraph,
    element: &Element,
) -> Result<(String, Option<f64>), ResolveError> {
    let mut pairs: Vec<(String, Option<f64>)> = Vec::new();

    for &node_id in &element.material_associations {
        let node = model
            .material_assignment(node_id)
            .ok_or(ResolveError::MissingEntity(node_id))?;
        collect_pairs(model, node, node_id, &mut pairs)?;
    }

    Ok(reduce(pairs))
}

fn collect_pairs(
    model: &ModelGraph,
    node: &MaterialAssignment,
    node_id: EntityId,
    pairs: &mut Vec<(String, Option<f64>)>,
) -> Result<(), ResolveError> {
    match node {
        MaterialAssignment::Material(material_id) => {
            pairs.push(material_pair(model, *material_id)?);
        }
        MaterialAssignment::MaterialList { materials } => {
            for &material_id in materials {
                pairs.push(material_pair(model, material_id)?);
            }
        }
        MaterialAssignment::LayerSet { layers } => {
            collect_layers(model, layers, node_id, pairs)?;
        }
        MaterialAssignment::LayerSetUsage { for_layer_set } => {
            let inner = model
                .material_assignment(*for_layer_set)
                .ok_or(ResolveError::MissingEntity(*for_layer_set))?;
            let MaterialAssignment::LayerSet { layers } = inner else {
                return Err(ResolveError::UnexpectedShape {
                    id: *for_layer_set,
                    expected: "material layer set",
                });
            };
            collect_layers(model, layers, *for_layer_set, pairs)?;
        }
        MaterialAssignment::ProfileSet { profiles } => {
            collect_profiles(model, profiles, node_id, pairs)?;
        }
        MaterialAssignment::ProfileSetUsage { for_profile_set } => {
            let inner = model
                .material_assignment(*for_profile_set)
                .ok_or(ResolveError::MissingEntity(*for_profile_set))?;
            let MaterialAssignment::ProfileSet { profiles } = inner else {
                return Err(ResolveError::UnexpectedShape {
                    id: *for_profile_set,
                    expected: "material profile set",
                });
            };
            collect_profiles(model, profiles, *for_profile_set, pairs)?;
        }
        MaterialAssignment::ConstituentSet { constituents } => {
            for constituent in constituents {
                let material_id = constituent
                    .material
                    .ok_or(ResolveError::IncompleteMaterialSet(node_id))?;
                pairs.push(material_pair(model, material_id)?);
            }
        }
    }
    Ok(())
}

fn collect_layers(
    model: &ModelGraph,
    layers: &[MaterialLayer],
    set_id: EntityId,
    pairs: &mut Vec<(String, Option<f64>)>,
) -> Result<(), ResolveError> {
    for layer in layers {
        let material_id = layer
            .material
            .ok_or(ResolveError::IncompleteMaterialSet(set_id))?;
        pairs.push(material_pair(model, material_id)?);
    }
    Ok(())
}

fn collect_profiles(
    model: &ModelGraph,
    profiles: &[MaterialProfile],
    set_id: EntityId,
    pairs: &mut Vec<(String, Option<f64>)>,
) -> Result<(), ResolveError> {
    for profile in profiles {
        let material_id = profile
            .material
            .ok_or(ResolveError::IncompleteMaterialSet(set_id))?;
        pairs.push(material_pair(model, material_id)?);
    }
    Ok(())
}

/// Name plus density of one material. A missing or non-numeric density
/// property reads as unknown, not as an error.
fn material_pair(
    model: &ModelGraph,
    material_id: EntityId,
) -> Result<(String, Option<f64>), ResolveError> {
    let material = model
        .material(material_id)
        .ok_or(ResolveError::MissingEntity(material_id))?;
    Ok((material.name.clone(), material_density(material)))
}

fn material_density(material: &Material) -> Option<f64> {
    find_material_property(material, MATERIAL_PSET, DENSITY_PROPERTY)
        .and_then(AttrValue::as_number)
}

/// Reduces collected pairs to one (descriptor, density). A single name
/// passes through untouched; joined lists are scrubbed of brackets and
/// of the output delimiter.
fn reduce(pairs: Vec<(String, Option<f64>)>) -> (String, Option<f64>) {
    match pairs.len() {
        0 => (String::new(), None),
        1 => pairs.into_iter().next().unwrap_or_default(),
        _ => {
            let names: Vec<String> = pairs.iter().map(|(name, _)| sanitize(name)).collect();
            (names.join(", "), unambiguous_density(&pairs))
        }
    }
}

fn sanitize(name: &str) -> String {
    name.replace(['[', ']'], "").replace(';', ",")
}

fn unambiguous_density(pairs: &[(String, Option<f64>)]) -> Option<f64> {
    let first = pairs.first()?.1?;
    pairs
        .iter()
        .all(|(_, density)| *density == Some(first))
        .then_some(first)
}

/// Thicknesses of all layers associated with the element, in layer order.
/// Only layer sets (directly or through a usage) contribute.
pub fn layer_thicknesses(
    model: &ModelGraph,
    element: &Element,
) -> Result<Vec<f64>, ResolveError> {
    let mut thicknesses = Vec::new();

    for &node_id in &element.material_associations {
        let node = model
            .material_assignment(node_id)
            .ok_or(ResolveError::MissingEntity(node_id))?;
        match node {
            MaterialAssignment::LayerSet { layers } => {
                thicknesses.extend(layers.iter().filter_map(|layer| layer.thickness));
            }
            MaterialAssignment::LayerSetUsage { for_layer_set } => {
                let inner = model
                    .material_assignment(*for_layer_set)
                    .ok_or(ResolveError::MissingEntity(*for_layer_set))?;
                let MaterialAssignment::LayerSet { layers } = inner else {
                    return Err(ResolveError::UnexpectedShape {
                        id: *for_layer_set,
                        expected: "material layer set",
                    });
                };
                thicknesses.extend(layers.iter().filter_map(|layer| layer.thickness));
            }
            _ => {}
        }
    }

    Ok(thicknesses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MaterialConstituent, PropertySet, SingleValue};
    use pretty_assertions::assert_eq;

    fn material(name: &str, density: Option<f64>) -> Material {
        let property_sets = density
            .map(|value| {
                vec![PropertySet {
                    name: "Pset_MaterialCommon".into(),
                    properties: vec![SingleValue {
                        name: "MassDensity".into(),
                        value: AttrValue::Number(value),
                        unit: None,
                    }],
                }]
            })
            .unwrap_or_default();
        Material {
            name: name.into(),
            property_sets,
        }
    }

    fn model_with(materials: Vec<(u64, Material)>) -> ModelGraph {
        let mut model = ModelGraph::default();
        for (id, material) in materials {
            model.material_assignments.insert(id, MaterialAssignment::Material(id));
            model.materials.insert(id, material);
        }
        model
    }

    fn element_with(associations: Vec<u64>) -> Element {
        Element {
            material_associations: associations,
            ..Element::default()
        }
    }

    #[test]
    fn no_materials_reduce_to_empty() {
        let model = ModelGraph::default();
        let element = element_with(Vec::new());
        assert_eq!(resolve_material(&model, &element).unwrap(), (String::new(), None));
    }

    #[test]
    fn single_material_keeps_its_density() {
        let model = model_with(vec![(1, material("Beton", Some(2400.0)))]);
        let element = element_with(vec![1]);
        assert_eq!(
            resolve_material(&model, &element).unwrap(),
            ("Beton".to_string(), Some(2400.0))
        );
    }

    #[test]
    fn differing_densities_read_as_unknown() {
        let model = model_with(vec![
            (1, material("Beton", Some(2400.0))),
            (2, material("Stahl", Some(7850.0))),
        ]);
        let element = element_with(vec![1, 2]);
        assert_eq!(
            resolve_material(&model, &element).unwrap(),
            ("Beton, Stahl".to_string(), None)
        );
    }

    #[test]
    fn equal_densities_survive_the_merge() {
        let model = model_with(vec![
            (1, material("Beton", Some(2400.0))),
            (2, material("Recyclingbeton", Some(2400.0))),
        ]);
        let element = element_with(vec![1, 2]);
        let (_, density) = resolve_material(&model, &element).unwrap();
        assert_eq!(density, Some(2400.0));
    }

    #[test]
    fn descriptor_is_safe_for_the_output_delimiter() {
        let model = model_with(vec![
            (1, material("Beton [C30/37]", None)),
            (2, material("Stahl; verzinkt", None)),
        ]);
        let element = element_with(vec![1, 2]);
        let (descriptor, _) = resolve_material(&model, &element).unwrap();
        assert_eq!(descriptor, "Beton C30/37, Stahl, verzinkt");
    }

    #[test]
    fn layer_set_usage_follows_the_indirection() {
        let mut model = model_with(vec![
            (1, material("Putz", Some(1400.0))),
            (2, material("Ziegel", Some(1400.0))),
        ]);
        model.material_assignments.insert(
            10,
            MaterialAssignment::LayerSet {
                layers: vec![
                    MaterialLayer {
                        material: Some(1),
                        thickness: Some(0.015),
                    },
                    MaterialLayer {
                        material: Some(2),
                        thickness: Some(0.24),
                    },
                ],
            },
        );
        model
            .material_assignments
            .insert(11, MaterialAssignment::LayerSetUsage { for_layer_set: 10 });
        let element = element_with(vec![11]);

        assert_eq!(
            resolve_material(&model, &element).unwrap(),
            ("Putz, Ziegel".to_string(), Some(1400.0))
        );
        assert_eq!(layer_thicknesses(&model, &element).unwrap(), vec![0.015, 0.24]);
    }

    #[test]
    fn constituents_without_material_are_malformed() {
        let mut model = ModelGraph::default();
        model.material_assignments.insert(
            5,
            MaterialAssignment::ConstituentSet {
                constituents: vec![MaterialConstituent {
                    name: Some("Rahmen".into()),
                    material: None,
                }],
            },
        );
        let element = element_with(vec![5]);
        let err = resolve_material(&model, &element).unwrap_err();
        assert_eq!(
            err.to_string(),
            "material set #5 contains an entry without a material"
        );
    }

    #[test]
    fn dangling_association_is_malformed() {
        let model = ModelGraph::default();
        let element = element_with(vec![77]);
        let err = resolve_material(&model, &element).unwrap_err();
        assert_eq!(err.to_string(), "reference to missing entity #77");
    }
}
