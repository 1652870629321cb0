//! Typed lookup of named properties and quantities across an element's
//! definition sets.
//!
//! Lookups walk every set attached to the element in relationship order;
//! a set that matches by name but lacks the property does not stop the
//! walk. Absence is `None` and never an error; a value of the wrong type
//! is a [`ResolveError`] the record assembler logs per field.

use crate::error::ResolveError;
use crate::model::{AttrValue, DeclaredUnit, DefinitionSet, Element, Material, ModelGraph};

/// Attribute-name suffix that marks the value field of a quantity.
const VALUE_SUFFIX: &str = "Value";

/// Looks up a property or quantity value by set name and property name.
pub fn find_property<'a>(
    model: &'a ModelGraph,
    element: &Element,
    set_name: &str,
    property_name: &str,
) -> Option<&'a AttrValue> {
    for &set_id in &element.property_sets {
        let Some(set) = model.definition_set(set_id) else {
            continue;
        };
        if set.name() != set_name {
            continue;
        }
        match set {
            DefinitionSet::Properties(set) => {
                if let Some(property) = set.properties.iter().find(|p| p.name == property_name) {
                    return Some(&property.value);
                }
            }
            DefinitionSet::Quantities(set) => {
                if let Some(quantity) = set.quantities.iter().find(|q| q.name == property_name) {
                    if let Some((_, value)) =
                        quantity.fields.iter().find(|(tag, _)| tag.ends_with(VALUE_SUFFIX))
                    {
                        return Some(value);
                    }
                }
            }
        }
    }
    None
}

/// Looks up the declared unit of a property or quantity. A quantity only
/// reports its unit when it also carries a value field.
pub fn find_property_unit<'a>(
    model: &'a ModelGraph,
    element: &Element,
    set_name: &str,
    property_name: &str,
) -> Option<&'a DeclaredUnit> {
    for &set_id in &element.property_sets {
        let Some(set) = model.definition_set(set_id) else {
            continue;
        };
        if set.name() != set_name {
            continue;
        }
        match set {
            DefinitionSet::Properties(set) => {
                if let Some(property) = set.properties.iter().find(|p| p.name == property_name) {
                    return property.unit.as_ref();
                }
            }
            DefinitionSet::Quantities(set) => {
                if let Some(quantity) = set.quantities.iter().find(|q| q.name == property_name) {
                    if quantity.fields.iter().any(|(tag, _)| tag.ends_with(VALUE_SUFFIX)) {
                        return quantity.unit.as_ref();
                    }
                }
            }
        }
    }
    None
}

/// Looks up a property on a material's own property sets.
pub fn find_material_property<'a>(
    material: &'a Material,
    set_name: &str,
    property_name: &str,
) -> Option<&'a AttrValue> {
    material
        .property_sets
        .iter()
        .filter(|set| set.name == set_name)
        .find_map(|set| set.properties.iter().find(|p| p.name == property_name))
        .map(|property| &property.value)
}

/// Boolean property lookup. The unknown-logical markers `U` and `UNKNOWN`
/// read as unresolved rather than as a type error.
pub fn find_bool(
    model: &ModelGraph,
    element: &Element,
    set_name: &str,
    property_name: &str,
) -> Result<Option<bool>, ResolveError> {
    let Some(value) = find_property(model, element, set_name, property_name) else {
        return Ok(None);
    };
    match value {
        AttrValue::Flag(flag) => Ok(Some(*flag)),
        AttrValue::Ident(ident) if ident == "U" || ident == "UNKNOWN" => Ok(None),
        other => Err(ResolveError::UnexpectedType {
            set: set_name.to_string(),
            name: property_name.to_string(),
            found: other.type_name(),
        }),
    }
}

/// Numeric property lookup. Integers widen to `f64`.
pub fn find_number(
    model: &ModelGraph,
    element: &Element,
    set_name: &str,
    property_name: &str,
) -> Result<Option<f64>, ResolveError> {
    let Some(value) = find_property(model, element, set_name, property_name) else {
        return Ok(None);
    };
    value.as_number().map(Some).ok_or_else(|| ResolveError::UnexpectedType {
        set: set_name.to_string(),
        name: property_name.to_string(),
        found: value.type_name(),
    })
}

/// Text property lookup.
pub fn find_text<'a>(
    model: &'a ModelGraph,
    element: &Element,
    set_name: &str,
    property_name: &str,
) -> Result<Option<&'a str>, ResolveError> {
    let Some(value) = find_property(model, element, set_name, property_name) else {
        return Ok(None);
    };
    value.as_text().map(Some).ok_or_else(|| ResolveError::UnexpectedType {
        set: set_name.to_string(),
        name: property_name.to_string(),
        found: value.type_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertySet, Quantity, QuantitySet, SingleValue};
    use pretty_assertions::assert_eq;

    fn sample() -> (ModelGraph, Element) {
        let mut model = ModelGraph::default();
        model.definition_sets.insert(
            1,
            DefinitionSet::Properties(PropertySet {
                name: "Pset_WallCommon".into(),
                properties: vec![
                    SingleValue {
                        name: "IsExternal".into(),
                        value: AttrValue::Flag(true),
                        unit: None,
                    },
                    SingleValue {
                        name: "Reference".into(),
                        value: AttrValue::Text("AW 24".into()),
                        unit: None,
                    },
                    SingleValue {
                        name: "FireRating".into(),
                        value: AttrValue::Ident("U".into()),
                        unit: None,
                    },
                ],
            }),
        );
        model.definition_sets.insert(
            2,
            DefinitionSet::Quantities(QuantitySet {
                name: "BaseQuantities".into(),
                quantities: vec![
                    Quantity {
                        name: "NetSideArea".into(),
                        fields: vec![("AreaValue".into(), AttrValue::Number(12.5))],
                        unit: Some(DeclaredUnit {
                            prefix: None,
                            name: "SQUARE_METRE".into(),
                        }),
                    },
                    Quantity {
                        name: "Width".into(),
                        fields: Vec::new(),
                        unit: Some(DeclaredUnit {
                            prefix: Some("MILLI".into()),
                            name: "METRE".into(),
                        }),
                    },
                ],
            }),
        );
        let element = Element {
            property_sets: vec![1, 2],
            ..Element::default()
        };
        (model, element)
    }

    #[test]
    fn finds_values_in_both_set_shapes() {
        let (model, element) = sample();
        assert_eq!(
            find_bool(&model, &element, "Pset_WallCommon", "IsExternal").unwrap(),
            Some(true)
        );
        assert_eq!(
            find_number(&model, &element, "BaseQuantities", "NetSideArea").unwrap(),
            Some(12.5)
        );
        assert_eq!(
            find_text(&model, &element, "Pset_WallCommon", "Reference").unwrap(),
            Some("AW 24")
        );
    }

    #[test]
    fn absence_is_not_an_error() {
        let (model, element) = sample();
        assert_eq!(
            find_bool(&model, &element, "Pset_WallCommon", "LoadBearing").unwrap(),
            None
        );
        assert_eq!(
            find_number(&model, &element, "QTo_WallBaseQuantities", "NetSideArea").unwrap(),
            None
        );
    }

    #[test]
    fn unknown_logical_reads_as_unresolved() {
        let (model, element) = sample();
        assert_eq!(
            find_bool(&model, &element, "Pset_WallCommon", "FireRating").unwrap(),
            None
        );
    }

    #[test]
    fn type_mismatch_is_reported() {
        let (model, element) = sample();
        let err = find_bool(&model, &element, "Pset_WallCommon", "Reference").unwrap_err();
        assert_eq!(
            err.to_string(),
            "property 'Pset_WallCommon.Reference' has unexpected type text"
        );
    }

    #[test]
    fn quantity_unit_requires_a_value_field() {
        let (model, element) = sample();
        let unit = find_property_unit(&model, &element, "BaseQuantities", "NetSideArea");
        assert_eq!(unit.map(|u| u.name.as_str()), Some("SQUARE_METRE"));
        // Width has a unit but no value field, so no unit is reported.
        assert_eq!(find_property_unit(&model, &element, "BaseQuantities", "Width"), None);
    }
}
