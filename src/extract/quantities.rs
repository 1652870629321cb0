//! Area and volume resolution per element-type family, SI prefix
//! normalization and mass derivation.

use crate::error::ResolveError;
use crate::model::{DeclaredUnit, Element, ElementKind, ModelGraph};

use super::properties::{find_number, find_property_unit};

/// Specialized quantity set consulted first; generic fallback second.
const QUANTITY_SET: &str = "QTo_WallBaseQuantities";
const QUANTITY_SET_FALLBACK: &str = "BaseQuantities";

/// Resolves the area of an element together with its declared unit.
///
/// Walls read `NetSideArea`, columns and coverings `GrossSurfaceArea`,
/// slabs and roofs `GrossArea`, shading devices `NetArea`. Windows and
/// doors multiply their overall height and width instead and carry no
/// declared unit. Every other kind resolves to nothing.
pub fn resolve_area(
    model: &ModelGraph,
    element: &Element,
) -> Result<(Option<f64>, Option<DeclaredUnit>), ResolveError> {
    let Some(kind) = element.kind else {
        return Ok((None, None));
    };
    let quantity_name = match kind {
        ElementKind::Wall => "NetSideArea",
        ElementKind::Window | ElementKind::Door => return Ok((opening_area(element), None)),
        ElementKind::Column | ElementKind::Covering => "GrossSurfaceArea",
        ElementKind::Slab | ElementKind::Roof => "GrossArea",
        ElementKind::ShadingDevice => "NetArea",
        _ => return Ok((None, None)),
    };
    quantity_pair(model, element, quantity_name)
}

/// Resolves the volume of an element. Openings and shading devices store
/// it under `Volume`, the structural kinds under `GrossVolume`.
pub fn resolve_volume(model: &ModelGraph, element: &Element) -> Result<Option<f64>, ResolveError> {
    let Some(kind) = element.kind else {
        return Ok(None);
    };
    let quantity_name = match kind {
        ElementKind::Wall
        | ElementKind::Column
        | ElementKind::Covering
        | ElementKind::Slab
        | ElementKind::Roof => "GrossVolume",
        ElementKind::Window | ElementKind::Door | ElementKind::ShadingDevice => "Volume",
        _ => return Ok(None),
    };
    quantity_number(model, element, quantity_name)
}

fn opening_area(element: &Element) -> Option<f64> {
    match (element.overall_height, element.overall_width) {
        (Some(height), Some(width)) => Some(height * width),
        _ => None,
    }
}

/// Value plus unit, both taken from whichever quantity set supplied the
/// value.
fn quantity_pair(
    model: &ModelGraph,
    element: &Element,
    quantity_name: &str,
) -> Result<(Option<f64>, Option<DeclaredUnit>), ResolveError> {
    if let Some(value) = find_number(model, element, QUANTITY_SET, quantity_name)? {
        let unit = find_property_unit(model, element, QUANTITY_SET, quantity_name).cloned();
        return Ok((Some(value), unit));
    }
    let value = find_number(model, element, QUANTITY_SET_FALLBACK, quantity_name)?;
    let unit = find_property_unit(model, element, QUANTITY_SET_FALLBACK, quantity_name).cloned();
    Ok((value, unit))
}

fn quantity_number(
    model: &ModelGraph,
    element: &Element,
    quantity_name: &str,
) -> Result<Option<f64>, ResolveError> {
    if let Some(value) = find_number(model, element, QUANTITY_SET, quantity_name)? {
        return Ok(Some(value));
    }
    find_number(model, element, QUANTITY_SET_FALLBACK, quantity_name)
}

/// Power-of-ten factor of an SI prefix. Unprefixed and unrecognized
/// prefixes scale by one.
#[must_use]
pub fn si_prefix_factor(prefix: Option<&str>) -> f64 {
    match prefix {
        Some("EXA") => 1e18,
        Some("PETA") => 1e15,
        Some("TERA") => 1e12,
        Some("GIGA") => 1e9,
        Some("MEGA") => 1e6,
        Some("KILO") => 1e3,
        Some("HECTO") => 1e2,
        Some("DECA") => 1e1,
        Some("DECI") => 1e-1,
        Some("CENTI") => 1e-2,
        Some("MILLI") => 1e-3,
        Some("MICRO") => 1e-6,
        Some("NANO") => 1e-9,
        Some("PICO") => 1e-12,
        Some("FEMTO") => 1e-15,
        Some("ATTO") => 1e-18,
        _ => 1.0,
    }
}

/// Scales a value into the bare base unit, dropping the prefix.
#[must_use]
pub fn to_base_unit(value: f64, unit: &DeclaredUnit) -> (f64, String) {
    (value * si_prefix_factor(unit.prefix.as_deref()), unit.name.clone())
}

/// Mass is volume times density, only when both are known. Missing
/// factors are never substituted with zero.
#[must_use]
pub fn derive_mass(volume: Option<f64>, density: Option<f64>) -> Option<f64> {
    match (volume, density) {
        (Some(volume), Some(density)) => Some(volume * density),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttrValue, DefinitionSet, Quantity, QuantitySet};
    use pretty_assertions::assert_eq;

    fn quantity_set(set_name: &str, quantity_name: &str, value: f64) -> DefinitionSet {
        DefinitionSet::Quantities(QuantitySet {
            name: set_name.into(),
            quantities: vec![Quantity {
                name: quantity_name.into(),
                fields: vec![("AreaValue".into(), AttrValue::Number(value))],
                unit: None,
            }],
        })
    }

    #[test]
    fn specialized_set_wins_over_fallback() {
        let mut model = ModelGraph::default();
        model
            .definition_sets
            .insert(1, quantity_set("BaseQuantities", "NetSideArea", 99.0));
        model
            .definition_sets
            .insert(2, quantity_set("QTo_WallBaseQuantities", "NetSideArea", 12.5));
        let element = Element {
            kind: Some(ElementKind::Wall),
            property_sets: vec![1, 2],
            ..Element::default()
        };
        let (area, _) = resolve_area(&model, &element).unwrap();
        assert_eq!(area, Some(12.5));
    }

    #[test]
    fn openings_multiply_height_and_width() {
        let element = Element {
            kind: Some(ElementKind::Window),
            overall_height: Some(1.2),
            overall_width: Some(0.8),
            ..Element::default()
        };
        let model = ModelGraph::default();
        assert_eq!(resolve_area(&model, &element).unwrap(), (Some(1.2 * 0.8), None));

        let half = Element {
            kind: Some(ElementKind::Door),
            overall_height: Some(2.1),
            ..Element::default()
        };
        assert_eq!(resolve_area(&model, &half).unwrap(), (None, None));
    }

    #[test]
    fn unhandled_kinds_resolve_to_nothing() {
        let model = ModelGraph::default();
        let element = Element {
            kind: Some(ElementKind::Boiler),
            ..Element::default()
        };
        assert_eq!(resolve_area(&model, &element).unwrap(), (None, None));
        assert_eq!(resolve_volume(&model, &element).unwrap(), None);
    }

    #[test]
    fn base_unit_conversion_is_idempotent_on_bare_units() {
        let bare = DeclaredUnit {
            prefix: None,
            name: "SQUARE_METRE".into(),
        };
        assert_eq!(to_base_unit(12.5, &bare), (12.5, "SQUARE_METRE".into()));
    }

    #[test]
    fn prefixes_scale_by_powers_of_ten() {
        let kilo = DeclaredUnit {
            prefix: Some("KILO".into()),
            name: "GRAM".into(),
        };
        assert_eq!(to_base_unit(10.0, &kilo), (10_000.0, "GRAM".into()));
        assert_eq!(si_prefix_factor(Some("MILLI")), 1e-3);
        assert_eq!(si_prefix_factor(Some("SOMETHING")), 1.0);
        assert_eq!(si_prefix_factor(None), 1.0);
    }

    #[test]
    fn mass_needs_both_factors() {
        assert_eq!(derive_mass(Some(2.0), Some(1000.0)), Some(2000.0));
        assert_eq!(derive_mass(None, Some(1000.0)), None);
        assert_eq!(derive_mass(Some(2.0), None), None);
    }
}
