use super::units::DeclaredUnit;

/// A resolved attribute value inside a property or quantity set.
///
/// Absence and type mismatch are expressed through the `Option`-returning
/// accessors, never through panics.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
    Integer(i64),
    Flag(bool),
    /// Enumeration identifier, e.g. `NOTDEFINED` or the unknown-logical `U`.
    Ident(String),
}

impl AttrValue {
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Integer(value) => Some(*value as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Short type label for diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Integer(_) => "integer",
            Self::Flag(_) => "boolean",
            Self::Ident(_) => "enumeration",
        }
    }
}

/// A named single-value property (IfcPropertySingleValue).
#[derive(Debug, Clone)]
pub struct SingleValue {
    pub name: String,
    pub value: AttrValue,
    pub unit: Option<DeclaredUnit>,
}

/// A property set: name plus single-value properties.
#[derive(Debug, Clone)]
pub struct PropertySet {
    pub name: String,
    pub properties: Vec<SingleValue>,
}

/// One physical quantity (IfcQuantityArea, IfcQuantityVolume, ...).
///
/// The schema tags the carrying attribute with a `...Value` suffix; the
/// named fields are kept so the resolver can scan for that suffix instead
/// of assuming a position.
#[derive(Debug, Clone)]
pub struct Quantity {
    pub name: String,
    pub fields: Vec<(String, AttrValue)>,
    pub unit: Option<DeclaredUnit>,
}

/// A quantity set (IfcElementQuantity): name plus quantities.
#[derive(Debug, Clone)]
pub struct QuantitySet {
    pub name: String,
    pub quantities: Vec<Quantity>,
}

/// Target of a property-definition relationship: one of the two set shapes.
#[derive(Debug, Clone)]
pub enum DefinitionSet {
    Properties(PropertySet),
    Quantities(QuantitySet),
}

impl DefinitionSet {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Properties(set) => &set.name,
            Self::Quantities(set) => &set.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accessors_reject_mismatched_types() {
        let value = AttrValue::Text("Beton".into());
        assert_eq!(value.as_number(), None);
        assert_eq!(value.as_bool(), None);
        assert_eq!(value.as_text(), Some("Beton"));
    }

    #[test]
    fn integers_count_as_numbers() {
        assert_eq!(AttrValue::Integer(3).as_number(), Some(3.0));
        assert_eq!(AttrValue::Number(2400.0).as_number(), Some(2400.0));
    }

    #[test]
    fn definition_set_name_covers_both_shapes() {
        let properties = DefinitionSet::Properties(PropertySet {
            name: "Pset_WallCommon".into(),
            properties: Vec::new(),
        });
        let quantities = DefinitionSet::Quantities(QuantitySet {
            name: "BaseQuantities".into(),
            quantities: Vec::new(),
        });
        assert_eq!(properties.name(), "Pset_WallCommon");
        assert_eq!(quantities.name(), "BaseQuantities");
    }
}
