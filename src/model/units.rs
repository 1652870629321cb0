/// A unit as declared by the model: optional SI prefix plus base unit name,
/// e.g. (`MILLI`, `METRE`) or (none, `SQUARE_METRE`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredUnit {
    pub prefix: Option<String>,
    pub name: String,
}

/// The SI units a model declares in its IfcUnitAssignment, one list per
/// unit kind. The first declaration of a kind is the model default.
#[derive(Debug, Clone, Default)]
pub struct UnitTable {
    pub length: Vec<DeclaredUnit>,
    pub area: Vec<DeclaredUnit>,
    pub volume: Vec<DeclaredUnit>,
    pub mass: Vec<DeclaredUnit>,
}

impl UnitTable {
    /// The model's default area unit. Models without a declared AREAUNIT
    /// fall back to plain square metres.
    #[must_use]
    pub fn default_area(&self) -> DeclaredUnit {
        self.area.first().cloned().unwrap_or(DeclaredUnit {
            prefix: None,
            name: "SQUARE_METRE".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_area_falls_back_to_square_metre() {
        let table = UnitTable::default();
        assert_eq!(
            table.default_area(),
            DeclaredUnit {
                prefix: None,
                name: "SQUARE_METRE".to_string(),
            }
        );
    }

    #[test]
    fn first_declared_area_unit_wins() {
        let table = UnitTable {
            area: vec![
                DeclaredUnit {
                    prefix: Some("MILLI".to_string()),
                    name: "SQUARE_METRE".to_string(),
                },
                DeclaredUnit {
                    prefix: None,
                    name: "SQUARE_METRE".to_string(),
                },
            ],
            ..UnitTable::default()
        };
        assert_eq!(table.default_area().prefix.as_deref(), Some("MILLI"));
    }
}
