use serde::Serialize;

/// One output row. Every field is independently optional: missing model
/// data leaves a field empty without affecting the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassificationRecord {
    pub name: Option<String>,
    /// DIN 276 cost group (Kostengruppe), absent when undeterminable.
    pub cost_group: Option<u16>,
    pub area: Option<f64>,
    pub mass: Option<f64>,
    pub type_tag: Option<String>,
    pub storey: Option<String>,
    pub material: Option<String>,
    pub global_id: Option<String>,
    pub predefined_type: Option<String>,
    /// Base unit name of the area value, e.g. `SQUARE_METRE`.
    pub unit: Option<String>,
    /// Thicknesses of associated material layers. Serialized with the
    /// record but not part of the CSV contract.
    pub layer_thicknesses: Vec<f64>,
}
