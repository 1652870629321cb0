use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ExportError;
use crate::model::ClassificationRecord;

/// Writes the classification table as pretty-printed JSON, including the
/// layer thicknesses the CSV contract has no column for.
pub fn export_json<P: AsRef<Path>>(
    records: &[ClassificationRecord],
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(records)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn records_serialize_with_stable_field_names() {
        let record = ClassificationRecord {
            cost_group: Some(331),
            layer_thicknesses: vec![0.015, 0.24],
            ..ClassificationRecord::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["cost_group"], 331);
        assert_eq!(value["layer_thicknesses"][1], 0.24);
        assert_eq!(value["name"], serde_json::Value::Null);
    }
}
