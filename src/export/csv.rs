use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ExportError;
use crate::extract::cost_group_label;
use crate::model::ClassificationRecord;

/// Column order expected by the eLCA import. `Flaeche` is the area in the
/// base unit named by `Unit`, `Masse` the derived mass in kilograms.
const HEADER: [&str; 10] = [
    "Name",
    "Kostengruppe",
    "Flaeche",
    "Masse",
    "Typ",
    "Stockwerk",
    "Material",
    "GUID",
    "PredefinedType",
    "Unit",
];

/// Optional trailing column carrying the DIN 276 group description.
const LABEL_HEADER: &str = "Kostengruppenbezeichnung";

/// Writes the classification table as semicolon-separated CSV.
pub fn export_csv<P: AsRef<Path>>(
    records: &[ClassificationRecord],
    path: P,
    with_labels: bool,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;
    write_csv(file, records, with_labels)
}

fn write_csv<W: Write>(
    out: W,
    records: &[ClassificationRecord],
    with_labels: bool,
) -> Result<(), ExportError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    let mut header: Vec<&str> = HEADER.to_vec();
    if with_labels {
        header.push(LABEL_HEADER);
    }
    writer.write_record(&header)?;

    for record in records {
        let mut row = vec![
            record.name.clone().unwrap_or_default(),
            record
                .cost_group
                .map(|code| code.to_string())
                .unwrap_or_default(),
            record.area.map(|value| value.to_string()).unwrap_or_default(),
            record.mass.map(|value| value.to_string()).unwrap_or_default(),
            record.type_tag.clone().unwrap_or_default(),
            record.storey.clone().unwrap_or_default(),
            record.material.clone().unwrap_or_default(),
            record.global_id.clone().unwrap_or_default(),
            record.predefined_type.clone().unwrap_or_default(),
            record.unit.clone().unwrap_or_default(),
        ];
        if with_labels {
            row.push(cost_group_label(record.cost_group).to_string());
        }
        writer.write_record(&row)?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(records: &[ClassificationRecord], with_labels: bool) -> String {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, records, with_labels).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn header_matches_the_import_contract() {
        assert_eq!(
            render(&[], false),
            "Name;Kostengruppe;Flaeche;Masse;Typ;Stockwerk;Material;GUID;PredefinedType;Unit\n"
        );
    }

    #[test]
    fn missing_fields_become_empty_cells() {
        let output = render(&[ClassificationRecord::default()], false);
        let row = output.lines().nth(1).unwrap();
        assert_eq!(row, ";;;;;;;;;");
    }

    #[test]
    fn values_render_in_plain_decimal_notation() {
        let record = ClassificationRecord {
            name: Some("Wand 1".into()),
            cost_group: Some(331),
            area: Some(12.5),
            mass: Some(4800.0),
            type_tag: Some("IfcWallStandardCase".into()),
            storey: Some("EG".into()),
            material: Some("Beton".into()),
            global_id: Some("0aBcDeFgHiJkLmNoPqRsT1".into()),
            predefined_type: Some("STANDARD".into()),
            unit: Some("SQUARE_METRE".into()),
            ..ClassificationRecord::default()
        };
        let output = render(&[record], false);
        let row = output.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "Wand 1;331;12.5;4800;IfcWallStandardCase;EG;Beton;0aBcDeFgHiJkLmNoPqRsT1;STANDARD;SQUARE_METRE"
        );
    }

    #[test]
    fn label_column_carries_the_group_description() {
        let classified = ClassificationRecord {
            cost_group: Some(331),
            ..ClassificationRecord::default()
        };
        let output = render(&[classified, ClassificationRecord::default()], true);
        let mut lines = output.lines();
        assert!(lines.next().unwrap().ends_with(";Kostengruppenbezeichnung"));
        assert!(lines.next().unwrap().ends_with(";Tragende Außenwände"));
        assert!(lines.next().unwrap().ends_with(
            ";Kostengruppe kann nicht ermittelt werden. Grund dafür ist Mangel an Information."
        ));
    }
}
