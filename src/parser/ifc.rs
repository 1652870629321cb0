use std::collections::HashMap;
use std::path::Path;

use crate::error::ParseError;
use crate::model::{
    AttrValue, DeclaredUnit, DefinitionSet, Element, ElementKind, Group, Material,
    MaterialAssignment, MaterialConstituent, MaterialLayer, MaterialProfile, ModelGraph,
    PropertySet, Quantity, QuantitySet, SingleValue, Storey, UnitTable,
};
use crate::parser::step::{StepEntity, StepFile, StepValue};

/// Products that never become rows, regardless of geometry.
const EXCLUDED_TYPES: &[&str] = &[
    "IFCVIRTUALELEMENT",
    "IFCANNOTATION",
    "IFCOPENINGELEMENT",
    "IFCSITE",
    "IFCSPACE",
];

// Product vocabulary: STEP tag → display tag. Covers every classifiable
// kind plus common products that stay unclassified but still get a row.
const PRODUCT_TYPES: &[(&str, &str)] = &[
    // Building construction
    ("IFCBEAM", "IfcBeam"),
    ("IFCBUILDINGELEMENTPROXY", "IfcBuildingElementProxy"),
    ("IFCCHIMNEY", "IfcChimney"),
    ("IFCCOLUMN", "IfcColumn"),
    ("IFCCOVERING", "IfcCovering"),
    ("IFCCURTAINWALL", "IfcCurtainWall"),
    ("IFCDOOR", "IfcDoor"),
    ("IFCFOOTING", "IfcFooting"),
    ("IFCMEMBER", "IfcMember"),
    ("IFCPILE", "IfcPile"),
    ("IFCPLATE", "IfcPlate"),
    ("IFCRAILING", "IfcRailing"),
    ("IFCRAMP", "IfcRamp"),
    ("IFCRAMPFLIGHT", "IfcRampFlight"),
    ("IFCROOF", "IfcRoof"),
    ("IFCSHADINGDEVICE", "IfcShadingDevice"),
    ("IFCSLAB", "IfcSlab"),
    ("IFCSTAIR", "IfcStair"),
    ("IFCSTAIRFLIGHT", "IfcStairFlight"),
    ("IFCWALL", "IfcWall"),
    ("IFCWALLSTANDARDCASE", "IfcWallStandardCase"),
    ("IFCWALLELEMENTEDCASE", "IfcWallElementedCase"),
    ("IFCWINDOW", "IfcWindow"),
    // Distribution control
    ("IFCACTUATOR", "IfcActuator"),
    ("IFCALARM", "IfcAlarm"),
    ("IFCCONTROLLER", "IfcController"),
    ("IFCFLOWINSTRUMENT", "IfcFlowInstrument"),
    ("IFCPROTECTIVEDEVICETRIPPINGUNIT", "IfcProtectiveDeviceTrippingUnit"),
    ("IFCSENSOR", "IfcSensor"),
    ("IFCUNITARYCONTROLELEMENT", "IfcUnitaryControlElement"),
    ("IFCDISTRIBUTIONCHAMBERELEMENT", "IfcDistributionChamberElement"),
    // Energy conversion
    ("IFCAIRTOAIRHEATRECOVERY", "IfcAirToAirHeatRecovery"),
    ("IFCBOILER", "IfcBoiler"),
    ("IFCBURNER", "IfcBurner"),
    ("IFCCHILLER", "IfcChiller"),
    ("IFCCOIL", "IfcCoil"),
    ("IFCCONDENSER", "IfcCondenser"),
    ("IFCCOOLEDBEAM", "IfcCooledBeam"),
    ("IFCCOOLINGTOWER", "IfcCoolingTower"),
    ("IFCELECTRICGENERATOR", "IfcElectricGenerator"),
    ("IFCELECTRICMOTOR", "IfcElectricMotor"),
    ("IFCENGINE", "IfcEngine"),
    ("IFCMOTOR", "IfcMotor"),
    ("IFCEVAPORATIVECOOLER", "IfcEvaporativeCooler"),
    ("IFCEVAPORATOR", "IfcEvaporator"),
    ("IFCHEATEXCHANGER", "IfcHeatExchanger"),
    ("IFCHUMIDIFIER", "IfcHumidifier"),
    ("IFCMOTORCONNECTION", "IfcMotorConnection"),
    ("IFCSOLARDEVICE", "IfcSolarDevice"),
    ("IFCTRANSFORMER", "IfcTransformer"),
    ("IFCTUBEBUNDLE", "IfcTubeBundle"),
    ("IFCUNITARYEQUIPMENT", "IfcUnitaryEquipment"),
    // Flow control
    ("IFCAIRTERMINALBOX", "IfcAirTerminalBox"),
    ("IFCDAMPER", "IfcDamper"),
    ("IFCELECTRICDISTRIBUTIONBOARD", "IfcElectricDistributionBoard"),
    ("IFCELECTRICTIMECONTROL", "IfcElectricTimeControl"),
    ("IFCFLOWMETER", "IfcFlowMeter"),
    ("IFCPROTECTIVEDEVICE", "IfcProtectiveDevice"),
    ("IFCSWITCHINGDEVICE", "IfcSwitchingDevice"),
    ("IFCVALVE", "IfcValve"),
    // Flow fittings
    ("IFCCABLECARRIERFITTING", "IfcCableCarrierFitting"),
    ("IFCCABLEFITTING", "IfcCableFitting"),
    ("IFCDUCTFITTING", "IfcDuctFitting"),
    ("IFCJUNCTIONBOX", "IfcJunctionBox"),
    ("IFCPIPEFITTING", "IfcPipeFitting"),
    // Flow movers
    ("IFCCOMPRESSOR", "IfcCompressor"),
    ("IFCFAN", "IfcFan"),
    ("IFCPUMP", "IfcPump"),
    // Flow segments and storage
    ("IFCFLOWSEGMENT", "IfcFlowSegment"),
    ("IFCCABLECARRIERSEGMENT", "IfcCableCarrierSegment"),
    ("IFCCABLESEGMENT", "IfcCableSegment"),
    ("IFCDUCTSEGMENT", "IfcDuctSegment"),
    ("IFCPIPESEGMENT", "IfcPipeSegment"),
    ("IFCTANK", "IfcTank"),
    // Flow terminals
    ("IFCAIRTERMINAL", "IfcAirTerminal"),
    ("IFCAUDIOVISUALAPPLIANCE", "IfcAudioVisualAppliance"),
    ("IFCCOMMUNICATIONSAPPLIANCE", "IfcCommunicationsAppliance"),
    ("IFCELECTRICAPPLIANCE", "IfcElectricAppliance"),
    ("IFCFIRESUPPRESSIONTERMINAL", "IfcFireSuppressionTerminal"),
    ("IFCLAMP", "IfcLamp"),
    ("IFCLIGHTFIXTURE", "IfcLightFixture"),
    ("IFCMEDICALDEVICE", "IfcMedicalDevice"),
    ("IFCOUTLET", "IfcOutlet"),
    ("IFCSANITARYTERMINAL", "IfcSanitaryTerminal"),
    ("IFCSPACEHEATER", "IfcSpaceHeater"),
    ("IFCSTACKTERMINAL", "IfcStackTerminal"),
    ("IFCWASTETERMINAL", "IfcWasteTerminal"),
    ("IFCFLOWTERMINAL", "IfcFlowTerminal"),
    // Flow treatment
    ("IFCDUCTSILENCER", "IfcDuctSilencer"),
    ("IFCFILTER", "IfcFilter"),
    ("IFCINTERCEPTOR", "IfcInterceptor"),
    // Furnishing
    ("IFCFURNITURE", "IfcFurniture"),
    ("IFCSYSTEMFURNITUREELEMENT", "IfcSystemFurnitureElement"),
    // Products without a classification entry; they still get rows
    ("IFCFURNISHINGELEMENT", "IfcFurnishingElement"),
    ("IFCTRANSPORTELEMENT", "IfcTransportElement"),
    ("IFCDISTRIBUTIONELEMENT", "IfcDistributionElement"),
    ("IFCDISTRIBUTIONCONTROLELEMENT", "IfcDistributionControlElement"),
    ("IFCENERGYCONVERSIONDEVICE", "IfcEnergyConversionDevice"),
    ("IFCFLOWCONTROLLER", "IfcFlowController"),
    ("IFCFLOWFITTING", "IfcFlowFitting"),
    ("IFCFLOWMOVINGDEVICE", "IfcFlowMovingDevice"),
    ("IFCFLOWSTORAGEDEVICE", "IfcFlowStorageDevice"),
    ("IFCELECTRICFLOWSTORAGEDEVICE", "IfcElectricFlowStorageDevice"),
    ("IFCFLOWTREATMENTDEVICE", "IfcFlowTreatmentDevice"),
    ("IFCBUILDINGELEMENTPART", "IfcBuildingElementPart"),
    ("IFCDISCRETEACCESSORY", "IfcDiscreteAccessory"),
    ("IFCGEOGRAPHICELEMENT", "IfcGeographicElement"),
];

// Attribute names of the physical quantity entities; the attribute carrying
// the value is the one whose name ends in "Value".
const QUANTITY_ATTRS: &[(&str, &[&str])] = &[
    ("IFCQUANTITYLENGTH", &["Name", "Description", "Unit", "LengthValue", "Formula"]),
    ("IFCQUANTITYAREA", &["Name", "Description", "Unit", "AreaValue", "Formula"]),
    ("IFCQUANTITYVOLUME", &["Name", "Description", "Unit", "VolumeValue", "Formula"]),
    ("IFCQUANTITYCOUNT", &["Name", "Description", "Unit", "CountValue", "Formula"]),
    ("IFCQUANTITYWEIGHT", &["Name", "Description", "Unit", "WeightValue", "Formula"]),
    ("IFCQUANTITYTIME", &["Name", "Description", "Unit", "TimeValue", "Formula"]),
];

/// Parses an IFC file into the model graph the extraction core traverses.
///
/// Supports both IFC2x3 and IFC4 schemas. Builds:
/// - Elements of the product vocabulary (minus the exclusion set and
///   products without geometric representation)
/// - Pre-resolved relationship indexes: property definitions, spatial
///   containment, material associations, group assignments
/// - Typed property and quantity sets, materials with their property sets
/// - The declared SI unit table and the storey list
///
/// # Arguments
///
/// * `path` - Path to the IFC file
///
/// # Errors
///
/// Returns [`ParseError::FileRead`] if the file cannot be read.
/// Returns [`ParseError::InvalidStep`] if the STEP format is malformed.
///
/// # Example
///
/// ```no_run
/// use ifc2lca::parser::parse_ifc_file;
///
/// let model = parse_ifc_file("model.ifc")?;
/// println!("{} elements ({})", model.elements.len(), model.schema);
/// # Ok::<(), ifc2lca::error::ParseError>(())
/// ```
pub fn parse_ifc_file<P: AsRef<Path>>(path: P) -> Result<ModelGraph, ParseError> {
    let content = std::fs::read_to_string(&path).map_err(|source| ParseError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;

    let step_file = StepFile::parse(&content)?;
    Ok(build_model(&step_file))
}

/// Builds the read-only model graph from a parsed STEP file.
#[must_use]
pub fn build_model(step_file: &StepFile) -> ModelGraph {
    let units = extract_units(step_file);
    let storeys = extract_storeys(step_file);
    let element_to_storey = extract_spatial_containment(step_file);
    let definition_sets = extract_definition_sets(step_file);
    let element_to_sets = extract_property_relationships(step_file);
    let materials = extract_materials(step_file);
    let material_assignments = extract_material_assignments(step_file, &materials);
    let element_to_materials = extract_material_relationships(step_file);
    let (groups, element_to_groups) = extract_groups(step_file);

    let elements = extract_elements(
        step_file,
        &element_to_storey,
        &element_to_sets,
        &element_to_materials,
        &element_to_groups,
    );

    ModelGraph {
        schema: step_file.schema.clone(),
        elements,
        units,
        storeys,
        definition_sets,
        materials,
        material_assignments,
        groups,
    }
}

fn product_display_tag(entity_type: &str) -> Option<&'static str> {
    PRODUCT_TYPES
        .iter()
        .find(|(tag, _)| *tag == entity_type)
        .map(|(_, display)| *display)
}

fn reference_list(value: Option<&StepValue>) -> Vec<u64> {
    value
        .and_then(StepValue::as_list)
        .map(|items| items.iter().filter_map(StepValue::as_reference).collect())
        .unwrap_or_default()
}

fn attr_value(value: &StepValue) -> Option<AttrValue> {
    match value {
        StepValue::String(s) => Some(AttrValue::Text(s.clone())),
        StepValue::Real(f) => Some(AttrValue::Number(*f)),
        StepValue::Integer(i) => Some(AttrValue::Integer(*i)),
        StepValue::Boolean(b) => Some(AttrValue::Flag(*b)),
        StepValue::Enum(e) => Some(AttrValue::Ident(e.clone())),
        StepValue::Reference(_) | StepValue::List(_) | StepValue::Null | StepValue::Derived => None,
    }
}

/// Resolves a unit reference to its declared SI unit. Conversion-based
/// units are not resolved; callers fall back to the model defaults.
fn resolve_unit(step_file: &StepFile, value: &StepValue) -> Option<DeclaredUnit> {
    let entity = step_file.entity(value.as_reference()?)?;
    if entity.entity_type != "IFCSIUNIT" {
        return None;
    }
    // Index 2 = Prefix, index 3 = Name
    Some(DeclaredUnit {
        prefix: entity.attr(2).and_then(StepValue::as_enum).map(str::to_string),
        name: entity.attr(3).and_then(StepValue::as_enum)?.to_string(),
    })
}

fn extract_units(step_file: &StepFile) -> UnitTable {
    let mut units = UnitTable::default();

    for entity in step_file.entities_of("IFCSIUNIT") {
        // Index 1 = UnitType, index 2 = Prefix, index 3 = Name
        let Some(kind) = entity.attr(1).and_then(StepValue::as_enum) else {
            continue;
        };
        let Some(name) = entity.attr(3).and_then(StepValue::as_enum) else {
            continue;
        };
        let unit = DeclaredUnit {
            prefix: entity.attr(2).and_then(StepValue::as_enum).map(str::to_string),
            name: name.to_string(),
        };
        match kind {
            "LENGTHUNIT" => units.length.push(unit),
            "AREAUNIT" => units.area.push(unit),
            "VOLUMEUNIT" => units.volume.push(unit),
            "MASSUNIT" => units.mass.push(unit),
            _ => {}
        }
    }

    units
}

fn extract_storeys(step_file: &StepFile) -> HashMap<u64, Storey> {
    step_file
        .entities_of("IFCBUILDINGSTOREY")
        .iter()
        .map(|entity| {
            // Index 2 = Name, index 9 = Elevation
            let storey = Storey {
                id: entity.id,
                name: entity.attr(2).and_then(StepValue::as_string).map(str::to_string),
                elevation: entity.attr(9).and_then(StepValue::as_real),
            };
            (entity.id, storey)
        })
        .collect()
}

/// Extract element → storey links from IFCRELCONTAINEDINSPATIALSTRUCTURE.
fn extract_spatial_containment(step_file: &StepFile) -> HashMap<u64, u64> {
    let mut element_to_storey: HashMap<u64, u64> = HashMap::new();

    for rel in step_file.entities_of("IFCRELCONTAINEDINSPATIALSTRUCTURE") {
        // Index 4 = RelatedElements (list of element refs)
        // Index 5 = RelatingStructure (spatial element ref)
        let Some(storey_id) = rel.attr(5).and_then(StepValue::as_reference) else {
            continue;
        };
        for element_id in reference_list(rel.attr(4)) {
            element_to_storey.insert(element_id, storey_id);
        }
    }

    element_to_storey
}

fn build_single_value(step_file: &StepFile, entity: &StepEntity) -> Option<SingleValue> {
    if entity.entity_type != "IFCPROPERTYSINGLEVALUE" {
        return None;
    }
    // Index 0 = Name, index 2 = NominalValue, index 3 = Unit
    let name = entity.attr(0).and_then(StepValue::as_string)?.to_string();
    let value = entity.attr(2).and_then(attr_value)?;
    let unit = entity.attr(3).and_then(|v| resolve_unit(step_file, v));
    Some(SingleValue { name, value, unit })
}

fn build_quantity(step_file: &StepFile, entity: &StepEntity) -> Option<Quantity> {
    let attr_names = QUANTITY_ATTRS
        .iter()
        .find(|(tag, _)| *tag == entity.entity_type)
        .map(|(_, names)| *names)?;

    let name = entity.attr(0).and_then(StepValue::as_string)?.to_string();
    let mut fields = Vec::new();
    let mut unit = None;

    for (index, attr_name) in attr_names.iter().enumerate().skip(1) {
        let Some(value) = entity.attr(index) else {
            continue;
        };
        if *attr_name == "Unit" {
            unit = resolve_unit(step_file, value);
        } else if let Some(value) = attr_value(value) {
            fields.push(((*attr_name).to_string(), value));
        }
    }

    Some(Quantity { name, fields, unit })
}

fn extract_definition_sets(step_file: &StepFile) -> HashMap<u64, DefinitionSet> {
    let mut sets = HashMap::new();

    for entity in step_file.entities_of("IFCPROPERTYSET") {
        // Index 2 = Name, index 4 = HasProperties (list of property refs)
        let Some(name) = entity.attr(2).and_then(StepValue::as_string) else {
            continue;
        };
        let properties = reference_list(entity.attr(4))
            .into_iter()
            .filter_map(|id| step_file.entity(id))
            .filter_map(|property| build_single_value(step_file, property))
            .collect();
        sets.insert(
            entity.id,
            DefinitionSet::Properties(PropertySet {
                name: name.to_string(),
                properties,
            }),
        );
    }

    for entity in step_file.entities_of("IFCELEMENTQUANTITY") {
        // Index 2 = Name, index 5 = Quantities (list of quantity refs)
        let Some(name) = entity.attr(2).and_then(StepValue::as_string) else {
            continue;
        };
        let quantities = reference_list(entity.attr(5))
            .into_iter()
            .filter_map(|id| step_file.entity(id))
            .filter_map(|quantity| build_quantity(step_file, quantity))
            .collect();
        sets.insert(
            entity.id,
            DefinitionSet::Quantities(QuantitySet {
                name: name.to_string(),
                quantities,
            }),
        );
    }

    sets
}

/// Extract element → property definition links from IFCRELDEFINESBYPROPERTIES.
fn extract_property_relationships(step_file: &StepFile) -> HashMap<u64, Vec<u64>> {
    let mut element_to_sets: HashMap<u64, Vec<u64>> = HashMap::new();

    for rel in step_file.entities_of("IFCRELDEFINESBYPROPERTIES") {
        // Index 4 = RelatedObjects, index 5 = RelatingPropertyDefinition
        let Some(set_id) = rel.attr(5).and_then(StepValue::as_reference) else {
            continue;
        };
        for element_id in reference_list(rel.attr(4)) {
            element_to_sets.entry(element_id).or_default().push(set_id);
        }
    }

    element_to_sets
}

fn extract_materials(step_file: &StepFile) -> HashMap<u64, Material> {
    let mut materials: HashMap<u64, Material> = step_file
        .entities_of("IFCMATERIAL")
        .iter()
        .map(|entity| {
            // Index 0 = Name
            let name = entity
                .attr(0)
                .and_then(StepValue::as_string)
                .unwrap_or_default()
                .to_string();
            (
                entity.id,
                Material {
                    name,
                    property_sets: Vec::new(),
                },
            )
        })
        .collect();

    // IFCMATERIALPROPERTIES back-references its material at index 3; the
    // inverse becomes a property set stored on the material itself.
    for entity in step_file.entities_of("IFCMATERIALPROPERTIES") {
        // Index 0 = Name, index 2 = Properties, index 3 = Material
        let Some(name) = entity.attr(0).and_then(StepValue::as_string) else {
            continue;
        };
        let Some(material_id) = entity.attr(3).and_then(StepValue::as_reference) else {
            continue;
        };
        let properties = reference_list(entity.attr(2))
            .into_iter()
            .filter_map(|id| step_file.entity(id))
            .filter_map(|property| build_single_value(step_file, property))
            .collect();
        if let Some(material) = materials.get_mut(&material_id) {
            material.property_sets.push(PropertySet {
                name: name.to_string(),
                properties,
            });
        }
    }

    materials
}

/// Builds assignment nodes for every material-set entity so that
/// associations and usage indirections resolve through one map.
fn extract_material_assignments(
    step_file: &StepFile,
    materials: &HashMap<u64, Material>,
) -> HashMap<u64, MaterialAssignment> {
    let mut nodes: HashMap<u64, MaterialAssignment> = materials
        .keys()
        .map(|&id| (id, MaterialAssignment::Material(id)))
        .collect();

    for entity in step_file.entities_of("IFCMATERIALLIST") {
        // Index 0 = Materials
        nodes.insert(
            entity.id,
            MaterialAssignment::MaterialList {
                materials: reference_list(entity.attr(0)),
            },
        );
    }

    for entity in step_file.entities_of("IFCMATERIALLAYERSET") {
        // Index 0 = MaterialLayers
        let layers = reference_list(entity.attr(0))
            .into_iter()
            .filter_map(|id| step_file.entity(id))
            .map(|layer| MaterialLayer {
                // Index 0 = Material, index 1 = LayerThickness
                material: layer.attr(0).and_then(StepValue::as_reference),
                thickness: layer.attr(1).and_then(StepValue::as_real),
            })
            .collect();
        nodes.insert(entity.id, MaterialAssignment::LayerSet { layers });
    }

    for entity in step_file.entities_of("IFCMATERIALLAYERSETUSAGE") {
        // Index 0 = ForLayerSet
        if let Some(set_id) = entity.attr(0).and_then(StepValue::as_reference) {
            nodes.insert(
                entity.id,
                MaterialAssignment::LayerSetUsage {
                    for_layer_set: set_id,
                },
            );
        }
    }

    for entity in step_file.entities_of("IFCMATERIALPROFILESET") {
        // Index 2 = MaterialProfiles
        let profiles = reference_list(entity.attr(2))
            .into_iter()
            .filter_map(|id| step_file.entity(id))
            .map(|profile| MaterialProfile {
                // Index 2 = Material
                material: profile.attr(2).and_then(StepValue::as_reference),
            })
            .collect();
        nodes.insert(entity.id, MaterialAssignment::ProfileSet { profiles });
    }

    for entity in step_file.entities_of("IFCMATERIALPROFILESETUSAGE") {
        // Index 0 = ForProfileSet
        if let Some(set_id) = entity.attr(0).and_then(StepValue::as_reference) {
            nodes.insert(
                entity.id,
                MaterialAssignment::ProfileSetUsage {
                    for_profile_set: set_id,
                },
            );
        }
    }

    for entity in step_file.entities_of("IFCMATERIALCONSTITUENTSET") {
        // Index 2 = MaterialConstituents
        let constituents = reference_list(entity.attr(2))
            .into_iter()
            .filter_map(|id| step_file.entity(id))
            .map(|constituent| MaterialConstituent {
                // Index 0 = Name, index 2 = Material
                name: constituent.attr(0).and_then(StepValue::as_string).map(str::to_string),
                material: constituent.attr(2).and_then(StepValue::as_reference),
            })
            .collect();
        nodes.insert(entity.id, MaterialAssignment::ConstituentSet { constituents });
    }

    nodes
}

/// Extract element → material assignment links from IFCRELASSOCIATESMATERIAL.
fn extract_material_relationships(step_file: &StepFile) -> HashMap<u64, Vec<u64>> {
    let mut element_to_materials: HashMap<u64, Vec<u64>> = HashMap::new();

    for rel in step_file.entities_of("IFCRELASSOCIATESMATERIAL") {
        // Index 4 = RelatedObjects, index 5 = RelatingMaterial
        let Some(target) = rel.attr(5).and_then(StepValue::as_reference) else {
            continue;
        };
        for element_id in reference_list(rel.attr(4)) {
            element_to_materials.entry(element_id).or_default().push(target);
        }
    }

    element_to_materials
}

/// Extract groups and element → group links from IFCRELASSIGNSTOGROUP.
fn extract_groups(step_file: &StepFile) -> (HashMap<u64, Group>, HashMap<u64, Vec<u64>>) {
    let mut groups: HashMap<u64, Group> = HashMap::new();
    let mut element_to_groups: HashMap<u64, Vec<u64>> = HashMap::new();

    for rel in step_file.entities_of("IFCRELASSIGNSTOGROUP") {
        // Index 4 = RelatedObjects, index 6 = RelatingGroup
        let Some(group_id) = rel.attr(6).and_then(StepValue::as_reference) else {
            continue;
        };
        let Some(group_entity) = step_file.entity(group_id) else {
            continue;
        };
        groups.entry(group_id).or_insert_with(|| Group {
            id: group_id,
            // Index 2 = Name, index 4 = ObjectType
            name: group_entity.attr(2).and_then(StepValue::as_string).map(str::to_string),
            object_type: group_entity
                .attr(4)
                .and_then(StepValue::as_string)
                .map(str::to_string),
        });
        for element_id in reference_list(rel.attr(4)) {
            element_to_groups.entry(element_id).or_default().push(group_id);
        }
    }

    (groups, element_to_groups)
}

fn extract_elements(
    step_file: &StepFile,
    element_to_storey: &HashMap<u64, u64>,
    element_to_sets: &HashMap<u64, Vec<u64>>,
    element_to_materials: &HashMap<u64, Vec<u64>>,
    element_to_groups: &HashMap<u64, Vec<u64>>,
) -> Vec<Element> {
    let mut elements = Vec::new();

    for entity in step_file.entities.values() {
        if EXCLUDED_TYPES.contains(&entity.entity_type.as_str()) {
            continue;
        }
        let Some(display_tag) = product_display_tag(&entity.entity_type) else {
            continue;
        };
        // Index 6 = Representation; products without geometry are skipped
        if entity.attr(6).and_then(StepValue::as_reference).is_none() {
            continue;
        }

        let kind = ElementKind::from_type_tag(&entity.entity_type);
        let is_opening_product = matches!(kind, Some(ElementKind::Door | ElementKind::Window));

        // Index 8 = PredefinedType; doors and windows carry their overall
        // height/width at 8/9 and the predefined type at 10 instead.
        let predefined_index = if is_opening_product { 10 } else { 8 };
        let predefined_type = entity
            .attr(predefined_index)
            .and_then(StepValue::as_enum)
            .map(str::to_string);

        let (overall_height, overall_width) = if is_opening_product {
            (
                entity.attr(8).and_then(StepValue::as_real),
                entity.attr(9).and_then(StepValue::as_real),
            )
        } else {
            (None, None)
        };

        elements.push(Element {
            id: entity.id,
            global_id: entity
                .attr(0)
                .and_then(StepValue::as_string)
                .unwrap_or_default()
                .to_string(),
            name: entity.attr(2).and_then(StepValue::as_string).map(str::to_string),
            type_tag: display_tag.to_string(),
            kind,
            predefined_type,
            overall_height,
            overall_width,
            storey: element_to_storey.get(&entity.id).copied(),
            property_sets: element_to_sets.get(&entity.id).cloned().unwrap_or_default(),
            material_associations: element_to_materials
                .get(&entity.id)
                .cloned()
                .unwrap_or_default(),
            groups: element_to_groups.get(&entity.id).cloned().unwrap_or_default(),
        });
    }

    elements
}
