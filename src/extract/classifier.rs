//! DIN 276 cost-group classification.
//!
//! One decision table per element kind. Structural kinds consult the
//! common property sets (`IsExternal`, `LoadBearing`, `ExtendToStructure`);
//! distribution elements consult the naming convention of the system group
//! they are assigned to. A kind outside the vocabulary, or a gate whose
//! deciding attribute is unresolved, classifies as undetermined rather
//! than falling back to a guessed parent group.

use crate::error::ResolveError;
use crate::model::{Element, ElementKind, ModelGraph};

use super::properties::{find_bool, find_text};

// Project naming conventions the substring checks match against.
const REF_EXTERNAL_WALL: &str = "AW";
const REF_INTERNAL_WALL: &str = "IW";
const REF_GUTTER: &str = "Gutter";
const REF_WASTE_WATER: &str = "S_Schmutzwasser";
const REF_SPRINKLER: &str = "B_";
const REF_GAS: &str = "G_";
const REF_HEATING: &str = "H_";
const REF_COOLING: &str = "K_";
const REF_FRESH_WATER: &str = "TW_";
const REF_FRESH_WATER_ALT: &str = "S_T";
const REF_RAIN_WATER: &str = "S_Regenwasser";
const REF_VENTILATION: &str = "L_";
const REF_VENTILATION_ALT: &str = "luft";
const REF_VENTILATION_UPPER: &str = "LUFT";

/// Classifies an element into its DIN 276 cost group.
///
/// `predefined` is the already-defaulted predefined type (`STANDARD` when
/// the model left it empty). Returns `Ok(None)` when no group can be
/// determined; errors surface malformed attribute data only.
pub fn classify(
    model: &ModelGraph,
    element: &Element,
    predefined: &str,
) -> Result<Option<u16>, ResolveError> {
    let Some(kind) = element.kind else {
        return Ok(None);
    };
    let system = distribution_system(model, element);

    let code = match kind {
        // Building construction
        ElementKind::Beam => external_code(model, element, "Pset_BeamCommon", 333, 343)?,
        ElementKind::BuildingElementProxy => Some(300),
        ElementKind::Chimney => Some(399),
        ElementKind::Column => classify_column(model, element)?,
        ElementKind::Covering => classify_covering(model, element, predefined)?,
        ElementKind::CurtainWall => {
            external_code(model, element, "Pset_CurtainWallCommon", 337, 346)?
        }
        ElementKind::Door => external_code(model, element, "Pset_DoorCommon", 334, 344)?,
        ElementKind::Footing => Some(322),
        ElementKind::Member => external_code(model, element, "Pset_MemberCommon", 337, 346)?,
        ElementKind::Pile => Some(323),
        ElementKind::Plate => external_code(model, element, "Pset_PlateCommon", 337, 346)?,
        ElementKind::Railing => external_code(model, element, "Pset_RailingCommon", 369, 359)?,
        ElementKind::Ramp
        | ElementKind::RampFlight
        | ElementKind::Stair
        | ElementKind::StairFlight => Some(351),
        ElementKind::Roof => classify_roof(model, element)?,
        ElementKind::ShadingDevice => {
            external_code(model, element, "Pset_ShadingDeviceCommon", 338, 347)?
        }
        ElementKind::Slab => classify_slab(model, element, predefined)?,
        ElementKind::Wall => classify_wall(model, element)?,
        ElementKind::Window => classify_window(model, element, predefined)?,
        // Distribution control
        ElementKind::Actuator
        | ElementKind::Alarm
        | ElementKind::Controller
        | ElementKind::FlowInstrument
        | ElementKind::ProtectiveDeviceTrippingUnit
        | ElementKind::Sensor
        | ElementKind::UnitaryControlElement => Some(480),
        ElementKind::DistributionChamberElement => Some(399),
        // Energy conversion
        ElementKind::AirToAirHeatRecovery | ElementKind::Humidifier => Some(430),
        ElementKind::Boiler | ElementKind::Burner => Some(421),
        ElementKind::Chiller
        | ElementKind::CooledBeam
        | ElementKind::CoolingTower
        | ElementKind::EvaporativeCooler => Some(434),
        ElementKind::Coil => coil_code(system),
        ElementKind::Condenser => condenser_code(system),
        ElementKind::ElectricGenerator => Some(442),
        ElementKind::ElectricMotor
        | ElementKind::Engine
        | ElementKind::MotorConnection
        | ElementKind::TubeBundle => Some(400),
        ElementKind::Evaporator => evaporator_code(system),
        ElementKind::HeatExchanger => heat_exchanger_code(system),
        ElementKind::SolarDevice => Some(match predefined {
            "SOLARCOLLECTOR" => 421,
            "SOLARPANEL" => 442,
            _ => 400,
        }),
        ElementKind::Transformer => Some(441),
        ElementKind::UnitaryEquipment => Some(match predefined {
            "AIRHANDLER" => 431,
            "AIRCONDITIONINGUNIT" => 432,
            "DEHUMIDIFIER" => 430,
            "ROOFTOPUNIT" => 433,
            _ => 400,
        }),
        // Flow control
        ElementKind::AirTerminalBox | ElementKind::Damper => Some(430),
        ElementKind::ElectricDistributionBoard
        | ElementKind::ProtectiveDevice
        | ElementKind::SwitchingDevice => Some(440),
        ElementKind::ElectricTimeControl => Some(452),
        ElementKind::FlowMeter => flow_meter_code(system),
        ElementKind::Valve => piped_system_code(system, Some(369)),
        // Flow fittings
        ElementKind::CableCarrierFitting
        | ElementKind::CableFitting
        | ElementKind::JunctionBox => Some(440),
        ElementKind::DuctFitting => Some(430),
        ElementKind::PipeFitting => piped_system_code(system, Some(369)),
        // Flow movers
        ElementKind::Compressor => Some(434),
        ElementKind::Fan => Some(430),
        ElementKind::Pump => piped_system_code(system, None),
        // Flow segments and storage
        ElementKind::FlowSegment => flow_segment_code(element),
        ElementKind::CableCarrierSegment | ElementKind::CableSegment => Some(440),
        ElementKind::DuctSegment => Some(430),
        ElementKind::PipeSegment => piped_system_code(system, Some(369)),
        ElementKind::Tank => piped_system_code(system, Some(412)),
        // Flow terminals
        ElementKind::AirTerminal => Some(430),
        ElementKind::AudioVisualAppliance => Some(630),
        ElementKind::CommunicationsAppliance => Some(451),
        ElementKind::ElectricAppliance => Some(electric_appliance_code(predefined)),
        ElementKind::FireSuppressionTerminal => Some(474),
        ElementKind::Lamp | ElementKind::LightFixture => Some(445),
        ElementKind::MedicalDevice => Some(620),
        ElementKind::Outlet => Some(440),
        ElementKind::SanitaryTerminal => sanitary_terminal_code(system),
        ElementKind::SpaceHeater => Some(423),
        ElementKind::StackTerminal | ElementKind::FlowTerminal => Some(412),
        ElementKind::WasteTerminal => waste_terminal_code(system),
        // Flow treatment
        ElementKind::DuctSilencer => Some(430),
        ElementKind::Filter => filter_code(system, predefined),
        ElementKind::Interceptor => Some(400),
        // Furnishing
        ElementKind::Furniture | ElementKind::SystemFurnitureElement => Some(610),
    };

    Ok(code)
}

/// Object type of the first system group the element is assigned to.
fn distribution_system<'a>(model: &'a ModelGraph, element: &Element) -> Option<&'a str> {
    let &group_id = element.groups.first()?;
    model.group(group_id)?.object_type.as_deref()
}

/// External/internal gate shared by the simple structural kinds.
fn external_code(
    model: &ModelGraph,
    element: &Element,
    set_name: &str,
    external: u16,
    internal: u16,
) -> Result<Option<u16>, ResolveError> {
    let Some(is_external) = find_bool(model, element, set_name, "IsExternal")? else {
        return Ok(None);
    };
    Ok(Some(if is_external { external } else { internal }))
}

fn classify_wall(model: &ModelGraph, element: &Element) -> Result<Option<u16>, ResolveError> {
    let Some(is_external) = find_bool(model, element, "Pset_WallCommon", "IsExternal")? else {
        return Ok(None);
    };
    let Some(load_bearing) = find_bool(model, element, "Pset_WallCommon", "LoadBearing")? else {
        return Ok(Some(if is_external { 330 } else { 340 }));
    };
    let Some(extends) = find_bool(model, element, "Pset_WallCommon", "ExtendToStructure")? else {
        // Without the extension flag the two remaining flags decide.
        return Ok(Some(match (is_external, load_bearing) {
            (true, true) => 331,
            (true, false) => 332,
            (false, true) => 341,
            (false, false) => 342,
        }));
    };

    Ok(match (is_external, load_bearing, extends) {
        (true, true, false) => Some(331),
        (true, false, false) => Some(332),
        (true, false, true) => Some(335),
        (false, true, false) => Some(341),
        (false, false, false) => Some(342),
        // Extending internal cladding walls carry their role in the
        // Reference code (AW = external wall, IW = internal wall).
        (false, false, true) => {
            match find_text(model, element, "Pset_WallCommon", "Reference")? {
                Some(reference) if reference.contains(REF_EXTERNAL_WALL) => Some(336),
                Some(reference) if reference.contains(REF_INTERNAL_WALL) => Some(345),
                _ => None,
            }
        }
        (_, true, true) => None,
    })
}

fn classify_column(model: &ModelGraph, element: &Element) -> Result<Option<u16>, ResolveError> {
    let Some(is_external) = find_bool(model, element, "Pset_ColumnCommon", "IsExternal")? else {
        return Ok(None);
    };
    let Some(load_bearing) = find_bool(model, element, "Pset_ColumnCommon", "LoadBearing")? else {
        return Ok(Some(if is_external { 330 } else { 340 }));
    };
    Ok(Some(match (is_external, load_bearing) {
        (true, true) => 333,
        (false, _) => 343,
        // Non-load-bearing external columns are modelled as cladding.
        (true, false) => 335,
    }))
}

fn classify_covering(
    model: &ModelGraph,
    element: &Element,
    predefined: &str,
) -> Result<Option<u16>, ResolveError> {
    match predefined {
        "CEILING" => return Ok(Some(354)),
        "ROOFING" => return Ok(Some(364)),
        "FLOORING" => return Ok(Some(353)),
        _ => {}
    }
    let Some(is_external) = find_bool(model, element, "Pset_CoveringCommon", "IsExternal")? else {
        return Ok(None);
    };
    Ok(Some(match (predefined, is_external) {
        ("CLADDING", true) => 335,
        ("CLADDING", false) => 336,
        ("MOLDING", true) => 339,
        ("MOLDING" | "SKIRTINGBOARD", false) => 349,
        ("INSULATION" | "MEMBRANE", true) => 325,
        ("INSULATION" | "MEMBRANE", false) => 354,
        (_, true) => 330,
        (_, false) => 340,
    }))
}

fn classify_slab(
    model: &ModelGraph,
    element: &Element,
    predefined: &str,
) -> Result<Option<u16>, ResolveError> {
    if predefined == "BASESLAB" {
        return Ok(Some(322));
    }
    if predefined == "LANDING" {
        return Ok(Some(351));
    }
    let Some(load_bearing) = find_bool(model, element, "Pset_SlabCommon", "LoadBearing")? else {
        return Ok(None);
    };
    if predefined == "ROOF" {
        return Ok(Some(if load_bearing { 361 } else { 363 }));
    }
    let Some(is_external) = find_bool(model, element, "Pset_SlabCommon", "IsExternal")? else {
        return Ok(None);
    };
    if predefined == "FLOOR" || (load_bearing && !is_external) {
        return Ok(Some(351));
    }
    Ok(None)
}

fn classify_roof(model: &ModelGraph, element: &Element) -> Result<Option<u16>, ResolveError> {
    let Some(load_bearing) = find_bool(model, element, "Pset_RoofCommon", "LoadBearing")? else {
        return Ok(None);
    };
    Ok(Some(if load_bearing { 361 } else { 363 }))
}

fn classify_window(
    model: &ModelGraph,
    element: &Element,
    predefined: &str,
) -> Result<Option<u16>, ResolveError> {
    let Some(is_external) = find_bool(model, element, "Pset_WindowCommon", "IsExternal")? else {
        return Ok(None);
    };
    if (predefined == "LIGHTDOME" || predefined == "SKYLIGHT") && is_external {
        return Ok(Some(362));
    }
    Ok(Some(if is_external { 334 } else { 344 }))
}

fn is_fresh_water(system: &str) -> bool {
    system.contains(REF_FRESH_WATER) || system.contains(REF_FRESH_WATER_ALT)
}

fn is_ventilation(system: &str) -> bool {
    system.contains(REF_VENTILATION)
        || system.contains(REF_VENTILATION_ALT)
        || system.contains(REF_VENTILATION_UPPER)
}

/// Shared ladder of the piped trades. `rain_code` is the group for rain
/// water systems where the kind has one; kinds without a rain branch fall
/// through to the generic services group.
fn piped_system_code(system: Option<&str>, rain_code: Option<u16>) -> Option<u16> {
    let system = system?;
    if system.contains(REF_WASTE_WATER) {
        Some(411)
    } else if is_fresh_water(system) {
        Some(412)
    } else if system.contains(REF_GAS) {
        Some(413)
    } else if system.contains(REF_HEATING) {
        Some(422)
    } else if system.contains(REF_COOLING) {
        Some(434)
    } else if system.contains(REF_SPRINKLER) {
        Some(474)
    } else if system.contains(REF_RAIN_WATER) {
        Some(rain_code.unwrap_or(400))
    } else {
        Some(400)
    }
}

fn coil_code(system: Option<&str>) -> Option<u16> {
    let system = system?;
    if system.contains(REF_HEATING) {
        Some(421)
    } else if is_ventilation(system) {
        Some(430)
    } else if system.contains(REF_COOLING) {
        Some(434)
    } else {
        Some(400)
    }
}

fn condenser_code(system: Option<&str>) -> Option<u16> {
    let system = system?;
    if system.contains(REF_WASTE_WATER) {
        Some(411)
    } else if is_fresh_water(system) {
        Some(412)
    } else if system.contains(REF_HEATING) {
        Some(422)
    } else if system.contains(REF_COOLING) {
        Some(434)
    } else if system.contains(REF_SPRINKLER) {
        Some(474)
    } else {
        Some(400)
    }
}

fn evaporator_code(system: Option<&str>) -> Option<u16> {
    let system = system?;
    if is_ventilation(system) {
        Some(430)
    } else {
        Some(400)
    }
}

fn heat_exchanger_code(system: Option<&str>) -> Option<u16> {
    let system = system?;
    if system.contains(REF_HEATING) {
        Some(422)
    } else if is_ventilation(system) {
        Some(430)
    } else if system.contains(REF_COOLING) {
        Some(434)
    } else {
        Some(400)
    }
}

fn flow_meter_code(system: Option<&str>) -> Option<u16> {
    let system = system?;
    if is_fresh_water(system) {
        Some(412)
    } else if system.contains(REF_GAS) {
        Some(413)
    } else if system.contains(REF_HEATING) {
        Some(422)
    } else if system.contains(REF_COOLING) {
        Some(434)
    } else {
        Some(400)
    }
}

/// Generic flow segments are grouped by their name: gutters belong to the
/// roof group, everything else to the generic services group.
fn flow_segment_code(element: &Element) -> Option<u16> {
    let name = element.name.as_deref()?;
    if name.contains(REF_GUTTER) {
        Some(369)
    } else {
        Some(400)
    }
}

/// Sanitary terminals without any system assignment default to the joint
/// water/waste-water group; within a system only the water trades match.
fn sanitary_terminal_code(system: Option<&str>) -> Option<u16> {
    let Some(system) = system else {
        return Some(410);
    };
    if system.contains(REF_WASTE_WATER) {
        Some(411)
    } else if is_fresh_water(system) {
        Some(412)
    } else {
        None
    }
}

fn waste_terminal_code(system: Option<&str>) -> Option<u16> {
    let system = system?;
    if system.contains(REF_WASTE_WATER) {
        Some(411)
    } else if is_fresh_water(system) {
        Some(412)
    } else if system.contains(REF_RAIN_WATER) {
        Some(369)
    } else {
        Some(400)
    }
}

fn electric_appliance_code(predefined: &str) -> u16 {
    match predefined {
        "DISHWASHER" | "ELECTRICCOOKER" | "FREEZER" | "FRIDGE_FREEZER" | "KITCHENMACHINE"
        | "MICROWAVE" | "REFRIGERATOR" | "VENDINGMACHINE" => 471,
        "FREESTANDINGELECTRICHEATER" | "FREESTANDINGWATERHEATER" => 421,
        "FREESTANDINGFAN" => 431,
        "FREESTANDINGWATERCOOLER" => 434,
        "HANDDRYER" | "TUMBLEDRYER" | "WASHINGMACHINE" => 412,
        "PHOTOCOPIER" => 630,
        _ => 400,
    }
}

fn filter_code(system: Option<&str>, predefined: &str) -> Option<u16> {
    match predefined {
        "AIRPARTICLEFILTER" | "COMPRESSEDAIRFILTER" | "ODORFILTER" => Some(430),
        "OILFILTER" => Some(400),
        "STRAINER" => {
            let system = system?;
            if system.contains(REF_WASTE_WATER) {
                Some(411)
            } else if is_fresh_water(system) {
                Some(412)
            } else if system.contains(REF_GAS) {
                Some(413)
            } else if system.contains(REF_RAIN_WATER) {
                Some(369)
            } else {
                Some(410)
            }
        }
        "WATERFILTER" => Some(412),
        _ => Some(400),
    }
}

/// The DIN 276 label of a cost group, for the optional label column.
#[must_use]
pub fn cost_group_label(code: Option<u16>) -> &'static str {
    match code {
        Some(300) => "Bauwerk Baukonstruktionen",
        Some(310) => "Baugrube/Erdbau",
        Some(311) => "Herstellung",
        Some(312) => "Umschließung",
        Some(313) => "Wasserhaltung",
        Some(314) => "Vortrieb",
        Some(319) => "Sonstiges zur KG 310: Baugrube/Erdbau",
        Some(320) => "Gründung, Unterbau",
        Some(321) => "Baugrundverbesserung",
        Some(322) => "Flachgründungen und Bodenplatten",
        Some(323) => "Tiefgründungen",
        Some(324) => "Gründungsbeläge",
        Some(325) => "Abdichtungen und Bekleidungen",
        Some(326) => "Dränagen",
        Some(329) => "Sonstiges zur KG 320: Gründung, Unterbau",
        Some(330) => "Außenwände/Vertikale Baukonstruktionen, außen",
        Some(331) => "Tragende Außenwände",
        Some(332) => "Nichttragende Außenwände",
        Some(333) => "Außenstützen",
        Some(334) => "Außenwandöffnungen",
        Some(335) => "Außenwandbekleidungen, außen",
        Some(336) => "Außenwandbekleidungen, innen",
        Some(337) => "Elementierte Außenwandkonstruktionen",
        Some(338) => "Lichtschutz zur KG 330: Außenwände/Vertikale Baukonstruktionen, außen",
        Some(339) => "Sonstiges zur KG 330: Außenwände/Vertikale Baukonstruktionen, außen",
        Some(340) => "Innenwände/Vertikale Baukonstruktionen, innen",
        Some(341) => "Tragende Innenwände",
        Some(342) => "Nichttragende Innenwände",
        Some(343) => "Innenstützen",
        Some(344) => "Innenwandöffnungen",
        Some(345) => "Innenwandbekleidungen",
        Some(346) => "Elementierte Innenwandkonstruktionen",
        Some(347) => "Lichtschutz zur KG 340: Innenwände/Vertikale Baukonstruktionen, innen",
        Some(349) => "Sonstiges zur KG 340: Innenwände/Vertikale Baukonstruktionen, innen",
        Some(350) => "Decken/Horizontale Baukonstruktionen",
        Some(351) => "Deckenkonstruktionen",
        Some(352) => "Deckenöffnungen",
        Some(353) => "Deckenbeläge",
        Some(354) => "Deckenbekleidungen",
        Some(355) => "Elementierte Deckenkonstruktionen",
        Some(359) => "Sonstiges zur KG 350: Decken/Horizontale Baukonstruktionen",
        Some(360) => "Dächer",
        Some(361) => "Dachkonstruktionen",
        Some(362) => "Dachöffnungen",
        Some(363) => "Dachbeläge",
        Some(364) => "Dachbekleidungen",
        Some(365) => "Elementierte Dachkonstruktionen",
        Some(366) => "Lichtschutz zur KG 360: Dächer",
        Some(369) => "Sonstiges zur KG 360: Dächer",
        Some(400) => "Bauwerk — Technische Anlagen",
        Some(410) => "Abwasser-, Wasser-, Gasanlagen",
        Some(411) => "Abwasseranlagen",
        Some(412) => "Wasseranlagen",
        Some(413) => "Gasanlagen",
        Some(419) => "Sonstiges zur KG 410: Abwasser-, Wasser-, Gasanlagen",
        Some(420) => "Wärmeversorgungsanlagen",
        Some(421) => "Wärmeerzeugungsanlagen",
        Some(422) => "Wärmeverteilnetze",
        Some(423) => "Raumheizflächen",
        Some(424) => "Verkehrsheizflächen",
        Some(429) => "Sonstiges zur KG 420: Wärmeversorgungsanlagen",
        Some(430) => "Raumlufttechnische Anlagen",
        Some(431) => "Lüftungsanlagen",
        Some(432) => "Teilklimaanlagen",
        Some(433) => "Klimaanlagen",
        Some(434) => "Kälteanlagen",
        Some(439) => "Sonstiges zur KG 430: Raumlufttechnische Anlagen",
        Some(440) => "Elektrische Anlagen",
        Some(441) => "Hoch- und Mittelspannungsanlagen",
        Some(442) => "Eigenstromversorgungsanlagen",
        Some(443) => "Niederspannungsschaltanlagen",
        Some(444) => "Niederspannungsinstallationsanlagen",
        Some(445) => "Beleuchtungsanlagen",
        Some(446) => "Blitzschutz- und Erdungsanlagen",
        Some(447) => "Fahrleitungssysteme",
        Some(449) => "Sonstiges zur KG 440: Elektrische Anlagen",
        Some(450) => "Kommunikations-, sicherheits- und informationstechnische Anlagen",
        Some(451) => "Telekommunikationsanlagen",
        Some(452) => "Such- und Signalanlagen",
        Some(453) => "Zeitdienstanlagen",
        Some(454) => "Elektroakustische Anlagen",
        Some(455) => "Audiovisuelle Medien- und Antennenanlagen",
        Some(456) => "Gefahrenmelde- und Alarmanlagen",
        Some(457) => "Datenübertragungsnetze",
        Some(458) => "Verkehrsbeeinflussungsanlagen",
        Some(459) => {
            "Sonstiges zur KG 450: Kommunikations-, sicherheits- und informationstechnische Anlagen"
        }
        Some(460) => "Förderanlagen",
        Some(461) => "Aufzugsanlagen",
        Some(462) => "Fahrtreppen, Fahrsteige",
        Some(463) => "Befahranlagen",
        Some(464) => "Transportanlagen",
        Some(465) => "Krananlagen",
        Some(466) => "Hydraulikanlagen",
        Some(469) => "Sonstiges zur KG 460: Förderanlagen",
        Some(470) => "Nutzungsspezifische und verfahrenstechnische Anlagen",
        Some(471) => "Küchentechnische Anlagen",
        Some(472) => "Wäscherei-, Reinigungsund badetechnische Anlagen",
        Some(473) => "Medienversorgungsanlagen, Medizin- und labortechnische Anlagen",
        Some(474) => "Feuerlöschanlagen",
        Some(475) => "Prozesswärme-, kälte- und -luftanlagen",
        Some(476) => "Weitere nutzungsspezifische Anlagen",
        Some(477) => "Verfahrenstechnische Anlagen, Wasser, Abwasser und Gase",
        Some(478) => "Verfahrenstechnische Anlagen, Feststoffe, Wertstoffe und Abfälle",
        Some(479) => {
            "Sonstiges zur KG 470: Nutzungsspezifische und verfahrenstechnische Anlagen"
        }
        Some(480) => "Gebäude- und Anlagenautomation",
        Some(481) => "Automationseinrichtungen",
        Some(482) => "Schaltschränke, Automationsschwerpunkte",
        Some(483) => "Automationsmanagement",
        Some(484) => "Kabel, Leitungen und Verlegesysteme",
        Some(485) => "Datenübertragungsnetze",
        Some(489) => "Sonstiges zur KG 480: Gebäude- und Anlagenautomation",
        Some(600) => "Ausstattung und Kunstwerke",
        Some(610) => "Allgemeine Ausstattung",
        Some(620) => "Besondere Ausstattung",
        Some(630) => "Informationstechnische Ausstattung",
        Some(640) => "Künstlerische Ausstattung",
        Some(690) => "Sonstige Ausstattung",
        _ => "Kostengruppe kann nicht ermittelt werden. Grund dafür ist Mangel an Information.",
    }
}
