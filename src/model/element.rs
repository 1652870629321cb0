use super::EntityId;

/// A building element extracted from the model, with its relationship
/// indexes pre-resolved by the parser.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub id: EntityId,
    pub global_id: String,
    pub name: Option<String>,
    /// Display form of the STEP type tag, e.g. `IfcWallStandardCase`.
    pub type_tag: String,
    pub kind: Option<ElementKind>,
    /// Raw PredefinedType enumeration value, before sentinel defaulting.
    pub predefined_type: Option<String>,
    /// Door/window geometry attributes, used for the direct area product.
    pub overall_height: Option<f64>,
    pub overall_width: Option<f64>,
    pub storey: Option<EntityId>,
    pub property_sets: Vec<EntityId>,
    pub material_associations: Vec<EntityId>,
    pub groups: Vec<EntityId>,
}

/// Closed vocabulary of classifiable element kinds. Standard and elemented
/// wall cases fold into `Wall`; `IfcEngine` and the legacy `IfcMotor` tag
/// both fold into `Engine`. Products outside the vocabulary stay in the
/// model with no kind and classify as undetermined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    // Building construction
    Beam,
    BuildingElementProxy,
    Chimney,
    Column,
    Covering,
    CurtainWall,
    Door,
    Footing,
    Member,
    Pile,
    Plate,
    Railing,
    Ramp,
    RampFlight,
    Roof,
    ShadingDevice,
    Slab,
    Stair,
    StairFlight,
    Wall,
    Window,
    // Distribution control
    Actuator,
    Alarm,
    Controller,
    FlowInstrument,
    ProtectiveDeviceTrippingUnit,
    Sensor,
    UnitaryControlElement,
    DistributionChamberElement,
    // Energy conversion
    AirToAirHeatRecovery,
    Boiler,
    Burner,
    Chiller,
    Coil,
    Condenser,
    CooledBeam,
    CoolingTower,
    ElectricGenerator,
    ElectricMotor,
    Engine,
    EvaporativeCooler,
    Evaporator,
    HeatExchanger,
    Humidifier,
    MotorConnection,
    SolarDevice,
    Transformer,
    TubeBundle,
    UnitaryEquipment,
    // Flow control
    AirTerminalBox,
    Damper,
    ElectricDistributionBoard,
    ElectricTimeControl,
    FlowMeter,
    ProtectiveDevice,
    SwitchingDevice,
    Valve,
    // Flow fittings
    CableCarrierFitting,
    CableFitting,
    DuctFitting,
    JunctionBox,
    PipeFitting,
    // Flow movers
    Compressor,
    Fan,
    Pump,
    // Flow segments and storage
    FlowSegment,
    CableCarrierSegment,
    CableSegment,
    DuctSegment,
    PipeSegment,
    Tank,
    // Flow terminals
    AirTerminal,
    AudioVisualAppliance,
    CommunicationsAppliance,
    ElectricAppliance,
    FireSuppressionTerminal,
    Lamp,
    LightFixture,
    MedicalDevice,
    Outlet,
    SanitaryTerminal,
    SpaceHeater,
    StackTerminal,
    WasteTerminal,
    FlowTerminal,
    // Flow treatment
    DuctSilencer,
    Filter,
    Interceptor,
    // Furnishing
    Furniture,
    SystemFurnitureElement,
}

impl ElementKind {
    /// Maps an uppercase STEP type tag to its kind. Returns `None` for
    /// products the classifier has no entry for.
    #[must_use]
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "IFCBEAM" => Self::Beam,
            "IFCBUILDINGELEMENTPROXY" => Self::BuildingElementProxy,
            "IFCCHIMNEY" => Self::Chimney,
            "IFCCOLUMN" => Self::Column,
            "IFCCOVERING" => Self::Covering,
            "IFCCURTAINWALL" => Self::CurtainWall,
            "IFCDOOR" => Self::Door,
            "IFCFOOTING" => Self::Footing,
            "IFCMEMBER" => Self::Member,
            "IFCPILE" => Self::Pile,
            "IFCPLATE" => Self::Plate,
            "IFCRAILING" => Self::Railing,
            "IFCRAMP" => Self::Ramp,
            "IFCRAMPFLIGHT" => Self::RampFlight,
            "IFCROOF" => Self::Roof,
            "IFCSHADINGDEVICE" => Self::ShadingDevice,
            "IFCSLAB" => Self::Slab,
            "IFCSTAIR" => Self::Stair,
            "IFCSTAIRFLIGHT" => Self::StairFlight,
            "IFCWALL" | "IFCWALLSTANDARDCASE" | "IFCWALLELEMENTEDCASE" => Self::Wall,
            "IFCWINDOW" => Self::Window,
            "IFCACTUATOR" => Self::Actuator,
            "IFCALARM" => Self::Alarm,
            "IFCCONTROLLER" => Self::Controller,
            "IFCFLOWINSTRUMENT" => Self::FlowInstrument,
            "IFCPROTECTIVEDEVICETRIPPINGUNIT" => Self::ProtectiveDeviceTrippingUnit,
            "IFCSENSOR" => Self::Sensor,
            "IFCUNITARYCONTROLELEMENT" => Self::UnitaryControlElement,
            "IFCDISTRIBUTIONCHAMBERELEMENT" => Self::DistributionChamberElement,
            "IFCAIRTOAIRHEATRECOVERY" => Self::AirToAirHeatRecovery,
            "IFCBOILER" => Self::Boiler,
            "IFCBURNER" => Self::Burner,
            "IFCCHILLER" => Self::Chiller,
            "IFCCOIL" => Self::Coil,
            "IFCCONDENSER" => Self::Condenser,
            "IFCCOOLEDBEAM" => Self::CooledBeam,
            "IFCCOOLINGTOWER" => Self::CoolingTower,
            "IFCELECTRICGENERATOR" => Self::ElectricGenerator,
            "IFCELECTRICMOTOR" => Self::ElectricMotor,
            "IFCENGINE" | "IFCMOTOR" => Self::Engine,
            "IFCEVAPORATIVECOOLER" => Self::EvaporativeCooler,
            "IFCEVAPORATOR" => Self::Evaporator,
            "IFCHEATEXCHANGER" => Self::HeatExchanger,
            "IFCHUMIDIFIER" => Self::Humidifier,
            "IFCMOTORCONNECTION" => Self::MotorConnection,
            "IFCSOLARDEVICE" => Self::SolarDevice,
            "IFCTRANSFORMER" => Self::Transformer,
            "IFCTUBEBUNDLE" => Self::TubeBundle,
            "IFCUNITARYEQUIPMENT" => Self::UnitaryEquipment,
            "IFCAIRTERMINALBOX" => Self::AirTerminalBox,
            "IFCDAMPER" => Self::Damper,
            "IFCELECTRICDISTRIBUTIONBOARD" => Self::ElectricDistributionBoard,
            "IFCELECTRICTIMECONTROL" => Self::ElectricTimeControl,
            "IFCFLOWMETER" => Self::FlowMeter,
            "IFCPROTECTIVEDEVICE" => Self::ProtectiveDevice,
            "IFCSWITCHINGDEVICE" => Self::SwitchingDevice,
            "IFCVALVE" => Self::Valve,
            "IFCCABLECARRIERFITTING" => Self::CableCarrierFitting,
            "IFCCABLEFITTING" => Self::CableFitting,
            "IFCDUCTFITTING" => Self::DuctFitting,
            "IFCJUNCTIONBOX" => Self::JunctionBox,
            "IFCPIPEFITTING" => Self::PipeFitting,
            "IFCCOMPRESSOR" => Self::Compressor,
            "IFCFAN" => Self::Fan,
            "IFCPUMP" => Self::Pump,
            "IFCFLOWSEGMENT" => Self::FlowSegment,
            "IFCCABLECARRIERSEGMENT" => Self::CableCarrierSegment,
            "IFCCABLESEGMENT" => Self::CableSegment,
            "IFCDUCTSEGMENT" => Self::DuctSegment,
            "IFCPIPESEGMENT" => Self::PipeSegment,
            "IFCTANK" => Self::Tank,
            "IFCAIRTERMINAL" => Self::AirTerminal,
            "IFCAUDIOVISUALAPPLIANCE" => Self::AudioVisualAppliance,
            "IFCCOMMUNICATIONSAPPLIANCE" => Self::CommunicationsAppliance,
            "IFCELECTRICAPPLIANCE" => Self::ElectricAppliance,
            "IFCFIRESUPPRESSIONTERMINAL" => Self::FireSuppressionTerminal,
            "IFCLAMP" => Self::Lamp,
            "IFCLIGHTFIXTURE" => Self::LightFixture,
            "IFCMEDICALDEVICE" => Self::MedicalDevice,
            "IFCOUTLET" => Self::Outlet,
            "IFCSANITARYTERMINAL" => Self::SanitaryTerminal,
            "IFCSPACEHEATER" => Self::SpaceHeater,
            "IFCSTACKTERMINAL" => Self::StackTerminal,
            "IFCWASTETERMINAL" => Self::WasteTerminal,
            "IFCFLOWTERMINAL" => Self::FlowTerminal,
            "IFCDUCTSILENCER" => Self::DuctSilencer,
            "IFCFILTER" => Self::Filter,
            "IFCINTERCEPTOR" => Self::Interceptor,
            "IFCFURNITURE" => Self::Furniture,
            "IFCSYSTEMFURNITUREELEMENT" => Self::SystemFurnitureElement,
            _ => return None,
        };
        Some(kind)
    }
}
