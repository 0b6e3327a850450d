//! Power configuration and device temperature. Attribute-only clusters.

use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, no_commands, ClusterDef, ClusterId, R, RP, RW};
use crate::types::ZclDataType::{
    Bitmap8, Bitmap32, CharStr, Enum8, Int16, Uint8, Uint16, Uint24,
};

const POWER_ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("MainsVoltage", Uint16, R)),
    (0x0001, attr("MainsFrequency", Uint8, R)),
    (0x0010, attr("MainsAlarmMask", Bitmap8, RW)),
    (0x0011, attr("MainsVoltageMinThreshold", Uint16, RW)),
    (0x0012, attr("MainsVoltageMaxThreshold", Uint16, RW)),
    (0x0013, attr("MainsVoltageDwellTripPoint", Uint16, RW)),
    (0x0020, attr("BatteryVoltage", Uint8, R)),
    (0x0021, attr("BatteryPercentageRemaining", Uint8, RP)),
    (0x0030, attr("BatteryManufacturer", CharStr, RW)),
    (0x0031, attr("BatterySize", Enum8, RW)),
    (0x0032, attr("BatteryAHrRating", Uint16, RW)),
    (0x0033, attr("BatteryQuantity", Uint8, RW)),
    (0x0034, attr("BatteryRatedVoltage", Uint8, RW)),
    (0x0035, attr("BatteryAlarmMask", Bitmap8, RW)),
    (0x0036, attr("BatteryVoltageMinThreshold", Uint8, RW)),
    (0x0037, attr("BatteryVoltageThreshold1", Uint8, RW)),
    (0x0038, attr("BatteryVoltageThreshold2", Uint8, RW)),
    (0x0039, attr("BatteryVoltageThreshold3", Uint8, RW)),
    (0x003a, attr("BatteryPercentageMinThreshold", Uint8, RW)),
    (0x003b, attr("BatteryPercentageThreshold1", Uint8, RW)),
    (0x003c, attr("BatteryPercentageThreshold2", Uint8, RW)),
    (0x003d, attr("BatteryPercentageThreshold3", Uint8, RW)),
    (0x003e, attr("BatteryAlarmState", Bitmap32, R)),
];

const DEVICE_TEMPERATURE_ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("CurrentTemperature", Int16, R)),
    (0x0001, attr("MinTempExperienced", Int16, R)),
    (0x0002, attr("MaxTempExperienced", Int16, R)),
    (0x0003, attr("OverTempTotalDwell", Uint16, R)),
    (0x0010, attr("DeviceTempAlarmMask", Bitmap8, RW)),
    (0x0011, attr("LowTempThreshold", Int16, RW)),
    (0x0012, attr("HighTempThreshold", Int16, RW)),
    (0x0013, attr("LowTempDwellTripPoint", Uint24, RW)),
    (0x0014, attr("HighTempDwellTripPoint", Uint24, RW)),
];

pub const POWER_CONFIGURATION: ClusterDef = ClusterDef {
    id: ClusterId::POWER_CONFIGURATION,
    name: "PowerConfiguration",
    attributes: POWER_ATTRIBUTES,
    received: no_commands,
    generated: no_commands,
};

pub const DEVICE_TEMPERATURE_CONFIGURATION: ClusterDef = ClusterDef {
    id: ClusterId::DEVICE_TEMPERATURE_CONFIGURATION,
    name: "DeviceTemperatureConfiguration",
    attributes: DEVICE_TEMPERATURE_ATTRIBUTES,
    received: no_commands,
    generated: no_commands,
};
