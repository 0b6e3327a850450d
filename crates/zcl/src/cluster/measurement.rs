//! Measurement and sensing clusters. Attribute-only.

use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, no_commands, ClusterDef, ClusterId, R, RW};
use crate::types::ZclDataType::{Bitmap8, Enum8, Int8, Int16, Uint8, Uint16};

const ILLUMINANCE_MEASUREMENT_ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("MeasuredValue", Uint16, R)),
    (0x0001, attr("MinMeasuredValue", Uint16, R)),
    (0x0002, attr("MaxMeasuredValue", Uint16, R)),
    (0x0003, attr("Tolerance", Uint16, R)),
    (0x0004, attr("LightSensorType", Enum8, R)),
];

const ILLUMINANCE_LEVEL_SENSING_ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("LevelStatus", Enum8, R)),
    (0x0001, attr("LightSensorType", Enum8, R)),
    (0x0010, attr("IlluminanceTarget", Uint16, RW)),
];

const TEMPERATURE_MEASUREMENT_ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("MeasuredValue", Int16, R)),
    (0x0001, attr("MinMeasuredValue", Int16, R)),
    (0x0002, attr("MaxMeasuredValue", Int16, R)),
    (0x0003, attr("Tolerance", Uint16, R)),
];

const PRESSURE_MEASUREMENT_ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("MeasuredValue", Int16, R)),
    (0x0001, attr("MinMeasuredValue", Int16, R)),
    (0x0002, attr("MaxMeasuredValue", Int16, R)),
    (0x0003, attr("Tolerance", Uint16, R)),
    (0x0010, attr("ScaledValue", Int16, R)),
    (0x0011, attr("MinScaledValue", Int16, R)),
    (0x0012, attr("MaxScaledValue", Int16, R)),
    (0x0013, attr("ScaledTolerance", Uint16, R)),
    (0x0014, attr("Scale", Int8, R)),
];

const FLOW_MEASUREMENT_ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("MeasuredValue", Uint16, R)),
    (0x0001, attr("MinMeasuredValue", Uint16, R)),
    (0x0002, attr("MaxMeasuredValue", Uint16, R)),
    (0x0003, attr("Tolerance", Uint16, R)),
];

const RELATIVE_HUMIDITY_MEASUREMENT_ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("MeasuredValue", Uint16, R)),
    (0x0001, attr("MinMeasuredValue", Uint16, R)),
    (0x0002, attr("MaxMeasuredValue", Uint16, R)),
    (0x0003, attr("Tolerance", Uint16, R)),
];

const OCCUPANCY_SENSING_ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("Occupancy", Bitmap8, R)),
    (0x0001, attr("OccupancySensorType", Enum8, R)),
    (0x0010, attr("PIROccupiedToUnoccupiedDelay", Uint16, RW)),
    (0x0011, attr("PIRUnoccupiedToOccupiedDelay", Uint16, RW)),
    (0x0012, attr("PIRUnoccupiedToOccupiedThreshold", Uint8, RW)),
    (0x0020, attr("UltrasonicOccupiedToUnoccupiedDelay", Uint16, RW)),
    (0x0021, attr("UltrasonicUnoccupiedToOccupiedDelay", Uint16, RW)),
    (0x0022, attr("UltrasonicUnoccupiedToOccupiedThreshold", Uint8, RW)),
];

const fn measurement(
    id: ClusterId,
    name: &'static str,
    attributes: &'static [(u16, AttributeDescriptor)],
) -> ClusterDef {
    ClusterDef {
        id,
        name,
        attributes,
        received: no_commands,
        generated: no_commands,
    }
}

pub const ILLUMINANCE_MEASUREMENT: ClusterDef = measurement(
    ClusterId::ILLUMINANCE_MEASUREMENT,
    "IlluminanceMeasurement",
    ILLUMINANCE_MEASUREMENT_ATTRIBUTES,
);

pub const ILLUMINANCE_LEVEL_SENSING: ClusterDef = measurement(
    ClusterId::ILLUMINANCE_LEVEL_SENSING,
    "IlluminanceLevelSensing",
    ILLUMINANCE_LEVEL_SENSING_ATTRIBUTES,
);

pub const TEMPERATURE_MEASUREMENT: ClusterDef = measurement(
    ClusterId::TEMPERATURE_MEASUREMENT,
    "TemperatureMeasurement",
    TEMPERATURE_MEASUREMENT_ATTRIBUTES,
);

pub const PRESSURE_MEASUREMENT: ClusterDef = measurement(
    ClusterId::PRESSURE_MEASUREMENT,
    "PressureMeasurement",
    PRESSURE_MEASUREMENT_ATTRIBUTES,
);

pub const FLOW_MEASUREMENT: ClusterDef = measurement(
    ClusterId::FLOW_MEASUREMENT,
    "FlowMeasurement",
    FLOW_MEASUREMENT_ATTRIBUTES,
);

pub const RELATIVE_HUMIDITY_MEASUREMENT: ClusterDef = measurement(
    ClusterId::RELATIVE_HUMIDITY_MEASUREMENT,
    "RelativeHumidityMeasurement",
    RELATIVE_HUMIDITY_MEASUREMENT_ATTRIBUTES,
);

pub const OCCUPANCY_SENSING: ClusterDef = measurement(
    ClusterId::OCCUPANCY_SENSING,
    "OccupancySensing",
    OCCUPANCY_SENSING_ATTRIBUTES,
);
