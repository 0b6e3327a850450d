//! Basic input/output clusters (analog input, binary output, multistate input).

use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, no_commands, ClusterDef, ClusterId, R, RW};
use crate::types::ZclDataType::{
    Array, Bitmap8, Bool, CharStr, Enum8, Enum16, Float32, Uint16, Uint32,
};

const ANALOG_INPUT_ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x001c, attr("Description", CharStr, RW)),
    (0x0041, attr("MaxPresentValue", Float32, RW)),
    (0x0045, attr("MinPresentValue", Float32, RW)),
    (0x0051, attr("OutOfService", Bool, RW)),
    (0x0055, attr("PresentValue", Float32, RW)),
    (0x0067, attr("Reliability", Enum8, RW)),
    (0x006a, attr("Resolution", Float32, RW)),
    (0x006f, attr("StatusFlags", Bitmap8, R)),
    (0x0075, attr("EngineeringUnits", Enum16, RW)),
    (0x0100, attr("ApplicationType", Uint32, R)),
];

const BINARY_OUTPUT_ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0004, attr("ActiveText", CharStr, RW)),
    (0x001c, attr("Description", CharStr, RW)),
    (0x002e, attr("InactiveText", CharStr, RW)),
    (0x0042, attr("MinimumOffTime", Uint32, RW)),
    (0x0043, attr("MinimumOnTime", Uint32, RW)),
    (0x0051, attr("OutOfService", Bool, RW)),
    (0x0054, attr("Polarity", Enum8, R)),
    (0x0055, attr("PresentValue", Bool, RW)),
    (0x0067, attr("Reliability", Enum8, RW)),
    (0x0068, attr("RelinquishDefault", Bool, RW)),
    (0x006f, attr("StatusFlags", Bitmap8, R)),
    (0x0100, attr("ApplicationType", Uint32, R)),
];

const MULTISTATE_INPUT_ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x000e, attr("StateText", Array, RW)),
    (0x001c, attr("Description", CharStr, RW)),
    (0x004a, attr("NumberOfStates", Uint16, RW)),
    (0x0051, attr("OutOfService", Bool, RW)),
    (0x0055, attr("PresentValue", Uint16, RW)),
    (0x0067, attr("Reliability", Enum8, RW)),
    (0x006f, attr("StatusFlags", Bitmap8, R)),
    (0x0100, attr("ApplicationType", Uint32, R)),
];

pub const ANALOG_INPUT_BASIC: ClusterDef = ClusterDef {
    id: ClusterId::ANALOG_INPUT_BASIC,
    name: "AnalogInputBasic",
    attributes: ANALOG_INPUT_ATTRIBUTES,
    received: no_commands,
    generated: no_commands,
};

pub const BINARY_OUTPUT_BASIC: ClusterDef = ClusterDef {
    id: ClusterId::BINARY_OUTPUT_BASIC,
    name: "BinaryOutputBasic",
    attributes: BINARY_OUTPUT_ATTRIBUTES,
    received: no_commands,
    generated: no_commands,
};

pub const MULTISTATE_INPUT: ClusterDef = ClusterDef {
    id: ClusterId::MULTISTATE_INPUT,
    name: "MultistateInput",
    attributes: MULTISTATE_INPUT_ATTRIBUTES,
    received: no_commands,
    generated: no_commands,
};

#[cfg(test)]
mod tests {
    use crate::cluster::io::BINARY_OUTPUT_BASIC;

    #[test]
    fn out_of_service_and_polarity_are_distinct() {
        let output = BINARY_OUTPUT_BASIC.build();
        assert_eq!(output.attribute(0x0051).unwrap().name, "OutOfService");
        assert_eq!(output.attribute(0x0054).unwrap().name, "Polarity");
        assert_eq!(output.attribute(0x0043).unwrap().name, "MinimumOnTime");
    }
}
