use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, cmd, no_commands, ClusterDef, ClusterId, R, RW};
use crate::command::{payload, CommandDescriptor};
use crate::types::ZclDataType::{Bitmap8, Bool, CharStr, Enum8, Uint8};

payload! {
    ResetToFactoryDefaults {}
}

const ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("ZLibraryVersion", Uint8, R)),
    (0x0001, attr("ApplicationVersion", Uint8, R)),
    (0x0002, attr("StackVersion", Uint8, R)),
    (0x0003, attr("HWVersion", Uint8, R)),
    (0x0004, attr("ManufacturerName", CharStr, R)),
    (0x0005, attr("ModelIdentifier", CharStr, R)),
    (0x0006, attr("DateCode", CharStr, R)),
    (0x0007, attr("PowerSource", Enum8, R)),
    (0x0010, attr("LocationDescription", CharStr, RW)),
    (0x0011, attr("PhysicalEnvironment", Enum8, RW)),
    (0x0012, attr("DeviceEnabled", Bool, RW)),
    (0x0013, attr("AlarmMask", Bitmap8, RW)),
    (0x0014, attr("DisableLocalConfig", Bitmap8, RW)),
    (0x4000, attr("SWBuildID", CharStr, R)),
];

fn received() -> Vec<(u8, CommandDescriptor)> {
    vec![(0x00, cmd("ResetToFactoryDefaults", ResetToFactoryDefaults {}))]
}

pub const BASIC: ClusterDef = ClusterDef {
    id: ClusterId::BASIC,
    name: "Basic",
    attributes: ATTRIBUTES,
    received,
    generated: no_commands,
};
