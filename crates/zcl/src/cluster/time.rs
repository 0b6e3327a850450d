use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, no_commands, ClusterDef, ClusterId, R, RW};
use crate::types::ZclDataType::{Bitmap8, Int32, Uint32, UtcTime};

const ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("Time", UtcTime, RW)),
    (0x0001, attr("TimeStatus", Bitmap8, RW)),
    (0x0002, attr("TimeZone", Int32, RW)),
    (0x0003, attr("DstStart", Uint32, RW)),
    (0x0004, attr("DstEnd", Uint32, RW)),
    (0x0005, attr("DstShift", Int32, RW)),
    (0x0006, attr("StandardTime", Uint32, R)),
    (0x0007, attr("LocalTime", Uint32, R)),
    (0x0008, attr("LastSetTime", UtcTime, R)),
    (0x0009, attr("ValidUntilTime", UtcTime, RW)),
];

pub const TIME: ClusterDef = ClusterDef {
    id: ClusterId::TIME,
    name: "Time",
    attributes: ATTRIBUTES,
    received: no_commands,
    generated: no_commands,
};
