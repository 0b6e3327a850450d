use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, cmd, no_commands, ClusterDef, ClusterId, R, RPS, RW};
use crate::command::{payload, CommandDescriptor};
use crate::types::ZclDataType::{Bool, Uint16};

payload! {
    Off {}
    On {}
    Toggle {}

    OffWithEffect {
        effect_identifier: u8,
        effect_variant: u8,
    }

    OnWithRecallGlobalScene {}

    /// Times are in tenths of a second
    OnWithTimedOff {
        on_off_control: u8,
        on_time: u16,
        off_wait_time: u16,
    }
}

const ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("OnOff", Bool, RPS)),
    (0x4000, attr("GlobalSceneControl", Bool, R)),
    (0x4001, attr("OnTime", Uint16, RW)),
    (0x4002, attr("OffWaitTime", Uint16, RW)),
];

fn received() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("Off", Off {})),
        (0x01, cmd("On", On {})),
        (0x02, cmd("Toggle", Toggle {})),
        (0x40, cmd("OffWithEffect", OffWithEffect::default())),
        (0x41, cmd("OnWithRecallGlobalScene", OnWithRecallGlobalScene {})),
        (0x42, cmd("OnWithTimedOff", OnWithTimedOff::default())),
    ]
}

pub const ON_OFF: ClusterDef = ClusterDef {
    id: ClusterId::ON_OFF,
    name: "OnOff",
    attributes: ATTRIBUTES,
    received,
    generated: no_commands,
};
