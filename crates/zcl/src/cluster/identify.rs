use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, cmd, ClusterDef, ClusterId, RW};
use crate::command::{payload, CommandDescriptor};
use crate::types::ZclDataType::Uint16;

payload! {
    /// Start (or stop, with 0) identifying for `identify_time` seconds
    Identify {
        identify_time: u16,
    }

    IdentifyQuery {}

    TriggerEffect {
        effect_identifier: u8,
        effect_variant: u8,
    }

    IdentifyQueryResponse {
        timeout: u16,
    }
}

const ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[(0x0000, attr("IdentifyTime", Uint16, RW))];

fn received() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("Identify", Identify::default())),
        (0x01, cmd("IdentifyQuery", IdentifyQuery {})),
        (0x40, cmd("TriggerEffect", TriggerEffect::default())),
    ]
}

fn generated() -> Vec<(u8, CommandDescriptor)> {
    vec![(0x00, cmd("IdentifyQueryResponse", IdentifyQueryResponse::default()))]
}

pub const IDENTIFY: ClusterDef = ClusterDef {
    id: ClusterId::IDENTIFY,
    name: "Identify",
    attributes: ATTRIBUTES,
    received,
    generated,
};
