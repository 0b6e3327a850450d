use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, cmd, no_commands, ClusterDef, ClusterId, R, RP, RW};
use crate::command::{payload, CommandDescriptor};
use crate::types::ZclDataType::{Uint8, Uint16};

payload! {
    MoveToLevel {
        level: u8,
        transition_time: u16,
    }

    Move {
        move_mode: u8,
        rate: u8,
    }

    Step {
        step_mode: u8,
        step_size: u8,
        transition_time: u16,
    }

    Stop {}

    MoveToLevelWithOnOff {
        level: u8,
        transition_time: u16,
    }

    MoveWithOnOff {
        move_mode: u8,
        rate: u8,
    }

    StepWithOnOff {
        step_mode: u8,
        step_size: u8,
        transition_time: u16,
    }

    StopWithOnOff {}
}

const ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("CurrentLevel", Uint8, RP)),
    (0x0001, attr("RemainingTime", Uint16, R)),
    (0x0010, attr("OnOffTransitionTime", Uint16, RW)),
    (0x0011, attr("OnLevel", Uint8, RW)),
    (0x0012, attr("OnTransitionTime", Uint16, RW)),
    (0x0013, attr("OffTransitionTime", Uint16, RW)),
    (0x0014, attr("DefaultMoveRate", Uint8, RW)),
];

fn received() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("MoveToLevel", MoveToLevel::default())),
        (0x01, cmd("Move", Move::default())),
        (0x02, cmd("Step", Step::default())),
        (0x03, cmd("Stop", Stop {})),
        (0x04, cmd("MoveToLevel/OnOff", MoveToLevelWithOnOff::default())),
        (0x05, cmd("Move/OnOff", MoveWithOnOff::default())),
        (0x06, cmd("Step/OnOff", StepWithOnOff::default())),
        (0x07, cmd("Stop/OnOff", StopWithOnOff {})),
    ]
}

pub const LEVEL_CONTROL: ClusterDef = ClusterDef {
    id: ClusterId::LEVEL_CONTROL,
    name: "LevelControl",
    attributes: ATTRIBUTES,
    received,
    generated: no_commands,
};

#[cfg(test)]
mod tests {
    use crate::cluster::levelctrl::LEVEL_CONTROL;
    use crate::command::CommandPayload;

    #[test]
    fn with_onoff_variants_have_their_own_shape() {
        let level = LEVEL_CONTROL.build();
        let plain = level.received(0x00).unwrap();
        let with_onoff = level.received(0x04).unwrap();

        assert_eq!(with_onoff.name, "MoveToLevel/OnOff");
        assert_eq!(plain.payload.fields(), with_onoff.payload.fields());
        assert!(matches!(
            with_onoff.payload,
            CommandPayload::MoveToLevelWithOnOff(_)
        ));
        assert!(level.commands.generated.is_empty());
    }
}
