use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, cmd, ClusterDef, ClusterId, R, RW};
use crate::command::{payload, CommandDescriptor};
use crate::types::ZclDataType::{Uint16, Uint32};

payload! {
    CheckIn {}

    CheckInResponse {
        start_fast_polling: bool,
        /// Quarter seconds
        fast_poll_timeout: u16,
    }

    FastPollStop {}

    SetLongPollInterval {
        new_long_poll_interval: u32,
    }

    SetShortPollInterval {
        new_short_poll_interval: u16,
    }
}

const ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("CheckInInterval", Uint32, RW)),
    (0x0001, attr("LongPollInterval", Uint32, R)),
    (0x0002, attr("ShortPollInterval", Uint16, R)),
    (0x0003, attr("FastPollTimeout", Uint16, RW)),
    (0x0004, attr("CheckInIntervalMin", Uint32, R)),
    (0x0005, attr("LongPollIntervalMin", Uint32, R)),
    (0x0006, attr("FastPollTimeoutMax", Uint16, R)),
];

/* the server is the sleepy end device: it sends CheckIn and receives the rest */

fn received() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("CheckInResponse", CheckInResponse::default())),
        (0x01, cmd("FastPollStop", FastPollStop {})),
        (0x02, cmd("SetLongPollInterval", SetLongPollInterval::default())),
        (0x03, cmd("SetShortPollInterval", SetShortPollInterval::default())),
    ]
}

fn generated() -> Vec<(u8, CommandDescriptor)> {
    vec![(0x00, cmd("CheckIn", CheckIn {}))]
}

pub const POLL_CONTROL: ClusterDef = ClusterDef {
    id: ClusterId::POLL_CONTROL,
    name: "PollControl",
    attributes: ATTRIBUTES,
    received,
    generated,
};

#[cfg(test)]
mod tests {
    use crate::cluster::pollctrl::POLL_CONTROL;

    #[test]
    fn check_in_is_generated() {
        let poll = POLL_CONTROL.build();
        assert_eq!(poll.generated(0x00).unwrap().name, "CheckIn");
        assert_eq!(poll.received(0x00).unwrap().name, "CheckInResponse");
    }
}
