use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, cmd, ClusterDef, ClusterId, R};
use crate::command::{payload, CommandDescriptor};
use crate::types::ZclDataType::Uint16;

payload! {
    ResetAlarm {
        alarm_code: u8,
        cluster: u16,
    }

    ResetAllAlarms {}
    GetAlarm {}
    ResetAlarmLog {}

    Alarm {
        alarm_code: u8,
        cluster: u16,
    }

    /// `alarm_code`, `cluster` and `timestamp` are only present on success
    GetAlarmResponse {
        status: u8,
        alarm_code: u8,
        cluster: u16,
        timestamp: u32,
    }
}

const ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[(0x0000, attr("AlarmCount", Uint16, R))];

fn received() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("ResetAlarm", ResetAlarm::default())),
        (0x01, cmd("ResetAllAlarms", ResetAllAlarms {})),
        (0x02, cmd("GetAlarm", GetAlarm {})),
        (0x03, cmd("ResetAlarmLog", ResetAlarmLog {})),
    ]
}

fn generated() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("Alarm", Alarm::default())),
        (0x01, cmd("GetAlarmResponse", GetAlarmResponse::default())),
    ]
}

pub const ALARMS: ClusterDef = ClusterDef {
    id: ClusterId::ALARMS,
    name: "Alarms",
    attributes: ATTRIBUTES,
    received,
    generated,
};
