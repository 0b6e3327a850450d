//! Intruder alarm systems: zone, ancillary control equipment, warning device.

use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, cmd, no_commands, ClusterDef, ClusterId, R, RW};
use crate::command::{payload, CommandDescriptor};
use crate::types::ZclDataType::{Bitmap16, Enum8, Enum16, IeeeAddr, Uint8, Uint16};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneStatusRecord {
    pub zone_id: u8,
    pub zone_status: u16,
}

payload! {
    /* zone */

    ZoneEnrollResponse {
        response_code: u8,
        zone_id: u8,
    }

    InitiateNormalOperationMode {}

    InitiateTestMode {
        test_mode_duration: u8,
        current_zone_sensitivity_level: u8,
    }

    ZoneStatusChangeNotification {
        zone_status: u16,
        extended_status: u8,
        zone_id: u8,
        /// Quarter seconds
        delay: u16,
    }

    ZoneEnrollRequest {
        zone_type: u16,
        manufacturer_code: u16,
    }

    /* ancillary control equipment */

    Arm {
        arm_mode: u8,
        arm_disarm_code: String,
        zone_id: u8,
    }

    Bypass {
        zone_ids: Vec<u8>,
        arm_disarm_code: String,
    }

    Emergency {}
    Fire {}
    Panic {}
    GetZoneIdMap {}

    GetZoneInformation {
        zone_id: u8,
    }

    GetPanelStatus {}
    GetBypassedZoneList {}

    GetZoneStatus {
        starting_zone_id: u8,
        max_zone_ids: u8,
        zone_status_mask_flag: bool,
        zone_status_mask: u16,
    }

    ArmResponse {
        arm_notification: u8,
    }

    /// 16 sections of 16 bits, one bit per zone id
    GetZoneIdMapResponse {
        sections: Vec<u16>,
    }

    GetZoneInformationResponse {
        zone_id: u8,
        zone_type: u16,
        ieee_address: u64,
        zone_label: String,
    }

    ZoneStatusChanged {
        zone_id: u8,
        zone_status: u16,
        audible_notification: u8,
        zone_label: String,
    }

    PanelStatusChanged {
        panel_status: u8,
        seconds_remaining: u8,
        audible_notification: u8,
        alarm_status: u8,
    }

    GetPanelStatusResponse {
        panel_status: u8,
        seconds_remaining: u8,
        audible_notification: u8,
        alarm_status: u8,
    }

    SetBypassedZoneList {
        zone_ids: Vec<u8>,
    }

    /// One result per zone id in the Bypass request
    BypassResponse {
        bypass_results: Vec<u8>,
    }

    GetZoneStatusResponse {
        zone_status_complete: bool,
        zones: Vec<ZoneStatusRecord>,
    }

    /* warning device */

    StartWarning {
        warning_control: u8,
        warning_duration: u16,
        strobe_duty_cycle: u8,
        strobe_level: u8,
    }

    Squawk {
        squawk_control: u8,
    }
}

const ZONE_ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("ZoneState", Enum8, R)),
    (0x0001, attr("ZoneType", Enum16, R)),
    (0x0002, attr("ZoneStatus", Bitmap16, R)),
    (0x0010, attr("IAS_CIE_Address", IeeeAddr, RW)),
    (0x0011, attr("ZoneID", Uint8, R)),
    (0x0012, attr("NumberOfZoneSensitivityLevelsSupported", Uint8, R)),
    (0x0013, attr("CurrentZoneSensitivityLevel", Uint8, RW)),
];

const WARNING_DEVICE_ATTRIBUTES: &[(u16, AttributeDescriptor)] =
    &[(0x0000, attr("MaxDuration", Uint16, RW))];

fn zone_received() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("ZoneEnrollResponse", ZoneEnrollResponse::default())),
        (
            0x01,
            cmd("InitiateNormalOperationMode", InitiateNormalOperationMode {}),
        ),
        (0x02, cmd("InitiateTestMode", InitiateTestMode::default())),
    ]
}

fn zone_generated() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (
            0x00,
            cmd(
                "ZoneStatusChangeNotification",
                ZoneStatusChangeNotification::default(),
            ),
        ),
        (0x01, cmd("ZoneEnrollRequest", ZoneEnrollRequest::default())),
    ]
}

fn ace_received() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("Arm", Arm::default())),
        (0x01, cmd("Bypass", Bypass::default())),
        (0x02, cmd("Emergency", Emergency {})),
        (0x03, cmd("Fire", Fire {})),
        (0x04, cmd("Panic", Panic {})),
        (0x05, cmd("GetZoneIDMap", GetZoneIdMap {})),
        (0x06, cmd("GetZoneInformation", GetZoneInformation::default())),
        (0x07, cmd("GetPanelStatus", GetPanelStatus {})),
        (0x08, cmd("GetBypassedZoneList", GetBypassedZoneList {})),
        (0x09, cmd("GetZoneStatus", GetZoneStatus::default())),
    ]
}

fn ace_generated() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("ArmResponse", ArmResponse::default())),
        (0x01, cmd("GetZoneIDMapResponse", GetZoneIdMapResponse::default())),
        (
            0x02,
            cmd("GetZoneInformationResponse", GetZoneInformationResponse::default()),
        ),
        (0x03, cmd("ZoneStatusChanged", ZoneStatusChanged::default())),
        (0x04, cmd("PanelStatusChanged", PanelStatusChanged::default())),
        (0x05, cmd("GetPanelStatusResponse", GetPanelStatusResponse::default())),
        (0x06, cmd("SetBypassedZoneList", SetBypassedZoneList::default())),
        (0x07, cmd("BypassResponse", BypassResponse::default())),
        (0x08, cmd("GetZoneStatusResponse", GetZoneStatusResponse::default())),
    ]
}

fn warning_device_received() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("StartWarning", StartWarning::default())),
        (0x01, cmd("Squawk", Squawk::default())),
    ]
}

pub const IAS_ZONE: ClusterDef = ClusterDef {
    id: ClusterId::IAS_ZONE,
    name: "IASZone",
    attributes: ZONE_ATTRIBUTES,
    received: zone_received,
    generated: zone_generated,
};

pub const IAS_ACE: ClusterDef = ClusterDef {
    id: ClusterId::IAS_ACE,
    name: "IASAncillaryControlEquipment",
    attributes: &[],
    received: ace_received,
    generated: ace_generated,
};

pub const IAS_WARNING_DEVICE: ClusterDef = ClusterDef {
    id: ClusterId::IAS_WARNING_DEVICE,
    name: "IASWarningDevice",
    attributes: WARNING_DEVICE_ATTRIBUTES,
    received: warning_device_received,
    generated: no_commands,
};

#[cfg(test)]
mod tests {
    use crate::cluster::ias::{IAS_ACE, IAS_WARNING_DEVICE};
    use crate::command::CommandPayload;

    #[test]
    fn ace_has_no_attributes() {
        let ace = IAS_ACE.build();
        assert!(ace.attributes.is_empty());
        assert_eq!(ace.commands.received.len(), 10);
        assert_eq!(ace.commands.generated.len(), 9);
    }

    #[test]
    fn status_and_bypass_shapes_are_distinct() {
        let ace = IAS_ACE.build();

        let status = ace.generated(0x05).unwrap();
        assert!(matches!(
            status.payload,
            CommandPayload::GetPanelStatusResponse(_)
        ));

        let bypass = ace.generated(0x07).unwrap();
        assert!(matches!(bypass.payload, CommandPayload::BypassResponse(_)));
        assert_ne!(bypass.payload, ace.generated(0x06).unwrap().payload);
    }

    #[test]
    fn squawk() {
        let wd = IAS_WARNING_DEVICE.build();
        let squawk = wd.received(0x01).unwrap();
        assert_eq!(squawk.name, "Squawk");
        assert_eq!(squawk.payload.fields()[0].name, "squawk_control");
    }
}
