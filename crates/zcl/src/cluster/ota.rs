//! Over-the-air firmware upgrade.
//!
//! The server side of this cluster lives on the upgrade server. Clients
//! query and download images; the server notifies and answers.

use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, cmd, ClusterDef, ClusterId, R};
use crate::command::{payload, CommandDescriptor};
use crate::types::ZclDataType::{Enum8, IeeeAddr, Uint16, Uint32};

payload! {
    /// Fields after `query_jitter` are present depending on `payload_type`
    ImageNotify {
        payload_type: u8,
        query_jitter: u8,
        manufacturer_code: Option<u16>,
        image_type: Option<u16>,
        new_file_version: Option<u32>,
    }

    QueryNextImageRequest {
        field_control: u8,
        manufacturer_code: u16,
        image_type: u16,
        current_file_version: u32,
        hardware_version: Option<u16>,
    }

    QueryNextImageResponse {
        status: u8,
        manufacturer_code: u16,
        image_type: u16,
        file_version: u32,
        image_size: u32,
    }

    ImageBlockRequest {
        field_control: u8,
        manufacturer_code: u16,
        image_type: u16,
        file_version: u32,
        file_offset: u32,
        max_data_size: u8,
        request_node_address: Option<u64>,
        minimum_block_period: Option<u16>,
    }

    ImagePageRequest {
        field_control: u8,
        manufacturer_code: u16,
        image_type: u16,
        file_version: u32,
        file_offset: u32,
        max_data_size: u8,
        page_size: u16,
        response_spacing: u16,
        request_node_address: Option<u64>,
    }

    ImageBlockResponse {
        status: u8,
        manufacturer_code: u16,
        image_type: u16,
        file_version: u32,
        file_offset: u32,
        data: Vec<u8>,
    }

    UpgradeEndRequest {
        status: u8,
        manufacturer_code: u16,
        image_type: u16,
        file_version: u32,
    }

    UpgradeEndResponse {
        manufacturer_code: u16,
        image_type: u16,
        file_version: u32,
        current_time: u32,
        upgrade_time: u32,
    }

    QueryDeviceSpecificFileRequest {
        request_node_address: u64,
        manufacturer_code: u16,
        image_type: u16,
        file_version: u32,
        zigbee_stack_version: u16,
    }

    QueryDeviceSpecificFileResponse {
        status: u8,
        manufacturer_code: u16,
        image_type: u16,
        file_version: u32,
        image_size: u32,
    }
}

const ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("UpgradeServerID", IeeeAddr, R)),
    (0x0001, attr("FileOffset", Uint32, R)),
    (0x0002, attr("CurrentFileVersion", Uint32, R)),
    (0x0003, attr("CurrentZigBeeStackVersion", Uint16, R)),
    (0x0004, attr("DownloadedFileVersion", Uint32, R)),
    (0x0005, attr("DownloadedZigBeeStackVersion", Uint16, R)),
    (0x0006, attr("ImageUpgradeStatus", Enum8, R)),
    (0x0007, attr("ManufacturerID", Uint16, R)),
    (0x0008, attr("ImageTypeID", Uint16, R)),
    (0x0009, attr("MinimumBlockPeriod", Uint16, R)),
    (0x000a, attr("ImageStamp", Uint32, R)),
];

fn received() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x01, cmd("QueryNextImageRequest", QueryNextImageRequest::default())),
        (0x03, cmd("ImageBlockRequest", ImageBlockRequest::default())),
        (0x04, cmd("ImagePageRequest", ImagePageRequest::default())),
        (0x06, cmd("UpgradeEndRequest", UpgradeEndRequest::default())),
        (
            0x08,
            cmd(
                "QueryDeviceSpecificFileRequest",
                QueryDeviceSpecificFileRequest::default(),
            ),
        ),
    ]
}

fn generated() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("ImageNotify", ImageNotify::default())),
        (0x02, cmd("QueryNextImageResponse", QueryNextImageResponse::default())),
        (0x05, cmd("ImageBlockResponse", ImageBlockResponse::default())),
        (0x07, cmd("UpgradeEndResponse", UpgradeEndResponse::default())),
        (
            0x09,
            cmd(
                "QueryDeviceSpecificFileResponse",
                QueryDeviceSpecificFileResponse::default(),
            ),
        ),
    ]
}

pub const OTA: ClusterDef = ClusterDef {
    id: ClusterId::OTA,
    name: "OTA",
    attributes: ATTRIBUTES,
    received,
    generated,
};

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::cluster::ota::OTA;

    #[test]
    fn command_ids_interleave() {
        let ota = OTA.build();
        let received: BTreeSet<u8> = ota.commands.received.keys().copied().collect();
        let generated: BTreeSet<u8> = ota.commands.generated.keys().copied().collect();

        assert!(received.is_disjoint(&generated));
        assert_eq!(received.len() + generated.len(), 10);
        assert_eq!(ota.generated(0x05).unwrap().name, "ImageBlockResponse");
    }
}
