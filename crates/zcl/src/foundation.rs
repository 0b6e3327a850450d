//! Foundation commands, shared by every cluster.

use packed_struct::derive::PrimitiveEnum_u8;
use packed_struct::{PrimitiveEnum, PrimitiveEnumStaticStr};

use crate::access::Access;
use crate::command::{payload, CommandDescriptor, CommandPayload};
use crate::types::ZclDataType;

#[derive(PrimitiveEnum_u8, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum GlobalCommand {
    ReadAttributes = 0x00,
    ReadAttributesResponse = 0x01,
    WriteAttributes = 0x02,
    WriteAttributesUndivided = 0x03,
    WriteAttributesResponse = 0x04,
    WriteAttributesNoResponse = 0x05,
    ConfigureReporting = 0x06,
    ConfigureReportingResponse = 0x07,
    ReadReportingConfiguration = 0x08,
    ReadReportingConfigurationResponse = 0x09,
    ReportAttributes = 0x0a,
    DefaultResponse = 0x0b,
    DiscoverAttributes = 0x0c,
    DiscoverAttributesResponse = 0x0d,
    ReadAttributesStructured = 0x0e,
    WriteAttributesStructured = 0x0f,
    WriteAttributesStructuredResponse = 0x10,
    DiscoverCommandsReceived = 0x11,
    DiscoverCommandsReceivedResponse = 0x12,
    DiscoverCommandsGenerated = 0x13,
    DiscoverCommandsGeneratedResponse = 0x14,
    DiscoverAttributesExtended = 0x15,
    DiscoverAttributesExtendedResponse = 0x16,
}

/* records carried inside foundation payloads */

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadAttributeStatusRecord {
    pub attribute: u16,
    pub status: u8,
    /// Only present when `status` is success
    pub value: Option<AttributeValueRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValueRecord {
    pub data_type: ZclDataType,
    pub value: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteAttributeRecord {
    pub attribute: u16,
    pub data_type: ZclDataType,
    pub value: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteAttributeStatusRecord {
    pub status: u8,
    pub attribute: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportingConfigurationRecord {
    /// 0x00: reports sent by the server, 0x01: reports received by it
    pub direction: u8,
    pub attribute: u16,
    pub data_type: Option<ZclDataType>,
    pub min_interval: Option<u16>,
    pub max_interval: Option<u16>,
    /// Analog types only
    pub reportable_change: Vec<u8>,
    pub timeout: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeStatusRecord {
    pub status: u8,
    pub direction: u8,
    pub attribute: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDirectionRecord {
    pub direction: u8,
    pub attribute: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportingConfigurationStatusRecord {
    pub status: u8,
    pub config: ReportingConfigurationRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeReport {
    pub attribute: u16,
    pub data_type: ZclDataType,
    pub value: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeInformation {
    pub attribute: u16,
    pub data_type: ZclDataType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedAttributeInformation {
    pub attribute: u16,
    pub data_type: ZclDataType,
    pub access_control: Access,
}

/// Attribute id plus the element indexes selecting into a structured value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSelector {
    pub attribute: u16,
    pub indexes: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteAttributeStructuredRecord {
    pub selector: AttributeSelector,
    pub data_type: ZclDataType,
    pub value: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteAttributeStructuredStatusRecord {
    pub status: u8,
    pub selector: AttributeSelector,
}

payload! {
    ReadAttributes {
        attributes: Vec<u16>,
    }

    ReadAttributesResponse {
        records: Vec<ReadAttributeStatusRecord>,
    }

    WriteAttributes {
        records: Vec<WriteAttributeRecord>,
    }

    WriteAttributesUndivided {
        records: Vec<WriteAttributeRecord>,
    }

    /// A single success status is sent when every write succeeded
    WriteAttributesResponse {
        records: Vec<WriteAttributeStatusRecord>,
    }

    WriteAttributesNoResponse {
        records: Vec<WriteAttributeRecord>,
    }

    ConfigureReporting {
        records: Vec<ReportingConfigurationRecord>,
    }

    ConfigureReportingResponse {
        records: Vec<AttributeStatusRecord>,
    }

    ReadReportingConfiguration {
        records: Vec<AttributeDirectionRecord>,
    }

    ReadReportingConfigurationResponse {
        records: Vec<ReportingConfigurationStatusRecord>,
    }

    ReportAttributes {
        reports: Vec<AttributeReport>,
    }

    DefaultResponse {
        command: u8,
        status: u8,
    }

    DiscoverAttributes {
        start_attribute: u16,
        max_attributes: u8,
    }

    DiscoverAttributesResponse {
        complete: bool,
        attributes: Vec<AttributeInformation>,
    }

    ReadAttributesStructured {
        selectors: Vec<AttributeSelector>,
    }

    WriteAttributesStructured {
        records: Vec<WriteAttributeStructuredRecord>,
    }

    WriteAttributesStructuredResponse {
        records: Vec<WriteAttributeStructuredStatusRecord>,
    }

    DiscoverCommandsReceived {
        start_command: u8,
        max_commands: u8,
    }

    DiscoverCommandsReceivedResponse {
        complete: bool,
        commands: Vec<u8>,
    }

    DiscoverCommandsGenerated {
        start_command: u8,
        max_commands: u8,
    }

    DiscoverCommandsGeneratedResponse {
        complete: bool,
        commands: Vec<u8>,
    }

    DiscoverAttributesExtended {
        start_attribute: u16,
        max_attributes: u8,
    }

    DiscoverAttributesExtendedResponse {
        complete: bool,
        attributes: Vec<ExtendedAttributeInformation>,
    }
}

fn global(cmd: GlobalCommand, payload: impl Into<CommandPayload>) -> (u8, CommandDescriptor) {
    (
        cmd.to_primitive(),
        CommandDescriptor::new(cmd.to_display_str(), payload),
    )
}

/// Entries for the global command table
#[must_use]
pub fn commands() -> Vec<(u8, CommandDescriptor)> {
    use GlobalCommand as G;

    vec![
        global(G::ReadAttributes, ReadAttributes::default()),
        global(G::ReadAttributesResponse, ReadAttributesResponse::default()),
        global(G::WriteAttributes, WriteAttributes::default()),
        global(G::WriteAttributesUndivided, WriteAttributesUndivided::default()),
        global(G::WriteAttributesResponse, WriteAttributesResponse::default()),
        global(G::WriteAttributesNoResponse, WriteAttributesNoResponse::default()),
        global(G::ConfigureReporting, ConfigureReporting::default()),
        global(G::ConfigureReportingResponse, ConfigureReportingResponse::default()),
        global(G::ReadReportingConfiguration, ReadReportingConfiguration::default()),
        global(
            G::ReadReportingConfigurationResponse,
            ReadReportingConfigurationResponse::default(),
        ),
        global(G::ReportAttributes, ReportAttributes::default()),
        global(G::DefaultResponse, DefaultResponse::default()),
        global(G::DiscoverAttributes, DiscoverAttributes::default()),
        global(G::DiscoverAttributesResponse, DiscoverAttributesResponse::default()),
        global(G::ReadAttributesStructured, ReadAttributesStructured::default()),
        global(G::WriteAttributesStructured, WriteAttributesStructured::default()),
        global(
            G::WriteAttributesStructuredResponse,
            WriteAttributesStructuredResponse::default(),
        ),
        global(G::DiscoverCommandsReceived, DiscoverCommandsReceived::default()),
        global(
            G::DiscoverCommandsReceivedResponse,
            DiscoverCommandsReceivedResponse::default(),
        ),
        global(G::DiscoverCommandsGenerated, DiscoverCommandsGenerated::default()),
        global(
            G::DiscoverCommandsGeneratedResponse,
            DiscoverCommandsGeneratedResponse::default(),
        ),
        global(G::DiscoverAttributesExtended, DiscoverAttributesExtended::default()),
        global(
            G::DiscoverAttributesExtendedResponse,
            DiscoverAttributesExtendedResponse::default(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use packed_struct::{PrimitiveEnum, PrimitiveEnumStaticStr};

    use crate::foundation::{commands, GlobalCommand};

    #[test]
    fn one_entry_per_global_command() {
        let table = commands();
        let ids: BTreeSet<u8> = table.iter().map(|(id, _)| *id).collect();

        assert_eq!(ids.len(), table.len());
        assert_eq!(ids.len(), GlobalCommand::all_variants().len());

        for cmd in GlobalCommand::all_variants() {
            assert!(ids.contains(&cmd.to_primitive()), "{cmd:?}");
        }
    }

    #[test]
    fn contiguous_range() {
        let ids: Vec<u8> = commands().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, (0x00..=0x16).collect::<Vec<u8>>());
    }

    #[test]
    fn name_matches_payload_shape() {
        for (id, desc) in commands() {
            let cmd = GlobalCommand::from_primitive(id).unwrap();
            assert_eq!(desc.name, cmd.to_display_str());
            assert_eq!(desc.payload.name(), desc.name);
        }
    }
}
