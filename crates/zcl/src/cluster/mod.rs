//! Standard cluster definitions.
//!
//! Each submodule holds the attribute table, the command tables and the
//! payload record types of one functional area. [`STANDARD`] lists every
//! definition that [`crate::ClusterLibrary::new`] assembles.

pub mod alarms;
pub mod basic;
pub mod colorctrl;
pub mod electrical;
pub mod groups;
pub mod ias;
pub mod identify;
pub mod io;
pub mod levelctrl;
pub mod measurement;
pub mod onoff;
pub mod ota;
pub mod pollctrl;
pub mod power;
pub mod scenes;
pub mod time;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::access::Access;
use crate::attr::AttributeDescriptor;
use crate::command::{CommandDescriptor, CommandDescriptors, CommandPayload};
use crate::hexkey;
use crate::types::ZclDataType;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClusterId(pub u16);

impl ClusterId {
    pub const BASIC: Self = Self(0x0000);
    pub const POWER_CONFIGURATION: Self = Self(0x0001);
    pub const DEVICE_TEMPERATURE_CONFIGURATION: Self = Self(0x0002);
    pub const IDENTIFY: Self = Self(0x0003);
    pub const GROUPS: Self = Self(0x0004);
    pub const SCENES: Self = Self(0x0005);
    pub const ON_OFF: Self = Self(0x0006);
    pub const LEVEL_CONTROL: Self = Self(0x0008);
    pub const ALARMS: Self = Self(0x0009);
    pub const TIME: Self = Self(0x000a);
    pub const ANALOG_INPUT_BASIC: Self = Self(0x000c);
    pub const BINARY_OUTPUT_BASIC: Self = Self(0x0010);
    pub const MULTISTATE_INPUT: Self = Self(0x0012);
    pub const OTA: Self = Self(0x0019);
    pub const POLL_CONTROL: Self = Self(0x0020);
    pub const COLOR_CONTROL: Self = Self(0x0300);
    pub const ILLUMINANCE_MEASUREMENT: Self = Self(0x0400);
    pub const ILLUMINANCE_LEVEL_SENSING: Self = Self(0x0401);
    pub const TEMPERATURE_MEASUREMENT: Self = Self(0x0402);
    pub const PRESSURE_MEASUREMENT: Self = Self(0x0403);
    pub const FLOW_MEASUREMENT: Self = Self(0x0404);
    pub const RELATIVE_HUMIDITY_MEASUREMENT: Self = Self(0x0405);
    pub const OCCUPANCY_SENSING: Self = Self(0x0406);
    pub const IAS_ZONE: Self = Self(0x0500);
    pub const IAS_ACE: Self = Self(0x0501);
    pub const IAS_WARNING_DEVICE: Self = Self(0x0502);
    pub const ELECTRICAL_MEASUREMENT: Self = Self(0x0b04);
}

impl fmt::Debug for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClusterId({:04x})", self.0)
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}", self.0)
    }
}

impl fmt::LowerHex for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl Serialize for ClusterId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<u16> for ClusterId {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<ClusterId> for u16 {
    fn from(value: ClusterId) -> Self {
        value.0
    }
}

/// Which side of the cluster a command id belongs to, seen from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CommandDirection {
    /// Sent to the server (client to server)
    Received,
    /// Sent by the server (server to client)
    Generated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cluster {
    pub name: &'static str,

    #[serde(serialize_with = "hexkey::serialize")]
    pub attributes: BTreeMap<u16, AttributeDescriptor>,

    pub commands: CommandDescriptors,
}

impl Cluster {
    #[must_use]
    pub fn attribute(&self, id: u16) -> Option<&AttributeDescriptor> {
        self.attributes.get(&id)
    }

    #[must_use]
    pub fn received(&self, id: u8) -> Option<&CommandDescriptor> {
        self.commands.received.get(&id)
    }

    #[must_use]
    pub fn generated(&self, id: u8) -> Option<&CommandDescriptor> {
        self.commands.generated.get(&id)
    }

    #[must_use]
    pub fn command(&self, direction: CommandDirection, id: u8) -> Option<&CommandDescriptor> {
        self.commands.table(direction).get(&id)
    }
}

pub type CommandTable = fn() -> Vec<(u8, CommandDescriptor)>;

/// Static definition of one cluster, turned into a [`Cluster`] by [`ClusterDef::build`].
#[derive(Clone, Copy)]
pub struct ClusterDef {
    pub id: ClusterId,
    pub name: &'static str,
    pub attributes: &'static [(u16, AttributeDescriptor)],
    pub received: CommandTable,
    pub generated: CommandTable,
}

impl ClusterDef {
    #[must_use]
    pub fn build(&self) -> Cluster {
        Cluster {
            name: self.name,
            attributes: self.attributes.iter().copied().collect(),
            commands: CommandDescriptors {
                received: (self.received)().into_iter().collect(),
                generated: (self.generated)().into_iter().collect(),
            },
        }
    }
}

impl fmt::Debug for ClusterDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterDef")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Command table for clusters without commands in one direction
#[must_use]
pub const fn no_commands() -> Vec<(u8, CommandDescriptor)> {
    Vec::new()
}

pub const STANDARD: &[ClusterDef] = &[
    basic::BASIC,
    power::POWER_CONFIGURATION,
    power::DEVICE_TEMPERATURE_CONFIGURATION,
    identify::IDENTIFY,
    groups::GROUPS,
    scenes::SCENES,
    onoff::ON_OFF,
    levelctrl::LEVEL_CONTROL,
    alarms::ALARMS,
    time::TIME,
    io::ANALOG_INPUT_BASIC,
    io::BINARY_OUTPUT_BASIC,
    io::MULTISTATE_INPUT,
    ota::OTA,
    pollctrl::POLL_CONTROL,
    colorctrl::COLOR_CONTROL,
    measurement::ILLUMINANCE_MEASUREMENT,
    measurement::ILLUMINANCE_LEVEL_SENSING,
    measurement::TEMPERATURE_MEASUREMENT,
    measurement::PRESSURE_MEASUREMENT,
    measurement::FLOW_MEASUREMENT,
    measurement::RELATIVE_HUMIDITY_MEASUREMENT,
    measurement::OCCUPANCY_SENSING,
    ias::IAS_ZONE,
    ias::IAS_ACE,
    ias::IAS_WARNING_DEVICE,
    electrical::ELECTRICAL_MEASUREMENT,
];

/* table shorthands */

pub(crate) const R: Access = Access::READ;
pub(crate) const RW: Access = Access::READ.union(Access::WRITE);
pub(crate) const RP: Access = Access::READ.union(Access::REPORTABLE);
pub(crate) const RS: Access = Access::READ.union(Access::SCENE);
pub(crate) const RPS: Access = RP.union(Access::SCENE);

pub(crate) const fn attr(
    name: &'static str,
    data_type: ZclDataType,
    access: Access,
) -> AttributeDescriptor {
    AttributeDescriptor::new(name, data_type, access)
}

pub(crate) fn cmd(name: &'static str, payload: impl Into<CommandPayload>) -> CommandDescriptor {
    CommandDescriptor::new(name, payload)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::cluster::{ClusterId, STANDARD};

    #[test]
    fn cluster_id_format() {
        assert_eq!(ClusterId::ON_OFF.to_string(), "0006");
        assert_eq!(ClusterId::ELECTRICAL_MEASUREMENT.to_string(), "0b04");
        assert_eq!(format!("{:?}", ClusterId(0x0300)), "ClusterId(0300)");
        assert_eq!(
            serde_json::to_value(ClusterId::COLOR_CONTROL).unwrap(),
            serde_json::json!("0300")
        );
    }

    #[test]
    fn standard_ids_are_unique() {
        let ids: BTreeSet<ClusterId> = STANDARD.iter().map(|def| def.id).collect();
        assert_eq!(ids.len(), STANDARD.len());
    }

    #[test]
    fn declared_entries_survive_collection() {
        for def in STANDARD {
            let cluster = def.build();
            assert_eq!(
                cluster.attributes.len(),
                def.attributes.len(),
                "duplicate attribute id in {}",
                def.name
            );
            assert_eq!(
                cluster.commands.received.len(),
                (def.received)().len(),
                "duplicate received id in {}",
                def.name
            );
            assert_eq!(
                cluster.commands.generated.len(),
                (def.generated)().len(),
                "duplicate generated id in {}",
                def.name
            );
        }
    }

    #[test]
    fn names_are_trimmed() {
        for def in STANDARD {
            let cluster = def.build();
            assert!(!cluster.name.is_empty());
            for attr in cluster.attributes.values() {
                assert!(!attr.name.is_empty(), "{}", def.name);
                assert_eq!(attr.name.trim(), attr.name, "{}", def.name);
            }
            for desc in cluster
                .commands
                .received
                .values()
                .chain(cluster.commands.generated.values())
            {
                assert_eq!(desc.name.trim(), desc.name, "{}", def.name);
            }
        }
    }
}
