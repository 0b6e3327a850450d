pub mod access;
pub mod attr;
pub mod cluster;
pub mod command;
pub mod error;
pub mod foundation;
pub mod frame;
pub mod library;
pub mod types;

mod hexkey;

pub use access::Access;
pub use attr::AttributeDescriptor;
pub use cluster::{Cluster, ClusterId, CommandDirection};
pub use command::{CommandDescriptor, CommandDescriptors, CommandPayload, Payload};
pub use library::ClusterLibrary;
pub use types::ZclDataType;
