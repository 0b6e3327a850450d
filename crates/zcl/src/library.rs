use std::collections::BTreeMap;

use serde::Serialize;

use crate::attr::AttributeDescriptor;
use crate::cluster::{self, Cluster, ClusterDef, ClusterId, CommandDirection};
use crate::command::CommandDescriptor;
use crate::error::{ZclError, ZclResult};
use crate::foundation;
use crate::frame::ZclFrame;
use crate::hexkey;

/// Read-only registry of ZCL clusters, their attributes and commands.
///
/// Global (foundation) commands and cluster-specific commands are separate id
/// spaces: a frame's type decides which one its command id belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterLibrary {
    #[serde(serialize_with = "hexkey::serialize")]
    global: BTreeMap<u8, CommandDescriptor>,

    #[serde(serialize_with = "hexkey::serialize")]
    clusters: BTreeMap<ClusterId, Cluster>,
}

impl ClusterLibrary {
    /// Registry with every standard cluster
    #[must_use]
    pub fn new() -> Self {
        Self::from_definitions(cluster::STANDARD)
    }

    /// Registry with the foundation commands and the given clusters only
    #[must_use]
    pub fn from_definitions(defs: &[ClusterDef]) -> Self {
        let global: BTreeMap<_, _> = foundation::commands().into_iter().collect();
        let clusters: BTreeMap<_, _> = defs.iter().map(|def| (def.id, def.build())).collect();

        log::debug!(
            "Built cluster library: {} global commands, {} clusters",
            global.len(),
            clusters.len()
        );

        Self { global, clusters }
    }

    #[must_use]
    pub const fn clusters(&self) -> &BTreeMap<ClusterId, Cluster> {
        &self.clusters
    }

    #[must_use]
    pub const fn global(&self) -> &BTreeMap<u8, CommandDescriptor> {
        &self.global
    }

    pub fn cluster(&self, id: impl Into<ClusterId>) -> ZclResult<&Cluster> {
        let id = id.into();
        self.clusters.get(&id).ok_or(ZclError::ClusterNotFound(id))
    }

    pub fn attribute(
        &self,
        cluster: impl Into<ClusterId>,
        attr: u16,
    ) -> ZclResult<&AttributeDescriptor> {
        let cluster = cluster.into();
        self.cluster(cluster)?
            .attribute(attr)
            .ok_or(ZclError::AttributeNotFound { cluster, attr })
    }

    pub fn command(
        &self,
        cluster: impl Into<ClusterId>,
        direction: CommandDirection,
        cmd: u8,
    ) -> ZclResult<&CommandDescriptor> {
        let cluster = cluster.into();
        self.cluster(cluster)?
            .command(direction, cmd)
            .ok_or(ZclError::CommandNotFound {
                cluster,
                direction,
                cmd,
            })
    }

    pub fn global_command(&self, cmd: u8) -> ZclResult<&CommandDescriptor> {
        self.global
            .get(&cmd)
            .ok_or(ZclError::GlobalCommandNotFound(cmd))
    }

    /// Find the descriptor for the command carried by `frame`, sent on `cluster`.
    pub fn resolve(
        &self,
        cluster: impl Into<ClusterId>,
        frame: &ZclFrame,
    ) -> ZclResult<&CommandDescriptor> {
        let cluster = cluster.into();

        if !frame.cluster_specific() {
            return self.global_command(frame.cmd);
        }

        let direction = frame.command_direction();

        /* no manufacturer extensions are registered */
        if frame.manufacturer_specific() {
            return Err(ZclError::CommandNotFound {
                cluster,
                direction,
                cmd: frame.cmd,
            });
        }

        self.command(cluster, direction, frame.cmd)
    }
}

impl Default for ClusterLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::access::Access;
    use crate::cluster::{self, ClusterId, CommandDirection};
    use crate::command::CommandPayload;
    use crate::error::ZclError;
    use crate::frame::ZclFrame;
    use crate::library::ClusterLibrary;
    use crate::types::ZclDataType;

    fn frame(hex: &str) -> ZclFrame {
        let data = hex::decode(hex).unwrap();
        ZclFrame::parse(&mut Cursor::new(&data)).unwrap()
    }

    #[test]
    fn default_response_is_global() {
        let lib = ClusterLibrary::new();
        assert_eq!(lib.global()[&0x0b].name, "DefaultResponse");
        assert!(matches!(
            lib.global()[&0x0b].payload,
            CommandPayload::DefaultResponse(_)
        ));
    }

    #[test]
    fn basic_library_version() {
        let lib = ClusterLibrary::new();
        let attr = &lib.clusters()[&ClusterId::BASIC].attributes[&0x0000];

        assert_eq!(attr.name, "ZLibraryVersion");
        assert_eq!(attr.data_type, ZclDataType::Uint8);
        assert_eq!(attr.access, Access::READ);
    }

    #[test]
    fn on_off_on() {
        let lib = ClusterLibrary::new();
        let on = &lib.clusters()[&ClusterId::ON_OFF].commands.received[&0x01];

        assert_eq!(on.name, "On");
        assert!(on.payload.is_empty());
    }

    #[test]
    fn enhanced_current_hue_access() {
        let lib = ClusterLibrary::new();
        let attr = lib.attribute(ClusterId::COLOR_CONTROL, 0x4000).unwrap();

        assert_eq!(attr.name, "EnhancedCurrentHue");
        assert!(attr.access.contains(Access::READ | Access::SCENE));
        assert!(!attr.access.writable());
    }

    #[test]
    fn unknown_cluster() {
        let lib = ClusterLibrary::new();
        assert!(!lib.clusters().contains_key(&ClusterId(0xffff)));
        assert!(matches!(
            lib.cluster(0xffff_u16),
            Err(ZclError::ClusterNotFound(ClusterId(0xffff)))
        ));
    }

    #[test]
    fn not_found_variants() {
        let lib = ClusterLibrary::new();

        let err = lib.attribute(ClusterId::ON_OFF, 0x1234).unwrap_err();
        assert!(matches!(err, ZclError::AttributeNotFound { attr: 0x1234, .. }));

        let err = lib
            .command(ClusterId::ON_OFF, CommandDirection::Generated, 0x00)
            .unwrap_err();
        assert!(err.is_not_found());

        let err = lib.global_command(0x17).unwrap_err();
        assert!(matches!(err, ZclError::GlobalCommandNotFound(0x17)));
    }

    #[test]
    fn lookups_are_stable() {
        let lib = ClusterLibrary::new();
        assert_eq!(lib.clusters(), lib.clusters());
        assert_eq!(lib.global(), lib.global());
        assert_eq!(ClusterLibrary::new(), lib);
    }

    #[test]
    fn every_standard_cluster_is_present() {
        let lib = ClusterLibrary::new();
        assert_eq!(lib.clusters().len(), cluster::STANDARD.len());
        for def in cluster::STANDARD {
            assert_eq!(lib.cluster(def.id).unwrap().name, def.name);
        }
    }

    #[test]
    fn partial_registry() {
        let lib = ClusterLibrary::from_definitions(&[cluster::onoff::ON_OFF]);

        assert_eq!(lib.clusters().len(), 1);
        assert_eq!(lib.global().len(), 0x17);
        assert!(lib.cluster(ClusterId::LEVEL_CONTROL).is_err());
    }

    #[test]
    fn resolve_profile_wide() {
        let lib = ClusterLibrary::new();

        /* ReadAttributes sent to on/off */
        let desc = lib.resolve(ClusterId::ON_OFF, &frame("000100")).unwrap();
        assert_eq!(desc.name, "ReadAttributes");
    }

    #[test]
    fn resolve_cluster_specific() {
        let lib = ClusterLibrary::new();

        let desc = lib.resolve(ClusterId::ON_OFF, &frame("010201")).unwrap();
        assert_eq!(desc.name, "On");

        /* the same id server-to-client belongs to the generated table */
        let desc = lib.resolve(ClusterId::GROUPS, &frame("090300")).unwrap();
        assert_eq!(desc.name, "AddGroupResponse");
    }

    #[test]
    fn resolve_manufacturer_specific() {
        let lib = ClusterLibrary::new();

        let err = lib
            .resolve(ClusterId::SCENES, &frame("050b10070002"))
            .unwrap_err();
        assert!(matches!(
            err,
            ZclError::CommandNotFound {
                direction: CommandDirection::Received,
                cmd: 0x00,
                ..
            }
        ));
    }

    #[test]
    fn shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClusterLibrary>();

        let lib = ClusterLibrary::new();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(lib.global()[&0x00].name, "ReadAttributes"));
            }
        });
    }

    #[test]
    fn serialize_with_hex_keys() {
        let lib = ClusterLibrary::from_definitions(&[cluster::onoff::ON_OFF]);
        let json = serde_json::to_value(&lib).unwrap();

        assert_eq!(json["global"]["0x0b"]["name"], "DefaultResponse");

        let onoff = &json["clusters"]["0x0006"];
        assert_eq!(onoff["name"], "OnOff");
        assert_eq!(onoff["attributes"]["0x0000"]["type"], "Bool");
        assert_eq!(onoff["commands"]["received"]["0x42"]["name"], "OnWithTimedOff");
    }
}
