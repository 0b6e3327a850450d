use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, cmd, ClusterDef, ClusterId, R};
use crate::command::{payload, CommandDescriptor};
use crate::types::ZclDataType::{Bitmap8, Bool, IeeeAddr, Uint8, Uint16};

/// Attribute values of one cluster, stored with a scene
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFieldSet {
    pub cluster: u16,
    pub data: Vec<u8>,
}

payload! {
    AddScene {
        group_id: u16,
        scene_id: u8,
        transition_time: u16,
        scene_name: String,
        extension_fields: Vec<ExtensionFieldSet>,
    }

    ViewScene {
        group_id: u16,
        scene_id: u8,
    }

    RemoveScene {
        group_id: u16,
        scene_id: u8,
    }

    RemoveAllScenes {
        group_id: u16,
    }

    StoreScene {
        group_id: u16,
        scene_id: u8,
    }

    RecallScene {
        group_id: u16,
        scene_id: u8,
        /// Optional trailing field, tenths of a second
        transition_time: Option<u16>,
    }

    GetSceneMembership {
        group_id: u16,
    }

    /// Like [`AddScene`], with transition time in tenths of a second
    EnhancedAddScene {
        group_id: u16,
        scene_id: u8,
        transition_time: u16,
        scene_name: String,
        extension_fields: Vec<ExtensionFieldSet>,
    }

    EnhancedViewScene {
        group_id: u16,
        scene_id: u8,
    }

    CopyScene {
        mode: u8,
        group_from: u16,
        scene_from: u8,
        group_to: u16,
        scene_to: u8,
    }

    AddSceneResponse {
        status: u8,
        group_id: u16,
        scene_id: u8,
    }

    ViewSceneResponse {
        status: u8,
        group_id: u16,
        scene_id: u8,
        transition_time: u16,
        scene_name: String,
        extension_fields: Vec<ExtensionFieldSet>,
    }

    RemoveSceneResponse {
        status: u8,
        group_id: u16,
        scene_id: u8,
    }

    RemoveAllScenesResponse {
        status: u8,
        group_id: u16,
    }

    StoreSceneResponse {
        status: u8,
        group_id: u16,
        scene_id: u8,
    }

    GetSceneMembershipResponse {
        status: u8,
        capacity: u8,
        group_id: u16,
        scene_list: Vec<u8>,
    }

    EnhancedAddSceneResponse {
        status: u8,
        group_id: u16,
        scene_id: u8,
    }

    EnhancedViewSceneResponse {
        status: u8,
        group_id: u16,
        scene_id: u8,
        transition_time: u16,
        scene_name: String,
        extension_fields: Vec<ExtensionFieldSet>,
    }

    CopySceneResponse {
        status: u8,
        group_from: u16,
        scene_from: u8,
    }
}

const ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[
    (0x0000, attr("SceneCount", Uint8, R)),
    (0x0001, attr("CurrentScene", Uint8, R)),
    (0x0002, attr("CurrentGroup", Uint16, R)),
    (0x0003, attr("SceneValid", Bool, R)),
    (0x0004, attr("NameSupport", Bitmap8, R)),
    (0x0005, attr("LastConfiguredBy", IeeeAddr, R)),
];

fn received() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("AddScene", AddScene::default())),
        (0x01, cmd("ViewScene", ViewScene::default())),
        (0x02, cmd("RemoveScene", RemoveScene::default())),
        (0x03, cmd("RemoveAllScenes", RemoveAllScenes::default())),
        (0x04, cmd("StoreScene", StoreScene::default())),
        (0x05, cmd("RecallScene", RecallScene::default())),
        (0x06, cmd("GetSceneMembership", GetSceneMembership::default())),
        (0x40, cmd("EnhancedAddScene", EnhancedAddScene::default())),
        (0x41, cmd("EnhancedViewScene", EnhancedViewScene::default())),
        (0x42, cmd("CopyScene", CopyScene::default())),
    ]
}

fn generated() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("AddSceneResponse", AddSceneResponse::default())),
        (0x01, cmd("ViewSceneResponse", ViewSceneResponse::default())),
        (0x02, cmd("RemoveSceneResponse", RemoveSceneResponse::default())),
        (0x03, cmd("RemoveAllScenesResponse", RemoveAllScenesResponse::default())),
        (0x04, cmd("StoreSceneResponse", StoreSceneResponse::default())),
        (
            0x06,
            cmd("GetSceneMembershipResponse", GetSceneMembershipResponse::default()),
        ),
        (
            0x40,
            cmd("EnhancedAddSceneResponse", EnhancedAddSceneResponse::default()),
        ),
        (
            0x41,
            cmd("EnhancedViewSceneResponse", EnhancedViewSceneResponse::default()),
        ),
        (0x42, cmd("CopySceneResponse", CopySceneResponse::default())),
    ]
}

pub const SCENES: ClusterDef = ClusterDef {
    id: ClusterId::SCENES,
    name: "Scenes",
    attributes: ATTRIBUTES,
    received,
    generated,
};

#[cfg(test)]
mod tests {
    use crate::cluster::scenes::SCENES;

    #[test]
    fn no_generated_0x05() {
        let scenes = SCENES.build();
        assert!(scenes.received(0x05).is_some());
        assert!(scenes.generated(0x05).is_none());
    }
}
