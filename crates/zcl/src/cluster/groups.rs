use crate::attr::AttributeDescriptor;
use crate::cluster::{attr, cmd, ClusterDef, ClusterId, R};
use crate::command::{payload, CommandDescriptor};
use crate::types::ZclDataType::Bitmap8;

payload! {
    AddGroup {
        group_id: u16,
        group_name: String,
    }

    ViewGroup {
        group_id: u16,
    }

    /// An empty `group_list` asks for every group
    GetGroupMembership {
        group_list: Vec<u16>,
    }

    RemoveGroup {
        group_id: u16,
    }

    RemoveAllGroups {}

    AddGroupIfIdentifying {
        group_id: u16,
        group_name: String,
    }

    AddGroupResponse {
        status: u8,
        group_id: u16,
    }

    ViewGroupResponse {
        status: u8,
        group_id: u16,
        group_name: String,
    }

    GetGroupMembershipResponse {
        capacity: u8,
        group_list: Vec<u16>,
    }

    RemoveGroupResponse {
        status: u8,
        group_id: u16,
    }
}

const ATTRIBUTES: &[(u16, AttributeDescriptor)] = &[(0x0000, attr("NameSupport", Bitmap8, R))];

fn received() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("AddGroup", AddGroup::default())),
        (0x01, cmd("ViewGroup", ViewGroup::default())),
        (0x02, cmd("GetGroupMembership", GetGroupMembership::default())),
        (0x03, cmd("RemoveGroup", RemoveGroup::default())),
        (0x04, cmd("RemoveAllGroups", RemoveAllGroups {})),
        (0x05, cmd("AddGroupIfIdentifying", AddGroupIfIdentifying::default())),
    ]
}

fn generated() -> Vec<(u8, CommandDescriptor)> {
    vec![
        (0x00, cmd("AddGroupResponse", AddGroupResponse::default())),
        (0x01, cmd("ViewGroupResponse", ViewGroupResponse::default())),
        (
            0x02,
            cmd("GetGroupMembershipResponse", GetGroupMembershipResponse::default()),
        ),
        (0x03, cmd("RemoveGroupResponse", RemoveGroupResponse::default())),
    ]
}

pub const GROUPS: ClusterDef = ClusterDef {
    id: ClusterId::GROUPS,
    name: "Groups",
    attributes: ATTRIBUTES,
    received,
    generated,
};

#[cfg(test)]
mod tests {
    use crate::cluster::groups::GROUPS;
    use crate::command::CommandPayload;

    #[test]
    fn received_and_generated_overlap() {
        let groups = GROUPS.build();

        let add = groups.received(0x00).unwrap();
        let resp = groups.generated(0x00).unwrap();

        assert_eq!(add.name, "AddGroup");
        assert_eq!(resp.name, "AddGroupResponse");
        assert!(matches!(resp.payload, CommandPayload::AddGroupResponse(_)));
    }
}
