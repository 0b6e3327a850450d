use serde::Serialize;

use crate::access::Access;
use crate::types::ZclDataType;

/// Static description of one cluster attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeDescriptor {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub data_type: ZclDataType,
    pub access: Access,
}

impl AttributeDescriptor {
    #[must_use]
    pub const fn new(name: &'static str, data_type: ZclDataType, access: Access) -> Self {
        Self {
            name,
            data_type,
            access,
        }
    }

    /// Attributes the application may push into a scene
    #[must_use]
    pub const fn in_scene(&self) -> bool {
        self.access.in_scene()
    }
}

#[cfg(test)]
mod tests {
    use crate::access::Access;
    use crate::attr::AttributeDescriptor;
    use crate::types::ZclDataType;

    #[test]
    fn serialize() {
        let desc = AttributeDescriptor::new(
            "CurrentLevel",
            ZclDataType::Uint8,
            Access::READ.union(Access::REPORTABLE),
        );

        assert_eq!(
            serde_json::to_value(desc).unwrap(),
            serde_json::json!({
                "name": "CurrentLevel",
                "type": "Uint8",
                "access": "R-P-",
            })
        );
    }
}
