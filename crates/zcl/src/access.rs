use std::fmt;

use bitflags::bitflags;
use serde::{Serialize, Serializer};

bitflags! {
    /// Capabilities of a cluster attribute.
    ///
    /// The low three bits line up with the access control field of
    /// DiscoverAttributesExtendedResponse.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Access: u8 {
        const READ       = 1 << 0;
        const WRITE      = 1 << 1;
        const REPORTABLE = 1 << 2;
        const SCENE      = 1 << 3;
    }
}

impl Access {
    #[must_use]
    pub const fn readable(self) -> bool {
        self.contains(Self::READ)
    }

    #[must_use]
    pub const fn writable(self) -> bool {
        self.contains(Self::WRITE)
    }

    #[must_use]
    pub const fn reportable(self) -> bool {
        self.contains(Self::REPORTABLE)
    }

    #[must_use]
    pub const fn in_scene(self) -> bool {
        self.contains(Self::SCENE)
    }
}

/// Compact form used in listings, e.g. `RW--` or `R-PS`.
impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            flag(self.readable(), 'R'),
            flag(self.writable(), 'W'),
            flag(self.reportable(), 'P'),
            flag(self.in_scene(), 'S'),
        )
    }
}

/// Serialized in the compact display form
impl Serialize for Access {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::access::Access;

    #[test]
    fn composition_is_order_independent() {
        assert_eq!(Access::READ | Access::WRITE, Access::WRITE | Access::READ);
        assert_eq!(
            (Access::READ | Access::WRITE) | Access::SCENE,
            Access::READ | (Access::WRITE | Access::SCENE)
        );
    }

    #[test]
    fn single_bit_mask() {
        let access = Access::READ | Access::REPORTABLE;

        assert_eq!(access & Access::READ, Access::READ);
        assert_eq!(access & Access::REPORTABLE, Access::REPORTABLE);
        assert!((access & Access::WRITE).is_empty());
        assert!((access & Access::SCENE).is_empty());

        assert!(access.readable());
        assert!(!access.writable());
        assert!(access.reportable());
        assert!(!access.in_scene());
    }

    #[test]
    fn wire_bits() {
        assert_eq!(Access::READ.bits(), 0x01);
        assert_eq!(Access::WRITE.bits(), 0x02);
        assert_eq!(Access::REPORTABLE.bits(), 0x04);
        assert_eq!(Access::SCENE.bits(), 0x08);
        assert_eq!(Access::from_bits(0x10), None);
    }

    #[test]
    fn empty_is_allowed() {
        let access = Access::empty();
        assert!(!access.readable());
        assert_eq!(access.to_string(), "----");
    }

    #[test]
    fn display() {
        assert_eq!((Access::READ | Access::WRITE).to_string(), "RW--");
        assert_eq!(
            (Access::READ | Access::REPORTABLE | Access::SCENE).to_string(),
            "R-PS"
        );
        assert_eq!(
            serde_json::to_value(Access::READ | Access::WRITE).unwrap(),
            serde_json::json!("RW--")
        );
    }
}
