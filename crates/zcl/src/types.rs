use packed_struct::derive::PrimitiveEnum_u8;
use serde::Serialize;

/// ZCL attribute data types, by their wire tag.
#[derive(PrimitiveEnum_u8, Serialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ZclDataType {
    /** No data */
    NoData = 0x00,

    /* General data, 8 to 64 bits */
    Data8 = 0x08,
    Data16 = 0x09,
    Data24 = 0x0a,
    Data32 = 0x0b,
    Data40 = 0x0c,
    Data48 = 0x0d,
    Data56 = 0x0e,
    Data64 = 0x0f,

    Bool = 0x10,

    Bitmap8 = 0x18,
    Bitmap16 = 0x19,
    Bitmap24 = 0x1a,
    Bitmap32 = 0x1b,
    Bitmap40 = 0x1c,
    Bitmap48 = 0x1d,
    Bitmap56 = 0x1e,
    Bitmap64 = 0x1f,

    Uint8 = 0x20,
    Uint16 = 0x21,
    Uint24 = 0x22,
    Uint32 = 0x23,
    Uint40 = 0x24,
    Uint48 = 0x25,
    Uint56 = 0x26,
    Uint64 = 0x27,

    Int8 = 0x28,
    Int16 = 0x29,
    Int24 = 0x2a,
    Int32 = 0x2b,
    Int40 = 0x2c,
    Int48 = 0x2d,
    Int56 = 0x2e,
    Int64 = 0x2f,

    Enum8 = 0x30,
    Enum16 = 0x31,

    /** Semi-precision (16 bit) floating point */
    Float16 = 0x38,
    /** Single-precision (32 bit) floating point */
    Float32 = 0x39,
    /** Double-precision (64 bit) floating point */
    Float64 = 0x3a,

    /** Octet string, 1 byte length prefix */
    OctetStr = 0x41,
    /** Character string, 1 byte length prefix */
    CharStr = 0x42,
    /** Octet string, 2 byte length prefix */
    LongOctetStr = 0x43,
    /** Character string, 2 byte length prefix */
    LongCharStr = 0x44,

    Array = 0x48,
    Struct = 0x4c,
    Set = 0x50,
    Bag = 0x51,

    TimeOfDay = 0xe0,
    Date = 0xe1,
    /** Seconds since 2000-01-01 00:00 UTC */
    UtcTime = 0xe2,

    ClusterId = 0xe8,
    AttributeId = 0xe9,
    BacnetOid = 0xea,

    /** IEEE address (U64) type */
    IeeeAddr = 0xf0,
    /** 128-bit security key */
    SecurityKey = 0xf1,

    /** Unknown data type */
    Unknown = 0xff,
}

impl ZclDataType {
    /// Octets taken by a value of this type on the wire, or `None` when the
    /// length is carried in the value itself.
    #[must_use]
    pub const fn size(self) -> Option<usize> {
        match self {
            Self::NoData | Self::Unknown => Some(0),

            Self::Data8
            | Self::Bool
            | Self::Bitmap8
            | Self::Uint8
            | Self::Int8
            | Self::Enum8 => Some(1),

            Self::Data16
            | Self::Bitmap16
            | Self::Uint16
            | Self::Int16
            | Self::Enum16
            | Self::Float16
            | Self::ClusterId
            | Self::AttributeId => Some(2),

            Self::Data24 | Self::Bitmap24 | Self::Uint24 | Self::Int24 => Some(3),

            Self::Data32
            | Self::Bitmap32
            | Self::Uint32
            | Self::Int32
            | Self::Float32
            | Self::TimeOfDay
            | Self::Date
            | Self::UtcTime
            | Self::BacnetOid => Some(4),

            Self::Data40 | Self::Bitmap40 | Self::Uint40 | Self::Int40 => Some(5),
            Self::Data48 | Self::Bitmap48 | Self::Uint48 | Self::Int48 => Some(6),
            Self::Data56 | Self::Bitmap56 | Self::Uint56 | Self::Int56 => Some(7),

            Self::Data64
            | Self::Bitmap64
            | Self::Uint64
            | Self::Int64
            | Self::Float64
            | Self::IeeeAddr => Some(8),

            Self::SecurityKey => Some(16),

            Self::OctetStr
            | Self::CharStr
            | Self::LongOctetStr
            | Self::LongCharStr
            | Self::Array
            | Self::Struct
            | Self::Set
            | Self::Bag => None,
        }
    }

    /// Analog types carry a reportable change in attribute reporting
    /// configuration. All other types are discrete.
    #[must_use]
    pub const fn is_analog(self) -> bool {
        matches!(
            self,
            Self::Uint8
                | Self::Uint16
                | Self::Uint24
                | Self::Uint32
                | Self::Uint40
                | Self::Uint48
                | Self::Uint56
                | Self::Uint64
                | Self::Int8
                | Self::Int16
                | Self::Int24
                | Self::Int32
                | Self::Int40
                | Self::Int48
                | Self::Int56
                | Self::Int64
                | Self::Float16
                | Self::Float32
                | Self::Float64
                | Self::TimeOfDay
                | Self::Date
                | Self::UtcTime
        )
    }
}

#[cfg(test)]
mod tests {
    use packed_struct::{PrimitiveEnum, PrimitiveEnumStaticStr};

    use crate::types::ZclDataType;

    #[test]
    fn wire_tags() {
        assert_eq!(ZclDataType::Uint8.to_primitive(), 0x20);
        assert_eq!(ZclDataType::CharStr.to_primitive(), 0x42);
        assert_eq!(ZclDataType::IeeeAddr.to_primitive(), 0xf0);
        assert_eq!(
            ZclDataType::from_primitive(0x30),
            Some(ZclDataType::Enum8)
        );
        assert_eq!(ZclDataType::from_primitive(0x01), None);
    }

    #[test]
    fn sizes() {
        assert_eq!(ZclDataType::Bool.size(), Some(1));
        assert_eq!(ZclDataType::Uint24.size(), Some(3));
        assert_eq!(ZclDataType::UtcTime.size(), Some(4));
        assert_eq!(ZclDataType::IeeeAddr.size(), Some(8));
        assert_eq!(ZclDataType::SecurityKey.size(), Some(16));
        assert_eq!(ZclDataType::CharStr.size(), None);
        assert_eq!(ZclDataType::Array.size(), None);
    }

    #[test]
    fn every_variant_is_classified() {
        for dtype in ZclDataType::all_variants() {
            if dtype.is_analog() {
                assert!(dtype.size().is_some(), "{dtype:?}");
            }
        }
    }

    #[test]
    fn analog_vs_discrete() {
        assert!(ZclDataType::Int16.is_analog());
        assert!(ZclDataType::Float32.is_analog());
        assert!(!ZclDataType::Bitmap8.is_analog());
        assert!(!ZclDataType::Enum8.is_analog());
        assert!(!ZclDataType::IeeeAddr.is_analog());
    }

    #[test]
    fn display_str() {
        assert_eq!(ZclDataType::Uint16.to_display_str(), "Uint16");
    }
}
