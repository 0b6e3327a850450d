use std::fmt::Debug;
use std::io::Read;

use byteorder::{LittleEndian as LE, ReadBytesExt};
use packed_struct::prelude::*;

use crate::cluster::CommandDirection;
use crate::error::ZclResult;

#[derive(PrimitiveEnum_u8, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ZclFrameType {
    /// Foundation command, looked up in the global table
    ProfileWide = 0x00,
    /// Command from the cluster's own received/generated tables
    ClusterSpecific = 0x01,
}

#[derive(PrimitiveEnum_u8, Debug, Clone, Copy, Eq, PartialEq)]
pub enum ZclFrameDirection {
    ClientToServer = 0x00,
    ServerToClient = 0x01,
}

#[derive(PackedStruct, Clone, Copy)]
#[packed_struct(size_bytes = "1", bit_numbering = "lsb0")]
pub struct ZclFrameFlags {
    #[packed_field(bits = "0..2", ty = "enum")]
    pub frame_type: ZclFrameType,

    #[packed_field(bits = "2")]
    pub manufacturer_specific: bool,

    #[packed_field(bits = "3", ty = "enum")]
    pub direction: ZclFrameDirection,

    #[packed_field(bits = "4")]
    pub disable_default_response: bool,
}

impl Debug for ZclFrameFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ft = match self.frame_type {
            ZclFrameType::ProfileWide => "PW",
            ZclFrameType::ClusterSpecific => "CS",
        };
        let dir = match self.direction {
            ZclFrameDirection::ClientToServer => "C2S",
            ZclFrameDirection::ServerToClient => "S2C",
        };
        write!(f, "[ ")?;
        write!(f, "ft:{ft}, ")?;
        write!(f, "ms:{}, ", u8::from(self.manufacturer_specific))?;
        write!(f, "dir:{dir}, ")?;
        write!(f, "ddr:{}", u8::from(self.disable_default_response))?;
        write!(f, " ]")?;
        Ok(())
    }
}

/// ZCL frame header. The payload that follows is left to the caller.
#[derive(Debug, Clone, Copy)]
pub struct ZclFrame {
    pub flags: ZclFrameFlags,
    pub mfcode: Option<u16>,
    pub seqnr: u8,
    pub cmd: u8,
}

impl ZclFrame {
    /// Read the frame header. The manufacturer code is little-endian, like
    /// every other multi-octet ZCL field.
    pub fn parse(data: &mut impl Read) -> ZclResult<Self> {
        let flags = ZclFrameFlags::unpack(&[data.read_u8()?])?;

        let mfcode = if flags.manufacturer_specific {
            Some(data.read_u16::<LE>()?)
        } else {
            None
        };

        let seqnr = data.read_u8()?;
        let cmd = data.read_u8()?;

        Ok(Self {
            flags,
            mfcode,
            seqnr,
            cmd,
        })
    }

    #[must_use]
    pub fn cluster_specific(&self) -> bool {
        self.flags.frame_type == ZclFrameType::ClusterSpecific
    }

    #[must_use]
    pub const fn manufacturer_specific(&self) -> bool {
        self.flags.manufacturer_specific
    }

    #[must_use]
    pub fn c2s(&self) -> bool {
        self.flags.direction == ZclFrameDirection::ClientToServer
    }

    /// Which of the server cluster's command tables this frame's command
    /// id belongs to.
    #[must_use]
    pub fn command_direction(&self) -> CommandDirection {
        if self.c2s() {
            CommandDirection::Received
        } else {
            CommandDirection::Generated
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::cluster::CommandDirection;
    use crate::frame::{ZclFrame, ZclFrameDirection, ZclFrameType};

    #[test]
    fn parse_cluster_specific() {
        let data = hex::decode("012a01").unwrap();
        let frame = ZclFrame::parse(&mut Cursor::new(&data)).unwrap();

        assert_eq!(frame.flags.frame_type, ZclFrameType::ClusterSpecific);
        assert_eq!(frame.flags.direction, ZclFrameDirection::ClientToServer);
        assert!(frame.cluster_specific());
        assert!(!frame.manufacturer_specific());
        assert_eq!(frame.mfcode, None);
        assert_eq!(frame.seqnr, 0x2a);
        assert_eq!(frame.cmd, 0x01);
        assert_eq!(frame.command_direction(), CommandDirection::Received);
    }

    #[test]
    fn parse_profile_wide_response() {
        let data = hex::decode("18050b").unwrap();
        let frame = ZclFrame::parse(&mut Cursor::new(&data)).unwrap();

        assert_eq!(frame.flags.frame_type, ZclFrameType::ProfileWide);
        assert_eq!(frame.flags.direction, ZclFrameDirection::ServerToClient);
        assert!(frame.flags.disable_default_response);
        assert_eq!(frame.cmd, 0x0b);
        assert_eq!(frame.command_direction(), CommandDirection::Generated);
    }

    #[test]
    fn parse_manufacturer_code() {
        let data = hex::decode("050b10070002").unwrap();
        let mut cur = Cursor::new(&data);
        let frame = ZclFrame::parse(&mut cur).unwrap();

        assert!(frame.manufacturer_specific());
        assert_eq!(frame.mfcode, Some(0x100b));
        assert_eq!(frame.seqnr, 0x07);
        assert_eq!(frame.cmd, 0x00);
        assert_eq!(cur.position(), 5);
    }

    #[test]
    fn parse_truncated() {
        let data = hex::decode("01").unwrap();
        assert!(ZclFrame::parse(&mut Cursor::new(&data)).is_err());
    }

    #[test]
    fn debug_flags() {
        let data = hex::decode("190000").unwrap();
        let frame = ZclFrame::parse(&mut Cursor::new(&data)).unwrap();
        assert_eq!(
            format!("{:?}", frame.flags),
            "[ ft:CS, ms:0, dir:S2C, ddr:1 ]"
        );
    }
}
