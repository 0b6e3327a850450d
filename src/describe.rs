use std::fmt::{self, Display};
use std::io::Cursor;

use byteorder::{LittleEndian as LE, ReadBytesExt};
use packed_struct::{PrimitiveEnum, PrimitiveEnumStaticStr};

use zcl::foundation::GlobalCommand;
use zcl::frame::ZclFrame;
use zcl::{AttributeDescriptor, ClusterId, ClusterLibrary, ZclDataType};

use crate::config::InspectConfig;
use crate::error::{InspectError, InspectResult};
use crate::record::Record;

/// Human-readable summary of one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub cluster: String,
    /// `None` when the registry has no matching command
    pub command: Option<&'static str>,
    pub details: Vec<String>,
}

impl Description {
    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.command.is_some()
    }
}

impl Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.cluster, self.command.unwrap_or("Unknown"))?;
        if !self.details.is_empty() {
            write!(f, " [{}]", self.details.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Inspection {
    pub frame: ZclFrame,
    pub description: Description,
    pub payload: Vec<u8>,
}

/// What to check about each attribute in a record list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttrCheck {
    Write,
    Report,
}

pub struct Inspector<'a> {
    lib: &'a ClusterLibrary,
    config: &'a InspectConfig,
}

impl<'a> Inspector<'a> {
    #[must_use]
    pub const fn new(lib: &'a ClusterLibrary, config: &'a InspectConfig) -> Self {
        Self { lib, config }
    }

    /// Describe the frame in `rec`. Returns `None` for empty or suppressed records.
    pub fn inspect(&self, rec: &Record) -> InspectResult<Option<Inspection>> {
        if rec.data.is_empty() || self.config.is_suppressed(rec.cluster) {
            return Ok(None);
        }

        let mut cur = Cursor::new(rec.data.as_slice());
        let frame = ZclFrame::parse(&mut cur)?;
        let payload = rec.data[position(&cur)..].to_vec();

        let description = self.describe(ClusterId(rec.cluster), &frame, &payload)?;

        Ok(Some(Inspection {
            frame,
            description,
            payload,
        }))
    }

    pub fn describe(
        &self,
        cluster: ClusterId,
        frame: &ZclFrame,
        payload: &[u8],
    ) -> InspectResult<Description> {
        let cluster_name = self
            .lib
            .cluster(cluster)
            .map_or_else(|_| format!("Cluster({cluster})"), |c| c.name.to_string());

        let command = match self.lib.resolve(cluster, frame) {
            Ok(desc) => Some(desc.name),
            Err(err) if err.is_not_found() => None,
            Err(err) => return Err(err.into()),
        };

        let details = if frame.cluster_specific() {
            vec![]
        } else {
            self.foundation_details(cluster, frame, payload)?
        };

        Ok(Description {
            cluster: cluster_name,
            command,
            details,
        })
    }

    fn foundation_details(
        &self,
        cluster: ClusterId,
        frame: &ZclFrame,
        payload: &[u8],
    ) -> InspectResult<Vec<String>> {
        let Some(cmd) = GlobalCommand::from_primitive(frame.cmd) else {
            return Ok(vec![]);
        };

        /* manufacturer attribute ids are not in the registry */
        let mfr = frame.manufacturer_specific();

        let mut cur = Cursor::new(payload);

        match cmd {
            GlobalCommand::ReadAttributes => {
                let mut res = vec![];
                while position(&cur) < payload.len() {
                    let attr = cur.read_u16::<LE>()?;
                    res.push(self.attr_name(cluster, attr, mfr));
                }
                Ok(res)
            }

            GlobalCommand::ReadAttributesResponse => {
                let mut res = vec![];
                while position(&cur) < payload.len() {
                    let attr = cur.read_u16::<LE>()?;
                    let status = cur.read_u8()?;
                    if status == 0 {
                        skip_value(&mut cur, attr)?;
                        res.push(self.attr_name(cluster, attr, mfr));
                    } else {
                        let name = self.attr_name(cluster, attr, mfr);
                        res.push(format!("{name} (status {status:02x})"));
                    }
                }
                Ok(res)
            }

            GlobalCommand::WriteAttributes
            | GlobalCommand::WriteAttributesUndivided
            | GlobalCommand::WriteAttributesNoResponse => {
                self.attribute_records(cluster, &mut cur, AttrCheck::Write, mfr)
            }

            GlobalCommand::ReportAttributes => {
                self.attribute_records(cluster, &mut cur, AttrCheck::Report, mfr)
            }

            GlobalCommand::DefaultResponse => {
                let cmd = cur.read_u8()?;
                let status = cur.read_u8()?;
                Ok(vec![format!("cmd {cmd:02x}"), format!("status {status:02x}")])
            }

            _ => Ok(vec![]),
        }
    }

    /// Walk `(attribute id, data type, value)` records
    fn attribute_records(
        &self,
        cluster: ClusterId,
        cur: &mut Cursor<&[u8]>,
        check: AttrCheck,
        mfr: bool,
    ) -> InspectResult<Vec<String>> {
        let len = cur.get_ref().len();
        let mut res = vec![];

        while position(cur) < len {
            let attr = cur.read_u16::<LE>()?;
            skip_value(cur, attr)?;

            let mut name = self.attr_name(cluster, attr, mfr);

            if let Some(desc) = self.lookup(cluster, attr, mfr) {
                match check {
                    AttrCheck::Write if !desc.access.writable() => name.push_str(" (read-only)"),
                    AttrCheck::Report if !desc.access.reportable() => {
                        name.push_str(" (unreportable)");
                    }
                    _ => {}
                }
            }

            res.push(name);
        }

        Ok(res)
    }

    fn lookup(&self, cluster: ClusterId, attr: u16, mfr: bool) -> Option<&AttributeDescriptor> {
        if mfr {
            None
        } else {
            self.lib.attribute(cluster, attr).ok()
        }
    }

    fn attr_name(&self, cluster: ClusterId, attr: u16, mfr: bool) -> String {
        self.lookup(cluster, attr, mfr)
            .map_or_else(|| format!("{attr:04x}"), |desc| desc.name.to_string())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn position(cur: &Cursor<&[u8]>) -> usize {
    cur.position() as usize
}

/// Read a data type tag and step over the value that follows it
fn skip_value(cur: &mut Cursor<&[u8]>, attr: u16) -> InspectResult<()> {
    let tag = cur.read_u8()?;
    let dtype =
        ZclDataType::from_primitive(tag).ok_or(InspectError::UnknownDataType(tag, attr))?;

    let len = match dtype {
        ZclDataType::OctetStr | ZclDataType::CharStr => usize::from(cur.read_u8()?),
        ZclDataType::LongOctetStr | ZclDataType::LongCharStr => {
            usize::from(cur.read_u16::<LE>()?)
        }
        _ => dtype
            .size()
            .ok_or_else(|| InspectError::UnsupportedValue(dtype.to_display_str(), attr))?,
    };

    let end = position(cur) + len;
    if end > cur.get_ref().len() {
        return Err(InspectError::Truncated("attribute value"));
    }
    cur.set_position(end as u64);

    Ok(())
}

#[cfg(test)]
mod tests {
    use zcl::ClusterLibrary;

    use crate::config::InspectConfig;
    use crate::describe::Inspector;
    use crate::error::InspectError;
    use crate::record::Record;

    fn record(cluster: u16, data: &str) -> Record {
        Record {
            index: 0,
            src: None,
            dst: None,
            cluster,
            data: hex::decode(data).unwrap(),
        }
    }

    fn describe(cluster: u16, data: &str) -> String {
        let lib = ClusterLibrary::new();
        let config = InspectConfig::default();
        let ins = Inspector::new(&lib, &config);

        ins.inspect(&record(cluster, data))
            .unwrap()
            .unwrap()
            .description
            .to_string()
    }

    #[test]
    fn cluster_command() {
        assert_eq!(describe(0x0006, "010201"), "OnOff:On");
        assert_eq!(describe(0x0004, "090300"), "Groups:AddGroupResponse");
    }

    #[test]
    fn read_attributes() {
        /* ReadAttributes OnOff, GlobalSceneControl, 0x1234 */
        assert_eq!(
            describe(0x0006, "000100000000403412"),
            "OnOff:ReadAttributes [OnOff, GlobalSceneControl, 1234]"
        );
    }

    #[test]
    fn read_attributes_response() {
        /* CurrentLevel: success uint8 0xfe, RemainingTime: unsupported (0x86) */
        assert_eq!(
            describe(0x0008, "18020100000020fe010086"),
            "LevelControl:ReadAttributesResponse [CurrentLevel, RemainingTime (status 86)]"
        );
    }

    #[test]
    fn write_read_only() {
        /* WriteAttributes OnTime = 10, OnOff = true */
        assert_eq!(
            describe(0x0006, "0003020140210a0000001001"),
            "OnOff:WriteAttributes [OnTime, OnOff (read-only)]"
        );
    }

    #[test]
    fn report_attributes() {
        /* ReportAttributes ManufacturerName "ab", ZLibraryVersion 3 */
        assert_eq!(
            describe(0x0000, "18040a04004202616200002003"),
            "Basic:ReportAttributes [ManufacturerName (unreportable), ZLibraryVersion (unreportable)]"
        );
        assert_eq!(
            describe(0x0006, "18040a00001001"),
            "OnOff:ReportAttributes [OnOff]"
        );
    }

    #[test]
    fn default_response() {
        assert_eq!(
            describe(0x0006, "18050b0100"),
            "OnOff:DefaultResponse [cmd 01, status 00]"
        );
    }

    #[test]
    fn manufacturer_attributes_keep_raw_ids() {
        /* ReportAttributes, mfcode 0x100b, attribute 0x0000 uint8 3 */
        assert_eq!(
            describe(0x0000, "1c0b10010a00002003"),
            "Basic:ReportAttributes [0000]"
        );

        /* WriteAttributes, mfcode 0x100b, attribute 0x0000 uint8 3 */
        assert_eq!(
            describe(0x0006, "040b10020200002003"),
            "OnOff:WriteAttributes [0000]"
        );

        /* ReadAttributes, mfcode 0x117c, attribute 0x4000 */
        assert_eq!(
            describe(0x0006, "047c11030040"),
            "OnOff:ReadAttributes [4000]"
        );
    }

    #[test]
    fn unknown_cluster_and_command() {
        let desc = describe(0xfc01, "010000");
        assert_eq!(desc, "Cluster(fc01):Unknown");

        /* manufacturer specific scenes command */
        assert_eq!(describe(0x0005, "050b10070002"), "Scenes:Unknown");
    }

    #[test]
    fn suppressed_and_empty() {
        let lib = ClusterLibrary::new();
        let config = InspectConfig {
            suppress: [0x0019].into(),
            ..InspectConfig::default()
        };
        let ins = Inspector::new(&lib, &config);

        assert!(ins.inspect(&record(0x0019, "010101")).unwrap().is_none());
        assert!(ins.inspect(&record(0x0006, "")).unwrap().is_none());
        assert!(ins.inspect(&record(0x0006, "010101")).unwrap().is_some());
    }

    #[test]
    fn payload_is_split_off() {
        let lib = ClusterLibrary::new();
        let config = InspectConfig::default();
        let ins = Inspector::new(&lib, &config);

        let res = ins.inspect(&record(0x0008, "010704ff0a00")).unwrap().unwrap();
        assert_eq!(res.frame.cmd, 0x04);
        assert_eq!(res.payload, [0xff, 0x0a, 0x00]);
        assert_eq!(res.description.command, Some("MoveToLevel/OnOff"));
    }

    #[test]
    fn malformed_values() {
        let lib = ClusterLibrary::new();
        let config = InspectConfig::default();
        let ins = Inspector::new(&lib, &config);

        /* data type 0x01 does not exist */
        let err = ins.inspect(&record(0x0006, "18010a00000101")).unwrap_err();
        assert!(matches!(err, InspectError::UnknownDataType(0x01, 0x0000)));

        /* string claims 5 octets, only 1 present */
        let err = ins.inspect(&record(0x0000, "18010a0400420561")).unwrap_err();
        assert!(matches!(err, InspectError::Truncated(_)));

        /* arrays are not stepped over */
        let err = ins.inspect(&record(0x0012, "18010a0e0048")).unwrap_err();
        assert!(matches!(err, InspectError::UnsupportedValue("Array", 0x000e)));
    }
}
