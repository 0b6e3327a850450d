//! Captured frames, one JSON object per line.

use serde::{Deserialize, Deserializer};

pub fn u16_hex<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    u16::from_str_radix(s.trim_start_matches("0x"), 16).map_err(serde::de::Error::custom)
}

pub fn u16_hex_opt<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|s| u16::from_str_radix(s.trim_start_matches("0x"), 16))
        .transpose()
        .map_err(serde::de::Error::custom)
}

pub fn vec_hex_opt<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    if let Some(s) = opt {
        hex::decode(s).map_err(serde::de::Error::custom)
    } else {
        Ok(vec![])
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub index: u64,

    #[serde(default, deserialize_with = "u16_hex_opt")]
    pub src: Option<u16>,

    #[serde(default, deserialize_with = "u16_hex_opt")]
    pub dst: Option<u16>,

    #[serde(deserialize_with = "u16_hex")]
    pub cluster: u16,

    #[serde(default, deserialize_with = "vec_hex_opt")]
    pub data: Vec<u8>,
}

impl Record {
    /// Short `[src -> dst]` tag for log lines, empty when addresses are missing
    #[must_use]
    pub fn route(&self) -> String {
        match (self.src, self.dst) {
            (Some(src), Some(dst)) => format!("[{src:04x} -> {dst:04x}] "),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::record::Record;

    #[test]
    fn parse_line() {
        let rec: Record =
            serde_json::from_str(r#"{"index":7,"cluster":"0006","data":"012a01"}"#).unwrap();

        assert_eq!(rec.index, 7);
        assert_eq!(rec.cluster, 0x0006);
        assert_eq!(rec.data, [0x01, 0x2a, 0x01]);
        assert_eq!(rec.src, None);
        assert_eq!(rec.route(), "");
    }

    #[test]
    fn parse_addresses() {
        let rec: Record = serde_json::from_str(
            r#"{"index":1,"src":"0x1a2b","dst":"0000","cluster":"0x0300","data":null}"#,
        )
        .unwrap();

        assert_eq!(rec.cluster, 0x0300);
        assert!(rec.data.is_empty());
        assert_eq!(rec.route(), "[1a2b -> 0000] ");
    }

    #[test]
    fn bad_hex() {
        assert!(serde_json::from_str::<Record>(r#"{"cluster":"zz"}"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"{"cluster":"0006","data":"0"}"#).is_err());
    }
}
