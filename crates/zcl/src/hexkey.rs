//! Serialize integer-keyed maps with zero-padded hex keys (`"0x0006"`), the
//! way ids are written in the Zigbee documents.

use std::collections::BTreeMap;
use std::fmt::LowerHex;
use std::mem::size_of;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub fn serialize<S, K, V>(map: &BTreeMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    K: LowerHex,
    V: Serialize,
{
    let width = size_of::<K>() * 2;
    let mut res = serializer.serialize_map(Some(map.len()))?;
    for (key, value) in map {
        res.serialize_entry(&format!("0x{key:0width$x}"), value)?;
    }
    res.end()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::Serialize;

    #[derive(Serialize)]
    struct Table {
        #[serde(serialize_with = "crate::hexkey::serialize")]
        narrow: BTreeMap<u8, &'static str>,
        #[serde(serialize_with = "crate::hexkey::serialize")]
        wide: BTreeMap<u16, &'static str>,
    }

    #[test]
    fn padded_to_key_width() {
        let table = Table {
            narrow: BTreeMap::from([(0x0b, "a")]),
            wide: BTreeMap::from([(0x0b, "b"), (0x4000, "c")]),
        };

        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            serde_json::json!({
                "narrow": { "0x0b": "a" },
                "wide": { "0x000b": "b", "0x4000": "c" },
            })
        );
    }
}
