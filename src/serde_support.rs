//! Human-readable formats (JSON, TOML, ...) carry the 16 character text
//! form; compact binary formats carry the raw 10 bytes.

use std::fmt;

use serde::{de, Deserializer, Serializer};

use crate::uid::Uid;

impl serde::Serialize for Uid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> serde::Deserialize<'de> for Uid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(UidVisitor)
        } else {
            deserializer.deserialize_bytes(UidVisitor)
        }
    }
}

struct UidVisitor;

impl de::Visitor<'_> for UidVisitor {
    type Value = Uid;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a 16 character uid string or 10 uid bytes")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Uid::parse(value).map_err(de::Error::custom)
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
        Uid::from_slice(value).map_err(de::Error::custom)
    }
}
