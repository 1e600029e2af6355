//! Serialized as the raw `i32` representation so that values round-trip
//! bit-exactly between platforms.

use crate::fixed::Fixed;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<const BITS: u32, P> Serialize for Fixed<BITS, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.repr().serialize(serializer)
    }
}

impl<'de, const BITS: u32, P> Deserialize<'de> for Fixed<BITS, P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(Self::from_repr)
    }
}
