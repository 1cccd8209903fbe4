//! Temperature readout: the `{s1..s9}` object returned by the backend.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::room::{ROOM_COUNT, RoomReading};

/// Raw temperature readout, kept as the JSON object the backend sent.
///
/// Fields are looked up lazily so that one bad value only affects its room.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TemperatureReadout(Map<String, Value>);

impl TemperatureReadout {
    /// Wrap an already-parsed JSON object.
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Payload field feeding the room at `index` (`0` → `s1`).
    #[must_use]
    pub fn field_name(index: usize) -> String {
        format!("s{}", index + 1)
    }

    /// Reading for the room at `index`.
    ///
    /// Anything other than a finite JSON number (missing, `null`, `"null"`,
    /// numeric strings, booleans) is [`RoomReading::Invalid`].
    #[must_use]
    pub fn reading(&self, index: usize) -> RoomReading {
        match self.0.get(&Self::field_name(index)) {
            Some(Value::Number(number)) => number
                .as_f64()
                .map_or(RoomReading::Invalid, RoomReading::from_f64),
            _ => RoomReading::Invalid,
        }
    }

    /// Readings for every room, in room order.
    #[must_use]
    pub fn readings(&self) -> [RoomReading; ROOM_COUNT] {
        std::array::from_fn(|index| self.reading(index))
    }
}
