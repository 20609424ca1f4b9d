use std::fmt::Display;
use std::sync::Arc;

/// Number of decimal places used when deriving a [`PositionKey`] (~1.1 m at the equator).
pub const KEY_PRECISION: usize = 5;

/// A device location in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The rounded-position key used to detect meaningful movement.
    pub fn key(&self) -> PositionKey {
        PositionKey::from_coordinates(self.latitude, self.longitude)
    }

    /// Whether this is a real fix rather than the `(0, 0)` placeholder a fresh client starts with.
    pub fn has_fix(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }
}

/// A string key derived from a position rounded to [`KEY_PRECISION`] decimal places on each
/// coordinate, comma-joined (e.g. `12.97100,77.59500`).
///
/// Two positions with the same key are considered the same place for history recording.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PositionKey(Arc<str>);

impl PositionKey {
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        let key = format!("{:.*},{:.*}", KEY_PRECISION, latitude, KEY_PRECISION, longitude);
        Self(key.into())
    }

    /// Returns the underlying string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PositionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Position> for PositionKey {
    fn from(position: Position) -> Self {
        position.key()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Render a coordinate as its absolute value with a hemisphere suffix, e.g. `12.97100° N`.
pub fn format_coordinate(value: f64, axis: Axis) -> String {
    let hemisphere = match (axis, value >= 0.0) {
        (Axis::Latitude, true) => 'N',
        (Axis::Latitude, false) => 'S',
        (Axis::Longitude, true) => 'E',
        (Axis::Longitude, false) => 'W',
    };
    format!("{:.*}° {hemisphere}", KEY_PRECISION, value.abs())
}
