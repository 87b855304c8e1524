//! Fixed-point geographic locations.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-point units per degree.
pub const COORDINATE_PRECISION: i32 = 10_000_000;

/// Coordinate value marking an unset location.
pub const UNDEFINED_COORDINATE: i32 = i32::MAX;

const MAX_X: i32 = 180 * COORDINATE_PRECISION;
const MAX_Y: i32 = 90 * COORDINATE_PRECISION;

/// A point on the map stored as two fixed-point integers.
///
/// `x` is the longitude and `y` the latitude, both in units of
/// 1 / [`COORDINATE_PRECISION`] degrees. Locations order by `x` first and
/// `y` second, which gives segments a well-defined canonical direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    // Field order defines the derived ordering.
    x: i32,
    y: i32,
}

impl Default for Location {
    fn default() -> Self {
        Self::undefined()
    }
}

impl Location {
    /// Creates a location from fixed-point coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a location from degrees, rounding to the nearest unit.
    #[must_use]
    pub fn from_degrees(lon: f64, lat: f64) -> Self {
        Self {
            x: degrees_to_fixed(lon),
            y: degrees_to_fixed(lat),
        }
    }

    /// Returns a location with both coordinates unset.
    #[must_use]
    pub const fn undefined() -> Self {
        Self {
            x: UNDEFINED_COORDINATE,
            y: UNDEFINED_COORDINATE,
        }
    }

    /// Returns the fixed-point x coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Returns the fixed-point y coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Returns whether both coordinates are set.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        self.x != UNDEFINED_COORDINATE && self.y != UNDEFINED_COORDINATE
    }

    /// Returns whether the location lies within ±180° / ±90°.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.x >= -MAX_X && self.x <= MAX_X && self.y >= -MAX_Y && self.y <= MAX_Y
    }

    /// Returns the longitude in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidLocation`] if the location is not valid.
    pub fn lon(&self) -> CoreResult<f64> {
        self.ensure_valid()?;
        Ok(self.lon_without_check())
    }

    /// Returns the latitude in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidLocation`] if the location is not valid.
    pub fn lat(&self) -> CoreResult<f64> {
        self.ensure_valid()?;
        Ok(self.lat_without_check())
    }

    /// Returns the longitude in degrees without range checking.
    #[must_use]
    pub fn lon_without_check(&self) -> f64 {
        fixed_to_degrees(self.x)
    }

    /// Returns the latitude in degrees without range checking.
    #[must_use]
    pub fn lat_without_check(&self) -> f64 {
        fixed_to_degrees(self.y)
    }

    fn ensure_valid(&self) -> CoreResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CoreError::InvalidLocation {
                x: self.x,
                y: self.y,
            })
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn degrees_to_fixed(degrees: f64) -> i32 {
    (degrees * f64::from(COORDINATE_PRECISION)).round() as i32
}

fn fixed_to_degrees(value: i32) -> f64 {
    f64::from(value) / f64::from(COORDINATE_PRECISION)
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_defined() {
            write!(
                f,
                "({:.7},{:.7})",
                self.lon_without_check(),
                self.lat_without_check()
            )
        } else {
            f.write_str("(undefined,undefined)")
        }
    }
}
