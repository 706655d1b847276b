// Copyright (c) 2024 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! rd-wgs84
//!
//! A library for converting positions between the Dutch national grid,
//! the *Rijksdriehoeksstelsel* (RD), and
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! latitude and longitude.
//!
//! RD is a planar projection: positions are measured in metres east (`x`)
//! and north (`y`) of a false origin south west of the Netherlands, so that
//! every position in the country has positive coordinates and `x < y`.
//!
//! ## Approximation formulas
//!
//! Rather than projecting through the Bessel 1841 ellipsoid and applying a
//! datum shift, this library uses the approximation formulas of
//! F.H. Schreutelkamp and G.L. Strang van Hees.
//! They express each direction of the conversion as a short polynomial in the
//! offsets from a single reference point, the Onze Lieve Vrouwetoren in
//! Amersfoort:
//!
//! | | RD | WGS 84 |
//! |---|---|---|
//! | reference point | x: 155000 m, y: 463000 m | lat: 52.15517°, lon: 5.387206° |
//!
//! - [`forward`] converts an RD position to a [`GeodeticCoordinate`];
//! - [`inverse`] converts a WGS 84 position to a [`PlanarCoordinate`].
//!
//! Both functions are pure and total: they return a value for every input.
//! The formulas are accurate to within about a metre inside the Netherlands,
//! and a round trip through both of them returns to within a few millimetres
//! of the start point.
//! Outside the Netherlands the values are an extrapolation of the polynomials
//! and are meaningless, however no error is reported.
//!
//! ## Design
//!
//! The coefficients of the formulas are stored as sparse tables of terms in
//! the [`rijksdriehoek::coefficients`] module, and the reference point in the
//! [`rijksdriehoek::amersfoort`] module, so that both directions share them.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees`
//!   and the `Validate` trait;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.

#![cfg_attr(not(test), no_std)]

extern crate alloc;
extern crate angle_sc;
extern crate icao_units;
extern crate unit_sphere;

pub mod rijksdriehoek;

pub use angle_sc::{Degrees, Validate};
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

use alloc::string::{String, ToString};
use core::fmt;

/// A position in the RD planar coordinate system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanarCoordinate {
    /// The easting.
    x: Metres,
    /// The northing.
    y: Metres,
}

impl PlanarCoordinate {
    /// Constructor.
    /// * `x` - the RD x coordinate (easting).
    /// * `y` - the RD y coordinate (northing).
    #[must_use]
    pub const fn new(x: Metres, y: Metres) -> Self {
        Self { x, y }
    }

    /// The RD x coordinate (easting).
    #[must_use]
    pub const fn x(&self) -> Metres {
        self.x
    }

    /// The RD y coordinate (northing).
    #[must_use]
    pub const fn y(&self) -> Metres {
        self.y
    }
}

impl Validate for PlanarCoordinate {
    /// Test whether a `PlanarCoordinate` is valid.
    /// Whether both coordinates are finite.
    fn is_valid(&self) -> bool {
        self.x.0.is_finite() && self.y.0.is_finite()
    }
}

impl fmt::Display for PlanarCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x.0, self.y.0)
    }
}

/// A WGS 84 latitude and longitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodeticCoordinate {
    latitude: Degrees,
    longitude: Degrees,
}

impl GeodeticCoordinate {
    /// Constructor.
    /// * `latitude` - the WGS 84 latitude.
    /// * `longitude` - the WGS 84 longitude.
    #[must_use]
    pub const fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The WGS 84 latitude.
    #[must_use]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// The WGS 84 longitude.
    #[must_use]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }
}

impl Validate for GeodeticCoordinate {
    /// Test whether a `GeodeticCoordinate` is valid.
    /// Whether -90° <= `latitude` <= 90° and -180° <= `longitude` <= 180°.
    fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude.0) && (-180.0..=180.0).contains(&self.longitude.0)
    }
}

/// Formats the latitude and longitude as `"<latitude>, <longitude>"`.
///
/// The values are written in decimal degrees with a `.` decimal separator and
/// without digit grouping, whatever the locale.
impl fmt::Display for GeodeticCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude.0, self.longitude.0)
    }
}

/// Convert an RD position to a WGS 84 latitude and longitude.
/// * `x` - the RD x coordinate (easting) in metres.
/// * `y` - the RD y coordinate (northing) in metres.
///
/// The conversion is only meaningful inside the Netherlands, but any value is
/// accepted.
/// # Examples
/// ```
/// use rd_wgs84::{forward, Degrees};
///
/// // The reference point in Amersfoort
/// let amersfoort = forward(155_000.0, 463_000.0);
/// assert_eq!(Degrees(52.15517), amersfoort.latitude());
/// assert_eq!(Degrees(5.387206), amersfoort.longitude());
/// ```
#[must_use]
pub fn forward(x: f64, y: f64) -> GeodeticCoordinate {
    let (latitude, longitude) = rijksdriehoek::calculate_lat_lon(Metres(x), Metres(y));
    GeodeticCoordinate::new(latitude, longitude)
}

/// Convert a WGS 84 latitude and longitude to an RD position.
/// * `latitude` - the WGS 84 latitude in degrees.
/// * `longitude` - the WGS 84 longitude in degrees.
///
/// The conversion is only meaningful inside the Netherlands, but any value is
/// accepted.
/// # Examples
/// ```
/// use rd_wgs84::{inverse, Metres};
///
/// // The reference point in Amersfoort
/// let amersfoort = inverse(52.15517, 5.387206);
/// assert_eq!(Metres(155_000.0), amersfoort.x());
/// assert_eq!(Metres(463_000.0), amersfoort.y());
/// ```
#[must_use]
pub fn inverse(latitude: f64, longitude: f64) -> PlanarCoordinate {
    let (x, y) = rijksdriehoek::calculate_x_y(Degrees(latitude), Degrees(longitude));
    PlanarCoordinate::new(x, y)
}

/// Convert an RD position to a WGS 84 latitude and longitude string,
/// formatted as `"<latitude>, <longitude>"`.
/// * `x` - the RD x coordinate (easting) in metres.
/// * `y` - the RD y coordinate (northing) in metres.
/// # Examples
/// ```
/// use rd_wgs84::format_lat_long;
///
/// assert_eq!("52.15517, 5.387206", format_lat_long(155_000.0, 463_000.0));
/// ```
#[must_use]
pub fn format_lat_long(x: f64, y: f64) -> String {
    forward(x, y).to_string()
}

impl From<&PlanarCoordinate> for GeodeticCoordinate {
    /// Convert an RD position to WGS 84, see [`forward`].
    fn from(rd: &PlanarCoordinate) -> Self {
        forward(rd.x.0, rd.y.0)
    }
}

impl From<&GeodeticCoordinate> for PlanarCoordinate {
    /// Convert a WGS 84 position to RD, see [`inverse`].
    fn from(wgs84: &GeodeticCoordinate) -> Self {
        inverse(wgs84.latitude.0, wgs84.longitude.0)
    }
}

impl From<&LatLong> for GeodeticCoordinate {
    fn from(a: &LatLong) -> Self {
        Self::new(a.lat(), a.lon())
    }
}

impl From<GeodeticCoordinate> for LatLong {
    fn from(a: GeodeticCoordinate) -> Self {
        Self::new(a.latitude, a.longitude)
    }
}
