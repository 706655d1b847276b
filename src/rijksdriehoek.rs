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

//! The rijksdriehoek module contains the functions that make up the
//! approximation formulas between RD and WGS 84 coordinates.
//!
//! The forward transform expands the latitude and longitude corrections, in
//! arc seconds, as polynomials of the RD offsets from the reference point in
//! units of 100 km.
//! The inverse transform expands the RD offsets, in metres, as polynomials of
//! the WGS 84 offsets from the reference point in units of 10,000 arc seconds.
//!
//! The formulas are accurate to within about a metre inside the Netherlands.
//! They are polynomials, so they return a value for any input, but the value
//! is meaningless far from the reference point.

#![allow(clippy::suboptimal_flops)]

pub mod amersfoort;
pub mod coefficients;

use crate::{Degrees, Metres};

/// Calculate the normalised offsets of an RD position from the reference point.
/// * `x` - the RD x coordinate.
/// * `y` - the RD y coordinate.
///
/// returns `(dX, dY)` in units of 100 km.
/// # Examples
/// ```
/// use rd_wgs84::Metres;
/// use rd_wgs84::rijksdriehoek::normalise_rd_offsets;
///
/// let (dx, dy) = normalise_rd_offsets(Metres(255_000.0), Metres(363_000.0));
/// assert_eq!(1.0, dx);
/// assert_eq!(-1.0, dy);
/// ```
#[must_use]
pub fn normalise_rd_offsets(x: Metres, y: Metres) -> (f64, f64) {
    (
        (x.0 - amersfoort::X0.0) * amersfoort::RD_SCALE,
        (y.0 - amersfoort::Y0.0) * amersfoort::RD_SCALE,
    )
}

/// Calculate the scaled offsets of a WGS 84 position from the reference point.
/// * `lat` - the WGS 84 latitude.
/// * `lon` - the WGS 84 longitude.
///
/// returns `(dLat, dLon)` in units of 10,000 arc seconds.
#[must_use]
pub fn scale_wgs84_offsets(lat: Degrees, lon: Degrees) -> (f64, f64) {
    (
        amersfoort::WGS84_SCALE * (lat.0 - amersfoort::PHI0.0),
        amersfoort::WGS84_SCALE * (lon.0 - amersfoort::LAMBDA0.0),
    )
}

/// Calculate the latitude correction of the forward transform.
/// * `dx`, `dy` - the normalised RD offsets.
///
/// returns the correction in arc seconds.
#[must_use]
pub fn calculate_sum_n(dx: f64, dy: f64) -> f64 {
    coefficients::evaluate_series(&coefficients::SUM_N, dx, dy)
}

/// Calculate the longitude correction of the forward transform.
/// * `dx`, `dy` - the normalised RD offsets.
///
/// returns the correction in arc seconds.
#[must_use]
pub fn calculate_sum_e(dx: f64, dy: f64) -> f64 {
    coefficients::evaluate_series(&coefficients::SUM_E, dx, dy)
}

/// Calculate the RD x offset of the inverse transform.
/// * `d_lat`, `d_lon` - the scaled WGS 84 offsets.
#[must_use]
pub fn calculate_x_offset(d_lat: f64, d_lon: f64) -> Metres {
    Metres(coefficients::evaluate_series(&coefficients::R, d_lat, d_lon))
}

/// Calculate the RD y offset of the inverse transform.
/// * `d_lat`, `d_lon` - the scaled WGS 84 offsets.
#[must_use]
pub fn calculate_y_offset(d_lat: f64, d_lon: f64) -> Metres {
    Metres(coefficients::evaluate_series(&coefficients::S, d_lat, d_lon))
}

/// Convert an RD position to a WGS 84 latitude and longitude.
/// * `x` - the RD x coordinate.
/// * `y` - the RD y coordinate.
#[must_use]
pub fn calculate_lat_lon(x: Metres, y: Metres) -> (Degrees, Degrees) {
    let (dx, dy) = normalise_rd_offsets(x, y);
    let sum_n = calculate_sum_n(dx, dy);
    let sum_e = calculate_sum_e(dx, dy);
    (
        Degrees(amersfoort::PHI0.0 + sum_n / amersfoort::ARC_SECONDS_PER_DEGREE),
        Degrees(amersfoort::LAMBDA0.0 + sum_e / amersfoort::ARC_SECONDS_PER_DEGREE),
    )
}

/// Convert a WGS 84 latitude and longitude to an RD position.
/// * `lat` - the WGS 84 latitude.
/// * `lon` - the WGS 84 longitude.
#[must_use]
pub fn calculate_x_y(lat: Degrees, lon: Degrees) -> (Metres, Metres) {
    let (d_lat, d_lon) = scale_wgs84_offsets(lat, lon);
    (
        Metres(amersfoort::X0.0 + calculate_x_offset(d_lat, d_lon).0),
        Metres(amersfoort::Y0.0 + calculate_y_offset(d_lat, d_lon).0),
    )
}
