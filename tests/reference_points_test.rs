// Copyright (c) 2024-2025 Ken Barker

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

// extern crate we're testing, same as any other code would do.
extern crate rd_wgs84;

use angle_sc::is_within_tolerance;
use rd_wgs84::{forward, inverse, GeodeticCoordinate, LatLong, Metres, PlanarCoordinate, Validate};

const FILENAME: &str = "data/rd_wgs84_reference_points.csv";

/// x, y, latitude, longitude
type DataRecord = (f64, f64, f64, f64);

/// The maximum difference between a calculated and a reference latitude or
/// longitude, in degrees.
const MAX_DELTA_DEGREES: f64 = 1e-9;

/// The maximum distance of a round trip from its start point, in metres.
const MAX_ROUND_TRIP_METRES: f64 = 0.01;

#[test]
fn test_reference_points() -> Result<(), Box<dyn std::error::Error>> {
    let mut rdr = csv::Reader::from_path(FILENAME)?;
    println!("index,delta_lat,delta_lon,delta_x_m,delta_y_m");

    let mut count = 0;
    for (index, result) in rdr.deserialize::<DataRecord>().enumerate() {
        let (x, y, lat, lon) = result?;

        let wgs84 = forward(x, y);
        assert!(wgs84.is_valid());

        let delta_lat = (lat - wgs84.latitude().0).abs();
        let delta_lon = (lon - wgs84.longitude().0).abs();
        assert!(
            delta_lat <= MAX_DELTA_DEGREES,
            "latitude, line: {index} delta: {delta_lat}"
        );
        assert!(
            delta_lon <= MAX_DELTA_DEGREES,
            "longitude, line: {index} delta: {delta_lon}"
        );

        let rd = inverse(lat, lon);
        let delta_x_m = (x - rd.x().0).abs();
        let delta_y_m = (y - rd.y().0).abs();
        assert!(
            delta_x_m <= MAX_ROUND_TRIP_METRES,
            "x, line: {index} delta: {delta_x_m}"
        );
        assert!(
            delta_y_m <= MAX_ROUND_TRIP_METRES,
            "y, line: {index} delta: {delta_y_m}"
        );

        println!("{index},{delta_lat},{delta_lon},{delta_x_m},{delta_y_m}");
        count += 1;
    }
    assert_eq!(15, count);

    Ok(())
}

#[test]
fn test_conversions_through_lat_long() {
    // Rotterdam, via a unit_sphere LatLong
    let rd = PlanarCoordinate::new(Metres(92_565.0), Metres(437_877.0));
    let lat_long = LatLong::from(GeodeticCoordinate::from(&rd));
    assert!(is_within_tolerance(51.925_858_614_600_244, lat_long.lat().0, 1e-9));
    assert!(is_within_tolerance(4.479_512_527_052_843, lat_long.lon().0, 1e-9));

    let result = PlanarCoordinate::from(&GeodeticCoordinate::from(&lat_long));
    assert!(is_within_tolerance(92_565.0, result.x().0, 0.01));
    assert!(is_within_tolerance(437_877.0, result.y().0, 0.01));
}
