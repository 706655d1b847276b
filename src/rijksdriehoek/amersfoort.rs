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

//! The amersfoort module contains the reference anchor of the approximation
//! formulas: the position of the Onze Lieve Vrouwetoren in Amersfoort, in both
//! RD and WGS 84 coordinates.
//!
//! Both the forward and inverse series are expansions about this single point,
//! so these constants must be shared by both directions.

use crate::{Degrees, Metres};

/// The RD x coordinate (easting) of the reference point.
pub const X0: Metres = Metres(155_000.0);

/// The RD y coordinate (northing) of the reference point.
pub const Y0: Metres = Metres(463_000.0);

/// The WGS 84 latitude of the reference point.
pub const PHI0: Degrees = Degrees(52.155_17);

/// The WGS 84 longitude of the reference point.
pub const LAMBDA0: Degrees = Degrees(5.387_206);

/// The factor that converts RD offsets in metres to units of 100 km.
pub const RD_SCALE: f64 = 1.0e-5;

/// The factor that converts WGS 84 offsets in degrees to units of
/// 10,000 arc seconds.
pub const WGS84_SCALE: f64 = 0.36;

/// The number of arc seconds in a degree.
pub const ARC_SECONDS_PER_DEGREE: f64 = 3600.0;
