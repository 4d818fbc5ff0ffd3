use geo_types::{Coord, Point};

/// A WGS84 position given as `x = longitude`, `y = latitude` in degrees.
///
/// Implemented for `(lng, lat)` tuples and the `geo-types` point types so
/// callers can pass whichever they already hold.
pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn longitude(&self) -> f64 {
        self.x()
    }

    fn latitude(&self) -> f64 {
        self.y()
    }
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}
