use crate::util::coord::Coordinate;
use geo_types::{Point, Polygon, Rect, coord};
use serde::{Deserialize, Serialize};

/// The rectangle a decoded Plus Code identifies, in WGS84 degrees.
///
/// South and west bounds are inclusive, north and east bounds exclusive.
///
/// # Example
///
/// ```
/// use pluscode_rs::decode;
///
/// # fn main() -> Result<(), pluscode_rs::PlusCodeError> {
/// let area = decode("6FG22222+22")?;
/// let center = area.center();
/// assert!((center.x() - 0.0000625).abs() < 1e-12);
/// assert!((center.y() - 0.0000625).abs() < 1e-12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CodeArea {
    /// Southern (minimum) latitude
    pub south_latitude: f64,
    /// Western (minimum) longitude
    pub west_longitude: f64,
    /// Northern (maximum) latitude
    pub north_latitude: f64,
    /// Eastern (maximum) longitude
    pub east_longitude: f64,
    /// Number of significant digits the area was decoded from
    pub code_length: u8,
}

impl CodeArea {
    pub fn new(
        south_latitude: f64,
        west_longitude: f64,
        north_latitude: f64,
        east_longitude: f64,
        code_length: u8,
    ) -> Self {
        Self {
            south_latitude,
            west_longitude,
            north_latitude,
            east_longitude,
            code_length,
        }
    }

    pub fn center_latitude(&self) -> f64 {
        (self.south_latitude + self.north_latitude) / 2.0
    }

    pub fn center_longitude(&self) -> f64 {
        (self.west_longitude + self.east_longitude) / 2.0
    }

    /// Center as a `(lng, lat)` point.
    pub fn center(&self) -> Point<f64> {
        Point::new(self.center_longitude(), self.center_latitude())
    }

    pub fn latitude_span(&self) -> f64 {
        self.north_latitude - self.south_latitude
    }

    pub fn longitude_span(&self) -> f64 {
        self.east_longitude - self.west_longitude
    }

    pub fn contains<C: Coordinate>(&self, coord: &C) -> bool {
        (self.south_latitude..self.north_latitude).contains(&coord.y())
            && (self.west_longitude..self.east_longitude).contains(&coord.x())
    }

    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.west_longitude, y: self.south_latitude },
            coord! { x: self.east_longitude, y: self.north_latitude },
        )
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CodeArea {
        CodeArea::new(10.0, 20.0, 10.5, 21.0, 4)
    }

    #[test]
    fn test_centers() {
        let area = sample();
        assert_eq!(area.center_latitude(), 10.25);
        assert_eq!(area.center_longitude(), 20.5);
        assert_eq!(area.center(), Point::new(20.5, 10.25));
    }

    #[test]
    fn test_spans() {
        let area = sample();
        assert_eq!(area.latitude_span(), 0.5);
        assert_eq!(area.longitude_span(), 1.0);
    }

    #[test]
    fn test_contains_is_half_open() {
        let area = sample();
        assert!(area.contains(&(20.0, 10.0)));
        assert!(area.contains(&Point::new(20.9, 10.4)));
        assert!(!area.contains(&(21.0, 10.25)));
        assert!(!area.contains(&(20.5, 10.5)));
    }

    #[test]
    fn test_to_rect_and_polygon() {
        let area = sample();
        let rect = area.to_rect();
        assert_eq!(rect.min(), coord! { x: 20.0, y: 10.0 });
        assert_eq!(rect.max(), coord! { x: 21.0, y: 10.5 });

        let polygon = area.to_polygon();
        assert_eq!(polygon.exterior().coords().count(), 5);
    }

    #[test]
    fn test_serde_field_names() -> Result<(), serde_json::Error> {
        let json = serde_json::to_value(sample())?;
        assert_eq!(json["south_latitude"], 10.0);
        assert_eq!(json["east_longitude"], 21.0);
        assert_eq!(json["code_length"], 4);

        let back: CodeArea = serde_json::from_value(json)?;
        assert_eq!(back, sample());
        Ok(())
    }
}
