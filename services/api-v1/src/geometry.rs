use serde::{Deserialize, Serialize};

/// Geometry is a GeoJSON geometry.
///
/// Only the shapes the PlaceNext API ingests are supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    /// `[longitude, latitude]`
    Point(Vec<f64>),
    /// Rings of `[longitude, latitude]` positions.
    Polygon(Vec<Vec<Vec<f64>>>),
}

impl Geometry {
    /// Create a Point geometry.
    pub fn point(coordinate: impl Into<Vec<f64>>) -> Self {
        Geometry::Point(coordinate.into())
    }

    /// Create a Polygon geometry.
    pub fn polygon(coordinates: Vec<Vec<Vec<f64>>>) -> Self {
        Geometry::Polygon(coordinates)
    }
}

/// GeometryCollection is a GeoJSON geometry collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    #[serde(rename = "type")]
    kind: String,
    pub geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// Create a collection of `geometries`.
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self {
            kind: "GeometryCollection".to_string(),
            geometries,
        }
    }
}

impl FromIterator<Geometry> for GeometryCollection {
    fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
