use placenext_core::Result;
use placenext_rest::CONTENT_TYPE_GEO_JSON;

use crate::{Geometry, GeometryCollection, LocationMeasurement, PointJson, Status, V1};

impl V1 {
    /// Ingest geometries.
    ///
    /// `POST /v1/ingest/geometries`
    pub async fn ingest_geometry(&self, geometries: &[Geometry]) -> Result<Status> {
        self.post_json("/ingest/geometries", None, geometries).await
    }

    /// Ingest a batch of location measurements.
    ///
    /// `POST /v1/location/measurement`
    pub async fn ingest_location_measurement(
        &self,
        measurements: &[LocationMeasurement],
    ) -> Result<Status> {
        self.post_json("/location/measurement", None, measurements)
            .await
    }

    /// Import a GeoJSON geometry collection.
    ///
    /// `POST /v1/placeNextIngest/GeometryImport`, sent as `application/geo+json`.
    pub async fn geometry_import(&self, collection: &GeometryCollection) -> Result<Status> {
        self.post_json(
            "/placeNextIngest/GeometryImport",
            Some(CONTENT_TYPE_GEO_JSON),
            collection,
        )
        .await
    }

    /// Import a batch of points.
    ///
    /// `POST /v1/placeNextIngest/PointImport`
    pub async fn point_import(&self, points: &[PointJson]) -> Result<Status> {
        self.post_json("/placeNextIngest/PointImport", None, points)
            .await
    }
}
