//! Geographic value types exchanged with the map widget.
//!
//! All types in this module mirror the widget's wire shapes exactly: positions are
//! `[longitude, latitude]` arrays, property names are camelCase, and bounds come either
//! as a NE/SW array pair (region events) or as a `{ne, sw}` object (camera commands).

use serde::{Deserialize, Serialize};

/// A geographic position in degrees, stored as `(longitude, latitude)`.
///
/// Serializes as a two-element array `[lon, lat]`, matching the widget payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct Position(pub f64, pub f64);

impl Position {
    /// Creates a position from longitude and latitude in degrees.
    pub fn lonlat(lon: f64, lat: f64) -> Self {
        Self(lon, lat)
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.0
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.1
    }
}

/// A geographic bounding box given by its north-east and south-west corners.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LatLonBounds {
    /// North-east corner.
    pub ne: Position,
    /// South-west corner.
    pub sw: Position,
}

impl LatLonBounds {
    /// Creates bounds from the north-east and south-west corners.
    pub fn new(ne: Position, sw: Position) -> Self {
        Self { ne, sw }
    }
}

/// Point geometry of a region feature.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PointGeometry {
    /// Center of the visible region as `[lon, lat]`.
    pub coordinates: Position,
}

/// Metadata the widget attaches to a region transition.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionProperties {
    /// Visible corners of the viewport, NE first, then SW.
    pub visible_bounds: (Position, Position),
    /// Current zoom level.
    pub zoom_level: f64,
    /// Compass direction of the camera in degrees.
    pub heading: f64,
    /// Camera tilt in degrees.
    pub pitch: f64,
    /// Whether the transition was caused by a user gesture.
    pub is_user_interaction: bool,
    /// Whether the transition is animated.
    pub animated: bool,
}

/// Description of the viewport region the widget reports on transition events.
///
/// The payload is stored verbatim: the widget guarantees well-formed features, so no
/// validation happens on ingest. A missing geometry is representable and handled by the
/// presenter, not rejected here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RegionFeature {
    /// Center point of the region, if the widget supplied one.
    pub geometry: Option<PointGeometry>,
    /// Transition metadata.
    pub properties: RegionProperties,
}

impl RegionFeature {
    /// Creates a feature centered at the given position.
    pub fn new(center: Position, properties: RegionProperties) -> Self {
        Self {
            geometry: Some(PointGeometry {
                coordinates: center,
            }),
            properties,
        }
    }
}
