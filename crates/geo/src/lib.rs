//! Great-circle distances and reference-relative ordering of geographic points.
//!
//! This crate provides:
//! - Haversine distance calculations in whole meters
//! - [`Point`] and [`Vector`] types with on-demand validation
//! - [`PointList`], a set of points traversed lazily by distance to a reference
//! - Batch processing with optional parallelism
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use greatcircle_geo::{Point, PointList, SortDirection};
//!
//! let google_hq = Arc::new(Point::<()>::new(37.4203139, -122.0839101));
//! let one_market = Arc::new(Point::new(37.791574, -122.404912));
//! let stangenpyramide = Arc::new(Point::new(50.0104469, 8.7194302));
//!
//! let mut list = PointList::new();
//! list.add_point(stangenpyramide.clone())?
//!     .add_point(one_market.clone())?
//!     .sort_by_distance_to(google_hq, SortDirection::Asc)?;
//!
//! let nearest = list.iter().next().unwrap();
//! assert!(Arc::ptr_eq(&nearest, &one_market));
//! # Ok::<(), greatcircle_geo::GeoError>(())
//! ```

mod error;
mod haversine;
mod point;
mod point_list;
mod vector;
pub mod batch;

pub use batch::{calculate_distances, calculate_distances_sorted, calculate_distances_within_radius, DistanceResult};
pub use error::{GeoError, GeoErrorCode, Result};
pub use haversine::{haversine_distance_meters, to_radians, EARTH_RADIUS_M};
pub use point::{Point, MAX_DEGREES};
pub use point_list::{PointList, SortDirection, SortedIter};
pub use vector::Vector;

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees
    /// * `longitude` - Longitude in degrees
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if both axes are finite and within ±[`MAX_DEGREES`].
    ///
    /// Latitude shares the ±180 bound with longitude rather than the
    /// geographic ±90.
    #[inline]
    pub fn is_valid(&self) -> bool {
        is_valid_degree(self.latitude) && is_valid_degree(self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[inline]
fn is_valid_degree(degree: f64) -> bool {
    degree.is_finite() && degree.abs() <= MAX_DEGREES
}
