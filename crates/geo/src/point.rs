//! Geographic points carrying an opaque payload.

use crate::{Coordinate, GeoError, Result, Vector};
use serde::{Deserialize, Serialize};

/// Largest absolute value, in degrees, accepted for either axis.
pub const MAX_DEGREES: f64 = 180.0;

/// A coordinate with an attached payload.
///
/// Construction never validates: out-of-range points can exist and are only
/// rejected by the operations that need a valid point. The payload is opaque
/// and never takes part in validation or distance computation.
///
/// Missing fields deserialize to their defaults, so `{}` is the point `(0, 0)`
/// with a default payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Point<P = ()> {
    #[serde(default)]
    latitude: f64,
    #[serde(default)]
    longitude: f64,
    #[serde(default)]
    payload: P,
}

impl<P: Default> Point<P> {
    /// Creates a point with a default payload.
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self::with_payload(latitude, longitude, P::default())
    }
}

impl<P> Point<P> {
    /// Creates a point carrying `payload`.
    #[inline]
    pub fn with_payload(latitude: f64, longitude: f64, payload: P) -> Self {
        Self { latitude, longitude, payload }
    }

    /// Latitude in degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The attached payload.
    #[inline]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// The bare coordinate of this point.
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Returns true if both axes are finite and within ±180 degrees.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.coordinate().is_valid()
    }

    /// The directed vector from this point to `other`.
    pub fn vector_to<'a>(&'a self, other: &'a Point<P>) -> Vector<'a, P> {
        Vector::new(Some(self), Some(other))
    }

    /// The directed vector from `other` to this point.
    pub fn vector_from<'a>(&'a self, other: &'a Point<P>) -> Vector<'a, P> {
        let mut vector = self.vector_to(other);
        vector.invert();
        vector
    }

    pub(crate) fn ensure_valid(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GeoError::InvalidPoint {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }
}

impl<P: Default> From<Coordinate> for Point<P> {
    fn from(coord: Coordinate) -> Self {
        Self::new(coord.latitude, coord.longitude)
    }
}
