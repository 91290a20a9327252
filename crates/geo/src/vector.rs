//! Directed point pairs.

use crate::{haversine_distance_meters, GeoError, Point, Result};

/// A directed pair of borrowed points used to compute a distance.
///
/// Either endpoint may be missing. Validity is only checked when a distance
/// is requested.
#[derive(Debug)]
pub struct Vector<'a, P = ()> {
    start: Option<&'a Point<P>>,
    end: Option<&'a Point<P>>,
}

// Manual impls: the derives would demand `P: Clone`/`P: Default`.
impl<P> Clone for Vector<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Vector<'_, P> {}

impl<P> Default for Vector<'_, P> {
    fn default() -> Self {
        Self { start: None, end: None }
    }
}

impl<'a, P> Vector<'a, P> {
    pub fn new(start: Option<&'a Point<P>>, end: Option<&'a Point<P>>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Option<&'a Point<P>> {
        self.start
    }

    pub fn end(&self) -> Option<&'a Point<P>> {
        self.end
    }

    /// Swaps start and end in place.
    pub fn invert(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }

    /// Returns true if both endpoints are present and valid.
    pub fn is_valid(&self) -> bool {
        self.endpoints().is_some()
    }

    /// Great-circle length in whole meters, independent of direction.
    ///
    /// # Errors
    /// [`GeoError::InvalidVector`] if an endpoint is missing or invalid.
    pub fn distance_meters(&self) -> Result<u64> {
        let (start, end) = self.endpoints().ok_or(GeoError::InvalidVector)?;
        Ok(haversine_distance_meters(&start.coordinate(), &end.coordinate()))
    }

    /// Great-circle length in kilometers, derived from [`Self::distance_meters`].
    pub fn distance_km(&self) -> Result<f64> {
        Ok(self.distance_meters()? as f64 / 1000.0)
    }

    fn endpoints(&self) -> Option<(&'a Point<P>, &'a Point<P>)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start.is_valid() && end.is_valid() => Some((start, end)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn google_hq() -> Point<&'static str> {
        Point::with_payload(37.4203139, -122.0839101, "Google Headquarters")
    }

    fn one_market() -> Point<&'static str> {
        Point::new(37.791574, -122.404912)
    }

    #[test]
    fn test_distance_between_known_points() {
        let (a, b) = (google_hq(), one_market());
        assert_eq!(Vector::new(Some(&a), Some(&b)).distance_meters().unwrap(), 50038);

        let scotia_square = Point::<()>::new(44.6488187, -63.5767536);
        let university_of_zambia = Point::<()>::new(-15.3924928, 28.3186342);
        assert_eq!(
            scotia_square.vector_to(&university_of_zambia).distance_meters().unwrap(),
            11_350_402
        );
    }

    #[test]
    fn test_distance_km() {
        let (a, b) = (google_hq(), one_market());
        let km = a.vector_to(&b).distance_km().unwrap();
        assert!((km - 50.038).abs() < 1e-9);
    }

    #[test]
    fn test_coincident_points() {
        let a = google_hq();
        let b = google_hq();
        assert_eq!(a.vector_to(&b).distance_meters().unwrap(), 0);
        assert_eq!(a.vector_to(&a).distance_meters().unwrap(), 0);
    }

    #[test]
    fn test_missing_endpoints() {
        let a = google_hq();

        let empty: Vector<'_, &str> = Vector::default();
        assert!(!empty.is_valid());
        assert_eq!(empty.distance_meters(), Err(GeoError::InvalidVector));

        let half = Vector::new(Some(&a), None);
        assert!(!half.is_valid());
        assert_eq!(half.distance_meters(), Err(GeoError::InvalidVector));
        assert!(half.distance_km().is_err());
    }

    #[test]
    fn test_invalid_endpoint() {
        let a = google_hq();
        let b = Point::new(37.0, 250.0);
        assert_eq!(a.vector_to(&b).distance_meters(), Err(GeoError::InvalidVector));
        assert_eq!(b.vector_to(&a).distance_meters(), Err(GeoError::InvalidVector));
    }

    #[test]
    fn test_invert_twice_restores_identity() {
        let (a, b) = (google_hq(), one_market());
        let mut vector = a.vector_to(&b);
        let before = vector.distance_meters().unwrap();

        vector.invert();
        assert!(std::ptr::eq(vector.start().unwrap(), &b));
        assert_eq!(vector.distance_meters().unwrap(), before);

        vector.invert();
        assert!(std::ptr::eq(vector.start().unwrap(), &a));
        assert!(std::ptr::eq(vector.end().unwrap(), &b));
    }

    #[test]
    fn test_invert_half_vector() {
        let a = google_hq();
        let mut vector = Vector::new(None, Some(&a));
        vector.invert();
        assert!(vector.end().is_none());
        assert!(std::ptr::eq(vector.start().unwrap(), &a));
    }
}
