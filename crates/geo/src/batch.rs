//! Batch distance calculations with optional parallelism.
//!
//! These helpers work on plain slices rather than a [`PointList`](crate::PointList)
//! and apply a skip policy: targets that fail validation are logged and left
//! out of the result instead of failing the whole batch.

use std::cmp::Reverse;
use std::sync::Arc;

use tracing::warn;

use crate::{Point, Result, SortDirection};

/// Distance from the origin of a batch to one target point.
#[derive(Debug)]
pub struct DistanceResult<P = ()> {
    /// The target point
    pub point: Arc<Point<P>>,
    /// Distance in whole meters
    pub distance: u64,
}

impl<P> Clone for DistanceResult<P> {
    fn clone(&self) -> Self {
        Self {
            point: Arc::clone(&self.point),
            distance: self.distance,
        }
    }
}

/// Calculate distances from `from` to every valid point in `points`.
///
/// Results keep the input order. Invalid targets are skipped.
///
/// # Errors
/// [`GeoError::InvalidPoint`](crate::GeoError::InvalidPoint) if `from` is invalid.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use greatcircle_geo::{calculate_distances, Point};
///
/// let google_hq = Point::<()>::new(37.4203139, -122.0839101);
/// let points = vec![
///     Arc::new(Point::new(37.791574, -122.404912)),
///     Arc::new(Point::new(400.0, 0.0)),
/// ];
///
/// let results = calculate_distances(&google_hq, &points)?;
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].distance, 50038);
/// # Ok::<(), greatcircle_geo::GeoError>(())
/// ```
pub fn calculate_distances<P>(from: &Point<P>, points: &[Arc<Point<P>>]) -> Result<Vec<DistanceResult<P>>>
where
    P: Send + Sync,
{
    from.ensure_valid()?;

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        Ok(points
            .par_iter()
            .filter_map(|point| calculate_single_distance(from, point))
            .collect())
    }

    #[cfg(not(feature = "parallel"))]
    {
        Ok(points
            .iter()
            .filter_map(|point| calculate_single_distance(from, point))
            .collect())
    }
}

/// Calculate distances and order them.
///
/// The sort is stable, so equal distances keep their input order.
///
/// # Arguments
/// * `from` - Origin of every distance
/// * `points` - Target points
/// * `direction` - Closest first (`Asc`) or farthest first (`Desc`)
/// * `limit` - Maximum number of results to return (None for all)
pub fn calculate_distances_sorted<P>(
    from: &Point<P>,
    points: &[Arc<Point<P>>],
    direction: SortDirection,
    limit: Option<usize>,
) -> Result<Vec<DistanceResult<P>>>
where
    P: Send + Sync,
{
    let mut results = calculate_distances(from, points)?;

    match direction {
        SortDirection::Asc => results.sort_by_key(|r| r.distance),
        SortDirection::Desc => results.sort_by_key(|r| Reverse(r.distance)),
    }

    if let Some(max) = limit {
        results.truncate(max);
    }

    Ok(results)
}

/// Calculate distances within `radius_m` meters, closest first.
pub fn calculate_distances_within_radius<P>(
    from: &Point<P>,
    points: &[Arc<Point<P>>],
    radius_m: u64,
) -> Result<Vec<DistanceResult<P>>>
where
    P: Send + Sync,
{
    let mut results = calculate_distances(from, points)?;

    results.retain(|r| r.distance <= radius_m);
    results.sort_by_key(|r| r.distance);

    Ok(results)
}

#[inline]
fn calculate_single_distance<P>(from: &Point<P>, point: &Arc<Point<P>>) -> Option<DistanceResult<P>> {
    match from.vector_to(point).distance_meters() {
        Ok(distance) => Some(DistanceResult {
            point: Arc::clone(point),
            distance,
        }),
        Err(err) => {
            warn!(
                latitude = point.latitude(),
                longitude = point.longitude(),
                error = %err,
                "Skipping point"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoError;

    fn origin() -> Point<u32> {
        Point::with_payload(37.4203139, -122.0839101, 0)
    }

    fn create_test_points() -> Vec<Arc<Point<u32>>> {
        vec![
            // University of Zambia
            Arc::new(Point::with_payload(-15.3924928, 28.3186342, 1)),
            // One Market
            Arc::new(Point::with_payload(37.791574, -122.404912, 2)),
            // Out of range
            Arc::new(Point::with_payload(0.0, 270.0, 3)),
            // Scotia Square
            Arc::new(Point::with_payload(44.6488187, -63.5767536, 4)),
        ]
    }

    fn ids(results: &[DistanceResult<u32>]) -> Vec<u32> {
        results.iter().map(|r| *r.point.payload()).collect()
    }

    #[test]
    fn test_batch_distances() {
        let points = create_test_points();
        let results = calculate_distances(&origin(), &points).unwrap();

        assert_eq!(ids(&results), [1, 2, 4]);
        assert_eq!(results[0].distance, 16_212_320);
        assert_eq!(results[1].distance, 50_038);
        assert_eq!(results[2].distance, 4_866_320);
    }

    #[test]
    fn test_invalid_origin() {
        let points = create_test_points();
        let from = Point::with_payload(-200.0, 0.0, 0);
        assert!(matches!(
            calculate_distances(&from, &points),
            Err(GeoError::InvalidPoint { .. })
        ));
    }

    #[test]
    fn test_sorted_distances() {
        let points = create_test_points();

        let asc = calculate_distances_sorted(&origin(), &points, SortDirection::Asc, None).unwrap();
        assert_eq!(ids(&asc), [2, 4, 1]);

        let desc = calculate_distances_sorted(&origin(), &points, SortDirection::Desc, None).unwrap();
        assert_eq!(ids(&desc), [1, 4, 2]);
    }

    #[test]
    fn test_max_results() {
        let points = create_test_points();
        let results = calculate_distances_sorted(&origin(), &points, SortDirection::Asc, Some(2)).unwrap();
        assert_eq!(ids(&results), [2, 4]);
    }

    #[test]
    fn test_sorted_ties_keep_input_order() {
        let from = Point::with_payload(0.0, 0.0, 0);
        let points = vec![
            Arc::new(Point::with_payload(0.0, 1.0, 1)),
            Arc::new(Point::with_payload(0.0, -1.0, 2)),
        ];
        let results = calculate_distances_sorted(&from, &points, SortDirection::Desc, None).unwrap();
        assert_eq!(ids(&results), [1, 2]);
    }

    #[test]
    fn test_radius_filter() {
        let points = create_test_points();
        let results = calculate_distances_within_radius(&origin(), &points, 5_000_000).unwrap();

        assert_eq!(ids(&results), [2, 4]);
        assert!(results.iter().all(|r| r.distance <= 5_000_000));
    }

    #[test]
    fn test_empty_input() {
        let results = calculate_distances(&origin(), &[]).unwrap();
        assert!(results.is_empty());
    }
}
