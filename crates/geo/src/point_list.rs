//! A mutable set of points traversed lazily by distance to a reference point.
//!
//! [`PointList`] never keeps its members sorted. Every traversal works on a
//! throwaway copy and repeatedly removes the closest (or farthest) remaining
//! point, so the order always reflects the current membership and the
//! current reference. This is a linear scan per step and is meant for small
//! sets.
//!
//! Membership is by identity: members are shared [`Arc`]s compared with
//! [`Arc::ptr_eq`], so two points with equal coordinates are distinct members.
//! Ties on distance go to the member inserted first.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{GeoError, Point, Result};

/// Order of a traversal relative to the reference point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Closest first
    #[default]
    Asc,
    /// Farthest first
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(GeoError::InvalidSortDirection(other.to_string())),
        }
    }
}

impl TryFrom<&str> for SortDirection {
    type Error = GeoError;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

/// A set of unique points with an optional sort configuration.
#[derive(Debug)]
pub struct PointList<P = ()> {
    points: Vec<Arc<Point<P>>>,
    reference: Option<Arc<Point<P>>>,
    direction: SortDirection,
}

impl<P> Default for PointList<P> {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            reference: None,
            direction: SortDirection::Asc,
        }
    }
}

/// Shares the member points; the membership itself is independent.
impl<P> Clone for PointList<P> {
    fn clone(&self) -> Self {
        Self {
            points: self.points.clone(),
            reference: self.reference.clone(),
            direction: self.direction,
        }
    }
}

impl<P> PointList<P> {
    /// Creates an empty list sorted ascending with no reference point.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from `points`, failing on the first invalid one.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arc<Point<P>>>,
    {
        let mut list = Self::new();
        for point in points {
            list.add_point(point)?;
        }
        Ok(list)
    }

    /// Adds `point` unless it is already a member.
    ///
    /// # Errors
    /// [`GeoError::InvalidPoint`] if the point is invalid; the list is unchanged.
    pub fn add_point(&mut self, point: Arc<Point<P>>) -> Result<&mut Self> {
        point.ensure_valid()?;

        if !self.contains(&point) {
            debug!(
                latitude = point.latitude(),
                longitude = point.longitude(),
                count = self.points.len() + 1,
                "Point added"
            );
            self.points.push(point);
        }

        Ok(self)
    }

    /// Removes `point` if it is a member; otherwise does nothing.
    pub fn remove_point(&mut self, point: &Arc<Point<P>>) -> &mut Self {
        if let Some(index) = self.position(point) {
            self.points.remove(index);
            debug!(count = self.points.len(), "Point removed");
        }
        self
    }

    /// Returns true if this exact point (not merely its coordinates) is a member.
    pub fn contains(&self, point: &Arc<Point<P>>) -> bool {
        self.position(point).is_some()
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn reference_point(&self) -> Option<&Arc<Point<P>>> {
        self.reference.as_ref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Configures future traversals to order members by distance to `reference`.
    ///
    /// Passing `None` as the reference restores insertion order. Storage is
    /// not reordered. `direction` accepts a [`SortDirection`] or its string
    /// form (`"asc"` / `"desc"`).
    ///
    /// # Errors
    /// - [`GeoError::InvalidSortDirection`] for any other direction string
    /// - [`GeoError::InvalidPoint`] if the reference point is invalid
    ///
    /// On error the previous configuration is kept.
    pub fn sort_by_distance_to<R, D>(&mut self, reference: R, direction: D) -> Result<&mut Self>
    where
        R: Into<Option<Arc<Point<P>>>>,
        D: TryInto<SortDirection>,
        GeoError: From<D::Error>,
    {
        let direction = direction.try_into()?;
        let reference = reference.into();
        if let Some(point) = &reference {
            point.ensure_valid()?;
        }

        debug!(
            reference = ?reference.as_ref().map(|p| (p.latitude(), p.longitude())),
            direction = %direction,
            "Sort configuration changed"
        );
        self.reference = reference;
        self.direction = direction;
        Ok(self)
    }

    /// The member closest to `target`; the first inserted wins ties.
    ///
    /// Returns `Ok(None)` for an empty list.
    ///
    /// # Errors
    /// [`GeoError::InvalidPoint`] if `target` is invalid.
    pub fn get_closest_point_to(&self, target: &Point<P>) -> Result<Option<Arc<Point<P>>>> {
        Ok(self
            .extremal_position(target, SortDirection::Asc)?
            .map(|index| Arc::clone(&self.points[index])))
    }

    /// The member farthest from `target`; the first inserted wins ties.
    ///
    /// Returns `Ok(None)` for an empty list.
    ///
    /// # Errors
    /// [`GeoError::InvalidPoint`] if `target` is invalid.
    pub fn get_farthest_point_from(&self, target: &Point<P>) -> Result<Option<Arc<Point<P>>>> {
        Ok(self
            .extremal_position(target, SortDirection::Desc)?
            .map(|index| Arc::clone(&self.points[index])))
    }

    /// Removes and returns the next point of the current ordering from this list.
    ///
    /// Without a reference point this is the earliest inserted member.
    /// Returns `None` when the list is empty.
    pub fn pop(&mut self) -> Option<Arc<Point<P>>> {
        let index = match &self.reference {
            None if self.points.is_empty() => return None,
            None => 0,
            // The reference was validated when it was configured.
            Some(reference) => self.extremal_position(reference, self.direction).ok()??,
        };

        let point = self.points.remove(index);
        trace!(
            latitude = point.latitude(),
            longitude = point.longitude(),
            remaining = self.points.len(),
            "Point popped"
        );
        Some(point)
    }

    /// Lazily traverses a snapshot of the members in the current ordering.
    ///
    /// Later changes to this list do not affect a traversal in progress, and
    /// every call starts over from the full membership.
    pub fn iter(&self) -> SortedIter<P> {
        SortedIter { remaining: self.clone() }
    }

    /// One full traversal, collected.
    pub fn to_vec(&self) -> Vec<Arc<Point<P>>> {
        self.iter().collect()
    }

    /// The first `limit` points of a traversal.
    pub fn take(&self, limit: usize) -> Vec<Arc<Point<P>>> {
        self.iter().take(limit).collect()
    }

    fn position(&self, point: &Arc<Point<P>>) -> Option<usize> {
        self.points.iter().position(|member| Arc::ptr_eq(member, point))
    }

    fn extremal_position(&self, target: &Point<P>, direction: SortDirection) -> Result<Option<usize>> {
        target.ensure_valid()?;

        let mut best: Option<(usize, u64)> = None;
        for (index, member) in self.points.iter().enumerate() {
            let distance = member.vector_to(target).distance_meters()?;
            let better = match (best, direction) {
                (None, _) => true,
                (Some((_, current)), SortDirection::Asc) => distance < current,
                (Some((_, current)), SortDirection::Desc) => distance > current,
            };
            if better {
                best = Some((index, distance));
            }
        }

        Ok(best.map(|(index, _)| index))
    }
}

/// Lazy traversal over a snapshot of a [`PointList`].
///
/// Each step pops the next extremal point from the snapshot.
#[derive(Debug)]
pub struct SortedIter<P = ()> {
    remaining: PointList<P>,
}

impl<P> Iterator for SortedIter<P> {
    type Item = Arc<Point<P>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.count();
        (len, Some(len))
    }
}

impl<P> ExactSizeIterator for SortedIter<P> {}

impl<P> FusedIterator for SortedIter<P> {}

impl<'a, P> IntoIterator for &'a PointList<P> {
    type Item = Arc<Point<P>>;
    type IntoIter = SortedIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Drains the list in its current ordering.
impl<P> IntoIterator for PointList<P> {
    type Item = Arc<Point<P>>;
    type IntoIter = SortedIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        SortedIter { remaining: self }
    }
}
