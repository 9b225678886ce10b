use crate::error::Error;
use crate::math::{segment_distance, LineSegment2d};
use cgmath::num_traits::ToPrimitive;
use cgmath::{BaseFloat, Point2};
use itertools::{iproduct, Itertools};
use serde::{Deserialize, Serialize};

/// The attributes of an agent, as supplied by a planner or loaded from a scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentAttributes<S = f64> {
    /// The radius of the agent's footprint in m.
    pub radius: S,
    /// The waypoints of the agent's planned or predicted path.
    #[serde(default)]
    pub path: Vec<Point2<S>>,
}

/// A moving agent: a circular footprint following a piecewise-linear path.
///
/// The ego agent and the agents surrounding it are all represented this way.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent<S = f64> {
    /// The radius of the agent in m.
    radius: S,
    /// Consecutive waypoints; each adjacent pair forms a segment.
    path: Vec<Point2<S>>,
}

/// The first pair of segments found to be closer than the safe distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentConflict<S = f64> {
    /// Index of the segment on the agent performing the check.
    pub own_segment: usize,
    /// Index of the segment on the other agent.
    pub other_segment: usize,
    /// The distance between the two segments.
    pub distance: S,
    /// The sum of both agents' radii.
    pub safe_distance: S,
}

impl<S: BaseFloat> Agent<S> {
    /// Creates a new agent.
    ///
    /// Fails if the radius is negative or not finite, or if any waypoint
    /// has a non-finite coordinate.
    pub fn new(radius: S, path: impl Into<Vec<Point2<S>>>) -> Result<Self, Error> {
        if !(radius.is_finite() && radius >= S::zero()) {
            return Err(Error::InvalidRadius(radius.to_f64().unwrap_or(f64::NAN)));
        }
        let path = path.into();
        if let Some(index) = path
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(Error::NonFiniteWaypoint { index });
        }
        Ok(Self { radius, path })
    }

    /// The agent's radius in m.
    pub fn radius(&self) -> S {
        self.radius
    }

    /// The waypoints of the agent's path.
    pub fn path(&self) -> &[Point2<S>] {
        &self.path
    }

    /// The number of segments in the path; zero for paths with fewer than two points.
    pub fn segment_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Iterates over the segments between consecutive waypoints.
    pub fn segments(&self) -> impl Iterator<Item = LineSegment2d<S>> + Clone + '_ {
        self.path
            .iter()
            .copied()
            .tuple_windows()
            .map(|(a, b)| LineSegment2d::from_ends(a, b))
    }

    /// The minimum separation the two agents' paths must keep.
    pub fn safe_distance(&self, other: &Self) -> S {
        self.radius + other.radius
    }

    /// Scans every pair of segments between the two paths, stopping at the
    /// first pair that is strictly closer than the safe distance.
    pub fn first_conflict_with(&self, other: &Self) -> Option<SegmentConflict<S>> {
        let safe_distance = self.safe_distance(other);
        iproduct!(self.segments().enumerate(), other.segments().enumerate())
            .map(|((i, a), (j, b))| (i, j, segment_distance(&a, &b)))
            .find(|&(_, _, distance)| distance < safe_distance)
            .map(|(own_segment, other_segment, distance)| SegmentConflict {
                own_segment,
                other_segment,
                distance,
                safe_distance,
            })
    }

    /// Computes the smallest distance between any segment of this path and any
    /// segment of the other, or `None` if either path has no segments.
    pub fn min_distance_to(&self, other: &Self) -> Option<S> {
        iproduct!(self.segments(), other.segments())
            .map(|(a, b)| segment_distance(&a, &b))
            .reduce(S::min)
    }
}

impl<S: BaseFloat> TryFrom<AgentAttributes<S>> for Agent<S> {
    type Error = Error;

    fn try_from(attributes: AgentAttributes<S>) -> Result<Self, Self::Error> {
        Self::new(attributes.radius, attributes.path)
    }
}
