use crate::agent::Agent;
#[cfg(feature = "debug")]
use crate::debug::{debug_distance, debug_segment};
use crate::error::Error;
use crate::AgentId;
use cgmath::{BaseFloat, Point2};
use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use slotmap::SlotMap;

/// A conflict between the ego agent and one of the surrounding agents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Collision<S = f64> {
    /// The surrounding agent whose path comes too close.
    pub agent: AgentId,
    /// Index of the offending segment on the ego path.
    pub ego_segment: usize,
    /// Index of the offending segment on the other agent's path.
    pub other_segment: usize,
    /// The distance between the two segments.
    pub distance: S,
    /// The sum of the two agents' radii.
    pub safe_distance: S,
}

/// Checks the planned path of an ego agent against the predicted paths of
/// the agents surrounding it.
///
/// The check is purely spatial: two paths conflict if any segment of one
/// comes closer than the agents' combined radii to any segment of the other,
/// regardless of when each agent would reach that segment.
#[derive(Clone, Debug)]
pub struct CollisionChecker<S = f64> {
    /// The agent whose path is being checked.
    ego: Agent<S>,
    /// The surrounding agents.
    agents: SlotMap<AgentId, Agent<S>>,
}

impl<S: BaseFloat> CollisionChecker<S> {
    /// Creates a checker with no surrounding agents.
    pub fn new(ego: Agent<S>) -> Self {
        Self {
            ego,
            agents: SlotMap::with_key(),
        }
    }

    /// Creates a checker from an ego agent and its surrounding agents.
    pub fn with_agents(ego: Agent<S>, agents: impl IntoIterator<Item = Agent<S>>) -> Self {
        let mut checker = Self::new(ego);
        for agent in agents {
            checker.add_agent(agent);
        }
        checker
    }

    /// Creates a checker from raw radii and paths.
    ///
    /// # Parameters
    /// * `ego_radius` - The radius of the ego agent in m
    /// * `ego_path` - The planned path of the ego agent
    /// * `others` - The radius and predicted path of each surrounding agent
    pub fn from_parts(
        ego_radius: S,
        ego_path: impl Into<Vec<Point2<S>>>,
        others: impl IntoIterator<Item = (S, Vec<Point2<S>>)>,
    ) -> Result<Self, Error> {
        let ego = Agent::new(ego_radius, ego_path)?;
        let agents = others
            .into_iter()
            .map(|(radius, path)| Agent::new(radius, path))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_agents(ego, agents))
    }

    /// Adds a surrounding agent.
    pub fn add_agent(&mut self, agent: Agent<S>) -> AgentId {
        self.agents.insert(agent)
    }

    /// Gets the ego agent.
    pub fn ego(&self) -> &Agent<S> {
        &self.ego
    }

    /// Gets a surrounding agent.
    pub fn get_agent(&self, id: AgentId) -> Option<&Agent<S>> {
        self.agents.get(id)
    }

    /// Iterates over the surrounding agents.
    pub fn iter_agents(&self) -> impl Iterator<Item = (AgentId, &Agent<S>)> {
        self.agents.iter()
    }

    /// Returns true if the ego path comes within an unsafe distance of any
    /// surrounding agent's path.
    pub fn check_collision(&self) -> bool {
        self.find_collision().is_some()
    }

    /// Finds the first surrounding agent whose path conflicts with the ego path.
    pub fn find_collision(&self) -> Option<Collision<S>> {
        let collision = self
            .agents
            .iter()
            .find_map(|(id, agent)| self.collision_with(id, agent));
        #[cfg(feature = "debug")]
        self.record_collision(collision.as_ref());
        collision
    }

    /// Computes the smallest distance between the ego path and the path of
    /// the given agent. Returns `None` if the agent doesn't exist or either
    /// path has no segments.
    pub fn min_distance(&self, id: AgentId) -> Option<S> {
        self.ego.min_distance_to(self.agents.get(id)?)
    }

    fn collision_with(&self, id: AgentId, agent: &Agent<S>) -> Option<Collision<S>> {
        if agent.segment_count() == 0 || self.ego.segment_count() == 0 {
            trace!("skipping agent {:?}: a path has no segments", id);
            return None;
        }
        let conflict = self.ego.first_conflict_with(agent)?;
        debug!(
            "collision with agent {:?}: segments ({}, {}) are {:?} apart, safe distance is {:?}",
            id, conflict.own_segment, conflict.other_segment, conflict.distance, conflict.safe_distance
        );
        Some(Collision {
            agent: id,
            ego_segment: conflict.own_segment,
            other_segment: conflict.other_segment,
            distance: conflict.distance,
            safe_distance: conflict.safe_distance,
        })
    }

    #[cfg(feature = "debug")]
    fn record_collision(&self, collision: Option<&Collision<S>>) {
        let Some(collision) = collision else { return };
        if let Some(segment) = self.ego.segments().nth(collision.ego_segment) {
            debug_segment("ego", &segment);
        }
        let agent = self.agents.get(collision.agent);
        if let Some(segment) = agent.and_then(|a| a.segments().nth(collision.other_segment)) {
            debug_segment("agent", &segment);
        }
        debug_distance("conflict", collision.distance, collision.safe_distance);
    }
}

#[cfg(feature = "parallel")]
impl<S: BaseFloat + Send + Sync> CollisionChecker<S> {
    /// Same as [CollisionChecker::check_collision], but checks the
    /// surrounding agents in parallel.
    pub fn check_collision_par(&self) -> bool {
        self.find_collision_par().is_some()
    }

    /// Same as [CollisionChecker::find_collision], but checks the surrounding
    /// agents in parallel. If several agents conflict, any one of them may be returned.
    pub fn find_collision_par(&self) -> Option<Collision<S>> {
        let agents = self.agents.iter().collect::<Vec<_>>();
        let collision = agents
            .into_par_iter()
            .find_map_any(|(id, agent)| self.collision_with(id, agent));
        #[cfg(feature = "debug")]
        self.record_collision(collision.as_ref());
        collision
    }
}
