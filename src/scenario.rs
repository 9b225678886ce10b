//! Loading collision checks from JSON scenario descriptions.

use crate::agent::{Agent, AgentAttributes};
use crate::error::Error;
use crate::math::Point2d;
use crate::CollisionChecker;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// An ego agent and the agents surrounding it during one planning cycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// The agent whose planned path is checked.
    pub ego: AgentAttributes,
    /// The surrounding agents and their predicted paths.
    #[serde(default)]
    pub surrounding: Vec<AgentAttributes>,
}

impl Scenario {
    /// Parses a scenario from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a scenario from a reader producing JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads a scenario from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Validates the agents and builds a collision checker.
    pub fn into_checker(self) -> Result<CollisionChecker, Error> {
        let ego = Agent::try_from(self.ego)?;
        let agents = self
            .surrounding
            .into_iter()
            .map(Agent::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CollisionChecker::with_agents(ego, agents))
    }
}

impl Default for Scenario {
    /// A short ego path with two point-sized agents further along the same
    /// diagonal, none of which conflict.
    fn default() -> Self {
        let attributes = |points: [(f64, f64); 2]| AgentAttributes {
            radius: 0.0,
            path: points.iter().map(|&(x, y)| Point2d::new(x, y)).collect(),
        };
        Self {
            ego: attributes([(1.0, 2.0), (2.0, 3.0)]),
            surrounding: vec![
                attributes([(4.0, 5.0), (5.0, 6.0)]),
                attributes([(6.0, 7.0), (7.0, 8.0)]),
            ],
        }
    }
}
