pub use agent::{Agent, AgentAttributes, SegmentConflict};
pub use cgmath;
pub use checker::{Collision, CollisionChecker};
#[cfg(feature = "debug")]
pub use debug::take_debug_frame;
pub use error::Error;
pub use scenario::Scenario;
use slotmap::new_key_type;
pub use slotmap::{Key, KeyData};
pub use util::Interval;

mod agent;
mod checker;
mod debug;
mod error;
pub mod math;
mod scenario;
mod util;

new_key_type! {
    /// Unique ID of a surrounding [Agent].
    pub struct AgentId;
}
