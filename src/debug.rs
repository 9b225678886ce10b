use crate::math::LineSegment2d;
use cgmath::num_traits::ToPrimitive;
use cgmath::BaseFloat;
#[cfg(feature = "debug")]
use serde_json::json;

#[cfg(feature = "debug")]
thread_local!(
    static DEBUG_FRAME: std::cell::RefCell<Vec<serde_json::Value>> = Default::default();
);

#[allow(unused)]
fn as_f64<S: BaseFloat>(value: S) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[allow(unused)]
pub fn debug_segment<S: BaseFloat>(name: &str, segment: &LineSegment2d<S>) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        let LineSegment2d { start, end } = segment;
        frame.borrow_mut().push(json!({
            "type": "line",
            "name": name,
            "p1": [as_f64(start.x), as_f64(start.y)],
            "p2": [as_f64(end.x), as_f64(end.y)],
        }))
    })
}

#[allow(unused)]
pub fn debug_distance<S: BaseFloat>(name: &str, distance: S, safe_distance: S) {
    #[cfg(feature = "debug")]
    DEBUG_FRAME.with(|frame| {
        frame.borrow_mut().push(json!({
            "type": "distance",
            "name": name,
            "distance": as_f64(distance),
            "safe_distance": as_f64(safe_distance),
        }))
    })
}

/// Takes the debug primitives recorded on this thread since the last call.
#[cfg(feature = "debug")]
pub fn take_debug_frame() -> serde_json::Value {
    json!(DEBUG_FRAME.with(|frame| frame.take()))
}
