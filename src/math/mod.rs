//! Scalar math used by the fade computation.

mod smoothing;

pub use smoothing::{inverse_lerp, smoothstep01, SmoothDamp};
