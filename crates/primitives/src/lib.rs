//! Value types shared by the frame tree and the find coordinator.

/// Rectangle geometry for selection bounds.
pub mod geometry;
/// Frame and request identifiers.
pub mod ids;
/// Find requests, options and stop actions.
pub mod request;

pub use geometry::Rect;
pub use ids::{FrameId, RequestId};
pub use request::{FindOptions, FindRequest, StopFindAction};
