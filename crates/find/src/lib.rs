//! Cross-frame find-in-page coordination.
//!
//! A document is a tree of frames, each searched by its own renderer. The
//! [`FindCoordinator`] turns a caller's find requests into per-frame search
//! directives, folds the asynchronous per-frame replies into one document-wide
//! match count and active-match ordinal, and reports consolidated results back
//! to the host. It stays consistent while frames come and go underneath
//! in-flight requests.
//!
//! The coordinator is a synchronous state machine: every input is a
//! [`FindEvent`] and every output goes through the [`FindHost`] it owns. Hosts
//! running on tokio can wrap it in the [`actor`] front-end to serialise events
//! from many tasks.

#[cfg(feature = "actor")]
pub mod actor;
mod contract;
mod coordinator;
mod event;
mod host;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use contract::ContractViolation;
pub use coordinator::FindCoordinator;
pub use event::{FindEvent, FindReply};
pub use framefind_config::{ContractPolicy, FindConfig};
pub use framefind_frame_tree::{FrameArena, FrameTree};
pub use framefind_primitives::{FindOptions, FindRequest, FrameId, Rect, RequestId, StopFindAction};
pub use host::{FindHost, FindReport};
