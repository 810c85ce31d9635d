use std::fmt;

/// Opaque handle to one frame of a document's frame tree.
///
/// Handles are issued by the frame-tree provider and never reused for a
/// different frame while the tree is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameId(pub u64);

impl fmt::Display for FrameId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "frame#{}", self.0)
	}
}

/// Identifier of one find request.
///
/// The document host generates these; they must strictly increase for the
/// lifetime of a coordinator so that newer requests always compare greater.
/// An absent id (`Option<RequestId>::None`) sorts below every real id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
