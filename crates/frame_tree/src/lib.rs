//! Frame tree access for cross-frame find.
//!
//! The coordinator never owns frames. It sees the document through the
//! [`FrameTree`] trait and resolves every traversal step through it, so a host
//! can back the trait with whatever structure it already keeps.
//!
//! Document order is a pre-order, depth-first walk: a frame is followed by its
//! first child, then its next sibling, then the next sibling of the nearest
//! ancestor that has one. See [`traverse`].

pub mod arena;
pub mod traverse;

pub use arena::{FrameArena, FrameTreeError};
pub use framefind_primitives::FrameId;
pub use traverse::{deepest_last_child, traverse_next, traverse_node, traverse_previous};

/// Read-only view of one document's frame tree.
pub trait FrameTree {
	/// The root frame, if the document has one.
	fn main_frame(&self) -> Option<FrameId>;

	/// Returns true if `frame` is currently part of this tree.
	fn contains(&self, frame: FrameId) -> bool;

	fn parent(&self, frame: FrameId) -> Option<FrameId>;

	fn child_count(&self, frame: FrameId) -> usize;

	/// The `index`-th child of `frame`, in document order.
	fn child_at(&self, frame: FrameId, index: usize) -> Option<FrameId>;

	fn next_sibling(&self, frame: FrameId) -> Option<FrameId>;

	fn previous_sibling(&self, frame: FrameId) -> Option<FrameId>;

	/// Returns true if `frame` has a live renderer that can receive directives.
	fn is_live(&self, frame: FrameId) -> bool;

	/// Every frame of the tree in document order.
	fn frames(&self) -> Vec<FrameId> {
		let mut out = Vec::new();
		let mut cursor = self.main_frame();
		while let Some(frame) = cursor {
			out.push(frame);
			cursor = traverse_next(self, frame, false);
		}
		out
	}
}
