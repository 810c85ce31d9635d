//! Document-order traversal over any [`FrameTree`].
//!
//! `traverse_next` and `traverse_previous` are exact inverses when `wrap` is
//! off. With `wrap` on, stepping past the last frame lands on the main frame
//! and stepping before the main frame lands on the last frame.

use crate::{FrameId, FrameTree};

/// Returns the last frame in document order within the subtree rooted at `frame`.
pub fn deepest_last_child<T: FrameTree + ?Sized>(tree: &T, frame: FrameId) -> FrameId {
	let mut node = frame;
	loop {
		let count = tree.child_count(node);
		if count == 0 {
			return node;
		}
		match tree.child_at(node, count - 1) {
			Some(child) => node = child,
			None => return node,
		}
	}
}

/// Returns the frame after `frame` in document order.
pub fn traverse_next<T: FrameTree + ?Sized>(tree: &T, frame: FrameId, wrap: bool) -> Option<FrameId> {
	if tree.child_count(frame) > 0
		&& let Some(child) = tree.child_at(frame, 0)
	{
		return Some(child);
	}

	let mut node = frame;
	loop {
		if let Some(sibling) = tree.next_sibling(node) {
			return Some(sibling);
		}
		match tree.parent(node) {
			Some(parent) => node = parent,
			None => return wrap.then_some(node),
		}
	}
}

/// Returns the frame before `frame` in document order.
pub fn traverse_previous<T: FrameTree + ?Sized>(tree: &T, frame: FrameId, wrap: bool) -> Option<FrameId> {
	if let Some(sibling) = tree.previous_sibling(frame) {
		return Some(deepest_last_child(tree, sibling));
	}
	if let Some(parent) = tree.parent(frame) {
		return Some(parent);
	}
	wrap.then(|| deepest_last_child(tree, frame))
}

/// [`traverse_next`] or [`traverse_previous`] depending on `forward`.
pub fn traverse_node<T: FrameTree + ?Sized>(tree: &T, frame: FrameId, forward: bool, wrap: bool) -> Option<FrameId> {
	if forward {
		traverse_next(tree, frame, wrap)
	} else {
		traverse_previous(tree, frame, wrap)
	}
}
