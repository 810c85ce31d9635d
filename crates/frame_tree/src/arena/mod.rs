//! In-memory [`FrameTree`] for hosts without their own frame structure.
//!
//! Frame ids are handed out from a monotonic counter and are never reused, so
//! a stale [`FrameId`] held by a coordinator can never alias a newer frame.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{FrameId, FrameTree};

/// Errors from mutating a [`FrameArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameTreeError {
	#[error("unknown frame {0}")]
	UnknownFrame(FrameId),
	#[error("document already has main frame {0}")]
	MainFrameExists(FrameId),
	#[error("child index {index} out of bounds for {parent} with {len} children")]
	ChildIndexOutOfBounds { parent: FrameId, index: usize, len: usize },
}

#[derive(Debug, Clone)]
struct FrameNode {
	parent: Option<FrameId>,
	children: SmallVec<[FrameId; 4]>,
	live: bool,
}

impl FrameNode {
	fn new(parent: Option<FrameId>) -> Self {
		Self {
			parent,
			children: SmallVec::new(),
			live: true,
		}
	}
}

/// Owned frame tree keyed by [`FrameId`].
#[derive(Debug, Clone, Default)]
pub struct FrameArena {
	nodes: FxHashMap<FrameId, FrameNode>,
	main: Option<FrameId>,
	next_id: u64,
}

impl FrameArena {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an arena holding only a live main frame.
	pub fn with_main_frame() -> (Self, FrameId) {
		let mut arena = Self::new();
		let main = arena.alloc(None);
		arena.main = Some(main);
		(arena, main)
	}

	/// Installs a main frame into an empty document.
	pub fn add_main_frame(&mut self) -> Result<FrameId, FrameTreeError> {
		if let Some(main) = self.main {
			return Err(FrameTreeError::MainFrameExists(main));
		}
		let main = self.alloc(None);
		self.main = Some(main);
		Ok(main)
	}

	/// Appends a live child as the last child of `parent`.
	pub fn add_child(&mut self, parent: FrameId) -> Result<FrameId, FrameTreeError> {
		let len = self.node(parent)?.children.len();
		self.insert_child(parent, len)
	}

	/// Inserts a live child at position `index` among `parent`'s children.
	pub fn insert_child(&mut self, parent: FrameId, index: usize) -> Result<FrameId, FrameTreeError> {
		let len = self.node(parent)?.children.len();
		if index > len {
			return Err(FrameTreeError::ChildIndexOutOfBounds { parent, index, len });
		}
		let child = self.alloc(Some(parent));
		self.node_mut(parent)?.children.insert(index, child);
		Ok(child)
	}

	/// Detaches `frame` and its whole subtree.
	///
	/// Returns the removed frames in document order, `frame` first.
	pub fn remove(&mut self, frame: FrameId) -> Result<Vec<FrameId>, FrameTreeError> {
		let parent = self.node(frame)?.parent;
		match parent {
			Some(parent) => self.node_mut(parent)?.children.retain(|c| *c != frame),
			None => self.main = None,
		}

		let mut removed = Vec::new();
		let mut stack = vec![frame];
		while let Some(id) = stack.pop() {
			if let Some(node) = self.nodes.remove(&id) {
				removed.push(id);
				stack.extend(node.children.iter().rev().copied());
			}
		}
		Ok(removed)
	}

	/// Marks whether `frame` has a live renderer.
	pub fn set_live(&mut self, frame: FrameId, live: bool) -> Result<(), FrameTreeError> {
		self.node_mut(frame)?.live = live;
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	fn alloc(&mut self, parent: Option<FrameId>) -> FrameId {
		self.next_id += 1;
		let id = FrameId(self.next_id);
		self.nodes.insert(id, FrameNode::new(parent));
		id
	}

	fn node(&self, frame: FrameId) -> Result<&FrameNode, FrameTreeError> {
		self.nodes.get(&frame).ok_or(FrameTreeError::UnknownFrame(frame))
	}

	fn node_mut(&mut self, frame: FrameId) -> Result<&mut FrameNode, FrameTreeError> {
		self.nodes.get_mut(&frame).ok_or(FrameTreeError::UnknownFrame(frame))
	}

	fn sibling(&self, frame: FrameId, offset: isize) -> Option<FrameId> {
		let parent = self.nodes.get(&frame)?.parent?;
		let siblings = &self.nodes.get(&parent)?.children;
		let pos = siblings.iter().position(|c| *c == frame)?;
		let target = pos.checked_add_signed(offset)?;
		siblings.get(target).copied()
	}
}

impl FrameTree for FrameArena {
	fn main_frame(&self) -> Option<FrameId> {
		self.main
	}

	fn contains(&self, frame: FrameId) -> bool {
		self.nodes.contains_key(&frame)
	}

	fn parent(&self, frame: FrameId) -> Option<FrameId> {
		self.nodes.get(&frame)?.parent
	}

	fn child_count(&self, frame: FrameId) -> usize {
		self.nodes.get(&frame).map_or(0, |n| n.children.len())
	}

	fn child_at(&self, frame: FrameId, index: usize) -> Option<FrameId> {
		self.nodes.get(&frame)?.children.get(index).copied()
	}

	fn next_sibling(&self, frame: FrameId) -> Option<FrameId> {
		self.sibling(frame, 1)
	}

	fn previous_sibling(&self, frame: FrameId) -> Option<FrameId> {
		self.sibling(frame, -1)
	}

	fn is_live(&self, frame: FrameId) -> bool {
		self.nodes.get(&frame).is_some_and(|n| n.live)
	}
}
