use framefind_primitives::{FindRequest, FrameId, Rect, RequestId, StopFindAction};

/// One progress update from a frame for a find directive.
///
/// Absent fields mean "unchanged". A frame may send several non-final replies
/// before its final one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindReply {
	pub frame: FrameId,
	pub request_id: RequestId,
	/// Replaces the frame's previously reported count.
	pub match_count: Option<u32>,
	pub selection_rect: Option<Rect>,
	/// Position of the active match within this frame, 1-based.
	pub active_ordinal: Option<u32>,
	pub final_update: bool,
}

impl FindReply {
	/// An empty reply for `frame`; fill in fields with the builder methods.
	pub fn new(frame: FrameId, request_id: RequestId) -> Self {
		Self {
			frame,
			request_id,
			match_count: None,
			selection_rect: None,
			active_ordinal: None,
			final_update: false,
		}
	}

	#[must_use]
	pub fn matches(mut self, count: u32) -> Self {
		self.match_count = Some(count);
		self
	}

	#[must_use]
	pub fn rect(mut self, rect: Rect) -> Self {
		self.selection_rect = Some(rect);
		self
	}

	#[must_use]
	pub fn active(mut self, ordinal: u32) -> Self {
		self.active_ordinal = Some(ordinal);
		self
	}

	#[must_use]
	pub fn final_update(mut self) -> Self {
		self.final_update = true;
		self
	}
}

/// Every input the coordinator reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindEvent {
	/// The caller issued a find request.
	Find(FindRequest),
	/// The caller dismissed find.
	Stop(StopFindAction),
	/// A frame reported progress for a directive.
	Reply(FindReply),
	/// A frame should join the current session.
	FrameAdded { frame: FrameId, force: bool },
	/// A frame was destroyed or navigated away.
	FrameRemoved(FrameId),
	/// A frame finished loading a new document.
	FrameReloaded(FrameId),
}

impl From<FindReply> for FindEvent {
	fn from(reply: FindReply) -> Self {
		Self::Reply(reply)
	}
}

impl From<FindRequest> for FindEvent {
	fn from(request: FindRequest) -> Self {
		Self::Find(request)
	}
}
