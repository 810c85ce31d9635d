use framefind_frame_tree::FrameTree;
use framefind_primitives::{FindRequest, FrameId, Rect, RequestId, StopFindAction};

/// Consolidated find result delivered to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindReport {
	/// Id the result belongs to. Never lower than an id already reported.
	pub request_id: RequestId,
	/// Matches across every tracked frame.
	pub match_count: u32,
	/// Bounds of the active match, empty when unknown.
	pub selection_rect: Rect,
	/// 1-based document-wide position of the active match, 0 when unknown.
	pub active_ordinal: u32,
	/// No more updates are expected for this request.
	pub final_update: bool,
}

/// Everything the coordinator needs from the document that owns it.
///
/// Directives are fire-and-forget: the host delivers them to the frame and
/// later feeds the frame's replies back as [`crate::FindEvent::Reply`]. Replies
/// from one frame must arrive in the order that frame sent them; replies from
/// different frames may interleave freely.
pub trait FindHost {
	type Tree: FrameTree;

	/// The document's current frame tree.
	fn tree(&self) -> &Self::Tree;

	/// The frame holding input focus, if any.
	fn focused_frame(&self) -> Option<FrameId>;

	/// Asks `frame` to search for `request.search_text`.
	fn send_find(&mut self, frame: FrameId, request: &FindRequest);

	/// Tells `frame` its active match is no longer the document's active match.
	fn clear_active_match(&mut self, frame: FrameId);

	/// Tells every frame of the document to stop finding.
	fn stop_finding(&mut self, action: StopFindAction);

	/// Delivers a consolidated result.
	fn report(&mut self, report: FindReport);
}
