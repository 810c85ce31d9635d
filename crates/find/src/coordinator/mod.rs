//! The find session state machine.
//!
//! Goals:
//! - pipeline requests: only the head of the queue is ever in flight
//! - tolerate replies arriving in any cross-frame order
//! - keep the aggregate consistent as frames join, leave and reload mid-session
//! - never report an id lower than one already reported
//!
//! Transitions live in sibling modules: `dispatch` (queue and directives),
//! `reply` (frame replies), `frames` (frame lifecycle and traversal),
//! `resolve` (locating the active match once a request's replies are in).

use std::collections::VecDeque;

use framefind_config::FindConfig;
use framefind_frame_tree::FrameTree;
use framefind_primitives::{FindRequest, FrameId, Rect, RequestId, StopFindAction};
use rustc_hash::FxHashMap;

use crate::contract::Contracts;
use crate::event::{FindEvent, FindReply};
use crate::host::FindHost;

mod dispatch;
mod frames;
mod invariants;
mod reply;
mod resolve;
mod state;

use state::{AggregateState, FrameMatchState};

/// Coordinates find-in-page across every frame of one document.
///
/// One coordinator serves exactly one document. All methods must be called
/// from a single logical context; none of them block or suspend.
pub struct FindCoordinator<H: FindHost> {
	host: H,
	contracts: Contracts,
	/// Id of the request that started the current session.
	session: Option<RequestId>,
	/// The request at the head of the queue, as last dispatched.
	current: Option<FindRequest>,
	queue: VecDeque<FindRequest>,
	frames: FxHashMap<FrameId, FrameMatchState>,
	pending_find_next_reply: Option<FrameId>,
	/// The in-flight request has not located its active match yet.
	pending_active_ordinal: bool,
	agg: AggregateState,
	last_reported_id: Option<RequestId>,
}

impl<H: FindHost> FindCoordinator<H> {
	/// Creates a coordinator with the build-profile default configuration.
	pub fn new(host: H) -> Self {
		Self::with_config(host, &FindConfig::default())
	}

	pub fn with_config(host: H, config: &FindConfig) -> Self {
		Self {
			host,
			contracts: Contracts::new(config.contracts.policy),
			session: None,
			current: None,
			queue: VecDeque::new(),
			frames: FxHashMap::default(),
			pending_find_next_reply: None,
			pending_active_ordinal: false,
			agg: AggregateState::default(),
			last_reported_id: None,
		}
	}

	/// Applies one event to the state machine.
	pub fn handle(&mut self, event: FindEvent) {
		match event {
			FindEvent::Find(request) => self.on_find(request),
			FindEvent::Stop(action) => self.on_stop(action),
			FindEvent::Reply(reply) => self.on_find_reply(reply),
			FindEvent::FrameAdded { frame, force } => self.on_frame_added(frame, force),
			FindEvent::FrameRemoved(frame) => self.on_frame_removed(frame),
			FindEvent::FrameReloaded(frame) => self.on_frame_reloaded(frame),
		}
	}

	/// Queues a find request, dispatching it at once if nothing is in flight.
	///
	/// A request without `find_next` starts a new session and discards every
	/// queued request of the previous one.
	pub fn find(&mut self, request: FindRequest) {
		self.handle(FindEvent::Find(request));
	}

	/// Tells every frame to stop and abandons the session.
	///
	/// Replies still in flight for the abandoned session are ignored.
	pub fn stop_finding(&mut self, action: StopFindAction) {
		self.handle(FindEvent::Stop(action));
	}

	/// Feeds one frame reply into the aggregate.
	pub fn on_reply(&mut self, reply: FindReply) {
		self.handle(FindEvent::Reply(reply));
	}

	/// Drops a destroyed or navigated-away frame from the session.
	pub fn remove_frame(&mut self, frame: FrameId) {
		self.handle(FindEvent::FrameRemoved(frame));
	}

	/// Adds a live frame to the session and sends it the session's search.
	///
	/// `force` must be set when the frame is already part of the session.
	pub fn add_frame(&mut self, frame: FrameId, force: bool) {
		self.handle(FindEvent::FrameAdded { frame, force });
	}

	/// Re-searches a frame that finished loading a new document.
	pub fn frame_reloaded(&mut self, frame: FrameId) {
		self.handle(FindEvent::FrameReloaded(frame));
	}

	/// Id of the request that started the current session.
	pub fn session_id(&self) -> Option<RequestId> {
		self.session
	}

	/// The in-flight request, as last dispatched.
	pub fn current_request(&self) -> Option<&FindRequest> {
		self.current.as_ref()
	}

	/// Matches across every tracked frame, saturated at `u32::MAX`.
	pub fn total_matches(&self) -> u32 {
		self.agg.reported_total()
	}

	pub fn active_frame(&self) -> Option<FrameId> {
		self.agg.active_frame
	}

	pub fn active_ordinal(&self) -> u32 {
		self.agg.reported_ordinal()
	}

	pub fn selection_rect(&self) -> Rect {
		self.agg.selection_rect
	}

	/// Last known match count of `frame`, or `None` if it is not part of the session.
	pub fn match_count(&self, frame: FrameId) -> Option<u32> {
		self.frames.get(&frame).map(|s| s.match_count)
	}

	pub fn is_tracking(&self, frame: FrameId) -> bool {
		self.frames.contains_key(&frame)
	}

	/// Frames that still owe their final reply to the initial sweep.
	pub fn pending_initial_replies(&self) -> impl Iterator<Item = FrameId> + '_ {
		self.frames
			.iter()
			.filter(|(_, s)| s.pending_initial_reply)
			.map(|(f, _)| *f)
	}

	pub fn pending_find_next_reply(&self) -> Option<FrameId> {
		self.pending_find_next_reply
	}

	/// Ids of queued requests, in flight first.
	pub fn queued_requests(&self) -> impl Iterator<Item = RequestId> + '_ {
		self.queue.iter().map(|r| r.id)
	}

	pub fn last_reported_id(&self) -> Option<RequestId> {
		self.last_reported_id
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	/// Mutable host access, e.g. to mutate the frame tree before notifying.
	pub fn host_mut(&mut self) -> &mut H {
		&mut self.host
	}

	pub fn into_host(self) -> H {
		self.host
	}

	fn tree(&self) -> &H::Tree {
		self.host.tree()
	}

	fn has_pending_initial_replies(&self) -> bool {
		self.frames.values().any(|s| s.pending_initial_reply)
	}

	/// Some frame still owes a reply for the current operation.
	fn awaiting_replies(&self) -> bool {
		self.has_pending_initial_replies() || self.pending_find_next_reply.is_some()
	}

	fn is_live(&self, frame: FrameId) -> bool {
		self.tree().is_live(frame)
	}
}

#[cfg(test)]
mod tests;
