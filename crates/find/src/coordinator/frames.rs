use framefind_frame_tree::{FrameTree, deepest_last_child, traverse_node};
use framefind_primitives::FrameId;

use super::state::FrameMatchState;
use super::*;
use crate::contract::ContractViolation;

impl<H: FindHost> FindCoordinator<H> {
	pub(super) fn on_frame_added(&mut self, frame: FrameId, force: bool) {
		if self.session.is_none() {
			tracing::trace!(%frame, "find.frame.add.no_session");
			return;
		}
		self.add_frame_internal(frame, force);
	}

	/// Tracks `frame` with a zero count and sends it the session's search.
	pub(super) fn add_frame_internal(&mut self, frame: FrameId, force: bool) {
		let (Some(session), Some(current)) = (self.session, self.current.as_ref()) else {
			return;
		};
		let mut request = current.clone();
		request.id = session;
		request.options.find_next = false;
		request.options.force = force;

		if !self.is_live(frame) {
			tracing::trace!(%frame, "find.frame.add.not_live");
			return;
		}

		if let Some(previous) = self.frames.get(&frame).copied() {
			if !force {
				self.contracts.violated(ContractViolation::FrameAlreadyTracked(frame));
				return;
			}
			self.agg.total_matches -= u64::from(previous.match_count);
			if self.pending_find_next_reply == Some(frame) {
				self.pending_find_next_reply = None;
			}
			if self.agg.active_frame == Some(frame) {
				self.agg.clear_active();
			}
		}

		self.frames.insert(frame, FrameMatchState::default());
		self.recompute_active_ordinal();
		tracing::trace!(%frame, force, "find.frame.add");
		self.send_directive(&request, frame);
	}

	pub(super) fn on_frame_removed(&mut self, frame: FrameId) {
		let Some(session) = self.session else {
			return;
		};
		let Some(removed) = self.frames.remove(&frame) else {
			return;
		};

		self.agg.total_matches -= u64::from(removed.match_count);
		if self.agg.active_frame == Some(frame) {
			self.agg.clear_active();
		}
		self.recompute_active_ordinal();
		tracing::debug!(
			%frame,
			lost_matches = removed.match_count,
			total = self.agg.total_matches,
			"find.frame.remove"
		);

		let owed_initial = removed.pending_initial_reply;
		let owed_find_next = self.pending_find_next_reply == Some(frame);

		if !owed_initial && !owed_find_next {
			let final_update = !self.awaiting_replies();
			self.notify(session, final_update);
			return;
		}

		// The removal stands in for the final reply the frame will never send.
		if owed_initial && !self.has_pending_initial_replies() {
			self.resolve_final_result(session, frame);
		}
		if owed_find_next {
			self.pending_find_next_reply = None;
			let request_id = self.current.as_ref().map_or(session, |r| r.id);
			self.resolve_final_result(request_id, frame);
		}
	}

	pub(super) fn on_frame_reloaded(&mut self, frame: FrameId) {
		if self.session.is_none() {
			return;
		}
		tracing::debug!(%frame, "find.frame.reload");
		self.on_frame_removed(frame);
		self.add_frame_internal(frame, true);
	}

	/// First frame in search order: the main frame going forward, the last
	/// frame going backward.
	pub(super) fn initial_frame(&self, forward: bool) -> Option<FrameId> {
		let main = self.tree().main_frame()?;
		Some(if forward { main } else { deepest_last_child(self.tree(), main) })
	}

	/// Walks from `from` in search order to the first tracked frame.
	///
	/// With `matches_only`, frames known to have no matches are skipped;
	/// frames still owing an initial reply are never skipped because they may
	/// yet report matches. With `wrap`, returns `None` once the walk comes back
	/// around to `from` without finding a candidate.
	pub(super) fn traverse(&self, from: FrameId, forward: bool, matches_only: bool, wrap: bool) -> Option<FrameId> {
		let tree = self.tree();
		let mut cursor = from;
		while let Some(node) = traverse_node(tree, cursor, forward, wrap) {
			if let Some(state) = self.frames.get(&node)
				&& (!matches_only || state.match_count > 0 || state.pending_initial_reply)
			{
				return Some(node);
			}
			if wrap && node == from {
				return None;
			}
			cursor = node;
		}
		None
	}

	/// Recomputes the document-wide active ordinal by counting matches in all
	/// frames before the active frame.
	pub(super) fn recompute_active_ordinal(&mut self) {
		self.agg.active_ordinal = 0;
		let Some(active) = self.agg.active_frame else {
			debug_assert_eq!(self.agg.relative_active_ordinal, 0);
			return;
		};
		if self.agg.relative_active_ordinal == 0 {
			return;
		}

		let mut preceding = 0u64;
		let mut cursor = active;
		while let Some(frame) = self.traverse(cursor, false, true, false) {
			preceding += self.frames.get(&frame).map_or(0, |s| u64::from(s.match_count));
			cursor = frame;
		}
		self.agg.active_ordinal = preceding + u64::from(self.agg.relative_active_ordinal);
	}
}
