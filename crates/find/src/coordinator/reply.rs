use framefind_primitives::{FrameId, RequestId};

use super::state::FinalReplyKind;
use super::*;
use crate::contract::ContractViolation;

impl<H: FindHost> FindCoordinator<H> {
	pub(super) fn on_find_reply(&mut self, reply: FindReply) {
		let FindReply {
			frame,
			request_id,
			match_count,
			selection_rect,
			active_ordinal,
			final_update,
		} = reply;

		let Some(session) = self.session else {
			tracing::trace!(%frame, request_id = %request_id, "find.reply.stale.no_session");
			return;
		};
		if request_id < session {
			tracing::trace!(%frame, request_id = %request_id, session = %session, "find.reply.stale");
			return;
		}
		let Some(state) = self.frames.get_mut(&frame) else {
			self.contracts.violated(ContractViolation::UntrackedFrameReply { frame, request_id });
			return;
		};

		if let Some(count) = match_count
			&& count != state.match_count
		{
			let previous = std::mem::replace(&mut state.match_count, count);
			self.agg.total_matches = self.agg.total_matches - u64::from(previous) + u64::from(count);
			// Matches ahead of the active frame may have shifted.
			if self.agg.active_frame != Some(frame) {
				self.recompute_active_ordinal();
			}
		}

		if let Some(rect) = selection_rect
			&& !rect.is_empty()
		{
			self.agg.selection_rect = rect;
		}

		if let Some(ordinal) = active_ordinal
			&& ordinal > 0
		{
			self.set_active_match(frame, ordinal);
			if self.pending_active_ordinal && self.current.as_ref().is_some_and(|r| r.id == request_id) {
				self.pending_active_ordinal = false;
			}
			self.advance_queue(request_id);
		}

		if !final_update {
			self.notify(request_id, false);
			return;
		}

		match self.classify_final_reply(frame, request_id) {
			FinalReplyKind::Initial => {
				if let Some(state) = self.frames.get_mut(&frame) {
					state.pending_initial_reply = false;
				}
				if self.has_pending_initial_replies() {
					self.notify(request_id, false);
					return;
				}
			}
			FinalReplyKind::FindNext => {
				self.pending_find_next_reply = None;
			}
			FinalReplyKind::Superseded => {
				tracing::trace!(%frame, request_id = %request_id, "find.reply.superseded");
				let final_update = !self.awaiting_replies();
				self.notify(request_id, final_update);
				return;
			}
		}

		self.resolve_final_result(request_id, frame);
	}

	/// Moves the active match to `frame` at `ordinal` within that frame.
	fn set_active_match(&mut self, frame: FrameId, ordinal: u32) {
		if self.agg.active_frame == Some(frame) {
			self.agg.active_ordinal =
				(self.agg.active_ordinal + u64::from(ordinal)).saturating_sub(u64::from(self.agg.relative_active_ordinal));
			self.agg.relative_active_ordinal = ordinal;
			return;
		}

		if let Some(previous) = self.agg.active_frame {
			self.host.clear_active_match(previous);
		}
		tracing::trace!(%frame, ordinal, previous = ?self.agg.active_frame, "find.active.move");
		self.agg.active_frame = Some(frame);
		self.agg.relative_active_ordinal = ordinal;
		self.recompute_active_ordinal();
	}

	/// Attributes a final reply. Per-frame replies are FIFO, so an owed
	/// initial reply always precedes a find-next reply from the same frame;
	/// the in-flight request's `find_next` flag, not its id, identifies
	/// find-next replies because an auto-issued find-next reuses the session id.
	fn classify_final_reply(&self, frame: FrameId, request_id: RequestId) -> FinalReplyKind {
		let owes_initial = self.frames.get(&frame).is_some_and(|s| s.pending_initial_reply);
		if owes_initial && self.session == Some(request_id) {
			return FinalReplyKind::Initial;
		}
		let in_flight_find_next = self
			.current
			.as_ref()
			.is_some_and(|r| r.id == request_id && r.is_find_next());
		if in_flight_find_next && self.pending_find_next_reply == Some(frame) {
			return FinalReplyKind::FindNext;
		}
		FinalReplyKind::Superseded
	}
}
