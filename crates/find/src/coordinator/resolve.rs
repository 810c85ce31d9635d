use framefind_frame_tree::FrameTree;
use framefind_primitives::{FrameId, RequestId};

use super::*;

impl<H: FindHost> FindCoordinator<H> {
	/// Called once no frame owes a reply for `request_id`.
	///
	/// Reports the result if it is complete. Otherwise matches exist but none
	/// is active yet, so a find-next is issued to the frame that should hold
	/// the active match and the in-flight request becomes a find-next.
	pub(super) fn resolve_final_result(&mut self, request_id: RequestId, frame: FrameId) {
		let resolved = self.agg.active_ordinal > 0 && !self.pending_active_ordinal;
		if self.agg.total_matches == 0 || resolved || self.pending_find_next_reply.is_some() {
			let final_update = !self.has_pending_initial_replies();
			self.notify(request_id, final_update);
			self.advance_queue(request_id);
			return;
		}

		let Some(mut request) = self.current.clone() else {
			self.notify(request_id, true);
			return;
		};

		let Some(target) = self.active_match_target(request_id, frame) else {
			tracing::debug!(request_id = %request_id, total = self.agg.total_matches, "find.resolve.no_target");
			let final_update = !self.has_pending_initial_replies();
			self.notify(request_id, final_update);
			self.advance_queue(request_id);
			return;
		};

		tracing::debug!(request_id = %request.id, %target, "find.resolve.auto_find_next");
		self.notify(request_id, false);
		request.options.find_next = true;
		self.current = Some(request.clone());
		if !self.send_directive(&request, target) {
			let final_update = !self.has_pending_initial_replies();
			self.notify(request_id, final_update);
			self.advance_queue(request_id);
		}
	}

	/// Picks the frame that should hold the active match.
	///
	/// 1. After a find-next, the next frame with matches after the one that replied.
	/// 2. Otherwise, the next frame with matches after the focused frame.
	/// 3. Otherwise, the first frame with matches in search order.
	fn active_match_target(&self, request_id: RequestId, replied: FrameId) -> Option<FrameId> {
		let current = self.current.as_ref()?;
		let forward = current.options.forward;
		let tree = self.tree();

		if current.id == request_id && current.is_find_next() && tree.contains(replied) {
			return self.traverse(replied, forward, true, true);
		}
		if let Some(focused) = self.host.focused_frame().filter(|f| tree.contains(*f)) {
			return self.traverse(focused, forward, true, true);
		}

		let initial = self.initial_frame(forward)?;
		let has_matches = self.frames.get(&initial).is_some_and(|s| s.match_count > 0);
		if has_matches {
			Some(initial)
		} else {
			self.traverse(initial, forward, true, false)
		}
	}
}
