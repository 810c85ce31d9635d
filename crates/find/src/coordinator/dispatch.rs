use framefind_frame_tree::FrameTree;
use framefind_primitives::{FindRequest, FrameId, RequestId, StopFindAction};

use super::state::AggregateState;
use super::*;
use crate::contract::ContractViolation;
use crate::host::FindReport;

impl<H: FindHost> FindCoordinator<H> {
	pub(super) fn on_find(&mut self, request: FindRequest) {
		let last = self
			.current
			.as_ref()
			.map(|r| r.id)
			.max(self.session)
			.max(self.queue.back().map(|r| r.id));
		if let Some(last) = last
			&& request.id <= last
		{
			self.contracts.violated(ContractViolation::NonIncreasingRequestId { id: request.id, last });
			return;
		}

		if !request.is_find_next() {
			if !self.queue.is_empty() {
				tracing::debug!(dropped = self.queue.len(), "find.queue.discard_previous_session");
			}
			self.queue.clear();
		}

		tracing::trace!(
			request_id = %request.id,
			find_next = request.options.find_next,
			forward = request.options.forward,
			queued = self.queue.len(),
			"find.request.enqueue"
		);
		self.queue.push_back(request);
		if self.queue.len() == 1 {
			self.pump_queue();
		}
	}

	pub(super) fn on_stop(&mut self, action: StopFindAction) {
		self.host.stop_finding(action);
		if self.session.take().is_some() {
			tracing::debug!(?action, "find.session.stop");
		}
		self.queue.clear();
	}

	/// Pops the head of the queue if it is `request_id` and dispatches the next one.
	pub(super) fn advance_queue(&mut self, request_id: RequestId) {
		if self.queue.front().is_none_or(|head| head.id != request_id) {
			return;
		}
		self.queue.pop_front();
		self.pump_queue();
	}

	/// Dispatches the head of the queue.
	///
	/// A head that produces no outstanding directive (no live frames, no
	/// find-next target) completes on the spot and the next head is tried, so
	/// draining a long queue never deepens the call stack.
	fn pump_queue(&mut self) {
		while let Some(request) = self.queue.front().cloned() {
			let id = request.id;
			if self.find_internal(request) {
				return;
			}
			tracing::debug!(request_id = %id, "find.request.nothing_to_wait_for");
			self.notify(id, true);
			self.queue.pop_front();
		}
	}

	/// Starts work on `request`. Returns true if a frame now owes a reply.
	fn find_internal(&mut self, mut request: FindRequest) -> bool {
		if request.is_find_next() {
			match self.find_next_violation(&request) {
				None => return self.dispatch_find_next(request),
				Some(violation) => {
					self.contracts.violated(violation);
					request.options.find_next = false;
				}
			}
		}

		self.reset(&request);
		tracing::debug!(request_id = %request.id, text_len = request.search_text.len(), "find.session.start");
		for frame in self.tree().frames() {
			self.add_frame_internal(frame, false);
		}
		self.awaiting_replies()
	}

	fn find_next_violation(&self, request: &FindRequest) -> Option<ContractViolation> {
		let (Some(_), Some(current)) = (self.session, self.current.as_ref()) else {
			return Some(ContractViolation::FindNextWithoutSession(request.id));
		};
		(current.search_text != request.search_text).then(|| ContractViolation::SearchTextMismatch {
			id: request.id,
			expected: current.search_text.clone(),
			got: request.search_text.clone(),
		})
	}

	/// Sends a find-next to the focused frame, or to the first frame in search
	/// order when nothing tracked has focus.
	fn dispatch_find_next(&mut self, request: FindRequest) -> bool {
		let forward = request.options.forward;
		let target = self
			.host
			.focused_frame()
			.filter(|f| self.frames.contains_key(f))
			.or_else(|| {
				let initial = self.initial_frame(forward)?;
				if self.frames.contains_key(&initial) {
					Some(initial)
				} else {
					self.traverse(initial, forward, false, false)
				}
			});

		self.pending_active_ordinal = true;
		let sent = match target {
			Some(target) => self.send_directive(&request, target),
			None => false,
		};
		self.current = Some(request);
		sent
	}

	fn reset(&mut self, initial: &FindRequest) {
		self.session = Some(initial.id);
		self.current = Some(initial.clone());
		self.frames.clear();
		self.pending_find_next_reply = None;
		self.pending_active_ordinal = true;
		self.agg = AggregateState::default();
	}

	/// Records the owed reply and hands the directive to the host.
	pub(super) fn send_directive(&mut self, request: &FindRequest, frame: FrameId) -> bool {
		let request_id = request.id;
		let Some(state) = self.frames.get_mut(&frame) else {
			self.contracts.violated(ContractViolation::UntrackedDirectiveTarget { frame, request_id });
			return false;
		};
		if !self.host.tree().is_live(frame) {
			self.contracts.violated(ContractViolation::DeadDirectiveTarget { frame, request_id });
			return false;
		}

		if request.is_find_next() {
			self.pending_find_next_reply = Some(frame);
		} else {
			state.pending_initial_reply = true;
		}
		tracing::trace!(%frame, request_id = %request_id, find_next = request.options.find_next, "find.directive.send");
		self.host.send_find(frame, request);
		true
	}

	/// Reports the aggregate to the host under `request_id`, clamped so ids
	/// never go backwards.
	pub(super) fn notify(&mut self, request_id: RequestId, final_update: bool) {
		let request_id = match self.last_reported_id {
			Some(last) if request_id < last => last,
			_ => {
				self.last_reported_id = Some(request_id);
				request_id
			}
		};
		let report = FindReport {
			request_id,
			match_count: self.agg.reported_total(),
			selection_rect: self.agg.selection_rect,
			active_ordinal: self.agg.reported_ordinal(),
			final_update,
		};
		tracing::trace!(
			request_id = %request_id,
			matches = report.match_count,
			active = report.active_ordinal,
			final_update,
			"find.report"
		);
		self.host.report(report);
	}
}
