//! Invariant catalog for [`crate::FindCoordinator`].
#![allow(dead_code)]

use super::*;

/// `total_matches` must equal the sum of every tracked frame's match count.
///
/// - Enforced in: `on_find_reply`, `on_frame_removed`, `add_frame_internal`
/// - Tested by: `coordinator::tests::properties::prop_total_matches_is_sum_of_frames`
/// - Failure symptom: the match counter drifts after frames reload or leave.
pub(crate) const TOTAL_IS_SUM_OF_FRAMES: () = ();

/// Reports must never carry an id lower than one already reported.
///
/// - Enforced in: `notify`
/// - Tested by: `coordinator::tests::properties::prop_reported_ids_never_decrease`, `coordinator::tests::replies::late_reply_is_reported_under_newest_id`
/// - Failure symptom: the find bar flips back to results of an older request.
pub(crate) const REPORTED_IDS_MONOTONIC: () = ();

/// `active_ordinal` must be 0 without an active frame, and within
/// `1..=total_matches` once the active match is resolved.
///
/// - Enforced in: `recompute_active_ordinal`, `set_active_match`
/// - Tested by: `coordinator::tests::properties::prop_active_ordinal_in_range`
/// - Failure symptom: "7 of 5" style results.
pub(crate) const ACTIVE_ORDINAL_IN_RANGE: () = ();

/// Replies tagged with an id older than the session must not mutate state.
///
/// - Enforced in: `on_find_reply`
/// - Tested by: `coordinator::tests::replies::reply_from_abandoned_session_is_ignored`
/// - Failure symptom: counts from a previous search leak into the new one.
pub(crate) const STALE_SESSION_REPLIES_IGNORED: () = ();

/// Only the head of the request queue may be in flight.
///
/// - Enforced in: `on_find`, `advance_queue`, `pump_queue`
/// - Tested by: `coordinator::tests::queue::find_next_waits_for_in_flight_request`
/// - Failure symptom: two find-next directives race and the active match skips ahead twice.
pub(crate) const SINGLE_REQUEST_IN_FLIGHT: () = ();

impl<H: FindHost> FindCoordinator<H> {
	/// Checks the cheap structural invariants, returning a description of the
	/// first one that does not hold.
	#[cfg(any(test, feature = "test-support"))]
	pub fn check_invariants(&self) -> Result<(), String> {
		let sum: u64 = self.frames.values().map(|s| u64::from(s.match_count)).sum();
		if sum != self.agg.total_matches {
			return Err(format!("total_matches {} != sum of frames {sum}", self.agg.total_matches));
		}

		match self.agg.active_frame {
			None if self.agg.active_ordinal != 0 => {
				return Err(format!("active_ordinal {} without active frame", self.agg.active_ordinal));
			}
			Some(frame) if !self.frames.contains_key(&frame) => {
				return Err(format!("active frame {frame} is not tracked"));
			}
			Some(_) if self.agg.active_ordinal > self.agg.total_matches && !self.has_pending_initial_replies() => {
				return Err(format!(
					"active_ordinal {} exceeds total_matches {}",
					self.agg.active_ordinal, self.agg.total_matches
				));
			}
			_ => {}
		}

		if let Some(frame) = self.pending_find_next_reply
			&& !self.frames.contains_key(&frame)
		{
			return Err(format!("pending find-next reply from untracked {frame}"));
		}

		let ids: Vec<_> = self.queue.iter().map(|r| r.id).collect();
		if ids.windows(2).any(|w| w[0] >= w[1]) {
			return Err(format!("queue ids not strictly increasing: {ids:?}"));
		}
		Ok(())
	}
}
