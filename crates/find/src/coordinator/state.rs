use framefind_primitives::{FrameId, Rect};

/// Per-frame bookkeeping for the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FrameMatchState {
	pub(crate) match_count: u32,
	/// The frame has not sent its final reply to the initial sweep yet, so its
	/// true count is unknown.
	pub(crate) pending_initial_reply: bool,
}

/// Document-wide results, reset per session.
///
/// Document-wide sums are `u64` so that per-frame `u32` counts can never
/// overflow them; they are saturated to `u32` only when reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct AggregateState {
	pub(crate) total_matches: u64,
	pub(crate) active_frame: Option<FrameId>,
	/// Active match position within `active_frame`.
	pub(crate) relative_active_ordinal: u32,
	/// Active match position within the whole document.
	pub(crate) active_ordinal: u64,
	pub(crate) selection_rect: Rect,
}

impl AggregateState {
	pub(crate) fn reported_total(&self) -> u32 {
		saturate(self.total_matches)
	}

	pub(crate) fn reported_ordinal(&self) -> u32 {
		saturate(self.active_ordinal)
	}

	pub(crate) fn clear_active(&mut self) {
		self.active_frame = None;
		self.relative_active_ordinal = 0;
		self.selection_rect = Rect::EMPTY;
	}
}

/// How a final reply is attributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FinalReplyKind {
	/// Last word from the frame on the initial sweep.
	Initial,
	/// Last word from the frame on the in-flight find-next directive.
	FindNext,
	/// Belongs to a request that has already been superseded.
	Superseded,
}

fn saturate(value: u64) -> u32 {
	u32::try_from(value).unwrap_or(u32::MAX)
}
