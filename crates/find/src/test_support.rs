//! In-memory host for exercising the coordinator without a browser.
//!
//! [`RecordingHost`] owns a [`FrameArena`] and records every directive,
//! highlight clear, stop broadcast and report the coordinator emits.

use framefind_frame_tree::FrameArena;
use framefind_primitives::{FindRequest, FrameId, StopFindAction};

use crate::host::{FindHost, FindReport};

/// One outgoing call from the coordinator, other than reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
	Find { frame: FrameId, request: FindRequest },
	ClearActiveMatch(FrameId),
	Stop(StopFindAction),
}

/// Host that records everything and lets tests steer focus and the tree.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
	pub tree: FrameArena,
	pub focused: Option<FrameId>,
	calls: Vec<HostCall>,
	reports: Vec<FindReport>,
}

impl RecordingHost {
	pub fn new(tree: FrameArena) -> Self {
		Self {
			tree,
			..Self::default()
		}
	}

	pub fn calls(&self) -> &[HostCall] {
		&self.calls
	}

	pub fn take_calls(&mut self) -> Vec<HostCall> {
		std::mem::take(&mut self.calls)
	}

	/// Find directives sent so far, as `(frame, request)` pairs.
	pub fn finds(&self) -> Vec<(FrameId, FindRequest)> {
		self.calls
			.iter()
			.filter_map(|c| match c {
				HostCall::Find { frame, request } => Some((*frame, request.clone())),
				_ => None,
			})
			.collect()
	}

	pub fn reports(&self) -> &[FindReport] {
		&self.reports
	}

	pub fn take_reports(&mut self) -> Vec<FindReport> {
		std::mem::take(&mut self.reports)
	}

	pub fn last_report(&self) -> Option<&FindReport> {
		self.reports.last()
	}

	/// Drops recorded calls and reports.
	pub fn clear(&mut self) {
		self.calls.clear();
		self.reports.clear();
	}
}

impl FindHost for RecordingHost {
	type Tree = FrameArena;

	fn tree(&self) -> &FrameArena {
		&self.tree
	}

	fn focused_frame(&self) -> Option<FrameId> {
		self.focused
	}

	fn send_find(&mut self, frame: FrameId, request: &FindRequest) {
		self.calls.push(HostCall::Find {
			frame,
			request: request.clone(),
		});
	}

	fn clear_active_match(&mut self, frame: FrameId) {
		self.calls.push(HostCall::ClearActiveMatch(frame));
	}

	fn stop_finding(&mut self, action: StopFindAction) {
		self.calls.push(HostCall::Stop(action));
	}

	fn report(&mut self, report: FindReport) {
		self.reports.push(report);
	}
}
