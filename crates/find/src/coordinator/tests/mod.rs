//! Coordinator state machine tests driven through [`RecordingHost`].

use framefind_config::{ContractPolicy, FindConfig};
use framefind_frame_tree::FrameArena;
use framefind_primitives::{FindRequest, FrameId, Rect, RequestId, StopFindAction};

use super::*;
use crate::event::FindReply;
use crate::host::FindReport;
use crate::test_support::{HostCall, RecordingHost};

mod resolve;

type Coordinator = FindCoordinator<RecordingHost>;

fn coordinator(tree: FrameArena) -> Coordinator {
	FindCoordinator::with_config(RecordingHost::new(tree), &FindConfig::with_policy(ContractPolicy::Panic))
}

/// One main frame.
fn single() -> (Coordinator, FrameId) {
	let (tree, main) = FrameArena::with_main_frame();
	(coordinator(tree), main)
}

/// `a` (main) with one child `b`; `a` precedes `b` in document order.
fn pair() -> (Coordinator, FrameId, FrameId) {
	let (mut tree, a) = FrameArena::with_main_frame();
	let b = tree.add_child(a).unwrap();
	(coordinator(tree), a, b)
}

/// `main` with children `a` then `b`.
fn triple() -> (Coordinator, FrameId, FrameId, FrameId) {
	let (mut tree, main) = FrameArena::with_main_frame();
	let a = tree.add_child(main).unwrap();
	let b = tree.add_child(main).unwrap();
	(coordinator(tree), main, a, b)
}

fn reply(frame: FrameId, id: u64) -> FindReply {
	FindReply::new(frame, RequestId(id))
}

fn report(id: u64, matches: u32, active: u32, final_update: bool) -> FindReport {
	FindReport {
		request_id: RequestId(id),
		match_count: matches,
		selection_rect: Rect::EMPTY,
		active_ordinal: active,
		final_update,
	}
}

/// Drains recorded find directives as `(frame, id, find_next)`.
fn take_finds(c: &mut Coordinator) -> Vec<(FrameId, u64, bool)> {
	c.host_mut()
		.take_calls()
		.into_iter()
		.filter_map(|call| match call {
			HostCall::Find { frame, request } => Some((frame, request.id.0, request.options.find_next)),
			_ => None,
		})
		.collect()
}

fn take_reports(c: &mut Coordinator) -> Vec<FindReport> {
	c.host_mut().take_reports()
}

/// Runs an initial find for "foo" and discards the directives it sent.
fn start(c: &mut Coordinator, id: u64) {
	c.find(FindRequest::initial(RequestId(id), "foo"));
	c.host_mut().clear();
}
