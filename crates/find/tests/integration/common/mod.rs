//! Shared fixtures for coordinator integration tests.

use framefind::test_support::{HostCall, RecordingHost};
use framefind::{ContractPolicy, FindConfig, FindCoordinator, FindReport, FrameArena, FrameId, RequestId};

pub type Coordinator = FindCoordinator<RecordingHost>;

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Coordinator over `tree` that panics on host misuse.
pub fn coordinator(tree: FrameArena) -> Coordinator {
	init_tracing();
	FindCoordinator::with_config(RecordingHost::new(tree), &FindConfig::with_policy(ContractPolicy::Panic))
}

/// Document with main frame `A` and one child `B`.
pub fn two_frames() -> (Coordinator, FrameId, FrameId) {
	let (mut tree, a) = FrameArena::with_main_frame();
	let b = tree.add_child(a).expect("main frame exists");
	(coordinator(tree), a, b)
}

/// Drains find directives as `(frame, request id, find_next)`.
pub fn directives(c: &mut Coordinator) -> Vec<(FrameId, RequestId, bool)> {
	c.host_mut()
		.take_calls()
		.into_iter()
		.filter_map(|call| match call {
			HostCall::Find { frame, request } => Some((frame, request.id, request.options.find_next)),
			_ => None,
		})
		.collect()
}

/// Drains reports as `(request id, matches, active ordinal, final)`.
pub fn reports(c: &mut Coordinator) -> Vec<(u64, u32, u32, bool)> {
	c.host_mut()
		.take_reports()
		.into_iter()
		.map(|r: FindReport| (r.request_id.0, r.match_count, r.active_ordinal, r.final_update))
		.collect()
}
