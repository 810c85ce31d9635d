use framefind::test_support::HostCall;
use framefind::{FindEvent, FindReply, FindRequest, FrameArena, RequestId, StopFindAction};
use pretty_assertions::assert_eq;

use crate::common::{coordinator, directives, reports, two_frames};

#[test]
fn single_frame_reports_progress_then_final_result() {
	let (tree, frame) = FrameArena::with_main_frame();
	let mut c = coordinator(tree);

	c.find(FindRequest::initial(RequestId(1), "foo"));
	assert_eq!(directives(&mut c), vec![(frame, RequestId(1), false)]);

	c.on_reply(FindReply::new(frame, RequestId(1)).matches(3).active(0));
	c.on_reply(FindReply::new(frame, RequestId(1)).active(2).final_update());

	assert_eq!(reports(&mut c), vec![(1, 3, 0, false), (1, 3, 2, true)]);
}

#[test]
fn active_ordinal_includes_matches_of_earlier_frames() {
	let (mut c, a, b) = two_frames();
	c.find(FindRequest::initial(RequestId(1), "foo"));

	c.on_reply(FindReply::new(a, RequestId(1)).matches(2).final_update());
	c.on_reply(FindReply::new(b, RequestId(1)).matches(1).active(1).final_update());

	assert_eq!(reports(&mut c), vec![(1, 2, 0, false), (1, 3, 3, true)]);
	assert_eq!(c.active_frame(), Some(b));
}

#[test]
fn find_next_goes_to_the_focused_frame() {
	let (mut c, a, b) = two_frames();
	c.find(FindRequest::initial(RequestId(1), "foo"));
	c.on_reply(FindReply::new(a, RequestId(1)).matches(2).active(1).final_update());
	c.on_reply(FindReply::new(b, RequestId(1)).matches(3).final_update());
	c.host_mut().clear();

	c.host_mut().focused = Some(b);
	c.find(FindRequest::find_next(RequestId(2), "foo", true));
	assert_eq!(directives(&mut c), vec![(b, RequestId(2), true)]);

	c.on_reply(FindReply::new(b, RequestId(2)).active(1).final_update());
	assert_eq!(c.host().calls(), &[HostCall::ClearActiveMatch(a)]);
	assert_eq!(reports(&mut c), vec![(2, 5, 3, true)]);
}

#[test]
fn removing_the_active_frame_relocates_the_active_match() {
	let (mut c, a, b) = two_frames();
	c.find(FindRequest::initial(RequestId(1), "foo"));
	c.on_reply(FindReply::new(a, RequestId(1)).matches(3).final_update());
	c.on_reply(FindReply::new(b, RequestId(1)).matches(2).active(1));
	c.host_mut().clear();

	c.host_mut().tree.remove(b).expect("b is in the tree");
	c.handle(FindEvent::FrameRemoved(b));

	assert_eq!(c.total_matches(), 3);
	assert_eq!(c.active_frame(), None);
	assert_eq!(reports(&mut c), vec![(1, 3, 0, false)]);
	assert_eq!(directives(&mut c), vec![(a, RequestId(1), true)]);

	c.on_reply(FindReply::new(a, RequestId(1)).active(1).final_update());
	assert_eq!(reports(&mut c), vec![(1, 3, 1, true)]);
}

#[test]
fn queued_find_next_is_dispatched_after_the_previous_request() {
	let (tree, frame) = FrameArena::with_main_frame();
	let mut c = coordinator(tree);

	c.find(FindRequest::initial(RequestId(5), "foo"));
	c.find(FindRequest::find_next(RequestId(6), "foo", true));
	assert_eq!(directives(&mut c), vec![(frame, RequestId(5), false)]);

	c.on_reply(FindReply::new(frame, RequestId(5)).matches(4).active(1).final_update());
	assert_eq!(directives(&mut c), vec![(frame, RequestId(6), true)]);

	c.on_reply(FindReply::new(frame, RequestId(6)).active(2).final_update());
	assert_eq!(reports(&mut c), vec![(5, 4, 1, true), (6, 4, 2, true)]);
}

#[test]
fn replies_from_a_stopped_session_are_discarded() {
	let (mut c, a, _) = two_frames();
	c.find(FindRequest::initial(RequestId(1), "foo"));
	c.stop_finding(StopFindAction::ActivateSelection);
	c.find(FindRequest::initial(RequestId(2), "bar"));
	c.host_mut().clear();

	c.on_reply(FindReply::new(a, RequestId(1)).matches(8).active(3).final_update());

	assert!(c.host().reports().is_empty());
	assert_eq!(c.total_matches(), 0);
	assert_eq!(c.match_count(a), Some(0));
	assert_eq!(c.active_frame(), None);
}

#[test]
fn reloaded_frame_is_searched_again_under_the_session_id() {
	let (mut c, a, b) = two_frames();
	c.find(FindRequest::initial(RequestId(1), "foo"));
	c.on_reply(FindReply::new(a, RequestId(1)).matches(1).active(1).final_update());
	c.on_reply(FindReply::new(b, RequestId(1)).matches(2).final_update());
	c.host_mut().clear();

	c.handle(FindEvent::FrameReloaded(b));

	assert_eq!(reports(&mut c), vec![(1, 1, 1, true)]);
	assert_eq!(directives(&mut c), vec![(b, RequestId(1), false)]);

	c.on_reply(FindReply::new(b, RequestId(1)).matches(5).final_update());
	assert_eq!(reports(&mut c), vec![(1, 6, 1, true)]);
}
