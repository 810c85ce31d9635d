use framefind_primitives::FindOptions;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn sweep_without_active_match_sends_find_next_to_first_matching_frame() {
	let (mut c, main, a, b) = triple();
	start(&mut c, 1);

	c.on_reply(reply(main, 1).matches(0).final_update());
	c.on_reply(reply(a, 1).matches(2).final_update());
	c.on_reply(reply(b, 1).matches(1).final_update());

	assert_eq!(take_finds(&mut c), vec![(a, 1, true)]);
	assert_eq!(c.current_request().map(FindRequest::is_find_next), Some(true));
	assert_eq!(
		take_reports(&mut c),
		vec![report(1, 0, 0, false), report(1, 2, 0, false), report(1, 3, 0, false)]
	);

	c.on_reply(reply(a, 1).active(1).final_update());
	assert_eq!(take_reports(&mut c), vec![report(1, 3, 1, true)]);
	assert_eq!(c.pending_find_next_reply(), None);
	assert_eq!(c.queued_requests().count(), 0);
}

#[test]
fn sweep_without_active_match_prefers_frame_after_focus() {
	let (mut c, main, a, b) = triple();
	c.host_mut().focused = Some(a);
	start(&mut c, 1);

	c.on_reply(reply(main, 1).matches(1).final_update());
	c.on_reply(reply(a, 1).matches(2).final_update());
	c.on_reply(reply(b, 1).matches(3).final_update());

	assert_eq!(take_finds(&mut c), vec![(b, 1, true)]);
}

#[test]
fn focused_frame_is_its_own_successor_when_alone_in_matching() {
	let (mut c, a, b) = pair();
	c.host_mut().focused = Some(a);
	start(&mut c, 1);

	c.on_reply(reply(a, 1).matches(2).final_update());
	c.on_reply(reply(b, 1).matches(0).final_update());

	assert_eq!(take_finds(&mut c), vec![(a, 1, true)]);
}

#[test]
fn backward_sweep_starts_from_last_frame() {
	let (mut c, main, a, b) = triple();
	let options = FindOptions {
		forward: false,
		..FindOptions::default()
	};
	c.find(FindRequest::new(RequestId(1), "foo", options));
	c.host_mut().clear();

	c.on_reply(reply(main, 1).matches(1).final_update());
	c.on_reply(reply(a, 1).matches(1).final_update());
	c.on_reply(reply(b, 1).matches(0).final_update());

	assert_eq!(take_finds(&mut c), vec![(a, 1, true)]);
}

#[test]
fn find_next_reply_without_active_match_moves_to_next_matching_frame() {
	let (mut c, a, b) = pair();
	start(&mut c, 1);
	c.on_reply(reply(a, 1).matches(2).final_update());
	c.on_reply(reply(b, 1).matches(3).final_update());
	assert_eq!(take_finds(&mut c), vec![(a, 1, true)]);
	c.host_mut().clear();

	c.on_reply(reply(a, 1).matches(0).final_update());

	assert_eq!(take_finds(&mut c), vec![(b, 1, true)]);
	assert_eq!(take_reports(&mut c), vec![report(1, 3, 0, false)]);

	c.on_reply(reply(b, 1).active(1).final_update());
	assert_eq!(take_reports(&mut c), vec![report(1, 3, 1, true)]);
}

#[test]
fn active_match_found_mid_sweep_waits_for_remaining_frames() {
	let (mut c, a, b) = pair();
	start(&mut c, 1);

	c.on_reply(reply(a, 1).matches(2).active(1).final_update());
	assert_eq!(c.queued_requests().count(), 0);
	assert_eq!(take_reports(&mut c), vec![report(1, 2, 1, false)]);

	c.on_reply(reply(b, 1).matches(1).final_update());
	assert!(take_finds(&mut c).is_empty());
	assert_eq!(take_reports(&mut c), vec![report(1, 3, 1, true)]);
}
