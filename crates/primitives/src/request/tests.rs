use super::*;

#[test]
fn initial_request_searches_forward() {
	let req = FindRequest::initial(RequestId(3), "foo");
	assert!(!req.is_find_next());
	assert!(req.options.forward);
	assert!(!req.options.force);
	assert_eq!(req.search_text, "foo");
}

#[test]
fn find_next_request_keeps_direction() {
	let req = FindRequest::find_next(RequestId(4), "foo", false);
	assert!(req.is_find_next());
	assert!(!req.options.forward);
}

#[test]
fn request_ids_order_above_absent_id() {
	assert!(Some(RequestId(0)) > None);
	assert!(RequestId(1) < RequestId(2));
}
