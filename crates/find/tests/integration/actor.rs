use framefind::actor::spawn;
use framefind::{FindConfig, FindReply, FindRequest, RequestId};
use pretty_assertions::assert_eq;

use crate::common::two_frames;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn frames_replying_from_separate_tasks_converge() {
	let config = FindConfig::parse(
		r#"
		[contracts]
		policy = "panic"

		[actor]
		mailbox_capacity = 4
		"#,
	)
	.expect("valid config");
	let (coordinator, a, b) = two_frames();
	let actor = spawn(coordinator, &config);

	actor.send(FindRequest::initial(RequestId(1), "foo")).await.expect("actor running");
	let replies = [
		FindReply::new(a, RequestId(1)).matches(2).final_update(),
		FindReply::new(b, RequestId(1)).matches(1).active(1).final_update(),
	];
	let tasks: Vec<_> = replies
		.into_iter()
		.map(|reply| {
			let sender = actor.sender();
			tokio::spawn(async move { sender.send(reply).await })
		})
		.collect();
	for task in tasks {
		task.await.expect("sender task").expect("actor running");
	}

	let coordinator = actor.shutdown().await.expect("actor task");
	let last = coordinator.host().last_report().copied().expect("at least one report");
	assert_eq!(
		(last.request_id, last.match_count, last.active_ordinal, last.final_update),
		(RequestId(1), 3, 3, true)
	);
	assert_eq!(coordinator.check_invariants(), Ok(()));
}
