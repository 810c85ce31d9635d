//! Async front-end that serialises events onto one coordinator task.
//!
//! The coordinator itself never suspends. Hosts whose frames reply from many
//! tasks move it into [`spawn`], which drains a bounded mailbox one event at a
//! time; every transition therefore runs on a single logical context.

use framefind_config::FindConfig;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::coordinator::FindCoordinator;
use crate::event::FindEvent;
use crate::host::FindHost;

/// Mailbox send error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActorSendError {
	/// The actor has shut down.
	#[error("find actor is closed")]
	Closed,
	/// The mailbox is full and a non-blocking send was used.
	#[error("find actor mailbox is full")]
	Full,
}

impl<T> From<mpsc::error::SendError<T>> for ActorSendError {
	fn from(_: mpsc::error::SendError<T>) -> Self {
		Self::Closed
	}
}

impl<T> From<mpsc::error::TrySendError<T>> for ActorSendError {
	fn from(err: mpsc::error::TrySendError<T>) -> Self {
		match err {
			mpsc::error::TrySendError::Full(_) => Self::Full,
			mpsc::error::TrySendError::Closed(_) => Self::Closed,
		}
	}
}

/// The actor task ended abnormally.
#[derive(Debug, Error)]
#[error("find actor task failed: {0}")]
pub struct ActorJoinError(#[from] tokio::task::JoinError);

/// Cloneable ingress for events.
#[derive(Debug, Clone)]
pub struct FindEventSender {
	tx: mpsc::Sender<FindEvent>,
}

impl FindEventSender {
	/// Enqueues an event, waiting for mailbox capacity.
	pub async fn send(&self, event: impl Into<FindEvent>) -> Result<(), ActorSendError> {
		self.tx.send(event.into()).await?;
		Ok(())
	}

	/// Enqueues an event without waiting.
	pub fn try_send(&self, event: impl Into<FindEvent>) -> Result<(), ActorSendError> {
		self.tx.try_send(event.into())?;
		Ok(())
	}

	pub fn is_closed(&self) -> bool {
		self.tx.is_closed()
	}
}

/// Owner handle for a spawned coordinator task.
pub struct FindActorHandle<H: FindHost> {
	sender: FindEventSender,
	cancel: CancellationToken,
	task: JoinHandle<FindCoordinator<H>>,
}

impl<H: FindHost> FindActorHandle<H> {
	pub fn sender(&self) -> FindEventSender {
		self.sender.clone()
	}

	pub async fn send(&self, event: impl Into<FindEvent>) -> Result<(), ActorSendError> {
		self.sender.send(event).await
	}

	/// Stops intake, applies events already in the mailbox and hands the
	/// coordinator back.
	pub async fn shutdown(self) -> Result<FindCoordinator<H>, ActorJoinError> {
		self.cancel.cancel();
		Ok(self.task.await?)
	}
}

/// Moves `coordinator` onto a new tokio task.
///
/// Must be called from within a tokio runtime. A zero mailbox capacity is
/// treated as one.
pub fn spawn<H>(coordinator: FindCoordinator<H>, config: &FindConfig) -> FindActorHandle<H>
where
	H: FindHost + Send + 'static,
{
	let (tx, rx) = mpsc::channel(config.actor.mailbox_capacity.max(1));
	let cancel = CancellationToken::new();
	let task = tokio::spawn(run(coordinator, rx, cancel.clone()));
	FindActorHandle {
		sender: FindEventSender { tx },
		cancel,
		task,
	}
}

async fn run<H: FindHost>(
	mut coordinator: FindCoordinator<H>,
	mut rx: mpsc::Receiver<FindEvent>,
	cancel: CancellationToken,
) -> FindCoordinator<H> {
	tracing::debug!("find.actor.start");
	loop {
		tokio::select! {
			biased;
			_ = cancel.cancelled() => break,
			event = rx.recv() => match event {
				Some(event) => coordinator.handle(event),
				None => break,
			},
		}
	}

	rx.close();
	let mut drained = 0usize;
	while let Ok(event) = rx.try_recv() {
		coordinator.handle(event);
		drained += 1;
	}
	tracing::debug!(drained, "find.actor.stop");
	coordinator
}
