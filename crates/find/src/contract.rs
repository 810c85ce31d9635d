//! Protocol misuse by the host.
//!
//! These are integration bugs, not runtime conditions. What happens when one
//! is detected is decided by [`ContractPolicy`].

use framefind_config::ContractPolicy;
use framefind_primitives::{FrameId, RequestId};
use thiserror::Error;

/// A precondition the host broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
	#[error("request id {id} is not greater than the last accepted id {last}")]
	NonIncreasingRequestId { id: RequestId, last: RequestId },
	#[error("find-next request {0} arrived without an active session")]
	FindNextWithoutSession(RequestId),
	#[error("find-next request {id} searches {got:?} but the session searches {expected:?}")]
	SearchTextMismatch { id: RequestId, expected: String, got: String },
	#[error("{0} is already part of the session and was re-added without force")]
	FrameAlreadyTracked(FrameId),
	#[error("reply for request {request_id} from {frame}, which is not part of the session")]
	UntrackedFrameReply { frame: FrameId, request_id: RequestId },
	#[error("directive for request {request_id} targets {frame}, which is not part of the session")]
	UntrackedDirectiveTarget { frame: FrameId, request_id: RequestId },
	#[error("directive for request {request_id} targets {frame}, which has no live renderer")]
	DeadDirectiveTarget { frame: FrameId, request_id: RequestId },
}

/// Applies a [`ContractPolicy`] to detected violations.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Contracts {
	policy: ContractPolicy,
}

impl Contracts {
	pub(crate) fn new(policy: ContractPolicy) -> Self {
		Self { policy }
	}

	/// Panics or logs; under `Log` the caller drops the offending input.
	pub(crate) fn violated(&self, violation: ContractViolation) {
		match self.policy {
			ContractPolicy::Panic => panic!("find contract violated: {violation}"),
			ContractPolicy::Log => tracing::error!(%violation, "find.contract.violated"),
		}
	}
}
