//! Configuration for the find coordinator.
//!
//! Configuration is written in TOML. Every section and key is optional:
//!
//! ```toml
//! [contracts]
//! # "panic" aborts on protocol misuse, "log" reports it and carries on.
//! # Defaults to "panic" in debug builds and "log" in release builds.
//! policy = "log"
//!
//! [actor]
//! # Bounded mailbox size for the async coordinator front-end.
//! mailbox_capacity = 128
//! ```
//!
//! Unknown keys are rejected so typos surface at load time.

pub mod error;

use std::path::Path;

pub use error::{ConfigError, Result};
use serde::Deserialize;

const DEFAULT_MAILBOX_CAPACITY: usize = 128;

/// How the coordinator reacts to protocol misuse by its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractPolicy {
	/// Panic with the violation message.
	Panic,
	/// Emit an error event and ignore the offending input.
	Log,
}

impl Default for ContractPolicy {
	fn default() -> Self {
		if cfg!(debug_assertions) { Self::Panic } else { Self::Log }
	}
}

/// `[contracts]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContractsConfig {
	pub policy: ContractPolicy,
}

/// `[actor]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ActorConfig {
	pub mailbox_capacity: usize,
}

impl Default for ActorConfig {
	fn default() -> Self {
		Self {
			mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
		}
	}
}

/// Parsed find configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FindConfig {
	pub contracts: ContractsConfig,
	pub actor: ActorConfig,
}

impl FindConfig {
	/// Parse a TOML string into a [`FindConfig`].
	pub fn parse(input: &str) -> Result<Self> {
		let config: FindConfig = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Shorthand for a default config with an explicit contract policy.
	#[must_use]
	pub fn with_policy(policy: ContractPolicy) -> Self {
		Self {
			contracts: ContractsConfig { policy },
			..Self::default()
		}
	}

	fn validate(&self) -> Result<()> {
		if self.actor.mailbox_capacity == 0 {
			return Err(ConfigError::Invalid {
				key: "actor.mailbox_capacity",
				reason: "must be > 0",
			});
		}
		Ok(())
	}
}
