use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_HEALTH_KEY: &str = "health-check:default";
pub const FALLBACK_HEALTH_KEY: &str = "health-check:fallback";

/// Which processor handled a payment.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
	Default,
	Fallback,
}

impl Endpoint {
	pub const ALL: [Endpoint; 2] = [Endpoint::Default, Endpoint::Fallback];

	pub fn as_str(&self) -> &'static str {
		match self {
			Endpoint::Default => "default",
			Endpoint::Fallback => "fallback",
		}
	}

	/// Shared store key holding this processor's health snapshot.
	pub fn health_key(&self) -> &'static str {
		match self {
			Endpoint::Default => DEFAULT_HEALTH_KEY,
			Endpoint::Fallback => FALLBACK_HEALTH_KEY,
		}
	}
}

impl fmt::Display for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
