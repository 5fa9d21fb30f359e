//! Crate-level error types raised by the provider policy layer.
//!
//! Normalization and classification never fail; only loading or enforcing a
//! [`ProviderPolicy`](crate::policy::ProviderPolicy) produces these errors.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Policy configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// The active policy does not enable the provider.
	#[error("Authentication provider `{provider}` is not enabled.")]
	Disallowed {
		/// Canonical string form of the rejected provider.
		provider: String,
	},
}

/// Configuration and validation failures raised while loading a policy.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Policy document could not be parsed.
	#[error("Provider policy is malformed at `{}`.", .source.path())]
	Parse {
		/// Structured parsing failure, including the failing JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Policy document carries data after the JSON value.
	#[error("Provider policy has trailing data after the JSON document.")]
	TrailingData(#[source] serde_json::Error),
	/// Policy enables no providers at all.
	#[error("Provider policy must enable at least one provider.")]
	NoEnabledProviders,
	/// Fallback provider is itself a default alias.
	#[error("Fallback provider `{provider}` cannot be the default provider.")]
	InvalidFallback {
		/// Canonical string form of the fallback provider.
		provider: String,
	},
	/// Fallback provider is missing from the enabled list.
	#[error("Fallback provider `{provider}` is not enabled.")]
	FallbackNotEnabled {
		/// Canonical string form of the fallback provider.
		provider: String,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(source: serde_path_to_error::Error<serde_json::Error>) -> Self {
		Self::Parse { source }
	}
}
