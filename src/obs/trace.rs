// self
use crate::{
	obs::Resolution,
	provider::{ProviderType, TOKEN_MAX_LEN},
};

/// Emits a `debug` event when raw input falls back to a custom provider.
///
/// The logged `raw` field is cut to [`TOKEN_MAX_LEN`] characters.
pub fn trace_resolution(raw: &str, provider: &ProviderType, resolution: Resolution) {
	#[cfg(feature = "tracing")]
	{
		if resolution == Resolution::Custom {
			tracing::debug!(
				target: "authn_provider::resolve",
				raw = bounded_raw(raw),
				provider = provider.as_str(),
				outcome = resolution.as_str(),
				"Accepted unrecognized authentication provider."
			);
		}
	}

	#[cfg(not(feature = "tracing"))]
	{
		let _ = (raw, provider, resolution);
	}
}

/// Emits a `warn` event when a policy rejects a provider.
pub fn trace_policy_denial(provider: &ProviderType) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			target: "authn_provider::policy",
			provider = provider.canonical_str(),
			"Authentication provider is not enabled by policy."
		);
	}

	#[cfg(not(feature = "tracing"))]
	{
		let _ = provider;
	}
}

/// Returns at most the first [`TOKEN_MAX_LEN`] characters of raw input.
pub fn bounded_raw(raw: &str) -> &str {
	match raw.char_indices().nth(TOKEN_MAX_LEN) {
		Some((end, _)) => &raw[..end],
		None => raw,
	}
}
