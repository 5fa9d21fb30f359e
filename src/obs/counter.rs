// self
use crate::{obs::Resolution, provider::ProviderType};

/// Counts a normalization via the global metrics recorder (when enabled).
pub fn count_resolution(resolution: Resolution) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("authn_provider_resolution_total", "outcome" => resolution.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = resolution;
	}
}

/// Counts a policy rejection via the global metrics recorder (when enabled).
pub fn count_policy_denial(provider: &ProviderType) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"authn_provider_policy_denied_total",
			"provider" => policy_denial_label(provider).to_owned()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = provider;
	}
}

/// Returns the `provider` label for a policy rejection.
///
/// Only the well-known providers keep their own label; every custom provider shares
/// `custom`, which bounds the label set.
pub fn policy_denial_label(provider: &ProviderType) -> &str {
	if provider.is_well_known() { provider.canonical_str() } else { "custom" }
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn counters_noop_without_recorder() {
		count_resolution(Resolution::Default);
		count_policy_denial(&ProviderType::NONE);
	}

	#[test]
	fn denial_labels_stay_bounded() {
		assert_eq!(policy_denial_label(&ProviderType::LDAP), "ldap");
		assert_eq!(policy_denial_label(&ProviderType::UNDEFINED), "default");
		assert_eq!(policy_denial_label(&ProviderType::new("x1")), "custom");
		assert_eq!(policy_denial_label(&ProviderType::new("x2")), "custom");

		let labels = (0..100)
			.map(|i| policy_denial_label(&ProviderType::new(format!("idp{i}"))).to_owned())
			.collect::<std::collections::HashSet<_>>();

		assert_eq!(labels.len(), 1);
	}
}
