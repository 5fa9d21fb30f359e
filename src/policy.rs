//! Deployment policy deciding which providers are accepted and how `default` resolves.
//!
//! A policy is usually loaded from JSON next to the rest of the service configuration:
//!
//! ```
//! use authn_provider::{ProviderType, policy::ProviderPolicy};
//!
//! let policy = ProviderPolicy::from_json_str(
//! 	r#"{ "enabled": ["Password", "LDAP/AD"], "fallback": "ldap", "require_2fa": true }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(policy.resolve("null"), ProviderType::LDAP);
//! assert!(policy.requires_passcode(&ProviderType::LOCAL));
//! assert!(policy.check(&ProviderType::CLIENT).is_err());
//! ```

// self
use crate::{_prelude::*, error::ConfigError, obs, provider::ProviderType};

/// Provider policy loaded from configuration.
///
/// Every provider string read from configuration goes through the normalizer, so
/// `"Password"` and `"local"` name the same entry.
///
/// The [`Default`] policy enables `local`, `client`, `application`, `access_token`, and `link`
/// with `local` as the fallback. It does not list `default`, since [`resolve`](Self::resolve)
/// always replaces a default provider with the fallback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderPolicy {
	/// Providers accepted by the deployment.
	pub enabled: Vec<ProviderType>,
	/// Provider that `default` (and every default alias) resolves to.
	pub fallback: ProviderType,
	/// Whether passcodes are mandatory for providers that support them.
	pub require_2fa: bool,
}
impl ProviderPolicy {
	/// Parses and validates a policy from a JSON string.
	pub fn from_json_str(json: &str) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_str(json);
		let policy: Self = serde_path_to_error::deserialize(&mut de).map_err(ConfigError::from)?;

		de.end().map_err(ConfigError::TrailingData)?;

		policy.validated()
	}

	/// Parses and validates a policy from JSON bytes.
	pub fn from_json_slice(json: &[u8]) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_slice(json);
		let policy: Self = serde_path_to_error::deserialize(&mut de).map_err(ConfigError::from)?;

		de.end().map_err(ConfigError::TrailingData)?;

		policy.validated()
	}

	/// Deduplicates the enabled list and validates the policy.
	pub fn validated(mut self) -> Result<Self> {
		let mut seen = Vec::with_capacity(self.enabled.len());

		self.enabled.retain(|provider| {
			let canonical = provider.canonical_str().to_owned();

			if seen.contains(&canonical) {
				false
			} else {
				seen.push(canonical);

				true
			}
		});
		self.validate()?;

		Ok(self)
	}

	/// Checks the policy invariants.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.enabled.is_empty() {
			return Err(ConfigError::NoEnabledProviders);
		}
		if self.fallback.is_default() {
			return Err(ConfigError::InvalidFallback {
				provider: self.fallback.canonical_str().to_owned(),
			});
		}
		if !self.permits(&self.fallback) {
			return Err(ConfigError::FallbackNotEnabled {
				provider: self.fallback.canonical_str().to_owned(),
			});
		}

		Ok(())
	}

	/// Normalizes raw input, substituting the fallback for default providers.
	pub fn resolve(&self, raw: impl AsRef<str>) -> ProviderType {
		let provider = ProviderType::new(raw);

		if provider.is_default() { self.fallback.clone() } else { provider }
	}

	/// Returns true if the policy enables the provider.
	///
	/// Entries compare by canonical string, so the undefined sentinel matches `default`.
	pub fn permits(&self, provider: &ProviderType) -> bool {
		self.enabled.iter().any(|enabled| enabled.canonical_str() == provider.canonical_str())
	}

	/// Fails with [`Error::Disallowed`] if the policy does not enable the provider.
	pub fn check(&self, provider: &ProviderType) -> Result<()> {
		if self.permits(provider) {
			return Ok(());
		}

		obs::record_policy_denial(provider);

		Err(Error::Disallowed { provider: provider.canonical_str().to_owned() })
	}

	/// Resolves raw input and checks the result against the policy.
	pub fn authorize(&self, raw: impl AsRef<str>) -> Result<ProviderType> {
		let provider = self.resolve(raw);

		self.check(&provider)?;

		Ok(provider)
	}

	/// Returns true if passcode verification is mandatory for the provider.
	pub fn requires_passcode(&self, provider: &ProviderType) -> bool {
		self.require_2fa && provider.supports_2fa()
	}
}
impl Default for ProviderPolicy {
	fn default() -> Self {
		Self {
			enabled: vec![
				ProviderType::LOCAL,
				ProviderType::CLIENT,
				ProviderType::APPLICATION,
				ProviderType::ACCESS_TOKEN,
				ProviderType::LINK,
			],
			fallback: ProviderType::LOCAL,
			require_2fa: false,
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn default_policy_is_valid() {
		let policy = ProviderPolicy::default();

		policy.validate().expect("Default policy should validate.");

		assert!(!policy.permits(&ProviderType::UNDEFINED));
		assert!(!policy.permits(&ProviderType::DEFAULT));
		assert!(!policy.permits(&ProviderType::LDAP));
		assert_eq!(policy.resolve(""), ProviderType::LOCAL);
		assert_eq!(
			policy.authorize("null").expect("Default should resolve to the fallback."),
			ProviderType::LOCAL
		);
	}

	#[test]
	fn enabled_entries_are_normalized_and_deduplicated() {
		let policy =
			ProviderPolicy::from_json_str(r#"{ "enabled": ["Password", "local", "AD", "pass"] }"#)
				.expect("Policy should parse.");

		assert_eq!(policy.enabled, vec![ProviderType::LOCAL, ProviderType::LDAP]);
		assert_eq!(policy.fallback, ProviderType::LOCAL);
	}

	#[test]
	fn fallback_must_be_concrete_and_enabled() {
		let err = ProviderPolicy::from_json_str(r#"{ "enabled": ["local"], "fallback": "nil" }"#)
			.expect_err("Default fallback must be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidFallback { .. })));

		let err = ProviderPolicy::from_json_str(r#"{ "enabled": ["local"], "fallback": "ldap" }"#)
			.expect_err("Fallback outside the enabled list must be rejected.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::FallbackNotEnabled { ref provider }) if provider == "ldap"
		));

		let err = ProviderPolicy::from_json_str(r#"{ "enabled": [] }"#)
			.expect_err("Empty enabled list must be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::NoEnabledProviders)));
	}

	#[test]
	fn check_rejects_disabled_provider() {
		let policy = ProviderPolicy::default();
		let err = policy.check(&ProviderType::LDAP).expect_err("LDAP is not enabled by default.");

		assert!(matches!(err, Error::Disallowed { ref provider } if provider == "ldap"));
		assert_eq!(err.to_string(), "Authentication provider `ldap` is not enabled.");
		assert_eq!(
			policy.authorize("Client Credentials").expect("Client should be enabled."),
			ProviderType::CLIENT
		);
	}

	#[test]
	fn passcode_requirement_follows_capability() {
		let policy = ProviderPolicy { require_2fa: true, ..ProviderPolicy::default() };

		assert!(policy.requires_passcode(&ProviderType::LOCAL));
		assert!(!policy.requires_passcode(&ProviderType::ACCESS_TOKEN));
		assert!(!ProviderPolicy::default().requires_passcode(&ProviderType::LOCAL));
	}

	#[test]
	fn trailing_data_is_rejected() {
		let err = ProviderPolicy::from_json_slice(br#"{ "enabled": ["local"] } extra"#)
			.expect_err("Trailing data must be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::TrailingData(_))));
	}
}
