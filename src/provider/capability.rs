// self
use crate::{_prelude::*, provider::ProviderType};

/// Providers whose authentication decision is delegated to an external directory.
pub static REMOTE_PROVIDERS: [ProviderType; 1] = [ProviderType::LDAP];
/// Providers that authenticate against locally stored credentials.
pub static LOCAL_PROVIDERS: [ProviderType; 1] = [ProviderType::LOCAL];
/// Providers that support two-factor authentication with a passcode.
pub static TWO_FACTOR_PROVIDERS: [ProviderType; 3] =
	[ProviderType::DEFAULT, ProviderType::LOCAL, ProviderType::LDAP];
/// Providers that authenticate clients and applications instead of interactive users.
pub static CLIENT_CREDENTIAL_PROVIDERS: [ProviderType; 3] =
	[ProviderType::CLIENT, ProviderType::APPLICATION, ProviderType::ACCESS_TOKEN];

/// Capability classes a provider may belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
	/// Authentication is delegated to a remote directory.
	Remote,
	/// Local password authentication.
	Local,
	/// Passcode-based two-factor authentication.
	TwoFactor,
	/// Machine-to-machine or application credential flow.
	ClientCredential,
}
impl Capability {
	/// Every capability, in declaration order.
	pub const ALL: [Capability; 4] =
		[Capability::Remote, Capability::Local, Capability::TwoFactor, Capability::ClientCredential];

	/// Returns the fixed provider set backing the capability.
	pub fn providers(self) -> &'static [ProviderType] {
		match self {
			Capability::Remote => &REMOTE_PROVIDERS,
			Capability::Local => &LOCAL_PROVIDERS,
			Capability::TwoFactor => &TWO_FACTOR_PROVIDERS,
			Capability::ClientCredential => &CLIENT_CREDENTIAL_PROVIDERS,
		}
	}

	/// Returns a stable label suitable for log or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Capability::Remote => "remote",
			Capability::Local => "local",
			Capability::TwoFactor => "two_factor",
			Capability::ClientCredential => "client_credential",
		}
	}
}
impl Display for Capability {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn sets_hold_only_well_known_providers() {
		let well_known = [
			ProviderType::DEFAULT,
			ProviderType::CLIENT,
			ProviderType::APPLICATION,
			ProviderType::ACCESS_TOKEN,
			ProviderType::LOCAL,
			ProviderType::LDAP,
			ProviderType::LINK,
			ProviderType::NONE,
		];

		for capability in Capability::ALL {
			for provider in capability.providers() {
				assert!(
					well_known.contains(provider),
					"{capability} lists unexpected provider {provider:?}."
				);
			}
		}
	}

	#[test]
	fn membership_matches_declared_sets() {
		assert_eq!(Capability::Remote.providers(), &[ProviderType::LDAP]);
		assert_eq!(Capability::Local.providers(), &[ProviderType::LOCAL]);
		assert!(Capability::TwoFactor.providers().contains(&ProviderType::DEFAULT));
		assert!(!Capability::TwoFactor.providers().contains(&ProviderType::CLIENT));
		assert_eq!(Capability::ClientCredential.providers().len(), 3);
	}

	#[test]
	fn labels_serialize_as_snake_case() {
		assert_eq!(Capability::TwoFactor.to_string(), "two_factor");
		assert_eq!(
			serde_json::to_string(&Capability::ClientCredential)
				.expect("Capability should serialize."),
			"\"client_credential\""
		);
	}
}
