//! Canonical authentication-provider identifier.

// std
use std::{borrow::Borrow, convert::Infallible, ops::Deref};
// self
use crate::{
	_prelude::*,
	obs::{self, Resolution},
	provider::{Capability, canonical_form, clean_token, resolve_alias},
};

/// Canonical identifier of an authentication provider.
///
/// The domain is open: the nine associated constants carry classification and formatting
/// behavior, while any other normalized token is kept verbatim as a custom provider.
/// Values are built through [`ProviderType::new`] (or the equivalent `From`/`FromStr`
/// conversions), which never fails.
///
/// [`Deref`], [`AsRef`], and [`Borrow`] expose the stored token; [`Display`], serialization,
/// and `String::from` render the canonical string form (see [`canonical_str`](Self::canonical_str)).
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ProviderType(Cow<'static, str>);
impl ProviderType {
	/// Unset provider; renders as `default`.
	pub const UNDEFINED: Self = Self::from_static("");
	/// Provider chosen by deployment configuration.
	pub const DEFAULT: Self = Self::from_static("default");
	/// OAuth 2.0 client credentials.
	pub const CLIENT: Self = Self::from_static("client");
	/// Application-specific password or key.
	pub const APPLICATION: Self = Self::from_static("application");
	/// Bearer access token.
	pub const ACCESS_TOKEN: Self = Self::from_static("access_token");
	/// Locally stored password.
	pub const LOCAL: Self = Self::from_static("local");
	/// LDAP or Active Directory bind.
	pub const LDAP: Self = Self::from_static("ldap");
	/// Share link or URL token.
	pub const LINK: Self = Self::from_static("link");
	/// Authentication disabled.
	pub const NONE: Self = Self::from_static("none");

	/// Every well-known provider, starting with the undefined sentinel.
	pub const WELL_KNOWN: [Self; 9] = [
		Self::UNDEFINED,
		Self::DEFAULT,
		Self::CLIENT,
		Self::APPLICATION,
		Self::ACCESS_TOKEN,
		Self::LOCAL,
		Self::LDAP,
		Self::LINK,
		Self::NONE,
	];

	const fn from_static(value: &'static str) -> Self {
		Self(Cow::Borrowed(value))
	}

	/// Normalizes raw input into a provider identifier.
	///
	/// The input is cleaned (see [`clean_token`]), looked up in the alias table
	/// (see [`resolve_alias`]), and kept as a custom identifier when no alias matches.
	pub fn new(raw: impl AsRef<str>) -> Self {
		let raw = raw.as_ref();
		let (provider, resolution) = Self::resolve(raw);

		obs::record_resolution(raw, &provider, resolution);

		provider
	}

	/// Returns the well-known provider stored as exactly this token.
	pub fn well_known(token: &str) -> Option<Self> {
		Self::WELL_KNOWN.into_iter().find(|provider| provider.as_str() == token)
	}

	/// Returns true if the provider is one of the nine well-known values.
	pub fn is_well_known(&self) -> bool {
		Self::WELL_KNOWN.iter().any(|provider| provider == self)
	}

	fn resolve(raw: &str) -> (Self, Resolution) {
		let token = clean_token(raw);

		if let Some(provider) = resolve_alias(&token) {
			let resolution =
				if provider.is(&Self::DEFAULT) { Resolution::Default } else { Resolution::Alias };

			return (provider, resolution);
		}

		match Self::well_known(&token) {
			Some(provider) if provider.is(&Self::DEFAULT) => (provider, Resolution::Default),
			Some(provider) => (provider, Resolution::Canonical),
			None => (Self(Cow::Owned(token)), Resolution::Custom),
		}
	}

	/// Returns the stored token without canonical collapsing.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns the string form used for persistence and transmission.
	pub fn canonical_str(&self) -> &str {
		canonical_form(&self.0)
	}

	/// Returns a human-readable label for UI and logs.
	///
	/// Never compare or persist this value.
	pub fn pretty(&self) -> String {
		match self.as_str() {
			"ldap" => "LDAP/AD".into(),
			"client" => "Client".into(),
			"access_token" => "Access Token".into(),
			_ => upper_first(self.canonical_str()),
		}
	}

	/// Returns true if raw input normalizes to this provider.
	pub fn equal(&self, raw: impl AsRef<str>) -> bool {
		*self == Self::new(raw)
	}

	/// Returns true if raw input does not normalize to this provider.
	pub fn not_equal(&self, raw: impl AsRef<str>) -> bool {
		!self.equal(raw)
	}

	/// Strict identifier equality, without normalization.
	pub fn is(&self, other: &Self) -> bool {
		self == other
	}

	/// Strict identifier inequality, without normalization.
	pub fn is_not(&self, other: &Self) -> bool {
		self != other
	}

	/// Returns true only for the empty sentinel.
	///
	/// Narrower than [`is_default`](Self::is_default): `"null"` normalizes to the default
	/// provider but is not undefined.
	pub fn is_undefined(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns true if the provider belongs to the given capability set.
	pub fn has(&self, capability: Capability) -> bool {
		capability.providers().contains(self)
	}

	/// Iterates over every capability the provider belongs to.
	pub fn capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
		Capability::ALL.into_iter().filter(move |capability| self.has(*capability))
	}

	/// Returns true if authentication is delegated to an external directory.
	pub fn is_remote(&self) -> bool {
		self.has(Capability::Remote)
	}

	/// Returns true if local password authentication is possible.
	pub fn is_local(&self) -> bool {
		self.has(Capability::Local)
	}

	/// Returns true if the provider supports two-factor authentication with a passcode.
	pub fn supports_2fa(&self) -> bool {
		self.has(Capability::TwoFactor)
	}

	/// Returns true if the provider authenticates a client rather than an interactive user.
	pub fn is_client_credential(&self) -> bool {
		self.has(Capability::ClientCredential)
	}

	/// Returns true if the provider authenticates an application.
	pub fn is_application(&self) -> bool {
		self.is(&Self::APPLICATION)
	}

	/// Returns true if the provider renders as the default provider.
	///
	/// Compares canonical strings, so [`UNDEFINED`](Self::UNDEFINED) counts as default too.
	pub fn is_default(&self) -> bool {
		self.canonical_str() == Self::DEFAULT.canonical_str()
	}
}
impl Deref for ProviderType {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for ProviderType {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for ProviderType {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<&str> for ProviderType {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl From<String> for ProviderType {
	fn from(value: String) -> Self {
		Self::new(value)
	}
}
impl From<ProviderType> for String {
	fn from(value: ProviderType) -> Self {
		value.canonical_str().to_owned()
	}
}
impl FromStr for ProviderType {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::new(s))
	}
}
impl Debug for ProviderType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Provider({})", self.0)
	}
}
impl Display for ProviderType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.canonical_str())
	}
}

fn upper_first(value: &str) -> String {
	let mut chars = value.chars();

	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
