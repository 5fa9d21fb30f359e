//! String tables that turn raw provider input into canonical identifiers.
//!
//! Two lookups live here and are kept apart on purpose:
//!
//! - [`resolve_alias`] is the full synonym table applied to freshly cleaned user or
//!   configuration input.
//! - [`canonical_form`] is the narrow collapsing table applied when an identifier is rendered
//!   back to persisted or transmitted text.

// self
use crate::provider::ProviderType;

/// Maximum number of characters kept in a normalized token.
pub const TOKEN_MAX_LEN: usize = 64;

/// Separator each whitespace character and `-` is mapped to.
const SEPARATOR: char = '_';

/// Normalizes raw input into a [`ProviderType`].
///
/// Shorthand for [`ProviderType::new`].
pub fn normalize(raw: &str) -> ProviderType {
	ProviderType::new(raw)
}

/// Cleans raw input into a normalized token.
///
/// Surrounding whitespace is trimmed, characters are lowercased, control characters are
/// dropped, and every remaining whitespace character or `-` becomes one `_`. Existing
/// underscores are kept as they are, so `my__idp` stays `my__idp`. Slashes and backslashes are
/// kept so `ldap/ad` style values survive. The result holds at most [`TOKEN_MAX_LEN`]
/// characters. Cleaning an already-clean token returns it unchanged.
pub fn clean_token(raw: &str) -> String {
	let mut token = String::with_capacity(raw.len().min(TOKEN_MAX_LEN));
	let mut len = 0;

	for c in raw.trim().chars() {
		if len == TOKEN_MAX_LEN {
			break;
		}
		if is_separator(c) {
			token.push(SEPARATOR);

			len += 1;

			continue;
		}
		if c.is_control() {
			continue;
		}

		for lower in c.to_lowercase() {
			if len == TOKEN_MAX_LEN {
				break;
			}

			token.push(lower);

			len += 1;
		}
	}

	token
}

/// Resolves a normalized token against the full alias table.
///
/// Returns `None` when the token is not a known synonym; callers then keep the token itself
/// as a custom identifier.
pub fn resolve_alias(token: &str) -> Option<ProviderType> {
	let provider = match token {
		"" | "_" | "-" | "null" | "nil" | "0" | "false" => ProviderType::DEFAULT,
		"token" | "url" => ProviderType::LINK,
		"pass" | "passwd" | "password" => ProviderType::LOCAL,
		"app" | "application" => ProviderType::APPLICATION,
		"ldap" | "ad" | "ldap/ad" | "ldap\\ad" => ProviderType::LDAP,
		"client" | "client_credentials" | "oauth2" => ProviderType::CLIENT,
		_ => return None,
	};

	Some(provider)
}

/// Collapses near-duplicate stored forms into their canonical string.
///
/// This is deliberately narrower than [`resolve_alias`]: it only folds the handful of forms
/// that legacy records and re-serialized values are known to carry.
pub fn canonical_form(value: &str) -> &str {
	match value {
		"" => "default",
		"token" => "link",
		"password" => "local",
		"client" | "client credentials" | "client_credentials" | "oauth2" => "client",
		_ => value,
	}
}

fn is_separator(c: char) -> bool {
	c == '-' || c.is_whitespace()
}
