//! Optional observability hooks for provider resolution and policy enforcement.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (on by default) to emit a `debug` event on target
//!   `authn_provider::resolve` whenever raw input falls back to a custom provider, and a `warn`
//!   event on target `authn_provider::policy` whenever a policy rejects a provider.
//! - Enable `metrics` to increment `authn_provider_resolution_total` (labeled by `outcome`)
//!   for every normalization and `authn_provider_policy_denied_total` (labeled by `provider`)
//!   for every policy rejection. The `provider` label is the canonical string for the nine
//!   well-known providers and `custom` for everything else.

mod counter;
mod trace;

pub use counter::*;
pub use trace::*;

// self
use crate::{_prelude::*, provider::ProviderType};

/// How raw input was resolved into a provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resolution {
	/// Input matched one of the default aliases.
	Default,
	/// Input matched a non-default alias.
	Alias,
	/// Input was already a well-known provider with no synonym.
	Canonical,
	/// Input was kept verbatim as a custom provider.
	Custom,
}
impl Resolution {
	/// Returns a stable label suitable for log or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Resolution::Default => "default",
			Resolution::Alias => "alias",
			Resolution::Canonical => "canonical",
			Resolution::Custom => "custom",
		}
	}
}
impl Display for Resolution {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records one normalization through every enabled backend.
pub fn record_resolution(raw: &str, provider: &ProviderType, resolution: Resolution) {
	trace_resolution(raw, provider, resolution);
	count_resolution(resolution);
}

/// Records one policy rejection through every enabled backend.
pub fn record_policy_denial(provider: &ProviderType) {
	trace_policy_denial(provider);
	count_policy_denial(provider);
}
