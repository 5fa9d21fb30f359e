//! Canonical authentication-provider identifiers: normalize loosely formatted provider strings
//! and classify the result by capability (remote, local, two-factor, client credentials).

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod obs;
pub mod policy;
pub mod provider;

mod _prelude {
	pub use std::{
		borrow::Cow,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;

	pub use crate::error::{Error, Result};
}

pub use provider::{ProviderType, normalize};
#[cfg(test)] use color_eyre as _;
