// crates.io
use color_eyre::Result;
// self
use authn_provider::{
	ProviderType,
	error::{ConfigError, Error},
	policy::ProviderPolicy,
};

const DIRECTORY_POLICY: &str = r#"{
	"enabled": ["LDAP/AD", "Password", "client credentials", "App"],
	"fallback": "ad",
	"require_2fa": true
}"#;

#[test]
fn directory_policy_resolves_and_checks() -> Result<()> {
	let policy = ProviderPolicy::from_json_str(DIRECTORY_POLICY)?;

	assert_eq!(
		policy.enabled,
		vec![
			ProviderType::LDAP,
			ProviderType::LOCAL,
			ProviderType::CLIENT,
			ProviderType::APPLICATION
		]
	);
	assert_eq!(policy.fallback, ProviderType::LDAP);
	assert_eq!(policy.resolve(""), ProviderType::LDAP);
	assert_eq!(policy.resolve("false"), ProviderType::LDAP);
	assert_eq!(policy.authorize("passwd")?, ProviderType::LOCAL);
	assert!(policy.requires_passcode(&ProviderType::LDAP));
	assert!(!policy.requires_passcode(&ProviderType::APPLICATION));

	let err = policy.authorize("url").expect_err("Link sharing is not enabled.");

	assert!(matches!(err, Error::Disallowed { ref provider } if provider == "link"));

	Ok(())
}

#[test]
fn malformed_policy_reports_json_path() {
	let err = ProviderPolicy::from_json_str(r#"{ "enabled": ["local"], "require_2fa": "yes" }"#)
		.expect_err("A string is not a valid require_2fa flag.");

	match err {
		Error::Config(ConfigError::Parse { source }) =>
			assert_eq!(source.path().to_string(), "require_2fa"),
		other => panic!("Unexpected error: {other:?}."),
	}

	let err = ProviderPolicy::from_json_str(r#"{ "enabled": "local" }"#)
		.expect_err("Enabled providers must be a list.");

	assert!(err.to_string().contains("`enabled`"), "Error should name the path: {err}.");
}

#[test]
fn policy_serializes_canonical_strings() -> Result<()> {
	let policy = ProviderPolicy::from_json_slice(br#"{ "enabled": ["pass", "token"] }"#)?;
	let json = serde_json::to_value(&policy)?;

	assert_eq!(json["enabled"], serde_json::json!(["local", "link"]));
	assert_eq!(json["fallback"], "local");
	assert_eq!(json["require_2fa"], false);

	let reloaded = ProviderPolicy::from_json_str(&json.to_string())?;

	assert_eq!(reloaded, policy);

	Ok(())
}
