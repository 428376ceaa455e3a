//! Property-based tests for name validation, template rendering and hosts
//! reconciliation.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use proptest::prelude::*;

use devhost_cli::domain::hosts::{entry_to_append, has_hostname};
use devhost_cli::domain::vhost::{VhostVars, render_vhost};
use devhost_cli::domain::{
    DevhostConfig, Project, validate_config_key, validate_config_value, validate_project_name,
};

fn config() -> DevhostConfig {
    DevhostConfig {
        projects_root: PathBuf::from("/apps"),
        ..DevhostConfig::default()
    }
}

// ============================================================================
// validate_project_name() property tests
// ============================================================================

proptest! {
    /// Accepted names can never escape the vhost directory or break an nginx
    /// directive or hosts-file line.
    #[test]
    fn prop_accepted_names_are_safe(name in "\\PC{0,70}") {
        if validate_project_name(&name).is_ok() {
            prop_assert!(!name.is_empty() && name.len() <= 255, "bad length: {name:?}");
            prop_assert!(!name.contains('/') && !name.contains(".."), "path chars: {name:?}");
            prop_assert!(!name.starts_with('.') && !name.starts_with('-'), "bad start: {name:?}");
            prop_assert!(
                name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')),
                "unexpected char in {name:?}"
            );
        }
    }

    /// Any name containing a separator, whitespace or nginx syntax is rejected.
    #[test]
    fn prop_names_with_unsafe_chars_rejected(
        prefix in "[a-z]{1,10}",
        bad in prop::sample::select(vec!['/', ' ', '\t', ';', '{', '}', '#', '\'', '"']),
        suffix in "[a-z]{0,10}",
    ) {
        let name = format!("{prefix}{bad}{suffix}");
        prop_assert!(validate_project_name(&name).is_err(), "accepted {name:?}");
    }

    /// Typical directory names are accepted, whatever their case.
    #[test]
    fn prop_common_dir_names_accepted(name in "[A-Za-z0-9][A-Za-z0-9_-]{0,20}") {
        prop_assert!(validate_project_name(&name).is_ok(), "rejected {name:?}");
    }

    /// The hostname is always the lowercased directory name.
    #[test]
    fn prop_hostname_is_lowercased_name(name in "[A-Za-z0-9][A-Za-z0-9_-]{0,20}") {
        let project = Project::new(&name, &config());
        prop_assert_eq!(project.hostname, format!("{}.test", name.to_ascii_lowercase()));
        prop_assert!(project.vhost_path.ends_with(&name));
    }
}

// ============================================================================
// render_vhost() property tests
// ============================================================================

proptest! {
    /// Rendering leaves no placeholder behind and names the project's host.
    #[test]
    fn prop_rendered_vhost_has_no_placeholders(name in "[A-Za-z0-9][A-Za-z0-9_-]{0,20}") {
        let config = config();
        let project = Project::new(&name, &config);
        let text = render_vhost(&VhostVars::for_project(&project, &config));

        prop_assert!(!text.contains("{{"), "placeholder left in:\n{text}");
        let server_name = format!("server_name {}.test;", name.to_ascii_lowercase());
        let root = format!("root /apps/{name}/public;");
        prop_assert!(text.contains(&server_name));
        prop_assert!(text.contains(&root));
    }
}

// ============================================================================
// Hosts reconciliation property tests
// ============================================================================

proptest! {
    /// Appending the computed entry registers the hostname, and a second
    /// reconciliation appends nothing.
    #[test]
    fn prop_hosts_entry_is_idempotent(
        existing in proptest::collection::vec("[a-z]{1,8}\\.test", 0..5),
        trailing_newline in proptest::bool::ANY,
        label in "[a-z]{1,8}",
    ) {
        let hostname = format!("{label}.dev");
        let mut contents = existing
            .iter()
            .map(|h| format!("127.0.0.1 {h}"))
            .collect::<Vec<_>>()
            .join("\n");
        if trailing_newline && !contents.is_empty() {
            contents.push('\n');
        }

        let text = entry_to_append(&contents, "127.0.0.1", &hostname).expect("not yet present");
        contents.push_str(&text);

        prop_assert!(has_hostname(&contents, &hostname));
        prop_assert!(contents.ends_with('\n'));
        prop_assert!(entry_to_append(&contents, "127.0.0.1", &hostname).is_none());
        for h in &existing {
            prop_assert!(has_hostname(&contents, h), "lost entry {h}");
        }
    }
}

// ============================================================================
// validate_config_key() and validate_config_value() property tests
// ============================================================================

proptest! {
    /// Arbitrary dotted keys are never configuration keys.
    #[test]
    fn prop_arbitrary_keys_rejected(key in "[a-z]{1,20}\\.[a-z]{1,20}") {
        prop_assert!(validate_config_key(&key).is_err(), "accepted invalid key: {key}");
    }

    /// Relative paths are rejected for every path-valued key.
    #[test]
    fn prop_relative_paths_rejected(value in "[a-z]{1,12}(/[a-z]{1,8}){0,3}") {
        for key in ["projects_root", "vhost_dir", "hosts_file", "fpm_socket"] {
            prop_assert!(
                validate_config_value(key, &value).is_err(),
                "{key} accepted relative path {value}"
            );
        }
    }
}

#[test]
fn test_config_key_whitelist() {
    assert!(validate_config_key("projects_root").is_ok());
    assert!(validate_config_key("tld").is_ok());
    assert!(validate_config_key("unknown").is_err());
    assert!(validate_config_key("").is_err());
}

#[test]
fn test_config_value_checks() {
    assert!(validate_config_value("loopback", "127.0.0.1").is_ok());
    assert!(validate_config_value("loopback", "::1").is_ok());
    assert!(validate_config_value("loopback", "localhost").is_err());
    assert!(validate_config_value("tld", "Test").is_err());
    assert!(validate_config_value("composer", "composer install").is_err());
    assert!(validate_config_value("composer", "/usr/local/bin/composer").is_ok());
}
