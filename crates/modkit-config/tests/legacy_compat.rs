//! Backward-compatibility tests for `modkit.json` decoding.
//!
//! Older documents wrote dependencies as bare strings and left `source`
//! implicit when an SDK was set. Both must keep decoding into the current
//! shape without a migration step.

use modkit_config::{
    ConfigError, ModuleConfig, ModuleConfigDependency, decode_dependency, decode_module_config,
};

#[test]
fn test_sdk_without_source_gets_implicit_source() {
    let config = decode_module_config(br#"{"sdk": "go"}"#).unwrap();
    assert_eq!(config.source.as_deref(), Some("."));
}

#[test]
fn test_explicit_source_is_kept() {
    let config = decode_module_config(br#"{"sdk": "go", "source": "mysrc"}"#).unwrap();
    assert_eq!(config.source.as_deref(), Some("mysrc"));
}

#[test]
fn test_explicit_empty_source_is_upgraded_too() {
    // Known quirk: an explicit "" cannot be told apart from a missing key.
    let config = decode_module_config(br#"{"sdk": "go", "source": ""}"#).unwrap();
    assert_eq!(config.source.as_deref(), Some("."));
}

#[test]
fn test_source_without_sdk_is_not_touched() {
    let config = decode_module_config(br#"{"name": "plain"}"#).unwrap();
    assert_eq!(config.source, None);

    let config = decode_module_config(br#"{"source": "sub"}"#).unwrap();
    assert_eq!(config.source.as_deref(), Some("sub"));
}

#[test]
fn test_bare_string_dependency() {
    let config = decode_module_config(br#"{"dependencies": ["github.com/foo/bar"]}"#).unwrap();

    let dep = &config.dependencies[0];
    assert_eq!(dep.source, "github.com/foo/bar");
    assert_eq!(dep.name, None);
    assert_eq!(dep.pin, None);
}

#[test]
fn test_object_dependency() {
    let config = decode_module_config(
        br#"{"dependencies": [{"name": "bar", "source": "github.com/foo/bar", "pin": "v1"}]}"#,
    )
    .unwrap();

    assert_eq!(
        config.dependencies,
        vec![ModuleConfigDependency {
            name: Some("bar".to_string()),
            source: "github.com/foo/bar".to_string(),
            pin: Some("v1".to_string()),
        }]
    );
}

#[test]
fn test_mixed_dependency_shapes_keep_order() {
    let config = decode_module_config(
        br#"{"dependencies": [
            "../first",
            {"name": "second", "source": "../second"},
            null,
            "../fourth"
        ]}"#,
    )
    .unwrap();

    let sources: Vec<&str> = config
        .dependencies
        .iter()
        .map(|d| d.source.as_str())
        .collect();
    assert_eq!(sources, vec!["../first", "../second", "", "../fourth"]);
    assert!(config.dependencies[2].is_placeholder());
}

#[test]
fn test_numeric_dependency_is_an_error() {
    let err = decode_module_config(br#"{"dependencies": [42]}"#).unwrap_err();
    match err {
        ConfigError::ModuleConfig(e) => {
            assert!(e.is_data());
            assert!(e.to_string().contains("dependency"));
        }
        other => panic!("expected module config error, got {other:?}"),
    }

    assert!(matches!(
        decode_dependency(b"42"),
        Err(ConfigError::Dependency(_))
    ));
}

#[test]
fn test_dependency_by_name_returns_first_match() {
    let config = decode_module_config(
        br#"{"dependencies": [
            {"name": "a", "source": "one"},
            {"name": "b", "source": "two"},
            {"name": "a", "source": "three"}
        ]}"#,
    )
    .unwrap();

    let found = config.dependency_by_name("a").unwrap();
    assert_eq!(found.source, "one");
    assert!(std::ptr::eq(found, &config.dependencies[0]));
    assert!(config.dependency_by_name("c").is_none());
    assert!(config.dependency_by_name("A").is_none());
}

#[test]
fn test_legacy_string_dependency_has_empty_name() {
    let config = decode_module_config(br#"{"dependencies": ["../x", {"name": "a", "source": "y"}]}"#)
        .unwrap();

    let found = config.dependency_by_name("").unwrap();
    assert_eq!(found.source, "../x");
    assert!(std::ptr::eq(found, &config.dependencies[0]));
}

#[test]
fn test_null_document_is_default() {
    assert_eq!(decode_module_config(b"null").unwrap(), ModuleConfig::default());
    assert!(matches!(
        decode_module_config(b" \n\t"),
        Err(ConfigError::ModuleConfig(_))
    ));
}

#[test]
fn test_codegen_tri_state() {
    let absent = decode_module_config(br#"{"codegen": {}}"#).unwrap();
    let on = decode_module_config(br#"{"codegen": {"automaticGitignore": true}}"#).unwrap();
    let off = decode_module_config(br#"{"codegen": {"automaticGitignore": false}}"#).unwrap();

    assert_eq!(absent.automatic_gitignore(), None);
    assert_eq!(on.automatic_gitignore(), Some(true));
    assert_eq!(off.automatic_gitignore(), Some(false));
}

#[test]
fn test_current_shape_round_trips() {
    let json = br#"{
        "name": "mod",
        "engineVersion": "v0.12.0",
        "sdk": "typescript",
        "include": ["src"],
        "exclude": ["node_modules"],
        "dependencies": [{"name": "dep", "source": "../dep", "pin": "main"}],
        "source": "ts",
        "views": [{"name": "all", "patterns": ["**"]}],
        "codegen": {"automaticGitignore": true}
    }"#;

    let first = decode_module_config(json).unwrap();
    let encoded = serde_json::to_vec(&first).unwrap();
    let second = decode_module_config(&encoded).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_legacy_document_upgrades_to_current_encoding() {
    let legacy = decode_module_config(br#"{"name": "old", "sdk": "go", "dependencies": ["../x"]}"#)
        .unwrap();
    let encoded = serde_json::to_value(&legacy).unwrap();

    assert_eq!(
        encoded,
        serde_json::json!({
            "name": "old",
            "engineVersion": "",
            "sdk": "go",
            "dependencies": [{"source": "../x"}],
            "source": "."
        })
    );
}

#[test]
fn test_concurrent_decodes_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let doc = format!(r#"{{"name": "m{i}", "dependencies": ["dep{i}"]}}"#);
                decode_module_config(doc.as_bytes()).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let config: ModuleConfig = handle.join().unwrap();
        assert_eq!(config.name, format!("m{i}"));
        assert_eq!(config.dependencies[0].source, format!("dep{i}"));
    }
}
