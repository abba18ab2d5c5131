use super::*;

#[test]
fn test_requires_vm_loading() {
    assert!(requires_vm_loading(&ProjectSource::github("o", "r")));
    assert!(requires_vm_loading(&ProjectSource::Zip {
        url: "https://x/a.zip".to_string(),
        strip_prefix: None,
        use_vm: true,
    }));
    assert!(!requires_vm_loading(&ProjectSource::zip("https://x/a.zip")));
    assert!(!requires_vm_loading(&ProjectSource::local("/projects/demo")));
}

#[test]
fn test_github_config_defaults_ref() {
    let config = get_vm_load_config(&ProjectSource::github("serde-rs", "serde")).unwrap();
    assert_eq!(
        config,
        VmLoadConfig {
            url: "https://api.github.com/repos/serde-rs/serde/zipball/main".to_string(),
            strip_prefix: true,
            sub_path: None,
        }
    );
}

#[test]
fn test_github_config_with_ref_and_path() {
    let source = ProjectSource::Github {
        owner: "serde-rs".to_string(),
        repo: "serde".to_string(),
        git_ref: Some("v1.0.200".to_string()),
        path: Some("serde_derive".to_string()),
    };
    let config = get_vm_load_config(&source).unwrap();

    assert_eq!(
        config.url,
        "https://api.github.com/repos/serde-rs/serde/zipball/v1.0.200"
    );
    assert!(config.strip_prefix);
    assert_eq!(config.sub_path.as_deref(), Some("serde_derive"));
}

#[test]
fn test_github_empty_ref_uses_default() {
    let source = ProjectSource::Github {
        owner: "o".to_string(),
        repo: "r".to_string(),
        git_ref: Some(String::new()),
        path: None,
    };
    let config = get_vm_load_config(&source).unwrap();
    assert!(config.url.ends_with("/zipball/main"));
}

#[test]
fn test_vm_zip_config_passes_through() {
    let source = ProjectSource::Zip {
        url: "https://example.com/p.zip".to_string(),
        strip_prefix: Some(false),
        use_vm: true,
    };
    assert_eq!(
        get_vm_load_config(&source),
        Some(VmLoadConfig {
            url: "https://example.com/p.zip".to_string(),
            strip_prefix: false,
            sub_path: None,
        })
    );

    let defaulted = ProjectSource::Zip {
        url: "https://example.com/p.zip".to_string(),
        strip_prefix: None,
        use_vm: true,
    };
    assert!(get_vm_load_config(&defaulted).unwrap().strip_prefix);
}

#[test]
fn test_direct_sources_have_no_vm_config() {
    assert_eq!(get_vm_load_config(&ProjectSource::zip("https://x/a.zip")), None);
    assert_eq!(get_vm_load_config(&ProjectSource::local("demo")), None);
}

#[test]
fn test_source_json_shape() {
    let source: ProjectSource = serde_json::from_str(
        r#"{"type": "github", "owner": "o", "repo": "r", "ref": "dev", "path": "docs"}"#,
    )
    .unwrap();
    assert_eq!(
        source,
        ProjectSource::Github {
            owner: "o".to_string(),
            repo: "r".to_string(),
            git_ref: Some("dev".to_string()),
            path: Some("docs".to_string()),
        }
    );

    let source: ProjectSource =
        serde_json::from_str(r#"{"type": "zip", "url": "u", "useVm": true}"#).unwrap();
    assert!(requires_vm_loading(&source));

    let source: ProjectSource =
        serde_json::from_str(r#"{"type": "local", "path": "p", "manifestPath": "p/files.txt"}"#)
            .unwrap();
    assert_eq!(
        source,
        ProjectSource::Local {
            path: "p".to_string(),
            manifest_path: Some("p/files.txt".to_string()),
        }
    );
}

#[test]
fn test_vm_config_json_shape() {
    let config = get_vm_load_config(&ProjectSource::github("o", "r")).unwrap();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "url": "https://api.github.com/repos/o/r/zipball/main",
            "stripPrefix": true
        })
    );
}

#[test]
fn test_description() {
    assert_eq!(ProjectSource::github("o", "r").description(), "github o/r@main");
    assert_eq!(ProjectSource::local("demo").description(), "local project at demo");
}
