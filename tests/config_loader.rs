use argfold::args::{ResolveError, Separator};
use argfold::config::{Config, ConfigError, FlagConfig, ParserConfig};
use argfold::report::{build_context, run, FlagHit, Recorder};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

fn toks(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// Test that Config::default() matches the built-in registration defaults.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.syntax.flag_indicator, "--");
    assert_eq!(config.syntax.parser_indicator, "");
    assert_eq!(config.defaults.arity, 1);
    assert_eq!(config.defaults.separator, "-");
    assert!(!config.defaults.allow_multiple);
    assert_eq!(config.defaults.parser_arity, 1);
    assert!(config.defaults.suffix.is_none());
    assert!(config.flags.is_empty());
    assert!(config.parsers.is_empty());

    let defaults = config.registration_defaults().unwrap();
    assert_eq!(defaults.separator, Separator::Inline('-'));
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("argfold/config.toml"));
}

#[test]
fn test_load_full_config() {
    let (_dir, path) = write_config(
        r#"
[syntax]
flag_indicator = "-"
parser_indicator = "@"

[defaults]
separator = "="
allow_multiple = true

[[flags]]
name = "out"
separator = " "

[[flags]]
name = "D"
arity = 2

[[parsers]]
name = "list"
suffix = "end"
delimiter = ","
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.syntax.flag_indicator, "-");
    assert_eq!(config.flags.len(), 2);
    assert_eq!(config.flags[0].separator.as_deref(), Some(" "));
    assert_eq!(config.flags[1].arity, Some(2));
    assert_eq!(config.parsers[0].delimiter, ",");
}

#[test]
fn test_loaded_config_resolves() {
    let (_dir, path) = write_config(
        r#"
[syntax]
flag_indicator = "-"
parser_indicator = "@"

[defaults]
separator = "="
allow_multiple = true

[[flags]]
name = "out"
separator = " "

[[flags]]
name = "D"
arity = 2

[[parsers]]
name = "list"
suffix = "end"
delimiter = ","
"#,
    );
    let config = Config::load_from(&path).unwrap();
    let recorder = Recorder::new();
    let context = build_context(&config, &recorder).unwrap();

    let report = run(
        &context,
        &recorder,
        &toks(&["-D=key=val", "-out", "@list", "a", "b", "end", "-D=k=v", "rest"]),
    )
    .unwrap();

    assert_eq!(
        report.flags,
        vec![
            FlagHit {
                name: "D".to_string(),
                values: toks(&["key", "val"]),
            },
            FlagHit {
                name: "out".to_string(),
                values: toks(&["a,b"]),
            },
            FlagHit {
                name: "D".to_string(),
                values: toks(&["k", "v"]),
            },
        ]
    );
    assert_eq!(report.leftover, toks(&["rest"]));
}

#[test]
fn test_missing_sections_use_defaults() {
    let (_dir, path) = write_config(
        r#"
[[flags]]
name = "level"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.syntax.flag_indicator, "--");
    assert_eq!(config.defaults.arity, 1);
    assert_eq!(config.flags[0].arity, None);
}

#[test]
fn test_read_error_for_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = Config::load_from(&dir.path().join("absent.toml"));

    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_parse_error_for_bad_toml() {
    let (_dir, path) = write_config("[[flags]\nname = ");

    let result = Config::load_from(&path);

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_validation_rejects_bad_separator() {
    let (_dir, path) = write_config(
        r#"
[defaults]
separator = " ="
"#,
    );

    let result = Config::load_from(&path);

    assert!(matches!(
        result,
        Err(ConfigError::Registration(ResolveError::InvalidConfiguration { .. }))
    ));
}

#[test]
fn test_validation_rejects_empty_flag_indicator() {
    let mut config = Config::default();
    config.syntax.flag_indicator = String::new();

    assert!(matches!(
        config.validate(),
        Err(ConfigError::Registration(ResolveError::InvalidConfiguration { .. }))
    ));
}

#[test]
fn test_validation_rejects_invalid_names() {
    let mut config = Config::default();
    config.flags.push(FlagConfig {
        name: "two words".to_string(),
        arity: None,
        separator: None,
        allow_multiple: None,
    });

    assert!(config.validate().is_err());
}

#[test]
fn test_validation_rejects_whitespace_suffix() {
    let mut config = Config::default();
    config.parsers.push(ParserConfig {
        name: "[".to_string(),
        arity: None,
        suffix: Some("] ".to_string()),
        delimiter: " ".to_string(),
    });

    assert!(matches!(
        config.validate(),
        Err(ConfigError::Registration(ResolveError::InvalidConfiguration { .. }))
    ));
}

#[test]
fn test_validation_rejects_duplicate_flags() {
    let mut config = Config::default();
    for _ in 0..2 {
        config.flags.push(FlagConfig {
            name: "dup".to_string(),
            arity: None,
            separator: None,
            allow_multiple: None,
        });
    }

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("more than once"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}
