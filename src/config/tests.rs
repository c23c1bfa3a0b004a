use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

const ALL_VARS: [&str; 13] = [
    "TRIAGE_PORT",
    "TRIAGE_BIND_ADDR",
    "TRIAGE_KNOWLEDGE_BASE_PATH",
    "TRIAGE_EMBEDDING_MODEL_PATH",
    "TRIAGE_CACHE_ENABLED",
    "TRIAGE_CACHE_TTL_SECS",
    "TRIAGE_CACHE_MAX_SIZE",
    "TRIAGE_CACHE_GENERATED",
    "TRIAGE_CACHE_MAX_HISTORY",
    "TRIAGE_FAQ_ANSWER_THRESHOLD",
    "TRIAGE_GENERATION_MODEL",
    "TRIAGE_GENERATION_TIMEOUT_SECS",
    "TRIAGE_MOCK_PROVIDER",
];

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_triage_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for var in ALL_VARS {
        unsafe { env::remove_var(var) };
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 5000);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert_eq!(
        config.knowledge_base_path,
        PathBuf::from("./data/knowledge_base.json")
    );
    assert!(config.embedding_model_path.is_none());
    assert!(config.cache_enabled);
    assert_eq!(config.cache_ttl_secs, 3600);
    assert_eq!(config.cache_max_size, 500);
    assert!(config.cache_generated);
    assert_eq!(config.cache_max_history, 2);
    assert_eq!(config.faq_answer_threshold, 0.3);
    assert_eq!(config.generation_model, "gemini-1.5-flash");
    assert_eq!(config.generation_timeout(), Duration::from_secs(30));
    assert!(!config.mock_provider);
}

#[test]
fn test_socket_addr() {
    let config = Config {
        port: 3000,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_triage_env();

    let config = Config::from_env().expect("should parse with defaults");
    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_full_config_parse() {
    clear_triage_env();

    with_env_vars(
        &[
            ("TRIAGE_PORT", "8080"),
            ("TRIAGE_BIND_ADDR", "::1"),
            ("TRIAGE_KNOWLEDGE_BASE_PATH", "/srv/faq.json"),
            ("TRIAGE_EMBEDDING_MODEL_PATH", "/models/all-MiniLM-L6-v2"),
            ("TRIAGE_CACHE_ENABLED", "off"),
            ("TRIAGE_CACHE_TTL_SECS", "60"),
            ("TRIAGE_CACHE_MAX_SIZE", "10"),
            ("TRIAGE_CACHE_GENERATED", "false"),
            ("TRIAGE_CACHE_MAX_HISTORY", "0"),
            ("TRIAGE_FAQ_ANSWER_THRESHOLD", "0.7"),
            ("TRIAGE_GENERATION_MODEL", "gpt-4o-mini"),
            ("TRIAGE_GENERATION_TIMEOUT_SECS", "5"),
            ("TRIAGE_MOCK_PROVIDER", "1"),
        ],
        || {
            let config = Config::from_env().expect("should parse full config");

            assert_eq!(config.socket_addr(), "::1:8080");
            assert_eq!(config.knowledge_base_path, PathBuf::from("/srv/faq.json"));
            assert_eq!(
                config.embedding_model_path,
                Some(PathBuf::from("/models/all-MiniLM-L6-v2"))
            );
            assert!(!config.cache_enabled);
            assert_eq!(config.cache_ttl(), Duration::from_secs(60));
            assert_eq!(config.cache_max_size, 10);
            assert!(!config.cache_generated);
            assert_eq!(config.cache_max_history, 0);
            assert_eq!(config.faq_answer_threshold, 0.7);
            assert_eq!(config.generation_model, "gpt-4o-mini");
            assert_eq!(config.generation_timeout_secs, 5);
            assert!(config.mock_provider);
        },
    );
}

#[test]
#[serial]
fn test_blank_model_path_is_unset() {
    clear_triage_env();

    with_env_vars(&[("TRIAGE_EMBEDDING_MODEL_PATH", "  ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.embedding_model_path.is_none());
    });
}

#[test]
#[serial]
fn test_invalid_port_zero() {
    clear_triage_env();

    with_env_vars(&[("TRIAGE_PORT", "0")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
        assert!(err.to_string().contains("invalid port"));
    });
}

#[test]
#[serial]
fn test_invalid_port_not_number() {
    clear_triage_env();

    with_env_vars(&[("TRIAGE_PORT", "not_a_port")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::PortParseError { .. }));
    });
}

#[test]
#[serial]
fn test_invalid_bind_addr() {
    clear_triage_env();

    with_env_vars(&[("TRIAGE_BIND_ADDR", "not.an.ip.address")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
    });
}

#[test]
#[serial]
fn test_invalid_number_is_reported() {
    clear_triage_env();

    with_env_vars(&[("TRIAGE_CACHE_MAX_SIZE", "lots")], || {
        let err = Config::from_env().unwrap_err();
        match err {
            ConfigError::InvalidValue { name, value, .. } => {
                assert_eq!(name, "TRIAGE_CACHE_MAX_SIZE");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    });
}

#[test]
#[serial]
fn test_invalid_bool_is_reported() {
    clear_triage_env();

    with_env_vars(&[("TRIAGE_CACHE_ENABLED", "maybe")], || {
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(err.to_string().contains("TRIAGE_CACHE_ENABLED"));
    });
}

#[test]
fn test_parse_bool_spellings() {
    assert_eq!(parse_bool("TRUE"), Some(true));
    assert_eq!(parse_bool(" yes "), Some(true));
    assert_eq!(parse_bool("On"), Some(true));
    assert_eq!(parse_bool("0"), Some(false));
    assert_eq!(parse_bool("no"), Some(false));
    assert_eq!(parse_bool(""), None);
}

#[test]
fn test_validate_success_with_defaults() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validate_knowledge_base_path_is_directory() {
    let config = Config {
        knowledge_base_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src"),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotAFile { .. })
    ));
}

#[test]
fn test_validate_threshold_range() {
    let config = Config {
        faq_answer_threshold: 1.5,
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { .. }));
    assert!(err.to_string().contains("TRIAGE_FAQ_ANSWER_THRESHOLD"));
}

#[test]
fn test_validate_zero_timeout() {
    let config = Config {
        generation_timeout_secs: 0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_zero_ttl_only_when_caching() {
    let config = Config {
        cache_ttl_secs: 0,
        ..Default::default()
    };
    assert!(config.validate().is_err());

    let config = Config {
        cache_ttl_secs: 0,
        cache_enabled: false,
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_missing_model_path_is_not_fatal() {
    let config = Config {
        embedding_model_path: Some(PathBuf::from("/nonexistent/model")),
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}
