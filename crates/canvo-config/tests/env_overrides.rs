use figment::Jail;
use canvo_config::CanvoConfig;

#[test]
fn external_overrides_fill_config_values() {
    Jail::expect_with(|_jail| {
        let overrides = vec![(
            "CANVO_GEMINI__API_KEY".to_string(),
            "AIza-from-external".to_string(),
        )];

        let config = CanvoConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.gemini.api_key, "AIza-from-external");
        Ok(())
    });
}

#[test]
fn process_env_beats_external_overrides() {
    Jail::expect_with(|jail| {
        jail.set_env("CANVO_GEMINI__API_KEY", "AIza-from-env");
        let overrides = vec![(
            "CANVO_GEMINI__API_KEY".to_string(),
            "AIza-from-external".to_string(),
        )];

        let config = CanvoConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.gemini.api_key, "AIza-from-env");
        Ok(())
    });
}

#[test]
fn unknown_override_keys_are_ignored() {
    Jail::expect_with(|_jail| {
        let overrides = vec![("NOT_CANVO_KEY".to_string(), "ignored".to_string())];

        let config = CanvoConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert!(!config.gemini.is_configured());
        Ok(())
    });
}
