use figment::Jail;
use gomodel_config::GoModelConfig;

#[test]
fn env_enables_scan_flags() {
    Jail::expect_with(|jail| {
        jail.set_env("GOMODEL_SCAN__SUPPRESS_COMMENTS", "true");
        jail.set_env("GOMODEL_SCAN__ALLOW_UNRESOLVED_IMPORTS", "true");

        let config = GoModelConfig::load().expect("config loads");
        assert!(config.scan.suppress_comments);
        assert!(config.scan.allow_unresolved_imports);
        assert!(!config.scan.suppress_structs);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".gomodel")?;
        jail.create_file(
            ".gomodel/config.toml",
            r"
[scan]
suppress_methods = true
",
        )?;
        jail.set_env("GOMODEL_SCAN__SUPPRESS_METHODS", "false");

        let config = GoModelConfig::load().expect("config loads");
        assert!(!config.scan.suppress_methods);
        Ok(())
    });
}

#[test]
fn non_boolean_env_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("GOMODEL_SCAN__SUPPRESS_STRUCTS", "sometimes");

        let err = GoModelConfig::load().expect_err("invalid bool");
        assert!(matches!(err, gomodel_config::ConfigError::Figment(_)));
        Ok(())
    });
}
