#[cfg(test)]
mod tests {
    use crate::config::{
        ConfigBuilder, ConfigError, ConfigLoader, GazetagConfig, LogFormat, LogLevel, validation,
    };
    use crate::span::OutsideTag;
    use figment::Jail;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = GazetagConfig::default();
        assert_eq!(config.gazetteer.dir, None);
        assert!(!config.gazetteer.case_insensitive);
        assert_eq!(config.tagging.outside_tag, OutsideTag::Letter);
        assert_eq!(config.tagging.label_separator, ", ");
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(config.logging.console);
    }

    #[test]
    fn test_config_builder() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigBuilder::new()
            .with_gazetteer_dir(dir.path())
            .with_case_insensitive_matching(true)
            .with_outside_tag(OutsideTag::Zero)
            .with_label_separator("|")
            .with_log_level(LogLevel::Debug)
            .build()
            .unwrap();

        assert_eq!(config.gazetteer.dir, Some(dir.path().to_path_buf()));
        assert!(config.gazetteer.case_insensitive);
        assert_eq!(config.tagging.outside_tag, OutsideTag::Zero);
        assert_eq!(config.tagging.label_separator, "|");
        assert_eq!(config.logging.level, LogLevel::Debug);

        let options = config.tagging.tag_options();
        assert_eq!(options.outside, OutsideTag::Zero);
        assert_eq!(options.label_separator, "|");
    }

    #[test]
    fn test_validation() {
        let valid = ConfigBuilder::new().build();
        assert!(valid.is_ok());

        let config = GazetagConfig::default();
        assert!(validation::validate_config(&config).is_ok());

        let empty_separator = ConfigBuilder::new().with_label_separator("").build();
        assert!(matches!(
            empty_separator,
            Err(ConfigError::ValidationError(_))
        ));

        let missing_dir = ConfigBuilder::new()
            .with_gazetteer_dir("/definitely/not/a/gazetteer/dir")
            .build();
        assert!(matches!(missing_dir, Err(ConfigError::ValidationError(_))));

        let empty_log_file = ConfigBuilder::new().with_log_file("").build();
        assert!(matches!(
            empty_log_file,
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_gazetteer_dir_must_be_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = ConfigBuilder::new().with_gazetteer_dir(file.path()).build();
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_predefined_configs() {
        let dev = ConfigBuilder::development().build().unwrap();
        assert_eq!(dev.logging.level, LogLevel::Debug);
        assert_eq!(dev.logging.format, LogFormat::Pretty);

        let compat = ConfigBuilder::compatibility().build().unwrap();
        assert_eq!(compat.tagging.outside_tag, OutsideTag::Zero);
        assert_eq!(compat.tagging.tag_options().outside.as_str(), "0");
    }

    #[test]
    fn test_config_serialization() {
        let config = ConfigBuilder::new()
            .with_outside_tag(OutsideTag::Zero)
            .with_log_file("/tmp/gazetag.log")
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"outside_tag\":\"zero\""));

        let deserialized: GazetagConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
        assert_eq!(
            deserialized.logging.file,
            Some(PathBuf::from("/tmp/gazetag.log"))
        );
    }

    #[test]
    fn test_loader_layers_file_and_env() {
        Jail::expect_with(|jail| {
            jail.create_dir("gazetteers")?;
            jail.create_file(
                "gazetag.toml",
                r#"
                [gazetteer]
                dir = "gazetteers"

                [tagging]
                outside_tag = "zero"
                label_separator = "/"
                "#,
            )?;
            jail.set_env("GAZETAG_TAGGING__LABEL_SEPARATOR", "+");
            jail.set_env("GAZETAG_LOGGING__LEVEL", "warn");

            let config = ConfigLoader::new()
                .load_file("gazetag.toml")
                .map_err(|e| e.to_string())?
                .load_env()
                .map_err(|e| e.to_string())?
                .extract()
                .map_err(|e| e.to_string())?;

            assert_eq!(config.gazetteer.dir, Some(PathBuf::from("gazetteers")));
            assert_eq!(config.tagging.outside_tag, OutsideTag::Zero);
            assert_eq!(config.tagging.label_separator, "+");
            assert_eq!(config.logging.level, LogLevel::Warn);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_env_value_is_an_env_error() {
        Jail::expect_with(|jail| {
            jail.set_env("GAZETAG_LOGGING__LEVEL", "loud");

            let mut loader = ConfigLoader::new();
            let result = loader.load_env();
            assert!(
                matches!(&result, Err(ConfigError::EnvLoadError(_))),
                "unexpected result: {:?}",
                result.map(|_| ())
            );

            // The rejected variables are not merged.
            let config = loader.extract().map_err(|e| e.to_string())?;
            assert_eq!(config.logging.level, LogLevel::Info);
            Ok(())
        });
    }

    #[test]
    fn test_console_logging_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("GAZETAG_LOGGING__CONSOLE", "false");

            let config = ConfigLoader::new()
                .load_env()
                .map_err(|e| e.to_string())?
                .extract()
                .map_err(|e| e.to_string())?;

            assert!(!config.logging.console);
            Ok(())
        });
    }

    #[test]
    fn test_default_log_level_yields_to_file_and_env() {
        Jail::expect_with(|jail| {
            let config = ConfigLoader::with_default_log_level(LogLevel::Warn)
                .extract()
                .map_err(|e| e.to_string())?;
            assert_eq!(config.logging.level, LogLevel::Warn);

            jail.create_file("gazetag.toml", "[logging]\nlevel = \"debug\"\n")?;
            let config = ConfigLoader::with_default_log_level(LogLevel::Warn)
                .load_file("gazetag.toml")
                .map_err(|e| e.to_string())?
                .extract()
                .map_err(|e| e.to_string())?;
            assert_eq!(config.logging.level, LogLevel::Debug);

            jail.set_env("GAZETAG_LOGGING__LEVEL", "trace");
            let config = ConfigLoader::with_default_log_level(LogLevel::Warn)
                .load_env()
                .map_err(|e| e.to_string())?
                .extract()
                .map_err(|e| e.to_string())?;
            assert_eq!(config.logging.level, LogLevel::Trace);
            Ok(())
        });
    }

    #[test]
    fn test_loader_finds_default_files() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "gazetag.yaml",
                "gazetteer:\n  case_insensitive: true\nlogging:\n  format: json\n",
            )?;

            let config = ConfigLoader::new()
                .load_default_files()
                .extract()
                .map_err(|e| e.to_string())?;

            assert!(config.gazetteer.case_insensitive);
            assert_eq!(config.logging.format, LogFormat::Json);
            Ok(())
        });
    }

    #[test]
    fn test_loader_rejects_missing_and_unsupported_files() {
        let mut loader = ConfigLoader::new();
        assert!(matches!(
            loader.load_file("/no/such/gazetag.toml"),
            Err(ConfigError::FileLoadError(_))
        ));

        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        assert!(matches!(
            loader.load_file(file.path()),
            Err(ConfigError::FileLoadError(_))
        ));

        // A failed load leaves the defaults intact.
        let config = loader.extract().unwrap();
        assert_eq!(config, GazetagConfig::default());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert!("verbose".parse::<LogLevel>().is_err());
    }
}
