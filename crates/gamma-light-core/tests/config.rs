mod tests {
    use gamma_light_core::{
        AdapterConfig, ConfigError, DEFAULT_MAX_BRIGHTNESS, DeviceId, GAMMA_ADJUST_BOUNDS,
        GAMMA_SETUP_BOUNDS, SCHEMA_VERSION, StoredConfig,
    };

    fn porch() -> DeviceId {
        DeviceId::new("light.porch").unwrap()
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let config = AdapterConfig::new(porch(), 0, 1.0);
        assert_eq!(config.max_brightness, DEFAULT_MAX_BRIGHTNESS);
        assert_eq!(config.validate(GAMMA_SETUP_BOUNDS), Ok(()));
        assert_eq!(config.validate(GAMMA_ADJUST_BOUNDS), Ok(()));
    }

    #[test]
    fn test_validate_rejects_floor_at_hundred() {
        let config = AdapterConfig::new(porch(), 100, 1.0);
        assert_eq!(
            config.validate(GAMMA_SETUP_BOUNDS),
            Err(ConfigError::MinBrightnessOutOfRange(100))
        );
    }

    #[test]
    fn test_validate_rejects_bad_max_brightness() {
        let mut config = AdapterConfig::new(porch(), 0, 1.0);
        config.max_brightness = 0;
        assert_eq!(
            config.validate(GAMMA_SETUP_BOUNDS),
            Err(ConfigError::MaxBrightnessOutOfRange(0))
        );
        config.max_brightness = 101;
        assert_eq!(
            config.validate(GAMMA_SETUP_BOUNDS),
            Err(ConfigError::MaxBrightnessOutOfRange(101))
        );
    }

    #[test]
    fn test_gamma_bounds_differ_between_flows() {
        // 4.0 is fine for initial setup but outside the adjustment range.
        let config = AdapterConfig::new(porch(), 0, 4.0);
        assert_eq!(config.validate(GAMMA_SETUP_BOUNDS), Ok(()));
        assert_eq!(
            config.validate(GAMMA_ADJUST_BOUNDS),
            Err(ConfigError::GammaOutOfRange(4.0))
        );

        let config = AdapterConfig::new(porch(), 0, 0.05);
        assert_eq!(
            config.validate(GAMMA_SETUP_BOUNDS),
            Err(ConfigError::GammaOutOfRange(0.05))
        );
    }

    #[test]
    fn test_migrate_version_one() {
        let json = br#"{"version":1,"light_id":"light.porch","min_brightness":10,"gamma":1.5}"#;
        let (mut stored, _) = serde_json_core::de::from_slice::<StoredConfig>(json).unwrap();
        assert_eq!(stored.version, 1);
        assert_eq!(stored.max_brightness, None);

        assert_eq!(stored.migrate(), Ok(true));
        assert_eq!(stored.version, SCHEMA_VERSION);
        assert_eq!(stored.min_brightness, 10);
        assert_eq!(stored.gamma, 1.5);
        assert_eq!(stored.max_brightness, Some(100));

        let json = serde_json_core::ser::to_string::<_, 256>(&stored).unwrap();
        assert_eq!(
            json.as_str(),
            r#"{"version":2,"light_id":"light.porch","min_brightness":10,"gamma":1.5,"max_brightness":100}"#
        );
    }

    #[test]
    fn test_migrate_current_version_is_a_no_op() {
        let mut stored = StoredConfig {
            version: SCHEMA_VERSION,
            light_id: porch(),
            min_brightness: 10,
            gamma: 1.5,
            max_brightness: Some(80),
        };
        let before = stored.clone();
        assert_eq!(stored.migrate(), Ok(false));
        assert_eq!(stored, before);
    }

    #[test]
    fn test_migrate_rejects_newer_versions() {
        let mut stored = StoredConfig {
            version: 3,
            light_id: porch(),
            min_brightness: 0,
            gamma: 1.0,
            max_brightness: Some(100),
        };
        assert_eq!(stored.migrate(), Err(ConfigError::UnsupportedVersion(3)));
    }

    #[test]
    fn test_to_config_requires_current_version() {
        let mut stored = StoredConfig {
            version: 1,
            light_id: porch(),
            min_brightness: 10,
            gamma: 1.5,
            max_brightness: None,
        };
        assert_eq!(
            stored.to_config(),
            Err(ConfigError::UnsupportedVersion(1))
        );

        stored.migrate().unwrap();
        let config = stored.to_config().unwrap();
        assert_eq!(config.light_id, porch());
        assert_eq!(config.min_brightness, 10);
        assert_eq!(config.gamma, 1.5);
        assert_eq!(config.max_brightness, 100);
    }
}
