//! Tests for the logger module

use crate::logger::config::*;

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_default_config_creation() {
        let config = LoggerConfig::default();
        assert!(config.console.colored);
        assert_eq!(config.console.format, LogFormat::Full);
        assert_eq!(config.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_level_rejected() {
        let config = LoggerConfig::default().with_level("chatty");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_filter_directive_accepted() {
        let config = LoggerConfig::new(
            ConsoleConfig::default(),
            "http_alarm_callback=debug,reqwest=warn",
        );
        assert!(config.is_ok());
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::default().as_str(), "full");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn property_known_levels_validate(
            level in prop::sample::select(vec!["trace", "debug", "info", "warn", "error"]),
            upper in any::<bool>(),
        ) {
            let level = if upper { level.to_uppercase() } else { level.to_string() };
            let config = LoggerConfig::default().with_level(level);
            prop_assert!(config.validate().is_ok());
            prop_assert!(config.parse_level().is_ok());
        }

        #[test]
        fn property_format_round_trips_through_str(
            format in prop::sample::select(vec![LogFormat::Full, LogFormat::Compact, LogFormat::Json]),
        ) {
            prop_assert_eq!(format.as_str().parse::<LogFormat>().unwrap(), format);
        }
    }
}
