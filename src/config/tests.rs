// src/config/tests.rs

#[cfg(test)]
mod config_tests {
    use crate::config::{Config, ReportConfig, SeriesConfig};
    use crate::kernel::series::SERIES_TERM_CAP;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let file_name = format!("core-math-{}-{}.json", name, std::process::id());
        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, contents).expect("write temp config");
        path
    }

    #[test_log::test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.series.max_terms, SERIES_TERM_CAP);
        assert_eq!(config.report.samples, 257);
        assert!(config.report.functions.is_empty());
    }

    #[test_log::test]
    fn test_partial_file_keeps_other_defaults() {
        let path = write_temp("partial", r#"{ "series": { "max_terms": 40 } }"#);
        let config = Config::load(&path).expect("load partial config");
        std::fs::remove_file(&path).ok();

        assert_eq!(config.series, SeriesConfig { max_terms: 40 });
        assert_eq!(config.report, ReportConfig::default());
    }

    #[test_log::test]
    fn test_full_file() {
        let path = write_temp(
            "full",
            r#"{
                "series": { "max_terms": 100 },
                "report": { "samples": 11, "tolerance": 0.001, "functions": ["sin", "atan"] }
            }"#,
        );
        let config = Config::load(&path).expect("load full config");
        std::fs::remove_file(&path).ok();

        assert_eq!(config.report.samples, 11);
        assert_eq!(config.report.tolerance, 0.001);
        assert_eq!(config.report.functions, vec!["sin".to_string(), "atan".to_string()]);
    }

    #[test_log::test]
    fn test_malformed_file_is_an_error() {
        let path = write_temp("malformed", "{ series: ");
        let err = Config::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }

    #[test_log::test]
    fn test_missing_file_is_an_error() {
        let err = Config::load("/nonexistent/core-math.json").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }

    #[test_log::test]
    fn test_effective_max_terms_is_capped() {
        assert_eq!(SeriesConfig { max_terms: 0 }.effective_max_terms(), 1);
        assert_eq!(SeriesConfig { max_terms: 25 }.effective_max_terms(), 25);
        assert_eq!(SeriesConfig { max_terms: 10_000 }.effective_max_terms(), SERIES_TERM_CAP);
    }

    #[test_log::test]
    fn test_serializes_round_trip() {
        let config = Config::default();
        let text = serde_json::to_string(&config).expect("serialize");
        let back: Config = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(back, config);
    }
}
