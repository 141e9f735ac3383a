//! # Params Module Unit Tests
//!
//! Exercises the parameter schema: defaults, required fields, choices sets,
//! and the unsupported-parameter rejection.

use ansible_behave::params::{Language, ModuleParams, OutputFormat};
use std::path::PathBuf;

#[cfg(test)]
mod schema_tests {
    use super::*;

    #[test]
    fn test_minimal_args_apply_defaults() {
        let params = ModuleParams::from_json(r#"{"path": "/home/foo/tests"}"#).unwrap();

        assert_eq!(params.path, PathBuf::from("/home/foo/tests"));
        assert!(params.name.is_none());
        assert_eq!(params.language, Language::Fr);
        assert!(params.tags.is_none());
        assert_eq!(params.output_format, OutputFormat::Pretty);
        assert_eq!(params.output_name, "{feature}_result");
        assert_eq!(params.output_dir, PathBuf::from("/tmp"));
    }

    #[test]
    fn test_full_args_parse() {
        let params = ModuleParams::from_json(
            r#"{
                "path": "/home/foo/tests",
                "name": "base.feature",
                "language": "en",
                "tags": "@wip,@slow",
                "output_format": "json.pretty",
                "output_name": "{feature}.output",
                "output_dir": "/var/tmp"
            }"#,
        )
        .unwrap();

        assert_eq!(params.name.as_deref(), Some("base.feature"));
        assert_eq!(params.language, Language::En);
        assert_eq!(params.tags.as_deref(), Some("@wip,@slow"));
        assert_eq!(params.output_format, OutputFormat::JsonPretty);
        assert_eq!(params.output_name, "{feature}.output");
        assert_eq!(params.output_dir, PathBuf::from("/var/tmp"));
    }

    #[test]
    fn test_missing_path_is_rejected() {
        let err = ModuleParams::from_json(r#"{"name": "base.feature"}"#).unwrap_err();
        assert!(format!("{err:#}").contains("path"));
    }

    #[test]
    fn test_language_outside_choices_is_rejected() {
        let err =
            ModuleParams::from_json(r#"{"path": "/tests", "language": "de"}"#).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("unknown variant"));
        assert!(msg.contains("de"));
    }

    #[test]
    fn test_output_format_outside_choices_is_rejected() {
        let err =
            ModuleParams::from_json(r#"{"path": "/tests", "output_format": "html"}"#).unwrap_err();
        assert!(format!("{err:#}").contains("unknown variant"));
    }

    #[test]
    fn test_unsupported_parameter_is_rejected() {
        let err = ModuleParams::from_json(r#"{"path": "/tests", "bogus": 1, "extra": true}"#)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Unsupported parameters for (behave) module"));
        assert!(msg.contains("bogus, extra"));
    }

    #[test]
    fn test_ansible_internal_keys_are_ignored() {
        let params = ModuleParams::from_json(
            r#"{
                "path": "/tests",
                "_ansible_check_mode": false,
                "_ansible_no_log": false,
                "_ansible_verbosity": 2
            }"#,
        )
        .unwrap();

        assert_eq!(params.path, PathBuf::from("/tests"));
    }

    #[test]
    fn test_non_object_arguments_are_rejected() {
        let err = ModuleParams::from_json(r#"["path"]"#).unwrap_err();
        assert!(format!("{err:#}").contains("JSON object"));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = ModuleParams::from_json("path=/tests").unwrap_err();
        assert!(format!("{err:#}").contains("not valid JSON"));
    }
}

#[cfg(test)]
mod feature_name_tests {
    use super::*;

    #[test]
    fn test_feature_name_present() {
        let params =
            ModuleParams::from_json(r#"{"path": "/tests", "name": "base.feature"}"#).unwrap();
        assert_eq!(params.feature_name(), Some("base.feature"));
    }

    #[test]
    fn test_feature_name_absent() {
        let params = ModuleParams::from_json(r#"{"path": "/tests"}"#).unwrap();
        assert_eq!(params.feature_name(), None);
    }

    #[test]
    fn test_empty_feature_name_counts_as_absent() {
        let params = ModuleParams::from_json(r#"{"path": "/tests", "name": ""}"#).unwrap();
        assert_eq!(params.feature_name(), None);
    }
}
