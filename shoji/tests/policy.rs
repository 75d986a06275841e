#[cfg(test)]
mod policy_tests {
    use shoji::Policy;
    use shoji::Spacing;
    use shoji::StaticConfig;
    use std::sync::Arc;
    use uuid::Uuid;

    #[test]
    fn test_default_policy() {
        let policy = Policy::default();

        assert!(policy.should_ignore("Shell_TrayWnd", "explorer.exe"));
        assert!(policy.should_ignore("SomeClass", "SearchUI"));
        assert!(!policy.should_ignore("Notepad", "notepad.exe"));
        assert!(!policy.should_ignore("shell_traywnd", ""));

        assert_eq!(
            policy.spacing(),
            Spacing {
                inner_gap: 20,
                outer_gap: 20,
            }
        );

        assert!(policy.user_config().is_none());
    }

    #[test]
    fn test_load_policy_document() {
        let path = std::env::temp_dir().join(format!("shoji-test-{}.json", Uuid::new_v4()));
        let document = r#"{
    "ignored_window_classes": ["WMP9MediaBarFlyout"],
    "inner_gap": 10
}"#;
        std::fs::write(&path, document).expect("failed to write policy document");

        let config = StaticConfig::read(&path).expect("failed to read policy document");
        let policy = Policy::from_config(&config);

        let config = Arc::new(config);
        policy.set_user_config(config.clone());

        // document-provided entries replace the built-in class list
        assert!(policy.should_ignore("WMP9MediaBarFlyout", "wmplayer.exe"));
        assert!(!policy.should_ignore("Shell_TrayWnd", "explorer.exe"));

        // the process list and the outer gap fall back to the defaults
        assert!(policy.should_ignore("SomeClass", "StartMenuExperienceHost"));
        assert_eq!(
            policy.spacing(),
            Spacing {
                inner_gap: 10,
                outer_gap: 20,
            }
        );

        let loaded = policy.user_config().expect("user config should be loaded");
        assert!(Arc::ptr_eq(&config, &loaded));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_policy_document() {
        let path = std::env::temp_dir().join(format!("shoji-test-{}.json", Uuid::new_v4()));

        assert!(StaticConfig::read(&path).is_err());
    }
}
