#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use ticklist::libs::config::{Config, CONFIG_FILE_NAME, DEFAULT_TASK_FILE_NAME};
    use ticklist::libs::data_storage::DataStorage;
    use ticklist::libs::task::Variant;

    /// Gives every test its own data directory without touching `HOME`.
    struct ConfigTestContext {
        temp_dir: TempDir,
        storage: DataStorage,
        config_path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::with_base(temp_dir.path().join("ticklist"));
            let config_path = storage.get_path(CONFIG_FILE_NAME).unwrap();
            ConfigTestContext {
                temp_dir,
                storage,
                config_path,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.file.is_none());
        assert_eq!(config.variant, Variant::Rich);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            file: Some(ctx.temp_dir.path().join("work.txt")),
            variant: Variant::Plain,
        };
        config.save_to(&ctx.config_path).unwrap();

        let read_config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(read_config, config);

        let json = fs::read_to_string(&ctx.config_path).unwrap();
        assert!(json.contains("\"variant\": \"plain\""));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_fields_use_defaults(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.config_path, "{}").unwrap();
        assert_eq!(Config::read_from(&ctx.config_path).unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_json_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.config_path, "{ not json").unwrap();
        assert!(Config::read_from(&ctx.config_path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_task_file_defaults_to_data_directory(ctx: &mut ConfigTestContext) {
        let path = Config::default().task_file_path(&ctx.storage).unwrap();
        assert_eq!(path, ctx.temp_dir.path().join("ticklist").join(DEFAULT_TASK_FILE_NAME));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_configured_task_file_wins(ctx: &mut ConfigTestContext) {
        let custom = ctx.temp_dir.path().join("elsewhere").join("list.txt");
        let config = Config {
            file: Some(custom.clone()),
            variant: Variant::Rich,
        };
        assert_eq!(config.task_file_path(&ctx.storage).unwrap(), custom);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_data_storage_creates_base_directory(ctx: &mut ConfigTestContext) {
        let storage = DataStorage::with_base(ctx.temp_dir.path().join("fresh"));
        let path = storage.get_path("x.txt").unwrap();
        assert!(path.parent().unwrap().is_dir());
    }
}
