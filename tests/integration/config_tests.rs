//! Configuration loading tests

#[cfg(test)]
mod tests {
    use crate::common::PlatformFixture;
    use devops_authz::config::{StorageBackend, Validate};
    use devops_authz::storage::open_store;
    use devops_authz::{AuthorizationService, AuthzError, Config};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_file_with_seed_file() {
        let mut seed_file = NamedTempFile::new().unwrap();
        seed_file
            .write_all(PlatformFixture::yaml().as_bytes())
            .unwrap();

        let mut config_file = NamedTempFile::new().unwrap();
        write!(
            config_file,
            concat!(
                "storage:\n",
                "  backend: database\n",
                "  database:\n",
                "    url: \"sqlite::memory:\"\n",
                "    max_connections: 1\n",
                "  seed_file: {:?}\n",
                "rbac:\n",
                "  public_project_prefix: \"pub-\"\n",
            ),
            seed_file.path()
        )
        .unwrap();

        let config = Config::from_file(config_file.path()).await.unwrap();
        assert_eq!(config.storage().backend, StorageBackend::Database);

        let store = open_store(config.storage()).await.unwrap();
        assert_eq!(store.backend_name(), "sqlite");

        let service = AuthorizationService::new(store, config.rbac());
        let projects = service.list_authorized_projects("alice").await.unwrap();
        assert_eq!(projects, vec!["pub-docs", "shop"]);
    }

    #[tokio::test]
    async fn test_missing_seed_file_fails_open() {
        let mut config_file = NamedTempFile::new().unwrap();
        config_file
            .write_all(b"storage:\n  seed_file: /nonexistent/seed.yaml\n")
            .unwrap();

        let config = Config::from_file(config_file.path()).await.unwrap();
        let result = open_store(config.storage()).await;
        assert!(matches!(result, Err(AuthzError::Config(_))));
    }

    #[test]
    fn test_invalid_database_url_rejected() {
        let mut config = Config::default();
        config.storage.backend = StorageBackend::Database;
        config.storage.database.url = "mysql://localhost/authz".to_string();

        assert!(config.storage.validate().is_err());
        assert!(config.validate().is_err());

        // The memory backend ignores database settings
        config.storage.backend = StorageBackend::Memory;
        assert!(config.validate().is_ok());
    }
}
