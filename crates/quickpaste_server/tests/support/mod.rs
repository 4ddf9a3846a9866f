//! Shared integration-test server bootstrap helpers.

use axum_test::TestServer;
use quickpaste_server::{create_app, AppState, Config, PasteStore};
use std::path::Path;
use tempfile::TempDir;

pub(crate) fn test_config_for_data_path(data_path: &Path) -> Config {
    Config {
        data_path: data_path.to_str().expect("data path").to_string(),
        port: 0,
        max_paste_size: 50_000,
        page_size: 20,
    }
}

pub(crate) fn test_server_for_config(config: Config) -> TestServer {
    let store =
        PasteStore::open(config.data_path.clone(), config.max_paste_size).expect("open store");
    let state = AppState::new(config, store);
    let app = create_app(state, false);
    TestServer::new(app).expect("server")
}

pub(crate) fn setup_test_server() -> (TestServer, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir");
    let data_path = temp_dir.path().join("pastes.json");
    let config = test_config_for_data_path(&data_path);
    (test_server_for_config(config), temp_dir)
}
