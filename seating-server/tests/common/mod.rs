#![allow(dead_code)]

use seating_server::{Config, DbService, SeatingManager, ServerState};
use tempfile::TempDir;

/// Seating engine over a fresh on-disk database
pub struct TestEnv {
    pub seating: SeatingManager,
    pub dir: TempDir,
}

impl TestEnv {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seating.db");
        let db = DbService::new(path.to_str().unwrap()).await.unwrap();
        Self {
            seating: SeatingManager::new(db),
            dir,
        }
    }

    pub fn state(&self) -> ServerState {
        let config = Config::with_overrides(self.dir.path().to_string_lossy(), 0);
        ServerState::new(config, self.seating.clone())
    }
}
