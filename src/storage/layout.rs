use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{StorageError, StorageManager};

pub const LAYOUT_KEY: &str = "tektite-layout";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    pub left_sidebar_collapsed: bool,
    pub right_sidebar_collapsed: bool,
    pub status_bar_height: u32,
}

impl Default for LayoutState {
    fn default() -> Self {
        LayoutState {
            left_sidebar_collapsed: false,
            right_sidebar_collapsed: false,
            status_bar_height: 28,
        }
    }
}

/// Persists the layout preference object under a fixed key. Loads degrade
/// to `None`, clears are best effort; only saves surface an error, and that
/// error is distinguishable from the raw adapter failure underneath it.
#[derive(Clone)]
pub struct LayoutStorage {
    storage: StorageManager,
}

impl LayoutStorage {
    pub fn new(storage: StorageManager) -> Self {
        LayoutStorage { storage }
    }

    pub async fn save(&self, state: &LayoutState) -> Result<(), StorageError> {
        self.storage
            .set_json(LAYOUT_KEY, state)
            .await
            .map_err(|err| {
                warn!("failed to save layout state: {err}");
                StorageError::LayoutSave(Box::new(err))
            })
    }

    pub async fn load(&self) -> Option<LayoutState> {
        self.storage.get_json(LAYOUT_KEY).await
    }

    pub async fn clear(&self) {
        self.storage.remove(LAYOUT_KEY).await;
    }
}
