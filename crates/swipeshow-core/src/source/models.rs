use std::path::PathBuf;

use chrono::{DateTime, Local};
use uuid::Uuid;

/// A library asset wrapped with an identifier unique to this load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: Uuid,
    pub path: PathBuf,
    /// Creation time, or modification time where creation is unavailable
    pub created: DateTime<Local>,
}

impl Photo {
    pub fn new(path: PathBuf, created: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            path,
            created,
        }
    }

    /// File name for display
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
