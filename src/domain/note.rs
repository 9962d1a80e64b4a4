use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Note {
    pub path: String,
    pub title: String,
    pub content: String,
    pub size: u64,
    pub created_at: Option<String>,
    pub modified_at: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NoteInfo {
    pub path: String,
    pub title: String,
    pub size: u64,
    pub modified_at: Option<String>,
    pub is_directory: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateNoteRequest {
    pub path: String,
    pub title: String,
    pub content: Option<String>,
}

impl Note {
    pub fn file_name(&self) -> Option<&str> {
        Path::new(&self.path).file_name().and_then(|name| name.to_str())
    }

    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.path).extension().and_then(|ext| ext.to_str())
    }

    pub fn is_markdown(&self) -> bool {
        matches!(self.extension(), Some("md") | Some("markdown"))
    }
}
