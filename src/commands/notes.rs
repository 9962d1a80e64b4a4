use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::bridge::CommandExecutor;
use crate::domain::{CreateNoteRequest, Note, NoteInfo};
use crate::ipc::AppError;

#[derive(Serialize)]
struct FilePathArgs<'a> {
    #[serde(rename = "filePath")]
    file_path: &'a str,
}

#[derive(Serialize)]
struct WriteNoteArgs<'a> {
    #[serde(rename = "filePath")]
    file_path: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct CreateNoteArgs<'a> {
    request: &'a CreateNoteRequest,
}

#[derive(Serialize)]
struct ListNotesArgs<'a> {
    #[serde(rename = "directoryPath")]
    directory_path: &'a str,
}

/// Typed client for the native file commands. Stateless apart from the
/// injected executor; every failure path surfaces a normalized `AppError`.
#[derive(Clone)]
pub struct NoteClient {
    executor: Arc<dyn CommandExecutor>,
}

impl NoteClient {
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        NoteClient { executor }
    }

    pub async fn read_note(&self, file_path: &str) -> Result<Note, AppError> {
        self.call("read_note", &FilePathArgs { file_path }).await
    }

    pub async fn write_note(&self, file_path: &str, content: &str) -> Result<(), AppError> {
        self.call_unit("write_note", &WriteNoteArgs { file_path, content })
            .await
    }

    pub async fn create_note(&self, request: &CreateNoteRequest) -> Result<Note, AppError> {
        self.call("create_note", &CreateNoteArgs { request }).await
    }

    pub async fn delete_note(&self, file_path: &str) -> Result<(), AppError> {
        self.call_unit("delete_note", &FilePathArgs { file_path })
            .await
    }

    pub async fn list_notes(&self, directory_path: &str) -> Result<Vec<NoteInfo>, AppError> {
        self.call("list_notes", &ListNotesArgs { directory_path })
            .await
    }

    pub async fn file_exists(&self, file_path: &str) -> Result<bool, AppError> {
        self.call("file_exists", &FilePathArgs { file_path }).await
    }

    pub async fn get_file_info(&self, file_path: &str) -> Result<NoteInfo, AppError> {
        self.call("get_file_info", &FilePathArgs { file_path }).await
    }

    async fn call<A, T>(&self, command: &str, args: &A) -> Result<T, AppError>
    where
        A: Serialize,
        T: DeserializeOwned,
    {
        let args = serde_json::to_value(args).map_err(|err| {
            AppError::unknown(format!("Failed to encode {command} arguments: {err}"))
        })?;
        match self.executor.invoke(command, args).await {
            Ok(value) => serde_json::from_value(value)
                .map_err(|err| AppError::unknown(format!("Malformed {command} response: {err}"))),
            Err(raw) => Err(AppError::from_rejection(raw)),
        }
    }

    // Unit-result commands ignore whatever payload the host returns.
    async fn call_unit<A: Serialize>(&self, command: &str, args: &A) -> Result<(), AppError> {
        let _: serde_json::Value = self.call(command, args).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_path_args_use_camel_case() {
        let args = serde_json::to_value(FilePathArgs {
            file_path: "/vault/a.md",
        })
        .unwrap();
        assert_eq!(args, json!({ "filePath": "/vault/a.md" }));
    }

    #[test]
    fn write_args_carry_content() {
        let args = serde_json::to_value(WriteNoteArgs {
            file_path: "/vault/a.md",
            content: "# A",
        })
        .unwrap();
        assert_eq!(args, json!({ "filePath": "/vault/a.md", "content": "# A" }));
    }

    #[test]
    fn create_args_nest_the_request() {
        let request = CreateNoteRequest {
            path: "/vault/b.md".to_string(),
            title: "B".to_string(),
            content: None,
        };
        let args = serde_json::to_value(CreateNoteArgs { request: &request }).unwrap();
        assert_eq!(
            args,
            json!({ "request": { "path": "/vault/b.md", "title": "B", "content": null } })
        );
    }
}
