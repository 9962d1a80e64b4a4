use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use tektite_core::{AppError, CommandExecutor, CreateNoteRequest, ErrorKind, Note, NoteClient};

struct MockExecutor {
    result: Result<Value, Value>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockExecutor {
    fn ok(value: Value) -> Arc<Self> {
        Arc::new(MockExecutor {
            result: Ok(value),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn err(value: Value) -> Arc<Self> {
        Arc::new(MockExecutor {
            result: Err(value),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandExecutor for MockExecutor {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, Value> {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), args));
        self.result.clone()
    }
}

fn sample_listing() -> Value {
    json!([
        {
            "path": "/test/folder/note1.md",
            "title": "Note 1",
            "size": 1024,
            "modified_at": "1703251200",
            "is_directory": false
        },
        {
            "path": "/test/folder/subfolder",
            "title": "subfolder",
            "size": 0,
            "modified_at": "1703424000",
            "is_directory": true
        }
    ])
}

#[tokio::test]
async fn list_notes_returns_typed_entries() {
    let executor = MockExecutor::ok(sample_listing());
    let client = NoteClient::new(executor.clone());

    let notes = client.list_notes("/test/folder").await.unwrap();

    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].path, "/test/folder/note1.md");
    assert_eq!(notes[0].title, "Note 1");
    assert!(!notes[0].is_directory);
    assert!(notes[1].is_directory);

    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "list_notes");
    assert_eq!(calls[0].1, json!({ "directoryPath": "/test/folder" }));
}

#[tokio::test]
async fn empty_directory_resolves_to_empty_vec() {
    let executor = MockExecutor::ok(json!([]));
    let client = NoteClient::new(executor);

    let notes = client.list_notes("/empty/folder").await.unwrap();
    assert!(notes.is_empty());
}

#[tokio::test]
async fn directory_path_is_forwarded_verbatim() {
    let paths = [
        "/home/user/notes",
        r"C:\Users\User\Notes",
        "./relative/path",
        "../parent/folder",
        "simple-folder-name",
    ];
    let executor = MockExecutor::ok(json!([]));
    let client = NoteClient::new(executor.clone());

    for path in paths {
        client.list_notes(path).await.unwrap();
    }

    let calls = executor.calls();
    assert_eq!(calls.len(), paths.len());
    for (call, path) in calls.iter().zip(paths) {
        assert_eq!(call.1, json!({ "directoryPath": path }));
    }
}

#[tokio::test]
async fn string_rejection_becomes_unknown_error() {
    let executor = MockExecutor::err(json!("Directory not found"));
    let client = NoteClient::new(executor);

    let err = client.list_notes("/invalid/path").await.unwrap_err();
    assert_eq!(err, AppError::unknown("Directory not found"));
}

#[tokio::test]
async fn typed_rejection_passes_through() {
    let executor = MockExecutor::err(json!({
        "type": "PermissionDenied",
        "message": "Access denied to directory"
    }));
    let client = NoteClient::new(executor);

    let err = client.list_notes("/restricted/path").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::PermissionDenied);
    assert_eq!(err.message, "Access denied to directory");
}

#[tokio::test]
async fn create_note_wraps_message_only_rejection() {
    let executor = MockExecutor::err(json!({ "message": "exists" }));
    let client = NoteClient::new(executor.clone());
    let request = CreateNoteRequest {
        path: "/a/b.md".to_string(),
        title: "B".to_string(),
        content: None,
    };

    let err = client.create_note(&request).await.unwrap_err();
    assert_eq!(err, AppError::unknown("exists"));

    let calls = executor.calls();
    assert_eq!(calls[0].0, "create_note");
    assert_eq!(
        calls[0].1,
        json!({ "request": { "path": "/a/b.md", "title": "B", "content": null } })
    );
}

#[tokio::test]
async fn read_note_decodes_full_note() {
    let executor = MockExecutor::ok(json!({
        "path": "/vault/daily.md",
        "title": "daily",
        "content": "# Daily\n",
        "size": 8,
        "created_at": "1703251200",
        "modified_at": null
    }));
    let client = NoteClient::new(executor.clone());

    let note: Note = client.read_note("/vault/daily.md").await.unwrap();
    assert_eq!(note.title, "daily");
    assert_eq!(note.size, 8);
    assert_eq!(note.created_at.as_deref(), Some("1703251200"));
    assert_eq!(note.modified_at, None);

    assert_eq!(
        executor.calls()[0],
        (
            "read_note".to_string(),
            json!({ "filePath": "/vault/daily.md" })
        )
    );
}

#[tokio::test]
async fn write_note_ignores_success_payload() {
    let executor = MockExecutor::ok(json!(null));
    let client = NoteClient::new(executor.clone());
    client.write_note("/vault/a.md", "# A").await.unwrap();

    // Hosts that return a body instead of null are tolerated too.
    let chatty = MockExecutor::ok(json!({ "ok": true }));
    let client = NoteClient::new(chatty);
    client.write_note("/vault/a.md", "# A").await.unwrap();

    assert_eq!(
        executor.calls()[0].1,
        json!({ "filePath": "/vault/a.md", "content": "# A" })
    );
}

#[tokio::test]
async fn delete_note_surfaces_file_not_found() {
    let executor = MockExecutor::err(json!({
        "type": "FileNotFound",
        "message": "File not found: /vault/gone.md"
    }));
    let client = NoteClient::new(executor);

    let err = client.delete_note("/vault/gone.md").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::FileNotFound);
}

#[tokio::test]
async fn file_exists_resolves_false_without_error() {
    let executor = MockExecutor::ok(json!(false));
    let client = NoteClient::new(executor);
    assert!(!client.file_exists("/vault/missing.md").await.unwrap());
}

#[tokio::test]
async fn malformed_success_payload_reports_unknown() {
    let executor = MockExecutor::ok(json!(12345));
    let client = NoteClient::new(executor);

    let err = client.get_file_info("/vault/a.md").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unknown);
    assert!(err.message.contains("get_file_info"));
}

#[tokio::test]
async fn null_rejection_yields_generic_message() {
    let executor = MockExecutor::err(json!(null));
    let client = NoteClient::new(executor);

    let err = client.read_note("/vault/a.md").await.unwrap_err();
    assert_eq!(err, AppError::unknown("An unknown error occurred"));
}
