//! Boundary layer for the tektite note-taking app: a typed client for the
//! native file commands and an adapter-based preference store.
//!
//! The native host executes the actual file operations; this crate owns the
//! seam to it. [`commands::NoteClient`] issues the commands and normalizes
//! every failure into [`ipc::AppError`]. [`storage::StorageManager`] keeps
//! UI preferences behind a swappable [`storage::StorageAdapter`].

pub mod bridge;
pub mod commands;
pub mod domain;
pub mod ipc;
pub mod paths;
pub mod storage;

pub use bridge::CommandExecutor;
pub use commands::NoteClient;
pub use domain::{CreateNoteRequest, Note, NoteInfo};
pub use ipc::{AppError, ErrorKind};
pub use storage::{
    FsStorageAdapter, LayoutState, LayoutStorage, StorageAdapter, StorageError, StorageHealth,
    StorageManager,
};
