pub mod notes;

pub use notes::NoteClient;
