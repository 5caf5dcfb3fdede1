pub mod context;

pub use context::{CursorPosition, EditorContext};
