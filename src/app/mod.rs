mod editor;
mod events;
mod render;
mod state;

// Re-export public types
pub use editor::{EditorField, EditorMode, EditorState};
pub use events::handle_key;
pub use render::render;
pub use state::App;
