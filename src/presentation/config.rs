//! User-tunable presentation settings: key map and named styles

pub mod keybindings;
pub mod styles;

pub use keybindings::KeyBindings;
pub use styles::Styles;
