pub mod about;
pub mod command_palette;
pub mod helpers;
pub mod text_input;

pub use about::AboutModal;
pub use command_palette::CommandPaletteModal;
pub use text_input::TextInputModal;
