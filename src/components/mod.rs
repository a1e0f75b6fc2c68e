pub mod cards;
pub mod header;
pub mod modals;
