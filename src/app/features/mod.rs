pub mod palette;
pub mod session;
pub mod weather;
