pub mod layout;
pub mod particles;
pub mod reveal;
