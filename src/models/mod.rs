pub mod guest;
pub mod room;
