pub mod guests;
pub mod rooms;

pub use guests::GuestLifecycle;
pub use rooms::RoomRegistry;
