pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::{AppConfig, OccupancyPolicy};
pub use error::{HotelError, Result};
pub use models::guest::{CheckIn, Guest};
pub use models::room::{Room, RoomStatus};
pub use services::{GuestLifecycle, RoomRegistry};
