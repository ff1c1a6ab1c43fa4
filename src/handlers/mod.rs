use crate::error::HotelError;
use actix_web::{web, HttpResponse, Responder};

pub mod guests;
pub mod rooms;

pub const WELCOME: &str = "Welcome to Hotel Management API";

pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(WELCOME)
}

/// Registers every route. Expects `GuestLifecycle` and `RoomRegistry` as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .content_type(|_| true)
            .error_handler(|err, _req| HotelError::Decode(err.to_string()).into()),
    )
    .route("/", web::get().to(index))
    .route("/checkin", web::post().to(guests::check_in))
    .route("/checkout", web::get().to(guests::check_out_without_id))
    .route("/checkout/", web::get().to(guests::check_out_without_id))
    .route("/checkout/{id}", web::get().to(guests::check_out))
    .route("/viewrooms", web::get().to(rooms::view_rooms));
}
