use crate::error::HotelError;
use crate::services::RoomRegistry;
use actix_web::{web, HttpResponse};

pub async fn view_rooms(registry: web::Data<RoomRegistry>) -> Result<HttpResponse, HotelError> {
    let rooms = registry.list_rooms().await.map_err(|e| {
        log::warn!("could not view rooms: {}", e);
        e
    })?;
    Ok(HttpResponse::Ok().json(rooms))
}
