use crate::error::HotelError;
use crate::models::guest::CheckIn;
use crate::services::GuestLifecycle;
use actix_web::{web, HttpResponse};

pub const CHECKED_OUT: &str = "Guest checked out successfully";

pub async fn check_in(
    lifecycle: web::Data<GuestLifecycle>,
    body: web::Json<CheckIn>,
) -> Result<HttpResponse, HotelError> {
    let request = body.into_inner();
    let guest = lifecycle.check_in(&request.name, request.room_number).await?;
    Ok(HttpResponse::Created().json(guest))
}

pub async fn check_out(
    lifecycle: web::Data<GuestLifecycle>,
    path: web::Path<String>,
) -> Result<HttpResponse, HotelError> {
    let id = parse_guest_id(&path.into_inner())?;

    if let Err(e) = lifecycle.check_out(id).await {
        log::warn!("couldn't check out guest {}: {}", id, e);
        return Err(e);
    }

    Ok(HttpResponse::Ok().json(CHECKED_OUT))
}

pub async fn check_out_without_id() -> Result<HttpResponse, HotelError> {
    Err(missing_id())
}

fn missing_id() -> HotelError {
    HotelError::Validation("ID not provided".to_string())
}

fn parse_guest_id(raw: &str) -> Result<i64, HotelError> {
    if raw.is_empty() {
        return Err(missing_id());
    }
    raw.parse::<i64>()
        .map_err(|_| HotelError::Validation("invalid format".to_string()))
}
