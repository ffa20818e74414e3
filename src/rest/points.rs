use super::error::RestApiError;
use crate::lot::LotService;
use crate::Error;
use actix_web::http::header::{
    ContentType, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use actix_web::middleware::DefaultHeaders;
use actix_web::web::{self, Data, ServiceConfig};
use actix_web::HttpResponse;
use serde::Serialize;
use tracing::error;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(
        web::resource("/api/points")
            .route(web::get().to(get))
            .default_service(web::to(method_not_allowed))
            .wrap(
                DefaultHeaders::new()
                    .add((ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
                    .add((ACCESS_CONTROL_ALLOW_METHODS, "GET")),
            ),
    );
}

pub async fn get(service: Data<LotService>) -> Result<HttpResponse, RestApiError> {
    let projection = service.points().await.map_err(|e| match e {
        Error::MissingColumn(column) => RestApiError::missing_column(column),
        _ => RestApiError::source_unavailable(),
    })?;
    json_response(&projection.points)
}

fn json_response<T: Serialize>(value: &T) -> Result<HttpResponse, RestApiError> {
    let body = serde_json::to_string(value).map_err(|e| {
        error!(error = %e, "Failed to serialize lot points");
        RestApiError::serialization()
    })?;
    Ok(HttpResponse::Ok()
        .insert_header(ContentType::json())
        .body(body))
}

async fn method_not_allowed() -> Result<HttpResponse, RestApiError> {
    Err(RestApiError::method_not_allowed())
}
