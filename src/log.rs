use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
    Error,
};
use time::OffsetDateTime;
use tracing::{info, warn};

const SLOW_REQUEST_SEC: f64 = 5.0;

pub async fn log_request(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let req_method = req.method().as_str().to_string();
    let req_path = req.path().to_string();
    let req_time = OffsetDateTime::now_utc();
    let res = next.call(req).await?;
    let res_status = res.status().as_u16();
    let res_time_sec = (OffsetDateTime::now_utc() - req_time).as_seconds_f64();
    if res_time_sec > SLOW_REQUEST_SEC {
        warn!(req_method, req_path, res_status, res_time_sec, "Slow request");
    } else {
        info!(req_method, req_path, res_status, res_time_sec, "Request");
    }
    Ok(res)
}
