pub mod error;
pub mod health;
pub mod points;

use actix_web::web::ServiceConfig;

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(health::get).configure(points::configure);
}
