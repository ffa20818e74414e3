use actix_web::get;
use actix_web::web::Json;
use serde_json::{json, Value};

#[get("/health")]
pub async fn get() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod test {
    use crate::lot::LotService;
    use crate::test::MockSource;
    use actix_web::http::StatusCode;
    use actix_web::test::TestRequest;
    use actix_web::web::Data;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    #[test]
    async fn get_status() {
        let app = test::init_service(App::new().service(super::get)).await;
        let req = TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(StatusCode::OK, res.status());
        let body: Value = test::read_body_json(res).await;
        assert_eq!(json!({ "status": "ok" }), body);
    }

    #[test]
    async fn get_ignores_sheet_state() {
        let source = Arc::new(MockSource::unavailable());
        let app = test::init_service(
            App::new()
                .app_data(Data::new(LotService::new(source.clone(), "Sheet1")))
                .configure(crate::rest::configure),
        )
        .await;
        let req = TestRequest::get().uri("/health").to_request();
        let res: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json!({ "status": "ok" }), res);
        assert!(source.calls().is_empty());
    }
}
