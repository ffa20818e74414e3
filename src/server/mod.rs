use crate::conf::Conf;
use crate::lot::LotService;
use crate::sheets::{ServiceAccountKey, SheetSource, SheetsClient, TokenProvider};
use crate::{log, rest, Result};
use actix_web::middleware::{from_fn, NormalizePath};
use actix_web::{web::Data, App, HttpServer};
use std::sync::Arc;
use tracing::info;

pub async fn run(conf: Conf) -> Result<()> {
    // All the worker threads are sharing a single Sheets client
    let http = reqwest::Client::new();
    let key = ServiceAccountKey::from_json(&conf.credentials)?;
    let auth = TokenProvider::new(key, http.clone())?;
    let client = SheetsClient::new(&conf.sheets_api_url, &conf.sheet_id, http, auth)?;
    let source: Arc<dyn SheetSource> = Arc::new(client);
    let lot_service = Data::new(LotService::new(source, &conf.sheet_name));

    info!(port = conf.port, sheet_name = %conf.sheet_name, "Starting server");

    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(log::log_request))
            .wrap(NormalizePath::trim())
            .app_data(lot_service.clone())
            .configure(rest::configure)
    })
    .bind(("0.0.0.0", conf.port))?
    .run()
    .await?;

    Ok(())
}
