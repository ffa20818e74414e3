use crate::{Error, Result};
use std::env;

const DEFAULT_SHEET_NAME: &str = "Sheet1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com";

pub struct Conf {
    pub sheet_id: String,
    pub credentials: String,
    pub sheet_name: String,
    pub port: u16,
    pub sheets_api_url: String,
}

impl Conf {
    pub fn from_env() -> Result<Conf> {
        Conf::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Conf> {
        let optional = |name: &str| lookup(name).filter(|it| !it.trim().is_empty());
        let required = |name: &str| {
            optional(name).ok_or_else(|| Error::Config(format!("{name} is not set")))
        };
        let port = match optional("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("PORT is not a valid port: {port}")))?,
            None => DEFAULT_PORT,
        };
        Ok(Conf {
            sheet_id: required("GOOGLE_SHEET_ID")?,
            credentials: required("GOOGLE_CREDENTIALS")?,
            sheet_name: optional("SHEET_NAME").unwrap_or(DEFAULT_SHEET_NAME.into()),
            port,
            sheets_api_url: optional("SHEETS_API_URL").unwrap_or(DEFAULT_SHEETS_API_URL.into()),
        })
    }
}
