pub mod auth;
pub mod client;
pub mod model;

pub use auth::ServiceAccountKey;
pub use auth::TokenProvider;
pub use client::SheetSource;
pub use client::SheetsClient;
pub use model::Cell;
pub use model::Row;
