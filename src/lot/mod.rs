pub mod header;
pub mod model;
pub mod projector;
pub mod service;

pub use header::Column;
pub use header::ColumnIndices;
pub use model::LotPoint;
pub use projector::Projection;
pub use service::LotService;
