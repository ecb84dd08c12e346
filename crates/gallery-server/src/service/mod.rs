//! Service layer: application state and the cached catalog facade.

mod catalog;
mod state;

pub use crate::service::catalog::CatalogService;
pub use crate::service::state::ServiceState;
