use serde::Deserialize;

pub mod session;
pub mod snapshot;
pub mod stats;

#[derive(Deserialize)]
pub struct PaginationQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: Some(1),
            limit: Some(15),
        }
    }
}
