mod routes;
mod state;

pub use routes::{create_router, SummarizeRequest};
pub use state::AppState;
