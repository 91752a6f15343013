pub mod app;
pub mod config;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod remote;
pub mod state;
pub mod sync;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use remote::{AdjustmentStore, RemoteStore};
pub use state::AppState;
