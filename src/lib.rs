pub mod app_state;
pub mod endpoints;
pub mod utils;
