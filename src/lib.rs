pub mod analysis;
pub mod app;
pub mod github;
pub mod ui;
pub mod util;
