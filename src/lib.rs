pub mod api;
pub mod app;
pub mod domain;
pub mod engine;
pub mod io;
pub mod prelude;
pub mod validation;
