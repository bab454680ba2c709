pub mod error;
pub mod rules;
pub mod schema;
pub mod validator;

// Re-export commonly used types
pub use error::ValidationError;
pub use schema::PaymentColumns;
pub use validator::Validator;
