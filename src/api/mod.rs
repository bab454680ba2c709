pub mod credentials;
pub mod environment;
pub mod error;
pub mod gateway;
pub mod paypal;
pub mod templates;
pub mod types;

// Re-export commonly used types
pub use credentials::{Credentials, Secret};
pub use environment::Environment;
pub use error::ApiError;
pub use gateway::PayoutGateway;
pub use paypal::{ClientConfig, PaypalClient};
pub use templates::MessageTemplates;
pub use types::{ApiErrorBody, PayoutItem, PayoutReceipt, PayoutRequest};
