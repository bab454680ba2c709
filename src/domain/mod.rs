pub mod amount;
pub mod cell;
pub mod currency;
pub mod error;
pub mod normalize;
pub mod payment;
pub mod profile;

// Re-export commonly used types
pub use amount::Amount;
pub use cell::Cell;
pub use currency::Currency;
pub use error::DomainError;
pub use normalize::{normalize, title_case};
pub use payment::{BatchId, ItemId, Payment, PaymentRow};
pub use profile::Profile;
