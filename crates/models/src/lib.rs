pub mod reservation;
pub mod serde_helpers;
pub mod validation;
