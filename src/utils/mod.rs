pub mod validate;

pub use validate::{validate_email, validate_phone};
