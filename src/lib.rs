pub mod application;
pub mod components;
pub mod contact;
pub mod form;
pub mod prelude;

pub use application::{ContactApplication, log_submission};

#[cfg(test)]
mod test_public_api;
