pub mod error;
pub mod fields;
pub mod logo;
pub mod repo;
pub mod service;
pub mod url;
pub mod validate;

#[cfg(test)]
mod validate_test;
