pub mod errors;
pub mod db;
pub mod enums;
pub mod validation;
pub mod customer;
pub mod order;
pub mod service_type;
pub mod user;

#[cfg(test)]
mod tests;
