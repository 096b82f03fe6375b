//! Value Object Module

pub mod plain_password;
pub mod user_name;
