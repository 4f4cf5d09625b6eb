pub mod catalog;
pub mod map;
pub mod models;
pub mod session;
