pub mod controller;
pub mod message;
pub mod models;
pub mod session;
