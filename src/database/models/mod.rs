pub mod admin;
pub mod client;

pub use admin::{Admin, NewAdmin};
pub use client::{Client, NewClient};
