//! Configuration and data types shared by the responder and its host

pub mod config;
pub mod models;
