//! Data model shared by the responder backend and its clients.

pub mod model;
pub mod requests;
