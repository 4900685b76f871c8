//! Server-side state shared across request handlers.

pub mod app;
