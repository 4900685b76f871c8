//! Tests for the generic entity handlers, instantiated for concrete resources.

mod create;
mod delete;
mod get_by_id;
mod update;
mod update_partial;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::*;
