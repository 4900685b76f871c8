//! Tests for HTTP controller endpoints.
//!
//! Handler tests call the generic handlers directly with extracted arguments; routing tests send
//! requests through the full router to cover paths, status codes, headers and bodies.

mod entity;
mod health;
mod routing;

use sena_test_utils::prelude::*;

use crate::{util, TestContextExt};
