mod create;
mod delete;
mod get_all;
mod get_by_id;
mod round_trip;
mod soft_delete;
mod update;
mod update_partial;

use sena_test_utils::prelude::*;

use crate::server::{error::Error, service::entity::EntityService};
