#![forbid(unsafe_code)]

mod ids;
mod ordering;
mod resolve;
mod rows;
mod schema;
mod text;
mod time;

pub(crate) use ids::new_id;
pub(crate) use ordering::*;
pub(crate) use resolve::*;
pub(crate) use rows::*;
pub(crate) use schema::install_schema;
pub(crate) use text::{normalize_description, normalize_title};
pub(crate) use time::now_ms;
