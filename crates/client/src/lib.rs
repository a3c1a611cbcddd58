#![forbid(unsafe_code)]

//! Caller side of the ordering contract. The visible lists reorder the
//! instant the user drops an item; the server stays authoritative and its
//! ordering wins on the next fetch.

mod error;
mod http;
mod reorder;
mod session;
mod transport;
mod view;

pub use error::ClientError;
pub use http::HttpTransport;
pub use reorder::{ColumnDrag, MoveRequest, ReorderState, TaskDrag};
pub use session::ReorderSession;
pub use transport::BoardTransport;
pub use view::{BoardView, ColumnView};
