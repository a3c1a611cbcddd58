#![forbid(unsafe_code)]

use crate::error::ClientError;
use crate::reorder::MoveRequest;
use crate::view::BoardView;
use async_trait::async_trait;

/// Seam between the reorder state machine and the wire. The production
/// implementation is [`crate::HttpTransport`]; tests substitute their own.
#[async_trait]
pub trait BoardTransport: Send + Sync {
    /// Authoritative snapshot of one board: columns ascending by position,
    /// each with its tasks ascending by position.
    async fn fetch_board(&self, board_id: &str) -> Result<BoardView, ClientError>;

    /// Sends exactly one move request. The server either commits the whole
    /// move or none of it, so an error here means the stored ordering is
    /// unchanged.
    async fn send_move(&self, request: &MoveRequest) -> Result<(), ClientError>;
}
