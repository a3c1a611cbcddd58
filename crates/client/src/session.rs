#![forbid(unsafe_code)]

use crate::error::ClientError;
use crate::reorder::{ColumnDrag, MoveRequest, ReorderState, TaskDrag};
use crate::transport::BoardTransport;
use crate::view::BoardView;

/// Drives the full client loop: a drop reorders the view and sends one
/// request; a failure reverts the view; the next fetch reconciles it.
pub struct ReorderSession<T: BoardTransport> {
    transport: T,
    state: ReorderState,
}

impl<T: BoardTransport> ReorderSession<T> {
    pub async fn start(transport: T, board_id: &str) -> Result<Self, ClientError> {
        let snapshot = transport.fetch_board(board_id).await?;
        Ok(Self {
            transport,
            state: ReorderState::new(snapshot),
        })
    }

    pub fn view(&self) -> &BoardView {
        self.state.view()
    }

    pub async fn drop_task(&mut self, drag: TaskDrag) -> Result<(), ClientError> {
        let Some(request) = self.state.drag_task(drag) else {
            return Ok(());
        };
        self.send(request).await
    }

    pub async fn drop_column(&mut self, drag: ColumnDrag) -> Result<(), ClientError> {
        let Some(request) = self.state.drag_column(drag) else {
            return Ok(());
        };
        self.send(request).await
    }

    async fn send(&mut self, request: MoveRequest) -> Result<(), ClientError> {
        match self.transport.send_move(&request).await {
            Ok(()) => Ok(()),
            Err(err) => {
                // The server committed nothing, so neither do we: back to
                // the last acknowledged ordering, never a half-applied mix.
                tracing::warn!(error = %err, "move rejected, reverting optimistic view");
                self.state.revert();
                Err(err)
            }
        }
    }

    /// Refetches the board and lets the authoritative ordering replace the
    /// optimistic one. After a successful move this is a visual no-op: the
    /// server's answer matches what the user already sees.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let board_id = self.state.board_id().to_string();
        let snapshot = self.transport.fetch_board(&board_id).await?;
        self.state.confirm(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ColumnView;
    use async_trait::async_trait;
    use bk_core::model::Task;
    use std::sync::Mutex;

    fn task(id: &str, column_id: &str, position: i64) -> Task {
        Task {
            id: id.to_string(),
            column_id: column_id.to_string(),
            position,
            title: id.to_string(),
            description: None,
            created_at_ms: 0,
            updated_at_ms: 0,
        }
    }

    fn snapshot() -> BoardView {
        BoardView {
            board_id: "board-1".to_string(),
            columns: vec![
                ColumnView {
                    id: "col-a".to_string(),
                    title: "A".to_string(),
                    tasks: vec![task("t1", "col-a", 1), task("t2", "col-a", 2)],
                },
                ColumnView {
                    id: "col-b".to_string(),
                    title: "B".to_string(),
                    tasks: vec![task("u1", "col-b", 1)],
                },
            ],
        }
    }

    /// Scripted transport: serves a fixed snapshot, records every move,
    /// and fails on demand.
    struct ScriptedTransport {
        snapshot: Mutex<BoardView>,
        sent: Mutex<Vec<MoveRequest>>,
        fail_moves: bool,
    }

    impl ScriptedTransport {
        fn new(snapshot: BoardView) -> Self {
            Self {
                snapshot: Mutex::new(snapshot),
                sent: Mutex::new(Vec::new()),
                fail_moves: false,
            }
        }

        fn failing(snapshot: BoardView) -> Self {
            Self {
                fail_moves: true,
                ..Self::new(snapshot)
            }
        }

        fn sent_count(&self) -> usize {
            self.sent.lock().expect("sent lock").len()
        }
    }

    #[async_trait]
    impl BoardTransport for &ScriptedTransport {
        async fn fetch_board(&self, _board_id: &str) -> Result<BoardView, ClientError> {
            Ok(self.snapshot.lock().expect("snapshot lock").clone())
        }

        async fn send_move(&self, request: &MoveRequest) -> Result<(), ClientError> {
            if self.fail_moves {
                return Err(ClientError::Rejected {
                    status: 500,
                    message: "sqlite: disk I/O error".to_string(),
                    retryable: true,
                });
            }
            self.sent
                .lock()
                .expect("sent lock")
                .push(request.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn successful_drop_sends_exactly_one_request() {
        let transport = ScriptedTransport::new(snapshot());
        let mut session = ReorderSession::start(&transport, "board-1")
            .await
            .expect("start session");

        session
            .drop_task(TaskDrag {
                source_column_id: "col-a".to_string(),
                source_index: 0,
                destination_column_id: "col-b".to_string(),
                destination_index: 1,
            })
            .await
            .expect("drop task");

        assert_eq!(transport.sent_count(), 1);
        let view = session.view();
        assert_eq!(view.columns[0].tasks.len(), 1);
        assert_eq!(view.columns[1].tasks.len(), 2);
    }

    #[tokio::test]
    async fn noop_drop_sends_nothing() {
        let transport = ScriptedTransport::new(snapshot());
        let mut session = ReorderSession::start(&transport, "board-1")
            .await
            .expect("start session");

        session
            .drop_task(TaskDrag {
                source_column_id: "col-a".to_string(),
                source_index: 1,
                destination_column_id: "col-a".to_string(),
                destination_index: 1,
            })
            .await
            .expect("no-op drop");

        assert_eq!(transport.sent_count(), 0);
    }

    #[tokio::test]
    async fn failed_move_reverts_the_view() {
        let transport = ScriptedTransport::failing(snapshot());
        let mut session = ReorderSession::start(&transport, "board-1")
            .await
            .expect("start session");
        let before = session.view().clone();

        let err = session
            .drop_task(TaskDrag {
                source_column_id: "col-a".to_string(),
                source_index: 0,
                destination_column_id: "col-b".to_string(),
                destination_index: 0,
            })
            .await
            .expect_err("transport failure");
        assert!(matches!(err, ClientError::Rejected { retryable: true, .. }));

        assert_eq!(*session.view(), before, "view fully reverted, never a mix");
    }

    #[tokio::test]
    async fn refresh_adopts_the_server_ordering() {
        let transport = ScriptedTransport::new(snapshot());
        let mut session = ReorderSession::start(&transport, "board-1")
            .await
            .expect("start session");

        session
            .drop_column(ColumnDrag {
                source_index: 0,
                destination_index: 1,
            })
            .await
            .expect("drop column");

        // The server's next answer happens to match the optimistic view.
        {
            let mut served = transport.snapshot.lock().expect("snapshot lock");
            served.columns.swap(0, 1);
        }
        session.refresh().await.expect("refresh");

        let order: Vec<&str> = session
            .view()
            .columns
            .iter()
            .map(|column| column.id.as_str())
            .collect();
        assert_eq!(order, vec!["col-b", "col-a"]);
    }
}
