#![forbid(unsafe_code)]

use crate::error::ClientError;
use crate::reorder::MoveRequest;
use crate::transport::BoardTransport;
use crate::view::BoardView;
use async_trait::async_trait;
use bk_core::model::{Column, Task};
use serde::{Deserialize, Serialize};

/// Speaks the service's JSON contract over HTTP.
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct ColumnsEnvelope {
    columns: Vec<Column>,
}

#[derive(Deserialize)]
struct TasksEnvelope {
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEnvelope {
    error: String,
    #[serde(default)]
    retryable: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveTaskBody<'a> {
    task_id: &'a str,
    destination_column_id: &'a str,
    destination_position: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveColumnBody<'a> {
    column_id: &'a str,
    destination_board_id: &'a str,
    destination_position: i64,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let envelope: ErrorEnvelope =
            serde_json::from_str(&body).unwrap_or_else(|_| ErrorEnvelope {
                error: body,
                retryable: false,
            });
        Err(ClientError::Rejected {
            status: status.as_u16(),
            message: envelope.error,
            retryable: envelope.retryable,
        })
    }
}

#[async_trait]
impl BoardTransport for HttpTransport {
    async fn fetch_board(&self, board_id: &str) -> Result<BoardView, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/columns", self.base_url))
            .query(&[("boardId", board_id)])
            .send()
            .await?;
        let columns: ColumnsEnvelope = self
            .check(response)
            .await?
            .json()
            .await
            .map_err(|err| ClientError::Malformed(err.to_string()))?;

        let mut view = BoardView::new(board_id);
        for column in columns.columns {
            let response = self
                .client
                .get(format!("{}/api/tasks", self.base_url))
                .query(&[("columnId", column.id.as_str())])
                .send()
                .await?;
            let tasks: TasksEnvelope = self
                .check(response)
                .await?
                .json()
                .await
                .map_err(|err| ClientError::Malformed(err.to_string()))?;
            view.push_column(column, tasks.tasks);
        }
        Ok(view)
    }

    async fn send_move(&self, request: &MoveRequest) -> Result<(), ClientError> {
        let response = match request {
            MoveRequest::Task {
                task_id,
                destination_column_id,
                destination_position,
            } => {
                self.client
                    .post(format!("{}/api/tasks/move", self.base_url))
                    .json(&MoveTaskBody {
                        task_id,
                        destination_column_id,
                        destination_position: *destination_position,
                    })
                    .send()
                    .await?
            }
            MoveRequest::Column {
                column_id,
                destination_board_id,
                destination_position,
            } => {
                self.client
                    .post(format!("{}/api/columns/move", self.base_url))
                    .json(&MoveColumnBody {
                        column_id,
                        destination_board_id,
                        destination_position: *destination_position,
                    })
                    .send()
                    .await?
            }
        };
        self.check(response).await?;
        Ok(())
    }
}
