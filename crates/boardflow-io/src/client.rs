//! Client for the Draggen extension API.

use crate::error::{IoError, Result};
use boardflow_core::{BoardSummary, CoreError, Moodboard};
use tracing::debug;

/// Production endpoint of the Draggen extension API.
pub const DEFAULT_API_BASE: &str = "https://draggen.io/api/ext";

/// Authenticated client for the board endpoints.
pub struct RemoteClient {
    api_key: String,
    api_base: String,
    client: reqwest::Client,
}

impl RemoteClient {
    /// Creates a client for the production API.
    ///
    /// Fails with [`IoError::MissingApiKey`] when the key is empty, before
    /// any request is made.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(IoError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            api_base: DEFAULT_API_BASE.to_string(),
            client: reqwest::Client::new(),
        })
    }

    /// Overrides the API base URL, for tests and self-hosted deployments.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Lists the boards available to this API key.
    pub async fn list_boards(&self) -> Result<Vec<BoardSummary>> {
        let value = self.get_json(&self.boards_url()).await?;
        let boards = parse_board_list(value)?;
        debug!(count = boards.len(), "listed boards");
        Ok(boards)
    }

    /// Fetches a single board document by id.
    pub async fn fetch_board(&self, board_id: &str) -> Result<Moodboard> {
        if board_id.is_empty() {
            return Err(IoError::MissingBoardId);
        }
        let value = self.get_json(&self.board_url(board_id)).await?;
        Ok(Moodboard::from_value(value)?)
    }

    fn boards_url(&self) -> String {
        format!("{}/boards", self.api_base)
    }

    fn board_url(&self, board_id: &str) -> String {
        format!("{}/boards/{}", self.api_base, board_id)
    }

    async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        debug!(url, "requesting");
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IoError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

/// Extracts the board list from a `{"boards": [...]}` response.
///
/// A missing `boards` key is an empty list, not an error.
fn parse_board_list(value: serde_json::Value) -> Result<Vec<BoardSummary>> {
    match value.get("boards") {
        Some(list) => Ok(serde_json::from_value(list.clone()).map_err(CoreError::from)?),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_api_key_is_rejected() {
        assert!(matches!(
            RemoteClient::new(""),
            Err(IoError::MissingApiKey)
        ));
    }

    #[test]
    fn test_endpoint_urls() {
        let client = RemoteClient::new("key")
            .unwrap()
            .with_api_base("http://localhost:8080/api/ext");
        assert_eq!(client.boards_url(), "http://localhost:8080/api/ext/boards");
        assert_eq!(
            client.board_url("b-42"),
            "http://localhost:8080/api/ext/boards/b-42"
        );
    }

    #[test]
    fn test_parse_board_list() {
        let boards = parse_board_list(json!({
            "boards": [
                { "id": "a", "name": "First" },
                { "id": "b", "thumbnailUrl": "https://cdn/b.png" }
            ]
        }))
        .unwrap();
        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0].id, "a");
        assert_eq!(boards[1].thumbnail_url.as_deref(), Some("https://cdn/b.png"));
    }

    #[test]
    fn test_parse_board_list_without_key_is_empty() {
        let boards = parse_board_list(json!({ "status": "ok" })).unwrap();
        assert!(boards.is_empty());
    }
}
