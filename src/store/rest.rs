//! REST implementation of the task store.
//!
//! Speaks the PostgREST dialect of the hosted table store: filtered GETs,
//! single-row inserts, `id=eq.` patches and deletes, and an
//! `on_conflict=id` upsert for bulk order writes.

use serde_json::json;

use super::{StoreError, TaskPatch, TaskStore};
use crate::task::{Task, TaskRecord};

/// Task store backed by a remote PostgREST endpoint.
pub struct RestTaskStore {
    client: reqwest::Client,
    base_url: String,
    table: String,
    api_key: String,
}

impl RestTaskStore {
    /// Create a store client for the given project URL, table and API key.
    #[must_use]
    pub fn new(base_url: String, table: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            table,
            api_key,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn check_status(
        response: reqwest::Response,
        what: &str,
    ) -> Result<reqwest::Response, String> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(format!("{what} failed ({status}): {body}"))
        }
    }
}

#[async_trait::async_trait]
impl TaskStore for RestTaskStore {
    async fn fetch_all(&self) -> Result<Vec<Task>, StoreError> {
        let response = self
            .authed(self.client.get(self.table_url()))
            .query(&[("select", "*"), ("order", "order_index.asc")])
            .send()
            .await
            .map_err(|e| StoreError::Connectivity(e.to_string()))?;

        let response = Self::check_status(response, "task select")
            .await
            .map_err(StoreError::Connectivity)?;

        let records = response
            .json::<Vec<TaskRecord>>()
            .await
            .map_err(|e| StoreError::Connectivity(format!("task select parse failed: {e}")))?;

        Ok(records.into_iter().map(Task::from).collect())
    }

    async fn insert(&self, task: &Task) -> Result<(), StoreError> {
        let record = TaskRecord::from(task);
        let response = self
            .authed(self.client.post(self.table_url()))
            .header("Prefer", "return=minimal")
            .json(&record)
            .send()
            .await
            .map_err(|e| StoreError::Persistence(e.to_string()))?;

        Self::check_status(response, "task insert")
            .await
            .map_err(StoreError::Persistence)?;
        Ok(())
    }

    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<(), StoreError> {
        // Partial write: ordering and timestamp columns are never touched here.
        let body = json!({
            "title": patch.title,
            "description": patch.description,
            "priority": patch.priority.as_str(),
            "color": patch.color.as_str(),
        });

        let response = self
            .authed(self.client.patch(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=minimal")
            .json(&body)
            .send()
            .await
            .map_err(|e| StoreError::Persistence(e.to_string()))?;

        Self::check_status(response, "task update")
            .await
            .map_err(StoreError::Persistence)?;
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .authed(self.client.delete(self.table_url()))
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(|e| StoreError::Persistence(e.to_string()))?;

        Self::check_status(response, "task delete")
            .await
            .map_err(StoreError::Persistence)?;
        Ok(())
    }

    async fn bulk_replace_order(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();
        let response = self
            .authed(self.client.post(self.table_url()))
            .query(&[("on_conflict", "id")])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&records)
            .send()
            .await
            .map_err(|e| StoreError::Persistence(e.to_string()))?;

        Self::check_status(response, "order upsert")
            .await
            .map_err(StoreError::Persistence)?;
        Ok(())
    }
}
