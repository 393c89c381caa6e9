use serde_json::json;
use std::collections::HashMap;

use crate::client::PocketClient;
use crate::models::{GetResponse, Item, NewItem, SendResponse};

impl PocketClient {
    /// Save a batch of items in a single request.
    /// POST /v3/send with `add` actions
    ///
    /// Returns the number of actions the API accepted.
    pub async fn add(&self, items: &[NewItem]) -> crate::Result<usize> {
        let actions: Vec<_> = items
            .iter()
            .map(|item| {
                json!({
                    "action": "add",
                    "url": item.url,
                    "title": item.title,
                    "tags": item.tags,
                })
            })
            .collect();

        tracing::debug!("Submitting {} add actions", actions.len());
        self.send(actions).await
    }

    /// Delete a batch of items in a single request.
    /// POST /v3/send with `delete` actions
    ///
    /// The caller is responsible for capping the batch size.
    pub async fn delete(&self, ids: &[String]) -> crate::Result<()> {
        let actions: Vec<_> = ids
            .iter()
            .map(|id| json!({ "action": "delete", "item_id": id }))
            .collect();

        tracing::debug!("Submitting {} delete actions", actions.len());
        self.send(actions).await.map(|_| ())
    }

    /// Retrieve stored items, bounded by `count`.
    /// POST /v3/get
    pub async fn get(&self, count: usize) -> crate::Result<HashMap<String, Item>> {
        let url = self.url("/get");
        let body = json!({
            "consumer_key": self.consumer_key(),
            "access_token": self.access_token(),
            "state": "all",
            "detailType": "complete",
            "count": count,
        });

        let response = self
            .client()
            .post(&url)
            .header("X-Accept", "application/json")
            .json(&body)
            .send()
            .await?;
        let response = self.check_response(response)?;

        let parsed: GetResponse = response.json().await?;
        tracing::debug!("Fetched {} stored items", parsed.list.len());
        Ok(parsed.list)
    }

    async fn send(&self, actions: Vec<serde_json::Value>) -> crate::Result<usize> {
        let url = self.url("/send");
        let body = json!({
            "consumer_key": self.consumer_key(),
            "access_token": self.access_token(),
            "actions": actions,
        });

        let response = self
            .client()
            .post(&url)
            .header("X-Accept", "application/json")
            .json(&body)
            .send()
            .await?;
        let response = self.check_response(response)?;

        let parsed: SendResponse = response.json().await?;
        Ok(parsed.accepted())
    }
}
