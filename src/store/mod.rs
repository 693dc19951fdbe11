use anyhow::Result;
use futures::TryStreamExt;
use log::debug;
use mongodb::{bson::doc, Client, Collection};

use crate::web::models::StatusCheck;

// Upper bound on a single listing.
const LIST_LIMIT: i64 = 1000;

// Handle to the status_checks collection, constructed once at startup and
// shared across workers.
pub struct StatusStore {
    status_checks: Collection<StatusCheck>,
}

impl StatusStore {
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(db_name);
        Ok(Self {
            status_checks: db.collection("status_checks"),
        })
    }

    // Stamps a fresh record, stores it, and returns it.
    pub async fn create(&self, client_name: String) -> Result<StatusCheck> {
        let check = StatusCheck::new(client_name);
        self.status_checks.insert_one(&check).await?;
        debug!("Stored status check {}", check.id);
        Ok(check)
    }

    // Returns stored records in storage order, capped at LIST_LIMIT.
    pub async fn list(&self) -> Result<Vec<StatusCheck>> {
        let mut cursor = self.status_checks.find(doc! {}).limit(LIST_LIMIT).await?;
        let mut checks = Vec::new();
        while let Some(check) = cursor.try_next().await? {
            checks.push(check);
        }
        Ok(checks)
    }
}
