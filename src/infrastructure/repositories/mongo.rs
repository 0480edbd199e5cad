//! MongoDB implementation of ItemRepository
//!
//! One item maps to exactly one document in the `items` collection of the
//! `catalog` database. Non-native types cross the process/store boundary
//! in canonical textual form rather than BSON-native layouts:
//!
//! - `_id` is the uuid's hyphenated string, so identifiers round-trip
//!   exactly, stay human-inspectable, and sort as strings
//! - `created_date` is an RFC 3339 string with nanosecond precision
//! - `price` is a decimal string, free of binary float drift
//!
//! Absence (`Ok(None)`) strictly means "no document with this `_id`";
//! driver failures surface as `DomainError::Store` and undecodable
//! documents as `DomainError::Serialization`.

use std::time::Instant;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{DomainError, HealthReport, ItemRepository, StoreHealth};
use crate::models::Item;

const DATABASE_NAME: &str = "catalog";
const COLLECTION_NAME: &str = "items";

/// Wire shape of an item document
#[derive(Debug, Serialize, Deserialize)]
struct ItemDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    price: Decimal,
    created_date: String,
}

impl From<&Item> for ItemDocument {
    fn from(item: &Item) -> Self {
        ItemDocument {
            id: item.id.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            created_date: item.created_date.to_rfc3339(),
        }
    }
}

impl TryFrom<ItemDocument> for Item {
    type Error = DomainError;

    fn try_from(doc: ItemDocument) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&doc.id)
            .map_err(|e| DomainError::Serialization(format!("invalid item id '{}': {}", doc.id, e)))?;
        let created_date = DateTime::parse_from_rfc3339(&doc.created_date)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                DomainError::Serialization(format!(
                    "invalid created_date '{}': {}",
                    doc.created_date, e
                ))
            })?;

        Ok(Item {
            id,
            name: doc.name,
            description: doc.description,
            price: doc.price,
            created_date,
        })
    }
}

/// MongoDB-backed implementation of ItemRepository
///
/// Holds a handle into the process-wide shared `Client`; the driver is
/// safe for concurrent use and provides per-document atomicity, so the
/// repository itself carries no locking.
pub struct MongoItemRepository {
    database: Database,
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    pub fn new(client: &Client) -> Self {
        let database = client.database(DATABASE_NAME);
        let collection = database.collection(COLLECTION_NAME);
        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    async fn get(&self, id: Uuid) -> Result<Option<Item>, DomainError> {
        let document = self
            .collection
            .find_one(doc! { "_id": id.to_string() })
            .await?;

        document.map(Item::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Item>, DomainError> {
        let documents: Vec<ItemDocument> = self
            .collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        documents.into_iter().map(Item::try_from).collect()
    }

    async fn create(&self, item: Item) -> Result<(), DomainError> {
        self.collection.insert_one(ItemDocument::from(&item)).await?;
        Ok(())
    }

    async fn update(&self, item: Item) -> Result<(), DomainError> {
        let filter = doc! { "_id": item.id.to_string() };
        self.collection
            .replace_one(filter, ItemDocument::from(&item))
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.collection
            .delete_one(doc! { "_id": id.to_string() })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl StoreHealth for MongoItemRepository {
    async fn ping(&self) -> HealthReport {
        let start = Instant::now();
        match self.database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => HealthReport {
                healthy: true,
                message: None,
                duration: start.elapsed(),
            },
            Err(e) => HealthReport {
                healthy: false,
                message: Some(e.to_string()),
                duration: start.elapsed(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            id: Uuid::new_v4(),
            name: "Iron Sword".to_string(),
            description: Some("A sturdy blade".to_string()),
            price: Decimal::new(1999, 2), // 19.99
            created_date: Utc::now(),
        }
    }

    #[test]
    fn document_round_trip_is_lossless() {
        let item = sample_item();
        let restored = Item::try_from(ItemDocument::from(&item)).expect("round trip");

        assert_eq!(restored, item);
    }

    #[test]
    fn id_serializes_to_hyphenated_string() {
        let item = sample_item();
        let doc = ItemDocument::from(&item);

        assert_eq!(doc.id, item.id.to_string());
        assert_eq!(doc.id.len(), 36);
    }

    #[test]
    fn timestamp_keeps_the_exact_instant() {
        let mut item = sample_item();
        item.created_date = DateTime::parse_from_rfc3339("2024-05-01T12:34:56.123456789Z")
            .unwrap()
            .with_timezone(&Utc);

        let restored = Item::try_from(ItemDocument::from(&item)).expect("round trip");
        assert_eq!(restored.created_date, item.created_date);
    }

    #[test]
    fn price_serializes_as_decimal_string() {
        let doc = ItemDocument::from(&sample_item());
        let bson = mongodb::bson::to_document(&doc).expect("to bson");

        assert_eq!(
            bson.get_str("price").expect("price field"),
            "19.99"
        );
    }

    #[test]
    fn malformed_id_is_a_serialization_error() {
        let doc = ItemDocument {
            id: "not-a-uuid".to_string(),
            name: "Potion".to_string(),
            description: None,
            price: Decimal::from(9),
            created_date: Utc::now().to_rfc3339(),
        };

        match Item::try_from(doc) {
            Err(DomainError::Serialization(_)) => {}
            other => panic!("expected serialization error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_timestamp_is_a_serialization_error() {
        let doc = ItemDocument {
            id: Uuid::new_v4().to_string(),
            name: "Potion".to_string(),
            description: None,
            price: Decimal::from(9),
            created_date: "yesterday".to_string(),
        };

        match Item::try_from(doc) {
            Err(DomainError::Serialization(_)) => {}
            other => panic!("expected serialization error, got {:?}", other),
        }
    }
}
