use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use ordex_shared::{OrderOutcome, OrderRecord, OrderRequest};
use uuid::Uuid;

/// In-memory, append-only store of decided orders.
///
/// Records are inserted exactly once, after the orchestrator has reached a
/// terminal outcome, and are never updated or deleted. Inserts for distinct
/// orders may race freely; each insert is atomic under the write lock and a
/// subsequent `get` for that id always observes the inserted value.
pub struct OrderStore {
    orders: RwLock<HashMap<Uuid, OrderRecord>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// Assign a fresh id, insert the decided order and return the stored
    /// record.
    pub fn add(
        &self,
        request: &OrderRequest,
        outcome: OrderOutcome,
        message: impl Into<String>,
    ) -> OrderRecord {
        let record = OrderRecord {
            id: Uuid::new_v4(),
            item_id: request.item_id,
            quantity: request.quantity,
            user_id: request.user_id.clone(),
            outcome,
            message: message.into(),
            created_at: Utc::now(),
        };

        let mut orders = self.orders.write().expect("order store lock poisoned");
        orders.insert(record.id, record.clone());
        record
    }

    pub fn get(&self, id: Uuid) -> Option<OrderRecord> {
        let orders = self.orders.read().expect("order store lock poisoned");
        orders.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        let orders = self.orders.read().expect("order store lock poisoned");
        orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn request(item_id: i32) -> OrderRequest {
        OrderRequest {
            item_id,
            quantity: 1,
            user_id: "user-1".to_string(),
        }
    }

    #[test]
    fn add_then_get_returns_the_stored_record() {
        let store = OrderStore::new();
        let stored = store.add(&request(1), OrderOutcome::Completed, "Order processed");

        let fetched = store.get(stored.id).expect("record should be present");
        assert_eq!(fetched, stored);
        assert_eq!(fetched.outcome, OrderOutcome::Completed);
        assert_eq!(fetched.message, "Order processed");
    }

    #[test]
    fn get_of_unknown_id_is_absent() {
        let store = OrderStore::new();
        assert!(store.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn every_insert_gets_a_distinct_id() {
        let store = OrderStore::new();
        let a = store.add(&request(1), OrderOutcome::Completed, "Order processed");
        let b = store.add(&request(1), OrderOutcome::Completed, "Order processed");
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn concurrent_inserts_are_all_visible() {
        let store = Arc::new(OrderStore::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    let mut ids = Vec::new();
                    for _ in 0..50 {
                        ids.push(store.add(&request(i), OrderOutcome::Rejected, "Out of stock").id);
                    }
                    ids
                })
            })
            .collect();

        for handle in handles {
            for id in handle.join().expect("thread should not panic") {
                assert!(store.get(id).is_some());
            }
        }
        assert_eq!(store.len(), 8 * 50);
    }
}
