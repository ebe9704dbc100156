use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use crate::receipt::Receipt;

/// In-memory receipt store keyed by generated identifier.
///
/// Safe to share between request handlers behind an `Arc`. Contents live
/// as long as the store does; nothing is persisted.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<String, Receipt>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a scored receipt under a fresh v4 UUID and return the id.
    /// The stored copy has its `id` set.
    pub fn put(&self, mut receipt: Receipt) -> String {
        let mut receipts = self.receipts.write();
        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !receipts.contains_key(&candidate) {
                break candidate;
            }
        };
        receipt.id = Some(id.clone());
        receipts.insert(id.clone(), receipt);
        id
    }

    pub fn get(&self, id: &str) -> Option<Receipt> {
        self.receipts.read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.receipts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.read().is_empty()
    }
}
