use std::sync::Arc;

use log::{error, info, warn};
use tokio::sync::{watch, Mutex};

use crate::kv_store::KeyValueStore;
use crate::types::{LineItem, Product};

pub const CART_KEY: &str = "@GoMarket/Cart";

/// Authoritative in-memory cart. The stored record is a derived snapshot:
/// every mutation rewrites it whole, so overlapping writers degrade to
/// last write wins on the full list.
#[derive(Clone)]
pub struct CartStore {
    items: Arc<Mutex<Vec<LineItem>>>,
    storage: Arc<dyn KeyValueStore>,
    published: Arc<watch::Sender<Vec<LineItem>>>,
}

impl CartStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let (published, _) = watch::channel(Vec::new());
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
            storage,
            published: Arc::new(published),
        }
    }

    /// One-time hydrate from storage. Absent or malformed records leave the
    /// cart empty; neither is surfaced to the caller.
    pub async fn load(&self) {
        let raw = match self.storage.get(CART_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                error!("Failed to read stored cart: {}", e);
                return;
            }
        };
        match serde_json::from_str::<Vec<LineItem>>(&raw) {
            Ok(stored) => {
                info!("cart items: {}", raw);
                let mut items = self.items.lock().await;
                *items = stored;
                self.published.send_replace(items.clone());
            }
            Err(e) => {
                warn!("Malformed stored cart, starting empty: {}", e);
            }
        }
    }

    pub async fn add_to_cart(&self, product: Product) {
        let snapshot = {
            let mut items = self.items.lock().await;
            match items.iter().position(|item| item.id == product.id) {
                Some(pos) => {
                    // re-adding bumps the quantity and refreshes the listing fields
                    let item = &mut items[pos];
                    item.quantity += 1;
                    item.title = product.title;
                    item.image_url = product.image_url;
                    item.price = product.price;
                }
                None => items.push(LineItem::from(product)),
            }
            items.clone()
        };
        self.publish_and_persist(snapshot).await;
    }

    pub async fn increment(&self, id: &str) {
        let snapshot = {
            let mut items = self.items.lock().await;
            if let Some(item) = items.iter_mut().find(|item| item.id == id) {
                item.quantity += 1;
            }
            items.clone()
        };
        self.publish_and_persist(snapshot).await;
    }

    pub async fn decrement(&self, id: &str) {
        let snapshot = {
            let mut items = self.items.lock().await;
            if let Some(pos) = items.iter().position(|item| item.id == id) {
                if items[pos].quantity == 1 {
                    items.remove(pos);
                } else {
                    items[pos].quantity -= 1;
                }
            }
            items.clone()
        };
        self.publish_and_persist(snapshot).await;
    }

    pub async fn products(&self) -> Vec<LineItem> {
        self.items.lock().await.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<LineItem>> {
        self.published.subscribe()
    }

    // Observers see the snapshot before the write lands. A failed write is
    // retried once, then dropped; it never reaches the caller.
    async fn publish_and_persist(&self, snapshot: Vec<LineItem>) {
        self.published.send_replace(snapshot.clone());
        let raw = match serde_json::to_string(&snapshot) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to serialize cart: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(CART_KEY, raw.clone()).await {
            warn!("Cart write failed, retrying once: {}", e);
            if let Err(e) = self.storage.set(CART_KEY, raw).await {
                error!("Cart write failed twice, dropping: {}", e);
            }
        }
    }
}
