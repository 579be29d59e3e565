//! Client-side cart store
//!
//! Holds the user's pending selections between page visits. The whole
//! collection is written to the backing store after every mutation and
//! rehydrated on load; a corrupt snapshot is logged and treated as an empty
//! cart, never as a fatal error.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::price::parse_price;

/// One selected menu item plus its quantity.
///
/// Invariant: a cart never holds two entries with the same `item_id`, and
/// every quantity is >= 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub item_id: String,
    pub name: String,
    /// Display price string, e.g. `"KSh 450"`.
    pub price: String,
    pub quantity: u32,
}

/// Where the serialized cart lives between visits.
pub trait CartBackend {
    fn save(&self, snapshot: &str) -> io::Result<()>;
    fn load(&self) -> io::Result<Option<String>>;
}

/// Durable client-local storage backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileCartBackend {
    path: PathBuf,
}

impl FileCartBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartBackend for FileCartBackend {
    fn save(&self, snapshot: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, snapshot)
    }

    fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// In-process backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCartBackend {
    snapshot: std::cell::RefCell<Option<String>>,
}

impl MemoryCartBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartBackend for MemoryCartBackend {
    fn save(&self, snapshot: &str) -> io::Result<()> {
        *self.snapshot.borrow_mut() = Some(snapshot.to_string());
        Ok(())
    }

    fn load(&self) -> io::Result<Option<String>> {
        Ok(self.snapshot.borrow().clone())
    }
}

/// The cart itself. All mutations persist through the backend immediately;
/// a persistence failure is logged and the in-memory state stays valid.
pub struct CartStore<B: CartBackend> {
    entries: Vec<CartEntry>,
    backend: B,
}

impl<B: CartBackend> CartStore<B> {
    /// Create an empty cart without touching the backend.
    pub fn new(backend: B) -> Self {
        Self {
            entries: Vec::new(),
            backend,
        }
    }

    /// Rehydrate from the backend. A missing or unreadable snapshot yields
    /// an empty cart.
    pub fn load(backend: B) -> Self {
        let entries = match backend.load() {
            Ok(Some(snapshot)) => match serde_json::from_str::<Vec<CartEntry>>(&snapshot) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(error = %e, "discarding corrupt cart snapshot");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read cart snapshot");
                Vec::new()
            }
        };
        Self { entries, backend }
    }

    /// Add one unit of an item. An already-present item has its quantity
    /// incremented rather than being duplicated. Returns the entry's new
    /// quantity.
    pub fn add(&mut self, item_id: &str, name: &str, price: &str) -> u32 {
        let quantity = match self.entries.iter_mut().find(|e| e.item_id == item_id) {
            Some(entry) => {
                entry.quantity += 1;
                entry.quantity
            }
            None => {
                self.entries.push(CartEntry {
                    item_id: item_id.to_string(),
                    name: name.to_string(),
                    price: price.to_string(),
                    quantity: 1,
                });
                1
            }
        };
        tracing::debug!(item = %name, quantity, "added to cart");
        self.persist();
        quantity
    }

    /// Remove an entry unconditionally.
    pub fn remove(&mut self, item_id: &str) {
        self.entries.retain(|e| e.item_id != item_id);
        self.persist();
    }

    /// Set an entry's quantity; anything below 1 removes the entry.
    pub fn set_quantity(&mut self, item_id: &str, quantity: u32) {
        if quantity < 1 {
            self.remove(item_id);
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item_id == item_id) {
            entry.quantity = quantity;
        }
        self.persist();
    }

    /// Empty the cart. Called once, right after a successful order
    /// submission.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Sum of parsed price x quantity over all entries.
    pub fn total(&self) -> i64 {
        self.entries
            .iter()
            .map(|e| parse_price(&e.price) * e.quantity as i64)
            .sum()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) {
        let snapshot = match serde_json::to_string(&self.entries) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize cart");
                return;
            }
        };
        if let Err(e) = self.backend.save(&snapshot) {
            tracing::warn!(error = %e, "failed to persist cart");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart() -> CartStore<MemoryCartBackend> {
        CartStore::new(MemoryCartBackend::new())
    }

    #[test]
    fn add_increments_instead_of_duplicating() {
        let mut cart = cart();
        cart.add("m1", "Nyama Choma", "KSh 1,800");
        cart.add("m1", "Nyama Choma", "KSh 1,800");
        cart.add("m2", "Samosas", "KSh 450");

        assert_eq!(cart.entries().len(), 2);
        assert_eq!(cart.entries()[0].quantity, 2);
        assert_eq!(cart.entries()[1].quantity, 1);
    }

    #[test]
    fn set_quantity_below_one_removes() {
        let mut cart = cart();
        cart.add("m1", "Samosas", "KSh 450");
        cart.set_quantity("m1", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn quantities_stay_positive_under_any_sequence() {
        let mut cart = cart();
        cart.add("m1", "Samosas", "KSh 450");
        cart.add("m2", "Biryani", "KSh 1,350");
        cart.set_quantity("m1", 5);
        cart.add("m1", "Samosas", "KSh 450");
        cart.remove("m2");
        cart.add("m2", "Biryani", "KSh 1,350");
        cart.set_quantity("m2", 3);

        let mut seen = std::collections::HashSet::new();
        for entry in cart.entries() {
            assert!(entry.quantity >= 1);
            assert!(seen.insert(entry.item_id.clone()), "duplicate entry");
        }
    }

    #[test]
    fn total_multiplies_parsed_price_by_quantity() {
        let mut cart = cart();
        cart.add("m1", "Nyama Choma", "KSh 1,800");
        cart.set_quantity("m1", 2);
        cart.add("m2", "Samosas", "KSh 450");
        cart.set_quantity("m2", 3);

        assert_eq!(cart.total(), 2 * 1800 + 3 * 450);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = cart();
        cart.add("m1", "Samosas", "KSh 450");
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn file_backend_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");

        let mut cart = CartStore::new(FileCartBackend::new(&path));
        cart.add("m1", "Samosas", "KSh 450");
        cart.add("m1", "Samosas", "KSh 450");

        let reloaded = CartStore::load(FileCartBackend::new(&path));
        assert_eq!(reloaded.entries().len(), 1);
        assert_eq!(reloaded.entries()[0].quantity, 2);
        assert_eq!(reloaded.total(), 900);
    }

    #[test]
    fn corrupt_snapshot_loads_as_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "{not json").unwrap();

        let cart = CartStore::load(FileCartBackend::new(&path));
        assert!(cart.is_empty());
    }
}
