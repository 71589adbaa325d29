//! Cart
//!
//! The client-side cart: line items keyed by product name, a derived total,
//! and a manager that persists a snapshot and notifies observers after every
//! mutation.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::prices::{format_amount, parse_display_price};
use crate::storage::{CART_KEY, CART_TOTAL_KEY, CartStore, CartStoreError};
use crate::uuids::TypedUuid;

/// The UUID of a [`CartLine`].
pub type LineUuid = TypedUuid<CartLine>;

/// A line item in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The line's UUID.
    pub uuid: LineUuid,

    /// The product name. Lines are deduplicated on it.
    pub name: String,

    /// The display price, kept verbatim ("$2.99").
    pub price: String,

    /// The product image URL.
    pub image: String,

    /// How many units of the product the line holds. Never below one.
    pub quantity: u32,
}

impl CartLine {
    /// The line's contribution to the cart total.
    ///
    /// An unparsable price contributes nothing rather than wedging the cart.
    fn subtotal(&self) -> Decimal {
        match parse_display_price(&self.price) {
            Ok(unit) => unit * Decimal::from(self.quantity),
            Err(error) => {
                warn!(name = %self.name, %error, "skipping unparsable price in total");

                Decimal::ZERO
            }
        }
    }
}

/// The details needed to add a product to the cart.
#[derive(Debug, Clone)]
pub struct NewLine {
    /// The product name.
    pub name: String,

    /// The display price.
    pub price: String,

    /// The product image URL.
    pub image: String,
}

/// Something that wants to hear about cart size changes, such as a count
/// badge in a UI.
pub trait CartObserver {
    /// Called with the new total unit count after every cart mutation.
    fn count_changed(&self, count: u32);
}

/// The cart and everything that has to happen around its mutations.
///
/// Every mutation recomputes the total, persists a snapshot to the store and
/// notifies observers with the new unit count.
pub struct CartManager<S: CartStore> {
    lines: Vec<CartLine>,
    total: Decimal,
    store: S,
    observers: Vec<Box<dyn CartObserver + Send>>,
}

impl<S: CartStore> CartManager<S> {
    /// Creates a manager over whatever snapshot `store` holds.
    ///
    /// A missing snapshot yields an empty cart. A snapshot that no longer
    /// deserializes is discarded with a warning rather than wedging startup.
    /// The total is always recomputed from the lines, never trusted from the
    /// stored copy.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] when the store itself cannot be read.
    pub fn restore(store: S) -> Result<Self, CartStoreError> {
        let lines = match store.get(CART_KEY)? {
            Some(snapshot) => match serde_json::from_str(&snapshot) {
                Ok(lines) => lines,
                Err(error) => {
                    warn!(%error, "discarding unreadable cart snapshot");

                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let mut manager = Self {
            lines,
            total: Decimal::ZERO,
            store,
            observers: Vec::new(),
        };

        manager.total = manager.compute_total();

        Ok(manager)
    }

    /// Registers an observer and immediately reports the current count to it.
    pub fn subscribe(&mut self, observer: Box<dyn CartObserver + Send>) {
        observer.count_changed(self.item_count());
        self.observers.push(observer);
    }

    /// The cart lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The cart total.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// The cart total as the storefront displays it.
    pub fn formatted_total(&self) -> String {
        format_amount(self.total)
    }

    /// The total unit count across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit of a product to the cart.
    ///
    /// A product already in the cart (matched by name) gets its quantity
    /// incremented instead of a second line.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] when the snapshot cannot be persisted.
    pub fn add_line(&mut self, new_line: NewLine) -> Result<LineUuid, CartStoreError> {
        self.add_line_with_quantity(new_line, 1)
    }

    /// Adds `quantity` units of a product to the cart. Quantities floor at
    /// one.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] when the snapshot cannot be persisted.
    pub fn add_line_with_quantity(
        &mut self,
        new_line: NewLine,
        quantity: u32,
    ) -> Result<LineUuid, CartStoreError> {
        let quantity = quantity.max(1);

        if let Some(line) = self.lines.iter_mut().find(|line| line.name == new_line.name) {
            line.quantity += quantity;
            let uuid = line.uuid;
            self.after_mutation()?;

            return Ok(uuid);
        }

        let line = CartLine {
            uuid: LineUuid::now_v7(),
            name: new_line.name,
            price: new_line.price,
            image: new_line.image,
            quantity,
        };
        let uuid = line.uuid;

        self.lines.push(line);
        self.after_mutation()?;

        Ok(uuid)
    }

    /// Sets a line's quantity.
    ///
    /// Quantities are floored at one: zero is ignored. An unknown UUID is
    /// also ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] when the snapshot cannot be persisted.
    pub fn set_quantity(&mut self, uuid: LineUuid, quantity: u32) -> Result<(), CartStoreError> {
        if quantity == 0 {
            return Ok(());
        }

        let Some(line) = self.lines.iter_mut().find(|line| line.uuid == uuid) else {
            return Ok(());
        };

        line.quantity = quantity;

        self.after_mutation()
    }

    /// Increments a line's quantity by one.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] when the snapshot cannot be persisted.
    pub fn increment(&mut self, uuid: LineUuid) -> Result<(), CartStoreError> {
        let Some(line) = self.lines.iter().find(|line| line.uuid == uuid) else {
            return Ok(());
        };

        let quantity = line.quantity + 1;

        self.set_quantity(uuid, quantity)
    }

    /// Decrements a line's quantity by one, stopping at one.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] when the snapshot cannot be persisted.
    pub fn decrement(&mut self, uuid: LineUuid) -> Result<(), CartStoreError> {
        let Some(line) = self.lines.iter().find(|line| line.uuid == uuid) else {
            return Ok(());
        };

        let quantity = line.quantity.saturating_sub(1);

        self.set_quantity(uuid, quantity)
    }

    /// Removes a line from the cart. An unknown UUID is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] when the snapshot cannot be persisted.
    pub fn remove_line(&mut self, uuid: LineUuid) -> Result<(), CartStoreError> {
        let before = self.lines.len();
        self.lines.retain(|line| line.uuid != uuid);

        if self.lines.len() == before {
            return Ok(());
        }

        self.after_mutation()
    }

    /// Empties the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartStoreError`] when the snapshot cannot be persisted.
    pub fn clear(&mut self) -> Result<(), CartStoreError> {
        self.lines.clear();

        self.after_mutation()
    }

    fn compute_total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    fn after_mutation(&mut self) -> Result<(), CartStoreError> {
        self.total = self.compute_total();
        self.persist()?;

        let count = self.item_count();
        for observer in &self.observers {
            observer.count_changed(count);
        }

        Ok(())
    }

    fn persist(&mut self) -> Result<(), CartStoreError> {
        let snapshot = serde_json::to_string(&self.lines).map_err(CartStoreError::Corrupt)?;

        self.store.set(CART_KEY, &snapshot)?;
        self.store.set(CART_TOTAL_KEY, &format_amount(self.total))
    }
}

impl<S: CartStore + fmt::Debug> fmt::Debug for CartManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartManager")
            .field("lines", &self.lines)
            .field("total", &self.total)
            .field("store", &self.store)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    use rust_decimal_macros::dec;

    use super::*;
    use crate::storage::MemoryStore;

    fn bananas() -> NewLine {
        NewLine {
            name: "Organic Bananas".to_string(),
            price: "$2.99".to_string(),
            image: "/images/bananas.jpg".to_string(),
        }
    }

    fn sourdough() -> NewLine {
        NewLine {
            name: "Sourdough Loaf".to_string(),
            price: "$5.49".to_string(),
            image: "/images/sourdough.jpg".to_string(),
        }
    }

    fn empty_manager() -> Result<CartManager<MemoryStore>, CartStoreError> {
        CartManager::restore(MemoryStore::new())
    }

    #[test]
    fn adding_same_product_twice_increments_quantity() -> testresult::TestResult {
        let mut manager = empty_manager()?;

        let first = manager.add_line(bananas())?;
        let second = manager.add_line_with_quantity(bananas(), 2)?;

        assert_eq!(first, second);
        assert_eq!(manager.lines().len(), 1);
        assert_eq!(manager.item_count(), 3);

        Ok(())
    }

    #[test]
    fn total_is_sum_of_price_times_quantity() -> testresult::TestResult {
        let mut manager = empty_manager()?;

        let uuid = manager.add_line(bananas())?;
        manager.set_quantity(uuid, 3)?;

        assert_eq!(manager.total(), dec!(8.97));
        assert_eq!(manager.formatted_total(), "$8.97");

        Ok(())
    }

    #[test]
    fn zero_quantity_is_ignored() -> testresult::TestResult {
        let mut manager = empty_manager()?;

        let uuid = manager.add_line(bananas())?;
        manager.set_quantity(uuid, 0)?;

        assert_eq!(manager.item_count(), 1);

        Ok(())
    }

    #[test]
    fn decrement_stops_at_one() -> testresult::TestResult {
        let mut manager = empty_manager()?;

        let uuid = manager.add_line(bananas())?;
        manager.decrement(uuid)?;

        assert_eq!(manager.item_count(), 1);

        manager.increment(uuid)?;
        manager.decrement(uuid)?;

        assert_eq!(manager.item_count(), 1);

        Ok(())
    }

    #[test]
    fn removing_a_line_updates_the_total() -> testresult::TestResult {
        let mut manager = empty_manager()?;

        let bananas_uuid = manager.add_line(bananas())?;
        manager.add_line(sourdough())?;

        manager.remove_line(bananas_uuid)?;

        assert_eq!(manager.lines().len(), 1);
        assert_eq!(manager.total(), dec!(5.49));

        Ok(())
    }

    #[test]
    fn unparsable_price_contributes_nothing() -> testresult::TestResult {
        let mut manager = empty_manager()?;

        manager.add_line(bananas())?;
        manager.add_line(NewLine {
            name: "Mystery Item".to_string(),
            price: "call for price".to_string(),
            image: "/images/mystery.jpg".to_string(),
        })?;

        assert_eq!(manager.total(), dec!(2.99));

        Ok(())
    }

    #[test]
    fn cart_survives_a_restore() -> testresult::TestResult {
        let mut store = MemoryStore::new();

        {
            let mut manager = CartManager::restore(std::mem::take(&mut store))?;
            let uuid = manager.add_line(bananas())?;
            manager.set_quantity(uuid, 3)?;
            manager.add_line(sourdough())?;
            store = manager.store;
        }

        let restored = CartManager::restore(store)?;

        assert_eq!(restored.lines().len(), 2);
        assert_eq!(restored.item_count(), 4);
        assert_eq!(restored.total(), dec!(14.46));

        Ok(())
    }

    #[test]
    fn corrupt_snapshot_restores_as_empty() -> testresult::TestResult {
        let mut store = MemoryStore::new();
        store.set(CART_KEY, "not a cart")?;

        let manager = CartManager::restore(store)?;

        assert!(manager.is_empty());
        assert_eq!(manager.total(), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn persisted_total_matches_display_format() -> testresult::TestResult {
        let mut manager = empty_manager()?;

        let uuid = manager.add_line(bananas())?;
        manager.set_quantity(uuid, 3)?;

        assert_eq!(
            manager.store.get(CART_TOTAL_KEY)?,
            Some("$8.97".to_string())
        );

        Ok(())
    }

    struct CountBadge {
        count: Arc<AtomicU32>,
    }

    impl CartObserver for CountBadge {
        fn count_changed(&self, count: u32) {
            self.count.store(count, Ordering::SeqCst);
        }
    }

    #[test]
    fn observers_hear_about_every_mutation() -> testresult::TestResult {
        let count = Arc::new(AtomicU32::new(u32::MAX));
        let mut manager = empty_manager()?;

        manager.subscribe(Box::new(CountBadge {
            count: Arc::clone(&count),
        }));

        assert_eq!(count.load(Ordering::SeqCst), 0);

        let uuid = manager.add_line(bananas())?;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        manager.set_quantity(uuid, 4)?;
        assert_eq!(count.load(Ordering::SeqCst), 4);

        manager.clear()?;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        Ok(())
    }

    // Checkout drives the manager from a spawned task, so a subscribed
    // observer must not make it thread-bound.
    #[test]
    fn manager_with_observers_can_move_across_threads() -> testresult::TestResult {
        fn assert_send<T: Send>(_value: &T) {}

        let mut manager = empty_manager()?;
        manager.subscribe(Box::new(CountBadge {
            count: Arc::new(AtomicU32::new(0)),
        }));

        assert_send(&manager);

        Ok(())
    }
}
