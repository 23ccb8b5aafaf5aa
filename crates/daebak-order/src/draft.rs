//! The canonical mutable order state.
//!
//! `OrderDraft` is the single shared resource of the assembly pipeline. It is
//! written by exactly two paths, manual menu selection and delta
//! reconciliation, and every mutation re-establishes the draft invariants:
//!
//! - every catalog item always has a non-negative quantity;
//! - CHAMPAGNE forces GRAND style and disables SIMPLE;
//! - any other menu re-enables SIMPLE and defaults the style to it.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::menu::{ItemKey, Menu, Style};

/// A customer's in-progress dinner order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDraft {
    menu: Option<Menu>,
    style: Option<Style>,
    simple_available: bool,
    items: BTreeMap<ItemKey, u32>,
    delivery_address: String,
    card_number: String,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderDraft {
    /// Create an empty draft: no menu, no style, all quantities zero.
    pub fn new() -> Self {
        Self {
            menu: None,
            style: None,
            simple_available: true,
            items: ItemKey::ALL.into_iter().map(|k| (k, 0)).collect(),
            delivery_address: String::new(),
            card_number: String::new(),
        }
    }

    // -- Mutations --

    /// Change the selected menu. This is the single entry point for menu
    /// changes, used by manual card selection (`apply_defaults = true`) and
    /// by the reconciler (`apply_defaults = false`).
    ///
    /// The style always returns to SIMPLE-available/SIMPLE-selected first;
    /// CHAMPAGNE then overrides to GRAND and disables SIMPLE. When
    /// `apply_defaults`, every item quantity is replaced with the menu's
    /// starter set.
    pub fn select_menu(&mut self, menu: Menu, apply_defaults: bool) {
        self.simple_available = true;
        self.style = Some(Style::Simple);
        if menu == Menu::Champagne {
            self.simple_available = false;
            self.style = Some(Style::Grand);
        }
        self.menu = Some(menu);

        if apply_defaults {
            for qty in self.items.values_mut() {
                *qty = 0;
            }
            for (key, qty) in menu.starter_set() {
                self.items.insert(*key, *qty);
            }
        }
        tracing::debug!(menu = %menu, apply_defaults, "Menu selected");
    }

    /// String entry point for menu selection, as the presentation layer and
    /// the reconciler receive menu names.
    ///
    /// An empty or unrecognized key is a no-op, guarding against accidental
    /// clearing of an already-chosen menu.
    pub fn select_menu_key(&mut self, key: &str, apply_defaults: bool) {
        if key.is_empty() {
            return;
        }
        match Menu::parse(key) {
            Some(menu) => self.select_menu(menu, apply_defaults),
            None => tracing::debug!(key, "Ignoring unknown menu key"),
        }
    }

    /// Set the serving style. SIMPLE is refused while it is unavailable
    /// (CHAMPAGNE is selected), keeping the style invariant local.
    pub fn set_style(&mut self, style: Style) {
        if style == Style::Simple && !self.simple_available {
            tracing::debug!("Ignoring SIMPLE style while unavailable");
            return;
        }
        self.style = Some(style);
    }

    /// Set the quantity of a catalog item.
    pub fn set_item_quantity(&mut self, key: ItemKey, qty: u32) {
        self.items.insert(key, qty);
    }

    /// Set the delivery address, passed through verbatim.
    pub fn set_delivery_address(&mut self, address: impl Into<String>) {
        self.delivery_address = address.into();
    }

    /// Set the payment card number, passed through verbatim.
    pub fn set_card_number(&mut self, number: impl Into<String>) {
        self.card_number = number.into();
    }

    // -- Read access (presentation boundary) --

    /// The selected menu, if any.
    pub fn menu(&self) -> Option<Menu> {
        self.menu
    }

    /// The selected style, if any.
    pub fn style(&self) -> Option<Style> {
        self.style
    }

    /// Whether the SIMPLE style may currently be chosen.
    pub fn simple_available(&self) -> bool {
        self.simple_available
    }

    /// The quantity of one catalog item.
    pub fn quantity(&self, key: ItemKey) -> u32 {
        self.items.get(&key).copied().unwrap_or(0)
    }

    /// All item quantities. Every catalog key is present.
    pub fn items(&self) -> &BTreeMap<ItemKey, u32> {
        &self.items
    }

    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }
}

// =============================================================================
// Tests
// =============================================================================
