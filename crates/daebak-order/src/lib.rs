//! Order domain for the Daebak dinner service.
//!
//! Defines the menu/style/item catalog, the mutable [`OrderDraft`] that
//! accumulates a customer's order, and the reconciler that merges structured
//! deltas from the interpretation service into the draft.

pub mod draft;
pub mod menu;
pub mod reconcile;

pub use draft::OrderDraft;
pub use menu::{ItemKey, Menu, Style};
pub use reconcile::{apply_delta, OrderDelta, QuantityValue};
