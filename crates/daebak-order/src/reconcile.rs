//! Reconciliation of interpretation-service deltas into the order draft.
//!
//! A delta is the structured, partial order description returned when the
//! service resolves a conversation round. It is applied exactly once, in a
//! fixed field order, and then discarded. Nothing in here fails: malformed
//! fields degrade to the nearest safe value (zero, ignored, or empty).

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::draft::OrderDraft;
use crate::menu::{ItemKey, Menu, Style};

/// A quantity as the service sends it: a bare number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QuantityValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl QuantityValue {
    /// Collapse to a safe quantity: parse failures and negative values
    /// become zero, fractional values truncate.
    pub fn to_quantity(&self) -> u32 {
        let parsed = match self {
            QuantityValue::Int(n) => Some(*n),
            QuantityValue::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            QuantityValue::Float(_) => None,
            QuantityValue::Text(s) => s.trim().parse::<i64>().ok(),
        };
        match parsed {
            Some(n) if n >= 0 => n.min(i64::from(u32::MAX)) as u32,
            _ => 0,
        }
    }
}

/// The structured order changes carried by a resolved (`DONE`) service reply.
///
/// All fields are optional; the field names mirror the service's camelCase
/// wire names so the response payload can embed this struct directly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDelta {
    pub menu: Option<String>,
    pub style: Option<String>,
    pub items: Option<BTreeMap<String, QuantityValue>>,
    pub delivery_address: Option<String>,
    pub card_number: Option<String>,
}

/// Merge a delta into the draft.
///
/// The order of the four steps is load-bearing: the menu change runs first
/// so that the style rules it implies can then be overridden by an explicit
/// style, and item quantities land after both. A menu arriving by delta
/// does NOT apply the menu's starter set; the service sends the intended
/// item quantities itself, unlike a manual card click.
pub fn apply_delta(draft: &mut OrderDraft, delta: OrderDelta) {
    if let Some(menu_key) = delta.menu.as_deref() {
        match Menu::parse(menu_key) {
            Some(menu) => draft.select_menu(menu, false),
            None if menu_key.is_empty() => {}
            None => tracing::debug!(menu = menu_key, "Delta named an unknown menu; ignored"),
        }
    }

    if let Some(style_name) = delta.style.as_deref() {
        match Style::parse(style_name) {
            Some(style) => draft.set_style(style),
            None => tracing::debug!(style = style_name, "Delta named an unknown style; ignored"),
        }
    }

    if let Some(items) = &delta.items {
        for (key, value) in items {
            match ItemKey::parse(key) {
                Some(item) => draft.set_item_quantity(item, value.to_quantity()),
                None => tracing::debug!(key = %key, "Delta item outside the catalog; skipped"),
            }
        }
    }

    // Delivery fields are always overwritten, to empty when absent.
    draft.set_delivery_address(delta.delivery_address.unwrap_or_default());
    draft.set_card_number(delta.card_number.unwrap_or_default());

    tracing::info!(
        menu = ?draft.menu(),
        style = ?draft.style(),
        "Order delta applied"
    );
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn items(pairs: &[(&str, QuantityValue)]) -> Option<BTreeMap<String, QuantityValue>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_quantity_value_parsing() {
        assert_eq!(QuantityValue::Int(3).to_quantity(), 3);
        assert_eq!(QuantityValue::Int(-2).to_quantity(), 0);
        assert_eq!(QuantityValue::Text("2".into()).to_quantity(), 2);
        assert_eq!(QuantityValue::Text(" 7 ".into()).to_quantity(), 7);
        assert_eq!(QuantityValue::Text("abc".into()).to_quantity(), 0);
        assert_eq!(QuantityValue::Text("-1".into()).to_quantity(), 0);
        assert_eq!(QuantityValue::Text("".into()).to_quantity(), 0);
        assert_eq!(QuantityValue::Float(1.9).to_quantity(), 1);
        assert_eq!(QuantityValue::Float(-0.5).to_quantity(), 0);
        assert_eq!(QuantityValue::Float(f64::NAN).to_quantity(), 0);
    }

    #[test]
    fn test_quantity_value_deserializes_from_number_or_string() {
        let v: QuantityValue = serde_json::from_str("4").unwrap();
        assert_eq!(v.to_quantity(), 4);
        let v: QuantityValue = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(v.to_quantity(), 4);
        let v: QuantityValue = serde_json::from_str("2.5").unwrap();
        assert_eq!(v.to_quantity(), 2);
    }

    #[test]
    fn test_delta_deserializes_camel_case() {
        let json = r#"{
            "menu": "FRENCH",
            "style": "GRAND",
            "items": {"wine": "2", "steak": 1},
            "deliveryAddress": "addr",
            "cardNumber": "1234"
        }"#;
        let delta: OrderDelta = serde_json::from_str(json).unwrap();
        assert_eq!(delta.menu.as_deref(), Some("FRENCH"));
        assert_eq!(delta.delivery_address.as_deref(), Some("addr"));
        assert_eq!(delta.card_number.as_deref(), Some("1234"));
        assert_eq!(delta.items.unwrap().len(), 2);
    }

    #[test]
    fn test_menu_via_delta_keeps_existing_items() {
        // The deliberate asymmetry: a delta menu never applies starter sets.
        let mut draft = OrderDraft::new();
        draft.set_item_quantity(ItemKey::Steak, 3);

        let delta = OrderDelta {
            menu: Some("FRENCH".into()),
            items: items(&[("wine", QuantityValue::Text("2".into()))]),
            ..OrderDelta::default()
        };
        apply_delta(&mut draft, delta);

        assert_eq!(draft.menu(), Some(Menu::French));
        assert_eq!(draft.quantity(ItemKey::Wine), 2);
        assert_eq!(draft.quantity(ItemKey::Steak), 3);
        // Starter items that the delta did not mention stay untouched.
        assert_eq!(draft.quantity(ItemKey::CoffeeCup), 0);
        assert_eq!(draft.quantity(ItemKey::Salad), 0);
    }

    #[test]
    fn test_champagne_via_delta_enforces_style_rules() {
        let mut draft = OrderDraft::new();
        let delta = OrderDelta {
            menu: Some("CHAMPAGNE".into()),
            ..OrderDelta::default()
        };
        apply_delta(&mut draft, delta);
        assert_eq!(draft.style(), Some(Style::Grand));
        assert!(!draft.simple_available());
    }

    #[test]
    fn test_explicit_style_in_same_delta_overrides_default() {
        let mut draft = OrderDraft::new();
        draft.select_menu(Menu::Champagne, true);

        let delta = OrderDelta {
            menu: Some("FRENCH".into()),
            style: Some("GRAND".into()),
            ..OrderDelta::default()
        };
        apply_delta(&mut draft, delta);
        // Menu change re-enabled SIMPLE and defaulted to it, then the
        // explicit style landed on top.
        assert!(draft.simple_available());
        assert_eq!(draft.style(), Some(Style::Grand));
    }

    #[test]
    fn test_unknown_style_ignored() {
        let mut draft = OrderDraft::new();
        let delta = OrderDelta {
            menu: Some("VALENTINE".into()),
            style: Some("DELUXE".into()),
            ..OrderDelta::default()
        };
        apply_delta(&mut draft, delta);
        assert_eq!(draft.style(), Some(Style::Simple));
    }

    #[test]
    fn test_unknown_menu_ignored() {
        let mut draft = OrderDraft::new();
        draft.select_menu(Menu::English, true);
        let delta = OrderDelta {
            menu: Some("KOREAN".into()),
            ..OrderDelta::default()
        };
        apply_delta(&mut draft, delta);
        assert_eq!(draft.menu(), Some(Menu::English));
    }

    #[test]
    fn test_unparseable_quantity_stores_zero() {
        let mut draft = OrderDraft::new();
        draft.set_item_quantity(ItemKey::Wine, 5);
        let delta = OrderDelta {
            items: items(&[("wine", QuantityValue::Text("abc".into()))]),
            ..OrderDelta::default()
        };
        apply_delta(&mut draft, delta);
        assert_eq!(draft.quantity(ItemKey::Wine), 0);
    }

    #[test]
    fn test_negative_quantity_stores_zero() {
        let mut draft = OrderDraft::new();
        let delta = OrderDelta {
            items: items(&[("steak", QuantityValue::Int(-4))]),
            ..OrderDelta::default()
        };
        apply_delta(&mut draft, delta);
        assert_eq!(draft.quantity(ItemKey::Steak), 0);
    }

    #[test]
    fn test_non_catalog_keys_never_stored() {
        let mut draft = OrderDraft::new();
        let delta = OrderDelta {
            items: items(&[
                ("noodles", QuantityValue::Int(3)),
                ("wine", QuantityValue::Int(1)),
                ("coffe_cup", QuantityValue::Int(2)), // the model's typo key
            ]),
            ..OrderDelta::default()
        };
        apply_delta(&mut draft, delta);
        assert_eq!(draft.quantity(ItemKey::Wine), 1);
        assert_eq!(draft.items().len(), 10);
        assert!(draft.items().keys().all(|k| ItemKey::ALL.contains(k)));
    }

    #[test]
    fn test_items_absent_from_delta_left_unchanged() {
        let mut draft = OrderDraft::new();
        draft.set_item_quantity(ItemKey::Bacon, 2);
        let delta = OrderDelta {
            items: items(&[("bread", QuantityValue::Int(1))]),
            ..OrderDelta::default()
        };
        apply_delta(&mut draft, delta);
        assert_eq!(draft.quantity(ItemKey::Bacon), 2);
        assert_eq!(draft.quantity(ItemKey::Bread), 1);
    }

    #[test]
    fn test_delivery_fields_copied_verbatim() {
        let mut draft = OrderDraft::new();
        let delta = OrderDelta {
            delivery_address: Some("서울시 마포구 1-2".into()),
            card_number: Some("1111-2222-3333-4444".into()),
            ..OrderDelta::default()
        };
        apply_delta(&mut draft, delta);
        assert_eq!(draft.delivery_address(), "서울시 마포구 1-2");
        assert_eq!(draft.card_number(), "1111-2222-3333-4444");
    }

    #[test]
    fn test_delivery_fields_cleared_when_absent() {
        // Unlike items, the delivery fields are always overwritten.
        let mut draft = OrderDraft::new();
        draft.set_delivery_address("old address");
        draft.set_card_number("old card");
        apply_delta(&mut draft, OrderDelta::default());
        assert_eq!(draft.delivery_address(), "");
        assert_eq!(draft.card_number(), "");
    }

    #[test]
    fn test_empty_delta_only_clears_delivery_fields() {
        let mut draft = OrderDraft::new();
        draft.select_menu(Menu::Valentine, true);
        apply_delta(&mut draft, OrderDelta::default());
        assert_eq!(draft.menu(), Some(Menu::Valentine));
        assert_eq!(draft.quantity(ItemKey::Wine), 1);
    }

    #[test]
    fn test_all_quantities_remain_in_catalog_and_non_negative() {
        let mut draft = OrderDraft::new();
        let delta = OrderDelta {
            menu: Some("champagne".into()),
            items: items(&[
                ("wine", QuantityValue::Text("-3".into())),
                ("baguette", QuantityValue::Int(i64::MAX)),
                ("champagne", QuantityValue::Text("what".into())),
                ("bogus", QuantityValue::Int(99)),
            ]),
            ..OrderDelta::default()
        };
        apply_delta(&mut draft, delta);
        assert_eq!(draft.items().len(), 10);
        assert_eq!(draft.quantity(ItemKey::Wine), 0);
        assert_eq!(draft.quantity(ItemKey::Champagne), 0);
        assert_eq!(draft.quantity(ItemKey::Baguette), u32::MAX);
    }
}
