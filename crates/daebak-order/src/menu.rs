//! The fixed dinner catalog: menus, serving styles, and item keys.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Menu
// =============================================================================

/// One of the four dinner menus the service offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Menu {
    Valentine,
    French,
    English,
    Champagne,
}

impl Menu {
    /// The wire/display name of the menu.
    pub fn as_str(&self) -> &'static str {
        match self {
            Menu::Valentine => "VALENTINE",
            Menu::French => "FRENCH",
            Menu::English => "ENGLISH",
            Menu::Champagne => "CHAMPAGNE",
        }
    }

    /// Parse a menu name, case-insensitively.
    ///
    /// Returns `None` for anything outside the fixed enumeration.
    pub fn parse(value: &str) -> Option<Menu> {
        let v = value.trim();
        [Menu::Valentine, Menu::French, Menu::English, Menu::Champagne]
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(v))
    }

    /// The fixed starter items applied when this menu is chosen manually.
    pub fn starter_set(&self) -> &'static [(ItemKey, u32)] {
        match self {
            Menu::Valentine => &[(ItemKey::Wine, 1), (ItemKey::Steak, 1)],
            Menu::French => &[
                (ItemKey::CoffeeCup, 1),
                (ItemKey::Wine, 1),
                (ItemKey::Salad, 1),
                (ItemKey::Steak, 1),
            ],
            Menu::English => &[
                (ItemKey::Eggscramble, 1),
                (ItemKey::Bacon, 1),
                (ItemKey::Bread, 1),
                (ItemKey::Steak, 1),
            ],
            Menu::Champagne => &[
                (ItemKey::Champagne, 1),
                (ItemKey::Baguette, 4),
                (ItemKey::CoffeePot, 1),
                (ItemKey::Wine, 1),
                (ItemKey::Steak, 1),
            ],
        }
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Style
// =============================================================================

/// Serving style of a dinner.
///
/// CHAMPAGNE dinners are never served SIMPLE; [`crate::OrderDraft`] tracks
/// the availability flag alongside the selected style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Style {
    Simple,
    Grand,
}

impl Style {
    /// The wire/display name of the style.
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Simple => "SIMPLE",
            Style::Grand => "GRAND",
        }
    }

    /// Parse a style name, case-insensitively.
    ///
    /// Returns `None` for unknown styles (the upstream model occasionally
    /// emits values such as `DELUXE` that the order form does not offer).
    pub fn parse(value: &str) -> Option<Style> {
        let v = value.trim();
        [Style::Simple, Style::Grand]
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(v))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// ItemKey
// =============================================================================

/// The closed catalog of orderable items.
///
/// Every [`crate::OrderDraft`] carries a quantity for each key; no key
/// outside this set is ever stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKey {
    Wine,
    Steak,
    CoffeeCup,
    CoffeePot,
    Salad,
    Eggscramble,
    Bacon,
    Bread,
    Baguette,
    Champagne,
}

impl ItemKey {
    /// All catalog keys, in display order.
    pub const ALL: [ItemKey; 10] = [
        ItemKey::Wine,
        ItemKey::Steak,
        ItemKey::CoffeeCup,
        ItemKey::CoffeePot,
        ItemKey::Salad,
        ItemKey::Eggscramble,
        ItemKey::Bacon,
        ItemKey::Bread,
        ItemKey::Baguette,
        ItemKey::Champagne,
    ];

    /// The wire name of the item, as the service and the form use it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKey::Wine => "wine",
            ItemKey::Steak => "steak",
            ItemKey::CoffeeCup => "coffee_cup",
            ItemKey::CoffeePot => "coffee_pot",
            ItemKey::Salad => "salad",
            ItemKey::Eggscramble => "eggscramble",
            ItemKey::Bacon => "bacon",
            ItemKey::Bread => "bread",
            ItemKey::Baguette => "baguette",
            ItemKey::Champagne => "champagne",
        }
    }

    /// Parse an exact catalog key. Unknown keys map to `None` and are
    /// skipped by the reconciler rather than stored.
    pub fn parse(value: &str) -> Option<ItemKey> {
        ItemKey::ALL.into_iter().find(|k| k.as_str() == value)
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================
