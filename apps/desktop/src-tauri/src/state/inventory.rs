//! # Inventory Screen State
//!
//! Everything the inventory screen shows, held as plain data:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductForm   name [Widget    ]  quantity [10  ]  price [2.50 ]       │
//! │                                                                         │
//! │  entries       "1 - Widget | Qty: 10 | ₹2.50"        product_id: 1     │
//! │                "2 - Bolt | Qty: 3 | ₹0.40"           product_id: 2     │
//! │                "⚠️ Low Stock Alert!"                  product_id: None  │
//! │                                                                         │
//! │  selected      Some(1)  ──►  edit/delete act on product 2              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Edit and delete resolve the selection through `product_id`; the display
//! text is never parsed back.

use serde::{Deserialize, Serialize};
use stockroom_core::Product;

use super::ConfigState;
use crate::error::ApiError;

/// Line rendered after every low-stock product.
pub const LOW_STOCK_WARNING: &str = "⚠️ Low Stock Alert!";

/// Line rendered when there are no products.
pub const EMPTY_LIST_MARKER: &str = "No products found.";

/// The three text inputs of the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl ProductForm {
    /// Empties all three inputs.
    pub fn clear(&mut self) {
        self.name.clear();
        self.quantity.clear();
        self.price.clear();
    }
}

/// One rendered line of the product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    /// Text as displayed.
    pub text: String,

    /// Set for product rows only.
    pub product_id: Option<i64>,
}

impl ListEntry {
    fn product(product: &Product, config: &ConfigState) -> Self {
        ListEntry {
            text: format!(
                "{} - {} | Qty: {} | {}",
                product.id,
                product.name,
                product.quantity,
                config.format_price(product.price())
            ),
            product_id: Some(product.id),
        }
    }

    fn note(text: &str) -> Self {
        ListEntry {
            text: text.to_string(),
            product_id: None,
        }
    }
}

/// State of the inventory screen.
#[derive(Debug, Clone, Default)]
pub struct InventoryScreen {
    /// Add form inputs.
    pub form: ProductForm,

    entries: Vec<ListEntry>,
    selected: Option<usize>,
}

impl InventoryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the list from `products` and clears the selection.
    ///
    /// Low-stock products get a warning line right after their row; an empty
    /// inventory renders as a single marker line.
    pub fn set_products(&mut self, products: &[Product], config: &ConfigState) {
        self.entries.clear();
        self.selected = None;

        if products.is_empty() {
            self.entries.push(ListEntry::note(EMPTY_LIST_MARKER));
            return;
        }

        for product in products {
            self.entries.push(ListEntry::product(product, config));
            if product.is_low_stock() {
                self.entries.push(ListEntry::note(LOW_STOCK_WARNING));
            }
        }
    }

    /// The rendered list, in display order.
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Index of the selected entry.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selects the entry at `index` (0-based, display order).
    ///
    /// Any line may be selected, including warning lines; whether it names a
    /// product is checked when it is used.
    pub fn select(&mut self, index: usize) -> Result<&ListEntry, ApiError> {
        let entry = self
            .entries
            .get(index)
            .ok_or_else(|| ApiError::selection(format!("No row {} in the list", index)))?;

        self.selected = Some(index);
        Ok(entry)
    }

    /// Product id behind the current selection.
    ///
    /// ## Errors
    /// `SelectionError` if nothing is selected or the selected line is a
    /// warning or the empty marker.
    pub fn selected_product_id(&self) -> Result<i64, ApiError> {
        self.selected
            .and_then(|i| self.entries.get(i))
            .and_then(|entry| entry.product_id)
            .ok_or_else(|| ApiError::selection("Select a valid product"))
    }
}

/// What the inventory window renders, sent to the frontend after every
/// command.
///
/// ```json
/// {
///   "form": { "name": "", "quantity": "", "price": "" },
///   "entries": [{ "text": "2 - Bolt | Qty: 3 | ₹0.40", "productId": 2 },
///               { "text": "⚠️ Low Stock Alert!", "productId": null }],
///   "selected": 0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryView {
    pub form: ProductForm,
    pub entries: Vec<ListEntry>,
    pub selected: Option<usize>,
}

impl From<&InventoryScreen> for InventoryView {
    fn from(screen: &InventoryScreen) -> Self {
        InventoryView {
            form: screen.form.clone(),
            entries: screen.entries.clone(),
            selected: screen.selected,
        }
    }
}
