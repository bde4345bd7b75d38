//! # Inventory Commands
//!
//! Tauri commands behind the Inventory Management window.
//!
//! ## Window Actions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend Action          Tauri Command          Session Change         │
//! │  ───────────────          ─────────────          ──────────────         │
//! │                                                                         │
//! │  Window opens ──────────► list_products() ─────► entries rebuilt       │
//! │                                                                         │
//! │  Click list row ────────► select_product(i) ───► selected = i          │
//! │                                                                         │
//! │  Click "Add Product" ───► add_product(form) ───► form cleared on       │
//! │                                                   success, list rebuilt │
//! │                                                                         │
//! │  Click "Edit Selected" ─► begin_edit() ────────► (read only)           │
//! │     dialog OK/Cancel ───► edit_product(q, p) ──► list rebuilt          │
//! │                                                                         │
//! │  Click "Delete" ────────► delete_product() ────► list rebuilt          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the [`InventoryView`] to render, so the frontend
//! never holds state of its own. Edit and delete act on the product id
//! behind the selected row.

use serde::Serialize;
use tauri::State;
use tracing::debug;

use super::product::{self, EditOutcome};
use crate::error::ApiError;
use crate::state::{ConfigState, DbState, InventoryView, ListEntry, ProductForm, SessionState};

/// Returned by `add_product`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAdded {
    /// Stored (trimmed) name, for the "<name> added" message
    pub name: String,
    pub view: InventoryView,
}

/// Reloads the product list into the session.
pub async fn load_inventory(
    db: &DbState,
    config: &ConfigState,
    session: &SessionState,
) -> Result<InventoryView, ApiError> {
    // Checked before the store is touched
    session.with_inventory(|_| ())?;

    let products = product::list_products(db).await?;

    session.with_inventory_mut(|screen| {
        screen.set_products(&products, config);
        InventoryView::from(&*screen)
    })
}

/// Selects a list row by its 0-based index.
pub fn select_entry(session: &SessionState, index: usize) -> Result<InventoryView, ApiError> {
    session.with_inventory_mut(|screen| -> Result<InventoryView, ApiError> {
        screen.select(index)?;
        Ok(InventoryView::from(&*screen))
    })?
}

/// The selected row, if it names a product.
///
/// ## Errors
/// `SelectionError` "Select a valid product to edit" otherwise; the edit
/// dialog is not opened.
pub fn edit_target(session: &SessionState) -> Result<ListEntry, ApiError> {
    session
        .with_inventory(|screen| {
            screen
                .selected()
                .and_then(|i| screen.entries().get(i))
                .filter(|entry| entry.product_id.is_some())
                .cloned()
        })?
        .ok_or_else(|| ApiError::selection("Select a valid product to edit"))
}

/// Adds a product from the form inputs.
///
/// The form is kept in the session as typed and only cleared once the
/// insert succeeds.
pub async fn submit_product(
    db: &DbState,
    config: &ConfigState,
    session: &SessionState,
    form: ProductForm,
) -> Result<ProductAdded, ApiError> {
    session.with_inventory_mut(|screen| screen.form = form.clone())?;

    let added = product::add_product(db, &form.name, &form.quantity, &form.price).await?;

    session.with_inventory_mut(|screen| screen.form.clear())?;

    let view = load_inventory(db, config, session).await?;

    Ok(ProductAdded {
        name: added.name,
        view,
    })
}

/// Replaces quantity and price of the selected product.
///
/// `None` for either value means the dialog was cancelled; nothing changes.
pub async fn edit_selected(
    db: &DbState,
    config: &ConfigState,
    session: &SessionState,
    quantity: Option<&str>,
    price: Option<&str>,
) -> Result<InventoryView, ApiError> {
    let id = selected_product_id(session, "edit")?;

    match product::edit_product(db, id, quantity, price).await? {
        EditOutcome::Updated(_) => load_inventory(db, config, session).await,
        EditOutcome::Cancelled => session.with_inventory(|screen| InventoryView::from(screen)),
    }
}

/// Deletes the selected product.
pub async fn delete_selected(
    db: &DbState,
    config: &ConfigState,
    session: &SessionState,
) -> Result<InventoryView, ApiError> {
    let id = selected_product_id(session, "delete")?;

    product::delete_product(db, id).await?;

    load_inventory(db, config, session).await
}

fn selected_product_id(session: &SessionState, action: &str) -> Result<i64, ApiError> {
    session
        .with_inventory(|screen| screen.selected_product_id())?
        .map_err(|_| ApiError::selection(format!("Select a valid product to {}", action)))
}

/// Lists all products, rendered with low-stock warnings.
///
/// ## Frontend Usage
/// ```javascript
/// const view = await invoke('list_products');
/// ```
#[tauri::command]
pub async fn list_products(
    db: State<'_, DbState>,
    config: State<'_, ConfigState>,
    session: State<'_, SessionState>,
) -> Result<InventoryView, ApiError> {
    debug!("list_products command");
    load_inventory(&db, &config, &session).await
}

/// Selects a list row.
///
/// ## Frontend Usage
/// ```javascript
/// const view = await invoke('select_product', { index: 2 });
/// ```
#[tauri::command]
pub fn select_product(
    session: State<'_, SessionState>,
    index: usize,
) -> Result<InventoryView, ApiError> {
    debug!(index = index, "select_product command");
    select_entry(&session, index)
}

/// Checks the selection before the edit dialog opens.
#[tauri::command]
pub fn begin_edit(session: State<'_, SessionState>) -> Result<ListEntry, ApiError> {
    debug!("begin_edit command");
    edit_target(&session)
}

/// Adds a product.
///
/// ## Frontend Usage
/// ```javascript
/// const { name, view } = await invoke('add_product', {
///   form: { name: 'Widget', quantity: '10', price: '2.50' }
/// });
/// ```
///
/// ## Errors
/// * `VALIDATION_ERROR` - bad quantity, bad price, or empty name
#[tauri::command]
pub async fn add_product(
    db: State<'_, DbState>,
    config: State<'_, ConfigState>,
    session: State<'_, SessionState>,
    form: ProductForm,
) -> Result<ProductAdded, ApiError> {
    debug!(name = %form.name, "add_product command");
    submit_product(&db, &config, &session, form).await
}

/// Edits the selected product.
///
/// ## Frontend Usage
/// ```javascript
/// // null for both when the dialog is cancelled
/// const view = await invoke('edit_product', { quantity: '3', price: '1.99' });
/// ```
///
/// ## Errors
/// * `SELECTION_ERROR` - no product row selected, or it was deleted
/// * `VALIDATION_ERROR` - a value does not parse
#[tauri::command]
pub async fn edit_product(
    db: State<'_, DbState>,
    config: State<'_, ConfigState>,
    session: State<'_, SessionState>,
    quantity: Option<String>,
    price: Option<String>,
) -> Result<InventoryView, ApiError> {
    debug!("edit_product command");
    edit_selected(&db, &config, &session, quantity.as_deref(), price.as_deref()).await
}

/// Deletes the selected product.
///
/// ## Errors
/// * `SELECTION_ERROR` - no product row selected
#[tauri::command]
pub async fn delete_product(
    db: State<'_, DbState>,
    config: State<'_, ConfigState>,
    session: State<'_, SessionState>,
) -> Result<InventoryView, ApiError> {
    debug!("delete_product command");
    delete_selected(&db, &config, &session).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::LOW_STOCK_WARNING;
    use chrono::Utc;
    use stockroom_core::User;
    use stockroom_db::{Database, DbConfig};

    async fn setup() -> (DbState, ConfigState, SessionState) {
        let db = DbState::new(Database::new(DbConfig::in_memory()).await.unwrap());
        let session = SessionState::new();
        session.with_session_mut(|s| {
            s.authenticate(User {
                id: 1,
                username: "alice".to_string(),
                password_hash: String::new(),
                created_at: Utc::now(),
            })
        });
        (db, ConfigState::default(), session)
    }

    fn form(name: &str, quantity: &str, price: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
        }
    }

    #[tokio::test]
    async fn test_commands_need_login() {
        let (db, config, _) = setup().await;
        let gate = SessionState::new();

        let err = load_inventory(&db, &config, &gate).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotLoggedIn);

        let err = submit_product(&db, &config, &gate, form("A", "1", "1"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotLoggedIn);
        assert_eq!(product::count_products(&db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_clears_form_and_rebuilds_list() {
        let (db, config, session) = setup().await;

        let added = submit_product(&db, &config, &session, form(" Bolt ", "3", "0.4"))
            .await
            .unwrap();

        assert_eq!(added.name, "Bolt");
        assert_eq!(added.view.form, ProductForm::default());
        let texts: Vec<&str> = added.view.entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["1 - Bolt | Qty: 3 | ₹0.40", LOW_STOCK_WARNING]);
    }

    #[tokio::test]
    async fn test_failed_add_keeps_form() {
        let (db, config, session) = setup().await;

        let err = submit_product(&db, &config, &session, form("Widget", "ten", "2.50"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let kept = session.with_inventory(|s| s.form.clone()).unwrap();
        assert_eq!(kept, form("Widget", "ten", "2.50"));
    }

    #[tokio::test]
    async fn test_edit_needs_product_row() {
        let (db, config, session) = setup().await;
        product::add_product(&db, "Bolt", "3", "0.40").await.unwrap();
        load_inventory(&db, &config, &session).await.unwrap();

        let err = edit_target(&session).unwrap_err();
        assert_eq!(err.message, "Select a valid product to edit");

        // Index 1 is the warning line
        select_entry(&session, 1).unwrap();
        let err = edit_selected(&db, &config, &session, Some("9"), Some("1"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SelectionError);
        assert_eq!(err.message, "Select a valid product to edit");

        select_entry(&session, 0).unwrap();
        assert_eq!(edit_target(&session).unwrap().product_id, Some(1));
    }

    #[tokio::test]
    async fn test_cancelled_edit_keeps_selection() {
        let (db, config, session) = setup().await;
        product::add_product(&db, "Widget", "10", "2.50").await.unwrap();
        load_inventory(&db, &config, &session).await.unwrap();
        select_entry(&session, 0).unwrap();

        let view = edit_selected(&db, &config, &session, None, Some("1"))
            .await
            .unwrap();
        assert_eq!(view.selected, Some(0));
        assert_eq!(view.entries[0].text, "1 - Widget | Qty: 10 | ₹2.50");
    }

    #[tokio::test]
    async fn test_delete_without_selection() {
        let (db, config, session) = setup().await;
        product::add_product(&db, "Widget", "10", "2.50").await.unwrap();
        load_inventory(&db, &config, &session).await.unwrap();

        let err = delete_selected(&db, &config, &session).await.unwrap_err();
        assert_eq!(err.message, "Select a valid product to delete");
        assert_eq!(product::count_products(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_select_out_of_range() {
        let (db, config, session) = setup().await;
        load_inventory(&db, &config, &session).await.unwrap();

        let err = select_entry(&session, 5).unwrap_err();
        assert_eq!(err.code, ErrorCode::SelectionError);
    }
}
