//! Item catalog store.

use std::collections::{BTreeMap, BTreeSet};

use jupiter_core::{Item, ItemType};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use thiserror::Error;

use crate::error::{store_err, StoreError};

const ITEM_COLUMNS: &str =
    "id, title, url, thumbnail_url, broadcaster_name, game_id, item_type";

#[derive(Debug, Error)]
#[error("unknown item type '{0}'")]
struct UnknownItemType(String);

/// Insert an item unless one with the same id already exists.
///
/// First write wins: saving an id a second time is a no-op even when the
/// other fields differ, so callers can save unconditionally.
pub fn save_item(conn: &Connection, item: &Item) -> Result<(), StoreError> {
    let inserted = conn
        .execute(
            "INSERT INTO items (id, title, url, thumbnail_url, broadcaster_name, game_id, item_type)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(id) DO NOTHING",
            params![
                item.id,
                item.title,
                item.url,
                item.thumbnail_url,
                item.broadcaster_name,
                item.game_id,
                item.item_type.as_str(),
            ],
        )
        .map_err(store_err("add item to catalog"))?;

    if inserted == 0 {
        log::debug!("Item '{}' already in catalog", item.id);
    }
    Ok(())
}

/// Find one item by id.
pub fn get_item(conn: &Connection, id: &str) -> Result<Option<Item>, StoreError> {
    let sql = format!("SELECT {} FROM items WHERE id = ?1", ITEM_COLUMNS);
    conn.query_row(&sql, params![id], row_to_item)
        .optional()
        .map_err(store_err("get item from catalog"))
}

/// Fetch whichever of `ids` are in the catalog. Missing ids are omitted.
pub fn get_items_by_id(
    conn: &Connection,
    ids: &BTreeSet<String>,
) -> Result<BTreeMap<String, Item>, StoreError> {
    let sql = format!("SELECT {} FROM items WHERE id = ?1", ITEM_COLUMNS);
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(store_err("get items from catalog"))?;

    let mut items = BTreeMap::new();
    for id in ids {
        let item = stmt
            .query_row(params![id], row_to_item)
            .optional()
            .map_err(store_err("get items from catalog"))?;
        if let Some(item) = item {
            items.insert(item.id.clone(), item);
        }
    }
    Ok(items)
}

/// Parse a stored item type, failing the row on names this crate never writes.
pub(crate) fn item_type_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<ItemType> {
    let raw: String = row.get(idx)?;
    ItemType::parse(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(UnknownItemType(raw)))
    })
}

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        title: row.get(1)?,
        url: row.get(2)?,
        thumbnail_url: row.get(3)?,
        broadcaster_name: row.get(4)?,
        game_id: row.get(5)?,
        item_type: item_type_column(row, 6)?,
    })
}
