//! Favorites queries, grouped by item type.
//!
//! Every result is a [`TypeBuckets`], which always carries one list per
//! [`ItemType`](jupiter_core::ItemType) so callers never check for missing
//! keys. Ids are walked in ascending order, so each list is ordered by item id.

use std::collections::BTreeSet;

use jupiter_core::{Item, TypeBuckets};
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};

use crate::error::{store_err, StoreError};
use crate::favorites::get_favorite_item_ids;
use crate::items::{get_items_by_id, item_type_column};

/// Items favorited by `user_id`, grouped by type.
///
/// Ids and items are read in one transaction, so a concurrent unfavorite
/// cannot leave an id without its item.
pub fn get_favorite_items(
    conn: &Connection,
    user_id: &str,
) -> Result<TypeBuckets<Item>, StoreError> {
    let tx = read_transaction(conn)?;

    let ids = get_favorite_item_ids(&tx, user_id)?;
    let items = get_items_by_id(&tx, &ids)?;

    tx.commit().map_err(store_err("finish favorite items read"))?;

    let mut buckets = TypeBuckets::new();
    for item in items.into_values() {
        buckets.push(item.item_type, item);
    }
    Ok(buckets)
}

/// Game ids of the given items, grouped by item type.
///
/// Unknown ids and items without a game id are skipped.
pub fn get_favorite_game_ids(
    conn: &Connection,
    item_ids: &BTreeSet<String>,
) -> Result<TypeBuckets<String>, StoreError> {
    let mut stmt = conn
        .prepare_cached("SELECT game_id, item_type FROM items WHERE id = ?1")
        .map_err(store_err("get favorite game ids"))?;

    let mut buckets = TypeBuckets::new();
    for item_id in item_ids {
        let row = stmt
            .query_row(params![item_id], |row| {
                Ok((row.get::<_, Option<String>>(0)?, item_type_column(row, 1)?))
            })
            .optional()
            .map_err(store_err("get favorite game ids"))?;

        if let Some((Some(game_id), item_type)) = row {
            buckets.push(item_type, game_id);
        }
    }
    Ok(buckets)
}

/// Game ids among everything `user_id` has favorited, grouped by item type.
pub fn get_user_favorite_game_ids(
    conn: &Connection,
    user_id: &str,
) -> Result<TypeBuckets<String>, StoreError> {
    let tx = read_transaction(conn)?;

    let ids = get_favorite_item_ids(&tx, user_id)?;
    let game_ids = get_favorite_game_ids(&tx, &ids)?;

    tx.commit().map_err(store_err("finish favorite game ids read"))?;
    Ok(game_ids)
}

fn read_transaction(conn: &Connection) -> Result<Transaction<'_>, StoreError> {
    Transaction::new_unchecked(conn, TransactionBehavior::Deferred)
        .map_err(store_err("begin read transaction"))
}
