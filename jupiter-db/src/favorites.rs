//! Favorite link store: the (user, item) join table.

use std::collections::BTreeSet;

use jupiter_core::Item;
use rusqlite::{params, Connection, Transaction, TransactionBehavior};

use crate::error::{store_err, StoreError};
use crate::items::save_item;

/// Record that `user_id` favorited `item`.
///
/// The item is saved to the catalog before the link is written, in one
/// immediate transaction, so a link can never point at a missing item.
/// Favoriting the same item twice leaves a single link.
pub fn add_favorite(conn: &Connection, user_id: &str, item: &Item) -> Result<(), StoreError> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(store_err("begin favorite transaction"))?;

    save_item(&tx, item)?;

    let inserted = tx
        .execute(
            "INSERT INTO favorite_links (user_id, item_id) VALUES (?1, ?2)
             ON CONFLICT(user_id, item_id) DO NOTHING",
            params![user_id, item.id],
        )
        .map_err(store_err("save favorite item"))?;

    tx.commit().map_err(store_err("commit favorite item"))?;

    if inserted == 0 {
        log::debug!("'{}' already favorited '{}'", user_id, item.id);
    }
    Ok(())
}

/// Remove a favorite link if present. Removing a missing link is a no-op.
///
/// The item stays in the catalog even when no links reference it.
pub fn remove_favorite(conn: &Connection, user_id: &str, item_id: &str) -> Result<(), StoreError> {
    let removed = conn
        .execute(
            "DELETE FROM favorite_links WHERE user_id = ?1 AND item_id = ?2",
            params![user_id, item_id],
        )
        .map_err(store_err("delete favorite item"))?;

    if removed == 0 {
        log::debug!("'{}' had not favorited '{}'", user_id, item_id);
    }
    Ok(())
}

/// All item ids favorited by `user_id`, in ascending order.
pub fn get_favorite_item_ids(
    conn: &Connection,
    user_id: &str,
) -> Result<BTreeSet<String>, StoreError> {
    let mut stmt = conn
        .prepare_cached("SELECT item_id FROM favorite_links WHERE user_id = ?1")
        .map_err(store_err("get favorite item ids"))?;
    let rows = stmt
        .query_map(params![user_id], |row| row.get::<_, String>(0))
        .map_err(store_err("get favorite item ids"))?;
    rows.collect::<Result<BTreeSet<_>, _>>()
        .map_err(store_err("get favorite item ids"))
}
