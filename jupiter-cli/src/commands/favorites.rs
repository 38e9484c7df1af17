use jupiter_core::Item;
use jupiter_db::Database;

use super::print_json;
use crate::CliError;

/// Parse an item the way a request body would be parsed.
pub(crate) fn parse_item(json: &str) -> Result<Item, CliError> {
    let item: Item = serde_json::from_str(json)
        .map_err(|e| CliError::invalid_input(format!("item JSON: {}", e)))?;
    if item.id.is_empty() {
        return Err(CliError::invalid_input("item id must not be empty"));
    }
    Ok(item)
}

pub(crate) fn run_favorite(db: &Database, user_id: &str, item_json: &str) -> Result<(), CliError> {
    let item = parse_item(item_json)?;
    db.with_connection(|conn| jupiter_db::add_favorite(conn, user_id, &item))?;
    log::info!("{} favorited {} '{}'", user_id, item.item_type, item.title);
    Ok(())
}

pub(crate) fn run_unfavorite(db: &Database, user_id: &str, item_id: &str) -> Result<(), CliError> {
    db.with_connection(|conn| jupiter_db::remove_favorite(conn, user_id, item_id))?;
    log::info!("{} unfavorited {}", user_id, item_id);
    Ok(())
}

pub(crate) fn run_favorites(db: &Database, user_id: &str) -> Result<(), CliError> {
    let buckets = db.with_connection(|conn| jupiter_db::get_favorite_items(conn, user_id))?;
    log::debug!("{} has {} favorites", user_id, buckets.total());
    print_json(&buckets)
}

pub(crate) fn run_game_ids(db: &Database, user_id: &str) -> Result<(), CliError> {
    let buckets =
        db.with_connection(|conn| jupiter_db::get_user_favorite_game_ids(conn, user_id))?;
    print_json(&buckets)
}

#[cfg(test)]
mod tests {
    use jupiter_core::ItemType;

    use super::*;

    #[test]
    fn parses_stream_payload() {
        let item = parse_item(
            r#"{"id":"s1","title":"Live","thumbnail_url":"t","user_name":"b","game_id":"g","item_type":"STREAM"}"#,
        )
        .unwrap();
        assert_eq!(item.item_type, ItemType::Stream);
        assert_eq!(item.url, None);
        assert_eq!(item.broadcaster_name, "b");
    }

    #[test]
    fn rejects_unknown_type_and_empty_id() {
        let bad_type = r#"{"id":"x","title":"t","thumbnail_url":"t","broadcaster_name":"b","item_type":"PODCAST"}"#;
        assert!(matches!(parse_item(bad_type), Err(CliError::InvalidInput(_))));

        let empty_id = r#"{"id":"","title":"t","thumbnail_url":"t","broadcaster_name":"b","item_type":"CLIP"}"#;
        assert!(matches!(parse_item(empty_id), Err(CliError::InvalidInput(_))));
    }
}
