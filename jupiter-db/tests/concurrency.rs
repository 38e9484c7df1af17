use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use jupiter_core::{encrypt_password, Account, Item, ItemType};
use jupiter_db::*;
use tempfile::TempDir;

const WORKERS: usize = 8;

fn setup_db(tmp: &TempDir) -> Database {
    let config = StoreConfig::new(tmp.path().join("nested").join("jupiter.db"))
        .with_busy_timeout(Duration::from_secs(30));
    let db = Database::new(config);
    db.initialize().unwrap();

    let account = Account {
        user_id: "u1".to_string(),
        password: encrypt_password("u1", "secret"),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    };
    db.with_connection(|conn| register(conn, &account)).unwrap();
    db
}

fn test_stream() -> Item {
    Item {
        id: "s1".to_string(),
        title: "Marathon".to_string(),
        url: None,
        thumbnail_url: "https://img.example.com/s1.jpg".to_string(),
        broadcaster_name: "streamer".to_string(),
        game_id: Some("509658".to_string()),
        item_type: ItemType::Stream,
    }
}

fn count(db: &Database, table: &str) -> i64 {
    db.with_connection(|conn| {
        Ok(conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .unwrap())
    })
    .unwrap()
}

/// Run `work` on `WORKERS` threads, each with its own connection, released together.
fn race<F>(db: &Database, work: F) -> Vec<Result<(), StoreError>>
where
    F: Fn(usize, &rusqlite::Connection) -> Result<(), StoreError> + Send + Sync + 'static,
{
    let barrier = Arc::new(Barrier::new(WORKERS));
    let work = Arc::new(work);
    let handles: Vec<_> = (0..WORKERS)
        .map(|i| {
            let db = db.clone();
            let barrier = Arc::clone(&barrier);
            let work = Arc::clone(&work);
            thread::spawn(move || {
                let conn = db.connect()?;
                barrier.wait();
                work(i, &conn)
            })
        })
        .collect();
    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

#[test]
fn concurrent_duplicate_favorites_converge() {
    let tmp = TempDir::new().unwrap();
    let db = setup_db(&tmp);

    let results = race(&db, |_, conn| add_favorite(conn, "u1", &test_stream()));
    for result in results {
        result.unwrap();
    }

    assert_eq!(count(&db, "items"), 1);
    assert_eq!(count(&db, "favorite_links"), 1);
}

#[test]
fn concurrent_add_and_remove_never_corrupts() {
    let tmp = TempDir::new().unwrap();
    let db = setup_db(&tmp);

    let results = race(&db, |i, conn| {
        if i % 2 == 0 {
            add_favorite(conn, "u1", &test_stream())
        } else {
            remove_favorite(conn, "u1", "s1")
        }
    });
    for result in results {
        result.unwrap();
    }

    let links = count(&db, "favorite_links");
    assert!(links == 0 || links == 1, "unexpected link count {}", links);
    assert_eq!(count(&db, "items"), 1);

    let buckets = db
        .with_connection(|conn| get_favorite_items(conn, "u1"))
        .unwrap();
    assert_eq!(buckets.get(ItemType::Stream).len() as i64, links);
}

#[test]
fn concurrent_readers_see_complete_buckets() {
    let tmp = TempDir::new().unwrap();
    let db = setup_db(&tmp);
    db.with_connection(|conn| add_favorite(conn, "u1", &test_stream()))
        .unwrap();

    let results = race(&db, |i, conn| {
        if i == 0 {
            remove_favorite(conn, "u1", "s1")
        } else {
            let buckets = get_favorite_items(conn, "u1")?;
            assert_eq!(buckets.iter().count(), ItemType::ALL.len());
            Ok(())
        }
    });
    for result in results {
        result.unwrap();
    }
}
