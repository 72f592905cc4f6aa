//! Diesel-backed menu repository
//!
//! The SQLite table is the cache; the watch channel is the live view over
//! it. Every committed write reloads the full record set inside the same
//! blocking task and publishes it once, so observers never see a partial
//! batch and a bulk insert produces exactly one emission.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use tokio::sync::watch;

use ll_core::menu::MenuItem;
use ll_core::ports::{MenuRepositoryError, MenuRepositoryPort};

use crate::db::{models::MenuItemRow, pool::DbPool, schema::t_menu_item::dsl::*};

pub struct DieselMenuRepository {
    pool: DbPool,
    sender: watch::Sender<Vec<MenuItem>>,
}

impl DieselMenuRepository {
    /// Build the repository over an initialized pool, seeding the watch
    /// channel with the current table contents so new subscribers start
    /// from the persisted snapshot.
    pub fn new(pool: DbPool) -> anyhow::Result<Self> {
        let initial = {
            let mut conn = pool.get()?;
            load_all(&mut conn)?
        };
        let (sender, _) = watch::channel(initial);

        Ok(Self { pool, sender })
    }
}

fn load_all(conn: &mut SqliteConnection) -> QueryResult<Vec<MenuItem>> {
    let rows = t_menu_item.order(id.asc()).load::<MenuItemRow>(conn)?;
    Ok(rows.into_iter().map(MenuItem::from).collect())
}

fn storage_error<E: std::fmt::Display>(e: E) -> MenuRepositoryError {
    MenuRepositoryError::Storage(e.to_string())
}

#[async_trait]
impl MenuRepositoryPort for DieselMenuRepository {
    async fn is_empty(&self) -> Result<bool, MenuRepositoryError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(storage_error)?;
            let count: i64 = t_menu_item
                .count()
                .get_result(&mut conn)
                .map_err(storage_error)?;
            Ok(count == 0)
        })
        .await
        .map_err(storage_error)?
    }

    async fn insert_all(&self, items: Vec<MenuItem>) -> Result<(), MenuRepositoryError> {
        let pool = self.pool.clone();
        let snapshot = tokio::task::spawn_blocking(move || {
            let rows: Vec<MenuItemRow> = items.into_iter().map(MenuItemRow::from).collect();

            let mut conn = pool.get().map_err(storage_error)?;
            conn.transaction(|conn| {
                diesel::insert_into(t_menu_item).values(&rows).execute(conn)?;
                load_all(conn)
            })
            .map_err(storage_error)
        })
        .await
        .map_err(storage_error)??;

        // Publish only after the transaction committed.
        self.sender.send_replace(snapshot);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<MenuItem>, MenuRepositoryError> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(storage_error)?;
            load_all(&mut conn).map_err(storage_error)
        })
        .await
        .map_err(storage_error)?
    }

    fn observe(&self) -> watch::Receiver<Vec<MenuItem>> {
        self.sender.subscribe()
    }

    async fn clear(&self) -> Result<usize, MenuRepositoryError> {
        let pool = self.pool.clone();
        let removed = tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(storage_error)?;
            diesel::delete(t_menu_item)
                .execute(&mut conn)
                .map_err(storage_error)
        })
        .await
        .map_err(storage_error)??;

        self.sender.send_replace(Vec::new());
        Ok(removed)
    }
}
