//! Database layer: migrations, queries, and cursor management.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::errors::Result;
use crate::events::{DaoEvent, EventRecord, Instance};

/// Establish a SQLite connection pool and run pending migrations.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool> {
    let url = if database_url.starts_with("sqlite:") {
        database_url.to_string()
    } else {
        format!("sqlite:{database_url}")
    };
    let options = SqliteConnectOptions::from_str(&url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied successfully");
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Cursor helpers
// ─────────────────────────────────────────────────────────

/// Read the last-seen ledger from the cursor row.
/// Returns `0` when no cursor has been persisted yet.
pub async fn get_last_ledger(pool: &SqlitePool) -> Result<i64> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT last_ledger FROM indexer_cursor WHERE id = 1")
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(v,)| v).unwrap_or(0))
}

pub async fn save_last_ledger(pool: &SqlitePool, last_ledger: i64) -> Result<()> {
    sqlx::query("UPDATE indexer_cursor SET last_ledger = ?1 WHERE id = 1")
        .bind(last_ledger)
        .execute(pool)
        .await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Event writes
// ─────────────────────────────────────────────────────────

/// Persist a batch of decoded events. Events whose RPC `event_id` is already
/// stored are silently ignored so re-scanning a ledger is harmless.
pub async fn insert_events(pool: &SqlitePool, events: &[DaoEvent]) -> Result<usize> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;
    for ev in events {
        let rows_affected = sqlx::query(
            r#"
            INSERT OR IGNORE INTO events
                (event_id, event_type, subject_id, actor, counterparty, amount,
                 ledger, timestamp, contract_id, tx_hash)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&ev.event_id)
        .bind(&ev.event_type)
        .bind(&ev.subject_id)
        .bind(&ev.actor)
        .bind(&ev.counterparty)
        .bind(&ev.amount)
        .bind(ev.ledger)
        .bind(ev.timestamp)
        .bind(&ev.contract_id)
        .bind(&ev.tx_hash)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        count += rows_affected as usize;
    }
    tx.commit().await?;
    Ok(count)
}

// ─────────────────────────────────────────────────────────
// Event reads
// ─────────────────────────────────────────────────────────

/// Fetch all events, optionally of a single type, ordered by ledger ascending.
pub async fn get_all_events(
    pool: &SqlitePool,
    event_type: Option<&str>,
) -> Result<Vec<EventRecord>> {
    let rows = sqlx::query_as::<_, EventRecord>(
        r#"
        SELECT id, event_id, event_type, subject_id, actor, counterparty, amount,
               ledger, timestamp, contract_id, tx_hash, created_at
        FROM   events
        WHERE  ?1 IS NULL OR event_type = ?1
        ORDER  BY ledger ASC, id ASC
        "#,
    )
    .bind(event_type)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fetch the events of one contract, optionally narrowed to one proposal,
/// answer or token id.
pub async fn get_events_for_contract(
    pool: &SqlitePool,
    contract_id: &str,
    subject_id: Option<&str>,
) -> Result<Vec<EventRecord>> {
    let rows = sqlx::query_as::<_, EventRecord>(
        r#"
        SELECT id, event_id, event_type, subject_id, actor, counterparty, amount,
               ledger, timestamp, contract_id, tx_hash, created_at
        FROM   events
        WHERE  contract_id = ?1 AND (?2 IS NULL OR subject_id = ?2)
        ORDER  BY ledger ASC, id ASC
        "#,
    )
    .bind(contract_id)
    .bind(subject_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

// ─────────────────────────────────────────────────────────
// Instances
// ─────────────────────────────────────────────────────────

/// Record a deployed instance. Returns `false` if it was already known.
pub async fn insert_instance(pool: &SqlitePool, instance: &Instance) -> Result<bool> {
    let rows_affected = sqlx::query(
        r#"
        INSERT OR IGNORE INTO instances (address, kind, owner, creator, ledger)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(&instance.address)
    .bind(&instance.kind)
    .bind(&instance.owner)
    .bind(&instance.creator)
    .bind(instance.ledger)
    .execute(pool)
    .await?
    .rows_affected();
    Ok(rows_affected == 1)
}

/// List deployed instances in discovery order, optionally of one kind.
pub async fn get_instances(pool: &SqlitePool, kind: Option<&str>) -> Result<Vec<Instance>> {
    let rows = sqlx::query_as::<_, Instance>(
        r#"
        SELECT address, kind, owner, creator, ledger
        FROM   instances
        WHERE  ?1 IS NULL OR kind = ?1
        ORDER  BY ledger ASC, rowid ASC
        "#,
    )
    .bind(kind)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
