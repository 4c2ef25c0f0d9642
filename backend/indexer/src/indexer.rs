//! Long-running background task that polls the Soroban RPC and writes
//! decoded DAOnative events to the database.
//!
//! The watch list starts from `CONTRACT_IDS` plus every instance already in
//! the `instances` table, and grows whenever a watched creator announces a
//! new deployment.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::db;
use crate::errors::Result;
use crate::events::Instance;
use crate::rpc::{self, RawEvent};

pub struct IndexerState {
    pub pool: SqlitePool,
    pub config: Config,
    pub client: Client,
    pub shutdown: CancellationToken,
}

/// Contract ids to poll, in the order they became known.
#[derive(Debug, Default)]
pub struct WatchList {
    ids: Vec<String>,
}

impl WatchList {
    pub fn new(initial: &[String]) -> Self {
        let mut list = WatchList::default();
        for id in initial {
            list.add(id);
        }
        list
    }

    /// Returns `true` if `id` was not watched before.
    pub fn add(&mut self, id: &str) -> bool {
        if self.ids.iter().any(|known| known == id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// Spawn the indexer loop as a background [`tokio`] task.
pub async fn run(state: Arc<IndexerState>) {
    let mut watched = WatchList::new(&state.config.contract_ids);
    match db::get_instances(&state.pool, None).await {
        Ok(known) => {
            for instance in known {
                watched.add(&instance.address);
            }
        }
        Err(e) => warn!("Could not load known instances: {e}"),
    }
    info!(contracts = watched.ids().len(), "Indexer starting");

    // Load the cursor from the DB; fall back to config start_ledger.
    let last_ledger = db::get_last_ledger(&state.pool).await.unwrap_or(0);
    let mut current_ledger = if last_ledger > 0 {
        last_ledger as u32
    } else {
        state.config.start_ledger
    };

    info!("Resuming from ledger {current_ledger}");

    loop {
        match poll_once(&state, &mut watched, current_ledger).await {
            Ok(next_ledger) => current_ledger = next_ledger,
            Err(e) => error!("Indexer poll error: {e}"),
        }

        tokio::select! {
            _ = state.shutdown.cancelled() => {
                info!("Indexer stopped at ledger {current_ledger}");
                return;
            }
            _ = tokio::time::sleep(Duration::from_secs(state.config.poll_interval_secs)) => {}
        }
    }
}

/// Perform a single poll iteration over every watched contract.
///
/// Returns the ledger the next iteration should start from.
async fn poll_once(state: &IndexerState, watched: &mut WatchList, start_ledger: u32) -> Result<u32> {
    let per_page = state.config.events_per_page;
    let mut latest_ledger: Option<u64> = None;
    let mut rescan_from: Option<u32> = None;

    // Snapshot: contracts discovered during this pass are polled next time.
    let ids = watched.ids().to_vec();
    for batch in ids.chunks(rpc::IDS_PER_REQUEST) {
        let mut cursor: Option<String> = None;
        loop {
            let page = rpc::fetch_events(
                &state.client,
                &state.config.rpc_url,
                batch,
                start_ledger,
                cursor.as_deref(),
                per_page,
            )
            .await?;
            latest_ledger = latest_ledger.max(page.latest_ledger);

            let discovered = store_page(&state.pool, watched, &page.events).await?;
            rescan_from = match (rescan_from, discovered) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };

            if page.events.len() < per_page as usize {
                break;
            }
            match page.cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
    }

    let mut next_ledger = latest_ledger
        .map(|l| (l as u32).max(start_ledger))
        .unwrap_or(start_ledger);
    // New instances may already have emitted events past their creation
    // ledger; scan that range again (inserts are idempotent).
    if let Some(ledger) = rescan_from {
        next_ledger = next_ledger.min(ledger.max(start_ledger));
    }

    db::save_last_ledger(&state.pool, next_ledger as i64).await?;
    Ok(next_ledger)
}

/// Store one page of events and register announced instances.
///
/// Returns the lowest creation ledger among newly watched instances.
async fn store_page(
    pool: &SqlitePool,
    watched: &mut WatchList,
    raw_events: &[RawEvent],
) -> Result<Option<u32>> {
    if raw_events.is_empty() {
        return Ok(None);
    }

    let decoded = rpc::decode_events(raw_events);
    let inserted = db::insert_events(pool, &decoded).await?;
    info!(
        "Polled {} raw events → {} new records stored",
        raw_events.len(),
        inserted
    );

    let mut discovered: Option<u32> = None;
    for instance in decoded.iter().filter_map(Instance::from_event) {
        db::insert_instance(pool, &instance).await?;
        if watched.add(&instance.address) {
            info!(
                kind = %instance.kind,
                address = %instance.address,
                "Watching new instance"
            );
            let ledger = instance.ledger as u32;
            discovered = Some(discovered.map_or(ledger, |d| d.min(ledger)));
        }
    }
    Ok(discovered)
}
