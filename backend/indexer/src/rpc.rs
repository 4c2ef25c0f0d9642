//! Soroban RPC client: polls `getEvents` and decodes DAOnative events.
//!
//! ## Resilience
//!
//! * Exponential back-off is applied when the RPC returns an error or rate-limit
//!   response, up to [`MAX_BACKOFF_SECS`] seconds.
//! * Transient network errors (connection reset, timeout) are retried silently.
//!
//! ## Value formats
//!
//! Events are requested with `xdrFormat: "json"`, so topics and data arrive as
//! JSON-encoded `ScVal`s (`{"symbol":"vote"}`, `{"u64":"3"}`,
//! `{"map":[{"key":…,"val":…}]}`). Nodes that ignore the option send base64 XDR;
//! for those only the scalar topics are decoded.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::errors::{IndexerError, Result};
use crate::events::{DaoEvent, EventKind};

const MAX_BACKOFF_SECS: u64 = 60;
const INITIAL_BACKOFF_SECS: u64 = 2;

/// `getEvents` accepts at most this many contract ids per filter…
pub const IDS_PER_FILTER: usize = 5;
/// …and at most this many filters per request.
pub const MAX_FILTERS: usize = 5;
/// Contracts one request can cover.
pub const IDS_PER_REQUEST: usize = IDS_PER_FILTER * MAX_FILTERS;

// ─────────────────────────────────────────────────────────
// JSON-RPC response shapes
// ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RpcResponse {
    pub result: Option<EventsResult>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsResult {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    #[serde(rename = "latestLedger")]
    pub latest_ledger: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawEvent {
    #[serde(alias = "topicJson")]
    pub topic: Vec<Value>,
    #[serde(alias = "valueJson")]
    pub value: Value,
    #[serde(rename = "contractId")]
    pub contract_id: Option<String>,
    #[serde(rename = "txHash")]
    pub tx_hash: Option<String>,
    pub id: Option<String>,
    pub ledger: Option<u64>,
    #[serde(rename = "ledgerClosedAt")]
    pub ledger_closed_at: Option<String>,
    #[serde(rename = "inSuccessfulContractCall")]
    pub in_successful_contract_call: Option<bool>,
}

/// One page of `getEvents`.
#[derive(Debug)]
pub struct EventsPage {
    pub events: Vec<RawEvent>,
    pub cursor: Option<String>,
    pub latest_ledger: Option<u64>,
}

// ─────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────

/// Fetch a page of events for up to [`IDS_PER_REQUEST`] contracts.
///
/// * `start_ledger`: the ledger sequence to scan from (inclusive); ignored
///   when `cursor` is set.
/// * `cursor`: optional opaque pagination cursor from a previous response.
/// * `limit`: maximum number of events to return.
pub async fn fetch_events(
    client: &Client,
    rpc_url: &str,
    contract_ids: &[String],
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Result<EventsPage> {
    if contract_ids.len() > IDS_PER_REQUEST {
        return Err(IndexerError::Config(format!(
            "{} contracts in one getEvents request (max {IDS_PER_REQUEST})",
            contract_ids.len()
        )));
    }

    let mut backoff = INITIAL_BACKOFF_SECS;

    loop {
        let params = build_params(contract_ids, start_ledger, cursor, limit);

        let response = client
            .post(rpc_url)
            .json(&json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getEvents",
                "params": params,
            }))
            .send()
            .await;

        match response {
            Err(e) => {
                warn!("RPC request failed (will retry in {backoff}s): {e}");
                tokio::time::sleep(Duration::from_secs(backoff)).await;
                backoff = (backoff * 2).min(MAX_BACKOFF_SECS);
                continue;
            }
            Ok(resp) => {
                if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    warn!("Rate-limited by RPC (will retry in {backoff}s)");
                    tokio::time::sleep(Duration::from_secs(backoff)).await;
                    backoff = (backoff * 2).min(MAX_BACKOFF_SECS);
                    continue;
                }

                let body: RpcResponse = resp.json().await?;

                if let Some(err) = body.error {
                    // Malformed request or unknown method will not get better on retry.
                    if err.code == -32600 || err.code == -32601 || err.code == -32602 {
                        return Err(IndexerError::EventParse(format!(
                            "RPC hard error {}: {}",
                            err.code, err.message
                        )));
                    }
                    warn!(
                        "RPC soft error (will retry in {backoff}s): {} {}",
                        err.code, err.message
                    );
                    tokio::time::sleep(Duration::from_secs(backoff)).await;
                    backoff = (backoff * 2).min(MAX_BACKOFF_SECS);
                    continue;
                }

                let result = body.result.ok_or_else(|| {
                    IndexerError::EventParse("Empty result from getEvents".to_string())
                })?;

                debug!(
                    "Fetched {} events (latest_ledger={:?})",
                    result.events.len(),
                    result.latest_ledger
                );

                return Ok(EventsPage {
                    events: result.events,
                    cursor: result.cursor,
                    latest_ledger: result.latest_ledger,
                });
            }
        }
    }
}

/// Group contract ids into `getEvents` filters of [`IDS_PER_FILTER`].
pub fn build_filters(contract_ids: &[String]) -> Vec<Value> {
    contract_ids
        .chunks(IDS_PER_FILTER)
        .map(|chunk| json!({ "type": "contract", "contractIds": chunk }))
        .collect()
}

fn build_params(
    contract_ids: &[String],
    start_ledger: u32,
    cursor: Option<&str>,
    limit: u32,
) -> Value {
    let mut params = json!({
        "filters": build_filters(contract_ids),
        "pagination": {
            "limit": limit
        },
        "xdrFormat": "json"
    });

    if let Some(cur) = cursor {
        params["pagination"]["cursor"] = json!(cur);
    } else {
        params["startLedger"] = json!(start_ledger);
    }

    params
}

// ─────────────────────────────────────────────────────────
// Event decoding
// ─────────────────────────────────────────────────────────

/// Decode raw RPC events. Events from failed contract calls are dropped.
pub fn decode_events(raw: &[RawEvent]) -> Vec<DaoEvent> {
    raw.iter()
        .filter(|e| e.in_successful_contract_call.unwrap_or(true))
        .filter_map(decode_single)
        .collect()
}

fn decode_single(raw: &RawEvent) -> Option<DaoEvent> {
    let contract_id = raw.contract_id.clone()?;
    let first_topic = raw.topic.first()?;
    let symbol = scval_string(&normalize_topic(first_topic))?;
    let kind = EventKind::from_topic(&symbol);

    let ledger = raw.ledger.unwrap_or(0) as i64;
    let timestamp = raw
        .ledger_closed_at
        .as_deref()
        .and_then(parse_iso_to_unix)
        .unwrap_or(0);

    let subject_id = raw
        .topic
        .get(1)
        .and_then(|t| scval_string(&normalize_topic(t)));

    let fields = decode_data(&raw.value, kind);

    // Factory events keep their own topic name so the instance kind survives.
    let event_type = match kind {
        EventKind::Unknown => symbol.clone(),
        _ => kind.as_str().to_string(),
    };
    let event_id = raw.id.clone().unwrap_or_else(|| {
        format!(
            "{ledger}-{}-{event_type}-{}",
            raw.tx_hash.as_deref().unwrap_or(""),
            subject_id.as_deref().unwrap_or("")
        )
    });

    Some(DaoEvent {
        event_id,
        event_type,
        subject_id,
        actor: fields.actor,
        counterparty: fields.counterparty,
        amount: fields.amount,
        ledger,
        timestamp,
        contract_id,
        tx_hash: raw.tx_hash.clone(),
    })
}

#[derive(Debug, Default, PartialEq)]
struct DataFields {
    actor: Option<String>,
    counterparty: Option<String>,
    amount: Option<String>,
}

/// Pull the interesting fields out of the event body for `kind`.
fn decode_data(value: &Value, kind: EventKind) -> DataFields {
    let field = |key: &str| map_field(value, key).and_then(scval_string);
    match kind {
        EventKind::Transfer => DataFields {
            actor: field("from"),
            counterparty: field("to"),
            amount: field("amount"),
        },
        EventKind::ProposalSubmitted => DataFields {
            actor: field("submitter"),
            amount: field("amount_requested"),
            ..Default::default()
        },
        EventKind::AnswerSubmitted => DataFields {
            actor: field("submitter"),
            ..Default::default()
        },
        EventKind::ProposalApproved | EventKind::AnswerVoted => DataFields {
            amount: field("amount"),
            ..Default::default()
        },
        EventKind::NftTransfer => DataFields {
            actor: field("from"),
            counterparty: field("to"),
            ..Default::default()
        },
        EventKind::CollectionPaused | EventKind::CollectionUnpaused => DataFields {
            actor: scval_string(value),
            ..Default::default()
        },
        EventKind::RoomCreated | EventKind::BountyCreated | EventKind::CollectionCreated => {
            DataFields {
                actor: field("owner"),
                counterparty: field("instance"),
                ..Default::default()
            }
        }
        EventKind::Unknown => DataFields::default(),
    }
}

/// Look up `key` in a contract struct, which Soroban encodes as a map keyed by
/// symbols. Plain JSON objects are accepted too.
fn map_field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    if let Some(entries) = value.get("map").and_then(Value::as_array) {
        return entries
            .iter()
            .find(|entry| {
                entry
                    .get("key")
                    .and_then(scval_string)
                    .is_some_and(|k| k == key)
            })
            .and_then(|entry| entry.get("val"));
    }
    value.get(key)
}

/// Render a scalar `ScVal` as a string. `void` (an absent `Option`) and
/// composite values yield `None`.
fn scval_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s == "void" => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => {
            // {"type":"symbol","value":"vote"}
            if let Some(inner) = map.get("value") {
                return scval_string(inner);
            }
            let (tag, inner) = map.iter().next()?;
            match tag.as_str() {
                "symbol" | "string" | "address" | "u32" | "i32" | "u64" | "i64" | "timepoint"
                | "duration" | "bool" => scval_string(inner),
                "u128" => int128_string(inner, false),
                "i128" => int128_string(inner, true),
                _ => None,
            }
        }
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// 128-bit integers arrive either as a decimal string or as `{hi, lo}` parts.
/// `hi` is signed for `i128` and unsigned for `u128`.
fn int128_string(value: &Value, signed: bool) -> Option<String> {
    match value {
        Value::Object(parts) => {
            let lo = parts.get("lo")?.as_u64()?;
            let hi = parts.get("hi")?;
            if signed {
                let hi = hi.as_i64()? as i128;
                Some(((hi << 64) | lo as i128).to_string())
            } else {
                let hi = hi.as_u64()? as u128;
                Some(((hi << 64) | lo as u128).to_string())
            }
        }
        other => scval_string(other),
    }
}

/// Topics may arrive as JSON values, JSON text, or base64 XDR.
fn normalize_topic(topic: &Value) -> Value {
    let Value::String(raw) = topic else {
        return topic.clone();
    };
    if let Ok(parsed) = serde_json::from_str::<Value>(raw) {
        if parsed.is_object() {
            return parsed;
        }
    }
    decode_xdr_scalar(raw).unwrap_or_else(|| topic.clone())
}

const SCV_U32: u32 = 3;
const SCV_U64: u32 = 5;
const SCV_SYMBOL: u32 = 15;

/// Decode the scalar `ScVal`s used as topics (symbol, u32, u64) from base64 XDR.
fn decode_xdr_scalar(raw: &str) -> Option<Value> {
    let bytes = STANDARD.decode(raw).ok()?;
    let (tag, body) = bytes.split_first_chunk::<4>()?;
    match u32::from_be_bytes(*tag) {
        SCV_U32 => {
            let n = u32::from_be_bytes(*body.first_chunk::<4>()?);
            Some(json!({ "u32": n }))
        }
        SCV_U64 => {
            let n = u64::from_be_bytes(*body.first_chunk::<8>()?);
            Some(json!({ "u64": n.to_string() }))
        }
        SCV_SYMBOL => {
            let (len, rest) = body.split_first_chunk::<4>()?;
            let len = u32::from_be_bytes(*len) as usize;
            let symbol = std::str::from_utf8(rest.get(..len)?).ok()?;
            Some(json!({ "symbol": symbol }))
        }
        _ => None,
    }
}

/// Parse an ISO-8601 timestamp string into a Unix epoch (seconds).
fn parse_iso_to_unix(s: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp())
}

// ─────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────
