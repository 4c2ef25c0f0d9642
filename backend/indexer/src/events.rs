//! Canonical event types emitted by the DAOnative contracts.
//!
//! One indexer serves every contract in the family, so the kind is derived
//! from the leading topic symbol alone.

use serde::{Deserialize, Serialize};

/// All recognised event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Tokens moved into or out of a room/bounty ledger (`transfer`).
    Transfer,
    /// A proposal was submitted to a room (`submit`).
    ProposalSubmitted,
    /// A room owner approved a proposal (`approve`).
    ProposalApproved,
    /// An answer was submitted to a bounty (`answer`).
    AnswerSubmitted,
    /// A bounty owner voted funds to an answer (`vote`).
    AnswerVoted,
    /// An NFT was minted or transferred (`nft_xfer`).
    NftTransfer,
    /// A collection was paused (`paused`).
    CollectionPaused,
    /// A collection was unpaused (`unpaused`).
    CollectionUnpaused,
    RoomCreated,
    BountyCreated,
    CollectionCreated,
    /// An event from a watched contract that we don't recognise.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "transfer" => Self::Transfer,
            "submit" => Self::ProposalSubmitted,
            "approve" => Self::ProposalApproved,
            "answer" => Self::AnswerSubmitted,
            "vote" => Self::AnswerVoted,
            "nft_xfer" => Self::NftTransfer,
            "paused" => Self::CollectionPaused,
            "unpaused" => Self::CollectionUnpaused,
            "room_created" => Self::RoomCreated,
            "bounty_created" => Self::BountyCreated,
            "collection_created" => Self::CollectionCreated,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transfer => "transfer",
            Self::ProposalSubmitted => "proposal_submitted",
            Self::ProposalApproved => "proposal_approved",
            Self::AnswerSubmitted => "answer_submitted",
            Self::AnswerVoted => "answer_voted",
            Self::NftTransfer => "nft_transfer",
            Self::CollectionPaused => "collection_paused",
            Self::CollectionUnpaused => "collection_unpaused",
            Self::RoomCreated => "room_created",
            Self::BountyCreated => "bounty_created",
            Self::CollectionCreated => "collection_created",
            Self::Unknown => "unknown",
        }
    }

    /// For factory events, the kind of instance that was deployed.
    pub fn instance_kind(&self) -> Option<&'static str> {
        match self {
            Self::RoomCreated => Some("room"),
            Self::BountyCreated => Some("bounty"),
            Self::CollectionCreated => Some("collection"),
            _ => None,
        }
    }
}

/// A fully decoded event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaoEvent {
    /// RPC event id; unique across the network.
    pub event_id: String,
    pub event_type: String,
    /// Proposal, answer or token id taken from the second topic.
    pub subject_id: Option<String>,
    pub actor: Option<String>,
    /// Receiving side of a transfer, or the deployed instance of a factory event.
    pub counterparty: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_id: String,
    pub event_type: String,
    pub subject_id: Option<String>,
    pub actor: Option<String>,
    pub counterparty: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}

/// A contract deployed by one of the watched creators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Instance {
    pub address: String,
    pub kind: String,
    pub owner: Option<String>,
    pub creator: String,
    pub ledger: i64,
}

impl Instance {
    /// Build the registry row for a decoded factory event.
    pub fn from_event(event: &DaoEvent) -> Option<Self> {
        let kind = EventKind::from_topic(&event.event_type).instance_kind()?;
        Some(Instance {
            address: event.counterparty.clone()?,
            kind: kind.to_string(),
            owner: event.actor.clone(),
            creator: event.contract_id.clone(),
            ledger: event.ledger,
        })
    }
}
