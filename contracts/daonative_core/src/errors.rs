use soroban_sdk::contracterror;

/// Every way a DAOnative entry point can reject a call.
///
/// Codes are grouped by category so that off-chain callers can tell an
/// authorization failure from a policy violation by range alone:
///
/// | Range  | Category            |
/// |--------|---------------------|
/// | 1–9    | Authorization       |
/// | 10–19  | Lifecycle state     |
/// | 20–29  | Minting policy      |
/// | 30–39  | Balances and inputs |
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the instance owner.
    NotOwner = 1,
    /// Caller does not own the token it tries to move.
    NotTokenOwner = 2,

    /// Submission is not in the state the transition requires.
    InvalidState = 10,
    /// Operation is blocked while the contract is paused.
    ContractPaused = 11,
    /// `unpause` called on a running contract.
    NotPaused = 12,
    ProposalNotFound = 13,
    AnswerNotFound = 14,
    TokenNotFound = 15,

    /// Mint attempted after the configured end timestamp.
    MintWindowClosed = 20,
    MaxSupplyExceeded = 21,
    /// Invite signature was not produced by the collection owner.
    InvalidSignature = 22,
    /// Recipient already holds a token of a one-per-address collection.
    RecipientHasToken = 23,
    /// Invite code used up (or previously exhausted under another limit).
    InvalidInviteCode = 24,

    /// Requested amount exceeds the available credit.
    InsufficientBalance = 30,
    /// Negative amount.
    InvalidAmount = 31,
    Overflow = 32,
}
