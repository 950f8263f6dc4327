//! Token lifecycle states.
//!
//! A token's state is reported by the external wallet provider; this layer
//! only reads it. The values are not a state machine from the caller's
//! point of view — a client re-queries (or installs a data-changed
//! listener) to observe updates.

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a payment token, as reported by the wallet provider.
///
/// The numeric values are part of the wire contract and must not change.
/// The nominal progression is `UNTOKENIZED → PENDING →
/// NEEDS_IDENTITY_VERIFICATION → SUSPENDED → ACTIVE`, with
/// `FELICA_PENDING_PROVISIONING` as a FeliCa-specific side state and
/// `NOT_FOUND` reported for token references absent from the active
/// wallet.
///
/// # Serialization
///
/// Serializes to/from the raw integer: `TokenStatus::Active` is `5`,
/// `TokenStatus::NotFound` is `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum TokenStatus {
    /// The token reference does not resolve to a token in the active wallet.
    NotFound = -1,
    /// The card has not been tokenized.
    Untokenized = 1,
    /// Tokenization is in progress.
    Pending = 2,
    /// The issuer requires identity verification before activation.
    NeedsIdentityVerification = 3,
    /// The token exists but is suspended.
    Suspended = 4,
    /// The token is active and usable for payments.
    Active = 5,
    /// FeliCa provisioning is pending (Japan-market secure element).
    FelicaPendingProvisioning = 6,
}

impl TokenStatus {
    /// All states, `NOT_FOUND` first.
    pub const ALL: [Self; 7] = [
        Self::NotFound,
        Self::Untokenized,
        Self::Pending,
        Self::NeedsIdentityVerification,
        Self::Suspended,
        Self::Active,
        Self::FelicaPendingProvisioning,
    ];

    /// Returns the wire integer for this state.
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Returns `true` when the token is active and usable for payments.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns `true` when the token reference resolved to a token at all.
    #[must_use]
    pub const fn is_found(self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

/// Error returned when converting an integer outside the known state set.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("unknown token status {0}, expected -1 or an integer in [1, 6]")]
pub struct UnknownTokenStatus(pub i32);

impl From<TokenStatus> for i32 {
    fn from(status: TokenStatus) -> Self {
        status.value()
    }
}

impl TryFrom<i32> for TokenStatus {
    type Error = UnknownTokenStatus;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::NotFound),
            1 => Ok(Self::Untokenized),
            2 => Ok(Self::Pending),
            3 => Ok(Self::NeedsIdentityVerification),
            4 => Ok(Self::Suspended),
            5 => Ok(Self::Active),
            6 => Ok(Self::FelicaPendingProvisioning),
            other => Err(UnknownTokenStatus(other)),
        }
    }
}
