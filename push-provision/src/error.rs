//! Error types for the push-provisioning plugin.
//!
//! Failures surface as a [`PluginError`], each coded variant mapping to one
//! of the nine fixed [`ErrorCode`] wire values. The native layer maps
//! platform failures to these codes; this layer performs no recovery or
//! retry — every failure reaches the caller verbatim.

use serde::{Deserialize, Serialize};

/// Enumerated failure categories, as fixed negative wire integers.
///
/// The numeric values are part of the wire contract and must not change.
/// Callers branch on the code to decide whether to retry, prompt the user,
/// or abort — in particular to distinguish a user cancellation
/// ([`PushProvisionCancel`](Self::PushProvisionCancel),
/// [`CreateWalletCancel`](Self::CreateWalletCancel)) from a hard error.
///
/// # Serialization
///
/// Serializes to/from the raw integer: `ErrorCode::InvalidToken` is `-7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum ErrorCode {
    /// Push provisioning failed on the platform side.
    PushProvisionError = -1,
    /// The user aborted the push-provisioning flow.
    PushProvisionCancel = -2,
    /// The request was incomplete; a caller-side contract violation.
    MissingDataError = -3,
    /// The user aborted wallet creation.
    CreateWalletCancel = -4,
    /// The tokenization lookup failed.
    IsTokenizedError = -5,
    /// Token removal failed on the platform side.
    RemoveTokenError = -6,
    /// The referenced token is not valid in the active wallet.
    InvalidToken = -7,
    /// Token selection failed on the platform side.
    SelectTokenError = -8,
    /// Setting Google Pay as the default payments app failed.
    SetDefaultPaymentsError = -9,
}

impl ErrorCode {
    /// All nine codes, in wire-value order.
    pub const ALL: [Self; 9] = [
        Self::PushProvisionError,
        Self::PushProvisionCancel,
        Self::MissingDataError,
        Self::CreateWalletCancel,
        Self::IsTokenizedError,
        Self::RemoveTokenError,
        Self::InvalidToken,
        Self::SelectTokenError,
        Self::SetDefaultPaymentsError,
    ];

    /// Returns the wire integer for this code.
    #[must_use]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Returns `true` when the code represents a user cancellation rather
    /// than a hard failure.
    #[must_use]
    pub const fn is_cancellation(self) -> bool {
        matches!(self, Self::PushProvisionCancel | Self::CreateWalletCancel)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.value()
    }
}

/// Error returned when converting an integer outside the known code range.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("unknown error code {0}, expected an integer in [-9, -1]")]
pub struct UnknownErrorCode(pub i32);

impl TryFrom<i32> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::PushProvisionError),
            -2 => Ok(Self::PushProvisionCancel),
            -3 => Ok(Self::MissingDataError),
            -4 => Ok(Self::CreateWalletCancel),
            -5 => Ok(Self::IsTokenizedError),
            -6 => Ok(Self::RemoveTokenError),
            -7 => Ok(Self::InvalidToken),
            -8 => Ok(Self::SelectTokenError),
            -9 => Ok(Self::SetDefaultPaymentsError),
            other => Err(UnknownErrorCode(other)),
        }
    }
}

/// Failure of a plugin operation.
///
/// Each coded variant carries the context a caller needs to branch on;
/// [`code`](Self::code) recovers the wire [`ErrorCode`]. The
/// [`Wallet`](Self::Wallet) variant is uncoded: no fixed code covers
/// "no active wallet", so it surfaces the platform message as-is.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PluginError {
    /// Push provisioning failed on the platform side.
    #[error("push provisioning failed: {message}")]
    PushProvision {
        /// Platform-reported failure detail.
        message: String,
    },

    /// The user aborted the push-provisioning flow.
    #[error("push provisioning cancelled by user")]
    PushProvisionCancelled,

    /// The request omitted one or more required fields.
    #[error("missing required fields: {}", fields.join(", "))]
    MissingData {
        /// Dotted paths of the missing fields (e.g. `"address.postalCode"`).
        fields: Vec<String>,
    },

    /// The user aborted wallet creation.
    #[error("wallet creation cancelled by user")]
    CreateWalletCancelled,

    /// The tokenization lookup failed.
    #[error("tokenization check failed: {message}")]
    IsTokenized {
        /// Platform-reported failure detail.
        message: String,
    },

    /// Token removal failed on the platform side.
    #[error("token removal failed: {message}")]
    RemoveToken {
        /// Platform-reported failure detail.
        message: String,
    },

    /// The referenced token is not registered in the active wallet.
    #[error("invalid token reference '{token_reference_id}'")]
    InvalidToken {
        /// The token reference that failed to resolve.
        token_reference_id: String,
    },

    /// Token selection failed on the platform side.
    #[error("token selection failed: {message}")]
    SelectToken {
        /// Platform-reported failure detail.
        message: String,
    },

    /// Setting Google Pay as the default payments app failed.
    #[error("setting default payments app failed: {message}")]
    SetDefaultPayments {
        /// Platform-reported failure detail.
        message: String,
    },

    /// A wallet-level failure with no fixed wire code, such as querying
    /// the active wallet when none exists.
    #[error("wallet error: {message}")]
    Wallet {
        /// Platform-reported failure detail.
        message: String,
    },
}

impl PluginError {
    /// Creates a [`MissingData`](Self::MissingData) error from field paths.
    #[must_use]
    pub fn missing_data<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingData {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an [`InvalidToken`](Self::InvalidToken) error.
    #[must_use]
    pub fn invalid_token(token_reference_id: impl Into<String>) -> Self {
        Self::InvalidToken {
            token_reference_id: token_reference_id.into(),
        }
    }

    /// Creates an uncoded [`Wallet`](Self::Wallet) error.
    #[must_use]
    pub fn wallet(message: impl Into<String>) -> Self {
        Self::Wallet {
            message: message.into(),
        }
    }

    /// Returns the wire [`ErrorCode`] for this error, or `None` for the
    /// uncoded [`Wallet`](Self::Wallet) variant.
    #[must_use]
    pub const fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::PushProvision { .. } => Some(ErrorCode::PushProvisionError),
            Self::PushProvisionCancelled => Some(ErrorCode::PushProvisionCancel),
            Self::MissingData { .. } => Some(ErrorCode::MissingDataError),
            Self::CreateWalletCancelled => Some(ErrorCode::CreateWalletCancel),
            Self::IsTokenized { .. } => Some(ErrorCode::IsTokenizedError),
            Self::RemoveToken { .. } => Some(ErrorCode::RemoveTokenError),
            Self::InvalidToken { .. } => Some(ErrorCode::InvalidToken),
            Self::SelectToken { .. } => Some(ErrorCode::SelectTokenError),
            Self::SetDefaultPayments { .. } => Some(ErrorCode::SetDefaultPaymentsError),
            Self::Wallet { .. } => None,
        }
    }

    /// Returns `true` when the failure is a user cancellation.
    #[must_use]
    pub const fn is_cancellation(&self) -> bool {
        matches!(
            self,
            Self::PushProvisionCancelled | Self::CreateWalletCancelled
        )
    }
}
