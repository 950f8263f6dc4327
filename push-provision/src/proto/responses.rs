//! Response shapes for plugin operations.
//!
//! Each operation resolves with exactly one of these records. Field names
//! are part of the wire contract and match the native bridge payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::environment::Environment;
use crate::token::TokenStatus;

/// Response from `getEnvironment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentResponse {
    /// The environment tag the wallet SDK is configured for.
    pub value: Environment,
}

/// Response from `getStableHardwareId`.
///
/// The identifier is stable across calls on the same device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareIdResponse {
    /// Device hardware identifier.
    pub hardware_id: String,
}

/// Response from `getActiveWalletID`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletIdResponse {
    /// Identifier of the active wallet.
    pub wallet_id: String,
}

/// Response from `createWallet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletResponse {
    /// Whether a wallet was created by this call.
    pub is_created: bool,
}

/// Response from `getTokenStatus`.
///
/// [`TokenStatus::NotFound`] is reported for unknown token references;
/// a missing token is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStatusResponse {
    /// Lifecycle state of the token.
    pub state: TokenStatus,

    /// Provider-specific diagnostic string accompanying the state.
    pub code: String,
}

impl TokenStatusResponse {
    /// The response reported for token references absent from the wallet.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            state: TokenStatus::NotFound,
            code: String::new(),
        }
    }
}

/// Response from `listTokens`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTokensResponse {
    /// Token reference ids registered to the active wallet at call time.
    ///
    /// Empty when the wallet holds no tokens; an empty wallet is not an
    /// error.
    pub tokens: Vec<String>,
}

/// Response from `isTokenized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsTokenizedResponse {
    /// Whether the queried card is already tokenized in the active wallet.
    pub is_tokenized: bool,
}

/// Response from `pushProvision`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushProvisionResponse {
    /// Reference id of the newly provisioned token.
    pub token_id: String,
}

/// Response from `requestSelectToken` and `requestDeleteToken`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenOperationResponse {
    /// Whether the requested token operation completed.
    pub is_success: bool,
}

/// Response from `isGPayDefaultNFCApp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultNfcAppResponse {
    /// Whether Google Pay is the platform's default NFC payment app.
    #[serde(rename = "isDefault")]
    pub is_default: bool,

    /// Whether NFC is currently enabled on the device.
    #[serde(rename = "isNFCOn")]
    pub is_nfc_on: bool,
}

/// Response from `setGPayAsDefaultNFCApp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDefaultNfcAppResponse {
    /// Whether Google Pay is the default NFC payment app after the call.
    pub is_default: bool,
}

/// Opaque acknowledgement from `registerDataChangedListener`.
///
/// The payload shape is owned by the native provider; callers treat it as
/// opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegisterListenerResponse(pub Value);
