//! Request shapes for plugin operations.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use super::Tsp;

/// Cardholder billing address attached to a [`ProvisionRequest`].
///
/// Every field except `address2` is required; an empty string is treated
/// as missing by request-shape validation.
///
/// # JSON Format
///
/// ```json
/// {
///   "name": "Jane Diaz",
///   "address1": "123 Main St",
///   "address2": "Apt 4",
///   "locality": "Mountain View",
///   "administrativeArea": "CA",
///   "countryCode": "US",
///   "postalCode": "94043",
///   "phoneNumber": "+14155550100"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Cardholder name.
    pub name: String,

    /// First address line.
    pub address1: String,

    /// Optional second address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// City or locality.
    pub locality: String,

    /// State, province, or other administrative area.
    pub administrative_area: String,

    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,

    /// Postal or ZIP code.
    pub postal_code: String,

    /// Cardholder phone number.
    pub phone_number: String,
}

/// Input to push provisioning.
///
/// Carries the issuer-supplied opaque payment card blob together with the
/// display metadata the wallet needs. The blob is never inspected by this
/// layer; it travels base64-encoded and is handed to the platform SDK
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionRequest {
    /// Base64-encoded opaque payment card blob from the issuer backend.
    pub opc: String,

    /// Token service provider identifier (e.g. `"VISA"`).
    pub tsp: Tsp,

    /// Client name shown during the provisioning flow.
    pub client_name: String,

    /// Last four digits of the card being provisioned.
    pub last_digits: String,

    /// Cardholder billing address.
    pub address: Address,
}

impl ProvisionRequest {
    /// Decodes the opaque payment card blob.
    ///
    /// # Errors
    ///
    /// Returns a decode error if `opc` is not valid base64.
    pub fn opc_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        BASE64.decode(&self.opc)
    }
}

/// Query key for whether a card is already tokenized in the active wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsTokenizedRequest {
    /// Token service provider identifier.
    pub tsp: Tsp,

    /// Last four digits of the card.
    pub last_digits: String,
}

/// Identifies a specific token registered in the active wallet.
///
/// Used for status lookup, selection, and deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    /// Token service provider identifier.
    pub tsp: Tsp,

    /// Provider-issued token reference.
    pub token_reference_id: String,
}
