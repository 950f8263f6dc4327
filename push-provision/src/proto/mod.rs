//! Wire-compatible request and response shapes.
//!
//! This module defines the value records exchanged across the bridge. All
//! entities are transient: caller-supplied requests or callee-returned
//! responses, alive for the duration of a single call. Nothing here is
//! owned or persisted by this layer.
//!
//! # Key Types
//!
//! - [`Address`] / [`ProvisionRequest`] - Inputs to push provisioning
//! - [`IsTokenizedRequest`] / [`TokenRequest`] - Token query keys
//! - One response type per plugin operation, e.g.
//!   [`PushProvisionResponse`], [`TokenStatusResponse`]
//!
//! # Wire Format
//!
//! All types serialize to JSON using camelCase field names, matching the
//! bridge payloads of the native plugin (`isNFCOn` is an explicit rename,
//! its casing predating this crate).

mod requests;
mod responses;

pub use requests::{Address, IsTokenizedRequest, ProvisionRequest, TokenRequest};
pub use responses::{
    CreateWalletResponse, DefaultNfcAppResponse, EnvironmentResponse, HardwareIdResponse,
    IsTokenizedResponse, ListTokensResponse, PushProvisionResponse, RegisterListenerResponse,
    SetDefaultNfcAppResponse, TokenOperationResponse, TokenStatusResponse, WalletIdResponse,
};

/// A token service provider identifier (e.g. `"VISA"`, `"MASTERCARD"`).
///
/// Kept as a plain string: the set of providers is owned by the wallet
/// platform and grows without notice.
pub type Tsp = String;
