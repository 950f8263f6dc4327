//! The plugin operation trait.
//!
//! [`GooglePayPlugin`] is the seam between application code and the native
//! wallet implementation. Every operation is a single asynchronous
//! request/response call with a single resolution: exactly one success or
//! one failure, never both, never neither. There is no cancellation token
//! in any signature — once invoked, a call runs to completion from the
//! caller's point of view.
//!
//! Independent calls may be issued concurrently; the contract defines no
//! ordering between them. The "active wallet" is mutable external state
//! owned by the host platform: implementations query it fresh on every
//! call and never assume consistency between two successive calls.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::PluginError;
use crate::events::{DataChangedListener, ListenerHandle, PluginEvent};
use crate::proto::{
    CreateWalletResponse, DefaultNfcAppResponse, EnvironmentResponse, HardwareIdResponse,
    IsTokenizedRequest, IsTokenizedResponse, ListTokensResponse, ProvisionRequest,
    PushProvisionResponse, RegisterListenerResponse, SetDefaultNfcAppResponse,
    TokenOperationResponse, TokenRequest, TokenStatusResponse, WalletIdResponse,
};

/// Result alias for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;

/// Wallet and token operations exposed by the push-provisioning bridge.
///
/// Implemented by the native counterpart (or by
/// `push-provision-sim`'s simulated wallet for host-side testing) and
/// consumed by application code, typically as `Arc<dyn GooglePayPlugin>`.
#[async_trait]
pub trait GooglePayPlugin: Send + Sync {
    /// Returns the environment tag the wallet SDK is configured for.
    async fn get_environment(&self) -> PluginResult<EnvironmentResponse>;

    /// Returns the device hardware identifier.
    ///
    /// Stable across calls on the same device.
    async fn get_stable_hardware_id(&self) -> PluginResult<HardwareIdResponse>;

    /// Returns the active wallet identifier.
    ///
    /// # Errors
    ///
    /// Fails with an uncoded [`PluginError::Wallet`] when no wallet is
    /// active.
    async fn get_active_wallet_id(&self) -> PluginResult<WalletIdResponse>;

    /// Creates a wallet if none exists, prompting the user.
    ///
    /// Resolves `{ isCreated: false }` when a wallet already exists.
    ///
    /// # Errors
    ///
    /// Fails with [`CREATE_WALLET_CANCEL`](crate::error::ErrorCode::CreateWalletCancel)
    /// if the user aborts.
    async fn create_wallet(&self) -> PluginResult<CreateWalletResponse>;

    /// Looks up the lifecycle state of a token.
    ///
    /// A reference that does not resolve to a token returns
    /// `state = NOT_FOUND` (`-1`), not an error.
    async fn get_token_status(&self, request: TokenRequest) -> PluginResult<TokenStatusResponse>;

    /// Lists token reference ids registered to the active wallet at call
    /// time.
    ///
    /// A wallet with zero tokens yields an empty list, not an error.
    async fn list_tokens(&self) -> PluginResult<ListTokensResponse>;

    /// Returns whether a card is already tokenized in the active wallet.
    ///
    /// # Errors
    ///
    /// Fails with [`IS_TOKENIZED_ERROR`](crate::error::ErrorCode::IsTokenizedError)
    /// on lookup failure.
    async fn is_tokenized(&self, request: IsTokenizedRequest) -> PluginResult<IsTokenizedResponse>;

    /// Initiates push provisioning of a card into the active wallet.
    ///
    /// # Errors
    ///
    /// Fails with [`MISSING_DATA_ERROR`](crate::error::ErrorCode::MissingDataError)
    /// for an incomplete request (checked before dispatch),
    /// [`PUSH_PROVISION_CANCEL`](crate::error::ErrorCode::PushProvisionCancel)
    /// if the user aborts the flow, or
    /// [`PUSH_PROVISION_ERROR`](crate::error::ErrorCode::PushProvisionError)
    /// on a platform failure.
    async fn push_provision(&self, request: ProvisionRequest)
    -> PluginResult<PushProvisionResponse>;

    /// Requests selection of a token as the one used for payments.
    ///
    /// # Errors
    ///
    /// Fails with [`INVALID_TOKEN`](crate::error::ErrorCode::InvalidToken)
    /// for an unknown reference or
    /// [`SELECT_TOKEN_ERROR`](crate::error::ErrorCode::SelectTokenError)
    /// on a platform failure.
    async fn request_select_token(
        &self,
        request: TokenRequest,
    ) -> PluginResult<TokenOperationResponse>;

    /// Requests deletion of a token from the active wallet.
    ///
    /// # Errors
    ///
    /// Fails with [`INVALID_TOKEN`](crate::error::ErrorCode::InvalidToken)
    /// for an unknown reference or
    /// [`REMOVE_TOKEN_ERROR`](crate::error::ErrorCode::RemoveTokenError)
    /// on a platform failure.
    async fn request_delete_token(
        &self,
        request: TokenRequest,
    ) -> PluginResult<TokenOperationResponse>;

    /// Queries whether Google Pay is the platform's default NFC payment
    /// app, and whether NFC is enabled.
    async fn is_gpay_default_nfc_app(&self) -> PluginResult<DefaultNfcAppResponse>;

    /// Asks the platform to make Google Pay the default NFC payment app,
    /// prompting the user.
    ///
    /// # Errors
    ///
    /// Fails with
    /// [`SET_DEFAULT_PAYMENTS_ERROR`](crate::error::ErrorCode::SetDefaultPaymentsError)
    /// on refusal or platform failure.
    async fn set_gpay_as_default_nfc_app(&self) -> PluginResult<SetDefaultNfcAppResponse>;

    /// Asks the native side to (re)arm its wallet data-change callback.
    ///
    /// Returns the provider's opaque acknowledgement. Independent of
    /// [`add_listener`](Self::add_listener): this arms the native source,
    /// while `add_listener` installs the delivery callback.
    async fn register_data_changed_listener(&self) -> PluginResult<RegisterListenerResponse>;

    /// Subscribes a listener to a plugin event.
    ///
    /// The callback is invoked zero or more times whenever wallet or
    /// token data changes; delivery order relative to other calls is not
    /// guaranteed. The subscription persists for the process lifetime or
    /// until [`remove_all_listeners`](Self::remove_all_listeners).
    fn add_listener(
        &self,
        event: PluginEvent,
        listener: Arc<dyn DataChangedListener>,
    ) -> ListenerHandle;

    /// Releases every active subscription.
    ///
    /// Fire-and-forget and global by contract: clears all subscriptions
    /// regardless of handle identity.
    fn remove_all_listeners(&self);
}
