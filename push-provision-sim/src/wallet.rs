//! In-memory simulated wallet.

use std::fmt::{self, Debug};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::json;

use push_provision::environment::Environment;
use push_provision::error::PluginError;
use push_provision::events::{
    DataChangedEvent, DataChangedListener, ListenerHandle, ListenerRegistry, PluginEvent,
};
use push_provision::plugin::{GooglePayPlugin, PluginResult};
use push_provision::proto::{
    CreateWalletResponse, DefaultNfcAppResponse, EnvironmentResponse, HardwareIdResponse,
    IsTokenizedRequest, IsTokenizedResponse, ListTokensResponse, ProvisionRequest,
    PushProvisionResponse, RegisterListenerResponse, SetDefaultNfcAppResponse,
    TokenOperationResponse, TokenRequest, TokenStatusResponse, Tsp, WalletIdResponse,
};
use push_provision::token::TokenStatus;
use push_provision::validate::validate_provision_request;

/// A token registered in the simulated wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimToken {
    /// Token service provider identifier.
    pub tsp: Tsp,
    /// Last four digits of the underlying card.
    pub last_digits: String,
    /// Provider-issued token reference.
    pub token_reference_id: String,
    /// Reported lifecycle state.
    pub status: TokenStatus,
    /// Provider-specific diagnostic string reported with the state.
    pub code: String,
    /// Whether this token is selected for payments.
    pub selected: bool,
}

struct ActiveWallet {
    id: String,
    tokens: Vec<SimToken>,
}

struct WalletState {
    environment: Environment,
    hardware_id: String,
    wallet: Option<ActiveWallet>,
    is_default_nfc_app: bool,
    is_nfc_on: bool,
    cancel_next_wallet_creation: bool,
    cancel_next_provision: bool,
    fail_next_provision: bool,
    fail_next_tokenized_check: bool,
    fail_next_select_token: bool,
    fail_next_delete_token: bool,
    fail_next_set_default: bool,
    next_token_seq: u64,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            environment: Environment::Sandbox,
            hardware_id: "sim-hardware-id".to_owned(),
            wallet: None,
            is_default_nfc_app: false,
            is_nfc_on: true,
            cancel_next_wallet_creation: false,
            cancel_next_provision: false,
            fail_next_provision: false,
            fail_next_tokenized_check: false,
            fail_next_select_token: false,
            fail_next_delete_token: false,
            fail_next_set_default: false,
            next_token_seq: 1,
        }
    }
}

/// An in-memory [`GooglePayPlugin`] implementation for host-side testing.
///
/// State mutations (wallet creation, token registration, token removal)
/// emit a data-changed event to every registered listener, the way the
/// native plugin forwards the platform's wallet data-change callback.
pub struct SimulatedWallet {
    state: Mutex<WalletState>,
    listeners: Arc<ListenerRegistry>,
}

impl Debug for SimulatedWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("SimulatedWallet")
            .field("environment", &state.environment)
            .field("wallet", &state.wallet.as_ref().map(|w| &w.id))
            .field(
                "tokens",
                &state.wallet.as_ref().map_or(0, |w| w.tokens.len()),
            )
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Default for SimulatedWallet {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedWallet {
    /// Creates a simulated wallet in the sandbox environment with no
    /// active wallet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(WalletState::default()),
            listeners: Arc::new(ListenerRegistry::new()),
        }
    }

    /// Sets the reported environment tag.
    #[must_use]
    pub fn with_environment(self, environment: Environment) -> Self {
        self.lock().environment = environment;
        self
    }

    /// Sets the reported stable hardware identifier.
    #[must_use]
    pub fn with_hardware_id(self, hardware_id: impl Into<String>) -> Self {
        self.lock().hardware_id = hardware_id.into();
        self
    }

    /// Activates a wallet with the given id and an empty token table.
    #[must_use]
    pub fn with_wallet(self, id: impl Into<String>) -> Self {
        self.lock().wallet = Some(ActiveWallet {
            id: id.into(),
            tokens: Vec::new(),
        });
        self
    }

    /// Registers a fixture token in the active wallet.
    ///
    /// # Panics
    ///
    /// Panics if no wallet has been activated with
    /// [`with_wallet`](Self::with_wallet); fixture construction is a test
    /// setup step, not a runtime path.
    #[must_use]
    pub fn with_token(
        self,
        tsp: impl Into<Tsp>,
        last_digits: impl Into<String>,
        token_reference_id: impl Into<String>,
        status: TokenStatus,
        code: impl Into<String>,
    ) -> Self {
        {
            let mut state = self.lock();
            let wallet = state
                .wallet
                .as_mut()
                .expect("with_token requires with_wallet first");
            wallet.tokens.push(SimToken {
                tsp: tsp.into(),
                last_digits: last_digits.into(),
                token_reference_id: token_reference_id.into(),
                status,
                code: code.into(),
                selected: false,
            });
        }
        self
    }

    /// Makes the next `create_wallet` call fail as a user cancellation.
    pub fn cancel_next_wallet_creation(&self) {
        self.lock().cancel_next_wallet_creation = true;
    }

    /// Makes the next `push_provision` call fail as a user cancellation.
    pub fn cancel_next_provision(&self) {
        self.lock().cancel_next_provision = true;
    }

    /// Makes the next `push_provision` call fail as a platform error.
    pub fn fail_next_provision(&self) {
        self.lock().fail_next_provision = true;
    }

    /// Makes the next `is_tokenized` call fail as a lookup error.
    pub fn fail_next_tokenized_check(&self) {
        self.lock().fail_next_tokenized_check = true;
    }

    /// Makes the next `request_select_token` call fail as a platform error.
    pub fn fail_next_select_token(&self) {
        self.lock().fail_next_select_token = true;
    }

    /// Makes the next `request_delete_token` call fail as a platform error.
    pub fn fail_next_delete_token(&self) {
        self.lock().fail_next_delete_token = true;
    }

    /// Makes the next `set_gpay_as_default_nfc_app` call fail.
    pub fn fail_next_set_default(&self) {
        self.lock().fail_next_set_default = true;
    }

    /// Sets whether NFC is reported as enabled.
    pub fn set_nfc_enabled(&self, enabled: bool) {
        self.lock().is_nfc_on = enabled;
    }

    /// Sets whether Google Pay is reported as the default NFC app.
    pub fn set_default_nfc_app(&self, is_default: bool) {
        self.lock().is_default_nfc_app = is_default;
    }

    /// Simulates a native-side wallet data change, delivering an event to
    /// every registered listener.
    pub fn trigger_data_changed(&self) {
        self.listeners.emit(&DataChangedEvent);
    }

    /// Returns the listener registry shared with the native event source.
    #[must_use]
    pub fn listeners(&self) -> &Arc<ListenerRegistry> {
        &self.listeners
    }

    fn lock(&self) -> MutexGuard<'_, WalletState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit_data_changed(&self) {
        #[cfg(feature = "telemetry")]
        tracing::debug!("simulated wallet data changed");
        self.listeners.emit(&DataChangedEvent);
    }
}

#[async_trait]
impl GooglePayPlugin for SimulatedWallet {
    async fn get_environment(&self) -> PluginResult<EnvironmentResponse> {
        Ok(EnvironmentResponse {
            value: self.lock().environment,
        })
    }

    async fn get_stable_hardware_id(&self) -> PluginResult<HardwareIdResponse> {
        Ok(HardwareIdResponse {
            hardware_id: self.lock().hardware_id.clone(),
        })
    }

    async fn get_active_wallet_id(&self) -> PluginResult<WalletIdResponse> {
        self.lock().wallet.as_ref().map_or_else(
            || Err(PluginError::wallet("no active wallet")),
            |wallet| {
                Ok(WalletIdResponse {
                    wallet_id: wallet.id.clone(),
                })
            },
        )
    }

    async fn create_wallet(&self) -> PluginResult<CreateWalletResponse> {
        let created = {
            let mut state = self.lock();
            if state.cancel_next_wallet_creation {
                state.cancel_next_wallet_creation = false;
                return Err(PluginError::CreateWalletCancelled);
            }
            if state.wallet.is_some() {
                false
            } else {
                state.wallet = Some(ActiveWallet {
                    id: "sim-wallet".to_owned(),
                    tokens: Vec::new(),
                });
                true
            }
        };
        if created {
            self.emit_data_changed();
        }
        Ok(CreateWalletResponse { is_created: created })
    }

    async fn get_token_status(&self, request: TokenRequest) -> PluginResult<TokenStatusResponse> {
        let state = self.lock();
        let token = state.wallet.as_ref().and_then(|wallet| {
            wallet.tokens.iter().find(|t| {
                t.tsp == request.tsp && t.token_reference_id == request.token_reference_id
            })
        });
        Ok(token.map_or_else(TokenStatusResponse::not_found, |t| TokenStatusResponse {
            state: t.status,
            code: t.code.clone(),
        }))
    }

    async fn list_tokens(&self) -> PluginResult<ListTokensResponse> {
        let state = self.lock();
        let tokens = state.wallet.as_ref().map_or_else(Vec::new, |wallet| {
            wallet
                .tokens
                .iter()
                .map(|t| t.token_reference_id.clone())
                .collect()
        });
        Ok(ListTokensResponse { tokens })
    }

    async fn is_tokenized(&self, request: IsTokenizedRequest) -> PluginResult<IsTokenizedResponse> {
        let mut state = self.lock();
        if state.fail_next_tokenized_check {
            state.fail_next_tokenized_check = false;
            return Err(PluginError::IsTokenized {
                message: "simulated lookup failure".to_owned(),
            });
        }
        let is_tokenized = state.wallet.as_ref().is_some_and(|wallet| {
            wallet
                .tokens
                .iter()
                .any(|t| t.tsp == request.tsp && t.last_digits == request.last_digits)
        });
        Ok(IsTokenizedResponse { is_tokenized })
    }

    async fn push_provision(
        &self,
        request: ProvisionRequest,
    ) -> PluginResult<PushProvisionResponse> {
        validate_provision_request(&request)?;

        let token_id = {
            let mut state = self.lock();
            if state.cancel_next_provision {
                state.cancel_next_provision = false;
                return Err(PluginError::PushProvisionCancelled);
            }
            if state.fail_next_provision {
                state.fail_next_provision = false;
                return Err(PluginError::PushProvision {
                    message: "simulated provisioning failure".to_owned(),
                });
            }
            let seq = state.next_token_seq;
            state.next_token_seq += 1;
            let Some(wallet) = state.wallet.as_mut() else {
                return Err(PluginError::PushProvision {
                    message: "no active wallet".to_owned(),
                });
            };
            let token_id = format!("sim-token-{seq}");
            wallet.tokens.push(SimToken {
                tsp: request.tsp.clone(),
                last_digits: request.last_digits.clone(),
                token_reference_id: token_id.clone(),
                status: TokenStatus::Active,
                code: "TOKEN_STATE_ACTIVE".to_owned(),
                selected: false,
            });
            token_id
        };

        #[cfg(feature = "telemetry")]
        tracing::debug!(%token_id, tsp = %request.tsp, "token provisioned");
        self.emit_data_changed();
        Ok(PushProvisionResponse { token_id })
    }

    async fn request_select_token(
        &self,
        request: TokenRequest,
    ) -> PluginResult<TokenOperationResponse> {
        let mut state = self.lock();
        if state.fail_next_select_token {
            state.fail_next_select_token = false;
            return Err(PluginError::SelectToken {
                message: "simulated selection failure".to_owned(),
            });
        }
        let Some(wallet) = state.wallet.as_mut() else {
            return Err(PluginError::invalid_token(request.token_reference_id));
        };
        let found = wallet.tokens.iter().any(|t| {
            t.tsp == request.tsp && t.token_reference_id == request.token_reference_id
        });
        if !found {
            return Err(PluginError::invalid_token(request.token_reference_id));
        }
        for token in &mut wallet.tokens {
            token.selected =
                token.tsp == request.tsp && token.token_reference_id == request.token_reference_id;
        }
        Ok(TokenOperationResponse { is_success: true })
    }

    async fn request_delete_token(
        &self,
        request: TokenRequest,
    ) -> PluginResult<TokenOperationResponse> {
        {
            let mut state = self.lock();
            if state.fail_next_delete_token {
                state.fail_next_delete_token = false;
                return Err(PluginError::RemoveToken {
                    message: "simulated removal failure".to_owned(),
                });
            }
            let Some(wallet) = state.wallet.as_mut() else {
                return Err(PluginError::invalid_token(request.token_reference_id));
            };
            let before = wallet.tokens.len();
            wallet.tokens.retain(|t| {
                !(t.tsp == request.tsp && t.token_reference_id == request.token_reference_id)
            });
            if wallet.tokens.len() == before {
                return Err(PluginError::invalid_token(request.token_reference_id));
            }
        }
        self.emit_data_changed();
        Ok(TokenOperationResponse { is_success: true })
    }

    async fn is_gpay_default_nfc_app(&self) -> PluginResult<DefaultNfcAppResponse> {
        let state = self.lock();
        Ok(DefaultNfcAppResponse {
            is_default: state.is_default_nfc_app,
            is_nfc_on: state.is_nfc_on,
        })
    }

    async fn set_gpay_as_default_nfc_app(&self) -> PluginResult<SetDefaultNfcAppResponse> {
        let mut state = self.lock();
        if state.fail_next_set_default {
            state.fail_next_set_default = false;
            return Err(PluginError::SetDefaultPayments {
                message: "simulated refusal".to_owned(),
            });
        }
        state.is_default_nfc_app = true;
        Ok(SetDefaultNfcAppResponse { is_default: true })
    }

    async fn register_data_changed_listener(&self) -> PluginResult<RegisterListenerResponse> {
        // Arms the native-side callback; independent of add_listener.
        Ok(RegisterListenerResponse(json!({ "registered": true })))
    }

    fn add_listener(
        &self,
        event: PluginEvent,
        listener: Arc<dyn DataChangedListener>,
    ) -> ListenerHandle {
        match event {
            PluginEvent::DataChanged => self.listeners.add(listener),
        }
    }

    fn remove_all_listeners(&self) {
        self.listeners.remove_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use push_provision::error::ErrorCode;
    use push_provision::proto::Address;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn provision_request(tsp: &str, last_digits: &str) -> ProvisionRequest {
        ProvisionRequest {
            opc: "b3BhcXVl".into(),
            tsp: tsp.into(),
            client_name: "Acme Bank".into(),
            last_digits: last_digits.into(),
            address: Address {
                name: "Jane Diaz".into(),
                address1: "123 Main St".into(),
                address2: None,
                locality: "Mountain View".into(),
                administrative_area: "CA".into(),
                country_code: "US".into(),
                postal_code: "94043".into(),
                phone_number: "+14155550100".into(),
            },
        }
    }

    fn fixture_wallet() -> SimulatedWallet {
        SimulatedWallet::new().with_wallet("wallet-1").with_token(
            "VISA",
            "1234",
            "token-ref-1",
            TokenStatus::Active,
            "TOKEN_STATE_ACTIVE",
        )
    }

    #[derive(Default)]
    struct CountingListener {
        calls: AtomicUsize,
    }

    impl DataChangedListener for CountingListener {
        fn on_data_changed(&self, _event: &DataChangedEvent) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_environment_and_hardware_id() {
        let wallet = SimulatedWallet::new()
            .with_environment(Environment::Prod)
            .with_hardware_id("hw-42");
        let env = wallet.get_environment().await.unwrap();
        assert_eq!(env.value, Environment::Prod);

        let first = wallet.get_stable_hardware_id().await.unwrap();
        let second = wallet.get_stable_hardware_id().await.unwrap();
        assert_eq!(first.hardware_id, "hw-42");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_active_wallet_id_requires_wallet() {
        let wallet = SimulatedWallet::new();
        let err = wallet.get_active_wallet_id().await.unwrap_err();
        assert_eq!(err.code(), None);

        let wallet = wallet.with_wallet("wallet-1");
        let response = wallet.get_active_wallet_id().await.unwrap();
        assert_eq!(response.wallet_id, "wallet-1");
    }

    #[tokio::test]
    async fn test_create_wallet_is_idempotent() {
        let wallet = SimulatedWallet::new();
        let first = wallet.create_wallet().await.unwrap();
        assert!(first.is_created);
        let second = wallet.create_wallet().await.unwrap();
        assert!(!second.is_created);
        assert!(wallet.get_active_wallet_id().await.is_ok());
    }

    #[tokio::test]
    async fn test_create_wallet_user_cancel() {
        let wallet = SimulatedWallet::new();
        wallet.cancel_next_wallet_creation();
        let err = wallet.create_wallet().await.unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::CreateWalletCancel));
        assert!(err.is_cancellation());

        // The toggle is one-shot.
        assert!(wallet.create_wallet().await.unwrap().is_created);
    }

    #[tokio::test]
    async fn test_token_status_not_found_is_not_an_error() {
        let wallet = fixture_wallet();
        let response = wallet
            .get_token_status(TokenRequest {
                tsp: "VISA".into(),
                token_reference_id: "missing".into(),
            })
            .await
            .unwrap();
        assert_eq!(response.state, TokenStatus::NotFound);
    }

    #[tokio::test]
    async fn test_token_status_reports_fixture_state() {
        let wallet = fixture_wallet();
        let response = wallet
            .get_token_status(TokenRequest {
                tsp: "VISA".into(),
                token_reference_id: "token-ref-1".into(),
            })
            .await
            .unwrap();
        assert_eq!(response.state, TokenStatus::Active);
        assert_eq!(response.code, "TOKEN_STATE_ACTIVE");
    }

    #[tokio::test]
    async fn test_list_tokens_empty_wallet() {
        let wallet = SimulatedWallet::new().with_wallet("wallet-1");
        let response = wallet.list_tokens().await.unwrap();
        assert!(response.tokens.is_empty());
    }

    #[tokio::test]
    async fn test_is_tokenized_fixture_lookup() {
        let wallet = fixture_wallet();

        let hit = wallet
            .is_tokenized(IsTokenizedRequest {
                tsp: "VISA".into(),
                last_digits: "1234".into(),
            })
            .await
            .unwrap();
        assert!(hit.is_tokenized);

        let miss = wallet
            .is_tokenized(IsTokenizedRequest {
                tsp: "VISA".into(),
                last_digits: "9999".into(),
            })
            .await
            .unwrap();
        assert!(!miss.is_tokenized);
    }

    #[tokio::test]
    async fn test_is_tokenized_lookup_failure() {
        let wallet = fixture_wallet();
        wallet.fail_next_tokenized_check();
        let err = wallet
            .is_tokenized(IsTokenizedRequest {
                tsp: "VISA".into(),
                last_digits: "1234".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::IsTokenizedError));
    }

    #[tokio::test]
    async fn test_push_provision_registers_token_and_notifies() {
        let wallet = SimulatedWallet::new().with_wallet("wallet-1");
        let listener = Arc::new(CountingListener::default());
        wallet.add_listener(PluginEvent::DataChanged, listener.clone());

        let response = wallet
            .push_provision(provision_request("MASTERCARD", "4321"))
            .await
            .unwrap();
        assert!(!response.token_id.is_empty());
        assert_eq!(listener.calls.load(Ordering::SeqCst), 1);

        let tokens = wallet.list_tokens().await.unwrap();
        assert_eq!(tokens.tokens, vec![response.token_id.clone()]);

        let tokenized = wallet
            .is_tokenized(IsTokenizedRequest {
                tsp: "MASTERCARD".into(),
                last_digits: "4321".into(),
            })
            .await
            .unwrap();
        assert!(tokenized.is_tokenized);
    }

    #[tokio::test]
    async fn test_push_provision_rejects_incomplete_request() {
        let wallet = SimulatedWallet::new().with_wallet("wallet-1");
        let mut request = provision_request("VISA", "1234");
        request.opc.clear();
        let err = wallet.push_provision(request).await.unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::MissingDataError));

        // Nothing was dispatched.
        assert!(wallet.list_tokens().await.unwrap().tokens.is_empty());
    }

    #[tokio::test]
    async fn test_push_provision_user_cancel_and_failure() {
        let wallet = SimulatedWallet::new().with_wallet("wallet-1");

        wallet.cancel_next_provision();
        let err = wallet
            .push_provision(provision_request("VISA", "1234"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::PushProvisionCancel));

        wallet.fail_next_provision();
        let err = wallet
            .push_provision(provision_request("VISA", "1234"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::PushProvisionError));
    }

    #[tokio::test]
    async fn test_select_token() {
        let wallet = fixture_wallet();
        let ok = wallet
            .request_select_token(TokenRequest {
                tsp: "VISA".into(),
                token_reference_id: "token-ref-1".into(),
            })
            .await
            .unwrap();
        assert!(ok.is_success);

        let err = wallet
            .request_select_token(TokenRequest {
                tsp: "VISA".into(),
                token_reference_id: "missing".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::InvalidToken));
    }

    #[tokio::test]
    async fn test_select_token_platform_failure() {
        let wallet = fixture_wallet();
        wallet.fail_next_select_token();
        let err = wallet
            .request_select_token(TokenRequest {
                tsp: "VISA".into(),
                token_reference_id: "token-ref-1".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::SelectTokenError));
        assert_eq!(err.code().map(ErrorCode::value), Some(-8));

        // The toggle is one-shot; the token itself is still valid.
        let ok = wallet
            .request_select_token(TokenRequest {
                tsp: "VISA".into(),
                token_reference_id: "token-ref-1".into(),
            })
            .await
            .unwrap();
        assert!(ok.is_success);
    }

    #[tokio::test]
    async fn test_delete_token_platform_failure() {
        let wallet = fixture_wallet();
        wallet.fail_next_delete_token();
        let err = wallet
            .request_delete_token(TokenRequest {
                tsp: "VISA".into(),
                token_reference_id: "token-ref-1".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::RemoveTokenError));
        assert_eq!(err.code().map(ErrorCode::value), Some(-6));

        // The token survives a platform failure and can still be deleted.
        let ok = wallet
            .request_delete_token(TokenRequest {
                tsp: "VISA".into(),
                token_reference_id: "token-ref-1".into(),
            })
            .await
            .unwrap();
        assert!(ok.is_success);
        assert!(wallet.list_tokens().await.unwrap().tokens.is_empty());
    }

    #[tokio::test]
    async fn test_delete_token() {
        let wallet = fixture_wallet();
        let listener = Arc::new(CountingListener::default());
        wallet.add_listener(PluginEvent::DataChanged, listener.clone());

        let ok = wallet
            .request_delete_token(TokenRequest {
                tsp: "VISA".into(),
                token_reference_id: "token-ref-1".into(),
            })
            .await
            .unwrap();
        assert!(ok.is_success);
        assert_eq!(listener.calls.load(Ordering::SeqCst), 1);
        assert!(wallet.list_tokens().await.unwrap().tokens.is_empty());

        let err = wallet
            .request_delete_token(TokenRequest {
                tsp: "VISA".into(),
                token_reference_id: "token-ref-1".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::InvalidToken));
    }

    #[tokio::test]
    async fn test_nfc_default_app_flow() {
        let wallet = SimulatedWallet::new();
        wallet.set_nfc_enabled(false);

        let status = wallet.is_gpay_default_nfc_app().await.unwrap();
        assert!(!status.is_default);
        assert!(!status.is_nfc_on);

        wallet.fail_next_set_default();
        let err = wallet.set_gpay_as_default_nfc_app().await.unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::SetDefaultPaymentsError));

        let response = wallet.set_gpay_as_default_nfc_app().await.unwrap();
        assert!(response.is_default);
        assert!(wallet.is_gpay_default_nfc_app().await.unwrap().is_default);
    }

    #[tokio::test]
    async fn test_register_data_changed_listener_returns_opaque_ack() {
        let wallet = SimulatedWallet::new();
        let response = wallet.register_data_changed_listener().await.unwrap();
        assert_eq!(response.0["registered"], true);
        // Arming the native source does not install a delivery callback.
        assert!(wallet.listeners().is_empty());
    }

    #[tokio::test]
    async fn test_event_value_constructible_by_consumers() {
        // Consumers build the event value themselves when driving the
        // registry directly, e.g. from a test harness's native-side stub.
        let wallet = SimulatedWallet::new();
        let listener = Arc::new(CountingListener::default());
        wallet.add_listener(PluginEvent::DataChanged, listener.clone());

        let event = DataChangedEvent;
        wallet.listeners().emit(&event);
        assert_eq!(listener.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_listener_lifecycle_scenario() {
        let wallet = SimulatedWallet::new();
        let listener = Arc::new(CountingListener::default());
        wallet.add_listener(PluginEvent::DataChanged, listener.clone());

        wallet.trigger_data_changed();
        assert_eq!(listener.calls.load(Ordering::SeqCst), 1);

        wallet.remove_all_listeners();
        wallet.trigger_data_changed();
        assert_eq!(listener.calls.load(Ordering::SeqCst), 1);
    }
}
