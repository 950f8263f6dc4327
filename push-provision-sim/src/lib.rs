#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Simulated wallet backend for the push-provisioning plugin contract.
//!
//! This crate provides [`SimulatedWallet`], an in-process
//! [`GooglePayPlugin`](push_provision::plugin::GooglePayPlugin)
//! implementation over in-memory state, so application flows can be
//! integration-tested on the host without a device or the platform SDK.
//!
//! # Architecture
//!
//! The simulated wallet keeps an optional active wallet with a token
//! table behind a mutex, honors the same pre-dispatch request validation
//! as a native implementation, and emits data-changed events on every
//! mutation. Behavior toggles drive the failure branches a caller must
//! handle: user cancellation of wallet creation or provisioning, hard
//! provisioning failures, and tokenization-lookup failures.
//!
//! # Example
//!
//! ```
//! use push_provision::plugin::GooglePayPlugin;
//! use push_provision::token::TokenStatus;
//! use push_provision_sim::SimulatedWallet;
//!
//! # async fn demo() -> Result<(), push_provision::error::PluginError> {
//! let wallet = SimulatedWallet::new().with_wallet("wallet-1").with_token(
//!     "VISA",
//!     "1234",
//!     "token-ref-1",
//!     TokenStatus::Active,
//!     "TOKEN_STATE_ACTIVE",
//! );
//!
//! let status = wallet
//!     .get_token_status(push_provision::proto::TokenRequest {
//!         tsp: "VISA".into(),
//!         token_reference_id: "token-ref-1".into(),
//!     })
//!     .await?;
//! assert_eq!(status.state, TokenStatus::Active);
//! # Ok(())
//! # }
//! ```
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

mod wallet;

pub use wallet::{SimToken, SimulatedWallet};
