#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Contract types for the Google Pay push-provisioning plugin.
//!
//! This crate defines the client-facing surface of a native wallet bridge:
//! enumerated error codes and token states, request/response shapes, the
//! [`GooglePayPlugin`](plugin::GooglePayPlugin) operation trait, and the
//! data-changed listener registry. The actual tokenization, secure element
//! communication, and wallet management live in the platform SDK behind a
//! native implementation of the trait; this layer only shapes and routes
//! the calls.
//!
//! # Overview
//!
//! Every operation is a single asynchronous request/response call that
//! resolves with a typed result or fails with a
//! [`PluginError`](error::PluginError) carrying one of the nine fixed
//! [`ErrorCode`](error::ErrorCode) values. Token states are observations of external
//! wallet-provider state; callers re-query to observe updates, or install
//! a data-changed listener for push-based notification.
//!
//! # Modules
//!
//! - [`environment`] - PROD / SANDBOX / DEV environment tag
//! - [`error`] - Error codes and the plugin error type
//! - [`events`] - Data-changed listener trait and registry
//! - [`plugin`] - The plugin operation trait
//! - [`proto`] - Wire-compatible request and response shapes
//! - [`token`] - Token lifecycle states
//! - [`validate`] - Pre-dispatch request-shape validation
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod environment;
pub mod error;
pub mod events;
pub mod plugin;
pub mod proto;
pub mod token;
pub mod validate;
