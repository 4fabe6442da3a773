//! # API Client
//!
//! HTTP client for the symptom prediction service.
//!
//! Handles:
//! - `GET /diseases` and `POST /predict` with reqwest
//! - Mapping HTTP status, transport and body decoding failures onto [`symptom_core::BackendError`]
//!
//! Uses `symptom-api-shared` for the wire types and implements
//! [`symptom_core::SymptomBackend`] so the controller can drive it.

#![warn(rust_2018_idioms)]

mod client;

pub use client::HttpBackend;
