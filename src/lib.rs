//! Leptos 0.7 CSR admin console for the authd authentication service
//!
//! This crate provides a client-side rendered web UI for administering
//! users and refresh-token sessions on an authd backend.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Type-safe routing with leptos_router
//! - REST communication with the backend via gloo-net
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `router`: Route table and router configuration
//! - `pages`: Top-level page components
//! - `components`: Navigation bar and form components
//! - `models`: User and session data structures
//! - `api`: HTTP client for the authd REST API

#![forbid(unsafe_code)]

pub mod api;
pub mod app;
pub mod components;
pub mod models;
pub mod pages;
pub mod router;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;

#[cfg(test)]
mod tests;
