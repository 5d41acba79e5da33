//! Chat-completion client for pathforge.
//!
//! One [`CompletionClient`] is built per incoming request from that
//! request's credential; nothing is shared between requests.

pub mod client;
pub mod error;
pub mod wire;

pub use client::CompletionClient;
pub use error::{CompletionError, CompletionResult};
pub use pathforge_runtime_config::UpstreamSettings;
pub use wire::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Role};
