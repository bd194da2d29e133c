//! Banter - terminal chat over Hugging Face hosted inference.
//!
//! This crate sends free-text questions to a hosted text-generation
//! endpoint and converts every outcome, including failures, into a
//! user-displayable reply. Trivial binary arithmetic is answered locally
//! without touching the network.
//!
//! # Architecture
//!
//! - [`domain`] - Conversation log and the arithmetic fast path
//! - [`port`] - Trait seams between the application and the outside world
//! - [`adapter`] - Hugging Face Inference API client
//! - [`app`] - The [`Assistant`](app::Assistant) answering boundary
//! - [`config`] - Configuration loading from TOML with env-only secrets
//! - [`error`] - Error types for the crate
//! - [`cli`] - Command-line interface (interactive chat, one-shot ask,
//!   diagnostics)
//!
//! # Example
//!
//! ```
//! use banter::app::Assistant;
//!
//! # #[tokio::main]
//! # async fn main() {
//! // Without a credential only the arithmetic fast path answers.
//! let assistant = Assistant::new(None);
//! assert_eq!(assistant.answer("2 + 2").await, "2 + 2 = 4");
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
