//! Outbound adapters.
//!
//! Provides the concrete [`TextGenerator`](crate::port::outbound::generator::TextGenerator)
//! implementation for the Hugging Face hosted-inference endpoint.

pub mod huggingface;
