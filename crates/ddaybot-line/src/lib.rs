//! LINE Messaging API transport for ddaybot.
//!
//! Covers the three boundary concerns of the bot:
//! - outbound reply/push calls ([`api::LineApi`])
//! - webhook payload types ([`types`])
//! - webhook signature verification ([`signature`])
//!
//! # Configuration
//!
//! The client is constructed from a channel access token; webhook
//! verification uses the channel secret. Both come from the environment,
//! see `ddaybot-config`.

pub mod api;
pub mod signature;
pub mod types;

pub use api::LineApi;
pub use signature::verify_signature;
