//! # snspush-aws
//!
//! `aws-sdk-sns` backend for the snspush crates: client construction from a
//! [`ConnectionSource`] and the [`SnsPlatformApplications`] adapter that
//! implements the core [`snspush_core::PlatformApplications`] trait over
//! real SNS calls.

mod client;
mod sns;

pub use client::ConnectionSource;
pub use sns::SnsPlatformApplications;
