//! # snspush-core
//!
//! Data model and reconciliation logic for AWS SNS platform applications,
//! the SNS objects that bind a push credential (APNS certificate, FCM
//! server key) to a named application and hand back the ARN device
//! endpoints are registered under.
//!
//! The crate is backend-agnostic: the [`PlatformApplications`] trait
//! captures the three service operations reconciliation needs (list,
//! create, set attributes), and the [`Reconciler`] drives a
//! [`PlatformApplicationRequest`] through validation, credential
//! derivation and the create-or-update decision. The `snspush-aws` crate
//! supplies the `aws-sdk-sns` backend; tests run against in-memory stubs.
//!
//! ## Example
//!
//! ```ignore
//! use snspush_core::{CredentialSource, Platform, PlatformApplicationRequest, Reconciler};
//!
//! let request = PlatformApplicationRequest::new(Platform::Fcm, "android-app")
//!     .with_credentials(CredentialSource::FcmServerKey(server_key))
//!     .with_update_if_exists(true);
//!
//! let outcome = Reconciler::new(backend).apply(&request).await?;
//! println!("{}", outcome.arn);
//! ```

mod api;
mod attributes;
mod credentials;
mod error;
mod platform;
mod reconcile;
mod request;

pub use api::{ApplicationPage, PlatformApplicationSummary, PlatformApplications};
pub use attributes::{PLATFORM_CREDENTIAL, PLATFORM_PRINCIPAL, PlatformAttributes};
pub use credentials::derive_attributes;
pub use error::{ApiOperation, CoreError, Result};
pub use platform::Platform;
pub use reconcile::{
    DEFAULT_MAX_LIST_PAGES, ReconcileAction, Reconciler, Reconciliation,
};
pub use request::{CredentialSource, PlatformApplicationRequest};
