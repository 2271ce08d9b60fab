//! Remote platform-application capability.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::attributes::PlatformAttributes;
use crate::error::Result;

/// A platform application as reported by the listing API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformApplicationSummary {
    /// Resource ARN. The application name is its terminal path segment.
    pub arn: String,
    /// Attributes the service reports for the application.
    pub attributes: BTreeMap<String, String>,
}

/// One page of the platform application listing.
#[derive(Debug, Clone, Default)]
pub struct ApplicationPage {
    /// Applications on this page, in service iteration order.
    pub applications: Vec<PlatformApplicationSummary>,
    /// Continuation cursor. `None` means the listing is exhausted.
    pub next_cursor: Option<String>,
}

/// The three SNS operations reconciliation needs: list, create, update.
///
/// Implemented over `aws-sdk-sns` by the `snspush-aws` crate and by
/// in-memory stubs in tests. The reconciler awaits operations one at a
/// time; implementations must be safe to share across tasks.
#[async_trait]
pub trait PlatformApplications: Send + Sync {
    /// Fetches one page of platform applications, starting from `cursor`.
    async fn list(&self, cursor: Option<String>) -> Result<ApplicationPage>;

    /// Creates a platform application and returns the ARN the service
    /// allocated. `platform` is the SNS-side platform name, see
    /// [`crate::Platform::sns_name`].
    async fn create(
        &self,
        name: &str,
        platform: &str,
        attributes: &PlatformAttributes,
    ) -> Result<String>;

    /// Replaces the attributes of the application identified by `arn`.
    async fn set_attributes(&self, arn: &str, attributes: &PlatformAttributes) -> Result<()>;
}

#[async_trait]
impl<T: PlatformApplications + ?Sized> PlatformApplications for Arc<T> {
    async fn list(&self, cursor: Option<String>) -> Result<ApplicationPage> {
        (**self).list(cursor).await
    }

    async fn create(
        &self,
        name: &str,
        platform: &str,
        attributes: &PlatformAttributes,
    ) -> Result<String> {
        (**self).create(name, platform, attributes).await
    }

    async fn set_attributes(&self, arn: &str, attributes: &PlatformAttributes) -> Result<()> {
        (**self).set_attributes(arn, attributes).await
    }
}
