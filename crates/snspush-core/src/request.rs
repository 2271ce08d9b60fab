//! Request model for creating or updating a platform application.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{CoreError, Result};
use crate::platform::Platform;

/// Source material the platform credential attributes are derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// PKCS#12 bundle holding the APNS signing certificate and private key.
    ApnsCertificate {
        /// Path to the `.p12` file.
        path: PathBuf,
        /// Import password for the bundle. Often empty.
        password: String,
    },
    /// FCM (formerly GCM) server API key, passed through verbatim.
    FcmServerKey(String),
}

/// A single create-or-update request.
///
/// Carries everything needed to reconcile one platform application: the
/// target platform and name, optional credential material, caller-supplied
/// attribute overrides, and whether an existing application with the same
/// name should be updated in place.
#[derive(Debug, Clone)]
pub struct PlatformApplicationRequest {
    pub platform: Platform,
    pub name: String,
    pub credentials: Option<CredentialSource>,
    pub attribute_overrides: BTreeMap<String, String>,
    pub update_if_exists: bool,
}

impl PlatformApplicationRequest {
    pub fn new(platform: Platform, name: impl Into<String>) -> Self {
        Self {
            platform,
            name: name.into(),
            credentials: None,
            attribute_overrides: BTreeMap::new(),
            update_if_exists: false,
        }
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: CredentialSource) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Adds one attribute override. Overrides win over derived attributes.
    #[must_use]
    pub fn with_attribute_override(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.attribute_overrides.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_update_if_exists(mut self, update_if_exists: bool) -> Self {
        self.update_if_exists = update_if_exists;
        self
    }

    /// Checks invariants that need no credential material or network access.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(())
    }
}
