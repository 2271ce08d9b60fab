//! Create-or-update reconciliation against the remote service.

use std::fmt;

use tracing::debug;

use crate::api::{PlatformApplicationSummary, PlatformApplications};
use crate::credentials::derive_attributes;
use crate::error::{CoreError, Result};
use crate::request::PlatformApplicationRequest;

/// Default cap on listing pages scanned per invocation.
pub const DEFAULT_MAX_LIST_PAGES: u32 = 100;

/// What a reconciliation did to satisfy its request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileAction {
    /// A new platform application was created.
    Created,
    /// An existing application's attributes were replaced.
    Updated,
}

impl fmt::Display for ReconcileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Updated => f.write_str("updated"),
        }
    }
}

/// Outcome of a reconciliation: the application's ARN and how it came to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub arn: String,
    pub action: ReconcileAction,
}

/// Drives one request to completion against a [`PlatformApplications`]
/// backend.
///
/// The flow is: validate, derive attributes, then either update an existing
/// application found by name or create a fresh one. The existence search
/// only runs when the request opts into updates; the default is to create
/// unconditionally and let the service report a name conflict.
pub struct Reconciler<A> {
    api: A,
    max_pages: u32,
}

impl<A: PlatformApplications> Reconciler<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            max_pages: DEFAULT_MAX_LIST_PAGES,
        }
    }

    /// Overrides the cap on listing pages scanned per invocation.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Runs the full create-or-update flow for one request.
    ///
    /// Local failures (validation, credential material) are returned before
    /// any remote call is made.
    pub async fn apply(&self, request: &PlatformApplicationRequest) -> Result<Reconciliation> {
        request.validate()?;
        let attributes = derive_attributes(request)?;

        if request.update_if_exists {
            if let Some(arn) = self.find_existing(&request.name).await? {
                debug!(arn = %arn, "updating existing platform application");
                self.api.set_attributes(&arn, &attributes).await?;
                return Ok(Reconciliation {
                    arn,
                    action: ReconcileAction::Updated,
                });
            }
            debug!(name = %request.name, "no existing platform application matched");
        }

        let platform = request.platform.sns_name();
        debug!(name = %request.name, platform, "creating platform application");
        let arn = self.api.create(&request.name, platform, &attributes).await?;
        Ok(Reconciliation {
            arn,
            action: ReconcileAction::Created,
        })
    }

    /// Collects the entire listing, page by page, up to the page cap.
    pub async fn list_all(&self) -> Result<Vec<PlatformApplicationSummary>> {
        let mut applications = Vec::new();
        let mut cursor = None;
        for _ in 0..self.max_pages {
            let page = self.api.list(cursor).await?;
            applications.extend(page.applications);
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => return Ok(applications),
            }
        }
        Err(CoreError::PaginationLimit {
            max_pages: self.max_pages,
        })
    }

    /// Scans the listing for the first ARN ending in `name`.
    ///
    /// The ARN embeds the application name as its terminal segment, so this
    /// is a suffix match rather than an equality check. Two names in a
    /// suffix relation can therefore collide; the first hit in service
    /// iteration order wins.
    async fn find_existing(&self, name: &str) -> Result<Option<String>> {
        let mut cursor = None;
        for page in 0..self.max_pages {
            let listing = self.api.list(cursor).await?;
            debug!(
                page,
                applications = listing.applications.len(),
                "scanned platform application page"
            );
            if let Some(hit) = listing
                .applications
                .iter()
                .find(|app| app.arn.ends_with(name))
            {
                return Ok(Some(hit.arn.clone()));
            }
            match listing.next_cursor {
                Some(next) => cursor = Some(next),
                None => return Ok(None),
            }
        }
        Err(CoreError::PaginationLimit {
            max_pages: self.max_pages,
        })
    }
}
