//! Error types shared across the snspush crates.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the snspush crates.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Remote SNS operation a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    ListPlatformApplications,
    CreatePlatformApplication,
    SetPlatformApplicationAttributes,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ListPlatformApplications => "ListPlatformApplications",
            Self::CreatePlatformApplication => "CreatePlatformApplication",
            Self::SetPlatformApplicationAttributes => "SetPlatformApplicationAttributes",
        };
        f.write_str(name)
    }
}

/// Errors raised while deriving credential attributes or reconciling a
/// platform application against SNS.
///
/// Validation and credential-material variants are produced before any
/// network interaction; [`CoreError::Api`] wraps failures reported by the
/// service itself.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The platform application name was empty or blank.
    #[error("platform application name must not be empty")]
    EmptyName,

    /// A platform string did not match any supported platform.
    #[error("unknown platform '{0}' (expected APNS, APNS_SANDBOX, GCM or FCM)")]
    UnknownPlatform(String),

    /// A required connection parameter was missing or blank.
    #[error("missing AWS connection parameter: {0}")]
    MissingParameter(&'static str),

    /// The APNS credential bundle does not exist on disk.
    #[error("APNS credential bundle not found: {path}")]
    ApnsCertificateMissing { path: PathBuf },

    /// The APNS credential bundle exists but could not be read.
    #[error("failed to read APNS credential bundle {path}")]
    ApnsCertificateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The APNS credential bundle is not a valid PKCS#12 container, or the
    /// import password is wrong.
    #[error("failed to parse APNS credential bundle {path}")]
    ApnsCertificateParse {
        path: PathBuf,
        #[source]
        source: openssl::error::ErrorStack,
    },

    /// The APNS credential bundle parsed but is missing a required entry.
    #[error("APNS credential bundle {path} contains no {missing}")]
    ApnsCertificateIncomplete {
        path: PathBuf,
        missing: &'static str,
    },

    /// Credential derivation and overrides produced an empty attribute map.
    #[error("no attributes to create or update the platform application with")]
    EmptyAttributes,

    /// The listing cursor was still live after the page cap was reached.
    #[error("platform application listing exceeded {max_pages} pages without exhausting its cursor")]
    PaginationLimit { max_pages: u32 },

    /// The service rejected or failed a request.
    #[error("{operation} failed: {message}")]
    Api {
        operation: ApiOperation,
        message: String,
    },
}

impl CoreError {
    /// Wraps a remote failure, capturing which SNS operation it came from.
    pub fn api(operation: ApiOperation, message: impl fmt::Display) -> Self {
        Self::Api {
            operation,
            message: message.to_string(),
        }
    }

    /// True when the error was produced locally, before any request was sent.
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Api { .. } | Self::PaginationLimit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_constructor_captures_operation_and_message() {
        let err = CoreError::api(ApiOperation::CreatePlatformApplication, "throttled");
        assert_eq!(
            err.to_string(),
            "CreatePlatformApplication failed: throttled"
        );
        assert!(!err.is_local());
    }

    #[test]
    fn local_errors_are_flagged_as_local() {
        assert!(CoreError::EmptyName.is_local());
        assert!(CoreError::EmptyAttributes.is_local());
        assert!(CoreError::MissingParameter("region").is_local());
        assert!(!CoreError::PaginationLimit { max_pages: 5 }.is_local());
    }

    #[test]
    fn operation_display_uses_sns_action_names() {
        assert_eq!(
            ApiOperation::SetPlatformApplicationAttributes.to_string(),
            "SetPlatformApplicationAttributes"
        );
        assert_eq!(
            ApiOperation::ListPlatformApplications.to_string(),
            "ListPlatformApplications"
        );
    }

    #[test]
    fn missing_bundle_error_includes_path() {
        let err = CoreError::ApnsCertificateMissing {
            path: PathBuf::from("/tmp/push.p12"),
        };
        assert!(err.to_string().contains("/tmp/push.p12"));
    }
}
