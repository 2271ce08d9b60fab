//! Push platforms supported by SNS platform applications.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Push-notification platform a platform application targets.
///
/// `Fcm` exists as a distinct member because callers know their credential as
/// an "FCM server key", but SNS itself only recognizes the legacy `GCM`
/// platform name. [`Platform::sns_name`] performs that folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Apple Push Notification service, production environment.
    Apns,
    /// Apple Push Notification service, sandbox environment.
    ApnsSandbox,
    /// Google Cloud Messaging.
    Gcm,
    /// Firebase Cloud Messaging, the successor to GCM.
    Fcm,
}

impl Platform {
    /// Every supported platform, in declaration order.
    pub const ALL: [Platform; 4] = [
        Platform::Apns,
        Platform::ApnsSandbox,
        Platform::Gcm,
        Platform::Fcm,
    ];

    /// Canonical name as accepted from callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apns => "APNS",
            Self::ApnsSandbox => "APNS_SANDBOX",
            Self::Gcm => "GCM",
            Self::Fcm => "FCM",
        }
    }

    /// Platform name sent to SNS.
    ///
    /// FCM folds into `GCM`; the service has no separate FCM platform.
    pub fn sns_name(&self) -> &'static str {
        match self {
            Self::Apns => "APNS",
            Self::ApnsSandbox => "APNS_SANDBOX",
            Self::Gcm | Self::Fcm => "GCM",
        }
    }

    /// True for the Apple platforms, which take certificate credentials.
    pub fn is_apns(&self) -> bool {
        matches!(self, Self::Apns | Self::ApnsSandbox)
    }

    /// True for the Google platforms, which take a server API key.
    pub fn is_gcm(&self) -> bool {
        matches!(self, Self::Gcm | Self::Fcm)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    /// Parses a platform name, tolerating case and `-`/`_` separator
    /// differences (`apns-sandbox` and `APNS_SANDBOX` both parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "APNS" => Ok(Self::Apns),
            "APNS_SANDBOX" => Ok(Self::ApnsSandbox),
            "GCM" => Ok(Self::Gcm),
            "FCM" => Ok(Self::Fcm),
            _ => Err(CoreError::UnknownPlatform(s.to_string())),
        }
    }
}
