//! SNS client construction.

use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_sns::Client;
use aws_types::region::Region;
use tracing::debug;

use snspush_core::{CoreError, Result};

/// Where the SNS client for an invocation comes from.
///
/// Exactly one source is in play per invocation. The union replaces an
/// "optional client plus optional credential fields" shape, so a partially
/// specified connection cannot even be represented; `Static` still checks
/// its fields for blank values before anything is built.
#[derive(Debug)]
pub enum ConnectionSource {
    /// A ready-made client supplied by the caller, used as-is.
    Provided(Client),
    /// Static credential pair plus region; a fresh client is built from it.
    Static {
        access_key: String,
        secret_key: String,
        region: String,
        /// Service endpoint override, for local SNS stand-ins.
        endpoint_url: Option<String>,
    },
    /// The SDK default credential chain (environment, shared config, IAM
    /// roles). Region and endpoint may still be pinned.
    Ambient {
        region: Option<String>,
        endpoint_url: Option<String>,
    },
}

impl ConnectionSource {
    /// Convenience constructor for the static triple.
    pub fn static_credentials(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::Static {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
            region: region.into(),
            endpoint_url: None,
        }
    }

    /// Sets the service endpoint override, where the variant carries one.
    #[must_use]
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        match &mut self {
            Self::Static { endpoint_url, .. } | Self::Ambient { endpoint_url, .. } => {
                *endpoint_url = Some(url.into());
            }
            Self::Provided(_) => {}
        }
        self
    }

    /// Produces the SNS client for this source.
    ///
    /// `Static` validates all three fields before any SDK machinery runs,
    /// so a blank key or region fails without touching the network.
    pub async fn connect(self) -> Result<Client> {
        match self {
            Self::Provided(client) => Ok(client),
            Self::Static {
                access_key,
                secret_key,
                region,
                endpoint_url,
            } => {
                for (field, value) in [
                    ("access key", &access_key),
                    ("secret access key", &secret_key),
                    ("region", &region),
                ] {
                    if value.trim().is_empty() {
                        return Err(CoreError::MissingParameter(field));
                    }
                }
                debug!(%region, "building SNS client from static credentials");

                let credentials =
                    Credentials::new(access_key, secret_key, None, None, "snspush-static");
                let mut loader = aws_config::defaults(BehaviorVersion::latest())
                    .region(Region::new(region))
                    .credentials_provider(credentials);
                if let Some(url) = endpoint_url {
                    loader = loader.endpoint_url(url);
                }
                let config = loader.load().await;
                Ok(Client::new(&config))
            }
            Self::Ambient {
                region,
                endpoint_url,
            } => {
                debug!("building SNS client from the default credential chain");
                let mut loader = aws_config::defaults(BehaviorVersion::latest());
                if let Some(region) = region {
                    loader = loader.region(Region::new(region));
                }
                if let Some(url) = endpoint_url {
                    loader = loader.endpoint_url(url);
                }
                let config = loader.load().await;
                Ok(Client::new(&config))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_static_fields_fail_before_any_sdk_work() {
        let err = ConnectionSource::static_credentials("", "secret", "us-east-1")
            .connect()
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::MissingParameter("access key")));

        let err = ConnectionSource::static_credentials("key", "  ", "us-east-1")
            .connect()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::MissingParameter("secret access key")
        ));

        let err = ConnectionSource::static_credentials("key", "secret", "")
            .connect()
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::MissingParameter("region")));
    }

    #[tokio::test]
    async fn complete_static_triple_builds_a_client() {
        let client = ConnectionSource::static_credentials("key", "secret", "eu-west-1")
            .with_endpoint_url("http://127.0.0.1:4566")
            .connect()
            .await
            .unwrap();
        assert_eq!(
            client.config().region().map(|r| r.as_ref()),
            Some("eu-west-1")
        );
    }

    #[test]
    fn endpoint_override_lands_on_chain_variants() {
        let source = ConnectionSource::Ambient {
            region: None,
            endpoint_url: None,
        }
        .with_endpoint_url("http://127.0.0.1:4566");
        match source {
            ConnectionSource::Ambient { endpoint_url, .. } => {
                assert_eq!(endpoint_url.as_deref(), Some("http://127.0.0.1:4566"));
            }
            _ => panic!("variant changed"),
        }
    }
}
