//! [`PlatformApplications`] implementation over `aws-sdk-sns`.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_sns::Client;
use aws_sdk_sns::error::DisplayErrorContext;
use tracing::debug;

use snspush_core::{
    ApiOperation, ApplicationPage, CoreError, PlatformApplicationSummary, PlatformApplications,
    PlatformAttributes, Result,
};

/// Platform application operations backed by a real SNS client.
///
/// The adapter is a thin mapping layer: SDK builders on the way out, plain
/// core types on the way back, and every SDK failure collapsed into
/// [`CoreError::Api`] with the operation it came from.
pub struct SnsPlatformApplications {
    client: Client,
}

impl SnsPlatformApplications {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlatformApplications for SnsPlatformApplications {
    async fn list(&self, cursor: Option<String>) -> Result<ApplicationPage> {
        let output = self
            .client
            .list_platform_applications()
            .set_next_token(cursor)
            .send()
            .await
            .map_err(|err| {
                CoreError::api(
                    ApiOperation::ListPlatformApplications,
                    DisplayErrorContext(&err),
                )
            })?;

        let applications = output
            .platform_applications()
            .iter()
            .filter_map(|application| {
                let arn = application.platform_application_arn()?.to_string();
                let attributes = application
                    .attributes()
                    .map(|map| {
                        map.iter()
                            .map(|(key, value)| (key.clone(), value.clone()))
                            .collect()
                    })
                    .unwrap_or_default();
                Some(PlatformApplicationSummary { arn, attributes })
            })
            .collect::<Vec<_>>();

        debug!(
            applications = applications.len(),
            has_more = output.next_token().is_some(),
            "listed platform application page"
        );

        Ok(ApplicationPage {
            applications,
            next_cursor: output.next_token().map(str::to_string),
        })
    }

    async fn create(
        &self,
        name: &str,
        platform: &str,
        attributes: &PlatformAttributes,
    ) -> Result<String> {
        let output = self
            .client
            .create_platform_application()
            .name(name)
            .platform(platform)
            .set_attributes(Some(sdk_attributes(attributes)))
            .send()
            .await
            .map_err(|err| {
                CoreError::api(
                    ApiOperation::CreatePlatformApplication,
                    DisplayErrorContext(&err),
                )
            })?;

        output
            .platform_application_arn()
            .map(str::to_string)
            .ok_or_else(|| {
                CoreError::api(
                    ApiOperation::CreatePlatformApplication,
                    "response carried no platform application ARN",
                )
            })
    }

    async fn set_attributes(&self, arn: &str, attributes: &PlatformAttributes) -> Result<()> {
        self.client
            .set_platform_application_attributes()
            .platform_application_arn(arn)
            .set_attributes(Some(sdk_attributes(attributes)))
            .send()
            .await
            .map_err(|err| {
                CoreError::api(
                    ApiOperation::SetPlatformApplicationAttributes,
                    DisplayErrorContext(&err),
                )
            })?;
        Ok(())
    }
}

fn sdk_attributes(attributes: &PlatformAttributes) -> HashMap<String, String> {
    attributes
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
