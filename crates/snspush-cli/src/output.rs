use colored::Colorize;
use snspush_core::{PlatformApplicationSummary, Reconciliation};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::cli::{ListFormat, OutputFormat};

/// Environment variable downstream pipeline steps read the ARN from.
pub const ARN_ENV_VAR: &str = "AWS_SNS_PLATFORM_APPLICATION_ARN";

// Status lines go to stderr; stdout is reserved for the ARN payload so the
// command stays pipeline-friendly.

pub fn print_success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Writes the reconciliation result to stdout in the selected format.
pub fn print_reconciliation(outcome: &Reconciliation, format: OutputFormat) {
    match format {
        OutputFormat::Arn => println!("{}", outcome.arn),
        OutputFormat::Env => println!("{ARN_ENV_VAR}={}", outcome.arn),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "arn": outcome.arn,
                "action": outcome.action.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&value).unwrap());
        }
    }
}

pub fn print_applications(applications: &[PlatformApplicationSummary], format: ListFormat) {
    match format {
        ListFormat::Table => print_application_table(applications),
        ListFormat::Json => {
            let items: Vec<_> = applications
                .iter()
                .map(|app| {
                    serde_json::json!({
                        "arn": app.arn,
                        "attributes": app.attributes,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&items).unwrap());
        }
    }
}

fn print_application_table(applications: &[PlatformApplicationSummary]) {
    if applications.is_empty() {
        println!("No platform applications found.");
        return;
    }
    let mut builder = Builder::default();
    builder.push_record(["Name", "Platform", "Enabled", "ARN"]);
    for app in applications {
        let (platform, name) = app_identity(&app.arn).unwrap_or(("-", "-"));
        let enabled = app
            .attributes
            .get("Enabled")
            .map(String::as_str)
            .unwrap_or("-");
        builder.push_record([name, platform, enabled, app.arn.as_str()]);
    }
    let table = builder.build().with(Style::rounded()).to_string();
    println!("{table}");
    println!("Total: {}", applications.len());
}

/// Splits a platform application ARN into its platform and name segments.
///
/// ARNs look like `arn:aws:sns:us-east-1:123456789012:app/GCM/my-app`.
fn app_identity(arn: &str) -> Option<(&str, &str)> {
    let (_, path) = arn.split_once(":app/")?;
    path.split_once('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arn_identity_extracts_platform_and_name() {
        assert_eq!(
            app_identity("arn:aws:sns:us-east-1:123456789012:app/GCM/my-app"),
            Some(("GCM", "my-app"))
        );
        assert_eq!(
            app_identity("arn:aws:sns:eu-west-1:123456789012:app/APNS_SANDBOX/ios/beta"),
            Some(("APNS_SANDBOX", "ios/beta"))
        );
    }

    #[test]
    fn malformed_arns_yield_nothing() {
        assert_eq!(app_identity("arn:aws:sns:us-east-1:123:topic/x"), None);
        assert_eq!(app_identity(""), None);
    }
}
