use anyhow::Result;
use colored::Colorize;

use snspush_aws::SnsPlatformApplications;
use snspush_core::{
    CredentialSource, Platform, PlatformApplicationRequest, ReconcileAction, Reconciler,
};

use crate::cli::CreateArgs;
use crate::config;
use crate::output::{print_reconciliation, print_success, print_warning};

pub async fn create(args: &CreateArgs, profile: &str) -> Result<()> {
    let request = build_request(args)?;
    let source = config::resolve_connection(&args.connection, profile)?;
    let client = source.connect().await?;
    let backend = SnsPlatformApplications::new(client);

    let outcome = Reconciler::new(backend).apply(&request).await?;

    let verb = match outcome.action {
        ReconcileAction::Created => "Created",
        ReconcileAction::Updated => "Updated",
    };
    print_success(&format!(
        "{verb} platform application {}",
        outcome.arn.cyan()
    ));
    print_reconciliation(&outcome, args.format.unwrap_or_default());
    Ok(())
}

fn build_request(args: &CreateArgs) -> Result<PlatformApplicationRequest> {
    let mut request = PlatformApplicationRequest::new(args.platform.into(), &args.name)
        .with_update_if_exists(args.update_if_exists);

    if let Some(credentials) = credential_source(args) {
        request = request.with_credentials(credentials);
    }
    for pair in &args.attributes {
        let (key, value) = parse_attribute(pair)?;
        request = request.with_attribute_override(key, value);
    }
    Ok(request)
}

/// Picks the credential source matching the platform family: APNS platforms
/// read the certificate bundle, GCM/FCM platforms read the server key.
/// Flags for the other family are ignored; --gcm-api-key is honoured as a
/// fallback spelling of the server key.
fn credential_source(args: &CreateArgs) -> Option<CredentialSource> {
    if Platform::from(args.platform).is_apns() {
        let path = args.apns_certificate.as_ref()?;
        return Some(CredentialSource::ApnsCertificate {
            path: path.clone(),
            password: args.apns_password.clone(),
        });
    }
    if let Some(key) = &args.fcm_server_key {
        return Some(CredentialSource::FcmServerKey(key.clone()));
    }
    if let Some(key) = &args.gcm_api_key {
        print_warning("--gcm-api-key is deprecated, use --fcm-server-key");
        return Some(CredentialSource::FcmServerKey(key.clone()));
    }
    None
}

fn parse_attribute(pair: &str) -> Result<(String, String)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => anyhow::bail!("Invalid attribute \"{pair}\". Expected format: KEY=VALUE"),
    }
}
