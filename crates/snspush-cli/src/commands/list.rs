use anyhow::Result;

use snspush_aws::SnsPlatformApplications;
use snspush_core::Reconciler;

use crate::cli::ListArgs;
use crate::config;
use crate::output::print_applications;

pub async fn list(args: &ListArgs, profile: &str) -> Result<()> {
    let source = config::resolve_connection(&args.connection, profile)?;
    let client = source.connect().await?;
    let backend = SnsPlatformApplications::new(client);

    let applications = Reconciler::new(backend)
        .with_max_pages(args.max_pages)
        .list_all()
        .await?;
    print_applications(&applications, args.format.unwrap_or_default());
    Ok(())
}
