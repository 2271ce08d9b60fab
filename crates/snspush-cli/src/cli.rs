use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use snspush_core::{DEFAULT_MAX_LIST_PAGES, Platform};

#[derive(Parser)]
#[command(name = "snspush")]
#[command(about = "Create or update AWS SNS platform applications for push notifications")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config profile name
    #[arg(
        short,
        long,
        global = true,
        env = "SNSPUSH_PROFILE",
        default_value = "default"
    )]
    pub profile: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a platform application, or update one that already exists
    Create(CreateArgs),
    /// List existing platform applications
    List(ListArgs),
    /// Manage CLI configuration
    Config(ConfigArgs),
}

/// Push platform, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Apns,
    #[value(alias = "apns_sandbox")]
    ApnsSandbox,
    Gcm,
    Fcm,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Apns => Platform::Apns,
            PlatformArg::ApnsSandbox => Platform::ApnsSandbox,
            PlatformArg::Gcm => Platform::Gcm,
            PlatformArg::Fcm => Platform::Fcm,
        }
    }
}

/// How the resulting ARN is written to stdout.
#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Bare ARN
    #[default]
    Arn,
    /// AWS_SNS_PLATFORM_APPLICATION_ARN=<arn>, ready for eval or an env file
    Env,
    /// JSON object with the ARN and the action taken
    Json,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum ListFormat {
    #[default]
    Table,
    Json,
}

/// Connection parameters shared by the commands that talk to SNS.
#[derive(clap::Args)]
pub struct ConnectionArgs {
    /// AWS access key ID
    #[arg(long, env = "AWS_SNS_ACCESS_KEY")]
    pub access_key: Option<String>,

    /// AWS secret access key
    #[arg(long, env = "AWS_SNS_SECRET_ACCESS_KEY")]
    pub secret_access_key: Option<String>,

    /// AWS region
    #[arg(long, env = "AWS_SNS_REGION")]
    pub region: Option<String>,

    /// SNS endpoint override (e.g. a LocalStack URL)
    #[arg(long, env = "AWS_SNS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Use the SDK default credential chain instead of a static key pair
    #[arg(long, conflicts_with_all = ["access_key", "secret_access_key"])]
    pub aws_default_chain: bool,
}

#[derive(clap::Args)]
pub struct CreateArgs {
    /// Push platform for the application
    #[arg(long, value_enum, ignore_case = true, env = "AWS_SNS_PLATFORM")]
    pub platform: PlatformArg,

    /// Platform application name (becomes the last segment of the ARN)
    #[arg(long, env = "AWS_SNS_PLATFORM_NAME")]
    pub name: String,

    /// Path to an APNS PKCS#12 (.p12) credential bundle
    #[arg(
        long,
        value_name = "PATH",
        env = "AWS_SNS_PLATFORM_APNS_PRIVATE_KEY_PATH"
    )]
    pub apns_certificate: Option<PathBuf>,

    /// Import password for the APNS bundle
    #[arg(
        long,
        default_value = "",
        hide_default_value = true,
        env = "AWS_SNS_PLATFORM_APNS_PRIVATE_KEY_PASSWORD"
    )]
    pub apns_password: String,

    /// FCM server key
    #[arg(long, env = "AWS_SNS_PLATFORM_FCM_SERVER_KEY")]
    pub fcm_server_key: Option<String>,

    /// GCM API key (deprecated, use --fcm-server-key)
    #[arg(long, env = "AWS_SNS_PLATFORM_GCM_API_KEY")]
    pub gcm_api_key: Option<String>,

    /// Extra attribute as KEY=VALUE (repeatable; wins over derived keys)
    #[arg(long = "attribute", value_name = "KEY=VALUE")]
    pub attributes: Vec<String>,

    /// Update the application's attributes if its name already exists
    #[arg(long, env = "AWS_SNS_UPDATE_IF_EXISTS")]
    pub update_if_exists: bool,

    /// Output format for the resulting ARN (default: arn)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Maximum number of listing pages to fetch
    #[arg(long, default_value_t = DEFAULT_MAX_LIST_PAGES)]
    pub max_pages: u32,

    /// Output format (default: table)
    #[arg(long, value_enum)]
    pub format: Option<ListFormat>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current config
    Show,
    /// Set config value
    Set(ConfigSetArgs),
}

#[derive(clap::Args)]
pub struct ConfigSetArgs {
    /// Key to set (region, endpoint-url)
    pub key: String,
    /// Value
    pub value: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_a_full_create_invocation() {
        let cli = Cli::try_parse_from([
            "snspush",
            "create",
            "--platform",
            "fcm",
            "--name",
            "android-app",
            "--fcm-server-key",
            "server-key",
            "--attribute",
            "Enabled=true",
            "--update-if-exists",
            "--access-key",
            "AKIA123",
            "--secret-access-key",
            "secret",
            "--region",
            "eu-central-1",
        ])
        .unwrap();

        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.platform, PlatformArg::Fcm);
                assert_eq!(args.name, "android-app");
                assert_eq!(args.fcm_server_key.as_deref(), Some("server-key"));
                assert_eq!(args.attributes, ["Enabled=true"]);
                assert!(args.update_if_exists);
                assert_eq!(args.connection.region.as_deref(), Some("eu-central-1"));
                assert!(!args.connection.aws_default_chain);
            }
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn platform_spellings_are_tolerant() {
        for spelling in ["APNS_SANDBOX", "apns-sandbox", "Apns-Sandbox"] {
            let cli = Cli::try_parse_from([
                "snspush", "create", "--platform", spelling, "--name", "ios-app",
            ])
            .unwrap();
            match cli.command {
                Commands::Create(args) => assert_eq!(args.platform, PlatformArg::ApnsSandbox),
                _ => panic!("expected create"),
            }
        }
    }

    #[test]
    fn default_chain_conflicts_with_static_keys() {
        let result = Cli::try_parse_from([
            "snspush",
            "create",
            "--platform",
            "fcm",
            "--name",
            "android-app",
            "--aws-default-chain",
            "--access-key",
            "AKIA123",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn update_if_exists_defaults_off() {
        let cli = Cli::try_parse_from([
            "snspush", "create", "--platform", "gcm", "--name", "android-app",
        ])
        .unwrap();
        match cli.command {
            Commands::Create(args) => assert!(!args.update_if_exists),
            _ => panic!("expected create"),
        }
    }

    #[test]
    fn list_takes_a_page_cap() {
        let cli = Cli::try_parse_from(["snspush", "list", "--max-pages", "5"]).unwrap();
        match cli.command {
            Commands::List(args) => assert_eq!(args.max_pages, 5),
            _ => panic!("expected list"),
        }
    }
}
