use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use snspush_aws::ConnectionSource;

use crate::cli::ConnectionArgs;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

pub type ConfigFile = HashMap<String, ProfileConfig>;

fn config_dir() -> Result<PathBuf> {
    let dir = dirs::home_dir()
        .context("Cannot determine home directory")?
        .join(".snspush");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn load_all() -> Result<ConfigFile> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(ConfigFile::new());
    }
    let content = fs::read_to_string(&path)?;
    let cfg: ConfigFile = toml::from_str(&content)?;
    Ok(cfg)
}

pub fn load_profile(profile: &str) -> Result<ProfileConfig> {
    let mut all = load_all()?;
    Ok(all.remove(profile).unwrap_or_default())
}

pub fn save_profile(profile: &str, config: &ProfileConfig) -> Result<()> {
    let mut all = load_all()?;
    all.insert(
        profile.to_string(),
        ProfileConfig {
            region: config.region.clone(),
            endpoint_url: config.endpoint_url.clone(),
        },
    );
    let content = toml::to_string_pretty(&all)?;
    fs::write(config_path()?, content)?;
    Ok(())
}

/// Resolves the connection source for a command.
///
/// Region comes from, in order: flag / AWS_SNS_REGION (both via clap), the
/// generic AWS_REGION variable, then the config profile. The endpoint comes
/// from the flag or the profile. Static keys come from flags / AWS_SNS_*
/// env, falling back to the standard AWS_ACCESS_KEY_ID /
/// AWS_SECRET_ACCESS_KEY pair. `--aws-default-chain` skips static keys
/// entirely and defers to the SDK chain.
pub fn resolve_connection(args: &ConnectionArgs, profile: &str) -> Result<ConnectionSource> {
    let cfg = load_profile(profile)?;
    resolve_with(args, cfg, |name| std::env::var(name).ok())
}

fn resolve_with<F>(args: &ConnectionArgs, cfg: ProfileConfig, env: F) -> Result<ConnectionSource>
where
    F: Fn(&str) -> Option<String>,
{
    let region = args
        .region
        .clone()
        .or_else(|| env("AWS_REGION"))
        .or(cfg.region);
    let endpoint_url = args.endpoint_url.clone().or(cfg.endpoint_url);

    if args.aws_default_chain {
        return Ok(ConnectionSource::Ambient {
            region,
            endpoint_url,
        });
    }

    let access_key = args.access_key.clone().or_else(|| env("AWS_ACCESS_KEY_ID"));
    let secret_key = args
        .secret_access_key
        .clone()
        .or_else(|| env("AWS_SECRET_ACCESS_KEY"));

    match (access_key, secret_key, region) {
        (Some(access_key), Some(secret_key), Some(region)) => Ok(ConnectionSource::Static {
            access_key,
            secret_key,
            region,
            endpoint_url,
        }),
        (access_key, secret_key, region) => {
            let mut missing = Vec::new();
            if access_key.is_none() {
                missing.push("--access-key");
            }
            if secret_key.is_none() {
                missing.push("--secret-access-key");
            }
            if region.is_none() {
                missing.push("--region");
            }
            anyhow::bail!(
                "No AWS connection configured (missing {}). Pass the flags, set AWS_SNS_* env vars, \
                 or use --aws-default-chain for the SDK credential chain",
                missing.join(", ")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ConnectionArgs {
        ConnectionArgs {
            access_key: None,
            secret_access_key: None,
            region: None,
            endpoint_url: None,
            aws_default_chain: false,
        }
    }

    fn keyed_args() -> ConnectionArgs {
        ConnectionArgs {
            access_key: Some("AKIA123".into()),
            secret_access_key: Some("secret".into()),
            ..args()
        }
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn static_region(source: ConnectionSource) -> String {
        match source {
            ConnectionSource::Static { region, .. } => region,
            other => panic!("expected a static source, got {other:?}"),
        }
    }

    #[test]
    fn region_flag_beats_environment_and_profile() {
        let cfg = ProfileConfig {
            region: Some("profile-region".into()),
            endpoint_url: None,
        };
        let args = ConnectionArgs {
            region: Some("flag-region".into()),
            ..keyed_args()
        };

        let source = resolve_with(&args, cfg, |name| {
            (name == "AWS_REGION").then(|| "env-region".to_string())
        })
        .unwrap();
        assert_eq!(static_region(source), "flag-region");
    }

    #[test]
    fn region_env_beats_the_profile() {
        let cfg = ProfileConfig {
            region: Some("profile-region".into()),
            endpoint_url: None,
        };

        let source = resolve_with(&keyed_args(), cfg, |name| {
            (name == "AWS_REGION").then(|| "env-region".to_string())
        })
        .unwrap();
        assert_eq!(static_region(source), "env-region");
    }

    #[test]
    fn profile_region_is_the_last_resort() {
        let cfg = ProfileConfig {
            region: Some("profile-region".into()),
            endpoint_url: None,
        };

        let source = resolve_with(&keyed_args(), cfg, no_env).unwrap();
        assert_eq!(static_region(source), "profile-region");
    }

    #[test]
    fn standard_aws_env_keys_are_honoured() {
        let source = resolve_with(&args(), ProfileConfig::default(), |name| match name {
            "AWS_ACCESS_KEY_ID" => Some("AKIA123".to_string()),
            "AWS_SECRET_ACCESS_KEY" => Some("secret".to_string()),
            "AWS_REGION" => Some("us-east-1".to_string()),
            _ => None,
        })
        .unwrap();

        match source {
            ConnectionSource::Static {
                access_key, region, ..
            } => {
                assert_eq!(access_key, "AKIA123");
                assert_eq!(region, "us-east-1");
            }
            other => panic!("expected a static source, got {other:?}"),
        }
    }

    #[test]
    fn missing_connection_names_every_missing_flag() {
        let err = resolve_with(&args(), ProfileConfig::default(), no_env).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("--access-key"));
        assert!(message.contains("--secret-access-key"));
        assert!(message.contains("--region"));
        assert!(message.contains("--aws-default-chain"));
    }

    #[test]
    fn only_absent_connection_fields_are_reported() {
        let args = ConnectionArgs {
            secret_access_key: Some("secret".into()),
            ..args()
        };

        let err = resolve_with(&args, ProfileConfig::default(), no_env).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("--access-key"));
        assert!(message.contains("--region"));
        assert!(!message.contains("--secret-access-key"));
    }

    #[test]
    fn default_chain_carries_region_and_endpoint() {
        let cfg = ProfileConfig {
            region: Some("profile-region".into()),
            endpoint_url: Some("http://127.0.0.1:4566".into()),
        };
        let args = ConnectionArgs {
            aws_default_chain: true,
            ..args()
        };

        let source = resolve_with(&args, cfg, no_env).unwrap();
        match source {
            ConnectionSource::Ambient {
                region,
                endpoint_url,
            } => {
                assert_eq!(region.as_deref(), Some("profile-region"));
                assert_eq!(endpoint_url.as_deref(), Some("http://127.0.0.1:4566"));
            }
            other => panic!("expected an ambient source, got {other:?}"),
        }
    }
}
