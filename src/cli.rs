use crate::domain::label::{capitalize, prettify_command};
use crate::domain::remote::RemoteApi;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "remocon")]
#[command(author, version, about = "Remote control for a device exposing a command API over HTTP")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the remote control server
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Config file to use instead of ~/.config/remocon/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Interactive remote (default)
    Tui,

    /// Print the command catalog, grouped
    #[command(visible_alias = "ls")]
    List,

    /// Send one or more commands in order
    Send {
        /// Command names, e.g. powerOn menuUp
        #[arg(required = true)]
        commands: Vec<String>,
    },

    /// Print the last power command
    Status,
}

pub async fn list(api: &dyn RemoteApi, out: &mut impl Write) -> Result<()> {
    let catalog = api.fetch_commands().await?;

    let mismatches = catalog.mismatches();
    for name in &mismatches.unknown_in_groups {
        tracing::warn!("Grouped command {name} is not in the catalog");
    }
    for name in &mismatches.ungrouped {
        tracing::warn!("Command {name} is not in any group");
    }

    for (group, members) in &catalog.groups {
        writeln!(out, "{}", capitalize(group))?;
        for name in members {
            writeln!(out, "  {:<24} {}", name, prettify_command(name))?;
        }
    }
    Ok(())
}

/// Stops at the first failure.
pub async fn send(api: &dyn RemoteApi, commands: &[String], out: &mut impl Write) -> Result<()> {
    for name in commands {
        api.send_command(name)
            .await
            .map_err(|e| anyhow::anyhow!("Error sending command {name}: {e}"))?;
        tracing::info!("Sent {name}");
        writeln!(out, "sent {name}")?;
    }
    Ok(())
}

pub async fn status(api: &dyn RemoteApi, out: &mut impl Write) -> Result<()> {
    let status = api.fetch_status().await?;
    let text = match status.last_power_command {
        Some(true) => "on",
        Some(false) => "off",
        None => "unknown",
    };
    writeln!(out, "power: {text}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{CommandCatalog, DeviceStatus};
    use crate::domain::remote::{ApiError, MockRemoteApi};
    use mockall::Sequence;

    #[test]
    fn test_parse_send() {
        let cli = Cli::try_parse_from(["remocon", "--url", "http://tv:8080", "send", "powerOn", "menuOk"])
            .unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://tv:8080"));
        assert_eq!(
            cli.command,
            Some(Commands::Send {
                commands: vec!["powerOn".into(), "menuOk".into()]
            })
        );
    }

    #[test]
    fn test_parse_defaults_to_tui() {
        let cli = Cli::try_parse_from(["remocon"]).unwrap();
        assert!(cli.command.is_none());
        assert!(Cli::try_parse_from(["remocon", "send"]).is_err());
    }

    #[tokio::test]
    async fn test_list_prints_groups_in_order() {
        let mut mock = MockRemoteApi::new();
        mock.expect_fetch_commands().returning(|| {
            Ok(CommandCatalog {
                commands: vec!["volumeUp".into(), "inputSVideo".into()],
                groups: vec![
                    ("volume".into(), vec!["volumeUp".into()]),
                    ("input".into(), vec!["inputSVideo".into()]),
                ],
            })
        });

        let mut out = Vec::new();
        list(&mock, &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        let volume = text.find("Volume").unwrap();
        let input = text.find("Input\n").unwrap();
        assert!(volume < input);
        assert!(text.contains("Input S Video"));
    }

    #[tokio::test]
    async fn test_send_in_order_and_stops_on_error() {
        let mut seq = Sequence::new();
        let mut mock = MockRemoteApi::new();
        mock.expect_send_command()
            .withf(|name| name == "powerOn")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mock.expect_send_command()
            .withf(|name| name == "bogus")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(ApiError::Http {
                    status: 404,
                    reason: "Not Found".into(),
                })
            });

        let commands = vec!["powerOn".to_string(), "bogus".into(), "menuOk".into()];
        let mut out = Vec::new();
        let err = send(&mock, &commands, &mut out).await.unwrap_err();

        assert!(err.to_string().contains("bogus"));
        assert_eq!(String::from_utf8(out).unwrap(), "sent powerOn\n");
    }

    #[tokio::test]
    async fn test_status_unknown() {
        let mut mock = MockRemoteApi::new();
        mock.expect_fetch_status()
            .returning(|| Ok(DeviceStatus::default()));
        let mut out = Vec::new();
        status(&mock, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "power: unknown\n");
    }
}
