use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AgentName;
use crate::domain::models::Language;
use crate::domain::services::StateStore;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .arg_required_else_help(true)
        .subcommand(Command::new("create").about("Creates a default config file."));
}

fn subcommand_reset() -> Command {
    return Command::new("reset").about("Deletes the saved session and starts fresh.");
}

pub fn build() -> Command {
    return Command::new("polyglot")
        .about("Terminal vocabulary trainer driven by a remote training agent.")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_reset())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .help(format!(
                    "Path to configuration file. [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(ConfigKey::Agent.to_string())
                .short('a')
                .long(ConfigKey::Agent.to_string())
                .env("POLYGLOT_AGENT")
                .help(format!(
                    "The agent implementation used to drive training. [default: {}]",
                    Config::default(ConfigKey::Agent)
                ))
                .value_parser(PossibleValuesParser::new(AgentName::VARIANTS.to_vec()))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(ConfigKey::AgentURL.to_string())
                .long(ConfigKey::AgentURL.to_string())
                .env("POLYGLOT_AGENT_URL")
                .help(format!(
                    "HTTP endpoint of the remote training agent. [default: {}]",
                    Config::default(ConfigKey::AgentURL)
                ))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(ConfigKey::AgentTimeout.to_string())
                .long(ConfigKey::AgentTimeout.to_string())
                .help(format!(
                    "Request timeout against the training agent in milliseconds. [default: {}]",
                    Config::default(ConfigKey::AgentTimeout)
                ))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(ConfigKey::Language.to_string())
                .short('l')
                .long(ConfigKey::Language.to_string())
                .env("POLYGLOT_LANGUAGE")
                .help(format!(
                    "Target language to train. [default: {}]",
                    Config::default(ConfigKey::Language)
                ))
                .value_parser(PossibleValuesParser::new(Language::VARIANTS.to_vec()))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(ConfigKey::StateFile.to_string())
                .long(ConfigKey::StateFile.to_string())
                .help("Where the saved session lives.")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .short('u')
                .long(ConfigKey::Username.to_string())
                .env("POLYGLOT_USERNAME")
                .help("Your name shown on your transcript bubbles.")
                .action(ArgAction::Set),
        );
}

/// Returns false when a subcommand handled the invocation and the UI should
/// not start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut cmd = build();
                print_completions(completions, &mut cmd);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => {
            if let Some(("create", _)) = subcmd_matches.subcommand() {
                create_config_file().await?;
            }
            return Ok(false);
        }
        Some(("reset", _)) => {
            Config::load(build(), vec![&matches]).await?;
            StateStore::default().reset()?;
            println!("Cleared the saved session.");
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
            return Ok(true);
        }
    }
}
