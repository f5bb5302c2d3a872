use clap::{Args, Subcommand};
use std::path::PathBuf;

use foodgram::config::Config;

use super::OutputFormat;

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the config file path
    Path,
}

impl ConfigCommand {
    pub fn run(
        &self,
        config: &Config,
        cli_config_path: Option<PathBuf>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");

                        if let Some(path) = &config.config_file {
                            println!("Config file: {}", path.display());
                        } else {
                            println!(
                                "Config file: {} (not found)",
                                cli_config_path
                                    .unwrap_or_else(Config::default_config_path)
                                    .display()
                            );
                        }
                        println!();

                        println!("api_url: {}", config.api_url.value);
                        println!("  source: {}", config.api_url.source);
                        println!();

                        let token = if config.token.value.is_some() {
                            "(set)"
                        } else {
                            "(not set)"
                        };
                        println!("token: {}", token);
                        println!("  source: {}", config.token.source);
                        println!();

                        println!("page_size: {}", config.page_size.value);
                        println!("  source: {}", config.page_size.source);
                        println!();

                        println!(
                            "request_timeout_secs: {}",
                            config.request_timeout_secs.value
                        );
                        println!("  source: {}", config.request_timeout_secs.source);
                    }
                }
                Ok(())
            }
            ConfigSubcommand::Path => {
                let path = cli_config_path.unwrap_or_else(Config::default_config_path);
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}
