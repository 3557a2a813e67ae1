use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration:\n");
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let path = Config::config_file();
            if !path.exists() {
                warning(format!(
                    "No configuration file found at {}. Run `clubduty init` first.",
                    path.display()
                ));
                return Ok(());
            }

            let missing = Config::missing_fields();
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning("Configuration file is missing the following fields (defaults apply):");
                for field in missing {
                    println!("  • {}", field);
                }
            }
        }
    }

    Ok(())
}
