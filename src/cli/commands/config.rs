use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigError, Paths, validate_config};

pub async fn handle_init(force: bool, custom_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config_path = custom_path.unwrap_or_else(Paths::config_file);

    if config_path.exists() && !force && !confirm_overwrite(&config_path)? {
        println!("Aborted.");
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&config_path, default_config_toml())?;
    set_file_permissions(&config_path);

    println!("Config created at {}", config_path.display());
    Ok(())
}

pub async fn handle_show(config: &Config) -> anyhow::Result<()> {
    println!("# {}", Paths::config_file().display());
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

pub async fn handle_validate(loaded: Result<Config, ConfigError>) -> anyhow::Result<()> {
    let path = Paths::config_file();
    let config = loaded?;
    let result = validate_config(&config);

    for warning in &result.warnings {
        println!("warning: {}: {}", warning.field, warning.message);
    }
    for error in &result.errors {
        println!("error: {}: {}", error.field, error.message);
        if let Some(suggestion) = &error.suggestion {
            println!("  hint: {suggestion}");
        }
    }

    if !result.is_valid() {
        anyhow::bail!(
            "{} has {} error(s)",
            path.display(),
            result.errors.len()
        );
    }
    println!("Configuration valid: {}", path.display());
    Ok(())
}

fn confirm_overwrite(path: &Path) -> anyhow::Result<bool> {
    print!(
        "Config already exists at {}. Overwrite? [y/N] ",
        path.display()
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let response = input.trim();
    Ok(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes"))
}

fn set_file_permissions(path: &Path) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Err(err) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
            eprintln!("Warning: failed to set config file permissions: {err}");
        }
    }
}

fn default_config_toml() -> String {
    r#"# errnotify configuration file

[logging]
# Log level: trace, debug, info, warn, error
log_level = "info"
# Emit JSON log lines
json = false
# Also append logs to the state directory
log_to_file = false

[notifications]
# Delay before a toast closes itself (milliseconds)
auto_close_ms = 3000
# Stack lines containing any of these substrings are not logged
stack_filters = ["node_modules"]
# Message shown for HTTP errors while offline
offline_message = "No Internet Connection"
# Close toasts for unrecognized HTTP statuses too
auto_close_unrecognized_status = false

[theme]
dark = false
"#
    .to_string()
}
