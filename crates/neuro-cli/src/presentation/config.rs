use neuro_sdk::Config;
use owo_colors::OwoColorize;

/// `neuro config show`
pub fn format_config(config: &Config, color: bool) -> String {
    let header = "User Configuration:";
    let header = if color {
        header.bold().to_string()
    } else {
        header.to_string()
    };

    let mut lines = vec![
        header,
        format!("  User Name: {}", config.auth.username),
        format!("  API URL: {}", config.auth.api_url),
        format!("  Docker Registry URL: {}", config.auth.registry_url),
        format!("  Color: {}", config.display.color.as_str()),
    ];
    if let Some(format) = &config.display.ps_format {
        lines.push(format!("  Jobs Format: {}", format));
    }
    lines.join("\n")
}
