//! console configuration and alias file loading
//!
//! The format is line oriented: `key = value` pairs, `#` comments, and
//! repeatable `[command]` sections that describe commands declaratively
//! (name, description, aliases, parameters, usage).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// One `[command]` section from a console config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandConfig {
    pub name: String,
    pub description: String,
    pub aliases: Vec<String>,
    pub parameters: Vec<String>,
    pub usage: String,
}

/// Console appearance and behavior settings.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub prompt: String,
    pub welcome_msg: String,
    pub exit_msg: String,
    pub unknown_msg: String,

    pub error_color: String,
    pub success_color: String,
    pub warning_color: String,
    pub info_color: String,

    pub colors_enabled: bool,
    pub show_help_on_unknown: bool,
    pub clear_screen_on_start: bool,
    pub history_size: usize,
    pub press_to_exit: bool,

    pub commands: Vec<CommandConfig>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            prompt: "> ".to_string(),
            welcome_msg: "Console".to_string(),
            exit_msg: "Exit".to_string(),
            unknown_msg: "Unknown command".to_string(),
            error_color: "red".to_string(),
            success_color: "green".to_string(),
            warning_color: "yellow".to_string(),
            info_color: "blue".to_string(),
            colors_enabled: true,
            show_help_on_unknown: true,
            clear_screen_on_start: false,
            history_size: 100,
            press_to_exit: false,
            commands: Vec::new(),
        }
    }
}

/// Loads a console config file; unknown keys are ignored.
pub fn load_from_file(path: &Path) -> io::Result<ConsoleConfig> {
    let text = fs::read_to_string(path)?;
    Ok(parse_config(&text))
}

/// Loads an alias file of `alias = command` lines.
pub fn load_aliases(path: &Path) -> io::Result<HashMap<String, String>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_aliases(&text))
}

/// Writes a config back out in the same format `load_from_file` reads.
pub fn save_to_file(config: &ConsoleConfig, path: &Path) -> io::Result<()> {
    let mut out = String::from("# Console Configuration\n");
    out.push_str(&format!("prompt = {}\n", config.prompt));
    out.push_str(&format!("welcome_msg = {}\n", config.welcome_msg));
    out.push_str(&format!("exit_msg = {}\n", config.exit_msg));
    out.push_str(&format!("unknown_cmd_msg = {}\n", config.unknown_msg));
    out.push_str(&format!("error_color = {}\n", config.error_color));
    out.push_str(&format!("success_color = {}\n", config.success_color));
    out.push_str(&format!("warning_color = {}\n", config.warning_color));
    out.push_str(&format!("info_color = {}\n", config.info_color));
    out.push_str(&format!("enable_colors = {}\n", config.colors_enabled));
    out.push_str(&format!(
        "show_help_on_unknown = {}\n",
        config.show_help_on_unknown
    ));
    out.push_str(&format!(
        "clear_screen_on_start = {}\n",
        config.clear_screen_on_start
    ));
    out.push_str(&format!("history_size = {}\n", config.history_size));
    out.push_str(&format!("press_to_exit = {}\n\n", config.press_to_exit));

    for cmd in &config.commands {
        out.push_str("[command]\n");
        out.push_str(&format!("name = {}\n", cmd.name));
        out.push_str(&format!("description = {}\n", cmd.description));
        if !cmd.aliases.is_empty() {
            out.push_str(&format!("aliases = {}\n", cmd.aliases.join(",")));
        }
        if !cmd.parameters.is_empty() {
            out.push_str(&format!("parameters = {}\n", cmd.parameters.join(",")));
        }
        if !cmd.usage.is_empty() {
            out.push_str(&format!("usage = {}\n", cmd.usage));
        }
        out.push('\n');
    }

    fs::write(path, out)
}

fn parse_config(text: &str) -> ConsoleConfig {
    let mut config = ConsoleConfig::default();
    let mut command = CommandConfig::default();
    let mut in_command_section = false;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            if in_command_section && !command.name.is_empty() {
                config.commands.push(std::mem::take(&mut command));
            }
            let section = &line[1..line.len() - 1];
            in_command_section = section == "command";
            continue;
        }

        let parts = split(line, '=');
        if parts.len() < 2 {
            continue;
        }
        let key = parts[0].as_str();
        let value = parts[1].as_str();

        if in_command_section {
            match key {
                "name" => command.name = value.to_string(),
                "description" => command.description = value.to_string(),
                "aliases" => command.aliases = split(value, ','),
                "parameters" => command.parameters = split(value, ','),
                "usage" => command.usage = value.to_string(),
                _ => {}
            }
        } else {
            match key {
                "prompt" => config.prompt = value.to_string(),
                "welcome_msg" => config.welcome_msg = value.to_string(),
                "exit_msg" => config.exit_msg = value.to_string(),
                "unknown_cmd_msg" => config.unknown_msg = value.to_string(),
                "error_color" => config.error_color = value.to_string(),
                "success_color" => config.success_color = value.to_string(),
                "warning_color" => config.warning_color = value.to_string(),
                "info_color" => config.info_color = value.to_string(),
                "enable_colors" => config.colors_enabled = parse_bool(value),
                "show_help_on_unknown" => config.show_help_on_unknown = parse_bool(value),
                "clear_screen_on_start" => config.clear_screen_on_start = parse_bool(value),
                "history_size" => {
                    config.history_size = value.parse().unwrap_or(config.history_size)
                }
                "press_to_exit" => config.press_to_exit = parse_bool(value),
                _ => {}
            }
        }
    }

    // a section still open at end-of-file is a finished command
    if in_command_section && !command.name.is_empty() {
        config.commands.push(command);
    }

    config
}

fn parse_aliases(text: &str) -> HashMap<String, String> {
    let mut aliases = HashMap::new();
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts = split(line, '=');
        if parts.len() == 2 {
            aliases.insert(parts[0].clone(), parts[1].clone());
        }
    }
    aliases
}

/// splits on `delimiter`, trimming tokens and dropping empty ones
fn split(s: &str, delimiter: char) -> Vec<String> {
    s.split(delimiter)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "1" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn parse_bool_accepts_the_truthy_set() {
        for s in ["true", "TRUE", "1", "yes", "Yes", "on", "ON"] {
            assert!(parse_bool(s), "{} should parse as true", s);
        }
        for s in ["false", "0", "no", "off", "maybe", ""] {
            assert!(!parse_bool(s), "{} should parse as false", s);
        }
    }

    #[test]
    fn basic_keys_override_defaults() {
        let file = write_temp(
            "# comment\n\
             prompt = graph> \n\
             welcome_msg = Graph Console\n\
             enable_colors = false\n\
             history_size = 25\n",
        );
        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.prompt, "graph>");
        assert_eq!(config.welcome_msg, "Graph Console");
        assert!(!config.colors_enabled);
        assert_eq!(config.history_size, 25);
        // untouched keys keep their defaults
        assert_eq!(config.exit_msg, "Exit");
        assert!(config.show_help_on_unknown);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let file = write_temp("justakey\n= novalue\nhistory_size = notanumber\n");
        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.history_size, 100);
    }

    #[test]
    fn command_sections_accumulate() {
        let file = write_temp(
            "prompt = >\n\
             \n\
             [command]\n\
             name = create\n\
             description = Create a graph\n\
             aliases = new, mk\n\
             parameters = vertices, edge_probability\n\
             usage = create <n>\n\
             \n\
             [command]\n\
             name = compare\n\
             description = Compare traversals\n",
        );
        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.commands.len(), 2);

        let create = &config.commands[0];
        assert_eq!(create.name, "create");
        assert_eq!(create.aliases, vec!["new", "mk"]);
        assert_eq!(create.parameters, vec!["vertices", "edge_probability"]);
        assert_eq!(create.usage, "create <n>");

        assert_eq!(config.commands[1].name, "compare");
    }

    #[test]
    fn section_open_at_eof_still_yields_its_command() {
        // no trailing blank line or section header after the last command
        let file = write_temp("[command]\nname = smile\ndescription = ascii art");
        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.commands.len(), 1);
        assert_eq!(config.commands[0].name, "smile");
        assert_eq!(config.commands[0].description, "ascii art");
    }

    #[test]
    fn nameless_section_is_dropped() {
        let file = write_temp("[command]\ndescription = orphan\n\n[command]\nname = ok\n");
        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.commands.len(), 1);
        assert_eq!(config.commands[0].name, "ok");
    }

    #[test]
    fn aliases_parse_and_skip_noise() {
        let file = write_temp(
            "# graph console aliases\n\
             c = create\n\
             t = traversal\n\
             broken line without equals\n\
             too = many = parts\n",
        );
        let aliases = load_aliases(file.path()).unwrap();
        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases["c"], "create");
        assert_eq!(aliases["t"], "traversal");
    }

    #[test]
    fn saved_config_loads_back() {
        let mut config = ConsoleConfig::default();
        config.prompt = "g>".to_string();
        config.colors_enabled = false;
        config.commands.push(CommandConfig {
            name: "create".to_string(),
            description: "Create a graph".to_string(),
            aliases: vec!["new".to_string()],
            parameters: vec!["vertices".to_string()],
            usage: "create <n>".to_string(),
        });

        let file = NamedTempFile::new().unwrap();
        save_to_file(&config, file.path()).unwrap();
        let loaded = load_from_file(file.path()).unwrap();

        assert_eq!(loaded.prompt, config.prompt);
        assert_eq!(loaded.colors_enabled, config.colors_enabled);
        assert_eq!(loaded.commands, config.commands);
    }

    #[test]
    fn missing_files_error() {
        assert!(load_from_file(Path::new("no/such/file.conf")).is_err());
        assert!(load_aliases(Path::new("no/such/aliases.conf")).is_err());
    }
}
