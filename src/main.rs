use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use graphbench::config::{self, ConsoleConfig};
use graphbench::console::commands::{self, GraphSession};
use graphbench::console::Console;

fn main() {
    let mut console: Console<GraphSession> = Console::new(load_console_config());
    console.extend_aliases(load_alias_map());
    commands::register(&mut console);

    let mut session = GraphSession::new();
    console.run(&mut session);
}

/// candidate locations for a config file, most specific first
fn config_search_paths(filename: &str) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = [
        "./resources/config_files/",
        "../resources/config_files/",
        "../../resources/config_files/",
        "config/",
        "../config/",
        "./",
    ]
    .iter()
    .map(|dir| PathBuf::from(dir).join(filename))
    .collect();

    if let Some(home) = env::var_os("HOME") {
        paths.push(
            PathBuf::from(home)
                .join(".config/graph_console")
                .join(filename),
        );
    }
    paths
}

fn load_console_config() -> ConsoleConfig {
    for path in config_search_paths("graph_console.conf") {
        if let Ok(config) = config::load_from_file(&path) {
            return config;
        }
    }
    ConsoleConfig::default()
}

fn load_alias_map() -> HashMap<String, String> {
    for path in config_search_paths("aliases.conf") {
        if let Ok(aliases) = config::load_aliases(&path) {
            return aliases;
        }
    }
    HashMap::new()
}
