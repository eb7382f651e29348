//! interactive command console
//!
//! A small line-driven shell: commands are registered with a handler over a
//! caller-supplied context, aliases map short names onto commands, and the
//! `help`/`exit`/`clear`/`history` built-ins are handled by the console
//! itself before dispatch.

pub mod commands;

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::io::{self, BufRead, Write};

use crate::config::ConsoleConfig;

type Handler<C> = Box<dyn Fn(&mut C, &[String])>;

struct CommandInfo<C> {
    /// `None` marks a console built-in, dispatched before the registry
    handler: Option<Handler<C>>,
    description: String,
    parameters: Vec<String>,
    usage: String,
}

enum ColorKind {
    Error,
    Success,
    Warning,
    Info,
}

pub struct Console<C> {
    config: ConsoleConfig,
    commands: BTreeMap<String, CommandInfo<C>>,
    aliases: HashMap<String, String>,
    history: VecDeque<String>,
    running: bool,
}

impl<C> Console<C> {
    pub fn new(config: ConsoleConfig) -> Console<C> {
        let mut console = Console {
            config,
            commands: BTreeMap::new(),
            aliases: HashMap::new(),
            history: VecDeque::new(),
            running: false,
        };
        console.register_builtin("help", "Show help for commands", &["command"], "help [command]");
        console.register_builtin("exit", "Exit the application", &[], "");
        console.register_builtin("clear", "Clear console screen", &[], "");
        console.register_builtin("history", "Show history of commands", &[], "");
        console
    }

    pub fn register_command(
        &mut self,
        name: &str,
        description: &str,
        parameters: &[&str],
        usage: &str,
        handler: impl Fn(&mut C, &[String]) + 'static,
    ) {
        let usage = if usage.is_empty() {
            build_usage(name, parameters)
        } else {
            usage.to_string()
        };
        self.commands.insert(
            name.to_string(),
            CommandInfo {
                handler: Some(Box::new(handler)),
                description: description.to_string(),
                parameters: parameters.iter().map(|p| p.to_string()).collect(),
                usage,
            },
        );
    }

    fn register_builtin(&mut self, name: &str, description: &str, parameters: &[&str], usage: &str) {
        let usage = if usage.is_empty() && !parameters.is_empty() {
            build_usage(name, parameters)
        } else {
            usage.to_string()
        };
        self.commands.insert(
            name.to_string(),
            CommandInfo {
                handler: None,
                description: description.to_string(),
                parameters: parameters.iter().map(|p| p.to_string()).collect(),
                usage,
            },
        );
    }

    pub fn register_alias(&mut self, alias: &str, command: &str) {
        self.aliases.insert(alias.to_string(), command.to_string());
    }

    pub fn extend_aliases(&mut self, aliases: HashMap<String, String>) {
        self.aliases.extend(aliases);
    }

    /// Runs the read-dispatch loop until `exit` or end of input.
    pub fn run(&mut self, ctx: &mut C) {
        self.apply_command_configs();
        self.running = true;

        if self.config.clear_screen_on_start {
            self.clear_screen();
        }
        println!(
            "{}{}{}",
            self.color(ColorKind::Info),
            self.config.welcome_msg,
            self.reset()
        );
        println!("Type 'help' for available commands");

        let stdin = io::stdin();
        let mut input = String::new();
        while self.running {
            print!("{}{}{}", self.color(ColorKind::Info), self.config.prompt, self.reset());
            let _ = io::stdout().flush();

            input.clear();
            match stdin.lock().read_line(&mut input) {
                Ok(0) | Err(_) => {
                    self.stop();
                    break;
                }
                Ok(_) => {}
            }

            let line = input.trim();
            if line.is_empty() {
                continue;
            }
            self.add_to_history(line);
            self.handle_line(ctx, line);
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        println!(
            "{}{}{}",
            self.color(ColorKind::Success),
            self.config.exit_msg,
            self.reset()
        );
        if self.config.press_to_exit {
            print!("Press Enter to continue...");
            let _ = io::stdout().flush();
            let mut scratch = String::new();
            let _ = io::stdin().lock().read_line(&mut scratch);
        }
    }

    /// Dispatches one input line: built-ins first, then alias resolution,
    /// then the command registry.
    pub fn handle_line(&mut self, ctx: &mut C, input: &str) {
        let tokens = tokenize(input);
        let Some(command) = tokens.first() else {
            return;
        };

        if self.run_builtin(command, &tokens) {
            return;
        }

        let resolved = self
            .aliases
            .get(command.as_str())
            .cloned()
            .unwrap_or_else(|| command.clone());

        // an alias may point at a built-in
        if resolved != *command && self.run_builtin(&resolved, &tokens) {
            return;
        }

        if let Some(info) = self.commands.get(&resolved) {
            if let Some(handler) = &info.handler {
                handler(ctx, &tokens[1..]);
            }
        } else {
            println!(
                "{}{}: {}{}",
                self.color(ColorKind::Error),
                self.config.unknown_msg,
                resolved,
                self.reset()
            );
            if self.config.show_help_on_unknown {
                println!("Type 'help' for available commands");
            }
        }
    }

    fn run_builtin(&mut self, name: &str, tokens: &[String]) -> bool {
        match name {
            "exit" | "quit" => self.stop(),
            "help" => {
                if let Some(topic) = tokens.get(1) {
                    self.show_command_help(topic);
                } else {
                    self.print_help();
                }
            }
            "clear" => self.clear_screen(),
            "history" => self.show_history(),
            _ => return false,
        }
        true
    }

    pub fn print_help(&self) {
        println!(
            "{}Available commands:{}",
            self.color(ColorKind::Info),
            self.reset()
        );
        let name_width = self
            .commands
            .keys()
            .map(|name| name.len())
            .max()
            .unwrap_or(0)
            .max(12);

        for (name, info) in &self.commands {
            print!(
                "  {}{:<width$}{} - {}",
                self.color(ColorKind::Success),
                name,
                self.reset(),
                info.description,
                width = name_width
            );
            if !info.usage.is_empty() {
                print!(
                    " {}({}){}",
                    self.color(ColorKind::Warning),
                    info.usage,
                    self.reset()
                );
            }
            println!();
        }
    }

    pub fn show_command_help(&self, name: &str) {
        let resolved = self.aliases.get(name).map(String::as_str).unwrap_or(name);

        if let Some(info) = self.commands.get(resolved) {
            println!("{}Command: {}{}", self.color(ColorKind::Info), resolved, self.reset());
            println!("  Description: {}", info.description);
            println!(
                "  Usage: {}{}{}",
                self.color(ColorKind::Success),
                info.usage,
                self.reset()
            );
            if !info.parameters.is_empty() {
                println!("  Parameters:");
                for param in &info.parameters {
                    println!("    - {}", param);
                }
            }
        } else {
            println!(
                "{}Unknown command: {}{}",
                self.color(ColorKind::Error),
                name,
                self.reset()
            );
        }
    }

    pub fn show_history(&self) {
        println!(
            "{}Command history (last {} commands):{}",
            self.color(ColorKind::Info),
            self.history.len(),
            self.reset()
        );
        for (i, entry) in self.history.iter().enumerate() {
            println!("  {}: {}", i + 1, entry);
        }
    }

    pub fn clear_screen(&self) {
        print!("\x1b[2J\x1b[1;1H");
        let _ = io::stdout().flush();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn add_to_history(&mut self, command: &str) {
        self.history.push_front(command.to_string());
        self.history.truncate(self.config.history_size);
    }

    /// Applies `[command]` sections from the config: aliases register as
    /// aliases, non-empty fields override the registered command's metadata.
    fn apply_command_configs(&mut self) {
        for section in self.config.commands.clone() {
            for alias in &section.aliases {
                self.aliases.insert(alias.clone(), section.name.clone());
            }
            if let Some(info) = self.commands.get_mut(&section.name) {
                if !section.description.is_empty() {
                    info.description = section.description;
                }
                if !section.parameters.is_empty() {
                    info.parameters = section.parameters;
                }
                if !section.usage.is_empty() {
                    info.usage = section.usage;
                }
            }
        }
    }

    fn color(&self, kind: ColorKind) -> &'static str {
        if !self.config.colors_enabled {
            return "";
        }
        let name = match kind {
            ColorKind::Error => &self.config.error_color,
            ColorKind::Success => &self.config.success_color,
            ColorKind::Warning => &self.config.warning_color,
            ColorKind::Info => &self.config.info_color,
        };
        ansi_code(name)
    }

    fn reset(&self) -> &'static str {
        if self.config.colors_enabled {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

fn tokenize(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

fn build_usage(name: &str, parameters: &[&str]) -> String {
    let mut usage = name.to_string();
    for param in parameters {
        usage.push_str(&format!(" <{}>", param));
    }
    usage
}

fn ansi_code(name: &str) -> &'static str {
    match name {
        "black" => "\x1b[30m",
        "red" => "\x1b[31m",
        "green" => "\x1b[32m",
        "yellow" => "\x1b[33m",
        "blue" => "\x1b[34m",
        "magenta" => "\x1b[35m",
        "cyan" => "\x1b[36m",
        "white" => "\x1b[37m",
        "bright_red" => "\x1b[91m",
        "bright_green" => "\x1b[92m",
        "bright_yellow" => "\x1b[93m",
        "bright_blue" => "\x1b[94m",
        _ => "\x1b[0m",
    }
}
