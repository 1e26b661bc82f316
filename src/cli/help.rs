use crate::cli::commands::{CommandDefinition, CommandRegistry};
use crate::cli::output;

pub fn print_overview(registry: &CommandRegistry) {
    output::section("Available commands");
    for command in registry.iter() {
        output::line(format!("  {:<10} {}", command.name, command.description));
    }
    output::info("Use `help <command>` for details. Positions start at 1.");
}

pub fn print_command(command: &CommandDefinition) {
    output::section(format!("Help: {}", command.name));
    output::line(format!("  Description: {}", command.description));
    output::line(format!("  Usage: {}", command.usage));
}
