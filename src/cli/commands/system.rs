use super::CommandDefinition;
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::{help, output};
use crate::errors::CommandError;
use crate::session::{Event, EventOutcome};
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "theme",
            "Toggle between the light and dark theme",
            "theme",
            cmd_theme,
        ),
        CommandDefinition::new(
            "config",
            "Show the active configuration",
            "config",
            cmd_config,
        ),
        CommandDefinition::new("version", "Show build metadata", "version", cmd_version),
        CommandDefinition::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandDefinition::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_theme(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let EventOutcome::ThemeChanged(theme) = context.session.handle(Event::ToggleTheme)? else {
        return Ok(());
    };
    output::set_theme(theme);
    context.config.theme = theme;
    context.config_manager.save(&context.config)?;
    output::success(format!("Theme set to {theme}."));
    Ok(())
}

fn cmd_config(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let json = serde_json::to_string_pretty(&context.config)?;
    output::section("Configuration");
    output::line(json);
    output::info(format!(
        "Stored at {}",
        context.config_manager.config_path().display()
    ));
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Expense Ledger {}", meta.version));
    output::line(format!("  Build hash : {} ({})", meta.git_hash, meta.git_status));
    output::line(format!("  Built at   : {}", meta.timestamp));
    output::line(format!("  Target     : {}", meta.target));
    output::line(format!("  Profile    : {}", meta.profile));
    output::line(format!("  Rustc      : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(raw) = args.first() {
        match context.command(&raw.to_lowercase()) {
            Some(command) => help::print_command(command),
            None => context.suggest_command(raw),
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
