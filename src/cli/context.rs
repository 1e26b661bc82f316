//! Shell state and dispatch helpers.

use ledger_config::{Config, ConfigManager};
use ledger_core::{
    format_row, CoordinatorState, CoreError, CurrencyFormatter, IsoDateFormatter, SymbolFormatter,
};
use ledger_domain::{MonthFilter, Transaction};
use strsim::levenshtein;

use super::commands::{self, CommandDefinition, CommandRegistry};
use super::output;
use crate::errors::{CliError, CommandError};
use crate::session::Session;

const SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: Session,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub currency: SymbolFormatter,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::from_env()?;
        let config = config_manager.load()?;
        Ok(Self::with_config(mode, config, config_manager))
    }

    pub fn with_config(mode: CliMode, config: Config, config_manager: ConfigManager) -> Self {
        output::set_theme(config.theme);
        Self {
            mode,
            registry: CommandRegistry::new(commands::all_definitions()),
            session: Session::new(&config),
            currency: SymbolFormatter::new(config.currency_symbol.clone()),
            config,
            config_manager,
            last_command: None,
            running: true,
        }
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandDefinition> {
        self.registry.get(name)
    }

    pub(crate) fn prompt(&self) -> String {
        let mut prompt = String::from("expense-ledger");
        if let MonthFilter::Only(month) = self.session.month_filter() {
            prompt.push_str(&format!(" ({month})"));
        }
        if matches!(self.session.state(), CoordinatorState::Editing(_)) {
            prompt.push_str(" [editing]");
        }
        prompt.push_str("> ");
        prompt
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let handler = self.registry.get(command).map(|definition| definition.handler);
        if let Some(handler) = handler {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= SUGGESTION_DISTANCE {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
            CommandError::Core(CoreError::OutOfRange { index, .. }) => {
                output::error(format!("No transaction #{}.", index + 1));
                output::info("Use `list` to see current positions.");
            }
            other => output::error(other),
        }
        Ok(())
    }

    /// One list line for `transaction` using the configured currency symbol.
    pub(crate) fn render_row(&self, transaction: &Transaction) -> String {
        format_row(transaction, &self.currency, &IsoDateFormatter)
    }

    pub(crate) fn money(&self, amount: f64) -> String {
        self.currency.format_amount(amount)
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        crate::cli::shell::handle_line(self, line)
    }
}

/// Parses a 1-based position argument into a ledger index.
pub(crate) fn parse_position(arg: Option<&&str>, usage: &str) -> Result<usize, CommandError> {
    let raw = arg.ok_or_else(|| CommandError::InvalidArguments(format!("Usage: {usage}")))?;
    match raw.trim().parse::<usize>() {
        Ok(position) if position >= 1 => Ok(position - 1),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{raw}` is not a position; positions start at 1."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context() -> (TempDir, ShellContext) {
        let dir = TempDir::new().expect("tempdir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
        let context = ShellContext::with_config(CliMode::Script, Config::default(), manager);
        (dir, context)
    }

    #[test]
    fn positions_are_one_based() {
        assert_eq!(parse_position(Some(&"1"), "edit <#>").unwrap(), 0);
        assert!(parse_position(Some(&"0"), "edit <#>").is_err());
        assert!(parse_position(Some(&"two"), "edit <#>").is_err());
        assert!(parse_position(None, "edit <#>").is_err());
    }

    #[test]
    fn add_then_edit_updates_in_place() {
        let (_dir, mut context) = context();
        context.process_line("add Coffee 50 Food").unwrap();
        context.process_line("add Bus 20 Travel").unwrap();
        context.process_line("edit 1").unwrap();
        assert!(context.prompt().contains("[editing]"));

        context.process_line("add Coffee 80 Food").unwrap();

        let summary = context.session.summary();
        assert_eq!(summary.total, 100.0);
        assert_eq!(context.session.ledger().len(), 2);
        assert!(!context.prompt().contains("[editing]"));
    }

    #[test]
    fn stale_positions_surface_as_core_errors() {
        let (_dir, mut context) = context();
        let err = context.process_line("delete 3").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Core(CoreError::OutOfRange { index: 2, len: 0 })
        ));
    }

    #[test]
    fn unknown_commands_continue_the_loop() {
        let (_dir, mut context) = context();
        let control = context.process_line("sumary").unwrap();
        assert_eq!(control, LoopControl::Continue);
    }

    #[test]
    fn exit_stops_the_loop() {
        let (_dir, mut context) = context();
        assert_eq!(context.process_line("exit").unwrap(), LoopControl::Exit);
        assert!(!context.running);
    }

    #[test]
    fn filter_shows_in_prompt() {
        let (_dir, mut context) = context();
        context.process_line("filter 2024-05").unwrap();
        assert_eq!(context.prompt(), "expense-ledger (2024-05)> ");
        context.process_line("filter All").unwrap();
        assert_eq!(context.prompt(), "expense-ledger> ");
    }

    #[test]
    fn chart_survives_nearly_cancelling_amounts() {
        let (_dir, mut context) = context();
        context.process_line("add A 1000000000000000000 Food").unwrap();
        context.process_line("add B -999999999999999872 Travel").unwrap();

        let control = context.process_line("chart").unwrap();

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(context.session.summary().total, 128.0);
    }
}
