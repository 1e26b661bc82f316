use ledger_core::CommitOutcome;
use ledger_domain::Category;

use super::CommandDefinition;
use crate::cli::context::{parse_position, CommandResult, ShellContext};
use crate::cli::output;
use crate::errors::CommandError;
use crate::session::{Event, EventOutcome};

const ADD_USAGE: &str = "add <name> <amount> [category] [YYYY-MM-DD]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "add",
            "Submit a transaction (updates the record under edit, if any)",
            ADD_USAGE,
            cmd_add,
        ),
        CommandDefinition::new(
            "edit",
            "Load a transaction into the draft for updating",
            "edit <#>",
            cmd_edit,
        ),
        CommandDefinition::new("delete", "Remove a transaction", "delete <#>", cmd_delete),
        CommandDefinition::new(
            "cancel",
            "Abandon the current edit and clear the draft",
            "cancel",
            cmd_cancel,
        ),
        CommandDefinition::new("draft", "Show the current draft", "draft", cmd_draft),
        CommandDefinition::new(
            "list",
            "List transactions in the current month filter",
            "list",
            cmd_list,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 || args.len() > 4 {
        return Err(CommandError::InvalidArguments(format!("Usage: {ADD_USAGE}")));
    }
    let category = match args.get(2) {
        Some(raw) => raw
            .parse::<Category>()
            .map_err(|err| CommandError::InvalidArguments(err.to_string()))?,
        None => Category::default(),
    };
    let outcome = context.session.handle(Event::SubmitInput {
        name: args[0].to_string(),
        amount: args[1].to_string(),
        category,
        date: args.get(3).map(|date| date.to_string()),
    })?;
    match outcome {
        EventOutcome::Committed(CommitOutcome::Inserted { position, .. }) => {
            report_commit(context, "Added", position);
        }
        EventOutcome::Committed(CommitOutcome::Updated { position, .. }) => {
            report_commit(context, "Updated", position);
        }
        EventOutcome::Committed(CommitOutcome::Rejected(reason)) => {
            output::warning(format!("Submission ignored: {reason}."));
        }
        _ => {}
    }
    Ok(())
}

fn report_commit(context: &ShellContext, verb: &str, position: usize) {
    if let Some(transaction) = context.session.ledger().all().get(position) {
        output::success(format!(
            "{verb} #{}: {}",
            position + 1,
            context.render_row(transaction)
        ));
    }
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = parse_position(args.first(), "edit <#>")?;
    context.session.handle(Event::RequestEdit(index))?;
    output::info(format!(
        "Editing #{}. The next `add` updates it; `cancel` abandons the edit.",
        index + 1
    ));
    print_draft(context);
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let index = parse_position(args.first(), "delete <#>")?;
    if let EventOutcome::Deleted { transaction, .. } =
        context.session.handle(Event::RequestDelete(index))?
    {
        output::success(format!(
            "Deleted #{}: {}",
            index + 1,
            context.render_row(&transaction)
        ));
    }
    Ok(())
}

fn cmd_cancel(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.session.handle(Event::CancelEdit)?;
    output::info("Draft cleared.");
    Ok(())
}

fn cmd_draft(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_draft(context);
    Ok(())
}

fn print_draft(context: &ShellContext) {
    let view = context.session.view();
    let draft = &view.draft;
    output::section(format!("Draft ({})", view.submit_label));
    output::line(format!("  Name    : {}", draft.name));
    output::line(format!("  Amount  : {}", draft.amount));
    output::line(format!("  Category: {}", draft.category));
    if context.config.track_dates {
        output::line(format!("  Date    : {}", draft.date));
    }
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.session.summary();
    output::section(format!("Transactions ({})", summary.filter));
    if summary.rows.is_empty() {
        output::info("No transactions.");
        return Ok(());
    }
    for row in &summary.rows {
        output::line(format!(
            "  #{:<3} {}",
            row.position + 1,
            context.render_row(&row.transaction)
        ));
    }
    output::line(format!("  Total: {}", context.money(summary.total)));
    Ok(())
}
