use ledger_domain::MonthFilter;

use super::CommandDefinition;
use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::errors::CommandError;
use crate::session::Event;

const BAR_WIDTH: f64 = 30.0;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "summary",
            "Show the total and per-category breakdown",
            "summary",
            cmd_summary,
        ),
        CommandDefinition::new(
            "months",
            "List months that have dated transactions",
            "months",
            cmd_months,
        ),
        CommandDefinition::new(
            "filter",
            "Restrict views to one month",
            "filter <YYYY-MM|All>",
            cmd_filter,
        ),
        CommandDefinition::new(
            "chart",
            "Show category shares with their chart colors",
            "chart",
            cmd_chart,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.session.summary();
    output::section(format!("Summary ({})", summary.filter));
    output::line(format!("  Transactions: {}", summary.rows.len()));
    output::line(format!("  Total       : {}", context.money(summary.total)));
    if summary.category_totals.is_empty() {
        return Ok(());
    }
    output::line("  By category:");
    for (category, sum) in summary.category_totals.iter() {
        output::line(format!("    {:<14} {}", category.label(), context.money(sum)));
    }
    Ok(())
}

fn cmd_months(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.session.summary();
    output::section("Months");
    if summary.months.is_empty() {
        output::info("No dated transactions.");
        return Ok(());
    }
    for month in &summary.months {
        let marker = if summary.filter == MonthFilter::Only(*month) {
            "*"
        } else {
            " "
        };
        output::line(format!(" {marker} {month}"));
    }
    Ok(())
}

fn cmd_filter(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = args.first().ok_or_else(|| {
        CommandError::InvalidArguments("Usage: filter <YYYY-MM|All>".to_string())
    })?;
    let filter = raw
        .parse::<MonthFilter>()
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
    context.session.handle(Event::SelectMonthFilter(filter))?;
    output::info(format!("Showing: {filter}"));
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.session.summary();
    let Some(chart) = summary.chart else {
        output::info("Nothing to chart.");
        return Ok(());
    };
    output::section(format!("Spending by category ({})", summary.filter));
    let widest = chart.values.iter().fold(0.0_f64, |acc, value| acc.max(value.abs()));
    for ((label, value), color) in chart.labels.iter().zip(&chart.values).zip(&chart.colors) {
        let share = if summary.total == 0.0 {
            0.0
        } else {
            value / summary.total
        };
        let bar = "#".repeat(bar_len(*value, widest));
        output::line(format!(
            "  {:<14} {:>12} {:>6.1}% {} {}",
            label,
            context.money(*value),
            share * 100.0,
            color,
            bar
        ));
    }
    Ok(())
}

/// Bar length for `value`, scaled so the widest slice fills `BAR_WIDTH`.
fn bar_len(value: f64, widest: f64) -> usize {
    if widest <= 0.0 || !widest.is_finite() {
        return 0;
    }
    ((value.abs() / widest).min(1.0) * BAR_WIDTH).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_never_exceed_full_width() {
        assert_eq!(bar_len(1e18, 1e18), BAR_WIDTH as usize);
        assert_eq!(bar_len(-999_999_999_999_999_872.0, 1e18), BAR_WIDTH as usize);
        assert_eq!(bar_len(5.0, 10.0), 15);
        assert_eq!(bar_len(0.0, 0.0), 0);
    }
}
