use std::io::{BufRead, Write};

use crate::collect::prompt::{parse_amount, parse_date, Prompter};
use crate::error::Result;
use crate::invoice::{format_money, InvoiceInfo, Task};

/// Ask for the client name, default hourly rate and whether tasks may override it
pub fn collect_invoice_info<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<InvoiceInfo> {
    prompter.say("\nInvoice Information")?;
    prompter.say(&"-".repeat(20))?;

    let org_name = prompter.ask("Enter client/organization name: ")?;
    let label = format!(
        "Enter hourly rate (e.g., 50.00): {}",
        prompter.currency_symbol()
    );
    let default_rate = prompter.ask_until(&label, parse_amount)?;
    let variable_rates = prompter.confirm("Use variable rates for different tasks? (y/n): ")?;

    Ok(InvoiceInfo {
        org_name,
        default_rate,
        variable_rates,
    })
}

/// Ask for one task. The rate is only asked for when `variable_rates` is set.
pub fn collect_task<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default_rate: f64,
    variable_rates: bool,
) -> Result<Task> {
    prompter.say("\nTask Information")?;
    prompter.say(&"-".repeat(16))?;

    let description = prompter.ask("Enter task description: ")?;
    let date = prompter.ask_until("Enter date (YYYY-MM-DD): ", |answer| {
        parse_date(answer).map(|_| answer.trim().to_string())
    })?;
    let hours = prompter.ask_until("Enter hours spent: ", parse_amount)?;

    let rate = if variable_rates {
        let symbol = prompter.currency_symbol().to_string();
        let label = format!(
            "Enter hourly rate (default: {}): {}",
            format_money(default_rate, &symbol),
            symbol
        );
        prompter.ask_until(&label, |answer| {
            if answer.trim().is_empty() {
                Ok(default_rate)
            } else {
                parse_amount(answer)
            }
        })?
    } else {
        default_rate
    };

    Ok(Task {
        description,
        date,
        hours,
        rate,
    })
}

/// Collect tasks until the user declines to add another. Always returns at least one.
pub fn collect_all_tasks<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default_rate: f64,
    variable_rates: bool,
) -> Result<Vec<Task>> {
    let mut tasks = Vec::new();
    loop {
        tasks.push(collect_task(prompter, default_rate, variable_rates)?);
        tracing::debug!(count = tasks.len(), "task recorded");

        if !prompter.confirm("\nAdd another task? (y/n): ")? {
            break;
        }
        prompter.say("\n--- Next Task ---")?;
    }
    Ok(tasks)
}
