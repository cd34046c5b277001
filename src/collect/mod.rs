mod collector;
mod prompt;

pub use collector::{collect_all_tasks, collect_invoice_info, collect_task};
pub use prompt::{is_affirmative, parse_amount, parse_date, InputError, Prompter};
