pub mod assets;
pub mod collect;
pub mod config;
pub mod error;
pub mod invoice;

pub use assets::{Assets, Logo};
pub use collect::{collect_all_tasks, collect_invoice_info, collect_task, Prompter};
pub use config::{load_config, Config};
pub use error::{InvoiceError, Result};
pub use invoice::{render_invoice, render_tasks_fragment, write_invoice, InvoiceInfo, Task};
