mod render;
mod task;
mod writer;

pub use render::{escape_html, format_money, render_invoice, render_tasks_fragment};
pub use task::{invoice_total, InvoiceInfo, Task};
pub use writer::{invoice_filename, write_invoice, INVOICE_SUFFIX};
