/// Invoice-level answers captured before any task is entered
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceInfo {
    pub org_name: String,
    pub default_rate: f64,
    pub variable_rates: bool,
}

/// A single billable task
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub description: String,
    /// Validated YYYY-MM-DD text, kept exactly as entered
    pub date: String,
    pub hours: f64,
    pub rate: f64,
}

impl Task {
    pub fn subtotal(&self) -> f64 {
        self.hours * self.rate
    }
}

/// Sum of all task subtotals
pub fn invoice_total(tasks: &[Task]) -> f64 {
    tasks.iter().map(Task::subtotal).sum()
}
