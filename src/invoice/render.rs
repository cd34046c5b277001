use std::borrow::Cow;

use crate::assets::Assets;
use crate::config::Config;
use crate::invoice::task::{invoice_total, Task};

/// Replace the characters that are significant in HTML text and attributes
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn text(s: &str, escape: bool) -> Cow<'_, str> {
    if escape {
        Cow::Owned(escape_html(s))
    } else {
        Cow::Borrowed(s)
    }
}

/// Format a money amount with two decimal places
pub fn format_money(value: f64, currency_symbol: &str) -> String {
    format!("{}{:.2}", currency_symbol, value)
}

/// Render one block per task, in the order given
pub fn render_tasks_fragment(tasks: &[Task], currency_symbol: &str, escape: bool) -> String {
    let mut html = String::new();
    for task in tasks {
        html.push_str(&format!(
            r#"
            <div class="task-item">
                <div class="task-details">
                    <div class="label">Task Description</div>
                    <div class="value">{description}</div>
                </div>
                <div class="task-meta">
                    <div>
                        <div class="label">Date</div>
                        <div class="value">{date}</div>
                    </div>
                    <div>
                        <div class="label">Hours</div>
                        <div class="value">{hours}</div>
                    </div>
                    <div>
                        <div class="label">Rate</div>
                        <div class="value">{rate}/hr</div>
                    </div>
                    <div>
                        <div class="label">Subtotal</div>
                        <div class="value">{subtotal}</div>
                    </div>
                </div>
            </div>
"#,
            description = text(&task.description, escape),
            date = text(&task.date, escape),
            hours = task.hours,
            rate = text(&format_money(task.rate, currency_symbol), escape),
            subtotal = text(&format_money(task.subtotal(), currency_symbol), escape),
        ));
    }
    html
}

/// Assemble the complete, self-contained invoice document
pub fn render_invoice(org_name: &str, tasks: &[Task], config: &Config, assets: &Assets) -> String {
    let escape = config.escape_html;
    let org_name = text(org_name, escape);
    let total = format_money(invoice_total(tasks), &config.currency_symbol);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Invoice - {org_name}</title>
    <style>
        {css}
        @media print {{
            body {{
                -webkit-print-color-adjust: exact;
                print-color-adjust: exact;
            }}
            .invoice {{
                border: none;
                box-shadow: none;
                margin: 0;
                padding: 20px;
            }}
            .invoice-footer {{
                position: fixed;
                bottom: 20px;
                left: 0;
                right: 0;
            }}
            @page {{
                margin: 0.5cm;
                size: A4;
            }}
        }}
    </style>
</head>
<body>
    <div class="invoice">
        <div class="invoice-header-wrapper">
            <div class="invoice-header">
                <div class="logo-section">
                    <img src="{logo}" alt="Logo" class="logo">
                </div>
                <div class="header-content">
                    <h1>Invoice</h1>
                    <div class="client-info">
                        <span class="client-label">Client</span>
                        <div class="org-name">{org_name}</div>
                    </div>
                </div>
            </div>
        </div>

        <div class="tasks-list">
            {tasks}
        </div>

        <div class="invoice-total">
            <div class="label">Total Amount</div>
            <div class="value">{total}</div>
        </div>

        <div class="invoice-footer">
            Billed by <a href="{company_url}">{company_name}</a>
        </div>
    </div>
</body>
</html>
"#,
        org_name = org_name,
        css = assets.stylesheet,
        logo = assets.logo.data_uri(),
        tasks = render_tasks_fragment(tasks, &config.currency_symbol, escape),
        total = text(&total, escape),
        company_url = text(&config.company_url, escape),
        company_name = text(&config.company_name, escape),
    )
}
