use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use assert_cmd::Command;
use tempfile::TempDir;

fn invoice_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("quick-invoice"));
    cmd.current_dir(dir);
    cmd
}

fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

const ONE_TASK: &[&str] = &["Acme Corp", "50", "n", "Design", "2024-01-15", "3", "n"];

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();
    invoice_cmd(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive HTML invoice generator"));
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    invoice_cmd(temp_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quick-invoice"));
}

#[test]
fn test_generates_invoice_with_defaults() {
    let temp_dir = TempDir::new().unwrap();

    invoice_cmd(temp_dir.path())
        .write_stdin(script(ONE_TASK))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invoice Information"))
        .stdout(predicate::str::contains("Success! Invoice generated at:"))
        .stdout(predicate::str::contains("acme_corp-invoice.html"))
        .stdout(predicate::str::contains("To create a PDF:"));

    assert!(temp_dir.path().join("config.json").exists());

    let html = fs::read_to_string(
        temp_dir
            .path()
            .join("generated_invoices")
            .join("acme_corp-invoice.html"),
    )
    .unwrap();
    assert!(html.contains("<title>Invoice - Acme Corp</title>"));
    assert!(html.contains("$50.00/hr"));
    assert!(html.contains(r#"<div class="value">$150.00</div>"#));
    // Neither the configured nor the default logo exists in a fresh directory
    assert!(html.contains(&format!(
        "data:image/svg+xml;base64,{}",
        quick_invoice::assets::PLACEHOLDER_LOGO
    )));
    assert!(html.contains("Your Company Name"));
}

#[test]
fn test_invalid_input_is_reprompted() {
    let temp_dir = TempDir::new().unwrap();

    invoice_cmd(temp_dir.path())
        .write_stdin(script(&[
            "Acme Corp",
            "cheap",
            "40",
            "n",
            "Review",
            "2024-13-01",
            "2024-01-15",
            "two",
            "2",
            "n",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter a valid number"))
        .stdout(predicate::str::contains("Please use the format YYYY-MM-DD"));

    let html = fs::read_to_string(
        temp_dir
            .path()
            .join("generated_invoices")
            .join("acme_corp-invoice.html"),
    )
    .unwrap();
    assert!(html.contains("2024-01-15"));
    assert!(html.contains("$80.00"));
}

#[test]
fn test_variable_rates_and_summary_table() {
    let temp_dir = TempDir::new().unwrap();

    invoice_cmd(temp_dir.path())
        .write_stdin(script(&[
            "Globex",
            "100",
            "y",
            "Strategy",
            "2024-02-01",
            "2",
            "150",
            "y",
            "Support",
            "2024-02-02",
            "1",
            "",
            "n",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("DESCRIPTION"))
        .stdout(predicate::str::contains("Strategy"))
        .stdout(predicate::str::contains("Total: $400.00 across 2 task(s)"));

    let html =
        fs::read_to_string(temp_dir.path().join("generated_invoices/globex-invoice.html")).unwrap();
    assert!(html.contains("$150.00/hr"));
    assert!(html.contains("$100.00/hr"));
    assert!(html.contains(r#"<div class="value">$400.00</div>"#));
}

#[test]
fn test_rerun_overwrites_invoice() {
    let temp_dir = TempDir::new().unwrap();

    invoice_cmd(temp_dir.path())
        .write_stdin(script(ONE_TASK))
        .assert()
        .success();
    invoice_cmd(temp_dir.path())
        .write_stdin(script(&[
            "Acme Corp",
            "50",
            "n",
            "Rework",
            "2024-01-16",
            "1",
            "n",
        ]))
        .assert()
        .success();

    let output_dir = temp_dir.path().join("generated_invoices");
    assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 1);
    let html = fs::read_to_string(output_dir.join("acme_corp-invoice.html")).unwrap();
    assert!(html.contains("Rework"));
    assert!(!html.contains("Design"));
}

#[test]
fn test_closed_input_cancels_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    invoice_cmd(temp_dir.path())
        .write_stdin(script(&["Acme Corp", "50"]))
        .assert()
        .code(130)
        .stdout(predicate::str::contains("Operation cancelled by user"));

    assert!(!temp_dir.path().join("generated_invoices").exists());
}

#[test]
fn test_malformed_config_aborts() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.json"), "{ broken").unwrap();

    invoice_cmd(temp_dir.path())
        .write_stdin(script(ONE_TASK))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("An error occurred"))
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_custom_config_stylesheet_and_logo() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("settings.json"),
        r#"{
            "company_name": "Bright Labs",
            "company_url": "https://bright.example",
            "logo_path": "brand.png",
            "output_dir": "out/invoices",
            "currency_symbol": "€"
        }"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("theme.css"), ".invoice { color: teal; }").unwrap();
    fs::write(temp_dir.path().join("brand.png"), b"not-really-a-png").unwrap();

    invoice_cmd(temp_dir.path())
        .args(["--config", "settings.json", "--stylesheet", "theme.css"])
        .write_stdin(script(ONE_TASK))
        .assert()
        .success();

    let html =
        fs::read_to_string(temp_dir.path().join("out/invoices/acme_corp-invoice.html")).unwrap();
    assert!(html.contains(".invoice { color: teal; }"));
    assert!(html.contains("data:image/png;base64,"));
    assert!(html.contains(r#"<a href="https://bright.example">Bright Labs</a>"#));
    assert!(html.contains("€150.00"));
}

#[test]
fn test_escaping_is_on_by_default() {
    let temp_dir = TempDir::new().unwrap();
    let input = script(&[
        "Evil Co",
        "10",
        "n",
        "<script>x</script>",
        "2024-01-01",
        "1",
        "n",
    ]);

    invoice_cmd(temp_dir.path())
        .write_stdin(input.clone())
        .assert()
        .success();
    let path = temp_dir.path().join("generated_invoices/evil_co-invoice.html");
    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
    assert!(!html.contains("<script>"));

    invoice_cmd(temp_dir.path())
        .arg("--no-escape")
        .write_stdin(input)
        .assert()
        .success();
    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("<script>x</script>"));
}
