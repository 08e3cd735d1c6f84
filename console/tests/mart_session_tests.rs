//! Shop console session tests
//!
//! Drives the sales menu with scripted input and checks the printed
//! profit/loss figures and the last-transaction slot.

use std::io::Cursor;

use frontdesk_console::config::{Config, OutputFormat};
use frontdesk_console::{MartCounter, Terminal};
use rust_decimal::Decimal;
use shared::{CreateTransactionInput, ProfitStatus, SaleTransaction, SalesService};

fn run_session(config: &Config, script: &str) -> (MartCounter, String) {
    let mut counter = MartCounter::new(config);
    let mut term = Terminal::new(Cursor::new(script.to_string()), Vec::new());
    counter.run(&mut term).unwrap();
    let output = String::from_utf8(term.into_output()).unwrap();
    (counter, output)
}

#[test]
fn test_profit_sale_printed_on_save() {
    let script = "1\nI1\nC\nWidget\n5\n100\n150\n4\n";
    let (counter, out) = run_session(&Config::default(), script);

    assert!(out.contains("Transaction saved successfully."));
    assert!(out.contains("Status: PROFIT"));
    assert!(out.contains("Profit/Loss Amount: 50.00"));
    assert!(out.contains("Profit Margin (%): 50.00"));
    assert!(out.ends_with("Thank you. Application closed normally.\n"));
    assert_eq!(
        counter.sales().view_last_transaction().unwrap().profit_or_loss_status,
        ProfitStatus::Profit
    );
}

#[test]
fn test_loss_sale_view() {
    let script = "1\nI2\nC\nWidget\n5\n100\n80\n2\n4\n";
    let (_, out) = run_session(&Config::default(), script);

    assert!(out.contains("------ Last Transaction ------"));
    assert!(out.contains("InvoiceNo: I2"));
    assert!(out.contains("Quantity: 5"));
    assert!(out.contains("Purchase Amount: 100.00"));
    assert!(out.contains("Selling Amount: 80.00"));
    assert!(out.contains("Status: LOSS"));
    assert!(out.contains("Profit Margin (%): 20.00"));
}

#[test]
fn test_recalculate_prints_same_figures() {
    let script = "1\nI3\nC\nWidget\n5\n100\n100\n3\n3\n4\n";
    let (_, out) = run_session(&Config::default(), script);

    // Once on save, twice on recalculation
    assert_eq!(out.matches("Status: BREAK-EVEN").count(), 3);
    assert_eq!(out.matches("Profit Margin (%): 0.00").count(), 3);
}

#[test]
fn test_recalculate_without_transaction() {
    let (_, out) = run_session(&Config::default(), "3\n2\n4\n");
    assert_eq!(
        out.matches("No transaction available. Please create a new transaction first.")
            .count(),
        2
    );
}

#[test]
fn test_field_rejections() {
    let cases = [
        ("1\n \n4\n", "Invoice No cannot be empty."),
        ("1\nI1\n\n4\n", "Customer Name cannot be empty."),
        ("1\nI1\nC\n\t\n4\n", "Item Name cannot be empty."),
        ("1\nI1\nC\nWidget\n0\n4\n", "Quantity must be greater than zero."),
        ("1\nI1\nC\nWidget\nabc\n4\n", "Quantity must be greater than zero."),
        ("1\nI1\nC\nWidget\n5\n0\n4\n", "Purchase Amount must be greater than zero."),
        ("1\nI1\nC\nWidget\n5\n100\n-1\n4\n", "Selling Amount cannot be negative."),
    ];

    for (script, message) in cases {
        let (counter, out) = run_session(&Config::default(), script);
        assert!(out.contains(message), "expected {:?} for {:?}", message, script);
        assert!(!counter.sales().has_transaction());
    }
}

#[test]
fn test_rejected_create_keeps_previous_transaction() {
    let script = "1\nI1\nC\nWidget\n5\n100\n150\n1\nI9\nC\nWidget\n-2\n2\n4\n";
    let (counter, out) = run_session(&Config::default(), script);

    assert!(out.contains("InvoiceNo: I1"));
    assert_eq!(counter.sales().view_last_transaction().unwrap().invoice_no, "I1");
}

#[test]
fn test_menu_input_errors() {
    let (_, out) = run_session(&Config::default(), "one\n0\n4\n");
    assert!(out.contains("Invalid option. Please enter a number."));
    assert!(out.contains("Invalid menu option."));
}

#[test]
fn test_json_view_uses_status_labels() {
    let mut config = Config::default();
    config.display.format = OutputFormat::Json;
    let (_, out) = run_session(&config, "1\nI3\nC\nWidget\n5\n100\n100\n2\n4\n");

    assert!(out.contains("\"profit_or_loss_status\": \"BREAK-EVEN\""));
    assert!(out.contains("\"invoice_no\": \"I3\""));
}

#[test]
fn test_margin_overflow_reported() {
    let script = "1\nI1\nC\nWidget\n1\n0.0000000000000000000000000001\n79228162514264337593543950335\n4\n";
    let (counter, out) = run_session(&Config::default(), script);

    assert!(out.contains("Transaction not saved: "));
    assert!(!out.contains("Transaction saved successfully."));
    assert!(!counter.sales().has_transaction());
}

#[test]
fn test_recalculate_failure_reported() {
    let input = CreateTransactionInput {
        invoice_no: "I1".into(),
        customer_name: "C".into(),
        item_name: "Widget".into(),
        quantity: 5,
        purchase_amount: Decimal::from(100),
        selling_amount: Decimal::from(150),
    };
    let mut sale = SaleTransaction::new(input).unwrap();
    sale.purchase_amount = Decimal::ZERO;

    let config = Config::default();
    let mut counter = MartCounter::with_sales(&config, SalesService::with_transaction(sale));
    let mut term = Terminal::new(Cursor::new("3\n4\n".to_string()), Vec::new());
    counter.run(&mut term).unwrap();
    let out = String::from_utf8(term.into_output()).unwrap();

    assert!(out.contains("Could not recalculate: "));
    assert!(!out.contains("Status: "));
    assert!(out.ends_with("Thank you. Application closed normally.\n"));
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use shared::{calculate_profit_loss, format_amount};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// The printed figures match the core calculation for any valid sale
        #[test]
        fn prop_printed_figures_match_calculation(
            purchase_cents in 1i64..=1_000_000i64,
            selling_cents in 0i64..=1_000_000i64
        ) {
            let purchase = Decimal::new(purchase_cents, 2);
            let selling = Decimal::new(selling_cents, 2);
            let script = format!("1\nI1\nC\nWidget\n1\n{}\n{}\n4\n", purchase, selling);
            let (_, out) = run_session(&Config::default(), &script);

            let expected = calculate_profit_loss(purchase, selling).unwrap();
            let status_line = format!("Status: {}", expected.status);
            let amount_line = format!("Profit/Loss Amount: {}", format_amount(expected.amount));
            let margin_line = format!("Profit Margin (%): {}", format_amount(expected.margin_percent));
            prop_assert!(out.contains(&status_line));
            prop_assert!(out.contains(&amount_line));
            prop_assert!(out.contains(&margin_line));
        }
    }
}
