//! QuickMart Traders sales console

use std::io::{BufRead, Write};

use shared::{
    format_amount, parse_non_negative_amount, parse_positive_amount, parse_quantity,
    require_text, CreateTransactionInput, SaleTransaction, SalesService,
};

use crate::config::{Config, OutputFormat};
use crate::error::AppResult;
use crate::menu::{Flow, Menu, MenuAction};
use crate::terminal::Terminal;

pub const MART_MENU: Menu = Menu {
    title: "======= QuickMart Traders =========",
    options: [
        "Create New Transaction (Enter Purchase & Selling Details)",
        "View Last Transaction",
        "Calculate Profit/Loss (Recompute & Print)",
        "Exit",
    ],
    not_a_number: "Invalid option. Please enter a number.",
    invalid_option: "Invalid menu option.",
    farewell: "Thank you. Application closed normally.",
};

const NO_TRANSACTION: &str = "No transaction available. Please create a new transaction first.";

/// Shop counter session
pub struct MartCounter {
    sales: SalesService,
    format: OutputFormat,
}

impl MartCounter {
    pub fn new(config: &Config) -> Self {
        Self::with_sales(config, SalesService::new())
    }

    /// Counter that starts from an existing sales service
    pub fn with_sales(config: &Config, sales: SalesService) -> Self {
        Self {
            sales,
            format: config.display.format,
        }
    }

    pub fn sales(&self) -> &SalesService {
        &self.sales
    }

    /// Run the menu until the user exits
    pub fn run<R: BufRead, W: Write>(&mut self, term: &mut Terminal<R, W>) -> AppResult<()> {
        MART_MENU.run(term, |term, action| self.handle(term, action))
    }

    fn handle<R: BufRead, W: Write>(
        &mut self,
        term: &mut Terminal<R, W>,
        action: MenuAction,
    ) -> AppResult<Flow> {
        match action {
            MenuAction::Create => self.create_transaction(term),
            MenuAction::View => self.view_last_transaction(term),
            MenuAction::Maintain => self.recalculate(term),
            MenuAction::Exit => Ok(Flow::Exit),
        }
    }

    fn create_transaction<R: BufRead, W: Write>(
        &mut self,
        term: &mut Terminal<R, W>,
    ) -> AppResult<Flow> {
        let Some(invoice_no) = term.ask(
            "Enter Invoice No: ",
            "Invoice No cannot be empty.",
            |raw| require_text("invoice_no", raw),
        )?
        else {
            return Ok(Flow::Continue);
        };

        let Some(customer_name) = term.ask(
            "Enter Customer Name: ",
            "Customer Name cannot be empty.",
            |raw| require_text("customer_name", raw),
        )?
        else {
            return Ok(Flow::Continue);
        };

        let Some(item_name) = term.ask(
            "Enter Item Name: ",
            "Item Name cannot be empty.",
            |raw| require_text("item_name", raw),
        )?
        else {
            return Ok(Flow::Continue);
        };

        let Some(quantity) = term.ask(
            "Enter Quantity: ",
            "Quantity must be greater than zero.",
            |raw| parse_quantity("quantity", raw),
        )?
        else {
            return Ok(Flow::Continue);
        };

        let Some(purchase_amount) = term.ask(
            "Enter Purchase Amount (total): ",
            "Purchase Amount must be greater than zero.",
            |raw| parse_positive_amount("purchase_amount", raw),
        )?
        else {
            return Ok(Flow::Continue);
        };

        let Some(selling_amount) = term.ask(
            "Enter Selling Amount (total): ",
            "Selling Amount cannot be negative.",
            |raw| parse_non_negative_amount("selling_amount", raw),
        )?
        else {
            return Ok(Flow::Continue);
        };

        let input = CreateTransactionInput {
            invoice_no,
            customer_name,
            item_name,
            quantity,
            purchase_amount,
            selling_amount,
        };

        match self.sales.create_transaction(input) {
            Ok(transaction) => {
                term.blank_line()?;
                term.say("Transaction saved successfully.")?;
                render_calculation(term, transaction)?;
                term.say("-------------------------")?;
            }
            Err(e) => term.say(format!("Transaction not saved: {}", e))?,
        }
        term.blank_line()?;
        Ok(Flow::Continue)
    }

    fn view_last_transaction<R: BufRead, W: Write>(
        &self,
        term: &mut Terminal<R, W>,
    ) -> AppResult<Flow> {
        let Ok(transaction) = self.sales.view_last_transaction() else {
            term.say(NO_TRANSACTION)?;
            term.blank_line()?;
            return Ok(Flow::Continue);
        };

        match self.format {
            OutputFormat::Text => render_transaction(term, transaction)?,
            OutputFormat::Json => term.say(serde_json::to_string_pretty(transaction)?)?,
        }
        Ok(Flow::Continue)
    }

    fn recalculate<R: BufRead, W: Write>(&mut self, term: &mut Terminal<R, W>) -> AppResult<Flow> {
        match self.sales.recalculate() {
            Ok(transaction) => {
                render_calculation(term, transaction)?;
                term.say("----------------------------------")?;
            }
            Err(e) if e.is_not_found() => term.say(NO_TRANSACTION)?,
            Err(e) => term.say(format!("Could not recalculate: {}", e))?,
        }
        term.blank_line()?;
        Ok(Flow::Continue)
    }
}

fn render_calculation<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    transaction: &SaleTransaction,
) -> AppResult<()> {
    term.say(format!("Status: {}", transaction.profit_or_loss_status))?;
    term.say(format!(
        "Profit/Loss Amount: {}",
        format_amount(transaction.profit_or_loss_amount)
    ))?;
    term.say(format!(
        "Profit Margin (%): {}",
        format_amount(transaction.profit_margin_percent)
    ))
}

fn render_transaction<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    transaction: &SaleTransaction,
) -> AppResult<()> {
    term.say("------ Last Transaction ------")?;
    term.say(format!("InvoiceNo: {}", transaction.invoice_no))?;
    term.say(format!("Customer: {}", transaction.customer_name))?;
    term.say(format!("Item: {}", transaction.item_name))?;
    term.say(format!("Quantity: {}", transaction.quantity))?;
    term.say(format!("Purchase Amount: {}", format_amount(transaction.purchase_amount)))?;
    term.say(format!("Selling Amount: {}", format_amount(transaction.selling_amount)))?;
    render_calculation(term, transaction)?;
    term.say("--------------------------")?;
    term.blank_line()
}
