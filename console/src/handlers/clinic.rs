//! MediSure Clinic billing console

use std::io::{BufRead, Write};

use shared::{
    format_amount, parse_non_negative_amount, parse_yes_no, require_text, BillingService,
    CreateBillInput, PatientBill,
};

use crate::config::{Config, OutputFormat};
use crate::error::AppResult;
use crate::menu::{Flow, Menu, MenuAction};
use crate::terminal::Terminal;

pub const CLINIC_MENU: Menu = Menu {
    title: "===== MediSure Clinic Billing =====",
    options: [
        "Create New Bill",
        "View Last Bill",
        "Clear Last Bill",
        "Exit",
    ],
    not_a_number: "Enter a valid option.",
    invalid_option: "Invalid option.",
    farewell: "Application closed.",
};

/// Clinic front desk session
pub struct ClinicDesk {
    billing: BillingService,
    format: OutputFormat,
}

impl ClinicDesk {
    pub fn new(config: &Config) -> Self {
        Self {
            billing: BillingService::with_discount_percent(config.clinic.insurance_discount_percent),
            format: config.display.format,
        }
    }

    pub fn billing(&self) -> &BillingService {
        &self.billing
    }

    /// Run the menu until the user exits
    pub fn run<R: BufRead, W: Write>(&mut self, term: &mut Terminal<R, W>) -> AppResult<()> {
        CLINIC_MENU.run(term, |term, action| self.handle(term, action))
    }

    fn handle<R: BufRead, W: Write>(
        &mut self,
        term: &mut Terminal<R, W>,
        action: MenuAction,
    ) -> AppResult<Flow> {
        match action {
            MenuAction::Create => self.create_bill(term),
            MenuAction::View => self.view_last_bill(term),
            MenuAction::Maintain => self.clear_last_bill(term),
            MenuAction::Exit => Ok(Flow::Exit),
        }
    }

    fn create_bill<R: BufRead, W: Write>(&mut self, term: &mut Terminal<R, W>) -> AppResult<Flow> {
        let Some(bill_id) = term.ask("Enter Bill Id: ", "Enter correct Bill ID.", |raw| {
            require_text("bill_id", raw)
        })?
        else {
            return Ok(Flow::Continue);
        };

        let Some(patient_name) = term.ask(
            "Enter Patient Name: ",
            "Enter correct Patient Name.",
            |raw| require_text("patient_name", raw),
        )?
        else {
            return Ok(Flow::Continue);
        };

        let Some(has_insurance) = term.ask(
            "Is the patient insured? (Y/N): ",
            "Enter Y or N.",
            |raw| parse_yes_no("has_insurance", raw),
        )?
        else {
            return Ok(Flow::Continue);
        };

        let Some(consultation_fee) = term.ask(
            "Enter Consultation Fee: ",
            "Enter correct Consultation Fee.",
            |raw| parse_non_negative_amount("consultation_fee", raw),
        )?
        else {
            return Ok(Flow::Continue);
        };

        let Some(lab_charges) = term.ask(
            "Enter Lab Charges: ",
            "Enter correct Lab Charges.",
            |raw| parse_non_negative_amount("lab_charges", raw),
        )?
        else {
            return Ok(Flow::Continue);
        };

        let Some(medication_charges) = term.ask(
            "Enter Medicine Charges: ",
            "Enter correct Medicine Charges.",
            |raw| parse_non_negative_amount("medication_charges", raw),
        )?
        else {
            return Ok(Flow::Continue);
        };

        let input = CreateBillInput {
            bill_id,
            patient_name,
            has_insurance,
            consultation_fee,
            lab_charges,
            medication_charges,
        };

        match self.billing.create_bill(input) {
            Ok(_) => {
                term.blank_line()?;
                term.say("Bill created successfully.")?;
            }
            Err(e) => term.say(format!("Bill not created: {}", e))?,
        }
        term.blank_line()?;
        Ok(Flow::Continue)
    }

    fn view_last_bill<R: BufRead, W: Write>(&self, term: &mut Terminal<R, W>) -> AppResult<Flow> {
        let Ok(bill) = self.billing.view_last_bill() else {
            term.say("No bill available. Please create a new bill first.")?;
            return Ok(Flow::Continue);
        };

        match self.format {
            OutputFormat::Text => render_bill(term, bill)?,
            OutputFormat::Json => term.say(serde_json::to_string_pretty(bill)?)?,
        }
        Ok(Flow::Continue)
    }

    fn clear_last_bill<R: BufRead, W: Write>(&mut self, term: &mut Terminal<R, W>) -> AppResult<Flow> {
        self.billing.clear_last_bill();
        term.say("Last bill cleared.")?;
        term.blank_line()?;
        Ok(Flow::Continue)
    }
}

fn render_bill<R: BufRead, W: Write>(term: &mut Terminal<R, W>, bill: &PatientBill) -> AppResult<()> {
    let created = bill.created_at.with_timezone(&chrono::Local);

    term.say("------------------- Last Bill -----------------")?;
    term.say(format!("BillId: {}", bill.bill_id))?;
    term.say(format!("Patient: {}", bill.patient_name))?;
    term.say(format!("Insured: {}", if bill.has_insurance { "True" } else { "False" }))?;
    term.say(format!("Consultation Fee: {}", format_amount(bill.consultation_fee)))?;
    term.say(format!("Lab Charges: {}", format_amount(bill.lab_charges)))?;
    term.say(format!("Medicine Charges: {}", format_amount(bill.medication_charges)))?;
    term.say(format!("Gross Amount: {}", format_amount(bill.gross_amount)))?;
    term.say(format!("Discount Amount: {}", format_amount(bill.discount_amount)))?;
    term.say(format!("Final Payable: {}", format_amount(bill.final_payable)))?;
    term.say(format!("Created: {}", created.format("%Y-%m-%d %H:%M:%S")))?;
    term.say("----------------------------------------------")?;
    term.blank_line()
}
