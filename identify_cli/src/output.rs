use identify_api::CallResult;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct CallRow {
    #[tabled(rename = "Success")]
    success: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Detail")]
    detail: String,
}

/// Result of an availability check, as printed.
#[derive(Tabled, Serialize)]
pub struct Availability {
    #[tabled(rename = "Field")]
    pub field: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Available", display_with = "yes_no")]
    pub available: bool,
}

fn yes_no(value: &bool) -> String {
    if *value { "yes" } else { "no" }.to_string()
}

// -- Row builders --

fn build_call_row<T: Serialize>(result: &CallResult<T>) -> CallRow {
    let detail = match result {
        CallResult::Success { data, .. } => {
            serde_json::to_string(data).unwrap_or_else(|e| format!("<unprintable: {}>", e))
        }
        CallResult::Failure { error, .. } => error.clone(),
    };
    CallRow {
        success: yes_no(&result.is_success()),
        status: result
            .status()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string()),
        detail,
    }
}

// -- Printing --

pub fn print_call_result<T: Serialize>(result: &CallResult<T>, format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new([build_call_row(result)]);
            table.with(Style::modern());
            println!("{}", table);
        }
        OutputFormat::Json => print_json(result),
    }
}

pub fn print_availability(availability: &Availability, format: &OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new([availability]);
            table.with(Style::modern());
            println!("{}", table);
        }
        OutputFormat::Json => print_json(availability),
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
