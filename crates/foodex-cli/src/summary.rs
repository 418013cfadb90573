//! Human-readable rendering of validation results.

use comfy_table::{ContentArrangement, Table, presets};

use foodex_model::{Severity, ValidationResult};

/// Print one result: verdict line, cleaned code, interpretation, warnings.
pub fn print_result(result: &ValidationResult) {
    let verdict = if result.valid { "VALID" } else { "INVALID" };
    println!(
        "{}: {} (severity={}, warnings={})",
        result.original_code, verdict, result.severity, result.warning_counts.total
    );

    if let Some(cleaned) = &result.cleaned_code {
        println!("  cleaned code: {cleaned}");
    }
    if let Some(description) = &result.interpreted_description {
        println!("  interpretation: {description}");
    }
    if !result.warnings.is_empty() {
        println!("{}", warning_table(result));
    }
}

/// One summary line per result, for batch output.
pub fn print_batch_line(result: &ValidationResult) {
    let verdict = if result.valid { "VALID" } else { "INVALID" };
    let counts = &result.warning_counts;
    println!(
        "{}: {} (errors={}, high={}, low={})",
        result.original_code, verdict, counts.error, counts.high, counts.low
    );
}

fn warning_table(result: &ValidationResult) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(["Rule", "Severity", "Message", "Terms"]);

    for warning in &result.warnings {
        let terms = warning.terms.join(", ");
        table.add_row([
            warning.rule.as_str(),
            severity_label(warning.severity),
            warning.message.as_str(),
            terms.as_str(),
        ]);
    }
    table
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "ERROR",
        Severity::High => "HIGH",
        Severity::Low => "LOW",
        Severity::None => "INFO",
    }
}
