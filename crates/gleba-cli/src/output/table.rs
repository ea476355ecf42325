use gleba_core::format::format_report_year;
use gleba_core::i18n::Locale;
use gleba_core::model::{EligibilityDerivedResult, EligibilityOutcome, FeatureDiagnostic};
use gleba_core::report::summary_rows;

pub fn print_result(result: Option<&EligibilityDerivedResult>, locale: Locale, verbose: bool) {
    let Some(result) = result else {
        println!("  Eligibility cannot be determined: the response has no features");
        println!("  array or no total boundary area was given.");
        return;
    };

    let status = match result.outcome {
        EligibilityOutcome::Eligible => "ELIGIBLE",
        EligibilityOutcome::Ineligible { .. } => "NOT ELIGIBLE",
        EligibilityOutcome::Incomplete => "INCOMPLETE",
    };
    println!("  Overall: {}\n", status);

    let rows = summary_rows(result, locale);
    let width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(10);
    for row in &rows {
        println!("  {:<width$}  {:>16}", row.label, row.value, width = width);
    }
    println!();

    if !result.deforestation_years.is_empty() {
        let years: Vec<String> = result
            .deforestation_years
            .iter()
            .map(|y| format_report_year(*y).to_string())
            .collect();
        println!(
            "  {}: {}\n",
            locale.labels().deforestation_years,
            years.join(", ")
        );
    }

    for line in result.message.lines() {
        println!("  {}", line);
    }
    println!();

    if verbose {
        print_diagnostics(&result.diagnostics);
    } else if !result.diagnostics.is_empty() {
        println!(
            "  {} feature(s) could not be measured (use --verbose for details)\n",
            result.diagnostics.len()
        );
    }
}

pub fn print_diagnostics(diagnostics: &[FeatureDiagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    println!("  Data-quality diagnostics:");
    for d in diagnostics {
        println!(
            "    #{:<4} {:<22} {}: {}",
            d.feature_index,
            d.feature_name.as_deref().unwrap_or("(unnamed)"),
            d.category,
            d.message
        );
    }
    println!();
}
