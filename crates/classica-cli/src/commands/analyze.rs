use anyhow::Result;
use classica_analysis::kasiski::{self, DEFAULT_MAX_NGRAM, DEFAULT_MIN_NGRAM};
use classica_analysis::{KeyLengthEstimate, KeyLengthEstimator, index_of_coincidence};
use classica_cipher::normalize;
use serde::Serialize;

use crate::output::{
    OutputStyle, create_table, format_key_value, header_cell, numeric_cell, print_json,
    print_section_header, selected_cell,
};
use crate::{AnalyzeArgs, OutputFormat};

/// Kasiski factor and how many repeat distances it divides
#[derive(Debug, Serialize)]
struct FactorCount {
    factor: usize,
    distances: usize,
}

#[derive(Debug, Serialize)]
struct AnalysisReport {
    letters: usize,
    index_of_coincidence: f64,
    key_length: KeyLengthEstimate,
    repeated_ngrams: usize,
    kasiski_factors: Vec<FactorCount>,
}

pub fn handle(mut args: AnalyzeArgs, format: OutputFormat) -> Result<()> {
    let text = normalize(&super::read_input(args.text.take())?);
    let report = analyze(text.as_bytes(), &args);

    if !print_json(&report, format)? {
        let style = if args.ascii {
            OutputStyle::new().ascii()
        } else {
            OutputStyle::new()
        };
        print_report(&report, &style);
    }
    Ok(())
}

fn analyze(text: &[u8], args: &AnalyzeArgs) -> AnalysisReport {
    let exam = kasiski::examine(text, DEFAULT_MIN_NGRAM, DEFAULT_MAX_NGRAM);
    let kasiski_factors = exam
        .candidate_lengths(args.factors)
        .into_iter()
        .map(|factor| FactorCount {
            factor,
            distances: exam.factor_counts.get(&factor).copied().unwrap_or_default(),
        })
        .collect();

    AnalysisReport {
        letters: text.len(),
        index_of_coincidence: index_of_coincidence(text),
        key_length: KeyLengthEstimator::new(args.max_key_length).estimate(text),
        repeated_ngrams: exam.repeats.len(),
        kasiski_factors,
    }
}

fn print_report(report: &AnalysisReport, style: &OutputStyle) {
    println!("{}", format_key_value("Letters", &report.letters.to_string(), style));
    println!(
        "{}",
        format_key_value(
            "Index of coincidence",
            &format!("{:.4}", report.index_of_coincidence),
            style
        )
    );
    println!(
        "{}",
        format_key_value(
            "Estimated key length",
            &report.key_length.length.to_string(),
            style
        )
    );

    print_section_header("Key length candidates", style);
    let mut table = create_table(style);
    table.set_header(vec![
        header_cell("Length", style),
        header_cell("Average IoC", style),
    ]);
    for score in &report.key_length.scores {
        let selected = score.length == report.key_length.length;
        table.add_row(vec![
            selected_cell(&score.length.to_string(), selected, style),
            selected_cell(&format!("{:.4}", score.average_ioc), selected, style),
        ]);
    }
    println!("{table}");

    print_section_header("Kasiski examination", style);
    println!(
        "{}",
        format_key_value("Repeated n-grams", &report.repeated_ngrams.to_string(), style)
    );
    if report.kasiski_factors.is_empty() {
        return;
    }
    let mut table = create_table(style);
    table.set_header(vec![
        header_cell("Factor", style),
        header_cell("Distances", style),
    ]);
    for count in &report.kasiski_factors {
        table.add_row(vec![
            numeric_cell(&count.factor.to_string()),
            numeric_cell(&count.distances.to_string()),
        ]);
    }
    println!("{table}");
}
