//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::result::{ComparisonReport, HarnessOutcome, RunReport, RunState};

/// Format a RunReport for human-readable terminal output.
///
/// Uses ANSI colors and Unicode box drawing for clear presentation.
/// Includes a checkmark for completed runs and a stop symbol for
/// cancelled ones.
pub fn format_run(report: &RunReport) -> String {
    let mut output = String::new();

    // Header with run outcome
    let header = match report.state {
        RunState::Cancelled => format!(
            "{} {} {}",
            "\u{25A0}".yellow().bold(),
            "CANCELLED".yellow().bold(),
            report.algorithm.display_name().bold()
        ),
        _ => format!(
            "{} {} {}",
            "\u{2713}".green().bold(),
            "COMPLETED".green().bold(),
            report.algorithm.display_name().bold()
        ),
    };

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    let comparisons_str = format!("Comparisons: {}", report.counters.comparisons);
    output.push_str(&format_box_line(&comparisons_str));

    let swaps_str = format!("Swaps: {}", report.counters.swaps);
    output.push_str(&format_box_line(&swaps_str));

    let accesses_str = format!("Array Accesses: {}", report.counters.array_accesses);
    output.push_str(&format_box_line(&accesses_str));

    let elapsed_str = format!("Elapsed: {:.1} ms", report.elapsed_ms);
    output.push_str(&format_box_line(&elapsed_str));

    output.push_str(&format_box_separator());

    let theory_str = format!("Theoretical Ops: {:.0}", report.theoretical_ops);
    output.push_str(&format_box_line(&theory_str));

    match report.accuracy {
        Some(accuracy) => {
            let accuracy_str = format!("Accuracy: {:.1}%", accuracy);
            let accuracy_colored = if accuracy >= 80.0 {
                accuracy_str.green()
            } else if accuracy >= 50.0 {
                accuracy_str.yellow()
            } else {
                accuracy_str.red()
            };
            output.push_str(&format_box_line(&accuracy_colored.to_string()));
        }
        None => {
            output.push_str(&format_box_line(&"Accuracy: -".dimmed().to_string()));
        }
    }

    let sorted_str = if report.sorted {
        "Sorted: yes".green().to_string()
    } else {
        "Sorted: no".yellow().to_string()
    };
    output.push_str(&format_box_line(&sorted_str));

    output.push_str(&format_box_bottom());
    output
}

/// Format a ComparisonReport as a per-algorithm table with a winners
/// section.
pub fn format_comparison(report: &ComparisonReport) -> String {
    let mut output = String::new();

    let header = format!(
        "{} {} elements, {:?} order",
        "Comparison:".bold(),
        report.size,
        report.shape
    );
    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    for entry in &report.entries {
        let line = match &entry.outcome {
            HarnessOutcome::Metrics(m) => format!(
                "{:<15} {:>9.1} ms {:>9} cmp {:>8} swp {:>5.1}%",
                entry.algorithm.display_name(),
                m.elapsed_ms,
                m.counters.comparisons,
                m.counters.swaps,
                m.accuracy
            ),
            HarnessOutcome::Skipped { .. } => format!(
                "{:<15} {}",
                entry.algorithm.display_name(),
                "skipped".dimmed()
            ),
            HarnessOutcome::Failed { message } => format!(
                "{:<15} {} {}",
                entry.algorithm.display_name(),
                "failed:".red().bold(),
                message.red()
            ),
        };
        output.push_str(&format_box_line(&line));
    }

    if let Some(summary) = &report.summary {
        output.push_str(&format_box_separator());
        let fastest = format!(
            "Fastest: {}",
            summary.fastest.display_name().green().bold()
        );
        output.push_str(&format_box_line(&fastest));
        let fewest_cmp = format!(
            "Fewest Comparisons: {}",
            summary.fewest_comparisons.display_name().green()
        );
        output.push_str(&format_box_line(&fewest_cmp));
        let fewest_swp = format!(
            "Fewest Swaps: {}",
            summary.fewest_swaps.display_name().green()
        );
        output.push_str(&format_box_line(&fewest_swp));
        let best_acc = format!(
            "Highest Accuracy: {}",
            summary.highest_accuracy.display_name().green()
        );
        output.push_str(&format_box_line(&best_acc));
        let tested = format!("Tested: {} of {}", summary.tested, report.entries.len());
        output.push_str(&format_box_line(&tested));
    }

    output.push_str(&format_box_bottom());
    output
}

// Box drawing helpers

const BOX_WIDTH: usize = 64;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = if visible_len < BOX_WIDTH - 2 {
        BOX_WIDTH - 2 - visible_len
    } else {
        0
    };
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dataset::Generator;
    use crate::harness::run_pass;
    use crate::scheduler::{CancelToken, Counters};
    use crate::types::{Algorithm, Shape};

    fn run_report(state: RunState, accuracy: Option<f64>) -> RunReport {
        RunReport {
            algorithm: Algorithm::Bubble,
            state,
            counters: Counters {
                comparisons: 15,
                swaps: 8,
                array_accesses: 46,
            },
            elapsed_ms: 230.0,
            accuracy,
            theoretical_ops: 18.0,
            sorted: state == RunState::Completed,
        }
    }

    #[test]
    fn test_format_completed_run() {
        let output = format_run(&run_report(RunState::Completed, Some(92.5)));
        assert!(output.contains("COMPLETED"));
        assert!(output.contains("Bubble Sort"));
        assert!(output.contains("Comparisons: 15"));
        assert!(output.contains("92.5%"));
        assert!(output.contains("Sorted: yes"));
    }

    #[test]
    fn test_format_cancelled_run() {
        let output = format_run(&run_report(RunState::Cancelled, None));
        assert!(output.contains("CANCELLED"));
        assert!(output.contains("Accuracy: -"));
        assert!(output.contains("Sorted: no"));
    }

    #[test]
    fn test_format_comparison_table() {
        let data = Generator::from_config(&Config::headless().seed(5))
            .generate(250, Shape::Random);
        let report =
            run_pass(&data, Shape::Random, &Config::headless(), &CancelToken::new()).unwrap();
        let output = format_comparison(&report);

        assert!(output.contains("250 elements"));
        assert!(output.contains("skipped"));
        assert!(output.contains("Merge Sort"));
        assert!(output.contains("Fastest:"));
        assert!(output.contains("Tested: 5 of 8"));
    }

    #[test]
    fn test_strip_ansi_codes() {
        let colored = "\x1b[32mgreen\x1b[0m";
        assert_eq!(strip_ansi_codes(colored), "green");
    }
}
