use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use jsonlint_core::Severity;
use serde::Serialize;

use crate::problems::{Problem, ProblemSource};

type DiagnosticReport<'a> = Report<'a, (&'a String, std::ops::Range<usize>)>;

/// Problems found in a single document.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub problems: Vec<Problem>,
}

/// Ariadne cannot point at the end of the input, so zero-width markers are widened to cover one
/// character, pulled back onto the last character when they sit past it.
fn label_range(problem: &Problem, char_len: usize) -> std::ops::Range<usize> {
    let from = problem.from.min(char_len.saturating_sub(1));
    let to = problem.to.max(from + 1).min(char_len.max(from));
    from..to
}

fn build_report<'a>(path: &'a String, char_len: usize, problem: &Problem) -> DiagnosticReport<'a> {
    let (kind, color) = match problem.severity {
        Severity::Error => (ReportKind::Error, Color::Red),
        Severity::Warning => (ReportKind::Warning, Color::Yellow),
    };
    let range = label_range(problem, char_len);

    let mut report = Report::build(kind, path, range.start)
        .with_message(&problem.message)
        .with_label(Label::new((path, range)).with_color(color));

    if problem.source == ProblemSource::Fallback {
        report.set_note(format!(
            "reported by the {} grammar; the validator accepted this document",
            "fallback".fg(Color::Blue)
        ));
    }

    report.finish()
}

pub fn print_human(path: &String, src: &String, problems: &[Problem]) -> anyhow::Result<()> {
    let char_len = src.chars().count();
    for problem in problems {
        build_report(path, char_len, problem).print((path, Source::from(src)))?;
    }
    Ok(())
}

pub fn print_json(reports: &[FileReport]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}
