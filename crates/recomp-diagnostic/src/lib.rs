//! Diagnostic and error reporting for recomp.
//! recomp 的诊断和错误报告。
//!
//! This crate renders configuration errors using ariadne.
//! 本 crate 使用 ariadne 渲染配置错误。

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label, Severity};

use ariadne::{ColorGenerator, Label as AriadneLabel, Report, ReportKind, Source};

/// Render a diagnostic against its configuration string to stderr.
/// `filename` is only a display name; configuration strings usually come
/// from the command line, not a file.
/// 将诊断信息连同其配置字符串渲染到标准错误输出。`filename` 仅用于
/// 显示；配置字符串通常来自命令行而非文件。
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) {
    let kind = match diagnostic.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Advice => ReportKind::Advice,
    };

    let mut colors = ColorGenerator::new();
    let mut report = Report::build(kind, filename, diagnostic.span.start.0 as usize)
        .with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    for label in &diagnostic.labels {
        report = report.with_label(
            AriadneLabel::new((filename, label.span.range()))
                .with_message(&label.message)
                .with_color(colors.next()),
        );
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .eprint((filename, Source::from(source)))
        .unwrap();
}
