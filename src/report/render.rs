//! Plain-text rendering of a [`Page`].

use crate::session::{ChartSection, Notice, NoticeLevel, Page, Presentation};
use std::fmt::Write;

const RULE: &str = "===================================================================";
const BAR_WIDTH: usize = 40;
const PREVIEW_TEXT_CHARS: usize = 60;

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}

fn notice_line(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Success => "ok",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };
    format!("[{tag}] {}", notice.message)
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}");
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
}

pub fn render_text(page: &Page) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  Review Sentiment Dashboard");
    let _ = writeln!(out, "  Source: {}", page.source);
    let _ = writeln!(out, "{RULE}");

    for notice in &page.notices {
        let _ = writeln!(out, "{}", notice_line(notice));
    }

    if let Some(manual) = &page.manual {
        heading(&mut out, "Try Sentiment Analysis Yourself");
        let _ = writeln!(out, "{}", notice_line(&manual.notice));
    }

    if let Some(presentation) = &page.presentation {
        render_presentation(&mut out, presentation);
    }

    let _ = writeln!(out, "\n{RULE}");
    out
}

fn render_presentation(out: &mut String, p: &Presentation) {
    heading(out, "Preview of data");
    let _ = writeln!(out, "{:<18} {:>4}  {:<8}  Review", "Title", "Year", "Label");
    for record in &p.preview {
        let _ = writeln!(
            out,
            "{:<18} {:>4}  {:<8}  {}",
            record.title,
            record.year,
            record.sentiment.as_str(),
            truncate(&record.review.replace('\n', " "), PREVIEW_TEXT_CHARS)
        );
    }
    let _ = writeln!(out, "({} records)", p.total_records);

    heading(out, "Overall Sentiment Distribution");
    let max = p.overall.counts.iter().map(|c| c.count).max().unwrap_or(0) as f64;
    for entry in &p.overall.counts {
        let _ = writeln!(
            out,
            "{:<9} {:>6}  {}",
            entry.sentiment.as_str(),
            entry.count,
            bar(entry.count as f64, max)
        );
    }

    heading(out, "Sentiment Pie Chart for a Specific Show");
    match &p.pie.chart {
        ChartSection::Rendered { chart } => {
            let _ = writeln!(out, "{}", chart.title);
            for slice in &chart.slices {
                let _ = writeln!(
                    out,
                    "  {:<9} {:>6}  {:>6}",
                    slice.sentiment.as_str(),
                    slice.count,
                    slice.label()
                );
            }
        }
        ChartSection::Skipped { warning } => {
            let _ = writeln!(out, "{}", notice_line(warning));
        }
    }

    heading(out, "Compare Sentiments Between Two Shows");
    match &p.comparison.chart {
        ChartSection::Rendered { chart } => {
            let width = chart.first.chars().count().max(chart.second.chars().count());
            for entry in &chart.bars {
                let _ = writeln!(out, "{}", entry.sentiment);
                let _ = writeln!(
                    out,
                    "  {:<width$} {:>6.1}%  {}",
                    chart.first,
                    entry.first,
                    bar(entry.first, chart.y_range.1)
                );
                let _ = writeln!(
                    out,
                    "  {:<width$} {:>6.1}%  {}",
                    chart.second,
                    entry.second,
                    bar(entry.second, chart.y_range.1)
                );
            }
        }
        ChartSection::Skipped { warning } => {
            let _ = writeln!(out, "{}", notice_line(warning));
        }
    }
}
