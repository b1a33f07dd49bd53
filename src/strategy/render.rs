//! Terminal and Markdown output for strategy reports.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

use super::report::{ChannelCard, StrategyReport, TimelinePhase};
use crate::campaign::CampaignDraft;
use crate::ui::style as ui;

pub const REPORT_TITLE: &str = "Vector Strategy Engine";
pub const REPORT_SUBTITLE: &str = "Marketing Campaign Strategy Report";
pub const DISPLAY_NOTE: &str =
    "We received a response but couldn't auto-format the strategy. Displaying raw output below.";
pub const ATTRIBUTION: &str = "Generated by the strategy agent";

fn push_line(out: &mut String, line: impl AsRef<str>) {
    out.push_str(line.as_ref());
    out.push('\n');
}

fn push_phase(out: &mut String, phase: &TimelinePhase) {
    push_line(out, format!("### {}. {}", phase.number, phase.label));
    match phase.tasks.as_slice() {
        [] => {}
        [only] => push_line(out, only),
        tasks => {
            for task in tasks {
                push_line(out, format!("- {task}"));
            }
        }
    }
    out.push('\n');
}

fn push_channel(out: &mut String, card: &ChannelCard) {
    match card.badge() {
        Some(badge) => push_line(out, format!("### {} ({badge})", card.name)),
        None => push_line(out, format!("### {}", card.name)),
    }
    let detail = &card.detail;
    if let Some(strategy) = &detail.strategy {
        push_line(out, strategy);
    }
    if let Some(targeting) = &detail.targeting {
        push_line(out, format!("- **Targeting:** {targeting}"));
    }
    if !detail.topics.is_empty() {
        push_line(out, format!("- **Content Topics:** {}", detail.topics.join(" · ")));
    }
    if let Some(kpis) = card.kpi_line() {
        push_line(out, format!("- **Success Metrics:** {kpis}"));
    }
    out.push('\n');
}

/// Printable Markdown rendition of a report.
pub fn to_markdown(report: &StrategyReport) -> String {
    let mut out = String::new();
    push_line(&mut out, format!("# {REPORT_TITLE}"));
    push_line(&mut out, format!("_{REPORT_SUBTITLE}_"));
    out.push('\n');

    push_line(&mut out, "## Executive Summary");
    push_line(&mut out, &report.overview);
    out.push('\n');
    push_line(&mut out, "**Core Messaging**");
    push_line(&mut out, format!("> \"{}\"", report.core_message));
    out.push('\n');

    if let Some(panel) = &report.validation {
        push_line(&mut out, "## Strategy Validation");
        push_line(&mut out, &panel.summary);
        out.push('\n');
        for issue in &panel.issues {
            push_line(&mut out, format!("- **[{}] {}**", issue.severity.to_uppercase(), issue.kind));
            push_line(&mut out, format!("  - Observation: {}", issue.evidence));
            push_line(&mut out, format!("  - Recommendation: {}", issue.recommendation));
        }
        out.push('\n');
    }

    push_line(&mut out, "## Funnel Strategy");
    push_line(&mut out, format!("- **Top Funnel (Awareness):** {}", report.funnel.top));
    push_line(&mut out, format!("- **Middle Funnel (Consideration):** {}", report.funnel.middle));
    push_line(&mut out, format!("- **Bottom Funnel (Conversion):** {}", report.funnel.bottom));
    out.push('\n');

    push_line(&mut out, "## Key Metrics");
    push_line(&mut out, "**Leading Indicators**");
    for kpi in &report.kpis.leading {
        push_line(&mut out, format!("- {kpi}"));
    }
    out.push('\n');
    push_line(&mut out, "**Lagging Indicators**");
    for kpi in &report.kpis.lagging {
        push_line(&mut out, format!("- {kpi}"));
    }
    out.push('\n');

    if let Some(channels) = &report.channels {
        push_line(&mut out, "## Channel Strategy");
        if !report.budget_allocation.is_empty() {
            let budget = report
                .budget_allocation
                .iter()
                .map(|line| format!("{}: **{}**", line.label, line.amount))
                .collect::<Vec<_>>()
                .join(" | ");
            push_line(&mut out, budget);
        }
        out.push('\n');
        for card in channels {
            push_channel(&mut out, card);
        }
    }

    if let Some(timeline) = &report.timeline {
        push_line(&mut out, "## Execution Timeline");
        for phase in timeline {
            push_phase(&mut out, phase);
        }
    }

    if !report.risks.is_empty() {
        push_line(&mut out, "## Risk Assessment");
        for risk in &report.risks {
            push_line(&mut out, format!("- {}", risk.description));
            if let Some(mitigation) = &risk.mitigation {
                push_line(&mut out, format!("  - _Mitigation:_ {mitigation}"));
            }
        }
        out.push('\n');
    }

    out
}

/// Markdown for a response that could not be structured.
pub fn fallback_markdown(text: &str, draft: &CampaignDraft) -> String {
    let mut out = String::new();
    push_line(&mut out, "# Your Marketing Strategy");
    push_line(
        &mut out,
        format!(
            "Based on your inputs for **{}** targeting **{}**.",
            draft.business_industry, draft.objective
        ),
    );
    out.push('\n');
    push_line(&mut out, format!("> **Display Note:** {DISPLAY_NOTE}"));
    out.push('\n');
    push_line(&mut out, text.trim_end());
    out.push('\n');
    push_line(&mut out, format!("_{ATTRIBUTION}_"));
    out
}

fn section(title: &str) {
    println!();
    println!("  {}", ui::accent(title));
    println!("  {}", ui::dim("─".repeat(50)));
}

fn bullet(text: &str) {
    println!("    {} {text}", ui::cyan("›"));
}

pub fn print_report(report: &StrategyReport) {
    println!();
    println!("  {}", ui::header(REPORT_TITLE.to_uppercase()));
    println!("  {}", ui::dim(REPORT_SUBTITLE));

    section("Executive Summary");
    println!("  {}", report.overview);
    println!();
    println!("  {}", ui::dim("CORE MESSAGING"));
    println!("  {}", ui::quote(format!("\"{}\"", report.core_message)));

    if let Some(panel) = &report.validation {
        section("Strategy Validation");
        println!("  {} {}", ui::warning("!"), panel.summary);
        for issue in &panel.issues {
            let badge = format!("[{}]", issue.severity.to_uppercase());
            let badge = if issue.blocking { ui::error(badge) } else { ui::warning(badge) };
            println!();
            println!("    {badge} {}", ui::header(&issue.kind));
            println!("    {} {}", ui::dim("Observation:"), issue.evidence);
            println!("    {} {}", ui::cyan("Recommendation:"), issue.recommendation);
        }
    }

    section("Funnel Strategy");
    for (stage, name, text) in [
        ("AWARENESS", "Top Funnel", &report.funnel.top),
        ("CONSIDERATION", "Middle Funnel", &report.funnel.middle),
        ("CONVERSION", "Bottom Funnel", &report.funnel.bottom),
    ] {
        println!("  {} {}", ui::cyan(stage), ui::header(name));
        println!("    {text}");
    }

    section("Key Metrics");
    println!("  {}", ui::dim("LEADING INDICATORS"));
    report.kpis.leading.iter().for_each(|kpi| bullet(kpi));
    println!("  {}", ui::dim("LAGGING INDICATORS"));
    report.kpis.lagging.iter().for_each(|kpi| bullet(kpi));

    if let Some(channels) = &report.channels {
        section("Channel Strategy");
        if !report.budget_allocation.is_empty() {
            let budget = report
                .budget_allocation
                .iter()
                .map(|line| format!("{}: {}", line.label, ui::value(&line.amount)))
                .collect::<Vec<_>>()
                .join("  ");
            println!("  {budget}");
        }
        for card in channels {
            println!();
            let badge = card.badge().map(ui::value).unwrap_or_default();
            println!("  {} {} {badge}", ui::dim(card.kind.marker()), ui::header(&card.name));
            let detail = &card.detail;
            if let Some(strategy) = &detail.strategy {
                println!("    {strategy}");
            }
            if let Some(targeting) = &detail.targeting {
                println!("    {} {targeting}", ui::dim("Targeting:"));
            }
            if !detail.topics.is_empty() {
                println!("    {} {}", ui::dim("Content Topics:"), detail.topics.join(" · "));
            }
            if let Some(kpis) = card.kpi_line() {
                println!("    {} {kpis}", ui::dim("Success Metrics:"));
            }
        }
    }

    if let Some(timeline) = &report.timeline {
        section("Execution Timeline");
        for phase in timeline {
            println!("  {} {}", ui::accent(format!("{}.", phase.number)), ui::header(&phase.label));
            match phase.tasks.as_slice() {
                [only] => println!("    {only}"),
                tasks => tasks.iter().for_each(|task| bullet(task)),
            }
        }
    }

    if !report.risks.is_empty() {
        section("Risk Assessment");
        for risk in &report.risks {
            println!("  {} {}", ui::warning("•"), risk.description);
            if let Some(mitigation) = &risk.mitigation {
                println!("    {} {}", ui::dim("Mitigation:"), ui::quote(mitigation));
            }
        }
    }
    println!();
}

/// Style one Markdown line for the terminal: headings, bullets and quotes.
pub fn style_markdown_line(line: &str) -> String {
    let trimmed = line.trim_start();
    if let Some(heading) = trimmed.strip_prefix('#') {
        return ui::header(heading.trim_start_matches('#').trim());
    }
    if let Some(item) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
        let indent = &line[..line.len() - trimmed.len()];
        return format!("{indent}{} {item}", ui::cyan("›"));
    }
    if let Some(quoted) = trimmed.strip_prefix('>') {
        return ui::dim(quoted.trim());
    }
    line.to_string()
}

pub fn print_markdown(markdown: &str) {
    println!();
    for line in markdown.lines() {
        println!("  {}", style_markdown_line(line));
    }
    println!();
}

/// Write a report into `dir` under a timestamped name.
pub fn export_markdown(dir: &Path, markdown: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report directory: {}", dir.display()))?;
    let file_name = format!("vector-strategy-{}.md", Local::now().format("%Y%m%d-%H%M%S"));
    let path = dir.join(file_name);
    fs::write(&path, markdown)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(path)
}
