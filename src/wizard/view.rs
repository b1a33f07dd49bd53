use crate::campaign::{CampaignDraft, Step};
use crate::error::{SubmissionError, ValidationError};
use crate::ui::style as ui;

pub fn print_banner() {
    println!();
    println!("  {}", ui::accent("V  VECTOR STRATEGY ENGINE"));
    println!(
        "  {}",
        ui::dim("Answer four short steps and the strategy agent drafts your campaign plan.")
    );
    println!();
}

pub fn print_step(step: Step) {
    println!();
    println!(
        "  {} {} {}",
        ui::accent(format!("[{}/{}]", step.number(), Step::total())),
        ui::header(step.title()),
        ui::dim(format!("· {}", step.subtitle()))
    );
    println!("  {}", ui::dim("─".repeat(50)));
}

pub fn print_validation_alert(err: &ValidationError) {
    println!();
    println!("  {} {}", ui::warning("!"), ui::warning("Required fields missing"));
    match err {
        ValidationError::MissingFields { fields, .. } => {
            println!("    {}", ui::dim("Please complete the required fields to proceed:"));
            for field in fields {
                println!("    {} {}", ui::yellow("›"), field.label());
            }
        }
        other => println!("    {other}"),
    }
}

pub fn print_submitting() {
    println!();
    println!(
        "  {} {}",
        ui::accent("⋯"),
        ui::header("Generating your strategy. This can take a minute or two...")
    );
}

pub fn print_submission_error(err: &SubmissionError) {
    println!();
    println!(
        "  {} {}",
        ui::error("✗"),
        ui::error("An error occurred during submission. Please try again.")
    );
    println!("    {}", ui::dim(err));
}

pub fn print_success(industry: &str, objective: &str) {
    println!();
    println!("  {} {}", ui::success("✓"), ui::success("STRATEGY GENERATED SUCCESSFULLY"));
    if !industry.is_empty() || !objective.is_empty() {
        println!(
            "    {}",
            ui::dim(format!("Based on your inputs for {industry} targeting {objective}."))
        );
    }
}

/// One-line-per-field recap of the draft before submission.
pub fn print_draft_summary(draft: &CampaignDraft) {
    println!();
    println!("  {}", ui::header("Campaign inputs"));
    for step in Step::ALL {
        for &field in step.fields() {
            let value = draft.get(field);
            if value.trim().is_empty() {
                continue;
            }
            println!("    {} {} {}", ui::cyan("›"), ui::dim(format!("{}:", field.label())), value);
        }
    }
}
