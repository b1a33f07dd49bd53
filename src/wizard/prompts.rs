use anyhow::Result;

use crate::campaign::options::{BRAND_TONES, BUSINESS_MODELS, OBJECTIVES, OFFER_TYPES, TIMEFRAMES};
use crate::campaign::{DraftField, Step};
use crate::ui::widgets::{prompt_chip_group, prompt_select, prompt_text, prompt_text_area};

use super::controller::WizardController;

/// How a field is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    Text { hint: &'static str },
    TextArea { hint: &'static str },
    Select(&'static [&'static str]),
    Chips,
}

pub fn input_for(field: DraftField) -> FieldInput {
    match field {
        DraftField::BusinessIndustry => FieldInput::Text {
            hint: "e.g. Enterprise SaaS, Financial Services",
        },
        DraftField::BusinessModel => FieldInput::Select(BUSINESS_MODELS),
        DraftField::OfferType => FieldInput::Select(OFFER_TYPES),
        DraftField::OfferPrice => FieldInput::Text {
            hint: "e.g. $5,000 / month retainer",
        },
        DraftField::OfferDescription => FieldInput::TextArea {
            hint: "core deliverables and unique selling points",
        },
        DraftField::AudiencePersona => FieldInput::TextArea {
            hint: "the decision maker: role, challenges, objectives",
        },
        DraftField::AudienceGeo => FieldInput::Text {
            hint: "e.g. North America, EMEA",
        },
        DraftField::Objective => FieldInput::Select(OBJECTIVES),
        DraftField::MonthlyBudget => FieldInput::Text { hint: "e.g. $10,000" },
        DraftField::Timeframe => FieldInput::Select(TIMEFRAMES),
        DraftField::BrandTone => FieldInput::Select(BRAND_TONES),
        DraftField::Channels => FieldInput::Chips,
    }
}

fn field_label(step: Step, field: DraftField, max_channels: usize) -> String {
    let label = match field {
        DraftField::Channels => format!("{} (select max {max_channels})", field.label()),
        other => other.label().to_string(),
    };
    if step.is_required(field) {
        format!("{label} *")
    } else {
        label
    }
}

/// Prompt every field of the active step, pre-filled with the draft.
pub fn prompt_step(wizard: &mut WizardController) -> Result<()> {
    let step = wizard.step();
    for &field in step.fields() {
        let required = step.is_required(field);
        let label = field_label(step, field, wizard.max_channels());
        let current = wizard.draft().get(field);

        match input_for(field) {
            FieldInput::Text { hint } => {
                let value = prompt_text(&label, hint, &current, required)?;
                wizard.set_field(field, value)?;
            }
            FieldInput::TextArea { hint } => {
                let value = prompt_text_area(&label, hint, &current, required)?;
                wizard.set_field(field, value)?;
            }
            FieldInput::Select(options) => {
                let value = prompt_select(&label, options, &current, required)?;
                wizard.set_field(field, value)?;
            }
            FieldInput::Chips => {
                let selected = prompt_chip_group(&label, wizard.channel_group())?;
                wizard.set_channels(selected)?;
            }
        }
    }
    Ok(())
}
