use std::fmt;

use super::draft::{CampaignDraft, DraftField};
use crate::error::ValidationError;

/// The four wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    BusinessProfile,
    ValueProposition,
    TargetMarket,
    ExecutionStrategy,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::BusinessProfile,
        Step::ValueProposition,
        Step::TargetMarket,
        Step::ExecutionStrategy,
    ];

    pub const FIRST: Step = Step::BusinessProfile;
    pub const LAST: Step = Step::ExecutionStrategy;

    /// 1-based position shown to the user.
    pub fn number(self) -> u8 {
        match self {
            Self::BusinessProfile => 1,
            Self::ValueProposition => 2,
            Self::TargetMarket => 3,
            Self::ExecutionStrategy => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.number() == number)
    }

    pub fn total() -> u8 {
        Self::LAST.number()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::BusinessProfile => "Business Profile",
            Self::ValueProposition => "Value Proposition",
            Self::TargetMarket => "Target Market",
            Self::ExecutionStrategy => "Execution Strategy",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::BusinessProfile => "Company Context",
            Self::ValueProposition => "Offer Details",
            Self::TargetMarket => "Audience Analysis",
            Self::ExecutionStrategy => "Campaign Logistics",
        }
    }

    /// Next step, saturating at the last one.
    pub fn next(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(Self::LAST)
    }

    /// Previous step, saturating at the first one.
    pub fn prev(self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(Self::FIRST)
    }

    /// Fields collected on this step, in prompt order.
    pub fn fields(self) -> &'static [DraftField] {
        match self {
            Self::BusinessProfile => &[DraftField::BusinessIndustry, DraftField::BusinessModel],
            Self::ValueProposition => &[
                DraftField::OfferType,
                DraftField::OfferPrice,
                DraftField::OfferDescription,
            ],
            Self::TargetMarket => &[DraftField::AudiencePersona, DraftField::AudienceGeo],
            Self::ExecutionStrategy => &[
                DraftField::Objective,
                DraftField::MonthlyBudget,
                DraftField::Timeframe,
                DraftField::BrandTone,
                DraftField::Channels,
            ],
        }
    }

    pub fn required_fields(self) -> &'static [DraftField] {
        match self {
            Self::BusinessProfile => &[DraftField::BusinessIndustry, DraftField::BusinessModel],
            Self::ValueProposition => &[DraftField::OfferType, DraftField::OfferDescription],
            Self::TargetMarket => &[DraftField::AudiencePersona, DraftField::AudienceGeo],
            Self::ExecutionStrategy => &[DraftField::Objective],
        }
    }

    pub fn is_required(self, field: DraftField) -> bool {
        self.required_fields().contains(&field)
    }

    pub fn validate(self, draft: &CampaignDraft) -> Result<(), ValidationError> {
        let missing: Vec<DraftField> = self
            .required_fields()
            .iter()
            .copied()
            .filter(|field| !draft.is_filled(*field))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields {
                step: self,
                fields: missing,
            })
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Validate every step in order, stopping at the first incomplete one.
pub fn validate_all(draft: &CampaignDraft) -> Result<(), ValidationError> {
    Step::ALL.into_iter().try_for_each(|step| step.validate(draft))
}
