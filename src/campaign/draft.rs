use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

use crate::error::ValidationError;

/// Campaign parameters collected across the wizard steps.
///
/// Field names match the payload the agent workflow expects, so the draft is
/// serialized as-is into `webhookParams`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CampaignDraft {
    pub business_industry: String,
    pub business_model: String,
    pub offer_type: String,
    pub offer_description: String,
    pub offer_price: String,
    pub objective: String,
    pub audience_persona: String,
    pub audience_geo: String,
    pub monthly_budget: String,
    pub channels: Vec<String>,
    pub timeframe: String,
    pub brand_tone: String,
}

/// Every field of a [`CampaignDraft`], in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DraftField {
    BusinessIndustry,
    BusinessModel,
    OfferType,
    OfferPrice,
    OfferDescription,
    AudiencePersona,
    AudienceGeo,
    Objective,
    MonthlyBudget,
    Timeframe,
    BrandTone,
    Channels,
}

impl DraftField {
    pub fn label(self) -> &'static str {
        match self {
            Self::BusinessIndustry => "Industry / Sector",
            Self::BusinessModel => "Business Model",
            Self::OfferType => "Offer Type",
            Self::OfferPrice => "Price Point",
            Self::OfferDescription => "Value Proposition",
            Self::AudiencePersona => "Audience Persona",
            Self::AudienceGeo => "Target Geography",
            Self::Objective => "Primary Objective",
            Self::MonthlyBudget => "Monthly Budget",
            Self::Timeframe => "Timeline",
            Self::BrandTone => "Brand Tone",
            Self::Channels => "Preferred Channels",
        }
    }

    /// Wire name used in the serialized draft.
    pub fn key(self) -> &'static str {
        match self {
            Self::BusinessIndustry => "business_industry",
            Self::BusinessModel => "business_model",
            Self::OfferType => "offer_type",
            Self::OfferPrice => "offer_price",
            Self::OfferDescription => "offer_description",
            Self::AudiencePersona => "audience_persona",
            Self::AudienceGeo => "audience_geo",
            Self::Objective => "objective",
            Self::MonthlyBudget => "monthly_budget",
            Self::Timeframe => "timeframe",
            Self::BrandTone => "brand_tone",
            Self::Channels => "channels",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl CampaignDraft {
    /// Current value of a scalar field. `Channels` yields the selections
    /// joined with ", ".
    pub fn get(&self, field: DraftField) -> String {
        match field {
            DraftField::Channels => self.channels.join(", "),
            scalar => self.scalar(scalar).map(String::clone).unwrap_or_default(),
        }
    }

    /// Overwrite a scalar field. Setting `Channels` is ignored here; use
    /// [`CampaignDraft::set_channels`] so the selection cap is enforced.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        if let Some(slot) = self.scalar_mut(field) {
            *slot = value.into();
        }
    }

    pub fn set_channels(&mut self, channels: Vec<String>, max: usize) -> Result<(), ValidationError> {
        if channels.len() > max {
            return Err(ValidationError::TooManySelections {
                field: DraftField::Channels,
                max,
            });
        }
        self.channels = channels;
        Ok(())
    }

    /// A field is filled when it holds something other than whitespace.
    pub fn is_filled(&self, field: DraftField) -> bool {
        match field {
            DraftField::Channels => !self.channels.is_empty(),
            scalar => self
                .scalar(scalar)
                .is_some_and(|value| !value.trim().is_empty()),
        }
    }

    /// Overlay every non-empty field of `seed` onto `self`.
    pub fn merge_from(&mut self, seed: &CampaignDraft) {
        for field in DraftField::iter() {
            if field == DraftField::Channels {
                if !seed.channels.is_empty() {
                    self.channels.clone_from(&seed.channels);
                }
            } else if seed.is_filled(field) {
                self.set(field, seed.get(field));
            }
        }
    }

    pub fn to_webhook_params(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn scalar(&self, field: DraftField) -> Option<&String> {
        Some(match field {
            DraftField::BusinessIndustry => &self.business_industry,
            DraftField::BusinessModel => &self.business_model,
            DraftField::OfferType => &self.offer_type,
            DraftField::OfferPrice => &self.offer_price,
            DraftField::OfferDescription => &self.offer_description,
            DraftField::AudiencePersona => &self.audience_persona,
            DraftField::AudienceGeo => &self.audience_geo,
            DraftField::Objective => &self.objective,
            DraftField::MonthlyBudget => &self.monthly_budget,
            DraftField::Timeframe => &self.timeframe,
            DraftField::BrandTone => &self.brand_tone,
            DraftField::Channels => return None,
        })
    }

    fn scalar_mut(&mut self, field: DraftField) -> Option<&mut String> {
        Some(match field {
            DraftField::BusinessIndustry => &mut self.business_industry,
            DraftField::BusinessModel => &mut self.business_model,
            DraftField::OfferType => &mut self.offer_type,
            DraftField::OfferPrice => &mut self.offer_price,
            DraftField::OfferDescription => &mut self.offer_description,
            DraftField::AudiencePersona => &mut self.audience_persona,
            DraftField::AudienceGeo => &mut self.audience_geo,
            DraftField::Objective => &mut self.objective,
            DraftField::MonthlyBudget => &mut self.monthly_budget,
            DraftField::Timeframe => &mut self.timeframe,
            DraftField::BrandTone => &mut self.brand_tone,
            DraftField::Channels => return None,
        })
    }
}
