//! Fixed option lists offered by the select and chip widgets.

pub const BUSINESS_MODELS: &[&str] = &["B2B", "B2C", "D2C", "Marketplace", "Agency"];

pub const OFFER_TYPES: &[&str] = &[
    "Product",
    "Service",
    "Lead Magnet",
    "Webinar",
    "Consultation",
    "SaaS Trial",
];

pub const OBJECTIVES: &[&str] = &[
    "Leads",
    "Sales",
    "Bookings",
    "Brand Awareness",
    "App Installs",
    "Traffic",
];

pub const CHANNELS: &[&str] = &[
    "Paid Social",
    "Email Marketing",
    "Search Ads",
    "SEO/Content",
    "Organic Social",
    "Influencer",
    "Display Ads",
];

pub const TIMEFRAMES: &[&str] = &["14 days", "30 days", "60 days", "90 days", "Ongoing"];

pub const BRAND_TONES: &[&str] = &[
    "Professional",
    "Conversational",
    "Authority",
    "Playful",
    "Urgent",
    "Educational",
];

/// Default cap on how many channels a campaign may target.
pub const DEFAULT_MAX_CHANNELS: usize = 3;
