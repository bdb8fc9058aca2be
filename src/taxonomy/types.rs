//! Taxonomy model — pure, value-typed enums with no I/O.
//!
//! Every variant here must have a non-empty mapping in [`super::mappers`];
//! that totality is asserted in this crate's test suite, not just assumed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Funding categories a discovery request can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FundingSearchCategory {
    InfrastructureFunding,
    StemEducation,
    EarlyChildhoodEducation,
    HigherEducation,
    VocationalTraining,
    HealthcareAccess,
    PublicHealth,
    RuralDevelopment,
    CommunityDevelopment,
    WomenEntrepreneurship,
    SmeSupport,
    EarlyStageStartups,
    DigitalInclusion,
    ResearchAndInnovation,
    EnvironmentalSustainability,
    ClimateAdaptation,
    RenewableEnergy,
    WaterAndSanitation,
    FoodSecurity,
    YouthEmployment,
    DisabilityInclusion,
    ArtsAndCulture,
    CivilSociety,
    MediaFreedom,
    AntiCorruption,
    RomaInclusion,
    RefugeeSupport,
    GenderEquality,
    ChildWelfare,
    ElderlyCare,
}

impl FundingSearchCategory {
    pub const ALL: &'static [FundingSearchCategory] = &[
        Self::InfrastructureFunding,
        Self::StemEducation,
        Self::EarlyChildhoodEducation,
        Self::HigherEducation,
        Self::VocationalTraining,
        Self::HealthcareAccess,
        Self::PublicHealth,
        Self::RuralDevelopment,
        Self::CommunityDevelopment,
        Self::WomenEntrepreneurship,
        Self::SmeSupport,
        Self::EarlyStageStartups,
        Self::DigitalInclusion,
        Self::ResearchAndInnovation,
        Self::EnvironmentalSustainability,
        Self::ClimateAdaptation,
        Self::RenewableEnergy,
        Self::WaterAndSanitation,
        Self::FoodSecurity,
        Self::YouthEmployment,
        Self::DisabilityInclusion,
        Self::ArtsAndCulture,
        Self::CivilSociety,
        Self::MediaFreedom,
        Self::AntiCorruption,
        Self::RomaInclusion,
        Self::RefugeeSupport,
        Self::GenderEquality,
        Self::ChildWelfare,
        Self::ElderlyCare,
    ];
}

/// Geographic scope for a discovery request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeographicScope {
    Bulgaria,
    EasternEurope,
    WesternBalkans,
    Balkans,
    EuMemberStates,
    CentralAsia,
    Global,
}

impl GeographicScope {
    pub const ALL: &'static [GeographicScope] = &[
        Self::Bulgaria,
        Self::EasternEurope,
        Self::WesternBalkans,
        Self::Balkans,
        Self::EuMemberStates,
        Self::CentralAsia,
        Self::Global,
    ];
}

/// Closed set of supported search engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "UPPERCASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchEngineType {
    Brave,
    Serper,
    Searxng,
    Tavily,
    Perplexica,
}

impl SearchEngineType {
    pub const ALL: &'static [SearchEngineType] = &[
        Self::Brave,
        Self::Serper,
        Self::Searxng,
        Self::Tavily,
        Self::Perplexica,
    ];

    /// Keyword-style engines want short (3-8 word) queries; the rest want
    /// long, AI-optimized natural language queries.
    pub fn is_keyword_engine(&self) -> bool {
        matches!(self, Self::Brave | Self::Serper | Self::Searxng)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brave => "brave",
            Self::Serper => "serper",
            Self::Searxng => "searxng",
            Self::Tavily => "tavily",
            Self::Perplexica => "perplexica",
        }
    }
}

/// Type of institution behind a funding source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FundingSourceType {
    GovernmentAgency,
    PrivateFoundation,
    CorporateFoundation,
    IntergovernmentalOrganization,
    Ngo,
    University,
    CommunityFoundation,
    ReligiousOrganization,
    MultilateralDevelopmentBank,
    TradeAssociation,
    CrowdfundingPlatform,
    VentureFund,
}

impl FundingSourceType {
    pub const ALL: &'static [FundingSourceType] = &[
        Self::GovernmentAgency,
        Self::PrivateFoundation,
        Self::CorporateFoundation,
        Self::IntergovernmentalOrganization,
        Self::Ngo,
        Self::University,
        Self::CommunityFoundation,
        Self::ReligiousOrganization,
        Self::MultilateralDevelopmentBank,
        Self::TradeAssociation,
        Self::CrowdfundingPlatform,
        Self::VentureFund,
    ];
}

/// The mechanism by which funding is disbursed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FundingMechanism {
    Grant,
    Scholarship,
    Fellowship,
    Loan,
    Equity,
    PrizeCompetition,
    MatchingFund,
    TechnicalAssistance,
}

impl FundingMechanism {
    pub const ALL: &'static [FundingMechanism] = &[
        Self::Grant,
        Self::Scholarship,
        Self::Fellowship,
        Self::Loan,
        Self::Equity,
        Self::PrizeCompetition,
        Self::MatchingFund,
        Self::TechnicalAssistance,
    ];
}

/// Project scale, each carrying a typical award range (scale-2 decimal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectScale {
    Micro,
    Small,
    Medium,
    Large,
    National,
}

impl ProjectScale {
    pub const ALL: &'static [ProjectScale] =
        &[Self::Micro, Self::Small, Self::Medium, Self::Large, Self::National];

    /// `(min_amount, max_amount)` in whatever currency unit the caller uses,
    /// scale 2.
    pub fn amount_range(&self) -> (Decimal, Decimal) {
        match self {
            Self::Micro => (Decimal::new(0, 2), Decimal::new(500_000, 2)),
            Self::Small => (Decimal::new(500_000, 2), Decimal::new(2_500_000, 2)),
            Self::Medium => (Decimal::new(2_500_000, 2), Decimal::new(25_000_000, 2)),
            Self::Large => (Decimal::new(25_000_000, 2), Decimal::new(100_000_000, 2)),
            Self::National => (Decimal::new(100_000_000, 2), Decimal::new(1_000_000_000_00, 2)),
        }
    }
}

/// Population(s) a funding source is intended to benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeneficiaryPopulation {
    Children,
    Youth,
    Women,
    Elderly,
    PeopleWithDisabilities,
    RuralCommunities,
    UrbanPoor,
    Refugees,
    Roma,
    Students,
    Researchers,
    Entrepreneurs,
    Farmers,
    Unemployed,
    LowIncomeFamilies,
    EthnicMinorities,
    Veterans,
    IndigenousCommunities,
}

impl BeneficiaryPopulation {
    pub const ALL: &'static [BeneficiaryPopulation] = &[
        Self::Children,
        Self::Youth,
        Self::Women,
        Self::Elderly,
        Self::PeopleWithDisabilities,
        Self::RuralCommunities,
        Self::UrbanPoor,
        Self::Refugees,
        Self::Roma,
        Self::Students,
        Self::Researchers,
        Self::Entrepreneurs,
        Self::Farmers,
        Self::Unemployed,
        Self::LowIncomeFamilies,
        Self::EthnicMinorities,
        Self::Veterans,
        Self::IndigenousCommunities,
    ];
}

/// Type of organization eligible to receive funding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipientOrganizationType {
    Nonprofit,
    School,
    University,
    Municipality,
    SocialEnterprise,
    Cooperative,
    SmallBusiness,
    Startup,
    CommunityGroup,
    ReligiousInstitution,
    ResearchInstitute,
    Hospital,
    Individual,
    IndividualResearcher,
}

impl RecipientOrganizationType {
    pub const ALL: &'static [RecipientOrganizationType] = &[
        Self::Nonprofit,
        Self::School,
        Self::University,
        Self::Municipality,
        Self::SocialEnterprise,
        Self::Cooperative,
        Self::SmallBusiness,
        Self::Startup,
        Self::CommunityGroup,
        Self::ReligiousInstitution,
        Self::ResearchInstitute,
        Self::Hospital,
        Self::Individual,
        Self::IndividualResearcher,
    ];
}

/// Query language: ISO 639-1 code + native name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryLanguage {
    English,
    Bulgarian,
    Romanian,
    Serbian,
    Ukrainian,
    Polish,
    German,
    French,
    Turkish,
}

impl QueryLanguage {
    pub const ALL: &'static [QueryLanguage] = &[
        Self::English,
        Self::Bulgarian,
        Self::Romanian,
        Self::Serbian,
        Self::Ukrainian,
        Self::Polish,
        Self::German,
        Self::French,
        Self::Turkish,
    ];

    pub fn iso_code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Bulgarian => "bg",
            Self::Romanian => "ro",
            Self::Serbian => "sr",
            Self::Ukrainian => "uk",
            Self::Polish => "pl",
            Self::German => "de",
            Self::French => "fr",
            Self::Turkish => "tr",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Bulgarian => "Български",
            Self::Romanian => "Română",
            Self::Serbian => "Српски",
            Self::Ukrainian => "Українська",
            Self::Polish => "Polski",
            Self::German => "Deutsch",
            Self::French => "Français",
            Self::Turkish => "Türkçe",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_list_has_no_duplicates_and_matches_const_len() {
        let mut seen = std::collections::HashSet::new();
        for c in FundingSearchCategory::ALL {
            assert!(seen.insert(*c), "duplicate category in ALL: {c:?}");
        }
        assert!(FundingSearchCategory::ALL.len() >= 25);
    }

    #[test]
    fn search_engine_keyword_classification_matches_spec() {
        assert!(SearchEngineType::Brave.is_keyword_engine());
        assert!(SearchEngineType::Serper.is_keyword_engine());
        assert!(SearchEngineType::Searxng.is_keyword_engine());
        assert!(!SearchEngineType::Tavily.is_keyword_engine());
        assert!(!SearchEngineType::Perplexica.is_keyword_engine());
    }

    #[test]
    fn project_scale_ranges_are_monotonic() {
        for scale in ProjectScale::ALL {
            let (min, max) = scale.amount_range();
            assert!(min <= max, "{scale:?} has min > max");
        }
    }

    #[test]
    fn query_language_codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for lang in QueryLanguage::ALL {
            assert!(seen.insert(lang.iso_code()), "duplicate ISO code for {lang:?}");
        }
    }
}
