//! Taxonomy mappers — total, pure functions from taxonomy values to
//! search-oriented text. No I/O, no randomness, no shared state: same input
//! always yields the same output, which is what lets [`super::types`] stay
//! exhaustively testable.

use super::types::{
    BeneficiaryPopulation, FundingMechanism, FundingSearchCategory, FundingSourceType,
    GeographicScope, RecipientOrganizationType,
};

/// Short keyword seeds a keyword-style search engine can combine with a
/// category and geographic scope. Always non-empty.
pub fn category_to_keywords(category: FundingSearchCategory) -> &'static [&'static str] {
    use FundingSearchCategory::*;
    match category {
        InfrastructureFunding => &["infrastructure grant", "infrastructure funding"],
        StemEducation => &["STEM education grant", "science education funding"],
        EarlyChildhoodEducation => &["early childhood education grant", "preschool funding"],
        HigherEducation => &["higher education grant", "university funding"],
        VocationalTraining => &["vocational training grant", "skills training funding"],
        HealthcareAccess => &["healthcare access grant", "health equity funding"],
        PublicHealth => &["public health grant", "community health funding"],
        RuralDevelopment => &["rural development grant", "rural funding program"],
        CommunityDevelopment => &["community development grant", "community fund"],
        WomenEntrepreneurship => &["women entrepreneurship grant", "women-owned business funding"],
        SmeSupport => &["SME grant", "small business funding"],
        EarlyStageStartups => &["startup grant", "early stage funding"],
        DigitalInclusion => &["digital inclusion grant", "digital access funding"],
        ResearchAndInnovation => &["research grant", "innovation funding"],
        EnvironmentalSustainability => &["environmental grant", "sustainability funding"],
        ClimateAdaptation => &["climate adaptation grant", "climate resilience funding"],
        RenewableEnergy => &["renewable energy grant", "clean energy funding"],
        WaterAndSanitation => &["water sanitation grant", "clean water funding"],
        FoodSecurity => &["food security grant", "food security funding"],
        YouthEmployment => &["youth employment grant", "youth jobs funding"],
        DisabilityInclusion => &["disability inclusion grant", "accessibility funding"],
        ArtsAndCulture => &["arts grant", "cultural heritage funding"],
        CivilSociety => &["civil society grant", "NGO capacity funding"],
        MediaFreedom => &["media freedom grant", "independent journalism funding"],
        AntiCorruption => &["anti-corruption grant", "governance funding"],
        RomaInclusion => &["Roma inclusion grant", "Roma integration funding"],
        RefugeeSupport => &["refugee support grant", "refugee assistance funding"],
        GenderEquality => &["gender equality grant", "women's rights funding"],
        ChildWelfare => &["child welfare grant", "child protection funding"],
        ElderlyCare => &["elderly care grant", "senior services funding"],
    }
}

/// A longer natural-language description suitable for AI-optimized queries
/// and for the LLM prompt that seeds them.
pub fn category_to_conceptual_description(category: FundingSearchCategory) -> &'static str {
    use FundingSearchCategory::*;
    match category {
        InfrastructureFunding => {
            "funding programs that support building or upgrading physical infrastructure"
        }
        StemEducation => "grant programs supporting science, technology, engineering and math education",
        EarlyChildhoodEducation => {
            "funding for early childhood education and preschool programs"
        }
        HigherEducation => "grants and scholarships supporting university and higher education",
        VocationalTraining => "funding for vocational and skills-based training programs",
        HealthcareAccess => "grants that improve access to healthcare services",
        PublicHealth => "funding for public health initiatives and community health programs",
        RuralDevelopment => "grant programs supporting economic development in rural areas",
        CommunityDevelopment => "funding for local community development initiatives",
        WomenEntrepreneurship => "grants supporting women-led businesses and entrepreneurship",
        SmeSupport => "funding programs supporting small and medium enterprises",
        EarlyStageStartups => "grants and funding for early-stage startup companies",
        DigitalInclusion => "funding to expand digital access and technology literacy",
        ResearchAndInnovation => "grants supporting scientific research and innovation",
        EnvironmentalSustainability => "funding for environmental sustainability projects",
        ClimateAdaptation => "grants supporting climate change adaptation and resilience",
        RenewableEnergy => "funding for renewable and clean energy projects",
        WaterAndSanitation => "grants supporting clean water and sanitation infrastructure",
        FoodSecurity => "funding programs addressing food security and nutrition",
        YouthEmployment => "grants supporting youth employment and job training",
        DisabilityInclusion => "funding that improves inclusion for people with disabilities",
        ArtsAndCulture => "grants supporting arts, culture and heritage preservation",
        CivilSociety => "funding that strengthens civil society organizations",
        MediaFreedom => "grants supporting independent media and press freedom",
        AntiCorruption => "funding for anti-corruption and good governance initiatives",
        RomaInclusion => "grants supporting Roma community inclusion and integration",
        RefugeeSupport => "funding programs assisting refugees and displaced persons",
        GenderEquality => "grants advancing gender equality and women's rights",
        ChildWelfare => "funding supporting child welfare and protection programs",
        ElderlyCare => "grants supporting elderly care and senior services",
    }
}

/// Short keyword modifiers describing a geographic scope.
pub fn scope_to_keywords(scope: GeographicScope) -> &'static [&'static str] {
    use GeographicScope::*;
    match scope {
        Bulgaria => &["Bulgaria"],
        EasternEurope => &["Eastern Europe"],
        WesternBalkans => &["Western Balkans"],
        Balkans => &["Balkans"],
        EuMemberStates => &["European Union", "EU member states"],
        CentralAsia => &["Central Asia"],
        Global => &["international", "worldwide"],
    }
}

/// Longer natural-language description of a geographic scope, for
/// AI-optimized prompts where a bare keyword reads unnaturally.
pub fn scope_to_conceptual_description(scope: GeographicScope) -> &'static str {
    use GeographicScope::*;
    match scope {
        Bulgaria => "organizations operating in Bulgaria",
        EasternEurope => "organizations operating in Eastern Europe",
        WesternBalkans => "organizations operating in the Western Balkans",
        Balkans => "organizations operating in the Balkans",
        EuMemberStates => "organizations operating within European Union member states",
        CentralAsia => "organizations operating in Central Asia",
        Global => "organizations operating anywhere in the world",
    }
}

/// Keyword fragment describing who a funding source is expected to serve.
pub fn beneficiary_to_keywords(population: BeneficiaryPopulation) -> &'static str {
    use BeneficiaryPopulation::*;
    match population {
        Children => "children",
        Youth => "youth",
        Women => "women",
        Elderly => "elderly",
        PeopleWithDisabilities => "people with disabilities",
        RuralCommunities => "rural communities",
        UrbanPoor => "low-income urban residents",
        Refugees => "refugees",
        Roma => "Roma communities",
        Students => "students",
        Researchers => "researchers",
        Entrepreneurs => "entrepreneurs",
        Farmers => "farmers",
        Unemployed => "unemployed individuals",
        LowIncomeFamilies => "low-income families",
        EthnicMinorities => "ethnic minorities",
        Veterans => "veterans",
        IndigenousCommunities => "indigenous communities",
    }
}

/// Keyword fragment naming the kind of organization eligible to apply.
pub fn recipient_type_to_keywords(kind: RecipientOrganizationType) -> &'static str {
    use RecipientOrganizationType::*;
    match kind {
        Nonprofit => "nonprofit organizations",
        School => "schools",
        University => "universities",
        Municipality => "municipalities",
        SocialEnterprise => "social enterprises",
        Cooperative => "cooperatives",
        SmallBusiness => "small businesses",
        Startup => "startups",
        CommunityGroup => "community groups",
        ReligiousInstitution => "religious institutions",
        ResearchInstitute => "research institutes",
        Hospital => "hospitals",
        Individual => "individuals",
        IndividualResearcher => "individual researchers",
    }
}

/// Keyword fragment for the funding source's institution type; used by the
/// confidence scorer's org-type detection signal.
pub fn source_type_to_keywords(kind: FundingSourceType) -> &'static [&'static str] {
    use FundingSourceType::*;
    match kind {
        GovernmentAgency => &["government agency", "ministry", "department"],
        PrivateFoundation => &["private foundation", "foundation"],
        CorporateFoundation => &["corporate foundation", "corporate giving"],
        IntergovernmentalOrganization => &["intergovernmental organization", "UN agency"],
        Ngo => &["NGO", "non-governmental organization"],
        University => &["university", "academic institution"],
        CommunityFoundation => &["community foundation"],
        ReligiousOrganization => &["religious organization", "faith-based"],
        MultilateralDevelopmentBank => &["development bank", "multilateral bank"],
        TradeAssociation => &["trade association", "industry association"],
        CrowdfundingPlatform => &["crowdfunding platform"],
        VentureFund => &["venture fund", "impact investor"],
    }
}

/// Keyword fragment for the disbursement mechanism.
pub fn mechanism_to_keywords(mechanism: FundingMechanism) -> &'static str {
    use FundingMechanism::*;
    match mechanism {
        Grant => "grant",
        Scholarship => "scholarship",
        Fellowship => "fellowship",
        Loan => "loan",
        Equity => "equity investment",
        PrizeCompetition => "prize competition",
        MatchingFund => "matching fund",
        TechnicalAssistance => "technical assistance",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::types::FundingSearchCategory;

    #[test]
    fn every_category_has_keywords_and_description() {
        for category in FundingSearchCategory::ALL {
            assert!(!category_to_keywords(*category).is_empty());
            assert!(!category_to_conceptual_description(*category).is_empty());
        }
    }

    #[test]
    fn every_source_type_has_keywords() {
        for kind in FundingSourceType::ALL {
            assert!(!source_type_to_keywords(*kind).is_empty());
        }
    }

    #[test]
    fn every_scope_has_keywords_and_a_conceptual_description() {
        for scope in GeographicScope::ALL {
            assert!(!scope_to_keywords(*scope).is_empty());
            assert!(!scope_to_conceptual_description(*scope).is_empty());
        }
    }
}
