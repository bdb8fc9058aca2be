//! Taxonomy model and mappers: the closed vocabularies every other
//! module selects from, and the pure functions that turn a selection into
//! search text.

pub mod mappers;
pub mod types;

pub use mappers::{
    beneficiary_to_keywords, category_to_conceptual_description, category_to_keywords,
    mechanism_to_keywords, recipient_type_to_keywords, scope_to_conceptual_description,
    scope_to_keywords, source_type_to_keywords,
};
pub use types::{
    BeneficiaryPopulation, FundingMechanism, FundingSearchCategory, FundingSourceType,
    GeographicScope, ProjectScale, QueryLanguage, RecipientOrganizationType, SearchEngineType,
};
