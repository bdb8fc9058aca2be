//! One module per search engine integration. Each adapter owns its own
//! request/response wire shapes — they are not shared, since every engine's
//! JSON contract is different — and converts into the engine-agnostic
//! [`super::SearchResult`] at the boundary.

mod brave;
mod perplexica;
mod searxng;
mod serper;
mod tavily;

pub use brave::BraveAdapter;
pub use perplexica::PerplexicaAdapter;
pub use searxng::SearxngAdapter;
pub use serper::SerperAdapter;
pub use tavily::TavilyAdapter;
