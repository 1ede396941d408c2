//! Core business logic: profiles, scoring, content and simulated data

pub mod allocation;
pub mod config;
pub mod error;
pub mod glossary;
pub mod log;
pub mod market;
pub mod profile;
pub mod reference;
pub mod score;
pub mod session;

// Re-export main types for cleaner imports
pub use allocation::{AllocationPlan, PlanKind, savings_allocation};
pub use error::{FlexError, ProfileField};
pub use glossary::{Glossary, TermRecord};
pub use market::{DrawSource, MarketSeries, SeededNormal, generate_market_data};
pub use profile::{ProfileInput, ProfileOverrides, UserProfile};
pub use score::{HealthTier, calculate_score};
pub use session::Session;
