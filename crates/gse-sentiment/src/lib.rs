//! Sentiment pipeline for public feedback text.
//!
//! Collects text from the UK Parliament petitions feed or a CSV resource,
//! scores each item with a lexicon scorer, and aggregates the scores into a
//! single mean with an overall label. Empty inputs produce a neutral `0.0`.

pub mod aggregate;
pub mod error;
pub mod label;
pub mod pipeline;
pub mod scorer;
pub mod sources;
pub mod types;

pub use aggregate::aggregate;
pub use error::SentimentError;
pub use gse_core::ScorerKind;
pub use label::{label_for, LabelPolicy};
pub use pipeline::{analyse_petitions, analyse_table, analyse_texts};
pub use scorer::{build_scorer, CompoundScorer, PolarityScorer, SentimentScorer};
pub use sources::{find_preset, presets, Preset, SourceClient, Table, TabularSource};
pub use types::{
    AggregateResult, FeedbackItem, PetitionAnalysis, ScoredItem, ScoredPetition, SentimentLabel,
    TextAnalysis,
};
