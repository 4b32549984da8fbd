mod narrative;
mod render;
mod share;
mod summary;
pub mod views;

pub use narrative::{
    compose, DistributionEntry, Narrative, NarrativeBlock, Pairing, SECONDARY_PREFERENCE_FLOOR,
    STRONGEST_EMPHASIS_GAP,
};
pub use render::{format_percentage, render, render_block, TextFormat};
pub use share::{share_badges, share_text};
pub use summary::{compute_results, QuestionnaireResults, ResultsCache};
