//! Moteur d'affectation : règles de compatibilité, solveur glouton,
//! validateur de déplacements et recherche d'alternatives. Calcul pur sur
//! les collections passées en argument, sans état partagé entre appels.

mod compat;
mod mutate;
mod rules;
mod solver;
mod types;
mod util;
mod validate;

pub use compat::{
    allowed_patterns, allowed_room_kinds, compatible_rooms, section_split, SectionSplit,
};
pub use mutate::{apply_move, find_alternatives, patch_section, DEFAULT_ALTERNATIVE_LIMIT};
pub use rules::{
    buffer_minutes, lab_pattern_allowed, meets_time_preference, time_block, CourseMeta, TimeBlock,
};
pub use solver::generate;
pub use types::{
    EngineError, MoveOutcome, PlacementCheck, ScheduleOutcome, SectionPatch, SlotSuggestion,
};
pub use validate::{preference_warnings, validate_placement};
