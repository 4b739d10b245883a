#![forbid(unsafe_code)]
//! Edt — moteur d'emploi du temps universitaire local (sans BD).
//!
//! - Modèle salles/cours/sections en mémoire, import/export CSV et JSON.
//! - Placement glouton déterministe : premier créneau légal retenu, aucun
//!   retour en arrière entre cours.
//! - Validation des déplacements manuels, recherche de créneaux de repli.
//! - Heures au format HH:MM ; conflits et avertissements rendus en données,
//!   jamais en exceptions.

pub mod engine;
pub mod io;
pub mod model;
pub mod sample;
pub mod storage;

pub use engine::{
    apply_move, find_alternatives, generate, validate_placement, EngineError, MoveOutcome,
    PlacementCheck, ScheduleOutcome, SectionPatch, SlotSuggestion,
};
pub use model::{
    Campus, CourseDefinition, CourseId, CourseLevel, DayPattern, Room, RoomId, RoomKind,
    ScheduledSection, SectionId, Subject, Weekday,
};
pub use storage::{JsonStore, Store};
