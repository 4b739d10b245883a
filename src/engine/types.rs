use chrono::NaiveTime;
use serde::Serialize;
use thiserror::Error;

use crate::model::{CourseDefinition, DayPattern, RoomId, ScheduledSection};

/// Résultat d'une génération complète.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleOutcome {
    pub sections: Vec<ScheduledSection>,
    pub conflicts: Vec<String>,
    pub warnings: Vec<String>,
    pub unscheduled: Vec<CourseDefinition>,
}

/// Verdict du validateur sur un placement proposé.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementCheck {
    pub valid: bool,
    pub conflicts: Vec<String>,
    pub warnings: Vec<String>,
}

/// Résultat d'un déplacement : liste remplacée sur succès, intacte sinon.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub success: bool,
    pub sections: Vec<ScheduledSection>,
    pub conflicts: Vec<String>,
    pub warnings: Vec<String>,
}

/// Créneau de repli proposé par la recherche d'alternatives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotSuggestion {
    pub room_id: RoomId,
    #[serde(with = "crate::model::hhmm")]
    pub starts_at: NaiveTime,
    #[serde(with = "crate::model::hhmm")]
    pub ends_at: NaiveTime,
    pub day_pattern: DayPattern,
    pub warnings: Vec<String>,
}

/// Changements demandés sur une section ; les champs absents restent en l'état.
#[derive(Debug, Clone, Default)]
pub struct SectionPatch {
    pub room_id: Option<RoomId>,
    pub day_pattern: Option<DayPattern>,
    pub starts_at: Option<NaiveTime>,
    pub ends_at: Option<NaiveTime>,
}

/// Erreurs structurelles. Les violations de règles de placement ne passent
/// jamais par ici : elles sont des données dans les résultats ci-dessus.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("invalid time range: meeting would run past midnight")]
    InvalidTimeRange,
    #[error("proposed times do not match the course duration")]
    DurationMismatch,
}
