use chrono::{Duration, NaiveTime};

use super::types::{EngineError, MoveOutcome, SectionPatch, SlotSuggestion};
use super::{compat, rules, util, validate};
use crate::model::{Room, ScheduledSection, SectionId};

/// Limite par défaut de la recherche d'alternatives.
pub const DEFAULT_ALTERNATIVE_LIMIT: usize = 5;

/// Fusionne un correctif dans une section en préservant l'invariant
/// `ends_at - starts_at == durée du cours`. Un début seul recalcule la fin ;
/// un couple début/fin incohérent est une erreur structurelle.
pub fn patch_section(
    current: &ScheduledSection,
    patch: &SectionPatch,
) -> Result<ScheduledSection, EngineError> {
    let mut next = current.clone();
    if let Some(room_id) = &patch.room_id {
        next.room_id = room_id.clone();
    }
    if let Some(pattern) = patch.day_pattern {
        next.day_pattern = pattern;
    }

    let duration = current.duration_minutes();
    match (patch.starts_at, patch.ends_at) {
        (Some(start), None) => {
            if util::minute_of_day(start) + duration >= 24 * 60 {
                return Err(EngineError::InvalidTimeRange);
            }
            next.starts_at = start;
            next.ends_at = start + Duration::minutes(duration);
        }
        (Some(start), Some(end)) => {
            if util::minute_of_day(end) - util::minute_of_day(start) != duration {
                return Err(EngineError::DurationMismatch);
            }
            next.starts_at = start;
            next.ends_at = end;
        }
        (None, Some(end)) => {
            if util::minute_of_day(end) - util::minute_of_day(current.starts_at) != duration {
                return Err(EngineError::DurationMismatch);
            }
            next.ends_at = end;
        }
        (None, None) => {}
    }
    Ok(next)
}

/// Applique un déplacement : fusion du correctif, validation complète, puis
/// remplacement de la seule section visée. Sur refus, la liste retournée est
/// identique à l'entrée ; sur succès, les avertissements sont recalculés sur
/// tout l'emploi du temps.
pub fn apply_move(
    section_id: &SectionId,
    patch: &SectionPatch,
    sections: &[ScheduledSection],
    rooms: &[Room],
) -> Result<MoveOutcome, EngineError> {
    let Some(current) = sections.iter().find(|s| &s.id == section_id) else {
        return Err(EngineError::UnknownSection(section_id.as_str().to_string()));
    };

    let proposed = patch_section(current, patch)?;
    let check = validate::validate_placement(&proposed, sections, rooms);
    if !check.valid {
        return Ok(MoveOutcome {
            success: false,
            sections: sections.to_vec(),
            conflicts: check.conflicts,
            warnings: check.warnings,
        });
    }

    let mut next: Vec<ScheduledSection> = sections.to_vec();
    if let Some(slot) = next.iter_mut().find(|s| &s.id == section_id) {
        *slot = proposed;
    }
    let warnings = validate::preference_warnings(&next);
    Ok(MoveOutcome {
        success: true,
        sections: next,
        conflicts: Vec::new(),
        warnings,
    })
}

/// Énumère des créneaux de repli valides pour une section : salles
/// compatibles dans l'ordre fourni, motifs légaux, départs par pas de
/// 30 minutes. Chaque candidat passe par le validateur complet ; la
/// collecte s'arrête à `limit`. L'ordre des résultats est l'ordre
/// d'énumération, pas un classement.
pub fn find_alternatives(
    section: &ScheduledSection,
    rooms: &[Room],
    sections: &[ScheduledSection],
    limit: usize,
) -> Vec<SlotSuggestion> {
    let mut out = Vec::new();
    let kinds = compat::allowed_room_kinds(section.subject, section.level);
    let patterns = compat::allowed_patterns(section.days_per_week);
    let duration = section.duration_minutes();

    for room in rooms.iter().filter(|r| kinds.contains(&r.kind)) {
        let open = util::minute_of_day(room.opens_at);
        let close = util::minute_of_day(room.closes_at);

        for &pattern in patterns {
            if !pattern.days().iter().all(|&d| room.is_open_on(d)) {
                continue;
            }
            if !rules::lab_pattern_allowed(section, pattern) {
                continue;
            }

            let mut start = open;
            while start + duration <= close {
                let starts_at = NaiveTime::MIN + Duration::minutes(start);
                let ends_at = NaiveTime::MIN + Duration::minutes(start + duration);

                let mut candidate = section.clone();
                candidate.room_id = room.id.clone();
                candidate.day_pattern = pattern;
                candidate.starts_at = starts_at;
                candidate.ends_at = ends_at;

                let check = validate::validate_placement(&candidate, sections, rooms);
                if check.valid {
                    out.push(SlotSuggestion {
                        room_id: room.id.clone(),
                        starts_at,
                        ends_at,
                        day_pattern: pattern,
                        warnings: check.warnings,
                    });
                    if out.len() >= limit {
                        return out;
                    }
                }
                start += 30;
            }
        }
    }
    out
}
