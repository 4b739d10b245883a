use super::types::PlacementCheck;
use super::{compat, rules, util};
use crate::model::{Room, RoomId, ScheduledSection};

fn find_room<'a>(rooms: &'a [Room], id: &RoomId) -> Option<&'a Room> {
    rooms.iter().find(|r| &r.id == id)
}

/// Revalide un placement proposé contre toutes les règles dures et les
/// sections existantes. Les catégories de règles s'accumulent ; face à une
/// section concurrente, la comparaison s'arrête à son premier conflit et
/// passe à la suivante. La préférence horaire est évaluée à part, en simple
/// avertissement.
pub fn validate_placement(
    proposed: &ScheduledSection,
    sections: &[ScheduledSection],
    rooms: &[Room],
) -> PlacementCheck {
    let mut conflicts = Vec::new();
    let mut warnings = Vec::new();

    let Some(room) = find_room(rooms, &proposed.room_id) else {
        return PlacementCheck {
            valid: false,
            conflicts: vec!["Selected room no longer exists".to_string()],
            warnings,
        };
    };

    if !compat::allowed_room_kinds(proposed.subject, proposed.level).contains(&room.kind) {
        conflicts.push(format!(
            "Room {} incompatible ({})",
            room.id.as_str(),
            room.kind
        ));
    }

    let candidate_start = util::minute_of_day(proposed.starts_at);
    let candidate_end = util::minute_of_day(proposed.ends_at);
    let room_open = util::minute_of_day(room.opens_at);
    let room_close = util::minute_of_day(room.closes_at);
    if candidate_start < room_open || candidate_end > room_close {
        conflicts.push(format!(
            "Time outside {} availability ({}-{})",
            room.id.as_str(),
            room.opens_at.format("%H:%M"),
            room.closes_at.format("%H:%M")
        ));
    }

    let candidate_days = proposed.day_pattern.days();
    if !candidate_days.iter().all(|&d| room.is_open_on(d)) {
        conflicts.push(format!(
            "Room {} unavailable for {}",
            room.id.as_str(),
            proposed.day_pattern
        ));
    }

    if !compat::allowed_patterns(proposed.days_per_week).contains(&proposed.day_pattern) {
        conflicts.push(format!(
            "Day pattern {} not allowed for this course",
            proposed.day_pattern
        ));
    }

    if !rules::lab_pattern_allowed(proposed, proposed.day_pattern) {
        conflicts.push("Lab must be scheduled on/after a lecture day".to_string());
    }

    let buffer = rules::buffer_minutes(proposed.is_lab);
    for other in sections.iter().filter(|s| s.id != proposed.id) {
        if !other.day_pattern.shares_day(proposed.day_pattern) {
            continue;
        }
        let other_start = util::minute_of_day(other.starts_at);
        let other_end = util::minute_of_day(other.ends_at);

        if other.room_id == proposed.room_id {
            let padding = buffer.max(rules::buffer_minutes(other.is_lab));
            if util::overlaps_padded(candidate_start, candidate_end, other_start, other_end, padding)
            {
                conflicts.push(format!(
                    "Room {} busy with {} ({}-{})",
                    proposed.room_id.as_str(),
                    other.course_id.as_str(),
                    other.starts_at.format("%H:%M"),
                    other.ends_at.format("%H:%M")
                ));
                continue;
            }
        }

        if other.teacher == proposed.teacher
            && util::overlaps(candidate_start, candidate_end, other_start, other_end)
        {
            conflicts.push(format!(
                "Teacher {} busy with {}",
                proposed.teacher,
                other.course_id.as_str()
            ));
        }
    }

    if !rules::meets_time_preference(proposed, candidate_start) {
        warnings.push(format!(
            "{} at {} outside preferred block",
            proposed.course_id.as_str(),
            proposed.meeting_label()
        ));
    }

    PlacementCheck {
        valid: conflicts.is_empty(),
        conflicts,
        warnings,
    }
}

/// Avertissements de préférence recalculés sur tout l'emploi du temps, pour
/// qu'aucun avertissement périmé ne survive à une mutation acceptée.
pub fn preference_warnings(sections: &[ScheduledSection]) -> Vec<String> {
    sections
        .iter()
        .filter(|s| !rules::meets_time_preference(*s, util::minute_of_day(s.starts_at)))
        .map(|s| {
            format!(
                "{} at {} outside preferred block",
                s.course_id.as_str(),
                s.meeting_label()
            )
        })
        .collect()
}
