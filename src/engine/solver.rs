use std::collections::HashMap;

use chrono::{Duration, NaiveTime};

use super::types::ScheduleOutcome;
use super::{compat, rules, util};
use crate::model::{CourseDefinition, Room, RoomId, ScheduledSection, SectionId, Weekday};

/// Intervalle réservé, en minutes depuis minuit.
type Slot = (i64, i64);

/// Calendriers de réservation d'une passe de génération, par salle et par
/// enseignant. Reconstruits à chaque appel, jamais persistés.
#[derive(Default)]
struct Bookings {
    by_room: HashMap<RoomId, HashMap<Weekday, Vec<Slot>>>,
    by_teacher: HashMap<String, HashMap<Weekday, Vec<Slot>>>,
}

impl Bookings {
    fn register(&mut self, room: &RoomId, teacher: &str, day: Weekday, slot: Slot) {
        self.by_room
            .entry(room.clone())
            .or_default()
            .entry(day)
            .or_default()
            .push(slot);
        self.by_teacher
            .entry(teacher.to_owned())
            .or_default()
            .entry(day)
            .or_default()
            .push(slot);
    }

    fn room_busy(&self, room: &RoomId, day: Weekday, slot: Slot, buffer: i64) -> bool {
        self.by_room
            .get(room)
            .and_then(|days| days.get(&day))
            .is_some_and(|slots| {
                slots
                    .iter()
                    .any(|&(s, e)| util::overlaps_padded(slot.0, slot.1, s, e, buffer))
            })
    }

    fn teacher_busy(&self, teacher: &str, day: Weekday, slot: Slot) -> bool {
        self.by_teacher
            .get(teacher)
            .and_then(|days| days.get(&day))
            .is_some_and(|slots| {
                slots
                    .iter()
                    .any(|&(s, e)| util::overlaps(slot.0, slot.1, s, e))
            })
    }
}

/// Priorité gloutonne, calculée une fois : TP d'abord, puis effectif
/// décroissant, puis rareté des salles compatibles. Un cours sans salle
/// compatible part en fin de liste, il sera signalé non planifiable.
fn ordered_courses<'a>(
    courses: &'a [CourseDefinition],
    rooms: &[Room],
) -> Vec<&'a CourseDefinition> {
    let scarcity = |course: &CourseDefinition| {
        match compat::compatible_rooms(course.subject, course.level, rooms).len() {
            0 => usize::MAX,
            n => n,
        }
    };
    let mut out: Vec<&CourseDefinition> = courses.iter().collect();
    out.sort_by(|a, b| {
        b.is_lab
            .cmp(&a.is_lab)
            .then(b.total_enrollment.cmp(&a.total_enrollment))
            .then(scarcity(a).cmp(&scarcity(b)))
    });
    out
}

/// Recherche exhaustive ordonnée d'un créneau pour une section : motifs dans
/// l'ordre déclaré, salles par capacité la plus proche de la cible, départs
/// par pas de 30 minutes. Premier candidat légal retenu.
fn place_section(
    course: &CourseDefinition,
    section_number: u32,
    capacity: u32,
    rooms: &[Room],
    bookings: &mut Bookings,
    sections: &mut Vec<ScheduledSection>,
    warnings: &mut Vec<String>,
) -> bool {
    let mut candidates = compat::compatible_rooms(course.subject, course.level, rooms);
    candidates.sort_by_key(|r| r.capacity.abs_diff(capacity));

    let duration = course.duration_minutes();
    let buffer = rules::buffer_minutes(course.is_lab);

    for &pattern in compat::allowed_patterns(course.days_per_week) {
        if !rules::lab_pattern_allowed(course, pattern) {
            continue;
        }
        for room in &candidates {
            if !pattern.days().iter().all(|&d| room.is_open_on(d)) {
                continue;
            }
            let open = util::minute_of_day(room.opens_at);
            let close = util::minute_of_day(room.closes_at);
            let mut start = open;
            while start + duration <= close {
                let slot: Slot = (start, start + duration);
                let clear = pattern.days().iter().all(|&day| {
                    !bookings.room_busy(&room.id, day, slot, buffer)
                        && !bookings.teacher_busy(&course.teacher, day, slot)
                });
                if clear {
                    let starts_at = NaiveTime::MIN + Duration::minutes(slot.0);
                    let ends_at = NaiveTime::MIN + Duration::minutes(slot.1);
                    let section = ScheduledSection {
                        id: SectionId::for_section(&course.id, section_number),
                        course_id: course.id.clone(),
                        section_number,
                        room_id: room.id.clone(),
                        teacher: course.teacher.clone(),
                        day_pattern: pattern,
                        starts_at,
                        ends_at,
                        enrollment_capacity: capacity,
                        subject: course.subject,
                        level: course.level,
                        duration_hours: course.duration_hours,
                        days_per_week: course.days_per_week,
                        is_lab: course.is_lab,
                        lecture_day_pattern: course.lecture_day_pattern,
                    };
                    for &day in pattern.days() {
                        bookings.register(&room.id, &course.teacher, day, slot);
                    }
                    if !rules::meets_time_preference(course, slot.0) {
                        warnings.push(format!(
                            "{} placed at {} outside preferred block",
                            course.id.as_str(),
                            section.meeting_label()
                        ));
                    }
                    sections.push(section);
                    return true;
                }
                start += 30;
            }
        }
    }
    false
}

/// Génère un emploi du temps complet. Déterministe : mêmes entrées, mêmes
/// placements. Aucun retour en arrière entre cours : un créneau engagé n'est
/// jamais remis en cause pour satisfaire un cours ultérieur.
pub fn generate(rooms: &[Room], courses: &[CourseDefinition]) -> ScheduleOutcome {
    let mut bookings = Bookings::default();
    let mut sections = Vec::new();
    let mut warnings = Vec::new();
    let mut conflicts = Vec::new();
    let mut unscheduled: Vec<CourseDefinition> = Vec::new();

    for course in ordered_courses(courses, rooms) {
        let split = compat::section_split(course, rooms);
        if split.sections == 0 {
            let kinds: Vec<&str> = compat::allowed_room_kinds(course.subject, course.level)
                .iter()
                .map(|k| k.as_str())
                .collect();
            conflicts.push(format!(
                "No compatible rooms for {} ({})",
                course.id.as_str(),
                kinds.join(", ")
            ));
            unscheduled.push(course.clone());
            continue;
        }

        for number in 1..=split.sections {
            let placed = place_section(
                course,
                number,
                split.per_section_cap,
                rooms,
                &mut bookings,
                &mut sections,
                &mut warnings,
            );
            if !placed {
                conflicts.push(format!(
                    "Unable to place section {} of {}",
                    number,
                    course.id.as_str()
                ));
                unscheduled.push(course.clone());
                // les sections déjà engagées de ce cours restent en place
                break;
            }
        }
    }

    ScheduleOutcome {
        sections,
        conflicts,
        warnings,
        unscheduled,
    }
}
