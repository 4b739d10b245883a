#![forbid(unsafe_code)]
use chrono::{Duration, NaiveTime};
use edt::engine::{apply_move, find_alternatives, generate, patch_section, EngineError, SectionPatch};
use edt::model::{
    CourseDefinition, CourseId, CourseLevel, DayPattern, Room, RoomId, RoomKind, ScheduledSection,
    SectionId, Subject, Weekday,
};

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn lecture_room(building: &str, number: &str, kind: RoomKind, capacity: u32) -> Room {
    Room {
        id: RoomId::new(format!("{building}-{number}")),
        building: building.to_string(),
        room_number: number.to_string(),
        kind,
        capacity,
        available_days: Weekday::ALL.to_vec(),
        opens_at: at(7, 0),
        closes_at: at(20, 0),
    }
}

#[allow(clippy::too_many_arguments)]
fn section(
    course: &str,
    room_id: &str,
    teacher: &str,
    pattern: DayPattern,
    start: NaiveTime,
    duration_hours: f64,
    subject: Subject,
    level: CourseLevel,
    is_lab: bool,
) -> ScheduledSection {
    let course_id = CourseId::new(course);
    let duration = (duration_hours * 60.0).round() as i64;
    ScheduledSection {
        id: SectionId::for_section(&course_id, 1),
        course_id,
        section_number: 1,
        room_id: RoomId::new(room_id),
        teacher: teacher.to_string(),
        day_pattern: pattern,
        starts_at: start,
        ends_at: start + Duration::minutes(duration),
        enrollment_capacity: 30,
        subject,
        level,
        duration_hours,
        days_per_week: pattern.days().len() as u8,
        is_lab,
        lecture_day_pattern: None,
    }
}

fn math_fixture() -> (Vec<Room>, Vec<ScheduledSection>) {
    let rooms = vec![lecture_room("Math", "101", RoomKind::MathLecture, 120)];
    let sections = vec![
        section(
            "Math-110",
            "Math-101",
            "Dr. X",
            DayPattern::MoWe,
            at(9, 0),
            1.0,
            Subject::Math,
            CourseLevel::L101,
            false,
        ),
        section(
            "Math-120",
            "Math-101",
            "Dr. Y",
            DayPattern::MoWe,
            at(11, 0),
            1.0,
            Subject::Math,
            CourseLevel::L101,
            false,
        ),
    ];
    (rooms, sections)
}

#[test]
fn rejected_move_leaves_sections_untouched() {
    let (rooms, sections) = math_fixture();
    let patch = SectionPatch {
        starts_at: Some(at(10, 5)),
        ..Default::default()
    };
    let outcome = apply_move(&SectionId::new("Math-120-S1"), &patch, &sections, &rooms).unwrap();
    assert!(!outcome.success);
    assert!(!outcome.conflicts.is_empty());
    assert_eq!(outcome.sections, sections);
}

#[test]
fn accepted_move_changes_exactly_the_target() {
    let (rooms, sections) = math_fixture();
    let patch = SectionPatch {
        starts_at: Some(at(10, 15)),
        ..Default::default()
    };
    let outcome = apply_move(&SectionId::new("Math-120-S1"), &patch, &sections, &rooms).unwrap();
    assert!(outcome.success, "{:?}", outcome.conflicts);
    assert_eq!(outcome.sections.len(), sections.len());

    let moved = outcome
        .sections
        .iter()
        .find(|s| s.id.as_str() == "Math-120-S1")
        .unwrap();
    assert_eq!(moved.starts_at, at(10, 15));
    // fin recalculée depuis la durée
    assert_eq!(moved.ends_at, at(11, 15));

    let untouched = outcome
        .sections
        .iter()
        .find(|s| s.id.as_str() == "Math-110-S1")
        .unwrap();
    assert_eq!(untouched, &sections[0]);
}

#[test]
fn accepted_move_recomputes_warnings_for_the_whole_schedule() {
    let mut rooms = vec![lecture_room("Chem", "210", RoomKind::ChemistryLab, 32)];
    rooms.push(lecture_room("Math", "101", RoomKind::MathLecture, 120));

    // TP de chimie 301 l'après-midi : avertissement permanent, jamais touché
    let chem = section(
        "Chemistry-301",
        "Chem-210",
        "Dr. Boyle",
        DayPattern::Tu,
        at(14, 0),
        3.0,
        Subject::Chemistry,
        CourseLevel::L301,
        true,
    );
    let math = section(
        "Math-110",
        "Math-101",
        "Dr. X",
        DayPattern::MoWe,
        at(9, 0),
        1.0,
        Subject::Math,
        CourseLevel::L101,
        false,
    );
    let sections = vec![chem, math];

    let patch = SectionPatch {
        starts_at: Some(at(10, 0)),
        ..Default::default()
    };
    let outcome = apply_move(&SectionId::new("Math-110-S1"), &patch, &sections, &rooms).unwrap();
    assert!(outcome.success, "{:?}", outcome.conflicts);
    assert!(outcome
        .warnings
        .iter()
        .any(|w| w.contains("Chemistry-301")));
}

#[test]
fn moving_an_unknown_section_is_a_structural_error() {
    let (rooms, sections) = math_fixture();
    let patch = SectionPatch::default();
    let err = apply_move(&SectionId::new("Ghost-1-S1"), &patch, &sections, &rooms).unwrap_err();
    assert!(matches!(err, EngineError::UnknownSection(_)));
}

#[test]
fn inconsistent_patch_times_are_a_structural_error() {
    let (_, sections) = math_fixture();
    let patch = SectionPatch {
        starts_at: Some(at(10, 0)),
        ends_at: Some(at(10, 30)),
        ..Default::default()
    };
    let err = patch_section(&sections[0], &patch).unwrap_err();
    assert!(matches!(err, EngineError::DurationMismatch));
}

#[test]
fn alternatives_follow_enumeration_order_and_limit() {
    let (rooms, mut sections) = math_fixture();
    // Math-120 à 09:00 pour encombrer le début de journée
    sections[1].starts_at = at(9, 0);
    sections[1].ends_at = at(10, 0);

    let target = sections[0].clone();
    let slots = find_alternatives(&target, &rooms, &sections, 3);
    assert_eq!(slots.len(), 3);

    // même salle, premier motif légal, départs les plus tôt qui passent le
    // tampon de 15 min autour de Math-120 (09:00-10:00)
    let starts: Vec<NaiveTime> = slots.iter().map(|s| s.starts_at).collect();
    assert_eq!(starts, vec![at(7, 0), at(7, 30), at(10, 30)]);
    for slot in &slots {
        assert_eq!(slot.room_id.as_str(), "Math-101");
        assert_eq!(slot.day_pattern, DayPattern::MoWe);
    }
}

#[test]
fn alternatives_can_come_back_empty() {
    let rooms = vec![lecture_room("Math", "101", RoomKind::MathLecture, 120)];
    let lab = section(
        "Chemistry-301",
        "Math-101",
        "Dr. Boyle",
        DayPattern::Tu,
        at(9, 0),
        3.0,
        Subject::Chemistry,
        CourseLevel::L301,
        true,
    );
    // aucune salle de TP de chimie : pas de candidat
    let slots = find_alternatives(&lab, &rooms, std::slice::from_ref(&lab), 5);
    assert!(slots.is_empty());
}

#[test]
fn solver_skips_instructor_collisions_to_the_next_slot() {
    let rooms = vec![
        lecture_room("Alg", "1", RoomKind::MathLecture, 100),
        lecture_room("Alg", "2", RoomKind::MathLecture, 90),
    ];
    let courses = vec![
        CourseDefinition {
            id: CourseId::new("Math-110"),
            subject: Subject::Math,
            level: CourseLevel::L101,
            teacher: "Dr. X".to_string(),
            duration_hours: 1.0,
            days_per_week: 2,
            total_enrollment: 100,
            is_lab: false,
            lecture_day_pattern: None,
        },
        CourseDefinition {
            id: CourseId::new("Math-120"),
            subject: Subject::Math,
            level: CourseLevel::L101,
            teacher: "Dr. X".to_string(),
            duration_hours: 1.0,
            days_per_week: 2,
            total_enrollment: 90,
            is_lab: false,
            lecture_day_pattern: None,
        },
    ];

    let outcome = generate(&rooms, &courses);
    assert!(outcome.conflicts.is_empty(), "{:?}", outcome.conflicts);
    assert_eq!(outcome.sections.len(), 2);

    let first = &outcome.sections[0];
    let second = &outcome.sections[1];
    assert_eq!(first.starts_at, at(7, 0));
    assert_eq!(first.room_id.as_str(), "Alg-1");
    // même enseignant : le créneau de 07:00 est sauté, reprise dos à dos
    assert_eq!(second.starts_at, at(8, 0));
    assert_eq!(second.room_id.as_str(), "Alg-2");
}
