#![forbid(unsafe_code)]
use chrono::{Duration, NaiveTime};
use edt::engine::validate_placement;
use edt::model::{
    CourseId, CourseLevel, DayPattern, Room, RoomId, RoomKind, ScheduledSection, SectionId,
    Subject, Weekday,
};

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn room(building: &str, number: &str, kind: RoomKind, days: &[Weekday]) -> Room {
    Room {
        id: RoomId::new(format!("{building}-{number}")),
        building: building.to_string(),
        room_number: number.to_string(),
        kind,
        capacity: 60,
        available_days: days.to_vec(),
        opens_at: at(7, 0),
        closes_at: at(20, 0),
    }
}

#[allow(clippy::too_many_arguments)]
fn section(
    course: &str,
    number: u32,
    room_id: &str,
    teacher: &str,
    pattern: DayPattern,
    start: NaiveTime,
    duration_hours: f64,
    subject: Subject,
    level: CourseLevel,
    is_lab: bool,
    lecture: Option<DayPattern>,
) -> ScheduledSection {
    let course_id = CourseId::new(course);
    let duration = (duration_hours * 60.0).round() as i64;
    ScheduledSection {
        id: SectionId::for_section(&course_id, number),
        course_id,
        section_number: number,
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
        lecture_day_pattern: lecture,
    }
}

fn math_lecture(course: &str, number: u32, teacher: &str, start: NaiveTime) -> ScheduledSection {
    section(
        course,
        number,
        "Math-101",
        teacher,
        DayPattern::MoWe,
        start,
        1.0,
        Subject::Math,
        CourseLevel::L101,
        false,
        None,
    )
}

#[test]
fn missing_room_is_fatal() {
    let proposed = math_lecture("Math-110", 1, "Dr. X", at(9, 0));
    let check = validate_placement(&proposed, &[], &[]);
    assert!(!check.valid);
    assert_eq!(check.conflicts, vec!["Selected room no longer exists"]);
}

#[test]
fn incompatible_room_kind_is_rejected() {
    let rooms = vec![room("Math", "101", RoomKind::ChemistryLab, &Weekday::ALL)];
    let proposed = math_lecture("Math-110", 1, "Dr. X", at(9, 0));
    let check = validate_placement(&proposed, &[], &rooms);
    assert!(!check.valid);
    assert!(check.conflicts[0].contains("incompatible"));
}

#[test]
fn placement_outside_room_hours_is_rejected() {
    let rooms = vec![room("Math", "101", RoomKind::MathLecture, &Weekday::ALL)];
    let proposed = math_lecture("Math-110", 1, "Dr. X", at(6, 0));
    let check = validate_placement(&proposed, &[], &rooms);
    assert!(!check.valid);
    assert!(check.conflicts[0].contains("Time outside"));
}

#[test]
fn room_must_cover_every_pattern_day() {
    let rooms = vec![room(
        "Math",
        "101",
        RoomKind::MathLecture,
        &[Weekday::Mo, Weekday::We],
    )];
    let mut proposed = math_lecture("Math-110", 1, "Dr. X", at(9, 0));
    proposed.day_pattern = DayPattern::TuTh;
    let check = validate_placement(&proposed, &[], &rooms);
    assert!(!check.valid);
    assert!(check
        .conflicts
        .iter()
        .any(|c| c.contains("unavailable for TU-TH")));
}

#[test]
fn pattern_must_match_weekly_frequency() {
    let rooms = vec![room("Math", "101", RoomKind::MathLecture, &Weekday::ALL)];
    let mut proposed = math_lecture("Math-110", 1, "Dr. X", at(9, 0));
    // fréquence 2 mais motif un seul jour
    proposed.day_pattern = DayPattern::Mo;
    let check = validate_placement(&proposed, &[], &rooms);
    assert!(!check.valid);
    assert!(check
        .conflicts
        .iter()
        .any(|c| c.contains("Day pattern MO not allowed")));
}

#[test]
fn lab_after_lecture_pattern_is_accepted() {
    let rooms = vec![room("Chem", "210", RoomKind::ChemistryLab, &Weekday::ALL)];
    let proposed = section(
        "Chemistry-301",
        1,
        "Chem-210",
        "Dr. Boyle",
        DayPattern::TuTh,
        at(9, 0),
        3.0,
        Subject::Chemistry,
        CourseLevel::L301,
        true,
        Some(DayPattern::MoWe),
    );
    let check = validate_placement(&proposed, &[], &rooms);
    assert!(check.valid, "{:?}", check.conflicts);
}

#[test]
fn lab_entirely_before_lecture_is_rejected() {
    let rooms = vec![room("Chem", "210", RoomKind::ChemistryLab, &Weekday::ALL)];
    let proposed = section(
        "Chemistry-301",
        1,
        "Chem-210",
        "Dr. Boyle",
        DayPattern::Mo,
        at(9, 0),
        3.0,
        Subject::Chemistry,
        CourseLevel::L301,
        true,
        Some(DayPattern::TuTh),
    );
    let check = validate_placement(&proposed, &[], &rooms);
    assert!(!check.valid);
    assert!(check
        .conflicts
        .iter()
        .any(|c| c.contains("Lab must be scheduled on/after a lecture day")));
}

#[test]
fn lab_without_lecture_reference_passes() {
    let rooms = vec![room("Chem", "210", RoomKind::ChemistryLab, &Weekday::ALL)];
    let proposed = section(
        "Chemistry-301",
        1,
        "Chem-210",
        "Dr. Boyle",
        DayPattern::Mo,
        at(9, 0),
        3.0,
        Subject::Chemistry,
        CourseLevel::L301,
        true,
        None,
    );
    let check = validate_placement(&proposed, &[], &rooms);
    assert!(check.valid, "{:?}", check.conflicts);
}

#[test]
fn room_buffer_rejects_then_accepts_at_boundary() {
    let rooms = vec![room("Math", "101", RoomKind::MathLecture, &Weekday::ALL)];
    let existing = math_lecture("Math-110", 1, "Dr. X", at(9, 0));
    // existing occupe 09:00-10:00 ; tampon 15 min de part et d'autre

    let too_close = math_lecture("Math-120", 1, "Dr. Y", at(10, 10));
    let check = validate_placement(&too_close, std::slice::from_ref(&existing), &rooms);
    assert!(!check.valid);
    assert!(check.conflicts[0].contains("Room Math-101 busy with Math-110"));

    let at_boundary = math_lecture("Math-120", 1, "Dr. Y", at(10, 15));
    let check = validate_placement(&at_boundary, std::slice::from_ref(&existing), &rooms);
    assert!(check.valid, "{:?}", check.conflicts);
}

#[test]
fn room_buffer_takes_the_larger_of_both_sections() {
    let rooms = vec![room("Chem", "210", RoomKind::ChemistryLab, &Weekday::ALL)];
    let lab = section(
        "Chemistry-301",
        1,
        "Chem-210",
        "Dr. Boyle",
        DayPattern::Tu,
        at(8, 0),
        3.0,
        Subject::Chemistry,
        CourseLevel::L301,
        true,
        None,
    );
    // cours non-TP (tampon 15) contre TP existant (tampon 60) : le max gagne
    let proposed = section(
        "Chemistry-210",
        1,
        "Chem-210",
        "Dr. Curie",
        DayPattern::TuTh,
        at(11, 30),
        1.0,
        Subject::Chemistry,
        CourseLevel::L201,
        false,
        None,
    );
    let check = validate_placement(&proposed, std::slice::from_ref(&lab), &rooms);
    assert!(!check.valid);

    let far_enough = section(
        "Chemistry-210",
        1,
        "Chem-210",
        "Dr. Curie",
        DayPattern::TuTh,
        at(12, 0),
        1.0,
        Subject::Chemistry,
        CourseLevel::L201,
        false,
        None,
    );
    let check = validate_placement(&far_enough, std::slice::from_ref(&lab), &rooms);
    assert!(check.valid, "{:?}", check.conflicts);
}

#[test]
fn teacher_check_is_strict_with_zero_gap_allowed() {
    let rooms = vec![
        room("Math", "101", RoomKind::MathLecture, &Weekday::ALL),
        room("Math", "115", RoomKind::MathLecture, &Weekday::ALL),
    ];
    let existing = math_lecture("Math-110", 1, "Dr. X", at(9, 0));

    let mut overlapping = math_lecture("Math-120", 1, "Dr. X", at(9, 30));
    overlapping.room_id = RoomId::new("Math-115");
    let check = validate_placement(&overlapping, std::slice::from_ref(&existing), &rooms);
    assert!(!check.valid);
    assert!(check.conflicts[0].contains("Teacher Dr. X busy with Math-110"));

    // dos à dos : aucun repos exigé pour l'enseignant
    let mut back_to_back = math_lecture("Math-120", 1, "Dr. X", at(10, 0));
    back_to_back.room_id = RoomId::new("Math-115");
    let check = validate_placement(&back_to_back, std::slice::from_ref(&existing), &rooms);
    assert!(check.valid, "{:?}", check.conflicts);
}

#[test]
fn one_conflict_per_competing_section() {
    let rooms = vec![room("Math", "101", RoomKind::MathLecture, &Weekday::ALL)];
    // même salle ET même enseignant : une seule raison remontée
    let existing = math_lecture("Math-110", 1, "Dr. X", at(9, 0));
    let proposed = math_lecture("Math-120", 1, "Dr. X", at(9, 30));
    let check = validate_placement(&proposed, std::slice::from_ref(&existing), &rooms);
    assert!(!check.valid);
    assert_eq!(check.conflicts.len(), 1);
    assert!(check.conflicts[0].starts_with("Room"));
}

#[test]
fn preference_violation_is_a_warning_not_a_conflict() {
    let rooms = vec![room("Chem", "210", RoomKind::ChemistryLab, &Weekday::ALL)];
    // chimie 301+ attendue le matin ; 14:00 déclenche l'avertissement
    let proposed = section(
        "Chemistry-301",
        1,
        "Chem-210",
        "Dr. Boyle",
        DayPattern::Tu,
        at(14, 0),
        3.0,
        Subject::Chemistry,
        CourseLevel::L301,
        true,
        None,
    );
    let check = validate_placement(&proposed, &[], &rooms);
    assert!(check.valid, "{:?}", check.conflicts);
    assert_eq!(check.warnings.len(), 1);
    assert!(check.warnings[0].contains("outside preferred block"));
}
