//! Campus de démonstration : un jeu de salles et de cours réaliste pour
//! essayer le moteur sans import. Également utilisé comme fixture de tests.

use chrono::NaiveTime;

use crate::model::{
    Campus, CourseDefinition, CourseId, CourseLevel, DayPattern, Room, RoomKind, Subject, Weekday,
};

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn room(
    building: &str,
    number: &str,
    kind: RoomKind,
    capacity: u32,
    days: &[Weekday],
    open: NaiveTime,
    close: NaiveTime,
) -> Room {
    Room {
        id: crate::model::RoomId::new(format!("{building}-{number}")),
        building: building.to_string(),
        room_number: number.to_string(),
        kind,
        capacity,
        available_days: days.to_vec(),
        opens_at: open,
        closes_at: close,
    }
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    subject: Subject,
    level: CourseLevel,
    teacher: &str,
    duration_hours: f64,
    days_per_week: u8,
    total_enrollment: u32,
    is_lab: bool,
    lecture_day_pattern: Option<DayPattern>,
) -> CourseDefinition {
    CourseDefinition {
        id: CourseId::new(id),
        subject,
        level,
        teacher: teacher.to_string(),
        duration_hours,
        days_per_week,
        total_enrollment,
        is_lab,
        lecture_day_pattern,
    }
}

pub fn sample_rooms() -> Vec<Room> {
    use RoomKind::*;
    use Weekday::*;
    let week = &Weekday::ALL[..];
    vec![
        room("Baker", "100", BiologyLecture, 100, week, at(7, 0), at(20, 0)),
        room("Baker", "102", BiologyLecture, 75, week, at(7, 0), at(20, 0)),
        room("Baker", "220", BiologyLab, 28, &[Tu, Th, Fr], at(8, 0), at(19, 0)),
        room("Baker", "240", BiologyLab, 30, &[Mo, We, Fr], at(8, 0), at(19, 0)),
        room("Baker", "260", BiologyLab, 24, &[Tu, Th], at(9, 0), at(18, 0)),
        room("Chem", "110", ChemistryLecture, 120, week, at(7, 30), at(20, 0)),
        room("Chem", "115", ChemistryLecture, 90, week, at(7, 30), at(20, 0)),
        room("Chem", "210", ChemistryLab, 32, week, at(7, 0), at(17, 0)),
        room("Chem", "212", ChemistryLab, 28, &[Mo, We, Fr], at(7, 0), at(17, 0)),
        room("Phys", "101", PhysiologyLecture, 80, week, at(8, 0), at(18, 30)),
        room("Phys", "125", PhysiologyLecture, 60, &[Mo, We, Fr], at(8, 30), at(17, 0)),
        room("Phys", "220", PhysiologyLab, 26, &[Tu, Th], at(12, 0), at(21, 0)),
        room("Phys", "230", PhysiologyLab, 28, &[We, Fr], at(12, 0), at(21, 0)),
        room("Math", "101", MathLecture, 120, week, at(7, 0), at(20, 0)),
        room("Math", "115", MathLecture, 80, week, at(7, 0), at(20, 0)),
        room("Math", "210", MathLab, 32, &[Mo, We, Fr], at(12, 0), at(21, 0)),
        room("Math", "212", MathLab, 28, &[Tu, Th], at(12, 0), at(21, 0)),
        room("Gen", "100", GeneralLecture, 150, week, at(7, 0), at(20, 0)),
        room("Gen", "105", GeneralLecture, 90, week, at(7, 0), at(20, 0)),
        room("Gen", "130", GeneralLecture, 110, &[Mo, We, Fr], at(8, 0), at(18, 0)),
    ]
}

pub fn sample_courses() -> Vec<CourseDefinition> {
    use CourseLevel::*;
    use Subject::*;
    vec![
        course("Math-101", Math, L101, "Kermit The Frog", 1.5, 2, 250, false, None),
        course("Math-201", Math, L201, "Fozzie Bear", 1.5, 2, 200, false, None),
        course("Math-301", Math, L301, "Ada Lovelace", 2.0, 1, 60, true, Some(DayPattern::MoWe)),
        course("Math-401", Math, L401, "Alan Turing", 2.0, 1, 45, true, Some(DayPattern::TuTh)),
        course("Biology-101", Biology, L101, "Dr. Rivera", 1.5, 2, 180, false, None),
        course("Biology-201", Biology, L201, "Dr. Rivera", 1.5, 2, 140, false, None),
        course("Biology-301", Biology, L301, "Dr. Soto", 3.0, 1, 50, true, Some(DayPattern::MoWe)),
        course("Biology-401", Biology, L401, "Dr. Soto", 3.0, 1, 35, true, Some(DayPattern::TuTh)),
        course("Chemistry-101", Chemistry, L101, "Dr. Curie", 1.5, 2, 160, false, None),
        course("Chemistry-201", Chemistry, L201, "Dr. Curie", 1.5, 2, 140, false, None),
        course("Chemistry-301", Chemistry, L301, "Dr. Boyle", 3.0, 1, 70, true, Some(DayPattern::TuTh)),
        course("Chemistry-401", Chemistry, L401, "Dr. Boyle", 3.0, 1, 50, true, Some(DayPattern::WeFr)),
        course("Physiology-101", Physiology, L101, "Dr. Chen", 1.5, 2, 120, false, None),
        course("Physiology-201", Physiology, L201, "Dr. Chen", 1.5, 2, 110, false, None),
        course("Physiology-301", Physiology, L301, "Dr. Vega", 3.0, 1, 60, true, Some(DayPattern::MoWe)),
        course("Physiology-401", Physiology, L401, "Dr. Vega", 3.0, 1, 45, true, Some(DayPattern::TuTh)),
    ]
}

/// Campus complet prêt à générer.
pub fn sample_campus() -> Campus {
    Campus {
        rooms: sample_rooms(),
        courses: sample_courses(),
        sections: Vec::new(),
    }
}
