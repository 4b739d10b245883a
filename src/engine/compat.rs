use crate::model::{CourseDefinition, CourseLevel, DayPattern, Room, RoomKind, Subject};

/// Motifs légaux selon la fréquence hebdomadaire. L'ordre est significatif :
/// il fixe la priorité de recherche du solveur et des alternatives.
pub fn allowed_patterns(days_per_week: u8) -> &'static [DayPattern] {
    if days_per_week == 2 {
        &[DayPattern::MoWe, DayPattern::TuTh, DayPattern::WeFr]
    } else {
        &[
            DayPattern::Mo,
            DayPattern::Tu,
            DayPattern::We,
            DayPattern::Th,
            DayPattern::Fr,
        ]
    }
}

/// Types de salle admis pour un couple (matière, niveau). Table fermée,
/// sans défaut : 101/201 en salle de cours, 301/401 en salle de TP.
pub fn allowed_room_kinds(subject: Subject, level: CourseLevel) -> &'static [RoomKind] {
    use CourseLevel::{L101, L201, L301, L401};
    match (subject, level) {
        (Subject::Biology, L101 | L201) => &[RoomKind::BiologyLecture, RoomKind::GeneralLecture],
        (Subject::Biology, L301 | L401) => &[RoomKind::BiologyLab],
        (Subject::Chemistry, L101 | L201) => &[RoomKind::ChemistryLecture],
        (Subject::Chemistry, L301 | L401) => &[RoomKind::ChemistryLab],
        (Subject::Physiology, L101 | L201) => &[RoomKind::PhysiologyLecture],
        (Subject::Physiology, L301 | L401) => &[RoomKind::PhysiologyLab],
        (Subject::Math, L101 | L201) => &[RoomKind::MathLecture],
        (Subject::Math, L301 | L401) => &[RoomKind::MathLab],
    }
}

/// Salles compatibles, triées par capacité décroissante.
pub fn compatible_rooms<'a>(
    subject: Subject,
    level: CourseLevel,
    rooms: &'a [Room],
) -> Vec<&'a Room> {
    let kinds = allowed_room_kinds(subject, level);
    let mut out: Vec<&Room> = rooms.iter().filter(|r| kinds.contains(&r.kind)).collect();
    out.sort_by(|a, b| b.capacity.cmp(&a.capacity));
    out
}

/// Découpage d'un cours en sections de capacité atteignable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSplit {
    pub sections: u32,
    pub per_section_cap: u32,
}

/// La plus grande salle compatible fixe le plafond de capacité ; le nombre de
/// sections est minimal sous ce plafond. Zéro section signale l'absence de
/// salle compatible.
pub fn section_split(course: &CourseDefinition, rooms: &[Room]) -> SectionSplit {
    let max_cap = compatible_rooms(course.subject, course.level, rooms)
        .iter()
        .map(|r| r.capacity)
        .max()
        .unwrap_or(0);
    if max_cap == 0 {
        return SectionSplit {
            sections: 0,
            per_section_cap: 0,
        };
    }
    let sections = course.total_enrollment.div_ceil(max_cap);
    let per_section_cap = if sections == 0 {
        0
    } else {
        course.total_enrollment.div_ceil(sections)
    };
    SectionSplit {
        sections,
        per_section_cap,
    }
}
