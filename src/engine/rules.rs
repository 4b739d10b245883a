use crate::model::{CourseDefinition, CourseLevel, DayPattern, ScheduledSection, Subject};

/// Vue commune cours/section pour les règles souples : la section porte une
/// copie dénormalisée des champs du cours, les deux types répondent donc
/// sans jointure.
pub trait CourseMeta {
    fn subject(&self) -> Subject;
    fn level(&self) -> CourseLevel;
    fn is_lab(&self) -> bool;
    fn lecture_day_pattern(&self) -> Option<DayPattern>;
}

impl CourseMeta for CourseDefinition {
    fn subject(&self) -> Subject {
        self.subject
    }
    fn level(&self) -> CourseLevel {
        self.level
    }
    fn is_lab(&self) -> bool {
        self.is_lab
    }
    fn lecture_day_pattern(&self) -> Option<DayPattern> {
        self.lecture_day_pattern
    }
}

impl CourseMeta for ScheduledSection {
    fn subject(&self) -> Subject {
        self.subject
    }
    fn level(&self) -> CourseLevel {
        self.level
    }
    fn is_lab(&self) -> bool {
        self.is_lab
    }
    fn lecture_day_pattern(&self) -> Option<DayPattern> {
        self.lecture_day_pattern
    }
}

/// Tranche horaire d'un début de cours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBlock {
    Morning,
    Afternoon,
    Evening,
}

/// Matin avant 13:00, après-midi jusqu'à 17:00, soir ensuite.
pub fn time_block(start_minutes: i64) -> TimeBlock {
    if start_minutes >= 17 * 60 {
        TimeBlock::Evening
    } else if start_minutes >= 13 * 60 {
        TimeBlock::Afternoon
    } else {
        TimeBlock::Morning
    }
}

/// Tampon minimal entre deux réservations de la même salle. Ne s'applique
/// jamais aux comparaisons enseignant, qui restent en chevauchement strict.
pub fn buffer_minutes(is_lab: bool) -> i64 {
    if is_lab {
        60
    } else {
        15
    }
}

/// Préférence horaire : libre sous le niveau 301 ; chimie 301+ le matin ;
/// sinon TP le soir, cours l'après-midi. Violation = avertissement, jamais
/// un conflit dur.
pub fn meets_time_preference(meta: &impl CourseMeta, start_minutes: i64) -> bool {
    if !meta.level().is_upper() {
        return true;
    }
    let block = time_block(start_minutes);
    if meta.subject() == Subject::Chemistry {
        return block == TimeBlock::Morning;
    }
    if meta.is_lab() {
        block == TimeBlock::Evening
    } else {
        block == TimeBlock::Afternoon
    }
}

/// Un TP de niveau 301+ doit tomber le jour du cours magistral associé ou
/// plus tard dans la semaine. Sans motif de référence, la règle passe.
pub fn lab_pattern_allowed(meta: &impl CourseMeta, candidate: DayPattern) -> bool {
    if !meta.is_lab() || !meta.level().is_upper() {
        return true;
    }
    let Some(lecture) = meta.lecture_day_pattern() else {
        return true;
    };
    candidate.days().iter().any(|day| {
        lecture
            .days()
            .iter()
            .any(|lecture_day| day.index() >= lecture_day.index())
    })
}
