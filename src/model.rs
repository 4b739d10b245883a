use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Sérialisation "HH:MM" des heures de salle et de créneau.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&t.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M").map_err(serde::de::Error::custom)
    }
}

/// Jour ouvré (aucun cours le week-end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "MO")]
    Mo,
    #[serde(rename = "TU")]
    Tu,
    #[serde(rename = "WE")]
    We,
    #[serde(rename = "TH")]
    Th,
    #[serde(rename = "FR")]
    Fr,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Mo,
        Weekday::Tu,
        Weekday::We,
        Weekday::Th,
        Weekday::Fr,
    ];

    /// Rang dans la semaine, lundi = 0.
    pub fn index(self) -> usize {
        match self {
            Weekday::Mo => 0,
            Weekday::Tu => 1,
            Weekday::We => 2,
            Weekday::Th => 3,
            Weekday::Fr => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Mo => "MO",
            Weekday::Tu => "TU",
            Weekday::We => "WE",
            Weekday::Th => "TH",
            Weekday::Fr => "FR",
        }
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MO" => Ok(Weekday::Mo),
            "TU" => Ok(Weekday::Tu),
            "WE" => Ok(Weekday::We),
            "TH" => Ok(Weekday::Th),
            "FR" => Ok(Weekday::Fr),
            other => Err(format!("unknown weekday: {other}")),
        }
    }
}

/// Motif hebdomadaire de réunion : jour seul ou paire fixe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPattern {
    #[serde(rename = "MO-WE")]
    MoWe,
    #[serde(rename = "TU-TH")]
    TuTh,
    #[serde(rename = "WE-FR")]
    WeFr,
    #[serde(rename = "MO")]
    Mo,
    #[serde(rename = "TU")]
    Tu,
    #[serde(rename = "WE")]
    We,
    #[serde(rename = "TH")]
    Th,
    #[serde(rename = "FR")]
    Fr,
}

impl DayPattern {
    /// Table fixe motif → jours concrets. Seule source de vérité, jamais
    /// recalculée ailleurs.
    pub fn days(self) -> &'static [Weekday] {
        match self {
            DayPattern::MoWe => &[Weekday::Mo, Weekday::We],
            DayPattern::TuTh => &[Weekday::Tu, Weekday::Th],
            DayPattern::WeFr => &[Weekday::We, Weekday::Fr],
            DayPattern::Mo => &[Weekday::Mo],
            DayPattern::Tu => &[Weekday::Tu],
            DayPattern::We => &[Weekday::We],
            DayPattern::Th => &[Weekday::Th],
            DayPattern::Fr => &[Weekday::Fr],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DayPattern::MoWe => "MO-WE",
            DayPattern::TuTh => "TU-TH",
            DayPattern::WeFr => "WE-FR",
            DayPattern::Mo => "MO",
            DayPattern::Tu => "TU",
            DayPattern::We => "WE",
            DayPattern::Th => "TH",
            DayPattern::Fr => "FR",
        }
    }

    pub fn shares_day(self, other: DayPattern) -> bool {
        self.days().iter().any(|d| other.days().contains(d))
    }
}

impl fmt::Display for DayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MO-WE" => Ok(DayPattern::MoWe),
            "TU-TH" => Ok(DayPattern::TuTh),
            "WE-FR" => Ok(DayPattern::WeFr),
            "MO" => Ok(DayPattern::Mo),
            "TU" => Ok(DayPattern::Tu),
            "WE" => Ok(DayPattern::We),
            "TH" => Ok(DayPattern::Th),
            "FR" => Ok(DayPattern::Fr),
            other => Err(format!("unknown day pattern: {other}")),
        }
    }
}

/// Matière enseignée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Math,
    Biology,
    Chemistry,
    Physiology,
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Math" => Ok(Subject::Math),
            "Biology" => Ok(Subject::Biology),
            "Chemistry" => Ok(Subject::Chemistry),
            "Physiology" => Ok(Subject::Physiology),
            other => Err(format!("unknown subject: {other}")),
        }
    }
}

/// Niveau de cours. Ensemble fermé : il encode à la fois la convention
/// cours/TP et la tranche horaire préférée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum CourseLevel {
    L101,
    L201,
    L301,
    L401,
}

impl CourseLevel {
    pub fn number(self) -> u16 {
        match self {
            CourseLevel::L101 => 101,
            CourseLevel::L201 => 201,
            CourseLevel::L301 => 301,
            CourseLevel::L401 => 401,
        }
    }

    /// Niveaux 301 et 401 : convention TP et préférences horaires strictes.
    pub fn is_upper(self) -> bool {
        self >= CourseLevel::L301
    }
}

impl TryFrom<u16> for CourseLevel {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            101 => Ok(CourseLevel::L101),
            201 => Ok(CourseLevel::L201),
            301 => Ok(CourseLevel::L301),
            401 => Ok(CourseLevel::L401),
            other => Err(format!("unknown course level: {other}")),
        }
    }
}

impl From<CourseLevel> for u16 {
    fn from(level: CourseLevel) -> u16 {
        level.number()
    }
}

/// Type de salle : croisement matière × {cours, TP}, plus l'amphi généraliste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    #[serde(rename = "Biology Lecture")]
    BiologyLecture,
    #[serde(rename = "Biology Lab")]
    BiologyLab,
    #[serde(rename = "Chemistry Lecture")]
    ChemistryLecture,
    #[serde(rename = "Chemistry Lab")]
    ChemistryLab,
    #[serde(rename = "Physiology Lecture")]
    PhysiologyLecture,
    #[serde(rename = "Physiology Lab")]
    PhysiologyLab,
    #[serde(rename = "Math Lecture")]
    MathLecture,
    #[serde(rename = "Math Lab")]
    MathLab,
    #[serde(rename = "General Lecture")]
    GeneralLecture,
}

impl RoomKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomKind::BiologyLecture => "Biology Lecture",
            RoomKind::BiologyLab => "Biology Lab",
            RoomKind::ChemistryLecture => "Chemistry Lecture",
            RoomKind::ChemistryLab => "Chemistry Lab",
            RoomKind::PhysiologyLecture => "Physiology Lecture",
            RoomKind::PhysiologyLab => "Physiology Lab",
            RoomKind::MathLecture => "Math Lecture",
            RoomKind::MathLab => "Math Lab",
            RoomKind::GeneralLecture => "General Lecture",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Biology Lecture" => Ok(RoomKind::BiologyLecture),
            "Biology Lab" => Ok(RoomKind::BiologyLab),
            "Chemistry Lecture" => Ok(RoomKind::ChemistryLecture),
            "Chemistry Lab" => Ok(RoomKind::ChemistryLab),
            "Physiology Lecture" => Ok(RoomKind::PhysiologyLecture),
            "Physiology Lab" => Ok(RoomKind::PhysiologyLab),
            "Math Lecture" => Ok(RoomKind::MathLecture),
            "Math Lab" => Ok(RoomKind::MathLab),
            "General Lecture" => Ok(RoomKind::GeneralLecture),
            other => Err(format!("unknown room kind: {other}")),
        }
    }
}

/// Identifiant fort pour Room ("Baker-100").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(String);

impl RoomId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant fort pour CourseDefinition ("Math-101").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseId(String);

impl CourseId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant fort pour ScheduledSection, dérivé du cours ("Math-101-S2").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionId(String);

impl SectionId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn for_section(course: &CourseId, number: u32) -> Self {
        Self(format!("{}-S{}", course.as_str(), number))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Salle de cours ou de TP, immuable une fois importée.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub building: String,
    pub room_number: String,
    pub kind: RoomKind,
    pub capacity: u32,
    pub available_days: Vec<Weekday>,
    #[serde(with = "hhmm")]
    pub opens_at: NaiveTime,
    #[serde(with = "hhmm")]
    pub closes_at: NaiveTime,
}

impl Room {
    /// Crée une salle en validant que `closes_at > opens_at`.
    pub fn new(
        building: String,
        room_number: String,
        kind: RoomKind,
        capacity: u32,
        available_days: Vec<Weekday>,
        opens_at: NaiveTime,
        closes_at: NaiveTime,
    ) -> Result<Self, String> {
        if closes_at <= opens_at {
            return Err("closing time must be strictly after opening time".to_string());
        }
        let id = RoomId::new(format!("{building}-{room_number}"));
        Ok(Self {
            id,
            building,
            room_number,
            kind,
            capacity,
            available_days,
            opens_at,
            closes_at,
        })
    }

    pub fn is_open_on(&self, day: Weekday) -> bool {
        self.available_days.contains(&day)
    }
}

/// Cours à planifier, entrée en lecture seule du solveur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDefinition {
    pub id: CourseId,
    pub subject: Subject,
    pub level: CourseLevel,
    pub teacher: String,
    pub duration_hours: f64,
    pub days_per_week: u8,
    pub total_enrollment: u32,
    pub is_lab: bool,
    /// Motif du cours magistral associé, pour l'ordre cours → TP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lecture_day_pattern: Option<DayPattern>,
}

impl CourseDefinition {
    pub fn duration_minutes(&self) -> i64 {
        (self.duration_hours * 60.0).round() as i64
    }
}

/// Section planifiée. Porte une copie dénormalisée des champs du cours pour
/// que la revalidation n'ait jamais à rejoindre la liste des cours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledSection {
    pub id: SectionId,
    pub course_id: CourseId,
    pub section_number: u32,
    pub room_id: RoomId,
    pub teacher: String,
    pub day_pattern: DayPattern,
    #[serde(with = "hhmm")]
    pub starts_at: NaiveTime,
    #[serde(with = "hhmm")]
    pub ends_at: NaiveTime,
    pub enrollment_capacity: u32,
    pub subject: Subject,
    pub level: CourseLevel,
    pub duration_hours: f64,
    pub days_per_week: u8,
    pub is_lab: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lecture_day_pattern: Option<DayPattern>,
}

impl ScheduledSection {
    pub fn duration_minutes(&self) -> i64 {
        (self.duration_hours * 60.0).round() as i64
    }

    /// Libellé compact "MO-WE 09:00-10:30" pour les messages.
    pub fn meeting_label(&self) -> String {
        format!(
            "{} {}-{}",
            self.day_pattern,
            self.starts_at.format("%H:%M"),
            self.ends_at.format("%H:%M")
        )
    }
}

/// Campus complet : salles, cours et sections planifiées.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Campus {
    pub rooms: Vec<Room>,
    pub courses: Vec<CourseDefinition>,
    #[serde(default)]
    pub sections: Vec<ScheduledSection>,
}

impl Campus {
    pub fn find_room<'a>(&'a self, id: &RoomId) -> Option<&'a Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }
    pub fn find_section<'a>(&'a self, id: &SectionId) -> Option<&'a ScheduledSection> {
        self.sections.iter().find(|s| &s.id == id)
    }
}
