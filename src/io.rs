use crate::model::{Campus, CourseDefinition, CourseId, CourseLevel, Room, ScheduledSection};
use anyhow::{bail, Context};
use chrono::NaiveTime;
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de salles depuis CSV : header
/// `building,room_number,kind,capacity,days,open,close` (jours "MO;WE;FR").
pub fn import_rooms_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Room>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let building = rec.get(0).context("missing building")?.trim();
        let number = rec.get(1).context("missing room_number")?.trim();
        if building.is_empty() || number.is_empty() {
            bail!("invalid room row (empty)");
        }
        let kind = rec
            .get(2)
            .context("missing kind")?
            .trim()
            .parse()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid kind for room {building}-{number}"))?;
        let capacity = rec
            .get(3)
            .context("missing capacity")?
            .trim()
            .parse()
            .with_context(|| format!("invalid capacity for room {building}-{number}"))?;
        let days = parse_days(rec.get(4).context("missing days")?)
            .with_context(|| format!("invalid days for room {building}-{number}"))?;
        let opens_at = parse_clock(rec.get(5).context("missing open")?.trim())?;
        let closes_at = parse_clock(rec.get(6).context("missing close")?.trim())?;
        let room = Room::new(
            building.to_string(),
            number.to_string(),
            kind,
            capacity,
            days,
            opens_at,
            closes_at,
        )
        .map_err(anyhow::Error::msg)?;
        out.push(room);
    }
    Ok(out)
}

/// Import de cours depuis CSV : header `id,subject,level,teacher,
/// duration_hours,days_per_week,enrollment,is_lab,lecture_pattern`
/// (dernière colonne optionnelle).
pub fn import_courses_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<CourseDefinition>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing id")?.trim();
        if id.is_empty() {
            bail!("invalid course row (empty id)");
        }
        let subject = rec
            .get(1)
            .context("missing subject")?
            .trim()
            .parse()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid subject for course {id}"))?;
        let level: u16 = rec
            .get(2)
            .context("missing level")?
            .trim()
            .parse()
            .with_context(|| format!("invalid level for course {id}"))?;
        let level = CourseLevel::try_from(level)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid level for course {id}"))?;
        let teacher = rec.get(3).context("missing teacher")?.trim().to_string();
        let duration_hours = rec
            .get(4)
            .context("missing duration_hours")?
            .trim()
            .parse()
            .with_context(|| format!("invalid duration for course {id}"))?;
        let days_per_week = rec
            .get(5)
            .context("missing days_per_week")?
            .trim()
            .parse()
            .with_context(|| format!("invalid days_per_week for course {id}"))?;
        let total_enrollment = rec
            .get(6)
            .context("missing enrollment")?
            .trim()
            .parse()
            .with_context(|| format!("invalid enrollment for course {id}"))?;
        let is_lab = parse_bool(rec.get(7).context("missing is_lab")?.trim())
            .with_context(|| format!("invalid is_lab for course {id}"))?;
        let lecture_day_pattern = match rec.get(8).map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse()
                    .map_err(anyhow::Error::msg)
                    .with_context(|| format!("invalid lecture_pattern for course {id}"))?,
            ),
        };
        out.push(CourseDefinition {
            id: CourseId::new(id),
            subject,
            level,
            teacher,
            duration_hours,
            days_per_week,
            total_enrollment,
            is_lab,
            lecture_day_pattern,
        });
    }
    Ok(out)
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" | "oui" => Ok(true),
        "false" | "0" | "no" | "n" | "non" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

fn parse_days(raw: &str) -> anyhow::Result<Vec<crate::model::Weekday>> {
    let days: Result<Vec<_>, _> = raw
        .split(';')
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(str::parse)
        .collect();
    let days = days.map_err(anyhow::Error::msg)?;
    if days.is_empty() {
        bail!("at least one weekday required");
    }
    Ok(days)
}

fn parse_clock(raw: &str) -> anyhow::Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").with_context(|| format!("invalid clock time: {raw}"))
}

/// Export JSON du campus complet (jolie mise en forme).
pub fn export_campus_json<P: AsRef<Path>>(path: P, campus: &Campus) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(campus)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des sections : header
/// `id,course,room,pattern,start,end,capacity,teacher`.
pub fn export_sections_csv<P: AsRef<Path>>(
    path: P,
    sections: &[ScheduledSection],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "id", "course", "room", "pattern", "start", "end", "capacity", "teacher",
    ])?;
    for s in sections {
        let start = s.starts_at.format("%H:%M").to_string();
        let end = s.ends_at.format("%H:%M").to_string();
        let capacity = s.enrollment_capacity.to_string();
        w.write_record([
            s.id.as_str(),
            s.course_id.as_str(),
            s.room_id.as_str(),
            s.day_pattern.as_str(),
            start.as_str(),
            end.as_str(),
            capacity.as_str(),
            s.teacher.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
