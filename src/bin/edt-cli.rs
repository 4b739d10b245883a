#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use edt::{
    engine, io,
    model::{DayPattern, RoomId, SectionId},
    sample,
    storage::{JsonStore, Store},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste d'emploi du temps (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de campus et de sections
    #[arg(long, global = true, default_value = "schedule.json")]
    schedule: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Importer les salles depuis un CSV
    ImportRooms {
        #[arg(long)]
        csv: String,
    },

    /// Importer les cours depuis un CSV
    ImportCourses {
        #[arg(long)]
        csv: String,
    },

    /// Charger le campus de démonstration
    LoadSample,

    /// Générer l'emploi du temps complet (déterministe)
    Generate,

    /// Lister les sections et optionnellement exporter
    List {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Vérifier un déplacement sans l'appliquer
    Check {
        #[arg(long)]
        section: String,
        #[arg(long)]
        room: Option<String>,
        /// Motif de jours ("MO-WE", "TU", ...)
        #[arg(long)]
        pattern: Option<String>,
        /// Heure de début HH:MM ; la fin est recalculée depuis la durée
        #[arg(long)]
        start: Option<String>,
    },

    /// Déplacer une section (validé puis appliqué)
    Move {
        #[arg(long)]
        section: String,
        #[arg(long)]
        room: Option<String>,
        #[arg(long)]
        pattern: Option<String>,
        #[arg(long)]
        start: Option<String>,
    },

    /// Proposer des créneaux de repli pour une section
    Alternatives {
        #[arg(long)]
        section: String,
        #[arg(long, default_value_t = engine::DEFAULT_ALTERNATIVE_LIMIT)]
        limit: usize,
    },
}

fn parse_patch(
    room: Option<String>,
    pattern: Option<String>,
    start: Option<String>,
) -> Result<engine::SectionPatch> {
    let day_pattern = pattern
        .map(|raw| raw.parse::<DayPattern>().map_err(anyhow::Error::msg))
        .transpose()?;
    let starts_at = start
        .map(|raw| {
            NaiveTime::parse_from_str(&raw, "%H:%M")
                .map_err(|_| anyhow::anyhow!("invalid start time: {raw}"))
        })
        .transpose()?;
    Ok(engine::SectionPatch {
        room_id: room.map(RoomId::new),
        day_pattern,
        starts_at,
        ends_at: None,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let store = JsonStore::open(&cli.schedule)?;
    let mut campus = store.load().unwrap_or_default();

    let code = match cli.cmd {
        Commands::ImportRooms { csv } => {
            let rooms = io::import_rooms_csv(csv)?;
            campus.rooms = rooms;
            store.save(&campus)?;
            0
        }
        Commands::ImportCourses { csv } => {
            let courses = io::import_courses_csv(csv)?;
            campus.courses = courses;
            store.save(&campus)?;
            0
        }
        Commands::LoadSample => {
            campus = sample::sample_campus();
            store.save(&campus)?;
            0
        }
        Commands::Generate => {
            if campus.rooms.is_empty() || campus.courses.is_empty() {
                bail!("nothing to schedule: import rooms and courses first");
            }
            let outcome = engine::generate(&campus.rooms, &campus.courses);
            for c in &outcome.conflicts {
                eprintln!("conflict: {c}");
            }
            for w in &outcome.warnings {
                eprintln!("warning: {w}");
            }
            for course in &outcome.unscheduled {
                eprintln!("unscheduled: {}", course.id.as_str());
            }
            println!("{} section(s) placed", outcome.sections.len());
            let clean = outcome.conflicts.is_empty();
            campus.sections = outcome.sections;
            store.save(&campus)?;
            if clean {
                0
            } else {
                // Code 2 = généré avec conflits
                2
            }
        }
        Commands::List { out_json, out_csv } => {
            if let Some(path) = out_json {
                io::export_campus_json(path, &campus)?;
            }
            if let Some(path) = out_csv {
                io::export_sections_csv(path, &campus.sections)?;
            }
            // impression compacte
            for s in &campus.sections {
                println!(
                    "{} | {} | {} | cap {} | {}",
                    s.id.as_str(),
                    s.room_id.as_str(),
                    s.meeting_label(),
                    s.enrollment_capacity,
                    s.teacher
                );
            }
            0
        }
        Commands::Check {
            section,
            room,
            pattern,
            start,
        } => {
            let sid = SectionId::new(section);
            let Some(current) = campus.find_section(&sid) else {
                bail!("unknown section: {}", sid.as_str());
            };
            let patch = parse_patch(room, pattern, start)?;
            let proposed = engine::patch_section(current, &patch)?;
            let check = engine::validate_placement(&proposed, &campus.sections, &campus.rooms);
            for c in &check.conflicts {
                eprintln!("conflict: {c}");
            }
            for w in &check.warnings {
                eprintln!("warning: {w}");
            }
            if check.valid {
                println!("OK: placement is valid");
                0
            } else {
                2
            }
        }
        Commands::Move {
            section,
            room,
            pattern,
            start,
        } => {
            let sid = SectionId::new(section);
            let patch = parse_patch(room, pattern, start)?;
            let outcome = engine::apply_move(&sid, &patch, &campus.sections, &campus.rooms)?;
            if outcome.success {
                campus.sections = outcome.sections;
                store.save(&campus)?;
                for w in &outcome.warnings {
                    eprintln!("warning: {w}");
                }
                println!("{} moved", sid.as_str());
                0
            } else {
                for c in &outcome.conflicts {
                    eprintln!("conflict: {c}");
                }
                2
            }
        }
        Commands::Alternatives { section, limit } => {
            let sid = SectionId::new(section);
            let Some(current) = campus.find_section(&sid) else {
                bail!("unknown section: {}", sid.as_str());
            };
            let slots =
                engine::find_alternatives(current, &campus.rooms, &campus.sections, limit);
            if slots.is_empty() {
                println!("no alternative slot found");
            }
            for alt in &slots {
                let warnings = if alt.warnings.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", alt.warnings.join("; "))
                };
                println!(
                    "{} | {} {}-{}{}",
                    alt.room_id.as_str(),
                    alt.day_pattern,
                    alt.starts_at.format("%H:%M"),
                    alt.ends_at.format("%H:%M"),
                    warnings
                );
            }
            0
        }
    };

    std::process::exit(code);
}
