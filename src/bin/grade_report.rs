//! Headless grade progress report
//!
//! Loads a learner's mastery ledger and prints per-grade progress and
//! unlock state for the dojo syllabus. Meant for instructors and for
//! debugging host-side persistence. With --catalog it dumps the syllabus
//! itself instead.

use clap::Parser;
use keiko::catalog::Catalog;
use keiko::core::{Grade, KeikoError, MasteryLevel, ProgressionConfig, Result};
use keiko::curriculum::CurriculumIndex;
use keiko::progression::{MasteryLedger, ProgressionEngine};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Report per-grade progress and unlock state for a mastery ledger
#[derive(Parser, Debug)]
#[command(name = "grade_report")]
#[command(about = "Report per-grade progress and unlock state for a mastery ledger")]
struct Args {
    /// Path to a ledger JSON file (technique id -> mastery level)
    #[arg(required_unless_present = "catalog")]
    ledger: Option<PathBuf>,

    /// TOML file overriding the standard grading policy
    #[arg(long)]
    config: Option<PathBuf>,

    /// Restrict output to a single grade token (e.g. "sankyu")
    #[arg(long)]
    grade: Option<String>,

    /// Dump the combination catalog instead of reading a ledger
    #[arg(long)]
    catalog: bool,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output structure, one per reported grade
#[derive(Serialize)]
struct GradeReport {
    grade: Grade,
    name: &'static str,
    unlocked: bool,
    mastered: u32,
    practiced: u32,
    learning: u32,
    not_started: u32,
    total: u32,
    completion_percent: u8,
    techniques: Vec<TechniqueReport>,
}

#[derive(Serialize)]
struct TechniqueReport {
    id: &'static str,
    level: MasteryLevel,
    unlocked: bool,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("grade_report: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let grades: Vec<Grade> = match &args.grade {
        Some(token) => vec![Grade::parse(token)?],
        None => Grade::ALL.to_vec(),
    };

    if args.catalog {
        return dump_catalog(&args, &grades);
    }

    let config = match &args.config {
        Some(path) => ProgressionConfig::load(path)?,
        None => ProgressionConfig::default(),
    };

    let ledger_path = args
        .ledger
        .as_ref()
        .ok_or_else(|| KeikoError::InvalidConfig("no ledger file given".to_string()))?;
    let ledger: MasteryLedger = serde_json::from_str(&fs::read_to_string(ledger_path)?)?;
    tracing::debug!("ledger loaded with {} recorded techniques", ledger.len());

    let catalog = Catalog::syllabus();
    let index = CurriculumIndex::build(&catalog);
    let engine = ProgressionEngine::with_config(&index, config)?;

    let mut reports = Vec::new();
    for grade in grades {
        let progress = engine.grade_progress(grade, &ledger);
        let unlocked = engine.is_grade_unlocked(grade, &ledger);

        let mut techniques = Vec::new();
        for (i, technique) in engine.techniques_of(grade).iter().copied().enumerate() {
            techniques.push(TechniqueReport {
                id: technique,
                level: ledger.level(technique),
                unlocked: engine.is_technique_unlocked(grade, i, &ledger)?,
            });
        }

        reports.push(GradeReport {
            grade,
            name: grade.name(),
            unlocked,
            mastered: progress.mastered,
            practiced: progress.practiced,
            learning: progress.learning,
            not_started: progress.not_started,
            total: progress.total,
            completion_percent: progress.completion_percent,
            techniques,
        });
    }

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_text(&reports);
    }

    Ok(())
}

fn dump_catalog(args: &Args, grades: &[Grade]) -> Result<()> {
    let catalog = Catalog::syllabus();
    let entries: Vec<_> = catalog
        .all()
        .iter()
        .filter(|e| grades.contains(&e.grade))
        .collect();

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in entries {
        let attack = entry.attack.unwrap_or("(solo)");
        println!(
            "{:8} {:40} {} -> {} -> {}",
            entry.grade.token(),
            entry.id,
            attack,
            entry.technique.id,
            entry.resolution.id
        );
    }
    Ok(())
}

fn print_text(reports: &[GradeReport]) {
    for report in reports {
        let state = if report.unlocked { "open" } else { "locked" };
        println!(
            "{:10} {:>3}%  {}  ({} mastered / {} practiced / {} learning / {} untouched of {})",
            report.name,
            report.completion_percent,
            state,
            report.mastered,
            report.practiced,
            report.learning,
            report.not_started,
            report.total
        );
        for technique in &report.techniques {
            let gate = if technique.unlocked { ' ' } else { '*' };
            println!("    {}{:24} {}", gate, technique.id, technique.level.name());
        }
    }
}
