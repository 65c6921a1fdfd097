//! # Beamdiag CLI Application
//!
//! Terminal front end for the diagram engine.
//!
//! ```text
//! diag_cli                      analyze the built-in two-support example
//! diag_cli <project.bdg>        analyze every case of a saved project
//! diag_cli --write-demo <path>  save the built-in example as a project
//! ```
//!
//! Exit status: 0 on success, 2 on bad usage, 3 when a beam case has invalid
//! geometry or sampling settings, 1 on any other failure.
//!
//! Set `RUST_LOG=debug` to see partition and sampling details.

use std::path::Path;
use std::process::ExitCode;

use diag_core::calculations::{analyze, DiagramSummary, Field};
use diag_core::project::{demo_project, AnalysisSettings, BeamCase, Project};
use diag_core::{load_project, save_project, DiagError, DiagResult};

fn main() -> ExitCode {
    env_logger::init();

    println!("Beamdiag CLI - Beam Internal-Force Diagrams");
    println!("===========================================");
    println!();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.as_slice() {
        [] => {
            println!("No project given. Running built-in example...");
            println!();
            run_project(&demo_project())
        }
        [flag, path] if flag == "--write-demo" => write_demo(Path::new(path)),
        [path] if !path.starts_with('-') => {
            load_project(Path::new(path)).and_then(|project| run_project(&project))
        }
        _ => {
            eprintln!("Usage: diag_cli [<project.bdg> | --write-demo <project.bdg>]");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            if e.is_input_error() {
                ExitCode::from(3)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn write_demo(path: &Path) -> DiagResult<()> {
    save_project(&demo_project(), path)?;
    println!("Wrote example project to {}", path.display());
    Ok(())
}

fn run_project(project: &Project) -> DiagResult<()> {
    if project.item_count() == 0 {
        println!("Project {} has no beam cases.", project.meta.job_id);
        return Ok(());
    }

    for (_, case) in project.cases_by_label() {
        run_case(case, &project.settings)?;
    }
    Ok(())
}

fn run_case(case: &BeamCase, settings: &AnalysisSettings) -> DiagResult<()> {
    let ctx = case.context(settings)?;
    log::debug!("analyzing case {} ({} loads)", case.label, case.loads.load_count());
    let diagrams = analyze(&ctx);
    let summaries = diagrams.summaries();

    println!("═══════════════════════════════════════");
    println!("  {}", case.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Length:       {:.3}", case.beam.length);
    println!("  Vertical:     {}", case.loads.vertical_loads.len());
    println!("  Horizontal:   {}", case.loads.horizontal_loads.len());
    println!("  Distributed:  {}", case.loads.distributed_loads.len());
    println!("  Moments:      {}", case.loads.point_moments.len());
    println!(
        "  Sampling:     dx = {} ({})",
        ctx.dx(),
        ctx.strategy().display_name()
    );
    println!();
    println!("Extrema:");
    for summary in &summaries {
        print_summary(summary);
    }
    println!();
    println!("═══════════════════════════════════════");
    for field in Field::ALL {
        println!(
            "  {} governing = {:.3}",
            field.symbol(),
            diagrams.summary(field).governing_value()
        );
    }
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(&summaries) {
        println!("{}", json);
    }
    println!();
    Ok(())
}

fn print_summary(summary: &DiagramSummary) {
    println!(
        "  {:<15} {} max = {:>12.3} @ {:<8.4} min = {:>12.3} @ {:<8.4} ({} pts)",
        summary.field.display_name(),
        summary.field.symbol(),
        summary.max_value,
        summary.max_position,
        summary.min_value,
        summary.min_position,
        summary.sample_count
    );
}

fn report_error(e: &DiagError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}
