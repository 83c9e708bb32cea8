use std::time::Duration;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use wf_simulation::drift::DriftSystem;
use wf_simulation::spawn::SpawnSystem;
use wf_simulation::{SimEventKind, Simulation};

use super::{FieldArgs, ReportFormat};
use crate::grid::FieldGrid;

pub fn run(
    args: &FieldArgs,
    ticks: Option<u64>,
    frames: bool,
    format: ReportFormat,
    summary: bool,
) -> Result<(), String> {
    let mut sim = args.build()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("runtime error: {e}"))?;
    runtime.block_on(drive(&mut sim, ticks, frames))?;

    let report = sim
        .stop()
        .map_err(|e| format!("simulation error: {e}"))?;
    super::print_report(&report, format)?;

    if summary {
        print_summary(&sim);
    }
    Ok(())
}

/// Tick until the limit is reached or Ctrl+C arrives. The interrupt also cuts
/// the inter-tick pause short.
async fn drive(sim: &mut Simulation, limit: Option<u64>, frames: bool) -> Result<(), String> {
    // tokio rejects a zero period.
    let period = sim.clock().interval().max(Duration::from_millis(1));
    let mut timer = tokio::time::interval(period);
    let mut grid = if frames {
        Some(FieldGrid::for_config(sim.config())?)
    } else {
        None
    };

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        if limit.is_some_and(|n| sim.current_tick() >= n) {
            tracing::debug!(tick = sim.current_tick(), "tick limit reached");
            return Ok(());
        }

        tokio::select! {
            _ = timer.tick() => {}
            result = &mut ctrl_c => {
                result.map_err(|e| format!("failed to listen for Ctrl+C: {e}"))?;
                tracing::info!(tick = sim.current_tick(), "interrupt received");
                return Ok(());
            }
        }

        sim.tick()
            .map_err(|e| format!("simulation error: {e}"))?;

        if let Some(grid) = grid.as_mut() {
            grid.plot(sim.field());
            println!(
                "tick {} | {} weeds | {} cells occupied",
                sim.current_tick(),
                sim.field().len(),
                grid.occupied()
            );
            print!("{}", grid.to_ascii());
        }
    }
}

fn print_summary(sim: &Simulation) {
    let config = sim.config();
    let spawned = sim.get_system::<SpawnSystem>().map_or(0, SpawnSystem::spawned);
    let departed = sim
        .get_system::<DriftSystem>()
        .map_or(0, DriftSystem::departed_count);
    let inside = sim
        .field()
        .count_within(config.field_width, config.field_height);
    let spawn_events = sim
        .events()
        .events()
        .iter()
        .filter(|e| matches!(e.kind, SimEventKind::Spawned { .. }))
        .count();

    println!();
    println!(
        "  {} {}",
        "Run Summary".bold().underline(),
        format!("(seed={})", config.seed).dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Ticks".to_string(), sim.current_tick().to_string()]);
    table.add_row(vec!["Weeds spawned".to_string(), spawned.to_string()]);
    table.add_row(vec!["Inside field".to_string(), inside.to_string()]);
    table.add_row(vec!["Left field".to_string(), departed.to_string()]);
    table.add_row(vec![
        "Nominal run time".to_string(),
        format!("{:.1}s", sim.clock().elapsed().as_secs_f64()),
    ]);
    table.add_row(vec![
        "Events logged".to_string(),
        format!("{} ({spawn_events} spawns)", sim.events().len()),
    ]);
    println!("{table}");
}
