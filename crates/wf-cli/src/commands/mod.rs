pub mod run;
pub mod simulate;

use std::time::Duration;

use clap::{Args, ValueEnum};

use wf_simulation::{ColorMode, DriftRule, ShutdownReport, SimConfig, Simulation, SpawnPolicy};

/// Run parameters shared by every command.
#[derive(Debug, Args)]
pub struct FieldArgs {
    /// RNG seed for deterministic simulation
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Field width in field units (default: 5.0, or 50 with --integer)
    #[arg(long)]
    width: Option<f64>,

    /// Field height in field units (default: 5.0, or 50 with --integer)
    #[arg(long)]
    height: Option<f64>,

    /// Forward advance per tick (default: 0.2, or 1 with --integer)
    #[arg(long)]
    speed: Option<f64>,

    /// Lateral drift angle in degrees (default: 10, or 90 with --integer)
    #[arg(long)]
    angle: Option<f64>,

    /// Keep coordinates whole-numbered
    #[arg(long)]
    integer: bool,

    /// Always drift in the same lateral direction instead of at random
    #[arg(long)]
    deterministic: bool,

    /// Spawn with this probability per tick instead of on every tick
    #[arg(long, value_name = "P")]
    spawn_chance: Option<f64>,

    /// Do not assign colors to weeds
    #[arg(long)]
    no_color: bool,

    /// Milliseconds between ticks
    #[arg(long, default_value = "200")]
    interval_ms: u64,
}

impl FieldArgs {
    /// Build the simulation configuration. Validation happens when the
    /// simulation is created.
    pub fn to_config(&self) -> SimConfig {
        let mut config = if self.integer {
            SimConfig::integer()
        } else {
            SimConfig::default()
        };

        let width = self.width.unwrap_or(config.field_width);
        let height = self.height.unwrap_or(config.field_height);
        config = config
            .with_seed(self.seed)
            .with_field(width, height)
            .with_tick_interval(Duration::from_millis(self.interval_ms));

        if let Some(speed) = self.speed {
            config = config.with_speed(speed);
        }
        if let Some(angle) = self.angle {
            config = config.with_angle(angle);
        }
        if self.deterministic {
            config = config.with_drift(DriftRule::Deterministic);
        }
        if let Some(p) = self.spawn_chance {
            config = config.with_spawn(SpawnPolicy::Probability(p));
        }
        if self.no_color {
            config = config.with_color(ColorMode::Off);
        }
        config
    }

    /// Create the simulation, mapping configuration errors to a message.
    pub fn build(&self) -> Result<Simulation, String> {
        Simulation::new(self.to_config()).map_err(|e| e.to_string())
    }
}

/// Output format of the shutdown report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Write the shutdown report to stdout.
pub fn print_report(report: &ShutdownReport, format: ReportFormat) -> Result<(), String> {
    match format {
        ReportFormat::Text => print!("{report}"),
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| format!("failed to serialize report: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}
