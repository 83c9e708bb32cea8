use super::{FieldArgs, ReportFormat};

pub fn run(args: &FieldArgs) -> Result<(), String> {
    let sim = args.build()?;

    // The terminal is restored by the time tui::run returns, so the report
    // lands on the normal screen.
    let mut sim = crate::tui::run(sim)?;

    let report = sim
        .stop()
        .map_err(|e| format!("simulation error: {e}"))?;
    super::print_report(&report, ReportFormat::Text)
}
