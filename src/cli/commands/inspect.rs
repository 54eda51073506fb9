//! Single-file inspection command
//!
//! Parses one ZRXP file and prints a per-station report with merged
//! metadata, the declared column layout and a preview of the measurement
//! rows.

use std::time::Instant;

use colored::Colorize;

use super::shared::{ProcessingStats, setup_logging};
use crate::app::models::{Keyword, Station};
use crate::cli::args::InspectArgs;
use crate::{Result, ZrxpParser};

/// Run the inspect command
pub fn run_inspect(args: InspectArgs) -> Result<ProcessingStats> {
    setup_logging(args.get_log_level(), args.quiet)?;

    let start = Instant::now();
    let parser = ZrxpParser::new();
    let result = parser.parse_file(&args.file)?;

    let mut stats = ProcessingStats {
        files_processed: 1,
        stations_parsed: result.stations.len(),
        lines_skipped: result.stats.lines_skipped,
        ..Default::default()
    };
    if let Ok(metadata) = std::fs::metadata(&args.file) {
        stats.input_bytes = metadata.len();
    }

    println!("{}", format!("ZRXP file: {}", args.file.display()).bold());
    println!();

    for (index, station) in result.stations.iter().enumerate() {
        stats.rows_parsed += station.rows().len();
        print_station(index, station, args.preview_rows);
    }

    stats.processing_time = start.elapsed();

    println!("{}", "Summary".bold().underline());
    println!(
        "  Stations:      {}",
        stats.stations_parsed.to_string().green()
    );
    println!("  Data rows:     {}", stats.rows_parsed);
    println!("  Lines read:    {}", result.stats.lines_read);
    if result.stats.lines_skipped > 0 {
        println!(
            "  Lines skipped: {}",
            result.stats.lines_skipped.to_string().yellow()
        );
    }
    println!(
        "  Input size:    {}",
        ProcessingStats::format_size(stats.input_bytes)
    );
    println!("  Elapsed:       {:.2?}", stats.processing_time);

    Ok(stats)
}

fn print_station(index: usize, station: &Station, preview_rows: usize) {
    println!("{}", format!("Station {}", index + 1).cyan().bold());

    print_field("Number", station.number());
    print_field("Name", station.name());
    print_field("Water body", station.water());
    print_field("Parameter", station.get(Keyword::ParameterName));
    print_field("Unit", station.unit());
    print_field("Time zone", station.time_zone());
    print_field("Invalid marker", station.invalid_value_marker());
    print_field("Source system", station.get(Keyword::SourceSystem));

    if let Some(layout) = station.layout() {
        println!("  {:<16}{}", "Layout:", layout.join(", "));
    }

    println!("  {:<16}{}", "Rows:", station.rows().len());
    for row in station.rows().iter().take(preview_rows) {
        println!("    {}", row.join(" ").dimmed());
    }
    if station.rows().len() > preview_rows {
        println!(
            "    {}",
            format!("... {} more", station.rows().len() - preview_rows).dimmed()
        );
    }
    println!();
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("  {:<16}{}", format!("{label}:"), value);
    }
}
