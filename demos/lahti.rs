//! Records a handful of readings for Lahti, prints some statistics,
//! then saves the series to a file and loads it back
//!
//! Run with `cargo run --example lahti`

use std::process::ExitCode;

use reading_series::ReadingSeries;

/// Readings taken at the station, in order
const DATA: [f32; 5] = [22.5, 24.0, 26.3, 21.8, 25.7];

/// Anything warmer than this counts as a hot reading
const HOT_THRESHOLD: f32 = 25.0;

const FILENAME: &str = "lahti_readings.txt";

fn print_readings(series: &ReadingSeries) {
    println!("Location: {}", series.label());
    let readings: Vec<String> = series.iter().map(|v| v.to_string()).collect();
    println!("Readings: {}", readings.join(" "));
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut series = ReadingSeries::new("Lahti");
    for reading in DATA {
        series.push(reading);
    }

    print_readings(&series);

    series.sort();

    println!("Average: {:.2}", series.average()?);
    println!(
        "Readings above {HOT_THRESHOLD:.0}°C: {}",
        series.count_above(HOT_THRESHOLD)
    );

    series.save(FILENAME)?;
    println!("Saved to file: {FILENAME}");

    let loaded = ReadingSeries::load(FILENAME)?;
    println!("\nReconstructed series:");
    print_readings(&loaded);

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
