use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Diagnostic single-threaded pass over the full dataset, used to validate
/// the distributed aggregate and to put the distributed latency in context.
#[derive(Debug, Serialize)]
pub struct BaselineReport {
    pub elapsed_ms: f64,
    pub checksum: i64,
}

/// Complete result of one benchmark run, assembled by the coordinator.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub timestamp: DateTime<Utc>,
    pub seed: u64,
    pub world_size: usize,
    pub element_count: usize,
    pub chunk_size: usize,
    pub remainder: usize,
    pub baseline: Option<BaselineReport>,
    pub elapsed_ms: f64,
    pub aggregate: i64,
}

/// Format a millisecond duration for display.
fn format_ms(ms: f64) -> String {
    format!("{:.3} ms", ms)
}

/// Print human-readable summary
pub fn print_summary(report: &RunReport) {
    println!(
        "\nRun: {} ranks, {} elements (chunk {}, remainder {})",
        report.world_size, report.element_count, report.chunk_size, report.remainder
    );
    println!("Seed:              {}", report.seed);

    if let Some(baseline) = &report.baseline {
        println!(
            "Sequential phase:  {} (checksum {})",
            format_ms(baseline.elapsed_ms),
            baseline.checksum
        );
    }

    println!("Distributed phase: {}", format_ms(report.elapsed_ms));
    println!("Aggregate sum:     {}", report.aggregate);

    if let Some(baseline) = &report.baseline {
        if baseline.checksum != report.aggregate {
            println!(
                "Warning: aggregate differs from sequential checksum by {}",
                baseline.checksum - report.aggregate
            );
        }
    }
    println!();
}

/// Print JSON output
pub fn print_json(report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> RunReport {
        RunReport {
            timestamp: Utc::now(),
            seed: 42,
            world_size: 4,
            element_count: 16,
            chunk_size: 4,
            remainder: 0,
            baseline: Some(BaselineReport {
                elapsed_ms: 0.52,
                checksum: 136,
            }),
            elapsed_ms: 3.125,
            aggregate: 136,
        }
    }

    #[test]
    fn test_format_ms() {
        assert_eq!(format_ms(0.0), "0.000 ms");
        assert_eq!(format_ms(3.125), "3.125 ms");
        assert_eq!(format_ms(1234.5678), "1234.568 ms");
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = sample_report();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["seed"], 42);
        assert_eq!(json["world_size"], 4);
        assert_eq!(json["aggregate"], 136);
        assert_eq!(json["baseline"]["checksum"], 136);
    }

    #[test]
    fn test_report_without_baseline_serializes_null() {
        let mut report = sample_report();
        report.baseline = None;

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["baseline"].is_null());
    }
}
