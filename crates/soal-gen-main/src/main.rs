// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use rand::Rng;
use serde::Serialize;
use soal_model::prelude::*;
use std::{
    fs::File,
    io::{BufWriter, Write},
};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

const REPORT_FILE: &str = "generation_report.json";

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, Clone, Copy)]
enum JobKind {
    Uniform {
        house_ratio: f64,
        tree_ratio: f64,
        houses_per_station: usize,
    },
    Clustered {
        clusters: usize,
        houses_per_cluster: usize,
        tree_ratio: f64,
        houses_per_station: usize,
    },
}

#[derive(Debug, Clone)]
struct Job {
    file: String,
    rows: usize,
    cols: usize,
    kind: JobKind,
}

impl Job {
    fn run(&self, seed: u64) -> Result<GenerationSummary, GenerateError> {
        match self.kind {
            JobKind::Uniform {
                house_ratio,
                tree_ratio,
                houses_per_station,
            } => generate_random(
                &self.file,
                self.rows,
                self.cols,
                house_ratio,
                tree_ratio,
                houses_per_station,
                seed,
            ),
            JobKind::Clustered {
                clusters,
                houses_per_cluster,
                tree_ratio,
                houses_per_station,
            } => generate_clustered(
                &self.file,
                self.rows,
                self.cols,
                clusters,
                houses_per_cluster,
                tree_ratio,
                houses_per_station,
                seed,
            ),
        }
    }
}

/// Houses 15-20%, trees 20-25%, 15-20 houses per station.
const UNIFORM_PRESETS: [(f64, f64, usize); 3] = [(0.15, 0.20, 20), (0.18, 0.23, 18), (0.20, 0.25, 15)];

const GRID_SIZES: [(&str, usize); 3] = [("small", 20), ("medium", 40), ("large", 80)];

/// (name, side, clusters, houses per cluster, tree ratio, houses per station)
const CLUSTER_PRESETS: [(&str, usize, usize, usize, f64, usize); 3] = [
    ("small", 30, 3, 20, 0.22, 18),
    ("medium", 50, 5, 30, 0.22, 18),
    ("large", 60, 4, 50, 0.22, 20),
];

fn uniform_jobs() -> Vec<Job> {
    GRID_SIZES
        .iter()
        .flat_map(|&(size, side)| {
            UNIFORM_PRESETS.iter().enumerate().map(
                move |(i, &(house_ratio, tree_ratio, houses_per_station))| Job {
                    file: format!("test_{}_{}.txt", size, i + 1),
                    rows: side,
                    cols: side,
                    kind: JobKind::Uniform {
                        house_ratio,
                        tree_ratio,
                        houses_per_station,
                    },
                },
            )
        })
        .collect()
}

fn clustered_jobs() -> Vec<Job> {
    CLUSTER_PRESETS
        .iter()
        .map(
            |&(size, side, clusters, houses_per_cluster, tree_ratio, houses_per_station)| Job {
                file: format!("test_clustered_{}.txt", size),
                rows: side,
                cols: side,
                kind: JobKind::Clustered {
                    clusters,
                    houses_per_cluster,
                    tree_ratio,
                    houses_per_station,
                },
            },
        )
        .collect()
}

#[derive(Debug, Clone, Serialize)]
struct FailedJob {
    file: String,
    seed: u64,
    error: String,
}

#[derive(Debug, Clone, Serialize)]
struct BatchReport {
    base_seed: u64,
    generated: Vec<GenerationSummary>,
    failed: Vec<FailedJob>,
}

impl BatchReport {
    fn record(&mut self, job: &Job, seed: u64, result: Result<GenerationSummary, GenerateError>) {
        let (mut out, mut err) = (std::io::stdout(), std::io::stderr());
        if let Err(e) = self.record_to(job, seed, result, &mut out, &mut err) {
            error!(error = %e, "Could not print job result");
        }
    }

    /// Summary lines go to `out`, one `Error: ...` line per failure to `err`.
    fn record_to<O: Write, E: Write>(
        &mut self,
        job: &Job,
        seed: u64,
        result: Result<GenerationSummary, GenerateError>,
        out: &mut O,
        err: &mut E,
    ) -> std::io::Result<()> {
        match result {
            Ok(summary) => {
                writeln!(out, "{}", summary)?;
                self.generated.push(summary);
            }
            Err(e) => {
                debug!(file = %job.file, seed, error = %e, "Generation failed");
                writeln!(err, "Error: {}", e)?;
                self.failed.push(FailedJob {
                    file: job.file.clone(),
                    seed,
                    error: e.to_string(),
                });
            }
        }
        Ok(())
    }

    fn write(&self) -> Result<(), Box<dyn std::error::Error>> {
        let file = File::create(REPORT_FILE)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

fn main() {
    enable_tracing();

    let base_seed: u64 = rand::rng().random();
    info!(base_seed, "Starting batch");

    let uniform = uniform_jobs();
    let clustered = clustered_jobs();

    let mut report = BatchReport {
        base_seed,
        generated: Vec::with_capacity(uniform.len() + clustered.len()),
        failed: Vec::new(),
    };

    println!("Generating test cases...");
    println!();

    let mut seed = base_seed;
    for job in &uniform {
        report.record(job, seed, job.run(seed));
        seed = seed.wrapping_add(1);
    }

    println!();

    for job in &clustered {
        report.record(job, seed, job.run(seed));
        seed = seed.wrapping_add(1);
    }

    if let Err(e) = report.write() {
        error!(error = %e, file = REPORT_FILE, "Could not write batch report");
    } else {
        info!(file = REPORT_FILE, "Batch report written");
    }

    println!();
    if report.failed.is_empty() {
        println!("All test cases generated successfully!");
    } else {
        println!(
            "{} of {} test cases failed.",
            report.failed.len(),
            report.failed.len() + report.generated.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_has_the_twelve_fixed_files() {
        let files: Vec<String> = uniform_jobs()
            .into_iter()
            .chain(clustered_jobs())
            .map(|j| j.file)
            .collect();
        assert_eq!(
            files,
            vec![
                "test_small_1.txt",
                "test_small_2.txt",
                "test_small_3.txt",
                "test_medium_1.txt",
                "test_medium_2.txt",
                "test_medium_3.txt",
                "test_large_1.txt",
                "test_large_2.txt",
                "test_large_3.txt",
                "test_clustered_small.txt",
                "test_clustered_medium.txt",
                "test_clustered_large.txt",
            ]
        );
    }

    #[test]
    fn presets_fit_their_grids() {
        for job in uniform_jobs().into_iter().chain(clustered_jobs()) {
            let dims = GridDims::new(job.rows, job.cols).unwrap();
            let (houses, trees) = match job.kind {
                JobKind::Uniform {
                    house_ratio,
                    tree_ratio,
                    ..
                } => (
                    ratio_count(dims.cells(), house_ratio),
                    ratio_count(dims.cells(), tree_ratio),
                ),
                JobKind::Clustered {
                    clusters,
                    houses_per_cluster,
                    tree_ratio,
                    ..
                } => (
                    clusters * houses_per_cluster,
                    ratio_count(dims.cells(), tree_ratio),
                ),
            };
            assert!(houses + trees < dims.cells(), "{} overflows", job.file);
        }
    }

    #[test]
    fn failed_job_is_recorded_and_batch_continues() {
        let job = Job {
            file: std::env::temp_dir()
                .join(format!("soal-gen-{}-missing", std::process::id()))
                .join("t.txt")
                .display()
                .to_string(),
            rows: 5,
            cols: 5,
            kind: JobKind::Uniform {
                house_ratio: 0.2,
                tree_ratio: 0.2,
                houses_per_station: 2,
            },
        };
        let mut report = BatchReport {
            base_seed: 0,
            generated: Vec::new(),
            failed: Vec::new(),
        };
        let (mut out, mut err) = (Vec::new(), Vec::new());
        report
            .record_to(&job, 0, job.run(0), &mut out, &mut err)
            .unwrap();
        assert_eq!(report.failed.len(), 1);
        assert!(report.generated.is_empty());
        assert_eq!(report.failed[0].file, job.file);

        assert!(out.is_empty());
        let err = String::from_utf8(err).unwrap();
        assert_eq!(err.lines().count(), 1);
        assert_eq!(err, format!("Error: {}\n", report.failed[0].error));
    }
}
