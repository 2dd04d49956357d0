use std::path::PathBuf;

use anyhow::{Context, Result};

const TITLES: [&str; 5] = [
    "Backend Engineer",
    "Data Analyst",
    "Store Manager",
    "Nurse",
    "Python Developer",
];
const INDUSTRIES: [&str; 4] = ["Software", "Finance", "Retail", "Healthcare"];
const JOB_TYPES: [&str; 4] = ["FULL_TIME", "PART_TIME", "CONTRACTOR", "INTERN"];

/// Minimal deterministic LCG so the sample is identical on every run.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/jobs.csv"));
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    writer.write_record([
        "job_title",
        "company",
        "industry",
        "job_type",
        "min_salary",
        "max_salary",
    ])?;

    let mut rng = Lcg(42);
    let mut rows = 0usize;
    for i in 0..60u64 {
        let title = TITLES[rng.below(TITLES.len() as u64) as usize];
        let industry = INDUSTRIES[rng.below(INDUSTRIES.len() as u64) as usize];
        let job_type = JOB_TYPES[rng.below(JOB_TYPES.len() as u64) as usize];
        let min = 20_000 + rng.below(80) * 1_000;
        let max = min + rng.below(60) * 1_000;
        let company = format!("Company {}", i % 13);
        let (min, max) = (min.to_string(), max.to_string());

        writer.write_record([
            title,
            company.as_str(),
            industry,
            job_type,
            min.as_str(),
            max.as_str(),
        ])?;
        rows += 1;
    }

    // Rows that exercise the edge-case policies.
    let edge_rows = [
        ["Recruiter", "Company 1", "", "FULL_TIME", "40000", "55000"],
        ["Designer", "Company 2", "Software", "CONTRACTOR", "n/a", "70000"],
        ["Analyst", "Company 3", "Finance", "FULL_TIME", "90000", "80000"],
        ["Cashier", "Company 4", "Retail", "PART_TIME", "15000", ""],
    ];
    for row in &edge_rows {
        writer.write_record(row)?;
        rows += 1;
    }

    writer.flush().context("flushing sample CSV")?;
    println!("Wrote {rows} listings to {}", output_path.display());
    Ok(())
}
