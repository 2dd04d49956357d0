use std::borrow::Cow;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use job_insights::insights::{self, SalaryError};
use job_insights::{DataSource, LoaderConfig, RecordSet};

/// Query job listings by industry, job type and salary range
#[derive(Parser)]
#[command(name = "job-insights", version)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Listings file (.csv, .tsv or .json)
    #[arg(long, env = "JOB_INSIGHTS_DATA", default_value = "data/jobs.csv", global = true)]
    data: PathBuf,

    /// Field delimiter for CSV input
    #[arg(long, default_value = ",", global = true)]
    delimiter: char,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List distinct industries
    Industries,
    /// List distinct job types
    JobTypes,
    /// Salary aggregates over the whole file
    Salary {
        #[command(subcommand)]
        stat: SalaryStat,
    },
    /// Print the listings matching every given filter
    Filter {
        #[arg(long)]
        industry: Option<String>,
        #[arg(long)]
        job_type: Option<String>,
        /// Keep listings whose salary range contains this value
        #[arg(long)]
        salary: Option<String>,
        /// Write a JSON array instead of CSV
        #[arg(long)]
        json: bool,
    },
    /// Count case-insensitive occurrences of a word in the file
    Count { word: String },
}

#[derive(Subcommand, Clone, Copy)]
enum SalaryStat {
    /// Highest max_salary
    Max,
    /// Lowest min_salary
    Min,
    /// Lowest min_salary and highest max_salary
    Span,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if !cli.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", cli.delimiter);
    }
    let config = LoaderConfig::new().with_delimiter(cli.delimiter as u8);
    let mut source = DataSource::with_config(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Industries => {
            let jobs = load(&mut source, &cli.data)?;
            print_lines(&mut out, insights::unique_industries(&jobs))?;
        }
        Commands::JobTypes => {
            let jobs = load(&mut source, &cli.data)?;
            print_lines(&mut out, insights::unique_job_types(&jobs))?;
        }
        Commands::Salary { stat } => {
            let jobs = load(&mut source, &cli.data)?;
            let line = match stat {
                SalaryStat::Max => aggregate(insights::get_max_salary(&jobs))?.to_string(),
                SalaryStat::Min => aggregate(insights::get_min_salary(&jobs))?.to_string(),
                SalaryStat::Span => {
                    let (min, max) = aggregate(insights::salary_span(&jobs))?;
                    format!("{min}\t{max}")
                }
            };
            writeln!(out, "{line}")?;
        }
        Commands::Filter {
            industry,
            job_type,
            salary,
            json,
        } => {
            let jobs = load(&mut source, &cli.data)?;
            let mut selected: Cow<'_, RecordSet> = Cow::Borrowed(&*jobs);
            if let Some(industry) = industry {
                selected = Cow::Owned(insights::filter_by_industry(&selected, &industry));
            }
            if let Some(job_type) = job_type {
                selected = Cow::Owned(insights::filter_by_job_type(&selected, &job_type));
            }
            if let Some(salary) = salary {
                selected = Cow::Owned(insights::filter_by_salary_range(&selected, salary.as_str()));
            }
            log::info!("{} of {} listings selected", selected.len(), jobs.len());

            if json {
                serde_json::to_writer_pretty(&mut out, &selected.records)
                    .context("writing JSON output")?;
                writeln!(out)?;
            } else {
                write_csv(&mut out, &selected)?;
            }
        }
        Commands::Count { word } => {
            let n = insights::count_occurrences(&cli.data, &word)
                .with_context(|| format!("counting '{word}'"))?;
            writeln!(out, "{n}")?;
        }
    }

    Ok(())
}

fn load(source: &mut DataSource, path: &Path) -> Result<std::sync::Arc<RecordSet>> {
    source
        .read(path)
        .with_context(|| format!("loading listings from {}", path.display()))
}

fn aggregate<T>(result: std::result::Result<T, SalaryError>) -> Result<T> {
    result.context("dataset has no usable salary values")
}

fn print_lines(out: &mut impl Write, values: impl IntoIterator<Item = String>) -> Result<()> {
    for value in values {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// Header in loaded column order; fields a record lacks are written empty.
fn write_csv(out: &mut impl Write, set: &RecordSet) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(&set.column_names)
        .context("writing CSV header")?;
    for rec in set {
        writer
            .write_record(set.column_names.iter().map(|c| rec.get(c).unwrap_or("")))
            .context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV output")?;
    Ok(())
}
