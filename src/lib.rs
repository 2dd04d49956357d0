//! Load job listings from CSV (or JSON) and query them by industry, job type
//! and salary range.
//!
//! ```no_run
//! use job_insights::{DataSource, insights};
//!
//! let mut source = DataSource::new();
//! let jobs = source.read("data/jobs.csv")?;
//! let software = insights::filter_by_industry(&jobs, "Software");
//! let in_range = insights::filter_by_salary_range(&software, 75_000);
//! println!("{} listings", in_range.len());
//! # Ok::<(), job_insights::DataSourceError>(())
//! ```

pub mod data;
pub mod insights;

pub use data::{DataSource, DataSourceError, LoaderConfig, Record, RecordSet};
pub use insights::{SalaryBounds, SalaryError};
