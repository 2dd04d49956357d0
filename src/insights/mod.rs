//! Query layer: pure functions over an already loaded [`RecordSet`].
//!
//! Nothing here touches the file system (except [`counter::count_occurrences`],
//! which reads raw text) or mutates its input; filters return new sets in
//! input order.
//!
//! [`RecordSet`]: crate::data::model::RecordSet

pub mod counter;
pub mod filter;
pub mod lookup;
pub mod salary;

pub use counter::{count_in_text, count_occurrences};
pub use filter::{filter_by, filter_by_industry, filter_by_job_type};
pub use lookup::{get_unique_values, unique_industries, unique_job_types};
pub use salary::{
    filter_by_salary_range, get_max_salary, get_min_salary, matches, parse_bounds, salary_span,
    SalaryBounds, SalaryError, SalaryInput,
};
