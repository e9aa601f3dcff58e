pub mod report;
pub mod service;

pub use report::{render_period_summary, select_period};
