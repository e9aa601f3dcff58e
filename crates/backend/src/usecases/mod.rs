pub mod u501_print_receipt;
pub mod u502_period_summary;
