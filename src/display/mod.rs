//! Display formatting for terminal output

pub mod record;

pub use record::{format_card_total, format_line_list, format_summary, format_type_total};
