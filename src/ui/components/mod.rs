pub mod age_filter;
pub mod cost_filter;
pub mod pagination;
pub mod search_control;
pub mod toast;
pub mod units_table;
