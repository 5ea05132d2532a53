mod format;
mod json;
mod table;

pub(crate) use json::{output_run_json, output_status_json};
pub(crate) use table::{print_plot_table, print_publish_line, print_status_table};
