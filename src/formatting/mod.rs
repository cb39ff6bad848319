pub mod records;
pub mod utils;

pub use records::{
    print_record, print_records, print_session, print_sidebar, row_cells, table_columns,
    OutputFormat,
};
