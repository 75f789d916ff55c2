//! Schema graph to SQL DDL generation.

mod ddl;
mod types;

pub use ddl::{generate_schema_sql, generate_table_sql};
pub use types::sql_type;
