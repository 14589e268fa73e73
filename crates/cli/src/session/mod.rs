mod ingest;
mod live;
mod offline;

pub use live::run_live;
pub use offline::run_offline;
