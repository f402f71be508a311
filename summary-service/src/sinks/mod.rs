pub mod questdb;
pub mod questdb_ilp;

pub use questdb::QuestDbSummaryWriter;
pub use questdb_ilp::QuestDbIlpSummaryWriter;
