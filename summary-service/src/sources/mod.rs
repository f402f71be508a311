pub mod questdb;

pub use questdb::QuestDbSeriesReader;
