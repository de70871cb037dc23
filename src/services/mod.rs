pub mod analytics;
pub mod records;
pub mod store;

pub use analytics::AnalyticsService;
pub use records::RecordService;
pub use store::{DocumentStore, MemoryStore, RedisStore};
