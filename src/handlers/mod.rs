pub mod analytics;
pub mod contact;
pub mod health;
pub mod payments;

pub use analytics::*;
pub use contact::*;
pub use health::*;
pub use payments::*;

use crate::services::{AnalyticsService, RecordService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub records: Arc<RecordService>,
    pub analytics: Arc<AnalyticsService>,
}
