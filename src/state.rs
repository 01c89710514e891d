use crate::config::AppConfig;
use crate::services::store::RecordStore;

pub struct AppState {
    pub config: AppConfig,
    pub store: Box<dyn RecordStore>,
}
