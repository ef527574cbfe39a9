use std::sync::Arc;

use crate::gemini::CourseModel;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn CourseModel>,
}
