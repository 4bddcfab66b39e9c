use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    core::state::dashboard::Tab,
    domain::{course::Course, event::CampusEvent},
};

/// Messages for the logged-in dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DashboardMsg {
    // Navigation
    SelectTab(Tab),
    NextTab,
    PrevTab,
    ScrollUp,
    ScrollDown,

    // Roadmap
    ScrollPlanUp,
    ScrollPlanDown,
    CycleCourseFilter,
    RecommendCourses,

    // Data
    Refresh,

    // Assistant
    FocusInput,
    BlurInput,
    Input(KeyEvent),
    Paste(String),
    SendChat,

    Logout,

    // Backend replies
    EventsLoaded(Result<Vec<CampusEvent>, String>),
    CourseHistoryLoaded(Result<Vec<Course>, String>),
    CatalogLoaded(Result<Vec<Value>, String>),
    RecommendationReceived(Result<String, String>),
    ChatReplied(Result<String, String>),
}

impl DashboardMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, DashboardMsg::Input(_))
    }
}
