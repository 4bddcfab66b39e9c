//! Fixed sample data for `--preview`, which shows the dashboard without a backend.

use serde_json::json;

use crate::{
    core::state::{dashboard::DashboardState, SessionId},
    domain::{
        chat::ChatEntry,
        course::{Course, CourseStatus},
        event::CampusEvent,
        loadable::Loadable,
        student::Student,
    },
};

pub fn sample_student() -> Student {
    Student {
        username: "kevin".to_string(),
        first_name: Some("Kevin".to_string()),
        last_name: Some("Cougar".to_string()),
        major: Some("Computer Science".to_string()),
        id: Some("1".to_string()),
    }
}

fn sample_event(name: &str, description: &str, date: &str, time: &str, kind: &str) -> CampusEvent {
    CampusEvent {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        date: Some(date.to_string()),
        time: Some(time.to_string()),
        kind: Some(kind.to_string()),
    }
}

fn sample_course(id: &str, name: &str, prerequisites: Option<&str>, status: CourseStatus) -> Course {
    Course {
        id: Some(id.to_string()),
        name: name.to_string(),
        description: None,
        prerequisites: prerequisites.map(str::to_string),
        status,
    }
}

pub fn sample_events() -> Vec<CampusEvent> {
    vec![
        sample_event(
            "Hackathon Kickoff",
            "Form teams and pitch ideas for the weekend hackathon.",
            "2025-10-03",
            "18:00",
            "Competition",
        ),
        sample_event(
            "Career Fair: Software",
            "Meet recruiters hiring interns and new grads.",
            "2025-10-15",
            "10:00",
            "Career",
        ),
        sample_event(
            "ACM Tech Talk",
            "Systems programming in practice.",
            "2025-11-04",
            "17:30",
            "Talk",
        ),
    ]
}

pub fn sample_courses() -> Vec<Course> {
    vec![
        sample_course("CPTS 121", "Program Design and Development C/C++", None, CourseStatus::Passed),
        sample_course("MATH 171", "Calculus I", None, CourseStatus::Passed),
        sample_course("CPTS 122", "Data Structures C/C++", Some("CPTS 121"), CourseStatus::Enrolled),
        sample_course("MATH 216", "Discrete Structures", Some("MATH 171"), CourseStatus::Enrolled),
        sample_course("PHYS 201", "Physics for Scientists and Engineers I", Some("MATH 171"), CourseStatus::Withdrawed),
    ]
}

/// A logged-in dashboard with every section already loaded. It never talks
/// to the backend.
pub fn sample_dashboard(session: SessionId) -> DashboardState {
    let mut dashboard = DashboardState::new(session, sample_student()).offline();
    dashboard.events = Loadable::Loaded(sample_events());
    dashboard.course_history = Loadable::Loaded(sample_courses());
    dashboard.catalog = Loadable::Loaded(vec![
        json!({"course_name": "CPTS 223", "course_description": "Advanced Data Structures"}),
        json!({"course_name": "CPTS 260", "course_description": "Computer Architecture"}),
    ]);
    dashboard.recommendation = Loadable::Loaded(
        "Next term, take CPTS 223 and CPTS 260 to stay on track for graduation.".to_string(),
    );
    dashboard.assistant.transcript = vec![
        ChatEntry::student("Which class should I take after Data Structures?"),
        ChatEntry::assistant("CPTS 223 builds directly on CPTS 122."),
    ];
    dashboard
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{msg::dashboard::DashboardMsg, state::dashboard::Tab},
        domain::chat::ChatRole,
    };

    #[test]
    fn test_sample_dashboard_is_fully_loaded() {
        let dashboard = sample_dashboard(SessionId(1));

        assert_eq!(dashboard.student().display_name(), "Kevin");
        assert_eq!(dashboard.events.loaded().map(Vec::len), Some(3));
        assert_eq!(dashboard.course_history.loaded().map(Vec::len), Some(5));
        assert!(dashboard.catalog.loaded().is_some());
        assert!(dashboard.recommendation.loaded().is_some());
        assert!(dashboard.is_offline());
    }

    #[test]
    fn test_sample_dashboard_stays_offline() {
        let mut dashboard = sample_dashboard(SessionId(1));

        for tab in [Tab::Home, Tab::Roadmap, Tab::Events] {
            dashboard.update(DashboardMsg::SelectTab(tab));
            assert!(dashboard.update(DashboardMsg::Refresh).is_empty());
        }
        assert!(dashboard.update(DashboardMsg::RecommendCourses).is_empty());
        assert!(dashboard.initial_loads().is_empty());

        assert_eq!(dashboard.events.loaded().map(Vec::len), Some(3));
        assert_eq!(dashboard.course_history.loaded().map(Vec::len), Some(5));
        assert!(dashboard.catalog.loaded().is_some());
        assert!(dashboard.recommendation.loaded().is_some());
    }

    #[test]
    fn test_sample_dashboard_chat_answers_locally() {
        let mut dashboard = sample_dashboard(SessionId(1));
        dashboard.update(DashboardMsg::FocusInput);
        dashboard.update(DashboardMsg::Paste("hello".to_string()));

        assert!(dashboard.update(DashboardMsg::SendChat).is_empty());

        let roles: Vec<ChatRole> = dashboard
            .assistant
            .transcript
            .iter()
            .skip(2)
            .map(|entry| entry.role)
            .collect();
        assert_eq!(roles, vec![ChatRole::Student, ChatRole::Error]);
        assert_eq!(dashboard.assistant.pending, 0);
        assert!(dashboard.assistant.input.is_blank());
    }
}
