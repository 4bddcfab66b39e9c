use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

use crate::{
    core::{
        cmd::{ApiRequest, Cmd},
        msg::dashboard::DashboardMsg,
        state::{text_field::TextField, SessionId},
    },
    domain::{
        chat::ChatEntry,
        course::{catalog_entry_label, Course, CourseFilter},
        event::CampusEvent,
        loadable::Loadable,
        student::Student,
    },
    infrastructure::api::{ChatRequest, RecommendRequest},
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    FromRepr,
)]
pub enum Tab {
    #[default]
    Home,
    Roadmap,
    Events,
    Profile,
    Assistant,
}

impl Tab {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Tab::from_repr((self.index() + 1) % Tab::iter().len()).unwrap_or_default()
    }

    pub fn prev(self) -> Self {
        let len = Tab::iter().len();
        Tab::from_repr((self.index() + len - 1) % len).unwrap_or_default()
    }
}

/// Assistant transcript and its input line
#[derive(Debug, Clone, Default)]
pub struct AssistantState {
    pub transcript: Vec<ChatEntry>,
    pub input: TextField,
    pub input_focused: bool,
    /// Chat requests sent but not yet answered
    pub pending: usize,
    /// Lines scrolled back from the newest entry
    pub scroll: usize,
}

/// State of the logged-in dashboard
#[derive(Debug, Clone)]
pub struct DashboardState {
    session: SessionId,
    student: Student,
    pub active_tab: Tab,
    pub events: Loadable<Vec<CampusEvent>>,
    pub course_history: Loadable<Vec<Course>>,
    pub catalog: Loadable<Vec<Value>>,
    pub recommendation: Loadable<String>,
    pub course_filter: CourseFilter,
    pub selected_course: usize,
    pub selected_event: usize,
    /// Lines scrolled into the catalog and recommendation panels
    pub plan_scroll: usize,
    pub assistant: AssistantState,
    /// Set for sample data: no request leaves the dashboard
    offline: bool,
}

impl DashboardState {
    pub fn new(session: SessionId, student: Student) -> Self {
        Self {
            session,
            student,
            active_tab: Tab::default(),
            events: Loadable::Idle,
            course_history: Loadable::Idle,
            catalog: Loadable::Idle,
            recommendation: Loadable::Idle,
            course_filter: CourseFilter::default(),
            selected_course: 0,
            selected_event: 0,
            plan_scroll: 0,
            assistant: AssistantState::default(),
            offline: false,
        }
    }

    /// Keeps the dashboard from issuing backend requests
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    /// Requests issued when the dashboard is entered
    pub fn initial_loads(&mut self) -> Vec<Cmd> {
        if self.offline {
            return vec![];
        }
        [
            self.load_events(),
            self.load_course_history(),
            Some(self.load_catalog()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Course history rows that pass the current filter, in server order
    pub fn visible_courses(&self) -> Vec<&Course> {
        self.course_history
            .loaded()
            .map(|courses| self.course_filter.apply(courses))
            .unwrap_or_default()
    }

    pub fn selected_course(&self) -> Option<&Course> {
        self.visible_courses().get(self.selected_course).copied()
    }

    pub fn selected_event(&self) -> Option<&CampusEvent> {
        self.events
            .loaded()
            .and_then(|events| events.get(self.selected_event))
    }

    pub fn update(&mut self, msg: DashboardMsg) -> Vec<Cmd> {
        match msg {
            DashboardMsg::SelectTab(tab) => {
                self.select_tab(tab);
                vec![]
            }
            DashboardMsg::NextTab => {
                self.select_tab(self.active_tab.next());
                vec![]
            }
            DashboardMsg::PrevTab => {
                self.select_tab(self.active_tab.prev());
                vec![]
            }
            DashboardMsg::ScrollUp => {
                self.scroll_up();
                vec![]
            }
            DashboardMsg::ScrollDown => {
                self.scroll_down();
                vec![]
            }
            DashboardMsg::ScrollPlanUp => {
                self.plan_scroll = self.plan_scroll.saturating_sub(1);
                vec![]
            }
            DashboardMsg::ScrollPlanDown => {
                self.plan_scroll = clamp_index(self.plan_scroll + 1, self.plan_line_bound());
                vec![]
            }

            DashboardMsg::CycleCourseFilter => {
                self.course_filter = self.course_filter.next();
                self.selected_course = 0;
                vec![]
            }
            DashboardMsg::RecommendCourses => self.recommend_courses(),

            DashboardMsg::Refresh => self.refresh(),

            DashboardMsg::FocusInput => {
                self.active_tab = Tab::Assistant;
                self.assistant.input_focused = true;
                vec![]
            }
            DashboardMsg::BlurInput => {
                self.assistant.input_focused = false;
                vec![]
            }
            DashboardMsg::Input(key) => {
                if self.assistant.input_focused {
                    self.assistant.input.input(key);
                }
                vec![]
            }
            DashboardMsg::Paste(text) => {
                if self.assistant.input_focused {
                    self.assistant.input.insert_str(&text);
                }
                vec![]
            }
            DashboardMsg::SendChat => self.send_chat(),

            // Handled by the coordinator, which owns the view switch
            DashboardMsg::Logout => vec![],

            DashboardMsg::EventsLoaded(result) => {
                log_failure("events", &result);
                self.events.settle(result);
                self.selected_event = clamp_index(self.selected_event, self.event_count());
                vec![]
            }
            DashboardMsg::CourseHistoryLoaded(result) => {
                log_failure("course history", &result);
                self.course_history.settle(result);
                self.selected_course =
                    clamp_index(self.selected_course, self.visible_courses().len());
                vec![]
            }
            DashboardMsg::CatalogLoaded(result) => {
                log_failure("course catalog", &result);
                self.catalog.settle(result);
                vec![]
            }
            DashboardMsg::RecommendationReceived(result) => {
                log_failure("recommendation", &result);
                self.recommendation.settle(result);
                self.plan_scroll = 0;
                vec![]
            }
            DashboardMsg::ChatReplied(result) => {
                self.assistant.pending = self.assistant.pending.saturating_sub(1);
                let entry = match result {
                    Ok(text) => ChatEntry::assistant(text),
                    Err(error) => {
                        log::warn!("Chat request failed: {error}");
                        ChatEntry::error(format!("Could not reach the assistant: {error}"))
                    }
                };
                self.assistant.transcript.push(entry);
                self.assistant.scroll = 0;
                vec![]
            }
        }
    }

    fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        if tab != Tab::Assistant {
            self.assistant.input_focused = false;
        }
    }

    fn scroll_up(&mut self) {
        match self.active_tab {
            Tab::Roadmap => self.selected_course = self.selected_course.saturating_sub(1),
            Tab::Events => self.selected_event = self.selected_event.saturating_sub(1),
            Tab::Assistant => self.assistant.scroll = self.assistant.scroll.saturating_add(1),
            Tab::Home | Tab::Profile => {}
        }
    }

    fn scroll_down(&mut self) {
        match self.active_tab {
            Tab::Roadmap => {
                self.selected_course =
                    clamp_index(self.selected_course + 1, self.visible_courses().len())
            }
            Tab::Events => {
                self.selected_event = clamp_index(self.selected_event + 1, self.event_count())
            }
            Tab::Assistant => self.assistant.scroll = self.assistant.scroll.saturating_sub(1),
            Tab::Home | Tab::Profile => {}
        }
    }

    /// Upper bound on the wrapped height of the catalog and recommendation
    /// panels. The renderer clamps further to what fits on screen.
    fn plan_line_bound(&self) -> usize {
        let catalog = self.catalog.loaded().map_or(0, |entries| {
            entries
                .iter()
                .map(|entry| word_lines(&catalog_entry_label(entry)))
                .sum()
        });
        let recommendation = self.recommendation.loaded().map_or(0, |text| word_lines(text));
        catalog.max(recommendation)
    }

    fn event_count(&self) -> usize {
        self.events.loaded().map_or(0, Vec::len)
    }

    fn refresh(&mut self) -> Vec<Cmd> {
        if self.offline {
            return vec![];
        }
        let cmds: Vec<Option<Cmd>> = match self.active_tab {
            Tab::Home => return self.initial_loads(),
            Tab::Roadmap => vec![self.load_course_history(), Some(self.load_catalog())],
            Tab::Events => vec![self.load_events()],
            Tab::Profile | Tab::Assistant => vec![],
        };
        cmds.into_iter().flatten().collect()
    }

    fn load_events(&mut self) -> Option<Cmd> {
        let major = self.student.major.clone()?;
        self.events = Loadable::Loading;
        Some(Cmd::api(self.session, ApiRequest::FetchEvents { major }))
    }

    fn load_course_history(&mut self) -> Option<Cmd> {
        let user_id = self.student.id.clone()?;
        self.course_history = Loadable::Loading;
        Some(Cmd::api(
            self.session,
            ApiRequest::FetchCourseHistory { user_id },
        ))
    }

    fn load_catalog(&mut self) -> Cmd {
        self.catalog = Loadable::Loading;
        Cmd::api(self.session, ApiRequest::FetchCourseCatalog)
    }

    fn recommend_courses(&mut self) -> Vec<Cmd> {
        if self.offline || self.recommendation.is_loading() {
            return vec![];
        }
        let request = RecommendRequest {
            course_history: self.course_history.loaded().cloned().unwrap_or_default(),
            course_catalog: self.catalog.loaded().cloned().unwrap_or_default(),
        };
        self.recommendation = Loadable::Loading;
        vec![Cmd::api(
            self.session,
            ApiRequest::RecommendCourses(request),
        )]
    }

    fn send_chat(&mut self) -> Vec<Cmd> {
        if self.assistant.input.is_blank() {
            return vec![];
        }
        let message = self.assistant.input.trimmed();
        self.assistant.input.clear();
        self.assistant
            .transcript
            .push(ChatEntry::student(message.clone()));
        self.assistant.scroll = 0;
        if self.offline {
            self.assistant
                .transcript
                .push(ChatEntry::error("The assistant is not available in preview mode"));
            return vec![];
        }
        self.assistant.pending += 1;

        vec![Cmd::api(
            self.session,
            ApiRequest::Chat(ChatRequest {
                message,
                major: self.student.major.clone(),
                first_name: self.student.first_name.clone(),
            }),
        )]
    }
}

/// Line count if every word landed on its own line
fn word_lines(text: &str) -> usize {
    text.lines()
        .map(|line| line.split_whitespace().count().max(1))
        .sum()
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

fn log_failure<T>(section: &str, result: &Result<T, String>) {
    if let Err(error) = result {
        log::warn!("Failed to load {section}: {error}");
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::{chat::ChatRole, course::CourseStatus};

    fn student() -> Student {
        Student {
            username: "butch".to_string(),
            first_name: Some("Butch".to_string()),
            last_name: None,
            major: Some("Computer Science".to_string()),
            id: Some("42".to_string()),
        }
    }

    fn course(name: &str, status: CourseStatus) -> Course {
        Course {
            id: None,
            name: name.to_string(),
            description: None,
            prerequisites: None,
            status,
        }
    }

    fn requests(cmds: Vec<Cmd>) -> Vec<ApiRequest> {
        cmds.into_iter()
            .filter_map(|cmd| match cmd {
                Cmd::Api(call) => Some(call.request),
                _ => None,
            })
            .collect()
    }

    fn type_into(state: &mut DashboardState, text: &str) {
        for c in text.chars() {
            state.update(DashboardMsg::Input(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::NONE,
            )));
        }
    }

    #[rstest]
    #[case(Tab::Home, Tab::Roadmap, Tab::Assistant)]
    #[case(Tab::Assistant, Tab::Home, Tab::Profile)]
    fn test_tab_wraps(#[case] tab: Tab, #[case] next: Tab, #[case] prev: Tab) {
        assert_eq!(tab.next(), next);
        assert_eq!(tab.prev(), prev);
    }

    #[test]
    fn test_initial_loads_sets_sections_loading() {
        let mut state = DashboardState::new(SessionId(1), student());
        let cmds = state.initial_loads();

        assert_eq!(cmds.len(), 3);
        assert!(state.events.is_loading());
        assert!(state.course_history.is_loading());
        assert!(state.catalog.is_loading());
        assert_eq!(state.recommendation, Loadable::Idle);
    }

    #[test]
    fn test_missing_major_and_id_stay_idle() {
        let mut state = DashboardState::new(SessionId(1), Student::new("butch"));
        let cmds = state.initial_loads();

        assert_eq!(requests(cmds), vec![ApiRequest::FetchCourseCatalog]);
        assert_eq!(state.events, Loadable::Idle);
        assert_eq!(state.course_history, Loadable::Idle);
    }

    #[rstest]
    #[case(Tab::Home, 3)]
    #[case(Tab::Roadmap, 2)]
    #[case(Tab::Events, 1)]
    #[case(Tab::Profile, 0)]
    #[case(Tab::Assistant, 0)]
    fn test_refresh_per_tab(#[case] tab: Tab, #[case] expected: usize) {
        let mut state = DashboardState::new(SessionId(1), student());
        state.update(DashboardMsg::SelectTab(tab));
        assert_eq!(state.update(DashboardMsg::Refresh).len(), expected);
    }

    #[test]
    fn test_course_filter_and_selection() {
        let mut state = DashboardState::new(SessionId(1), student());
        state.update(DashboardMsg::CourseHistoryLoaded(Ok(vec![
            course("CptS 121", CourseStatus::Passed),
            course("CptS 122", CourseStatus::Enrolled),
            course("Math 171", CourseStatus::Passed),
        ])));
        state.update(DashboardMsg::SelectTab(Tab::Roadmap));

        for _ in 0..5 {
            state.update(DashboardMsg::ScrollDown);
        }
        assert_eq!(state.selected_course().map(|c| c.name.as_str()), Some("Math 171"));

        state.update(DashboardMsg::CycleCourseFilter);
        assert_eq!(state.course_filter, CourseFilter::Status(CourseStatus::Enrolled));
        let names: Vec<&str> = state.visible_courses().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["CptS 122"]);
        assert_eq!(state.selected_course, 0);
    }

    #[test]
    fn test_recommend_sends_loaded_or_empty_data() {
        let mut state = DashboardState::new(SessionId(1), student());
        let history = vec![course("CptS 121", CourseStatus::Passed)];
        state.update(DashboardMsg::CourseHistoryLoaded(Ok(history.clone())));

        let cmds = state.update(DashboardMsg::RecommendCourses);

        assert_eq!(
            requests(cmds),
            vec![ApiRequest::RecommendCourses(RecommendRequest {
                course_history: history,
                course_catalog: vec![],
            })]
        );
        assert!(state.recommendation.is_loading());
        assert!(state.update(DashboardMsg::RecommendCourses).is_empty());

        state.update(DashboardMsg::RecommendationReceived(Ok("Take CptS 122".to_string())));
        assert_eq!(
            state.recommendation,
            Loadable::Loaded("Take CptS 122".to_string())
        );
    }

    #[test]
    fn test_send_chat_flow() {
        let mut state = DashboardState::new(SessionId(1), student());
        state.update(DashboardMsg::FocusInput);
        assert_eq!(state.active_tab, Tab::Assistant);

        type_into(&mut state, "What should I take?");
        let cmds = state.update(DashboardMsg::SendChat);

        assert_eq!(
            requests(cmds),
            vec![ApiRequest::Chat(ChatRequest {
                message: "What should I take?".to_string(),
                major: Some("Computer Science".to_string()),
                first_name: Some("Butch".to_string()),
            })]
        );
        assert_eq!(state.assistant.input.value(), "");
        assert_eq!(state.assistant.pending, 1);

        state.update(DashboardMsg::ChatReplied(Err("timed out".to_string())));
        assert_eq!(state.assistant.pending, 0);
        let roles: Vec<ChatRole> = state.assistant.transcript.iter().map(|e| e.role).collect();
        assert_eq!(roles, vec![ChatRole::Student, ChatRole::Error]);
        assert_eq!(
            state.assistant.transcript[1].text,
            "Could not reach the assistant: timed out"
        );
    }

    #[test]
    fn test_blank_chat_is_ignored() {
        let mut state = DashboardState::new(SessionId(1), student());
        state.update(DashboardMsg::FocusInput);
        type_into(&mut state, "   ");

        assert!(state.update(DashboardMsg::SendChat).is_empty());
        assert!(state.assistant.transcript.is_empty());
    }

    #[test]
    fn test_input_ignored_when_not_focused() {
        let mut state = DashboardState::new(SessionId(1), student());
        type_into(&mut state, "hi");
        assert_eq!(state.assistant.input.value(), "");

        state.update(DashboardMsg::FocusInput);
        state.update(DashboardMsg::SelectTab(Tab::Home));
        assert!(!state.assistant.input_focused);
    }

    #[test]
    fn test_failed_events_are_kept_as_error() {
        let mut state = DashboardState::new(SessionId(1), student());
        state.initial_loads();
        state.update(DashboardMsg::EventsLoaded(Err("500".to_string())));
        assert_eq!(state.events.error(), Some("500"));
        assert!(state.selected_event().is_none());
    }

    #[test]
    fn test_plan_scroll_stops_at_text_length() {
        let mut state = DashboardState::new(SessionId(1), student());
        state.recommendation = Loadable::Loaded("Take\nCPTS 223".to_string());

        for _ in 0..10 {
            state.update(DashboardMsg::ScrollPlanDown);
        }
        // Three words, so at most three wrapped lines
        assert_eq!(state.plan_scroll, 2);

        state.update(DashboardMsg::ScrollPlanUp);
        assert_eq!(state.plan_scroll, 1);
    }

    #[test]
    fn test_new_recommendation_resets_plan_scroll() {
        let mut state = DashboardState::new(SessionId(1), student());
        state.recommendation = Loadable::Loaded("one two three four".to_string());
        state.update(DashboardMsg::ScrollPlanDown);
        assert_eq!(state.plan_scroll, 1);

        state.update(DashboardMsg::RecommendCourses);
        state.update(DashboardMsg::RecommendationReceived(Ok("fresh".to_string())));
        assert_eq!(state.plan_scroll, 0);
    }

    #[test]
    fn test_offline_dashboard_sends_nothing() {
        let mut state = DashboardState::new(SessionId(1), student()).offline();
        assert!(state.initial_loads().is_empty());
        assert!(state.update(DashboardMsg::Refresh).is_empty());
        assert!(state.update(DashboardMsg::RecommendCourses).is_empty());
        assert_eq!(state.events, Loadable::Idle);
        assert_eq!(state.recommendation, Loadable::Idle);
    }
}
