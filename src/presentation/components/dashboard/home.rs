//! Home tab: greeting plus a summary of the other sections

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{dashboard::DashboardState, AppState},
    domain::{course::status_counts, loadable::Loadable},
    presentation::{
        components::dashboard::{heading, section_placeholder},
        config::Action,
        widgets::course_table::status_color,
    },
};

const UPCOMING_EVENTS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, dashboard: &DashboardState, frame: &mut Frame, area: Rect) {
        let config = &state.config.config;
        let styles = &config.styles;
        let muted = styles.get_or("muted", Style::default().fg(Color::DarkGray));
        let student = dashboard.student();

        let mut lines = vec![
            Line::styled(
                format!("Welcome {}", student.display_name()),
                styles.get_or("accent", Style::default().bold()),
            ),
            Line::styled(
                format!("Major: {}", student.major.as_deref().unwrap_or("Not set")),
                muted,
            ),
            Line::default(),
            heading("Upcoming events", styles),
        ];

        match &dashboard.events {
            Loadable::Loaded(events) if events.is_empty() => {
                lines.push(Line::styled("No events for your major yet", muted));
            }
            Loadable::Loaded(events) => {
                lines.extend(events.iter().take(UPCOMING_EVENTS).map(|event| {
                    Line::from(vec![
                        Span::raw(format!("• {}", event.name())),
                        Span::styled(format!("  {}", event.formatted_date()), muted),
                    ])
                }));
            }
            section => {
                let hint = section_placeholder(section, "Add a major to your profile to see events")
                    .unwrap_or_default();
                lines.push(Line::styled(hint, muted));
            }
        }

        lines.push(Line::default());
        lines.push(heading("Course progress", styles));
        match &dashboard.course_history {
            Loadable::Loaded(courses) => {
                let spans: Vec<Span> = status_counts(courses)
                    .into_iter()
                    .flat_map(|(status, count)| {
                        [
                            Span::styled(
                                format!("{status} {count}"),
                                Style::default().fg(status_color(status)),
                            ),
                            Span::raw("   "),
                        ]
                    })
                    .collect();
                lines.push(Line::from(spans));
            }
            section => {
                let hint = section_placeholder(section, "No course history on file")
                    .unwrap_or_default();
                lines.push(Line::styled(hint, muted));
            }
        }

        if let Some(key) = config.keybindings.hint(Action::RecommendCourses) {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("Press {key} for course recommendations"),
                muted,
            ));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
    }
}
