//! Reusable UI widgets
//!
//! Widgets render one piece of data and know nothing about `AppState`;
//! components pick the data and styles and hand them over.

pub mod chat_log;
pub mod course_table;
pub mod event_list;
pub mod tab_bar;
pub mod text_field;
