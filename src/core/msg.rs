use serde::{Deserialize, Serialize};

pub mod auth;
pub mod dashboard;
pub mod system;

use auth::AuthMsg;
use dashboard::DashboardMsg;
use system::SystemMsg;

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Landing form operations (delegated to AuthState)
    Auth(AuthMsg),

    // Dashboard operations (delegated to DashboardState)
    Dashboard(DashboardMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Auth(msg) => msg.is_frequent(),
            Msg::Dashboard(msg) => msg.is_frequent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Auth(AuthMsg::Submit).is_frequent());
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(Msg::Auth(AuthMsg::Input(key)).is_frequent());
        assert!(Msg::Dashboard(DashboardMsg::Input(key)).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::System(SystemMsg::Quit), Msg::System(SystemMsg::Quit));
        assert_ne!(
            Msg::Dashboard(DashboardMsg::NextTab),
            Msg::Dashboard(DashboardMsg::PrevTab)
        );
    }

    #[test]
    fn test_msg_serialization() -> serde_json::Result<()> {
        let msg = Msg::System(SystemMsg::UpdateStatusMessage("test".to_string()));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
