use serde::{Deserialize, Serialize};

/// Messages handled by `SystemState`: lifecycle, resize and the status line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    // System control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Status management
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}

impl SystemMsg {
    /// Resizes arrive in bursts while the window is dragged
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::Resize(..))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(SystemMsg::Resize(80, 24), true)]
    #[case(SystemMsg::Quit, false)]
    #[case(SystemMsg::Resume, false)]
    #[case(SystemMsg::ShowError("backend down".to_string()), false)]
    fn test_is_frequent(#[case] msg: SystemMsg, #[case] expected: bool) {
        assert_eq!(msg.is_frequent(), expected);
    }

    #[test]
    fn test_status_message_survives_serialization() -> serde_json::Result<()> {
        let msg = SystemMsg::UpdateStatusMessage("Looking up your plan...".to_string());
        let restored: SystemMsg = serde_json::from_str(&serde_json::to_string(&msg)?)?;
        assert_eq!(restored, msg);
        Ok(())
    }
}
