use crate::{
    core::{cmd::Cmd, msg::chat::ChatMsg},
    infrastructure::config::AgentConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Agent,
            text: text.into(),
        }
    }
}

/// Conversation with the (canned) topic agent
#[derive(Debug, Clone)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// Replies scheduled but not delivered yet
    pub pending_replies: usize,
    pub reply_delay_ms: u64,
    pub reply_text: String,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(&AgentConfig::default())
    }
}

impl ChatState {
    pub fn new(agent: &AgentConfig) -> Self {
        Self {
            messages: vec![
                ChatMessage::user("Lorem ipsum?"),
                ChatMessage::agent(
                    "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
                     tempor incididunt ut labore et dolore magna aliqua.",
                ),
            ],
            input: String::new(),
            pending_replies: 0,
            reply_delay_ms: agent.reply_delay_ms,
            reply_text: agent.reply_text.clone(),
        }
    }

    /// Chat-specific update function
    pub fn update(&mut self, msg: ChatMsg) -> Vec<Cmd> {
        match msg {
            ChatMsg::UpdateInput(input) => {
                self.input = input;
                vec![]
            }
            ChatMsg::Submit => {
                let text = self.input.trim().to_string();
                if text.is_empty() {
                    return vec![];
                }
                self.messages.push(ChatMessage::user(text));
                self.input.clear();
                self.pending_replies += 1;
                vec![Cmd::ScheduleAgentReply {
                    delay_ms: self.reply_delay_ms,
                    text: self.reply_text.clone(),
                }]
            }
            ChatMsg::ReceiveReply(text) => {
                self.pending_replies = self.pending_replies.saturating_sub(1);
                self.messages.push(ChatMessage::agent(text));
                vec![Cmd::RequestRender]
            }
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.pending_replies > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_seeded_conversation() {
        let chat = ChatState::default();
        assert_eq!(chat.messages.len(), 2);
        assert_eq!(chat.messages[0], ChatMessage::user("Lorem ipsum?"));
        assert_eq!(chat.messages[1].sender, Sender::Agent);
    }

    #[test]
    fn test_submit_schedules_reply() {
        let mut chat = ChatState::default();
        chat.update(ChatMsg::UpdateInput("  What changed?  ".into()));

        let cmds = chat.update(ChatMsg::Submit);

        assert_eq!(
            cmds,
            vec![Cmd::ScheduleAgentReply {
                delay_ms: 1000,
                text: "This is a dummy response from the agent.".into()
            }]
        );
        assert_eq!(chat.messages.last(), Some(&ChatMessage::user("What changed?")));
        assert!(chat.input.is_empty());
        assert!(chat.is_waiting());
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut chat = ChatState::default();
        chat.update(ChatMsg::UpdateInput("   ".into()));

        let cmds = chat.update(ChatMsg::Submit);

        assert!(cmds.is_empty());
        assert_eq!(chat.messages.len(), 2);
        assert_eq!(chat.input, "   ");
    }

    #[test]
    fn test_reply_is_appended() {
        let mut chat = ChatState::default();
        chat.update(ChatMsg::UpdateInput("hi".into()));
        chat.update(ChatMsg::Submit);

        let cmds = chat.update(ChatMsg::ReceiveReply("hello".into()));

        assert_eq!(cmds, vec![Cmd::RequestRender]);
        assert_eq!(chat.messages.last(), Some(&ChatMessage::agent("hello")));
        assert!(!chat.is_waiting());
    }
}
