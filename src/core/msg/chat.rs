use serde::{Deserialize, Serialize};

/// Messages specific to ChatState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatMsg {
    UpdateInput(String),
    Submit,
    ReceiveReply(String),
}
