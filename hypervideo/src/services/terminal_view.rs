//! Line-based view that asks leave questions on a terminal

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tracing::debug;

use crate::traits::{EditorView, LeaveChoice};

const PROMPT: &str = "Your changes in the current video will be lost if you don't save them.\n\
                      Do you want to save your changes? [y]es / [n]o, discard / [c]ancel: ";

pub fn parse_choice(answer: &str) -> Option<LeaveChoice> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "s" | "save" => Some(LeaveChoice::Save),
        "n" | "no" | "d" | "discard" => Some(LeaveChoice::Discard),
        "c" | "cancel" => Some(LeaveChoice::Cancel),
        _ => None,
    }
}

pub struct TerminalView {
    input: Mutex<Box<dyn AsyncBufRead + Unpin + Send>>,
}

impl TerminalView {
    pub fn stdin() -> Self {
        Self::with_input(BufReader::new(tokio::io::stdin()))
    }

    pub fn with_input(input: impl AsyncBufRead + Unpin + Send + 'static) -> Self {
        Self {
            input: Mutex::new(Box::new(input)),
        }
    }
}

#[async_trait]
impl EditorView for TerminalView {
    /// Ask until a valid answer is given; end of input counts as cancel
    async fn confirm_leave(&self) -> LeaveChoice {
        let mut input = self.input.lock().await;
        loop {
            eprint!("{PROMPT}");
            let mut line = String::new();
            match input.read_line(&mut line).await {
                Ok(0) | Err(_) => return LeaveChoice::Cancel,
                Ok(_) => {
                    if let Some(choice) = parse_choice(&line) {
                        return choice;
                    }
                }
            }
        }
    }

    fn collapse_fullscreen(&self) {
        debug!("Collapsing fullscreen");
    }
}
