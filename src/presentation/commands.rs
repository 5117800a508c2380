// Line commands read from the terminal and mapped onto drag gestures
use crate::presentation::panel::DragEvent;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Gesture(DragEvent),
    /// Shorthand for start, over and drop in one line.
    Move { from: usize, to: usize },
    Quit,
}

impl Command {
    pub fn events(self) -> Vec<DragEvent> {
        match self {
            Command::Gesture(event) => vec![event],
            Command::Move { from, to } => {
                vec![DragEvent::Start(from), DragEvent::Over(to), DragEvent::Drop]
            }
            Command::Quit => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (try: drag N, over N, drop, end, move A B, quit)")]
    Unknown(String),
    #[error("`{0}` needs a slot number")]
    MissingSlot(&'static str),
    #[error("`{0}` is not a slot number")]
    InvalidSlot(String),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(CommandError::Unknown(String::new()));
    };

    let mut slot = |name: &'static str| -> Result<usize, CommandError> {
        let word = words.next().ok_or(CommandError::MissingSlot(name))?;
        word.parse()
            .map_err(|_| CommandError::InvalidSlot(word.to_string()))
    };

    match verb {
        "drag" => Ok(Command::Gesture(DragEvent::Start(slot("drag")?))),
        "over" => Ok(Command::Gesture(DragEvent::Over(slot("over")?))),
        "drop" => Ok(Command::Gesture(DragEvent::Drop)),
        "end" => Ok(Command::Gesture(DragEvent::End)),
        "move" => {
            let from = slot("move")?;
            let to = slot("move")?;
            Ok(Command::Move { from, to })
        }
        "quit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
