//! Line commands for the interactive session.
//!
//! Each line typed at the prompt becomes one [`SessionCommand`]. Commands that stand for page
//! events map directly onto [`UiEvent`]s so the controller's dispatch table stays the only place
//! state changes.

use symptom_core::UiEvent;

pub const HELP: &str = "\
Commands:
  search [text]      filter the symptom list (no text clears the filter)
  enter [text]       select the symptom exactly matching text (default: current search)
  click <symptom>    toggle a symptom in the list
  remove <symptom>   remove a selected symptom
  describe [text]    set the illness description
  submit             analyze the selected symptoms
  reload             fetch the symptom list again
  show               print the page
  help               print this help
  quit               leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Event(UiEvent),
    /// Keyboard commit; `None` commits whatever is in the search box.
    Commit(Option<String>),
    Reload,
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines parse to `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let required = |what: &str| -> Result<String, String> {
        if rest.is_empty() {
            Err(format!("'{word}' needs a {what}"))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" => SessionCommand::Event(UiEvent::SearchInput(rest.to_string())),
        "enter" => SessionCommand::Commit((!rest.is_empty()).then(|| rest.to_string())),
        "click" => SessionCommand::Event(UiEvent::DropdownClick(required("symptom")?)),
        "remove" => SessionCommand::Event(UiEvent::TokenRemove(required("symptom")?)),
        "describe" => SessionCommand::Event(UiEvent::DescriptionInput(rest.to_string())),
        "submit" => SessionCommand::Event(UiEvent::Submit),
        "reload" => SessionCommand::Reload,
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };

    Ok(Some(command))
}
