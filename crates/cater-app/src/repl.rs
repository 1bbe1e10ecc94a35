//! Terminal host: command parsing and transcript rendering.
//!
//! Lines starting with `/` are host commands; a bare number picks a
//! suggestion chip from the last assistant message; anything else is sent
//! to the assistant.

use colored::Colorize;

use cater_chat::{validate_utterance, ChatError, Message, MessageRole};
use cater_core::catalog::ServiceCatalog;
use cater_core::types::{Language, PageContext};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open,
    Close,
    Lang(Language),
    Page(PageContext),
    Section(String),
    Services,
    View(String),
    Memory,
    ClearMemory,
    Reset,
    Help,
    Quit,
    /// 1-based suggestion chip index.
    Pick(usize),
    Say(String),
}

impl Command {
    /// Parse a raw input line. Blank lines are `EmptyMessage`.
    pub fn parse(line: &str) -> Result<Self, ChatError> {
        let text = validate_utterance(line)?;

        let Some(rest) = text.strip_prefix('/') else {
            return Ok(match text.parse::<usize>() {
                Ok(n) if n > 0 => Command::Pick(n),
                _ => Command::Say(text.to_string()),
            });
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        let unknown = || ChatError::UnknownCommand(text.to_string());

        let command = match (name, arg.is_empty()) {
            ("open", true) => Command::Open,
            ("close", true) => Command::Close,
            ("lang", false) => Command::Lang(arg.parse().map_err(|_| unknown())?),
            ("page", false) => Command::Page(arg.parse().map_err(|_| unknown())?),
            ("section", false) => Command::Section(arg.to_string()),
            ("services", true) => Command::Services,
            ("view", false) => Command::View(arg.to_string()),
            ("memory", true) => Command::Memory,
            ("clear-memory", true) => Command::ClearMemory,
            ("reset", true) => Command::Reset,
            ("help", true) => Command::Help,
            ("quit" | "exit", true) => Command::Quit,
            _ => return Err(unknown()),
        };
        Ok(command)
    }
}

pub const HELP: &str = "\
Commands:
  /open                 open the chat widget
  /close                close the chat widget
  /lang <tr|en>         switch language (restarts the conversation)
  /page <context>       home, service-list or service-detail
  /section <id>         scroll to a landing-page section (services, proof, ...)
  /services             list the catering services
  /view <slug>          open a service page
  /memory               show what the assistant remembers
  /clear-memory         forget remembered interests
  /reset                clear the conversation
  /help                 show this help
  /quit                 exit
  <number>              pick a suggestion from the last reply
  anything else         ask the assistant";

/// Print one message with its role label and numbered suggestions.
pub fn print_message(message: &Message) {
    let label = match message.role {
        MessageRole::User => format!("[{}] you", message.display_time()).green(),
        MessageRole::Assistant => format!("[{}] assistant", message.display_time()).bright_magenta(),
    };
    println!("{}", label);
    for line in message.content.lines() {
        match message.role {
            MessageRole::User => println!("{}", line),
            MessageRole::Assistant => println!("{}", line.bright_blue()),
        }
    }
    for (i, suggestion) in message.suggestion_list().iter().enumerate() {
        println!("  {}", format!("{}) {}", i + 1, suggestion).bright_black());
    }
    println!();
}

/// Print the service catalog in `language`.
pub fn print_services(catalog: &ServiceCatalog, language: Language) {
    for entry in catalog.entries() {
        println!(
            "  {}  {} ({})",
            entry.id.slug().bright_cyan(),
            entry.title(language),
            entry.event_size(language).bright_black()
        );
    }
}

/// Suggestion `n` (1-based) of the last assistant message.
pub fn pick_suggestion(messages: &[Message], n: usize) -> Option<String> {
    messages
        .iter()
        .rev()
        .find(|m| m.role == MessageRole::Assistant)
        .and_then(|m| m.suggestion_list().get(n.checked_sub(1)?).cloned())
}
