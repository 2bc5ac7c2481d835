use crate::commands::Interpreter;
use crate::core::Repository;
use crate::settings::Settings;
use colored::*;
use std::collections::VecDeque;

/// Result text of one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub is_error: bool,
}

impl Rendered {
    pub fn colorize(&self) -> ColoredString {
        if self.is_error {
            self.text.red()
        } else {
            self.text.normal()
        }
    }
}

/// An interactive session: one repository, the interpreter, and the echo
/// history of every submitted line (newest first).
pub struct Session {
    repo: Repository,
    interpreter: Interpreter,
    history: VecDeque<String>,
    history_limit: usize,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self {
            repo: Repository::with_hash_strategy(settings.hash_strategy),
            interpreter: Interpreter::new(&settings.program),
            history: VecDeque::new(),
            history_limit: settings.history_limit,
        }
    }

    pub fn submit(&mut self, line: &str) -> Rendered {
        self.record(line);

        match self.interpreter.execute(&mut self.repo, line) {
            Ok(text) => Rendered {
                text,
                is_error: false,
            },
            Err(e) => Rendered {
                text: format!("Error: {}", e),
                is_error: true,
            },
        }
    }

    fn record(&mut self, line: &str) {
        if self.history_limit == 0 {
            return;
        }
        self.history.push_front(format!("$ {}", line));
        self.history.truncate(self.history_limit);
    }

    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_newest_first_and_bounded() {
        let settings = Settings {
            history_limit: 2,
            ..Settings::default()
        };
        let mut session = Session::new(&settings);

        session.submit("git init");
        session.submit("git status");
        session.submit("git log");

        let history: Vec<_> = session.history().collect();
        assert_eq!(history, vec!["$ git log", "$ git status"]);
    }

    #[test]
    fn failed_lines_are_still_recorded() {
        let mut session = Session::new(&Settings::default());
        let rendered = session.submit("ls -la");

        assert!(rendered.is_error);
        assert!(rendered.text.starts_with("Error: "));
        assert_eq!(session.history().next(), Some("$ ls -la"));
        assert!(!session.repository().is_initialized());
    }
}
