use super::{Upload, WidgetState};
use crate::error::{Error, Result};
use std::path::PathBuf;
use std::str::FromStr;

/// One line of input in interactive mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Upload(PathBuf),
    UseDefault,
    Title(String),
    Review(String),
    Analyze,
    Pie(String),
    Compare(String, String),
    Show,
    Quit,
}

pub const EVENT_HELP: &str = "\
Commands:
  upload PATH        Use a CSV file as the dataset
  default            Go back to the bundled dataset
  title SHOW         Pick the show for your own review
  review TEXT        Type your own review
  analyze            Classify your review
  pie SHOW           Pick the show for the pie chart
  compare A | B      Pick two shows to compare
  show               Re-render the page
  quit               Exit";

impl FromStr for Event {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let require = |what: &str| -> Result<String> {
            if rest.is_empty() {
                Err(Error::InvalidEvent(format!("{command} needs {what}")))
            } else {
                Ok(rest.to_string())
            }
        };

        match command {
            "upload" => Ok(Event::Upload(PathBuf::from(require("a path")?))),
            "default" => Ok(Event::UseDefault),
            "title" => Ok(Event::Title(require("a show")?)),
            // An empty review is allowed; the classifier reports it.
            "review" => Ok(Event::Review(rest.to_string())),
            "analyze" => Ok(Event::Analyze),
            "pie" => Ok(Event::Pie(require("a show")?)),
            "compare" => {
                let spec = require("two shows")?;
                match spec.split_once('|') {
                    Some((a, b)) if !a.trim().is_empty() && !b.trim().is_empty() => {
                        Ok(Event::Compare(a.trim().to_string(), b.trim().to_string()))
                    }
                    _ => Err(Error::InvalidEvent("compare expects: compare A | B".to_string())),
                }
            }
            "show" | "" => Ok(Event::Show),
            "quit" | "exit" => Ok(Event::Quit),
            other => Err(Error::InvalidEvent(format!("unknown command: {other}"))),
        }
    }
}

impl WidgetState {
    /// Apply one event to the widget values. Uploads are read here.
    pub fn apply(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Upload(path) => {
                let bytes = std::fs::read(&path)?;
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.upload = Some(Upload { name, bytes });
            }
            Event::UseDefault => self.upload = None,
            Event::Title(title) => self.manual_title = Some(title),
            Event::Review(text) => self.manual_text = text,
            Event::Analyze => self.analyze = true,
            Event::Pie(show) => self.pie_show = Some(show),
            Event::Compare(a, b) => {
                self.compare_first = Some(a);
                self.compare_second = Some(b);
            }
            Event::Show | Event::Quit => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("analyze".parse::<Event>().unwrap(), Event::Analyze);
        assert_eq!(
            "title  The Night Agent ".parse::<Event>().unwrap(),
            Event::Title("The Night Agent".to_string())
        );
        assert_eq!(
            "compare Dark | Black Mirror".parse::<Event>().unwrap(),
            Event::Compare("Dark".to_string(), "Black Mirror".to_string())
        );
        assert_eq!("review".parse::<Event>().unwrap(), Event::Review(String::new()));
        assert_eq!("".parse::<Event>().unwrap(), Event::Show);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!("pie".parse::<Event>(), Err(Error::InvalidEvent(_))));
        assert!(matches!("compare Dark".parse::<Event>(), Err(Error::InvalidEvent(_))));
        assert!(matches!("dance".parse::<Event>(), Err(Error::InvalidEvent(_))));
    }

    #[test]
    fn analyze_is_momentary() {
        let mut state = WidgetState::default();
        state.apply(Event::Analyze).unwrap();
        assert!(state.analyze);
        state.end_turn();
        assert!(!state.analyze);
    }

    #[test]
    fn missing_upload_file_is_an_error() {
        let mut state = WidgetState::default();
        let err = state.apply(Event::Upload(PathBuf::from("/no/such/file.csv"))).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(state.upload.is_none());
    }
}
