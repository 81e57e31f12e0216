//! Terminal front end for the navigator
//!
//! Owns the transcript and renders each response as it arrives: bot lines
//! flush left, echoed user input right-aligned. A clear request wipes the
//! screen before the new lines are written.

use std::io::{self, BufRead, Write};
use stockbot_core::{
    BotConfig, Navigator, NavigatorResponse, Speaker, StockDirectory, Transcript,
    TranscriptEntry,
};
use tracing::{debug, warn};

/// ANSI sequence: erase the screen and home the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Commands that leave the loop instead of reaching the navigator
const EXIT_COMMANDS: [&str; 2] = ["/exit", "/quit"];

pub struct Repl<D> {
    navigator: Navigator<D>,
    transcript: Transcript,
    prompt: String,
    width: usize,
    show_timestamps: bool,
}

impl<D: StockDirectory> Repl<D> {
    pub fn new(navigator: Navigator<D>, config: &BotConfig, width: usize) -> Self {
        Self {
            navigator,
            transcript: Transcript::with_max_entries(config.max_transcript),
            prompt: config.prompt.clone(),
            width,
            show_timestamps: config.show_timestamps,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Run until EOF or an exit command
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        let startup = self.navigator.start();
        self.show(&startup, out)?;

        let mut buf = Vec::new();
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(out, "\nGoodbye!")?;
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            if std::str::from_utf8(&buf).is_err() {
                warn!(line = %line.trim_end(), "Input is not valid UTF-8, decoding lossily");
            }

            if EXIT_COMMANDS.contains(&line.trim().to_lowercase().as_str()) {
                writeln!(out, "Goodbye!")?;
                break;
            }

            let response = self.navigator.handle_input(&line);
            if response.is_noop() {
                continue;
            }
            debug!(state = ?response.state, "Rendering response");
            self.show(&response, out)?;
        }

        Ok(())
    }

    fn show<W: Write>(&mut self, response: &NavigatorResponse, out: &mut W) -> io::Result<()> {
        let shown = self.transcript.apply(response);

        if response.clear_transcript {
            write!(out, "{CLEAR_SCREEN}")?;
        }
        for entry in &shown {
            self.write_entry(out, entry)?;
        }
        out.flush()
    }

    fn write_entry<W: Write>(&self, out: &mut W, entry: &TranscriptEntry) -> io::Result<()> {
        let text = if self.show_timestamps {
            format!("[{}] {}", entry.timestamp.format("%H:%M:%S"), entry.text)
        } else {
            entry.text.clone()
        };

        match entry.speaker {
            Speaker::Bot => write!(out, "{text}"),
            Speaker::User => writeln!(out, "{:>width$}", text.trim_end(), width = self.width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stockbot_core::{Catalog, Exchange, Stock};

    fn repl() -> Repl<Catalog> {
        repl_with(BotConfig::builder().prompt("> ").greeting("Hi").build())
    }

    fn repl_with(config: BotConfig) -> Repl<Catalog> {
        let catalog = Catalog::new(vec![Exchange::new(
            "Nasdaq",
            vec![Stock::new("AMD", 150.0), Stock::new("TSLA", 190.0)],
        )])
        .unwrap();
        Repl::new(Navigator::new(catalog, &config), &config, 20)
    }

    fn run(input: &str) -> (Repl<Catalog>, String) {
        run_bytes(repl(), input.as_bytes())
    }

    fn run_bytes(mut repl: Repl<Catalog>, input: &[u8]) -> (Repl<Catalog>, String) {
        let mut out = Vec::new();
        repl.run(Cursor::new(input), &mut out).unwrap();
        (repl, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_startup_and_eof() {
        let (_, out) = run("");
        assert!(out.starts_with("=== Hi ===\n=== Please select a Stock Exchange. ===\n      Nasdaq\n> "));
        assert!(out.ends_with("\nGoodbye!\n"));
    }

    #[test]
    fn test_user_echo_is_right_aligned() {
        let (_, out) = run("nasdaq\n");
        assert!(out.contains(&format!("{:>20}\n", "nasdaq")));
        assert!(out.contains("=== Please select a stock. ===\n      AMD\n      TSLA\n"));
    }

    #[test]
    fn test_price_and_invalid_input() {
        let (_, out) = run("nasdaq\ntsla\nsideways\n");
        assert!(out.contains("Stock Price of TSLA is 190.00. Please select an option.\n"));
        assert!(out.contains("ERROR 003: Invalid input. Please select a valid option to go back.\n"));
    }

    #[test]
    fn test_main_menu_clears_screen() {
        let (repl, out) = run("nasdaq\namd\nmain menu\n");
        let (_, after_clear) = out.rsplit_once(CLEAR_SCREEN).unwrap();
        assert!(after_clear.starts_with("=== Hi ===\n"));
        assert!(!after_clear.contains("AMD"));
        assert_eq!(repl.transcript().len(), 3);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let (repl, out) = run("\n   \nPlease pick an option.\n");
        assert_eq!(repl.transcript().len(), 3);
        assert!(!out.contains("ERROR"));
    }

    #[test]
    fn test_exit_command_stops_loop() {
        let (repl, out) = run("/quit\nnasdaq\n");
        assert!(out.ends_with("Goodbye!\n"));
        assert_eq!(repl.transcript().len(), 3);
    }

    #[test]
    fn test_invalid_utf8_line_does_not_end_session() {
        let (repl, out) = run_bytes(repl(), b"caf\xe9\nnasdaq\n");
        assert!(out.contains("ERROR 001"));
        assert!(out.contains("=== Please select a stock. ===\n      AMD\n"));
        assert!(out.ends_with("\nGoodbye!\n"));
        assert_eq!(
            repl.transcript().entries().iter().filter(|e| e.speaker == Speaker::User).count(),
            2
        );
    }

    #[test]
    fn test_bounded_transcript_still_renders_everything() {
        let config = BotConfig::builder()
            .prompt("> ")
            .greeting("Hi")
            .max_transcript(2)
            .build();
        let (repl, out) = run_bytes(repl_with(config), b"nasdaq\n");

        assert!(out.starts_with("=== Hi ===\n=== Please select a Stock Exchange. ===\n      Nasdaq\n> "));
        assert!(out.contains(&format!("{:>20}\n=== Please select a stock. ===\n      AMD\n      TSLA\n", "nasdaq")));
        assert_eq!(repl.transcript().len(), 2);
    }

    #[test]
    fn test_timestamps_prefix_rendered_entries() {
        let config = BotConfig::builder()
            .prompt("> ")
            .greeting("Hi")
            .show_timestamps(true)
            .build();
        let (_, out) = run_bytes(repl_with(config), b"nasdaq\n");

        let first = out.lines().next().unwrap();
        let (stamp, rest) = first.split_once("] ").unwrap();
        assert_eq!(rest, "=== Hi ===");
        assert_eq!(stamp.len(), "[00:00:00".len());
        assert!(stamp[1..].chars().all(|c| c.is_ascii_digit() || c == ':'));

        // The echo follows the prompt on the same terminal line
        let echo = out.lines().find(|l| l.ends_with("] nasdaq")).unwrap();
        let aligned = echo.strip_prefix("> ").unwrap();
        assert_eq!(aligned.len(), 20);
        assert!(aligned.trim_start().starts_with('['));
    }
}
