//! Line-based terminal prompts.
//!
//! Basic interactive prompts that read one line at a time. They back the
//! `--plain` mode and make prompt sessions scriptable in tests through
//! [`MockTerminal`].
//!
//! Backing out of a prompt is either EOF (Ctrl+D) or an interrupt (Ctrl+C).
//! A [`TerminalIO`] reports the interrupt as an
//! [`io::ErrorKind::Interrupted`] read error, and both end up as
//! [`InputError::PromptCancelled`].

use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, OnceLock};
use std::thread;

use clap::ArgMatches;

use crate::collector::{InputCollector, InputSourceKind};
use crate::InputError;

/// Abstraction over terminal I/O for testability.
pub trait TerminalIO: Send + Sync {
    /// Check if stdin is a terminal.
    fn is_terminal(&self) -> bool;

    /// Write a prompt to stdout.
    fn write_prompt(&self, prompt: &str) -> io::Result<()>;

    /// Read a line from stdin. An empty string means EOF; an
    /// [`io::ErrorKind::Interrupted`] error means Ctrl+C.
    fn read_line(&self) -> io::Result<String>;
}

/// What ends a blocking read on the real terminal.
enum ReadEvent {
    Line(io::Result<String>),
    Interrupted,
}

/// The read in progress, if any. Ctrl+C is delivered to it.
static PENDING_READ: Mutex<Option<Sender<ReadEvent>>> = Mutex::new(None);

static INTERRUPT_HANDLER: OnceLock<Result<(), String>> = OnceLock::new();

/// Installs the process Ctrl+C handler on first use.
///
/// While a prompt is reading, Ctrl+C ends that read. Otherwise the process
/// exits with the conventional status 130, as it would without a handler.
fn install_interrupt_handler() -> io::Result<()> {
    INTERRUPT_HANDLER
        .get_or_init(|| {
            ctrlc::set_handler(|| {
                let pending = PENDING_READ.lock().ok().and_then(|mut slot| slot.take());
                match pending {
                    Some(reader) => {
                        let _ = reader.send(ReadEvent::Interrupted);
                    }
                    None => std::process::exit(130),
                }
            })
            .map_err(|e| e.to_string())
        })
        .clone()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

fn set_pending_read(reader: Option<Sender<ReadEvent>>) {
    if let Ok(mut slot) = PENDING_READ.lock() {
        *slot = reader;
    }
}

/// Blocks until the stdin reader answers or an interrupt arrives.
fn wait_for_line(events: &Receiver<ReadEvent>) -> io::Result<String> {
    match events.recv() {
        Ok(ReadEvent::Line(line)) => line,
        Ok(ReadEvent::Interrupted) => Err(io::ErrorKind::Interrupted.into()),
        Err(_) => Err(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "terminal reader stopped",
        )),
    }
}

/// Real terminal I/O.
///
/// Lines are read on a helper thread so that Ctrl+C can end the wait even
/// though the blocking read itself is restarted after the signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn is_terminal(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        print!("{}", prompt);
        io::stdout().flush()
    }

    fn read_line(&self) -> io::Result<String> {
        install_interrupt_handler()?;

        let (sender, events) = mpsc::channel();
        set_pending_read(Some(sender.clone()));
        thread::spawn(move || {
            let mut line = String::new();
            let read = io::stdin().lock().read_line(&mut line).map(|_| line);
            let _ = sender.send(ReadEvent::Line(read));
        });

        let answer = wait_for_line(&events);
        set_pending_read(None);
        answer
    }
}

fn read_answer<T: TerminalIO>(terminal: &T, prompt: &str) -> Result<String, InputError> {
    terminal
        .write_prompt(prompt)
        .map_err(|e| InputError::PromptFailed(e.to_string()))?;

    let line = terminal.read_line().map_err(|e| match e.kind() {
        io::ErrorKind::Interrupted => InputError::PromptCancelled,
        _ => InputError::PromptFailed(e.to_string()),
    })?;

    // Ctrl+D
    if line.is_empty() {
        return Err(InputError::PromptCancelled);
    }

    Ok(line.trim().to_string())
}

/// Text input prompt.
///
/// Shows the message (and the default, when one is set) and reads one line.
/// An empty answer returns `None` so the chain can fall through to its
/// default value.
#[derive(Clone)]
pub struct TextPromptSource<T: TerminalIO = RealTerminal> {
    terminal: Arc<T>,
    message: String,
    default_hint: Option<String>,
}

impl TextPromptSource<RealTerminal> {
    /// Create a new text prompt source.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_shared_terminal(message, Arc::new(RealTerminal))
    }
}

impl<T: TerminalIO> TextPromptSource<T> {
    /// Create a text prompt with a custom terminal for testing.
    pub fn with_terminal(message: impl Into<String>, terminal: T) -> Self {
        Self::with_shared_terminal(message, Arc::new(terminal))
    }

    /// Create a text prompt reading from a terminal shared with other prompts.
    pub fn with_shared_terminal(message: impl Into<String>, terminal: Arc<T>) -> Self {
        Self {
            terminal,
            message: message.into(),
            default_hint: None,
        }
    }

    /// Show the value used when the answer is left empty.
    pub fn default_hint(mut self, hint: impl Into<String>) -> Self {
        self.default_hint = Some(hint.into());
        self
    }

    fn rendered_prompt(&self) -> String {
        match &self.default_hint {
            Some(hint) => format!("? {} ({}) ", self.message, hint),
            None => format!("? {} ", self.message),
        }
    }
}

impl<T: TerminalIO + 'static> InputCollector<String> for TextPromptSource<T> {
    fn kind(&self) -> InputSourceKind {
        InputSourceKind::Prompt
    }

    fn is_available(&self, _matches: &ArgMatches) -> bool {
        self.terminal.is_terminal()
    }

    fn collect(&self, _matches: &ArgMatches) -> Result<Option<String>, InputError> {
        if !self.terminal.is_terminal() {
            return Ok(None);
        }

        let answer = read_answer(self.terminal.as_ref(), &self.rendered_prompt())?;
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer))
        }
    }

    fn can_retry(&self) -> bool {
        true
    }
}

/// Numbered single-choice prompt.
///
/// Lists the options as `1) ...`, `2) ...` and reads the chosen number.
/// An empty answer returns `None`; an out-of-range answer asks again.
#[derive(Clone)]
pub struct SelectPromptSource<V, T: TerminalIO = RealTerminal> {
    terminal: Arc<T>,
    message: String,
    options: Vec<V>,
}

impl<V: Display + Clone + Send + Sync> SelectPromptSource<V, RealTerminal> {
    /// Create a new selection prompt.
    pub fn new(message: impl Into<String>, options: Vec<V>) -> Self {
        Self::with_shared_terminal(message, options, Arc::new(RealTerminal))
    }
}

impl<V: Display + Clone + Send + Sync, T: TerminalIO> SelectPromptSource<V, T> {
    /// Create a selection prompt with a custom terminal for testing.
    pub fn with_terminal(message: impl Into<String>, options: Vec<V>, terminal: T) -> Self {
        Self::with_shared_terminal(message, options, Arc::new(terminal))
    }

    /// Create a selection prompt reading from a shared terminal.
    pub fn with_shared_terminal(
        message: impl Into<String>,
        options: Vec<V>,
        terminal: Arc<T>,
    ) -> Self {
        Self {
            terminal,
            message: message.into(),
            options,
        }
    }

    fn rendered_prompt(&self) -> String {
        let mut out = format!("? {}\n", self.message);
        for (i, option) in self.options.iter().enumerate() {
            out.push_str(&format!("  {}) {}\n", i + 1, option));
        }
        out.push_str(&format!("  choice [1-{}]: ", self.options.len()));
        out
    }
}

impl<V, T> InputCollector<V> for SelectPromptSource<V, T>
where
    V: Display + Clone + Send + Sync + 'static,
    T: TerminalIO + 'static,
{
    fn kind(&self) -> InputSourceKind {
        InputSourceKind::Prompt
    }

    fn is_available(&self, _matches: &ArgMatches) -> bool {
        self.terminal.is_terminal() && !self.options.is_empty()
    }

    fn collect(&self, matches: &ArgMatches) -> Result<Option<V>, InputError> {
        if !self.is_available(matches) {
            return Ok(None);
        }

        let mut prompt = self.rendered_prompt();
        loop {
            let answer = read_answer(self.terminal.as_ref(), &prompt)?;
            if answer.is_empty() {
                return Ok(None);
            }

            match answer.parse::<usize>() {
                Ok(n) if (1..=self.options.len()).contains(&n) => {
                    return Ok(Some(self.options[n - 1].clone()));
                }
                _ => {
                    prompt = format!(
                        "  '{}' is not a choice, pick 1-{}: ",
                        answer,
                        self.options.len()
                    );
                }
            }
        }
    }

    fn can_retry(&self) -> bool {
        true
    }
}

/// Mock terminal for testing prompts.
///
/// Replays scripted answers in order. Once the script is exhausted every
/// read reports EOF, or an interrupt after [`then_interrupt`](Self::then_interrupt);
/// prompts treat both as cancellation.
#[derive(Debug)]
pub struct MockTerminal {
    is_terminal: bool,
    responses: Vec<String>,
    interrupt_when_done: bool,
    /// Index of the next response to return.
    response_index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockTerminal {
    /// Create a mock that simulates a non-terminal.
    pub fn non_terminal() -> Self {
        Self::scripted(false, Vec::new())
    }

    /// Create a mock terminal that returns the given response.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::scripted(true, vec![response.into()])
    }

    /// Create a mock terminal that returns multiple responses in sequence.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::scripted(true, responses.into_iter().map(Into::into).collect())
    }

    /// Create a mock that simulates EOF (Ctrl+D) on the first read.
    pub fn eof() -> Self {
        Self::scripted(true, Vec::new())
    }

    /// Simulate Ctrl+C once the scripted answers run out.
    pub fn then_interrupt(mut self) -> Self {
        self.interrupt_when_done = true;
        self
    }

    fn scripted(is_terminal: bool, responses: Vec<String>) -> Self {
        Self {
            is_terminal,
            responses,
            interrupt_when_done: false,
            response_index: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts written so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }

    /// Number of answers consumed so far.
    pub fn reads(&self) -> usize {
        self.response_index.load(Ordering::SeqCst)
    }
}

impl TerminalIO for MockTerminal {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(())
    }

    fn read_line(&self) -> io::Result<String> {
        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(idx) {
            // Add newline like real read_line does
            Some(response) => Ok(format!("{}\n", response)),
            None if self.interrupt_when_done => Err(io::ErrorKind::Interrupted.into()),
            None => Ok(String::new()),
        }
    }
}
