//! CLI styling utilities
//!
//! Semantic styling via the [`Stylize`] trait. Color support detection
//! (`NO_COLOR`, `CLICOLOR`, TTY) is delegated to `owo-colors`.
//!
//! | Method       | Color  | Stream | Semantic Use                      |
//! |--------------|--------|--------|-----------------------------------|
//! | `.accent()`  | Cyan   | stdout | Ids, languages, counts            |
//! | `.success()` | Green  | stdout | Completed exports and tasks       |
//! | `.error()`   | Red    | stderr | Failures, error messages          |
//! | `.warn()`    | Yellow | stderr | Pending work, needs attention     |
//! | `.muted()`   | Dim    | stdout | URLs, hints                       |
//! | `.emphasis()`| Bold   | stdout | Headers, item titles              |

use indicatif::{ProgressBar, ProgressStyle};
use staticpub_admin::types::{ExportState, ItemRef, TaskState};
use std::fmt::{self, Display};
use std::future::Future;
use std::sync::OnceLock;
use std::time::Duration;

pub use owo_colors::Stream;
use owo_colors::{OwoColorize, Style};

const ACCENT: Style = Style::new().cyan();
const SUCCESS: Style = Style::new().green();
const ERROR: Style = Style::new().red();
const WARN: Style = Style::new().yellow();
const MUTED: Style = Style::new().dimmed();
const EMPHASIS: Style = Style::new().bold();

/// A value with semantic styling applied
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    style: Style,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, style: Style, stream: Stream) -> Self {
        Self {
            value,
            style,
            stream,
        }
    }

    /// Render for stdout color detection
    #[must_use]
    pub const fn for_stdout(mut self) -> Self {
        self.stream = Stream::Stdout;
        self
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(self.stream, |v| v.style(self.style))
        )
    }
}

/// Extension trait for semantic terminal styling
pub trait Stylize: Display {
    /// Cyan, for ids, languages and counts
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, ACCENT, Stream::Stdout)
    }

    /// Green, for completed work
    fn success(&self) -> Styled<&Self> {
        Styled::new(self, SUCCESS, Stream::Stdout)
    }

    /// Red, for failures (stderr)
    fn error(&self) -> Styled<&Self> {
        Styled::new(self, ERROR, Stream::Stderr)
    }

    /// Yellow, for pending work (stderr)
    fn warn(&self) -> Styled<&Self> {
        Styled::new(self, WARN, Stream::Stderr)
    }

    /// Dim, for secondary information
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, MUTED, Stream::Stdout)
    }

    /// Bold, for headers
    fn emphasis(&self) -> Styled<&Self> {
        Styled::new(self, EMPHASIS, Stream::Stdout)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Green checkmark
pub const fn check() -> Styled<&'static str> {
    Styled::new("✓", SUCCESS, Stream::Stdout)
}

/// Red cross
pub const fn cross() -> Styled<&'static str> {
    Styled::new("✗", ERROR, Stream::Stderr)
}

/// Cyan arrow
pub const fn arrow() -> Styled<&'static str> {
    Styled::new("→", ACCENT, Stream::Stdout)
}

/// Dimmed bullet
pub const fn bullet() -> Styled<&'static str> {
    Styled::new("○", MUTED, Stream::Stdout)
}

/// Marker for a task state
pub const fn task_marker(state: TaskState) -> Styled<&'static str> {
    match state {
        TaskState::Success => check(),
        TaskState::Failed => cross().for_stdout(),
        TaskState::Pending => bullet(),
    }
}

/// Styled export state label
pub fn export_state(state: ExportState) -> String {
    match state {
        ExportState::Completed => state.to_string().success().to_string(),
        ExportState::Running => state.to_string().accent().to_string(),
        ExportState::Idle => state.to_string().warn().for_stdout().to_string(),
    }
}

const fn to_hyperlink_stream(stream: Stream) -> supports_hyperlinks::Stream {
    match stream {
        Stream::Stdout => supports_hyperlinks::Stream::Stdout,
        Stream::Stderr => supports_hyperlinks::Stream::Stderr,
    }
}

/// Clickable URL, plain text where OSC 8 is unsupported
pub fn hyperlink_url(stream: Stream, url: &str) -> String {
    if supports_hyperlinks::on(to_hyperlink_stream(stream)) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}

/// Spinner used while waiting on the CMS
pub fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("hardcoded spinner template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}

/// Show a spinner while `future` runs
pub async fn with_spinner<F: Future>(message: &str, future: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let output = future.await;
    spinner.finish_and_clear();
    output
}

/// Display name of an item: its label, else its id
pub fn item_label(item: &ItemRef) -> String {
    match (item.label(), item.id()) {
        (Some(label), Ok(id)) => format!("{label} (#{id})"),
        (Some(label), Err(_)) => label.to_string(),
        (None, Ok(id)) => format!("#{id}"),
        (None, Err(_)) => "(unknown item)".to_string(),
    }
}
