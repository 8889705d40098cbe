use std::io::Write;

use crate::error::ConfigError;
use crate::gauge::{Fill, Gauge};
use crate::style::Urgency;

/// Default number of gauge cells.
pub const DEFAULT_WIDTH: usize = 3;

/// Default glyph shown in front of the bar when [`ProgressBar::show_thunder`] is on.
pub const THUNDER: &str = "⚡\u{fe0e}";

/// A single-line block gauge with optional percent, counter and urgency colors.
///
/// Configuration methods consume and return the bar; the current value is
/// updated in place with [`set_current`](ProgressBar::set_current).
///
/// ```rust
/// use battery_gauge::ProgressBar;
///
/// let mut bar = ProgressBar::new(10)?.width(5)?;
/// bar.set_current(5);
/// assert_eq!(bar.line().as_deref(), Some("   50%|██▋  |  5/10"));
/// # Ok::<(), battery_gauge::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressBar {
    total: u64,
    current: Option<u64>,
    width: usize,
    prefix: char,
    suffix: char,
    thunder_glyph: &'static str,
    show_percent: bool,
    show_counter: bool,
    show_thunder: bool,
    color: bool,
    tmux: bool,
}

impl ProgressBar {
    /// Creates a bar counting up to `total`, which must be non-zero.
    pub fn new(total: u64) -> Result<Self, ConfigError> {
        if total == 0 {
            return Err(ConfigError::ZeroTotal);
        }
        Ok(Self {
            total,
            current: None,
            width: DEFAULT_WIDTH,
            prefix: '|',
            suffix: '|',
            thunder_glyph: THUNDER,
            show_percent: true,
            show_counter: true,
            show_thunder: false,
            color: false,
            tmux: true,
        })
    }

    pub fn prefix(mut self, ch: char) -> Self {
        self.prefix = ch;
        self
    }

    pub fn suffix(mut self, ch: char) -> Self {
        self.suffix = ch;
        self
    }

    /// Sets the number of gauge cells, excluding prefix and suffix.
    pub fn width(mut self, cells: usize) -> Result<Self, ConfigError> {
        if cells == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        self.width = cells;
        Ok(self)
    }

    pub fn show_percent(mut self, yes: bool) -> Self {
        self.show_percent = yes;
        self
    }

    pub fn show_counter(mut self, yes: bool) -> Self {
        self.show_counter = yes;
        self
    }

    pub fn show_thunder(mut self, yes: bool) -> Self {
        self.show_thunder = yes;
        self
    }

    /// Replaces the glyph shown by [`show_thunder`](ProgressBar::show_thunder).
    pub fn thunder_glyph(mut self, glyph: &'static str) -> Self {
        self.thunder_glyph = glyph;
        self
    }

    /// Colors the line by [`Urgency`].
    pub fn color(mut self, yes: bool) -> Self {
        self.color = yes;
        self
    }

    /// Emits tmux `#[fg=...]` directives instead of ANSI escapes when coloring.
    /// Enabled by default.
    pub fn tmux(mut self, yes: bool) -> Self {
        self.tmux = yes;
        self
    }

    /// Sets the current value. Values above the total are accepted here and
    /// suppress output at render time.
    pub fn set_current(&mut self, value: u64) -> &mut Self {
        self.current = Some(value);
        self
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current(&self) -> Option<u64> {
        self.current
    }

    pub fn gauge_width(&self) -> usize {
        self.width
    }

    /// `floor(100 * current / total)`, not clamped to 100.
    pub fn percent(&self) -> Option<u64> {
        self.current
            .map(|current| (current as u128 * 100 / self.total as u128) as u64)
    }

    pub fn fill(&self) -> Option<Fill> {
        self.current
            .map(|current| Fill::new(current, self.total, self.width))
    }

    pub fn urgency(&self) -> Option<Urgency> {
        self.percent().map(Urgency::from_percent)
    }

    /// The value to draw, or `None` when it is unset or past the total.
    fn drawable(&self) -> Option<u64> {
        self.current.filter(|&current| current <= self.total)
    }

    /// Returns the decorated line, or `None` when nothing would be rendered.
    pub fn line(&self) -> Option<String> {
        let current = self.drawable()?;
        let percent = self.percent()?;
        let plain = Line {
            bar: self,
            current,
            percent,
        }
        .to_string();

        if !self.color {
            return Some(plain);
        }
        let urgency = Urgency::from_percent(percent);
        Some(match self.tmux {
            true => urgency.paint_tmux(&plain),
            false => urgency.paint_ansi(&plain),
        })
    }

    /// Writes the line to standard output.
    pub fn render(&self) -> Result<(), std::io::Error> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.render_to(&mut lock)
    }

    /// Writes the line to `target` in a single write, without a newline.
    ///
    /// Nothing is written while the current value is unset or above the total.
    pub fn render_to<W: Write + ?Sized>(&self, target: &mut W) -> Result<(), std::io::Error> {
        let Some(line) = self.line() else {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                current = ?self.current,
                total = self.total,
                "render suppressed: current value unset or above total"
            );
            return Ok(());
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            percent = ?self.percent(),
            fill = ?self.fill(),
            "rendering progress line"
        );

        target.write_all(line.as_bytes())?;
        target.flush()
    }
}

impl std::fmt::Display for ProgressBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line() {
            Some(line) => f.write_str(&line),
            None => Ok(()),
        }
    }
}

/// The undecorated text of one render.
struct Line<'a> {
    bar: &'a ProgressBar,
    current: u64,
    percent: u64,
}

impl std::fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bar = self.bar;
        match bar.show_thunder {
            true => f.write_str(bar.thunder_glyph)?,
            false => f.write_str("  ")?,
        }

        if bar.show_percent {
            write!(f, "{:>3}%", self.percent)?;
        }

        let fill = Fill::new(self.current, bar.total, bar.width);
        write!(f, "{}", Gauge::new(bar.prefix, bar.suffix, bar.width, fill))?;

        if bar.show_counter {
            let digits = bar.total.ilog10() as usize + 1;
            write!(f, " {:>digits$}/{:>digits$}", self.current, bar.total)?;
        }
        Ok(())
    }
}
