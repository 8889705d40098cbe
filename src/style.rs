use owo_colors::OwoColorize;

/// Urgency level of a bar, picked from its percent.
///
/// | percent    | level      | color  |
/// |------------|------------|--------|
/// | `< 20`     | `Critical` | red    |
/// | `20..60`   | `Low`      | yellow |
/// | `>= 60`    | `Healthy`  | green  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    Critical,
    Low,
    Healthy,
}

impl Urgency {
    pub fn from_percent(percent: u64) -> Self {
        match percent {
            0..20 => Self::Critical,
            20..60 => Self::Low,
            _ => Self::Healthy,
        }
    }

    /// Color name understood by tmux `#[fg=...]` directives.
    pub fn tmux_color(&self) -> &'static str {
        match self {
            Self::Critical => "red",
            Self::Low => "yellow",
            Self::Healthy => "green",
        }
    }

    /// Wraps `line` in the ANSI foreground color for this level.
    pub fn paint_ansi(&self, line: &str) -> String {
        match self {
            Self::Critical => line.red().to_string(),
            Self::Low => line.yellow().to_string(),
            Self::Healthy => line.green().to_string(),
        }
    }

    /// Embeds `line` between a tmux color directive and a reset.
    pub fn paint_tmux(&self, line: &str) -> String {
        format!("#[fg={}]{}#[default]", self.tmux_color(), line)
    }
}
