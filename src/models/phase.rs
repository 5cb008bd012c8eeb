use serde::Serialize;

/// Current mode of the work timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Paused,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }
}
