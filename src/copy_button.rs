use std::time::{Duration, Instant};

/// Label shown while a copy is being confirmed.
pub const CONFIRMATION_LABEL: &str = "Copied!";

/// How long a button stays in the confirmation state.
pub const DEFAULT_CONFIRMATION: Duration = Duration::from_millis(1600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Confirming { expires_at: Instant },
}

/// A copy control that briefly confirms a successful copy.
///
/// The control is idle until [`confirm`](CopyButton::confirm) is called,
/// then shows [`CONFIRMATION_LABEL`] and reports itself disabled until a
/// [`tick`](CopyButton::tick) at or after the expiry returns it to idle.
/// Confirming again before expiry replaces the pending expiry.
///
/// # Examples
///
/// ```
/// use shorts_config::CopyButton;
/// use std::time::{Duration, Instant};
///
/// let mut button = CopyButton::new("Copy JSON");
/// let now = Instant::now();
/// button.confirm(now);
/// assert_eq!(button.label(), "Copied!");
/// button.tick(now + Duration::from_secs(2));
/// assert_eq!(button.label(), "Copy JSON");
/// ```
#[derive(Debug, Clone)]
pub struct CopyButton {
    label: String,
    interval: Duration,
    state: ButtonState,
}

impl CopyButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_interval(label, DEFAULT_CONFIRMATION)
    }

    pub fn with_interval(label: impl Into<String>, interval: Duration) -> Self {
        Self {
            label: label.into(),
            interval,
            state: ButtonState::Idle,
        }
    }

    pub fn confirm(&mut self, now: Instant) {
        self.state = ButtonState::Confirming {
            expires_at: now + self.interval,
        };
    }

    /// Advances the timer, returning `true` when the button went back to idle.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state {
            ButtonState::Confirming { expires_at } if now >= expires_at => {
                self.state = ButtonState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn label(&self) -> &str {
        match self.state {
            ButtonState::Idle => &self.label,
            ButtonState::Confirming { .. } => CONFIRMATION_LABEL,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.state, ButtonState::Confirming { .. })
    }
}
