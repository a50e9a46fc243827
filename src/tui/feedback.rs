//! Best-effort feedback sinks.
//!
//! Terminal stand-ins for phone hardware: the bell plays the completion
//! sound, a short highlight pulse takes the place of near-end vibration.
//! Neither is allowed to fail loudly; a terminal that swallows BEL or a
//! closed stdout simply means no feedback.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::model::Config;

/// How long the near-end pulse stays lit.
pub const PULSE_DURATION: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy)]
pub struct Feedback {
    sound: bool,
    flash: bool,
}

impl Feedback {
    pub fn new(config: &Config, muted: bool) -> Self {
        Feedback {
            sound: config.sound && !muted,
            flash: config.flash,
        }
    }

    /// Ring the terminal bell. Errors are swallowed.
    pub fn chime(&self) {
        if !self.sound {
            return;
        }
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }

    /// When the pulse should end, if flashing is enabled.
    pub fn pulse_deadline(&self) -> Option<Instant> {
        self.flash.then(|| Instant::now() + PULSE_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muted_disables_sound_but_not_flash() {
        let feedback = Feedback::new(&Config::default(), true);
        // chime is a no-op; mainly assert it does not panic
        feedback.chime();
        assert!(feedback.pulse_deadline().is_some());
    }

    #[test]
    fn flash_off_means_no_pulse() {
        let config = Config {
            flash: false,
            ..Config::default()
        };
        let feedback = Feedback::new(&config, false);
        assert!(feedback.pulse_deadline().is_none());
    }
}
