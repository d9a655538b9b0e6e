use std::time::Duration;

/// Position of the current track, sampled on every monitor tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Progress {
    pub elapsed: Duration,
    pub duration: Option<Duration>,
}

impl Progress {
    pub fn new(elapsed: Duration, duration: Option<Duration>) -> Self {
        Self { elapsed, duration }
    }

    /// Played fraction in `0.0..=1.0`. Unknown or zero durations report 0.
    pub fn ratio(&self) -> f64 {
        match self.duration {
            Some(total) => progress_ratio(self.elapsed.as_secs_f64(), total.as_secs_f64()),
            None => 0.0,
        }
    }

    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }

    pub fn label(&self) -> String {
        match self.duration {
            Some(total) if !total.is_zero() => format!(
                "{} / {}",
                format_time(self.elapsed.as_secs_f64()),
                format_time(total.as_secs_f64())
            ),
            _ => format!("{} / {}", format_time(f64::NAN), format_time(f64::NAN)),
        }
    }
}

pub fn progress_ratio(elapsed: f64, duration: f64) -> f64 {
    if !elapsed.is_finite() || !duration.is_finite() || duration <= 0.0 {
        return 0.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

/// Formats seconds as `m:ss`. Anything that is not a finite, non-negative
/// number formats as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
