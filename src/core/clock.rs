/// Frame clock driven by display refresh timestamps in milliseconds.
/// Accumulates total elapsed seconds across frames in `f64`, so long uptimes keep advancing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    previous_timestamp: Option<f64>,
    total_time: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `timestamp_ms` and return the delta in seconds.
    /// The first tick returns zero; timestamps going backwards count as zero.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let previous = *self.previous_timestamp.get_or_insert(timestamp_ms);
        let delta = (timestamp_ms - previous).max(0.0) / 1000.0;

        self.total_time += delta;
        self.previous_timestamp = Some(timestamp_ms);
        delta
    }

    /// Seconds accumulated since the first tick
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn previous_timestamp(&self) -> Option<f64> {
        self.previous_timestamp
    }
}
