/// Fixed rate timer - fires at specific Hz
#[derive(Debug, Clone, Copy)]
pub struct FixedHz {
    pub interval: f32,
    pub accumulator: f32,
}

impl FixedHz {
    /// Create timer that fires at given frequency
    pub fn new(hz: f32) -> Self {
        Self {
            interval: 1.0 / hz,
            accumulator: 0.0,
        }
    }

    /// Update with delta, returns true if should fire
    pub fn tick(&mut self, delta: f32) -> bool {
        self.accumulator += delta;

        if self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            true
        } else {
            false
        }
    }
}

/// Counts frames and reports the rate once per interval
#[derive(Debug, Clone, Copy)]
pub struct FpsCounter {
    timer: FixedHz,
    frames: u32,
    elapsed: f32,
}

impl FpsCounter {
    pub fn new(reports_per_second: f32) -> Self {
        Self {
            timer: FixedHz::new(reports_per_second),
            frames: 0,
            elapsed: 0.0,
        }
    }

    /// Record a frame; returns the measured FPS when a report is due
    pub fn frame(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta;

        if !self.timer.tick(delta) {
            return None;
        }

        let fps = self.frames as f32 / self.elapsed;
        self.frames = 0;
        self.elapsed = 0.0;
        Some(fps)
    }
}
