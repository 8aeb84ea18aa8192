use embedded_time::duration::Microseconds;
use log::info;

pub struct FpsMonitor {
    accumulated_us: u32,
    frames: u32,
    last_fps: Option<u32>,
}

impl FpsMonitor {
    const FPS_INTERVAL_US: u32 = 1_000_000;

    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            accumulated_us: 0,
            frames: 0,
            last_fps: None,
        }
    }

    pub fn update(&mut self, elapsed: Microseconds<u32>) -> Option<u32> {
        self.accumulated_us = self.accumulated_us.saturating_add(elapsed.0);
        self.frames += 1;
        if self.accumulated_us < Self::FPS_INTERVAL_US {
            return None;
        }
        info!("FPS: {}", self.frames);
        let fps = self.frames;
        self.last_fps = Some(fps);
        self.accumulated_us -= Self::FPS_INTERVAL_US.min(self.accumulated_us);
        self.frames = 0;
        Some(fps)
    }

    pub fn last_fps(&self) -> Option<u32> {
        self.last_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_once_per_second() {
        let mut monitor = FpsMonitor::new();
        for _ in 0..29 {
            assert_eq!(monitor.update(Microseconds(33_333)), None);
        }
        assert_eq!(monitor.update(Microseconds(33_333)), None);
        assert_eq!(monitor.update(Microseconds(33_333)), Some(31));
        assert_eq!(monitor.last_fps(), Some(31));
        assert_eq!(monitor.update(Microseconds(10)), None);
    }

    #[test]
    fn test_slow_frame_carries_over() {
        let mut monitor = FpsMonitor::new();
        assert_eq!(monitor.update(Microseconds(2_500_000)), Some(1));
        // the remaining 1.5 s closes the next interval immediately
        assert_eq!(monitor.update(Microseconds(0)), Some(1));
        assert_eq!(monitor.update(Microseconds(0)), None);
    }
}
