use glam::Vec3;

/// One device-motion reading (acceleration including gravity, m/s^2).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    pub acceleration: Vec3,
    pub timestamp_ms: f64,
}

impl MotionSample {
    pub fn new(x: f32, y: f32, z: f32, timestamp_ms: f64) -> Self {
        Self {
            acceleration: Vec3::new(x, y, z),
            timestamp_ms,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ShakeDetector {
    last: Option<Vec3>,
    last_shake_ms: Option<f64>,
}

impl ShakeDetector {
    /// Feed a sample; true when it completes a shake outside the cooldown.
    pub fn observe(&mut self, sample: MotionSample, threshold: f32, cooldown_ms: f64) -> bool {
        let Some(prev) = self.last.replace(sample.acceleration) else {
            return false;
        };
        let delta = (sample.acceleration - prev).abs();
        if delta.x + delta.y + delta.z <= threshold {
            return false;
        }
        if let Some(t) = self.last_shake_ms {
            if sample.timestamp_ms - t < cooldown_ms {
                return false;
            }
        }
        self.last_shake_ms = Some(sample.timestamp_ms);
        true
    }
}
