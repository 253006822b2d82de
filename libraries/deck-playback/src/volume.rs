//! Volume control
//!
//! User-facing volume is a 0-100 level; the output consumes a linear
//! 0.0-1.0 gain. Fades interpolate on the gain scale.

/// Volume level with its cached output gain
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,

    /// Cached linear gain multiplier
    gain: f32,
}

impl Volume {
    /// Create a new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (0-100, clamped)
    pub fn new(level: u8) -> Self {
        let level = level.min(100);
        Self {
            level,
            gain: Self::calculate_gain(level),
        }
    }

    /// Set volume level (0-100, clamped)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
        self.gain = Self::calculate_gain(self.level);
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Linear gain multiplier for the output, 0.0-1.0
    pub fn gain(&self) -> f32 {
        self.gain
    }

    fn calculate_gain(level: u8) -> f32 {
        f32::from(level) / 100.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_volume() {
        let vol = Volume::new(80);
        assert_eq!(vol.level(), 80);
        assert!((vol.gain() - 0.8).abs() < 0.001);
    }

    #[test]
    fn set_volume_level() {
        let mut vol = Volume::new(50);
        assert_eq!(vol.level(), 50);

        vol.set_level(75);
        assert_eq!(vol.level(), 75);

        // Clamp to 100
        vol.set_level(150);
        assert_eq!(vol.level(), 100);
    }

    #[test]
    fn gain_bounds() {
        assert_eq!(Volume::new(0).gain(), 0.0);
        assert!((Volume::new(100).gain() - 1.0).abs() < 0.001);
        assert!((Volume::new(50).gain() - 0.5).abs() < 0.001);
    }

    #[test]
    fn default_level() {
        assert_eq!(Volume::default().level(), 50);
    }
}
