use core::fmt;

use crate::config::Error;
use crate::constants::{DEFAULT_MAX_SPEED, PWM_DUTY_MAX};

/// Upper bound on the motor drive output, on the PWM duty scale (0-255).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MaxSpeed(u8);

impl MaxSpeed {
    pub const fn new(duty: u8) -> Self {
        Self(duty)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Clamps a requested duty cycle to this limit.
    pub const fn limit(self, duty: u8) -> u8 {
        if duty > self.0 {
            self.0
        } else {
            duty
        }
    }

    pub const fn is_full_speed(self) -> bool {
        self.0 == PWM_DUTY_MAX
    }
}

impl Default for MaxSpeed {
    fn default() -> Self {
        Self(DEFAULT_MAX_SPEED)
    }
}

impl TryFrom<i64> for MaxSpeed {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| Error::MaxSpeedOutOfRange(value))
    }
}

impl From<MaxSpeed> for u8 {
    fn from(speed: MaxSpeed) -> Self {
        speed.0
    }
}

impl fmt::Display for MaxSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, PWM_DUTY_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_whole_duty_range() {
        assert_eq!(MaxSpeed::try_from(0i64).unwrap().get(), 0);
        assert_eq!(MaxSpeed::try_from(128i64).unwrap().get(), 128);
        assert_eq!(MaxSpeed::try_from(255i64).unwrap().get(), 255);
    }

    #[test]
    fn rejects_values_outside_duty_range() {
        assert_eq!(MaxSpeed::try_from(256i64), Err(Error::MaxSpeedOutOfRange(256)));
        assert_eq!(MaxSpeed::try_from(-1i64), Err(Error::MaxSpeedOutOfRange(-1)));
    }

    #[test]
    fn limit_clamps_to_max_speed() {
        let speed = MaxSpeed::new(200);
        assert_eq!(speed.limit(255), 200);
        assert_eq!(speed.limit(200), 200);
        assert_eq!(speed.limit(10), 10);
        assert_eq!(MaxSpeed::new(0).limit(255), 0);
    }

    #[test]
    fn default_is_full_speed() {
        assert!(MaxSpeed::default().is_full_speed());
        assert!(!MaxSpeed::new(254).is_full_speed());
    }
}
