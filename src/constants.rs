/// Current firmware version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Size of the buffer holding the auth token as a C string, terminator included
pub const AUTH_TOKEN_C_STR_MAX: usize = 64;

/// Upper end of the PWM duty cycle scale
pub const PWM_DUTY_MAX: u8 = u8::MAX;

/// Max speed used when nothing slower is configured
pub const DEFAULT_MAX_SPEED: u8 = PWM_DUTY_MAX;
