use crate::name::DeviceName;
use crate::speed::MaxSpeed;
use crate::token::AuthToken;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyDeviceName,
    MaxSpeedOutOfRange(i64),
}

/// Rover settings, fixed at build time and handed to consumers by reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    // Auth token for the remote control service
    auth_token: AuthToken,

    // Device name (used to identify the rover)
    device_name: DeviceName,

    // Max PWM duty applied to the motors (0-255)
    max_speed: MaxSpeed,
}

impl Config {
    pub const fn new(
        auth_token: &'static str,
        device_name: &'static str,
        max_speed: u8,
    ) -> Result<Self, Error> {
        let device_name = match DeviceName::new(device_name) {
            Ok(name) => name,
            Err(e) => return Err(e),
        };

        Ok(Self {
            auth_token: AuthToken::new(auth_token),
            device_name,
            max_speed: MaxSpeed::new(max_speed),
        })
    }

    pub const fn auth_token(&self) -> AuthToken {
        self.auth_token
    }

    pub const fn device_name(&self) -> DeviceName {
        self.device_name
    }

    pub const fn max_speed(&self) -> MaxSpeed {
        self.max_speed
    }

    /// Logs the active configuration at startup. The auth token is redacted.
    pub fn log_summary(&self) {
        log::info!(
            "Rover {} (firmware {})",
            self.device_name,
            crate::constants::VERSION
        );
        log::info!("Max speed: {}", self.max_speed);

        if self.auth_token.is_empty() {
            log::error!("Auth token is empty, control service login will fail");
        } else {
            log::info!("Auth token: {:?}", self.auth_token);
        }
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
