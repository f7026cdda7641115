use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

const DEFAULT_CFG_PATH: &str = "cfg.toml";
const PLACEHOLDER_TOKEN: &str = "YourAuthToken";

const PWM_DUTY_MAX: i64 = u8::MAX as i64;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    auth_token: String,
    device_name: String,
    max_speed: i64,
}

impl RawConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0..=PWM_DUTY_MAX).contains(&self.max_speed) {
            return Err(format!(
                "max_speed = {} is out of range, expected a value between 0 and {}",
                self.max_speed, PWM_DUTY_MAX
            ));
        }

        if self.device_name.is_empty() {
            return Err("device_name must not be empty".into());
        }

        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cfg_path = env::var("ROVER_CFG").unwrap_or_else(|_| DEFAULT_CFG_PATH.to_string());

    // Tell Cargo to rerun if the toml or its location changes
    println!("cargo:rerun-if-env-changed=ROVER_CFG");
    println!("cargo:rerun-if-changed={}", cfg_path);

    // Read and parse
    let toml_str = fs::read_to_string(&cfg_path)
        .map_err(|e| format!("failed to read {}: {}", cfg_path, e))?;
    let raw: RawConfig =
        toml::from_str(&toml_str).map_err(|e| format!("failed to parse {}: {}", cfg_path, e))?;

    raw.validate()
        .map_err(|e| format!("invalid configuration in {}: {}", cfg_path, e))?;

    if raw.auth_token == PLACEHOLDER_TOKEN || raw.auth_token.is_empty() {
        println!(
            "cargo:warning=auth_token in {} is not set, the rover will not reach the control service",
            cfg_path
        );
    }

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    let code = format!(
        r#"
        pub const CONFIG: Config = match Config::new({token:?}, {name:?}, {speed}) {{
            Ok(config) => config,
            Err(_) => panic!("cfg.toml does not describe a valid rover configuration"),
        }};
    "#,
        token = raw.auth_token,
        name = raw.device_name,
        speed = raw.max_speed,
    );

    fs::write(dest_path, code)?;
    Ok(())
}
