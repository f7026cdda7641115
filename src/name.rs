use core::fmt;

use crate::config::Error;

/// Human readable label telling this rover apart from the other deployed units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceName(&'static str);

impl DeviceName {
    pub const fn new(name: &'static str) -> Result<Self, Error> {
        if name.is_empty() {
            return Err(Error::EmptyDeviceName);
        }
        Ok(Self(name))
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_name_verbatim() {
        let name = DeviceName::new("Rover-Bilbo-Baggins").unwrap();
        assert_eq!(name.as_str(), "Rover-Bilbo-Baggins");
        assert_eq!(std::format!("{}", name), "Rover-Bilbo-Baggins");
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(DeviceName::new(""), Err(Error::EmptyDeviceName));
    }

    #[test]
    fn accepts_long_name() {
        let long = "Rover-Bilbo-Baggins-Workshop-Unit-42";
        assert_eq!(DeviceName::new(long).unwrap().as_str(), long);
    }
}
