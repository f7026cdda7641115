use core::ffi::CStr;
use core::fmt;
use heapless::Vec;

use crate::constants::AUTH_TOKEN_C_STR_MAX;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    BufferOverflow,
    InteriorNul,
}

/// Secret used to authenticate the rover against the remote control service.
///
/// The format is owned by the service and is not checked here. The value is
/// never printed: `Debug` redacts it and there is no `Display` impl.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AuthToken(&'static str);

impl AuthToken {
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Writes the token as a C-style string (null-terminated) to the provided buffer,
    // for client libraries that want writable character storage.
    // The bytes are copied exactly as configured.
    // Returns a `CStr` referencing the data in `buffer` or an `Error` if:
    // - The buffer is too small to hold the token and the null terminator.
    // - The token contains interior null bytes (which is invalid for `CStr`).
    pub fn write_c_str<'buf>(&self, buffer: &'buf mut [u8]) -> Result<&'buf CStr, Error> {
        let bytes = self.0.as_bytes();
        let len = bytes.len();

        if len + 1 > buffer.len() {
            return Err(Error::BufferOverflow);
        }

        buffer[..len].copy_from_slice(bytes);
        buffer[len] = 0;

        CStr::from_bytes_with_nul(&buffer[..=len]).map_err(|_| Error::InteriorNul)
    }

    // Same as `write_c_str` but returns an owned, null-terminated copy.
    pub fn to_c_str_vec(&self) -> Result<Vec<u8, AUTH_TOKEN_C_STR_MAX>, Error> {
        let mut buf: Vec<u8, AUTH_TOKEN_C_STR_MAX> = Vec::new();
        buf.resize_default(AUTH_TOKEN_C_STR_MAX)
            .map_err(|_| Error::BufferOverflow)?;

        let len = self.write_c_str(&mut buf)?.to_bytes_with_nul().len();
        buf.truncate(len);

        Ok(buf)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthToken").field(&"***").finish()
    }
}
