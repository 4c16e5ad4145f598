//! Exit code constants for the whittle CLI.
//!
//! - 0: Success
//! - 1: Configuration error (missing credential, bad args, invalid config)
//! - 2: I/O failure (unreadable input, failed specification write)
//! - 3: Backend failure (generation request failed)
//! - 4: Malformed response (backend output is not a JSON object)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Configuration error: missing credential, empty description, or invalid config.
pub const CONFIG_ERROR: i32 = 1;

/// I/O failure: unreadable document or specification file, or a failed write.
pub const IO_FAILURE: i32 = 2;

/// Backend failure: the generation request failed (network, auth, quota).
pub const BACKEND_FAILURE: i32 = 3;

/// Malformed response: the backend output is not a single JSON object.
pub const MALFORMED_RESPONSE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, CONFIG_ERROR, IO_FAILURE, BACKEND_FAILURE, MALFORMED_RESPONSE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_match_documented_values() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(CONFIG_ERROR, 1);
        assert_eq!(IO_FAILURE, 2);
        assert_eq!(BACKEND_FAILURE, 3);
        assert_eq!(MALFORMED_RESPONSE, 4);
    }
}
