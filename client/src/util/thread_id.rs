//! Client-generated conversation thread identifiers.
//!
//! Format: `user-{unix_millis}-{9 base36 chars}`. The remote service treats the
//! value as opaque and keys its conversation memory by it.

#[cfg(test)]
#[path = "thread_id_test.rs"]
mod thread_id_test;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh thread identifier from the wall clock and a random suffix.
pub fn generate() -> String {
    format_thread_id(now_millis(), uuid::Uuid::new_v4().as_u128())
}

/// Build a thread identifier from explicit parts.
pub fn format_thread_id(millis: u64, entropy: u128) -> String {
    format!("user-{millis}-{}", base36_suffix(entropy))
}

fn base36_suffix(mut entropy: u128) -> String {
    let mut out = String::with_capacity(SUFFIX_LEN);
    for _ in 0..SUFFIX_LEN {
        let digit = usize::try_from(entropy % 36).unwrap_or(0);
        out.push(char::from(BASE36[digit]));
        entropy /= 36;
    }
    out
}

fn now_millis() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let millis = js_sys::Date::now() as u64;
        millis
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}
