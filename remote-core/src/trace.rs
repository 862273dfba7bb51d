//! Debug trace backend selection.
//!
//! [`RemoteControl`](crate::RemoteControl) emits one line per notable event
//! when its debug flag is set. The line goes to `defmt` on embedded
//! targets, to `log` on host, and compiles to nothing when neither feature
//! is enabled. Only `{}` placeholders with integers and `&str` are used,
//! which both backends format identically.

macro_rules! debug_line {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
        #[cfg(all(feature = "log", not(feature = "defmt")))]
        log::debug!($($arg)*);
        #[cfg(all(not(feature = "defmt"), not(feature = "log")))]
        let _ = core::format_args!($($arg)*);
    }};
}

pub(crate) use debug_line;
