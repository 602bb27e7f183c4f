//! Logging shims.
//!
//! Each macro forwards to `defmt` and/or `log` depending on the enabled
//! features. With neither enabled the arguments are still type-checked,
//! then discarded. Keep format strings to `{}`, `{:?}` and `{:#x}` so both
//! backends accept them.

macro_rules! phy_log {
    ($level:ident, $($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        ::defmt::$level!($($arg)*);
        #[cfg(feature = "log")]
        ::log::$level!($($arg)*);
        #[cfg(not(any(feature = "defmt", feature = "log")))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

macro_rules! phy_debug {
    ($($arg:tt)*) => { $crate::internal::log::phy_log!(debug, $($arg)*) };
}

macro_rules! phy_info {
    ($($arg:tt)*) => { $crate::internal::log::phy_log!(info, $($arg)*) };
}

macro_rules! phy_warn {
    ($($arg:tt)*) => { $crate::internal::log::phy_log!(warn, $($arg)*) };
}

macro_rules! phy_error {
    ($($arg:tt)*) => { $crate::internal::log::phy_log!(error, $($arg)*) };
}

pub(crate) use {phy_debug, phy_error, phy_info, phy_log, phy_warn};
