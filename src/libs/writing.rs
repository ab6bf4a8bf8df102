use std::io::{StdoutLock, Write};

pub mod cc {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const WHITE: &str = "\x1b[37m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const DARK_GRAY: &str = "\x1b[38;5;238m";
    pub const LIGHT_GRAY: &str = "\x1b[38;5;245m";
    pub const LIGHT_GREEN: &str = "\x1b[92m";
    pub const LIGHT_BLUE: &str = "\x1b[94m";
    pub const LIGHT_CYAN: &str = "\x1b[96m";
    pub const LIGHT_RED: &str = "\x1b[91m";
    pub const LIGHT_YELLOW: &str = "\x1b[93m";
    pub const LIGHT_WHITE: &str = "\x1b[97m";
}

// Diagnostics go to stderr so stdout stays a clean report that can be
// piped or redirected on its own.
#[macro_export]
macro_rules! log {
    // -----------------------------------------------------------------
    // 1) colored, no extra args
    //    log!(cc::RED, "hello");
    // -----------------------------------------------------------------
    ($color:expr, $fmt:literal $(,)?) => {{
        let time = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                concat!("{}{} | {}", "{}", $fmt, "{}", "\n"),
                $crate::libs::writing::cc::LIGHT_GRAY,
                time,
                $crate::libs::writing::cc::RESET,
                $color,
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};

    // -----------------------------------------------------------------
    // 2) colored, with args
    //    log!(cc::GREEN, "priced {} at {}", sym, usd);
    // -----------------------------------------------------------------
    ($color:expr, $fmt:literal, $($arg:expr),+ $(,)?) => {{
        let time = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                concat!("{}{} | {}", "{}", $fmt, "{}", "\n"),
                $crate::libs::writing::cc::LIGHT_GRAY,
                time,
                $crate::libs::writing::cc::RESET,
                $color,
                $($arg),+,
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};

    // -----------------------------------------------------------------
    // 3) default color, no args
    //    log!("hello");
    // -----------------------------------------------------------------
    ($fmt:literal $(,)?) => {{
        let time = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                concat!("{}{} | {}", "{}", $fmt, "{}", "\n"),
                $crate::libs::writing::cc::LIGHT_GRAY,
                time,
                $crate::libs::writing::cc::RESET,
                $crate::libs::writing::cc::LIGHT_GRAY,
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};

    // -----------------------------------------------------------------
    // 4) default color, with args
    //    log!("price: {}", p);
    // -----------------------------------------------------------------
    ($fmt:literal, $($arg:expr),+ $(,)?) => {{
        let time = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                concat!("{}{} | {}", "{}", $fmt, "{}", "\n"),
                $crate::libs::writing::cc::LIGHT_GRAY,
                time,
                $crate::libs::writing::cc::RESET,
                $crate::libs::writing::cc::LIGHT_GRAY,
                $($arg),+,
                $crate::libs::writing::cc::RESET,
            ),
        );
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        let mut _stderr = ::std::io::stderr().lock();
        let _ = ::std::io::Write::write_fmt(
            &mut _stderr,
            format_args!(
                "{}{}{}",
                $crate::libs::writing::cc::ORANGE,
                format_args!($($arg)*),
                $crate::libs::writing::cc::RESET,
            ),
        );
        let _ = ::std::io::Write::write_fmt(&mut _stderr, format_args!("\n"));
    }};
}

pub struct Colors<'a> {
    lock: StdoutLock<'a>,
}

impl<'a> Colors<'a> {
    pub fn new(lock: StdoutLock<'a>) -> Self {
        Self { lock }
    }

    pub fn cprint(&mut self, text: &str, color: &str) {
        let _ = writeln!(self.lock, "{}{}{}", color, text, cc::RESET);
    }

    pub fn err_print(&mut self, text: &str) {
        let _ = writeln!(self.lock, "{}{}{}", cc::RED, text, cc::RESET);
    }
}

/// Short hex form of an address for log lines, e.g. `0x1234ab…cdef99`.
pub fn short_addr(addr: &alloy::primitives::Address) -> String {
    let s = addr.as_slice();
    format!("0x{}…{}", hex::encode(&s[0..3]), hex::encode(&s[17..20]))
}

#[cfg(test)]
mod tests {
    #[test]
    fn smoke_log_variants_compile() {
        crate::log!(crate::libs::writing::cc::GREEN, "colored no args");
        crate::log!(crate::libs::writing::cc::GREEN, "colored with arg: {}", 123);
        crate::log!("plain no args");
        crate::log!("plain with arg: {}", 456);
    }

    #[test]
    fn short_addr_keeps_ends() {
        let a = alloy::primitives::Address::repeat_byte(0xab);
        assert_eq!(super::short_addr(&a), "0xababab…ababab");
    }
}
