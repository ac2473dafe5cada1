//! Diagnostics on stderr.

use std::sync::atomic::{AtomicBool, Ordering};

use htmlgen_tags::get_env_bool;

/// When set, `trace!` statements print. Off by default.
pub static HTMLGEN_TRACE: AtomicBool = AtomicBool::new(false);

pub fn set_trace(on: bool) {
    HTMLGEN_TRACE.store(on, Ordering::SeqCst);
}

pub fn trace_enabled() -> bool {
    HTMLGEN_TRACE.load(Ordering::Relaxed)
}

/// Set `HTMLGEN_TRACE` from the env var of the same name, parsed like
/// the other htmlgen flags (see `htmlgen_tags::parse_flag`). An
/// unparseable value is reported and leaves tracing off. Returns the
/// new setting.
pub fn init_trace_from_env() -> bool {
    let on = get_env_bool("HTMLGEN_TRACE").unwrap_or_else(|e| {
        crate::warn!("{:#}, tracing stays off", e);
        false
    });
    set_trace(on);
    on
}

#[macro_export]
macro_rules! warn {
    ($formatstr:expr $(,$arg:expr)*) => { {
        use std::io::Write;
        let mut outp = std::io::BufWriter::new(std::io::stderr().lock());
        let _ = write!(&mut outp, "W: ");
        let _ = write!(&mut outp, $formatstr $(,$arg)*);
        let _ = writeln!(&mut outp, " at {:?} line {}", file!(), line!());
        let _ = outp.flush();
    } }
}

#[macro_export]
macro_rules! trace {
    ($formatstr:expr $(,$arg:expr)*) => {
        if $crate::warn::trace_enabled() {
            $crate::warn!($formatstr $(,$arg)*)
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    // The only test in this crate setting env vars.
    #[test]
    fn t_init_trace_from_env() {
        std::env::set_var("HTMLGEN_TRACE", "1");
        assert!(init_trace_from_env());
        assert!(trace_enabled());
        std::env::set_var("HTMLGEN_TRACE", "yes");
        assert!(init_trace_from_env());
        std::env::set_var("HTMLGEN_TRACE", "bogus");
        assert!(!init_trace_from_env());
        std::env::set_var("HTMLGEN_TRACE", "off");
        assert!(!init_trace_from_env());
        std::env::remove_var("HTMLGEN_TRACE");
        assert!(!init_trace_from_env());
        assert!(!trace_enabled());
    }
}
