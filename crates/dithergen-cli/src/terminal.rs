//! Terminal state for the animated host.
//!
//! [`TerminalSession`] hides the cursor for the length of a run and shows it
//! again when dropped, so early `?` returns and panics leave the terminal
//! usable. On Unix, Ctrl-C sets a flag instead of killing the process; the
//! play loop polls [`interrupted`] once per frame and returns normally.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};

use crate::present::{CLEAR_SCREEN, HIDE_CURSOR, SHOW_CURSOR};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Whether an interrupt arrived since [`catch_interrupt`] was called.
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

#[cfg(unix)]
extern "C" fn on_interrupt(_signal: std::os::raw::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Route SIGINT to the interrupt flag and clear it.
#[cfg(unix)]
pub fn catch_interrupt() -> io::Result<()> {
    use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};

    INTERRUPTED.store(false, Ordering::SeqCst);
    let action = SigAction::new(
        SigHandler::Handler(on_interrupt),
        SaFlags::empty(),
        SigSet::empty(),
    );
    // SAFETY: the handler only stores to an atomic, which is signal safe.
    unsafe { sigaction(Signal::SIGINT, &action) }.map_err(io::Error::from)?;
    debug!("SIGINT routed to interrupt flag");
    Ok(())
}

/// No signal routing off Unix; Ctrl-C ends the process as usual.
#[cfg(not(unix))]
pub fn catch_interrupt() -> io::Result<()> {
    INTERRUPTED.store(false, Ordering::SeqCst);
    Ok(())
}

/// A cleared screen with a hidden cursor, restored on drop.
pub struct TerminalSession<W: Write> {
    out: W,
}

impl<W: Write> TerminalSession<W> {
    /// Clear the screen and hide the cursor.
    pub fn begin(mut out: W) -> io::Result<Self> {
        write!(out, "{}{}", CLEAR_SCREEN, HIDE_CURSOR)?;
        out.flush()?;
        Ok(Self { out })
    }

    /// Writer for frame output.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        let restored = write!(self.out, "{}", SHOW_CURSOR).and_then(|_| self.out.flush());
        if let Err(e) = restored {
            // Don't panic in drop.
            warn!("failed to restore cursor: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_session_restores_cursor() {
        let mut buf = Vec::new();
        {
            let mut session = TerminalSession::begin(&mut buf).unwrap();
            write!(session.out(), "frame").unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with(CLEAR_SCREEN));
        assert!(text.contains(HIDE_CURSOR));
        assert!(text.ends_with(&format!("frame{}", SHOW_CURSOR)));
    }

    #[test]
    fn test_session_restores_cursor_on_panic() {
        let mut buf = Vec::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _session = TerminalSession::begin(&mut buf).unwrap();
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert!(String::from_utf8(buf).unwrap().ends_with(SHOW_CURSOR));
    }

    #[cfg(unix)]
    #[test]
    fn test_catch_interrupt_clears_flag() {
        INTERRUPTED.store(true, Ordering::SeqCst);
        catch_interrupt().unwrap();
        assert!(!interrupted());
    }
}
