//! Progress Bridge: throttled forwarding of long-running-operation progress
//! into interpreter callback evaluations.

use std::time::{Duration, Instant};

use tracing::debug;

use host::{Interp, Obj};

/// Script command evaluated for every forwarded progress event.
pub const PROGRESS_CALLBACK: &str = "progressCallback";

/// Minimum interval between forwarded reports; completion always forwards.
const MIN_INTERVAL: Duration = Duration::from_millis(30);

/// Forwards `report(done, total, message)` calls from a long-running native
/// operation to a script callback, at most one forwarded event per
/// [`MIN_INTERVAL`] except that the completing report (`done == total`)
/// always goes through.
///
/// One instance belongs to one in-flight operation; reports forward in call
/// order and a suppressed report never reorders ahead of a later one.
pub struct Progress {
    callback: String,
    last_forward: Instant,
    last_done: usize,
    last_total: usize,
    last_msg: Option<String>,
}

impl Progress {
    /// Issue the `init` handshake to [`PROGRESS_CALLBACK`] and build the
    /// bridge. A host rejection yields `None`: progress reporting is
    /// unavailable and the operation proceeds without it.
    pub fn create<I: Interp>(ip: &mut I) -> Option<Self> {
        Self::create_named(ip, PROGRESS_CALLBACK)
    }

    /// Like [`Progress::create`] with a custom callback command.
    pub fn create_named<I: Interp>(ip: &mut I, callback: &str) -> Option<Self> {
        let cmd = ip.new_string(callback.as_bytes());
        let init = ip.new_string(b"init");
        let words = [cmd, init];
        let res = ip.retained(&words, |ip| ip.eval(&words));
        if !res.is_ok() {
            return None;
        }
        Some(Progress {
            callback: callback.to_string(),
            last_forward: Instant::now(),
            last_done: 0,
            last_total: 0,
            last_msg: None,
        })
    }

    /// Report fractional progress. Returns the "continue?" signal: `false`
    /// means the callback failed (e.g. script-side cancellation) and the
    /// operation should stop reporting; a suppressed report returns `true`
    /// as if it had been forwarded.
    pub fn report<I: Interp>(
        &mut self,
        ip: &mut I,
        done: usize,
        total: usize,
        msg: Option<&str>,
    ) -> bool {
        self.last_done = done;
        self.last_total = total;
        self.last_msg = msg.map(str::to_string);

        let now = Instant::now();
        if done != total && now.duration_since(self.last_forward) < MIN_INTERVAL {
            debug!(done, total, "progress report suppressed by throttle");
            return true;
        }
        self.last_forward = now;

        // done/total, with an unquantified total reading as complete.
        let fraction = if total == 0 {
            1.0
        } else {
            done as f64 / total as f64
        };

        let cmd = ip.new_string(self.callback.as_bytes());
        let frac = ip.new_double(fraction);
        let mut words = [cmd, frac, Obj(0)];
        let mut n = 2;
        if let Some(msg) = msg {
            words[2] = ip.new_string(msg.as_bytes());
            n = 3;
        }
        let words = &words[..n];
        let res = ip.retained(words, |ip| ip.eval(words));
        res.is_ok()
    }

    /// Counters and message of the most recent `report` call, forwarded or
    /// not.
    pub fn last_report(&self) -> (usize, usize, Option<&str>) {
        (self.last_done, self.last_total, self.last_msg.as_deref())
    }
}
