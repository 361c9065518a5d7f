//! Timer-driven hero animations. Both tickers are plain state machines; the
//! view owns the interval and feeds elapsed time or ticks in.

pub const TYPE_DELAY_MS: u64 = 40;
pub const LINE_PAUSE_MS: u64 = 180;
pub const TYPE_START_DELAY_MS: u64 = 250;
/// Frame interval for count-up animations.
pub const FRAME_MS: u64 = 16;

/// Counts from zero to `target` with an ease-out cubic curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: u64,
    elapsed_ms: u64,
    running: bool,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: u64) -> Self {
        Self {
            target,
            duration_ms,
            elapsed_ms: 0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_done(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Advances by `dt_ms` while running, stopping on its own once the target is reached.
    pub fn tick(&mut self, dt_ms: u64) -> u32 {
        if self.running {
            self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
            if self.is_done() {
                self.running = false;
            }
        }
        self.value()
    }

    pub fn value(&self) -> u32 {
        if self.duration_ms == 0 || self.is_done() {
            return self.target;
        }
        let progress = self.elapsed_ms as f64 / self.duration_ms as f64;
        let eased = 1.0 - (1.0 - progress).powi(3);
        (f64::from(self.target) * eased).floor() as u32
    }
}

/// Types `lines` one character per tick, accumulating finished lines, and
/// starts over from a blank screen after the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    lines: Vec<String>,
    line: usize,
    chars: usize,
    running: bool,
}

impl Typewriter {
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            line: 0,
            chars: 0,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn reset(&mut self) {
        self.line = 0;
        self.chars = 0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once the current line is fully typed; the next tick moves on.
    pub fn at_line_end(&self) -> bool {
        self.lines
            .get(self.line)
            .is_none_or(|l| self.chars >= l.chars().count())
    }

    /// Delay the view should wait before the next tick.
    pub fn next_delay_ms(&self) -> u64 {
        if self.at_line_end() {
            LINE_PAUSE_MS
        } else {
            TYPE_DELAY_MS
        }
    }

    pub fn tick(&mut self) {
        if !self.running || self.lines.is_empty() {
            return;
        }
        if self.at_line_end() {
            self.line += 1;
            self.chars = 0;
            if self.line >= self.lines.len() {
                self.line = 0;
            }
        } else {
            self.chars += 1;
        }
    }

    /// Lines typed so far, the last one possibly partial.
    pub fn visible(&self) -> Vec<String> {
        if self.lines.is_empty() {
            return vec![String::new()];
        }
        let mut out = self.lines[..self.line].to_vec();
        out.push(self.lines[self.line].chars().take(self.chars).collect());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_up_reaches_target_monotonically() {
        let mut counter = CountUp::new(150, 1400);
        assert_eq!(counter.tick(100), 0, "idle until started");

        counter.start();
        let mut last = 0;
        while counter.is_running() {
            let v = counter.tick(FRAME_MS);
            assert!(v >= last);
            assert!(v <= 150);
            last = v;
        }
        assert_eq!(last, 150);
        assert!(counter.is_done());
    }

    #[test]
    fn test_count_up_eases_out() {
        let mut counter = CountUp::new(100, 1000);
        counter.start();
        // ease-out: more than half-way after half the time
        assert!(counter.tick(500) > 50);
        counter.stop();
        let paused = counter.tick(500);
        assert_eq!(counter.value(), paused);

        counter.reset();
        assert_eq!(counter.value(), 0);
        assert_eq!(CountUp::new(6, 0).value(), 6);
    }

    #[test]
    fn test_typewriter_types_then_wraps() {
        let mut tw = Typewriter::new(["ab", "c"]);
        tw.tick();
        assert_eq!(tw.visible(), vec![""], "idle until started");

        tw.start();
        tw.tick();
        assert_eq!(tw.visible(), vec!["a"]);
        assert_eq!(tw.next_delay_ms(), TYPE_DELAY_MS);
        tw.tick();
        assert_eq!(tw.visible(), vec!["ab"]);
        assert_eq!(tw.next_delay_ms(), LINE_PAUSE_MS);

        tw.tick();
        assert_eq!(tw.visible(), vec!["ab", ""]);
        tw.tick();
        assert_eq!(tw.visible(), vec!["ab", "c"]);

        // past the last line the screen clears
        tw.tick();
        assert_eq!(tw.visible(), vec![""]);
    }

    #[test]
    fn test_typewriter_blank_lines_and_reset() {
        let mut tw = Typewriter::new(["x", "", "y"]);
        tw.start();
        for _ in 0..2 {
            tw.tick();
        }
        assert_eq!(tw.visible(), vec!["x", ""]);
        tw.tick();
        assert_eq!(tw.visible(), vec!["x", "", ""]);

        tw.reset();
        assert!(!tw.is_running());
        assert_eq!(tw.visible(), vec![""]);
        assert_eq!(Typewriter::new(Vec::<String>::new()).visible(), vec![""]);
    }
}
