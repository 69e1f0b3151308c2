//! Progress bar display for batch packaging

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for batch packaging runs
pub struct ProgressDisplay {
    script_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total script count
    pub fn new(total_scripts: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let script_pb = ProgressBar::new(total_scripts);
        script_pb.set_style(style);

        Self { script_pb }
    }

    /// Update to show the script currently being packaged
    pub fn update_script(&self, script_name: &str, current: usize, total: usize) {
        let msg = format!("({}/{}) {}", current, total, script_name);
        self.script_pb.set_message(msg);
    }

    /// Print a status line without clobbering the bar
    pub fn println(&self, line: &str) {
        // A hidden bar (non-TTY) silently drops `ProgressBar::println`,
        // so fall back to plain stdout there.
        if self.script_pb.is_hidden() {
            println!("{line}");
        } else {
            self.script_pb.println(line);
        }
    }

    /// Increment script progress
    pub fn inc(&self) {
        self.script_pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.script_pb.finish_and_clear();
    }
}
