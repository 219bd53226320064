use std::io::Write;

/// Fill glyphs in eighth-of-a-cell increments, empty through full.
const BLOCKS: [&str; 9] = [" ", "▏", "▎", "▍", "▌", "▋", "▊", "▉", "█"];

/// Wipes the current line and returns the cursor to column 0.
const CLEAR_LINE: &str = "\x1B[2K\r";

pub struct TextProgressBar {
    width: usize,
}

impl TextProgressBar {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Bar portion of the line, at sub-character resolution.
    ///
    /// A fraction of 1.0 or more fills every cell. Below that, the bar is
    /// `n_full` full blocks, one partial glyph picked by the leftover
    /// eighths, and space padding out to `width` cells.
    pub fn bar(&self, fraction: f64) -> String {
        if fraction >= 1.0 {
            return BLOCKS[8].repeat(self.width);
        }

        let length_in_chars = fraction * self.width as f64;
        let n_full = length_in_chars as usize;
        let i_partial = (8.0 * (length_in_chars - n_full as f64)) as usize;
        let n_empty = self.width.saturating_sub(n_full + 1);

        format!(
            "{}{}{}",
            BLOCKS[8].repeat(n_full),
            BLOCKS[i_partial],
            BLOCKS[0].repeat(n_empty)
        )
    }

    /// Full terminal line: step counters, percentage, bar and label.
    ///
    /// Counters are right-aligned to the digit count of `nsteps` so
    /// successive lines do not wobble. The final step gets a trailing
    /// newline so the cursor leaves the progress line; every other step
    /// leaves the cursor in place for the next overwrite.
    pub fn render(&self, stepno: u64, nsteps: u64, label: &str) -> String {
        let nchars = (nsteps.ilog10() + 1) as usize;
        let percent = 100.0 * stepno as f64 / nsteps as f64;

        let mut line = format!(
            "{CLEAR_LINE}[{stepno:>nchars$}/{nsteps:>nchars$}]({percent:3.0}%) {} {label}",
            self.bar(percent / 100.0),
        );

        if stepno == nsteps {
            line.push('\n');
        }

        line
    }

    /// Writes the rendered line and flushes, so the terminal updates even
    /// though most lines carry no newline.
    pub fn emit<W: Write>(
        &self,
        out: &mut W,
        stepno: u64,
        nsteps: u64,
        label: &str,
    ) -> std::io::Result<()> {
        out.write_all(self.render(stepno, nsteps, label).as_bytes())?;
        out.flush()
    }
}
