// Line-oriented writer for indented, block-structured markup.

const INDENT: &str = "    ";

/// Accumulates markup lines at a tracked nesting depth.
///
/// Blank lines between sections are requested through [`MarkupBuilder::request_empty_line`]
/// and written lazily by [`MarkupBuilder::empty_line_if_needed`], so any number of
/// requests between two sections produce a single blank line.
///
/// A pending request is dropped rather than written in two places: directly after
/// an opening tag (`empty_line_if_needed` then returns false) and when the block it
/// was requested in is closed. Blocks therefore never start or end with a blank line.
#[derive(Debug, Default)]
pub struct MarkupBuilder {
    lines: Vec<String>,
    depth: usize,
    need_empty_line: bool,
    at_block_start: bool,
}

impl MarkupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts writing at `depth`, for bodies nested inside an outer document.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn line(&mut self, text: &str) {
        self.lines.push(format!("{}{}", INDENT.repeat(self.depth), text));
        self.at_block_start = false;
    }

    /// Unconditional blank line.
    pub fn empty_line(&mut self) {
        self.lines.push(String::new());
        self.at_block_start = false;
    }

    pub fn start_block(&mut self, open_tag: &str) {
        self.line(open_tag);
        self.depth += 1;
        self.at_block_start = true;
    }

    /// Closes the current block. A blank line requested inside the block is dropped.
    pub fn end_block(&mut self, close_tag: &str) {
        debug_assert!(self.depth > 0, "end_block without matching start_block");
        self.depth = self.depth.saturating_sub(1);
        self.need_empty_line = false;
        self.line(close_tag);
    }

    pub fn request_empty_line(&mut self) {
        self.need_empty_line = true;
    }

    /// Writes the pending blank line, if any. Returns whether one was written.
    pub fn empty_line_if_needed(&mut self) -> bool {
        let pending = std::mem::take(&mut self.need_empty_line);
        if pending && !self.at_block_start {
            self.empty_line();
            return true;
        }
        false
    }

    pub fn join(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
