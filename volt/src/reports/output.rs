//! Output trait for rendering reports to different formats.

use console::style;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render a neutral progress message.
    fn info(&mut self, msg: &str);

    /// Render a completed step.
    fn success(&mut self, msg: &str);

    /// Render a failure.
    fn error(&mut self, msg: &str);

    /// Render an indented list item.
    fn list_item(&mut self, text: &str);

    /// Render a numbered list item.
    fn numbered_item(&mut self, index: usize, text: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn info(&mut self, msg: &str) {
        println!("{} {}", style("ℹ").blue(), msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{} {}", style("✓").green(), msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{} {}", style("✗").red(), msg);
    }

    fn list_item(&mut self, text: &str) {
        println!("{}   {}", style("ℹ").blue(), style(text).dim());
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        println!("{}   {}. {}", style("ℹ").blue(), index, text);
    }
}

/// Collects rendered lines with a plain marker prefix.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn info(&mut self, msg: &str) {
        self.lines.push(format!("info: {msg}"));
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(format!("success: {msg}"));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(format!("error: {msg}"));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("  {text}"));
    }

    fn numbered_item(&mut self, index: usize, text: &str) {
        self.lines.push(format!("  {index}. {text}"));
    }
}
