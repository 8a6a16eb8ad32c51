use textwrap::wrap;

/// Fixed-size viewport over the wrapped translated text. Replacing the text
/// snaps the view to the bottom edge so long output reads append-like.
pub struct OutputView {
    width: usize,
    height: usize,
    lines: Vec<String>,
    scroll: usize,
}

impl OutputView {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            lines: Vec::new(),
            scroll: 0,
        }
    }

    /// Replace the content, rewrap, follow the bottom edge.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text
            .lines()
            .flat_map(|line| {
                if line.is_empty() {
                    vec![String::new()]
                } else {
                    wrap(line, self.width)
                        .into_iter()
                        .map(|cow| cow.into_owned())
                        .collect()
                }
            })
            .collect();
        self.scroll = self.lines.len().saturating_sub(self.height);
    }

    /// Rows currently inside the viewport.
    pub fn visible(&self) -> &[String] {
        let end = (self.scroll + self.height).min(self.lines.len());
        &self.lines[self.scroll..end]
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }
}
