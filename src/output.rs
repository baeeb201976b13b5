// ABOUTME: Terminal color formatting as a pure, parameterized palette.
// ABOUTME: No process-global color state; callers pass the palette down.

/// ANSI color helpers, enabled or not at construction time.
///
/// All methods are pure string formatting; whether escapes are emitted is
/// the only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Color for stdout attached to a terminal, plain otherwise.
    pub fn auto() -> Self {
        Self::new(std::io::IsTerminal::is_terminal(&std::io::stdout()))
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    pub fn blue(&self, text: &str) -> String {
        self.paint("34", text)
    }

    pub fn red(&self, text: &str) -> String {
        self.paint("31", text)
    }

    pub fn cyan(&self, text: &str) -> String {
        self.paint("36", text)
    }

    /// The failure marker shown before terminal bad-news messages.
    pub fn x_mark(&self) -> String {
        self.red("\u{2717}")
    }
}
