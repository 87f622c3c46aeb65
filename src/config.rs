/// Options for a single render run, built once from the command line and
/// passed explicitly to the collection builder and the renderers.
pub struct RenderConfig {
    pub title: String,
    pub mode: String,
    pub base_url: Option<String>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum OutputMode {
    Html,
    Rss,
    Atom,
}

impl OutputMode {
    /// Case-insensitive match against the mode flag. Unknown modes are the
    /// caller's problem to report.
    pub fn parse(mode: &str) -> Option<OutputMode> {
        match mode.to_ascii_lowercase().as_str() {
            "html" => Some(OutputMode::Html),
            "rss" => Some(OutputMode::Rss),
            "atom" => Some(OutputMode::Atom),
            _ => None,
        }
    }
}
