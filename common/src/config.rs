#[derive(Debug, Clone)]
pub struct Config {
    /// Seeds the ticket source so a session can be replayed.
    ///
    /// `None` draws from the operating system's entropy.
    pub seed: Option<u64>,
    pub no_banner: bool,
    /// 0 prints everything, 1 drops the banner and section headers.
    pub quiet: u8,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            no_banner: false,
            quiet: 0,
            color: true,
        }
    }
}

impl Config {
    pub fn show_headers(&self) -> bool {
        self.quiet == 0
    }

    pub fn show_banner(&self) -> bool {
        !self.no_banner && self.show_headers()
    }
}
