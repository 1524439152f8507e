use confique::Config as DeriveConfig;

#[derive(Debug, DeriveConfig)]
pub struct Config {
    /// How many arrays and objects may be open at the same time before a document is rejected
    /// with "Nesting too deep". `0` disables the limit, which lets a hostile document exhaust the
    /// stack.
    #[config(default = 512)]
    pub max_depth: usize,

    /// Run a second, independent JSON grammar over documents that the validator did not reject,
    /// and report anything it complains about as an error.
    #[config(default = true)]
    pub fallback_parser: bool,

    /// Treat warnings (duplicate keys, unsafe integers) as failures for the exit status.
    #[config(default = false)]
    pub deny_warnings: bool,
}

impl Config {
    pub fn max_depth(&self) -> Option<usize> {
        (self.max_depth != 0).then_some(self.max_depth)
    }
}
