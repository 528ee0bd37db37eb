/// Architecture label used when no -a flag is given.
pub const DEFAULT_ARCH: &str = "aarch64";

/// Output directory used when no -o flag is given.
pub const DEFAULT_OUTDIR: &str = "build/libjava-tree-sitter";

pub struct Config {
    /// Target architecture label. Reported in build output, not forwarded
    /// to the compiler invocation.
    pub arch: String,
    /// Directory the compiled library is written to.
    pub outdir: String,
}

impl Config {
    pub fn default() -> Self {
        Self {
            arch: DEFAULT_ARCH.to_string(),
            outdir: DEFAULT_OUTDIR.to_string(),
        }
    }
}

/// Scan the argument list for -a and -o. A flag with no following token is
/// ignored, as is any unrecognized argument. The last occurrence of a flag
/// wins. Values are taken as-is, without validation.
pub fn parse_args(args: &[String]) -> Config {
    let mut config = Config::default();

    for (i, arg) in args.iter().enumerate() {
        match arg.as_str() {
            "-a" => {
                if let Some(value) = args.get(i + 1) {
                    config.arch = value.clone();
                }
            }
            "-o" => {
                if let Some(value) = args.get(i + 1) {
                    config.outdir = value.clone();
                }
            }
            _ => {}
        }
    }

    config
}
