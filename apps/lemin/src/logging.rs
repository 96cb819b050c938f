use env_logger::Env;

/// Route `log` records to stderr.  `RUST_LOG` wins over `level`, which
/// defaults to `warn`.
pub fn init(level: Option<&str>) {
    let default = level.unwrap_or("warn");
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}
