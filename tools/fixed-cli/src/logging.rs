use tracing_subscriber::EnvFilter;

/// stderr 전용 구독자. stdout은 플롯/보고서 출력에 남겨 둔다.
/// `RUST_LOG`가 없으면 `warn`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
