use std::sync::Once;
use tracing_subscriber::util::SubscriberInitExt;

static INIT: Once = Once::new();

/// Routes `tracing` events, and `log` records through the
/// `tracing-log` bridge, to the test writer. Safe to call from every test.
pub fn init_testing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .finish()
            .try_init();
    });
}
