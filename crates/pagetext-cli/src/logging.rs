use std::any::Any;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the stderr subscriber. `log` records from the PDF libraries are
/// forwarded through the same filter.
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose))),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Report panics as `error` events instead of the default stderr message.
///
/// Backend panics are caught and reported as failed attempts; this keeps the
/// panic text itself under the log filter.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::error!(%location, "panic: {}", payload_message(info.payload()));
    }));
}

fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert_eq!(default_filter(true), "debug");
    }

    fn capture_panic(filter: &str, message: &'static str) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let result = std::panic::catch_unwind(|| panic!("{}", message));
            assert!(result.is_err());
        });

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    // One test owns the process-wide hook so parallel tests cannot swap it out.
    #[test]
    fn test_panics_are_logged_through_tracing() {
        install_panic_hook();
        let shown = capture_panic("error", "xref stream is truncated");
        let hidden = capture_panic("off", "hidden");
        let _ = std::panic::take_hook();

        assert!(shown.contains("ERROR"), "logged: {shown}");
        assert!(shown.contains("panic: xref stream is truncated"), "logged: {shown}");
        assert!(hidden.is_empty(), "logged: {hidden}");
    }

    #[test]
    fn test_payload_message() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let borrowed: Box<dyn Any + Send> = Box::new("borrowed");
        let other: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(payload_message(owned.as_ref()), "owned");
        assert_eq!(payload_message(borrowed.as_ref()), "borrowed");
        assert_eq!(payload_message(other.as_ref()), "unknown payload");
    }
}
