use std::error::Error;
use std::fmt::Write;
use std::panic::Location;

/// Log `err` and its source chain at error level, tagged with the caller's location
#[track_caller]
pub fn log_error<E: Error + ?Sized>(err: &E) {
    let location = Location::caller();

    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(chain, ": {cause}");
        source = cause.source();
    }

    tracing::error!(
        file = location.file(),
        line = location.line(),
        error = %chain,
        "operation failed"
    );
}
