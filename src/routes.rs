pub mod health_check;
pub mod send_otp;

pub use health_check::*;
pub use send_otp::*;

/// Walk the chain of error causes and print each one on its own line,
/// utilized by the `Debug` implementations of the route error types
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
