// Logging shims: forward to `tracing` when the feature is on, vanish otherwise.

#[cfg(feature = "tracing")]
macro_rules! ts_trace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "tabstrip", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ts_trace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! ts_debug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "tabstrip", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ts_debug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! ts_warn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "tabstrip", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ts_warn {
    ($($tt:tt)*) => {};
}
