#[cfg(feature = "tracing")]
macro_rules! rtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "revealer", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! rdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "revealer", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! rdebug {
    ($($tt:tt)*) => {};
}
