/// Emits a `tracing::debug!` event if the `tracing` feature is enabled.
macro_rules! log_debug {
    ( $( $arg:tt )* ) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::debug!( $( $arg )* );
        }
    }};
}

/// Emits a `tracing::warn!` event if the `tracing` feature is enabled.
macro_rules! log_warn {
    ( $( $arg:tt )* ) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::warn!( $( $arg )* );
        }
    }};
}
