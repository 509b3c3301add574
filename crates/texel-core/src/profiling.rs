//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled, [`profile_function`] and
//! [`profile_scope`] expand to nothing, so call sites do not need their own
//! `cfg` attributes.

#[cfg(feature = "profiling")]
pub use enabled::*;

#[cfg(not(feature = "profiling"))]
pub use disabled::*;

/// Profiling backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingBackend {
    /// Send profiling data to puffin_viewer via HTTP.
    PuffinHttp,
}

/// Address the puffin HTTP server binds to.
pub const DEFAULT_PUFFIN_ADDR: &str = "127.0.0.1:8585";

#[cfg(feature = "profiling")]
mod enabled {
    use std::sync::OnceLock;

    pub use puffin::{GlobalProfiler, profile_function, profile_scope};

    use super::{DEFAULT_PUFFIN_ADDR, ProfilingBackend};

    static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

    /// Initialize profiling with the specified backend.
    ///
    /// # Example
    /// ```no_run
    /// use texel_core::profiling::{init_profiling, ProfilingBackend};
    ///
    /// init_profiling(ProfilingBackend::PuffinHttp);
    /// ```
    pub fn init_profiling(backend: ProfilingBackend) {
        match backend {
            ProfilingBackend::PuffinHttp => {
                puffin::set_scopes_on(true);

                match puffin_http::Server::new(DEFAULT_PUFFIN_ADDR) {
                    Ok(server) => {
                        tracing::info!("Puffin profiler server started on http://{DEFAULT_PUFFIN_ADDR}");
                        let _ = PROFILING_SERVER.set(server);
                    }
                    Err(e) => {
                        tracing::error!("Failed to start puffin server: {}", e);
                    }
                }
            }
        }
    }
}

#[cfg(not(feature = "profiling"))]
mod disabled {
    use super::ProfilingBackend;

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __texel_profile_noop {
        ($($arg:tt)*) => {};
    }

    pub use crate::__texel_profile_noop as profile_function;
    pub use crate::__texel_profile_noop as profile_scope;

    /// Profiling is compiled out; this only logs that the request was ignored.
    pub fn init_profiling(backend: ProfilingBackend) {
        tracing::debug!(?backend, "profiling requested but the `profiling` feature is disabled");
    }
}
