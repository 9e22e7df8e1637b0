use thiserror::Error;

/// Distinct exit status for a malformed invocation.
pub const EXIT_INVALID_PARAMETERS: i32 = 2;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown topology `{0}`, expected NSF, Mesh, Mesh6x6, Mesh8x8 or Mesh10x10")]
    UnknownTopology(String),
    #[error("unsupported wavelength count {0}, expected 21, 41, 81, 161, 321, 641 or 1281")]
    UnsupportedWavelengths(usize),
    #[error("{0} count must be at least 1")]
    ZeroCount(&'static str),
    #[error("failed to write report file: {0}")]
    Report(#[from] std::io::Error),
    #[error("worker thread creation failed: {0}")]
    Spawn(std::io::Error),
    #[error("worker thread panicked before joining")]
    WorkerPanicked,
}
