//! Error types for the `splitx` crate

/// Errors applicable to building partitions and work splits
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A partition or work split was requested over zero buckets.
    ///
    /// Fair-partition boundaries divide by the bucket count, so at
    /// least one bucket or worker is required. The check happens in
    /// the constructors, before any arithmetic runs.
    #[error("cannot divide a workload across zero buckets")]
    ZeroBuckets,
}
