//!
//! The `skia_opt_metrics` protobuf messages written by the benchmarking tool.
//!

/// The optimization applied to a recording before it is replayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Optimization {
    Unknown = 0,
    NoOpt = 1,
    SkiaRecordOpts = 2,
    SkiaRecordOpts2 = 3,
    SkiPass = 4,
}

/// The outcome of a single optimization run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OptimizationStatus {
    UnknownStatus = 0,
    Success = 1,
    Failed = 2,
}

/// A memory measurement of one optimization on one SKP.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OptimizationBenchmark {
    #[prost(enumeration = "Optimization", tag = "1")]
    pub optimization_type: i32,
    #[prost(uint64, tag = "2")]
    pub malloc_allocated_bytes: u64,
    #[prost(enumeration = "OptimizationStatus", tag = "3")]
    pub optimization_status: i32,
}

/// All measurements of one SKP.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SkpBenchmark {
    #[prost(string, tag = "1")]
    pub skp_name: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "2")]
    pub optimization_benchmark_runs: ::prost::alloc::vec::Vec<OptimizationBenchmark>,
}

/// A draw command the candidate pass rejected.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UnsupportedDrawCommandStats {
    #[prost(string, tag = "1")]
    pub draw_command: ::prost::alloc::string::String,
    #[prost(uint64, tag = "2")]
    pub count: u64,
}

/// The candidate pass statistics across the whole run.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SkiPassSummary {
    #[prost(message, repeated, tag = "1")]
    pub unsupported_draw_commands: ::prost::alloc::vec::Vec<UnsupportedDrawCommandStats>,
}

/// The top-level benchmark record.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SkiaOptBenchmark {
    #[prost(message, repeated, tag = "1")]
    pub skp_benchmark_runs: ::prost::alloc::vec::Vec<SkpBenchmark>,
    #[prost(message, optional, tag = "2")]
    pub ski_pass_summary: ::core::option::Option<SkiPassSummary>,
}
