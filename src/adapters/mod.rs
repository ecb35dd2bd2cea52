// Adapters - External system implementations

pub mod fs_memory;
pub mod fs_std;
pub mod probe_ffprobe;
#[cfg(feature = "libav")]
pub mod probe_libav;
pub mod probe_static;
pub mod toml_config;

// Re-export adapters
pub use fs_memory::MemoryFsAdapter;
pub use fs_std::StdFsAdapter;
pub use probe_ffprobe::FfprobeAdapter;
#[cfg(feature = "libav")]
pub use probe_libav::ProbeLibavAdapter;
pub use probe_static::StaticProbeAdapter;
pub use toml_config::{Settings, TomlConfigAdapter};
