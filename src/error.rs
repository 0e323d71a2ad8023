//! Error types for glowmesh.
//!
//! Only setup can fail in a way the host sees: creating the window, the GPU
//! surface and device, or building a config. Per-frame problems are handled
//! where they happen and never reach these types.

use thiserror::Error;

/// Errors that can occur during GPU initialization.
#[derive(Debug, Error)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    #[error("failed to create GPU surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    #[error("no compatible GPU adapter found: {0}")]
    NoAdapter(#[from] wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    #[error("failed to create GPU device: {0}")]
    DeviceCreation(#[from] wgpu::RequestDeviceError),
    /// The surface reports no usable texture format for the adapter.
    #[error("surface is not supported by the selected adapter")]
    UnsupportedSurface,
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tier breakpoints must be strictly ascending, got {previous} then {next}")]
    UnsortedBreakpoints { previous: f32, next: f32 },
    #[error("tier breakpoint width must be positive, got {0}")]
    NonPositiveBreakpoint(f32),
}

/// Errors that can occur when running the mesh window.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Failed to create or run the event loop.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// Failed to create the window.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// GPU initialization failed.
    #[error("GPU error: {0}")]
    Gpu(#[from] GpuError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::UnsortedBreakpoints {
            previous: 1024.0,
            next: 768.0,
        };
        assert_eq!(
            err.to_string(),
            "tier breakpoints must be strictly ascending, got 1024 then 768"
        );
    }

    #[test]
    fn test_mesh_error_wraps_config_error() {
        let err: MeshError = ConfigError::NonPositiveBreakpoint(0.0).into();
        assert!(matches!(err, MeshError::Config(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
