//! Input/output operations, configuration and error handling

/// Command-line argument parsing and run entry point
pub mod cli;
/// Crop size, channel layout, logging defaults and run paths
pub mod configuration;
/// Error type shared by every pipeline stage
pub mod error;
/// Image decoding and patch export
pub mod image;
/// Console logger setup
pub mod logging;
/// Progress bars for the loading and extraction phases
pub mod progress;
