// src/lib.rs

//! Renders a fixed Mandelbrot view to a PNG.
//!
//! The pipeline is: [`view`] maps pixels to the complex plane, [`field`]
//! computes escape iterations, [`color`] turns them into RGBA, a
//! [`backend`] fills a [`frame::FrameBuffer`], and [`encoder`] writes it out.

pub mod backend;
pub mod color;
pub mod config;
pub mod encoder;
pub mod field;
pub mod frame;
pub mod timing;
pub mod view;

pub use backend::{render_mandelbrot, BackendKind, RenderBackend};
pub use config::Config;
pub use frame::FrameBuffer;
pub use view::{PixelCoordinate, ViewParameters};
