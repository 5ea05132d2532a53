pub(crate) mod chart;
pub(crate) mod color;
pub(crate) mod framebuffer;
pub(crate) mod png_encoder;
pub(crate) mod primitives;

pub(crate) use chart::LineChart;
pub(crate) use color::Rgba;
pub(crate) use framebuffer::Framebuffer;
pub(crate) use png_encoder::write_png;
