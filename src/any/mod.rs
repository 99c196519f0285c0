pub use self::{builder::PreviewBuilder, preview::Preview, renderer::ModeRenderer};

mod builder;
mod preview;
mod renderer;
