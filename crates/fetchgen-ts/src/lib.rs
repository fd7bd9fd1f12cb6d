pub mod base_url;
pub mod emitters;
pub mod generator;
pub mod synth;
pub mod type_render;

pub use base_url::BaseUrl;
pub use generator::{ClientOptions, TsClientGenerator};
