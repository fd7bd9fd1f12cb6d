pub mod diagnostics;
pub mod error;
pub mod ir;
pub mod parse;
pub mod path_template;
pub mod typemap;
pub mod walk;

/// A generated source module together with the diagnostics collected while
/// building it.
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    pub content: String,
    pub diagnostics: diagnostics::Diagnostics,
}
