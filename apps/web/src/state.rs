use crate::config::Config;
use crate::reading::generator::ReadingGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no per-request data: the generator wraps the text-generation backend
/// (`Arc<dyn TextGenerator>`) and the static tables live in their modules.
#[derive(Clone)]
pub struct AppState {
    pub generator: ReadingGenerator,
    pub config: Config,
}
