use parla_translate::GtxTranslator;

pub struct AppState {
    pub translator: GtxTranslator,
}

impl AppState {
    pub fn new(translator: GtxTranslator) -> Self {
        Self { translator }
    }
}
