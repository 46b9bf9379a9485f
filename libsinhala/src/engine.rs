//! Factory functions for ready-to-use Sinhala IME engines.

use libsinhala_core::{Config, ImeEngine, Layout, SinglishKeymap};
use std::path::Path;

/// Engine type produced by the factories below.
pub type SinhalaEngine = ImeEngine<SinglishKeymap>;

/// Create an engine from `config`.
pub fn create_ime_engine(config: Config) -> SinhalaEngine {
    ImeEngine::new(SinglishKeymap::new(), config)
}

/// Create an engine that starts on the Singlish (phonetic) layout.
pub fn create_ime_engine_singlish() -> SinhalaEngine {
    create_ime_engine(Config {
        layout: Layout::Singlish,
        ..Config::default()
    })
}

/// Create an engine that starts on the Wijesekara layout.
pub fn create_ime_engine_wijesekara() -> SinhalaEngine {
    create_ime_engine(Config {
        layout: Layout::Wijesekara,
        ..Config::default()
    })
}

/// Create an engine configured from a TOML file.
pub fn create_ime_engine_from_toml<P: AsRef<Path>>(
    path: P,
) -> Result<SinhalaEngine, Box<dyn std::error::Error>> {
    let config = Config::load_toml(path)?;
    Ok(create_ime_engine(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_pick_layout() {
        assert_eq!(create_ime_engine_singlish().session().layout(), Layout::Singlish);
        assert_eq!(create_ime_engine_wijesekara().session().layout(), Layout::Wijesekara);
    }

    #[test]
    fn test_missing_toml_is_an_error() {
        let result = create_ime_engine_from_toml("/nonexistent/libsinhala.toml");
        assert!(result.is_err());
    }
}
