use anyhow::{Context, Result};
use log::{info, warn};
use serde_path_to_error as spte;
use std::io::ErrorKind;

use crate::models::ProcessorConfig;

/// Leser inn prosessorkonfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfig. Andre I/O-feil propageres.
pub fn load_config(path: &str) -> Result<ProcessorConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("fant ikke konfig på {}, returnerer default", path);
            return Ok(ProcessorConfig::default());
        }
        Err(e) => return Err(e).with_context(|| format!("kunne ikke lese {path}")),
    };

    let cfg = parse_config(&contents).with_context(|| format!("ugyldig konfig i {path}"))?;
    info!(
        "konfig lastet fra {} (interval_ms={}, smoothing_factor={})",
        path, cfg.interval_ms, cfg.smoothing_factor
    );
    Ok(cfg)
}

/// Parser og validerer konfig. Feil peker på JSON-stien til feltet.
/// Alt etter første JSON-objekt (unntatt whitespace) er en feil.
pub fn parse_config(json: &str) -> Result<ProcessorConfig> {
    let mut de = serde_json::Deserializer::from_str(json);
    let cfg: ProcessorConfig = spte::deserialize(&mut de)
        .map_err(|e| anyhow::anyhow!("config parse at {}: {}", e.path(), e.inner()))?;
    de.end().context("trailing data after config object")?;
    cfg.validate()?;
    Ok(cfg)
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_config(cfg: &ProcessorConfig, path: &str) -> Result<()> {
    cfg.validate()?;
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, json).with_context(|| format!("kunne ikke skrive {path}"))?;
    info!("konfig lagret til {}", path);
    Ok(())
}
