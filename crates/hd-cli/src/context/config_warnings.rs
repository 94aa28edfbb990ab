use hd_config::{ENV_PREFIX, HappyConfig};

/// Sections that accept environment overrides.
const SECTIONS: [&str; 3] = ["API", "GENERAL", "DATASET"];

/// Variables under the prefix that are not config keys.
const NON_CONFIG_KEYS: [&str; 1] = ["HAPPYDATA_LOG"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &HappyConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &HappyConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = Vec::new();

    for (key, _) in env {
        let Some(rest) = key.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        if NON_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }

        match rest.split_once("__") {
            Some((section, _)) if SECTIONS.contains(&section) => {}
            Some((section, _)) => warnings.push(format!(
                "{key} is ignored: unknown section '{}'. Known sections: api, general, dataset.",
                section.to_ascii_lowercase()
            )),
            None => warnings.push(format!(
                "{key} is ignored. Use double underscores between section and key (example: {ENV_PREFIX}API__BASE_URL)."
            )),
        }
    }

    if config.dataset.override_path().is_none() && !config.dataset.happiness_path.is_empty() {
        warnings.push(
            "dataset.happiness_path is blank; using the bundled happiness dataset.".to_string(),
        );
    }

    warnings
}
