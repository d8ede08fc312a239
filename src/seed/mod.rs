use crate::models::{Field, Section};
use crate::util::next_section_token;
use serde::Deserialize;

/// Seed document shapes.
///
/// The host page may inject a starting document via `window.ENV.SEED` (a JSON
/// string). Only the shape is validated; a section without `fields` is an
/// empty section. Tokens are assigned here — seeds never carry identity.
#[derive(Deserialize, Clone, Debug)]
struct SeedField {
    #[serde(default)]
    key: String,
    #[serde(default)]
    value: String,
}

#[derive(Deserialize, Clone, Debug)]
struct SeedSection {
    #[serde(default)]
    key: String,
    #[serde(default)]
    value: String,
    #[serde(default)]
    fields: Vec<SeedField>,
}

pub(crate) fn parse_seed(json: &str) -> Option<Vec<Section>> {
    let seed: Vec<SeedSection> = serde_json::from_str(json).ok()?;
    Some(
        seed.into_iter()
            .map(|s| {
                let fields = s
                    .fields
                    .into_iter()
                    .map(|f| Field::new(&f.key, &f.value))
                    .collect();
                Section::new(next_section_token(), &s.key, &s.value, fields)
            })
            .collect(),
    )
}

fn read_env_seed() -> Option<String> {
    let window = web_sys::window()?;
    let env = window.get("ENV")?;
    if env.is_undefined() || !env.is_object() {
        return None;
    }
    js_sys::Reflect::get(&env, &"SEED".into())
        .ok()
        .and_then(|v| v.as_string())
}

/// Built-in sample document for first load.
pub(crate) fn sample_sections() -> Vec<Section> {
    vec![
        Section::new(
            next_section_token(),
            "request",
            "HTTP defaults",
            vec![
                Field::new("method", "GET"),
                Field::new("timeout", "30s"),
                Field::new("retries", "3"),
            ],
        ),
        Section::new(
            next_section_token(),
            "headers",
            "sent on every call",
            vec![
                Field::new("accept", "application/json"),
                Field::new("user-agent", "nestform/0.1"),
            ],
        ),
        Section::new(next_section_token(), "overrides", "per-environment", vec![]),
    ]
}

/// Initial document: `window.ENV.SEED` if present and well-formed, otherwise
/// the built-in sample.
pub(crate) fn load_initial_sections() -> Vec<Section> {
    if let Some(json) = read_env_seed() {
        match parse_seed(&json) {
            Some(sections) => return sections,
            None => {
                leptos::logging::warn!("ENV.SEED is not a valid seed document; using the sample");
            }
        }
    }
    sample_sections()
}
