use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_POKEDEX: &str = include_str!("../../data/pokedex.json");

#[derive(Debug, Error)]
pub enum PokedexError {
    #[error("failed to parse pokedex: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("pokedex entry {0} has no flavor text")]
    NoFlavorText(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "PokedexRecord")]
pub struct PokedexEntry {
    pub dex_number: u32,
    /// Class name the model emits for this entry, when it differs from `name`.
    pub label: Option<String>,
    pub name: String,
    pub genus: String,
    pub flavor_texts: Vec<String>,
}

/// An entry as stored on disk. Japanese dumps carry kanji texts under
/// `flavor_texts_ja` and kana-only ones under `flavor_texts_jahrkt`; some
/// species have only the latter.
#[derive(Deserialize)]
struct PokedexRecord {
    dex_number: u32,
    #[serde(default)]
    label: Option<String>,
    name: String,
    genus: String,
    #[serde(default, alias = "flavor_texts_ja")]
    flavor_texts: Vec<String>,
    #[serde(default)]
    flavor_texts_jahrkt: Vec<String>,
}

impl From<PokedexRecord> for PokedexEntry {
    fn from(record: PokedexRecord) -> Self {
        let flavor_texts = if record.flavor_texts.is_empty() {
            record.flavor_texts_jahrkt
        } else {
            record.flavor_texts
        };

        Self {
            dex_number: record.dex_number,
            label: record.label,
            name: record.name,
            genus: record.genus,
            flavor_texts,
        }
    }
}

impl PokedexEntry {
    fn matches(&self, label: &str) -> bool {
        let label = label.trim();
        self.label
            .iter()
            .chain(std::iter::once(&self.name))
            .any(|candidate| candidate.eq_ignore_ascii_case(label))
    }

    pub fn announcement(&self, flavor_text: &str) -> String {
        if flavor_text.is_empty() {
            format!("{}. {}.", self.name, self.genus)
        } else {
            format!("{}. {}. {}", self.name, self.genus, flavor_text)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    entries: Vec<PokedexEntry>,
}

impl Pokedex {
    pub fn from_json(json: &str) -> Result<Self, PokedexError> {
        let entries: Vec<PokedexEntry> = serde_json::from_str(json)?;

        if let Some(entry) = entries.iter().find(|e| e.flavor_texts.is_empty()) {
            return Err(PokedexError::NoFlavorText(entry.name.clone()));
        }

        Ok(Self { entries })
    }

    pub fn embedded() -> Result<Self, PokedexError> {
        Self::from_json(EMBEDDED_POKEDEX)
    }

    pub fn entries(&self) -> &[PokedexEntry] {
        &self.entries
    }

    /// A miss is not an error: the caller simply has nothing extra to show.
    pub fn lookup(&self, label: &str) -> Option<&PokedexEntry> {
        self.entries.iter().find(|entry| entry.matches(label))
    }
}
