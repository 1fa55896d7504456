use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// General configuration (`data.json`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub base_url: String,
    pub konfirmasi_default: String,
    pub rekening: RekeningConfig,
}

/// Bank accounts quoted in every narrative: two account numbers and the
/// matching holder names. Field names follow the document, not camelCase.
#[derive(Debug, Clone, Deserialize)]
pub struct RekeningConfig {
    pub bsi: String,
    #[serde(rename = "anBSI")]
    pub an_bsi: String,
    pub mandiri: String,
    #[serde(rename = "anMandiri")]
    pub an_mandiri: String,
}

/// One entry of the program catalog (`program.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct Program {
    /// Display name shown in the dropdown
    pub name: String,
    /// URL path fragment appended to the configured base URL
    pub path: String,
    /// Narrative template carrying the `{LINK}` substitution marker
    pub text: String,
}

/// Program catalog: program key -> program record.
///
/// Keeps the key order of the source document so the dropdown lists
/// programs the way the document author arranged them. A `HashMap` would
/// scramble that order, hence the explicit entry list.
#[derive(Debug, Clone, Default)]
pub struct ProgramCatalog {
    entries: Vec<(String, Program)>,
}

impl ProgramCatalog {
    pub fn from_entries(entries: Vec<(String, Program)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&Program> {
        self.entries
            .iter()
            .find(|(entry_key, _)| entry_key == key)
            .map(|(_, program)| program)
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Program)> {
        self.entries
            .iter()
            .map(|(key, program)| (key.as_str(), program))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for ProgramCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ProgramCatalog;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of program key to program record")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, program)) = map.next_entry::<String, Program>()? {
                    entries.push((key, program));
                }
                Ok(ProgramCatalog { entries })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Both documents, loaded and ready to drive the UI.
#[derive(Debug, Clone)]
pub struct AppData {
    pub config: AppConfig,
    pub programs: ProgramCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_document_field_names() {
        let config: AppConfig = serde_json::from_str(
            r#"{
                "baseUrl": "https://x.org",
                "konfirmasiDefault": "0812",
                "rekening": {
                    "bsi": "1",
                    "anBSI": "A",
                    "mandiri": "2",
                    "anMandiri": "B"
                }
            }"#,
        )
        .expect("config should parse");

        assert_eq!(config.base_url, "https://x.org");
        assert_eq!(config.konfirmasi_default, "0812");
        assert_eq!(config.rekening.bsi, "1");
        assert_eq!(config.rekening.an_bsi, "A");
        assert_eq!(config.rekening.mandiri, "2");
        assert_eq!(config.rekening.an_mandiri, "B");
    }

    #[test]
    fn catalog_preserves_document_order() {
        // Keys deliberately out of alphabetical order
        let catalog: ProgramCatalog = serde_json::from_str(
            r#"{
                "zakat": {"name": "Zakat", "path": "/zakat", "text": "Z {LINK}"},
                "anak_yatim": {"name": "Anak Yatim", "path": "/yatim", "text": "A {LINK}"},
                "masjid": {"name": "Masjid", "path": "/masjid", "text": "M {LINK}"}
            }"#,
        )
        .expect("catalog should parse");

        let keys: Vec<&str> = catalog.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zakat", "anak_yatim", "masjid"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("masjid").map(|p| p.name.as_str()), Some("Masjid"));
        assert!(catalog.get("unknown").is_none());
    }
}
