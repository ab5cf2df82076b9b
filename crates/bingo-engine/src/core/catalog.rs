use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a category ("corporate", "tech", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        CategoryId(id.to_string())
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A buzzword pack: canonical words plus an alias table mapping a
/// canonical word to the alternate surface forms that should also
/// count as hearing it. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub words: Vec<String>,
    #[serde(default)]
    pub aliases: HashMap<String, Vec<String>>,
}

/// Read-only registry of categories, loaded once at startup.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// The three shipped buzzword packs.
    pub fn builtin() -> Self {
        Self {
            categories: vec![corporate(), tech(), startup()],
        }
    }

    /// Parse a JSON array of categories (custom packs).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        Ok(Self { categories })
    }

    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn alias_table(entries: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(word, alts)| (word.to_string(), words(alts)))
        .collect()
}

fn corporate() -> Category {
    Category {
        id: CategoryId::from("corporate"),
        name: "Corporate Speak".to_string(),
        description: "Classic boardroom filler, from synergy to circling back".to_string(),
        icon: "🏢".to_string(),
        words: words(&[
            "synergy",
            "circle back",
            "touch base",
            "low-hanging fruit",
            "move the needle",
            "deep dive",
            "bandwidth",
            "take this offline",
            "paradigm shift",
            "think outside the box",
            "win-win",
            "alignment",
            "leverage",
            "stakeholder",
            "action item",
            "deliverable",
            "drill down",
            "boil the ocean",
            "value add",
            "core competency",
            "best practice",
            "quick win",
            "table this",
            "double-click",
            "per my last email",
            "herding cats",
        ]),
        aliases: alias_table(&[
            ("synergy", &["synergize", "synergistic"]),
            ("circle back", &["circling back", "circled back"]),
            ("touch base", &["touching base", "touched base"]),
            ("move the needle", &["moving the needle", "moved the needle"]),
            ("deep dive", &["deep diving", "dive deeper"]),
            ("alignment", &["align", "aligned"]),
            ("leverage", &["leveraging", "leveraged"]),
            ("drill down", &["drilling down", "drilled down"]),
            ("take this offline", &["take it offline"]),
            ("table this", &["table it", "tabled"]),
            ("double-click", &["double click"]),
        ]),
    }
}

fn tech() -> Category {
    Category {
        id: CategoryId::from("tech"),
        name: "Tech Standup".to_string(),
        description: "Daily standup and sprint-review staples".to_string(),
        icon: "💻".to_string(),
        words: words(&[
            "AI",
            "machine learning",
            "blockchain",
            "cloud native",
            "microservices",
            "API",
            "scale",
            "tech debt",
            "refactor",
            "agile",
            "sprint",
            "backlog",
            "standup",
            "blocker",
            "deploy",
            "rollback",
            "edge case",
            "race condition",
            "latency",
            "throughput",
            "observability",
            "postmortem",
            "root cause",
            "containerize",
            "feature flag",
        ]),
        aliases: alias_table(&[
            ("AI", &["artificial intelligence"]),
            ("machine learning", &["ML"]),
            ("scale", &["scalable", "scaling", "scalability"]),
            ("tech debt", &["technical debt"]),
            ("refactor", &["refactoring", "refactored"]),
            ("deploy", &["deployment", "deploying", "deployed"]),
            ("rollback", &["roll back", "rolled back"]),
            ("containerize", &["containerized", "docker"]),
            ("observability", &["o11y"]),
        ]),
    }
}

fn startup() -> Category {
    Category {
        id: CategoryId::from("startup"),
        name: "Startup Pitch".to_string(),
        description: "Pitch-deck vocabulary and investor-meeting favorites".to_string(),
        icon: "🚀".to_string(),
        words: words(&[
            "disrupt",
            "unicorn",
            "runway",
            "burn rate",
            "product-market fit",
            "pivot",
            "MVP",
            "growth hacking",
            "venture capital",
            "seed round",
            "valuation",
            "traction",
            "churn",
            "north star",
            "flywheel",
            "moat",
            "bootstrapped",
            "angel investor",
            "exit strategy",
            "hockey stick",
            "TAM",
            "user acquisition",
            "retention",
            "go-to-market",
            "freemium",
        ]),
        aliases: alias_table(&[
            ("disrupt", &["disruption", "disruptive"]),
            ("pivot", &["pivoting", "pivoted"]),
            ("MVP", &["minimum viable product"]),
            ("growth hacking", &["growth hack", "growth hacker"]),
            ("venture capital", &["VC"]),
            ("product-market fit", &["product market fit"]),
            ("bootstrapped", &["bootstrapping", "bootstrap"]),
            ("go-to-market", &["go to market", "GTM"]),
            ("TAM", &["total addressable market"]),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::CARD_WORDS;

    #[test]
    fn builtin_packs_carry_enough_words() {
        let catalog = CategoryCatalog::builtin();
        assert_eq!(catalog.len(), 3);
        for category in catalog.iter() {
            assert!(
                category.words.len() >= CARD_WORDS,
                "{} has only {} words",
                category.id,
                category.words.len()
            );
        }
    }

    #[test]
    fn builtin_words_are_distinct() {
        let catalog = CategoryCatalog::builtin();
        for category in catalog.iter() {
            let mut seen = std::collections::HashSet::new();
            for word in &category.words {
                assert!(seen.insert(word.to_lowercase()), "duplicate: {}", word);
            }
        }
    }

    #[test]
    fn aliases_reference_canonical_words() {
        let catalog = CategoryCatalog::builtin();
        for category in catalog.iter() {
            for canonical in category.aliases.keys() {
                assert!(
                    category.words.contains(canonical),
                    "alias key {} not in {} word list",
                    canonical,
                    category.id
                );
            }
        }
    }

    #[test]
    fn get_unknown_id_is_none() {
        let catalog = CategoryCatalog::builtin();
        assert!(catalog.get(&CategoryId::from("corporate")).is_some());
        assert!(catalog.get(&CategoryId::from("sports")).is_none());
    }

    #[test]
    fn parse_custom_pack() {
        let json = r#"[{
            "id": "custom",
            "name": "Custom",
            "description": "test pack",
            "icon": "x",
            "words": ["alpha", "beta"]
        }]"#;
        let catalog = CategoryCatalog::from_json(json).unwrap();
        let cat = catalog.get(&CategoryId::from("custom")).unwrap();
        assert_eq!(cat.words.len(), 2);
        assert!(cat.aliases.is_empty());
    }
}
