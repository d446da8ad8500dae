//! Static text cards shown on the desktop.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Title,
    Authors,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub kind: CardKind,
    pub lines: Vec<String>,
}

impl Card {
    pub fn new(kind: CardKind) -> Self {
        let lines: &[&str] = match kind {
            CardKind::Title => &[
                "Case Study Compilation",
                "AUTOMATA Theory",
                "Submitted to: Prof. Lester Diampoc",
            ],
            CardKind::Authors => &["Coded by III-ACSAD:", "Baluyut", "Siazon", "Villarosa"],
        };

        Self {
            kind,
            lines: lines.iter().map(|line| line.to_string()).collect(),
        }
    }
}
