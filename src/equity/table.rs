use super::position::Position;
use super::texture::Texture;
use crate::Error;
use crate::Probability;
use crate::cards::Hole;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

/// Static hand-strength reference, read once and shared read-only.
///
/// The document shape is
///
/// ```json
/// {
///   "preflop":  { "positions": ["UTG", ...], "hand_strengths": { "AA": 0.85, ... } },
///   "postflop": { "board_textures": { "paired": 0.1, "monotone": 0.15, "connected": 0.12, "rainbow": 0.05 } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    preflop: Preflop,
    postflop: Postflop,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
struct Preflop {
    positions: Vec<String>,
    hand_strengths: BTreeMap<String, Probability>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
struct Postflop {
    board_textures: Textures,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
struct Textures {
    paired: Probability,
    monotone: Probability,
    connected: Probability,
    rainbow: Probability,
}

impl Table {
    /// The built-in table, built on first use.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Table> = OnceLock::new();
        BUILTIN.get_or_init(Self::default)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let table = serde_json::from_str::<Self>(json)?;
        table.validate()?;
        Ok(table)
    }
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
    /// Loads the table at `path`, or falls back to the built-in one.
    pub fn resolve(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::debug!("no strength table given, using built-in values");
            return Self::builtin().clone();
        };
        match Self::load(path) {
            Ok(table) => {
                log::info!("loaded strength table from {}", path.display());
                table
            }
            Err(e) => {
                let missing = Error::ConfigurationMissing(format!("{}: {}", path.display(), e));
                log::warn!("{}, using built-in values", missing);
                Self::builtin().clone()
            }
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        let t = &self.postflop.board_textures;
        anyhow::ensure!(!self.preflop.positions.is_empty(), "positions list is empty");
        for (key, p) in self.preflop.hand_strengths.iter() {
            anyhow::ensure!((2..=4).contains(&key.len()), "bad hand descriptor {}", key);
            anyhow::ensure!((0.0..=1.0).contains(p), "strength of {} is {}", key, p);
        }
        for p in [t.paired, t.monotone, t.connected, t.rainbow] {
            anyhow::ensure!((0.0..1.0).contains(&p), "texture factor {} outside [0, 1)", p);
        }
        Ok(())
    }

    /// Base win rate for a starting hand, PRIOR_DEFAULT when unlisted.
    pub fn prior(&self, hole: &Hole) -> Probability {
        self.preflop
            .hand_strengths
            .get(&hole.descriptor())
            .copied()
            .unwrap_or(crate::PRIOR_DEFAULT)
    }
    /// Seat index in the configured order, 0 when unlisted.
    pub fn seat(&self, position: &Position) -> usize {
        self.preflop
            .positions
            .iter()
            .position(|label| label == position.label())
            .unwrap_or(0)
    }
    /// Linear discount by seat: 1 - POSITION_STEP × index.
    pub fn positional(&self, position: &Position) -> Probability {
        1.0 - crate::POSITION_STEP * self.seat(position) as Probability
    }
    pub fn texture(&self, texture: &Texture) -> Probability {
        let t = &self.postflop.board_textures;
        match texture {
            Texture::Paired => t.paired,
            Texture::Monotone => t.monotone,
            Texture::Connected => t.connected,
            Texture::Rainbow => t.rainbow,
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        let positions = ["UTG", "MP", "CO", "BTN", "SB", "BB"];
        #[rustfmt::skip]
        let strengths = [
            ("AA", 0.85), ("KK", 0.82), ("QQ", 0.80), ("JJ", 0.78),
            ("TT", 0.75), ("99", 0.72), ("88", 0.70), ("77", 0.68),
            ("66", 0.65), ("55", 0.63), ("44", 0.60), ("33", 0.58), ("22", 0.55),
            ("AKs", 0.67), ("AQs", 0.66), ("AJs", 0.65), ("ATs", 0.64),
            ("KQs", 0.63), ("KJs", 0.62), ("KTs", 0.61),
            ("QJs", 0.60), ("QTs", 0.59),
            ("JTs", 0.58),
            ("AKo", 0.65), ("AQo", 0.64), ("AJo", 0.63), ("ATo", 0.62),
            ("KQo", 0.61), ("KJo", 0.60), ("KTo", 0.59),
            ("QJo", 0.58), ("QTo", 0.57),
            ("JTo", 0.56),
        ];
        Self {
            preflop: Preflop {
                positions: positions.iter().map(|s| s.to_string()).collect(),
                hand_strengths: strengths
                    .iter()
                    .map(|(k, p)| (k.to_string(), *p))
                    .collect(),
            },
            postflop: Postflop {
                board_textures: Textures {
                    paired: 0.10,
                    monotone: 0.15,
                    connected: 0.12,
                    rainbow: 0.05,
                },
            },
        }
    }
}
