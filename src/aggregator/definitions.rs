//! Declarative aggregate stat definitions.
//!
//! Each stat is `sum(add columns) - sum(subtract columns)` for one frame.
//! The built-in list breaks game thread time down into its main phases;
//! "Misc" stats subtract their children from their parent so the nested
//! entries add up to the parent.

use serde::{Deserialize, Serialize};

/// One named aggregate over raw trace columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStatDefinition {
    /// Display name, unique within a configuration
    pub name: String,

    /// Display nesting level (0 = top level)
    #[serde(default)]
    pub depth: u8,

    /// Columns summed into the stat
    pub add: Vec<String>,

    /// Columns subtracted from the stat
    #[serde(default)]
    pub subtract: Vec<String>,
}

impl AggregateStatDefinition {
    pub fn new(name: impl Into<String>, depth: u8, add: &[&str], subtract: &[&str]) -> Self {
        Self {
            name: name.into(),
            depth,
            add: add.iter().map(|s| s.to_string()).collect(),
            subtract: subtract.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Built-in game thread breakdown
pub fn default_stat_definitions() -> Vec<AggregateStatDefinition> {
    vec![
        AggregateStatDefinition::new("Frame Time", 0, &["GameThread/FEngineLoopTick"], &[]),
        AggregateStatDefinition::new("Net Tick Time", 1, &["GameThread/NetTickTime"], &[]),
        AggregateStatDefinition::new("Spawning", 2, &["GameThread/ActorSpawning"], &[]),
        AggregateStatDefinition::new(
            "Net Tick Time Misc",
            2,
            &["GameThread/NetTickTime"],
            &["GameThread/ActorSpawning"],
        ),
        AggregateStatDefinition::new("Async Loading", 1, &["GameThread/ProcessAsyncLoading"], &[]),
        AggregateStatDefinition::new("Game Tick Time", 1, &["GameThread/GameEngineTick"], &[]),
        AggregateStatDefinition::new(
            "Hero Characters",
            2,
            &["LokiHeroCharacter/GameThread/ALokiHeroCharacterTick"],
            &[],
        ),
        AggregateStatDefinition::new("VisionGranters", 2, &["VisionGranter/GameThread/Tick"], &[]),
        AggregateStatDefinition::new(
            "Projectiles",
            2,
            &["LokiProjectile/GameThread/MovementComponentTick"],
            &[],
        ),
        AggregateStatDefinition::new("VFX", 2, &["Exclusive/GameThread/Effects"], &[]),
        AggregateStatDefinition::new("Skeletal Mesh", 2, &["Exclusive/GameThread/Animation"], &[]),
        AggregateStatDefinition::new(
            "Character Movement",
            2,
            &["CharacterMovement/GameThread/Tick"],
            &[],
        ),
        AggregateStatDefinition::new(
            "Game Tick Time Misc",
            2,
            &["GameThread/GameEngineTick"],
            &[
                "LokiHeroCharacter/GameThread/ALokiHeroCharacterTick",
                "VisionGranter/GameThread/Tick",
                "LokiProjectile/GameThread/MovementComponentTick",
                "Exclusive/GameThread/Effects",
                "Exclusive/GameThread/Animation",
                "CharacterMovement/GameThread/Tick",
            ],
        ),
        AggregateStatDefinition::new(
            "Garbage Collection",
            1,
            &["GameThread/ConditionalCollectGarbage"],
            &[],
        ),
        AggregateStatDefinition::new("Redraw Viewports", 1, &["GameThread/RedrawViewports"], &[]),
        AggregateStatDefinition::new(
            "Level Streaming",
            2,
            &["GameThread/UpdateLevelStreaming"],
            &[],
        ),
        AggregateStatDefinition::new(
            "Redraw Viewports Misc",
            2,
            &["GameThread/RedrawViewports"],
            &["GameThread/UpdateLevelStreaming"],
        ),
        AggregateStatDefinition::new("Slate Tick", 1, &["Slate/GameThread/Tick"], &[]),
        AggregateStatDefinition::new(
            "Misc",
            1,
            &["GameThread/FEngineLoopTick"],
            &[
                "GameThread/NetTickTime",
                "GameThread/ProcessAsyncLoading",
                "GameThread/GameEngineTick",
                "GameThread/ConditionalCollectGarbage",
                "GameThread/RedrawViewports",
                "Slate/GameThread/Tick",
            ],
        ),
    ]
}
