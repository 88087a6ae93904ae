//! Built-in placeholder tables, relative to the asset root.

use crate::domain::{AssetGroup, AssetMapping};

pub const DEFAULT_ROOT: &str = "game/assets";

const RANKS: [&str; 7] = [
    "bronze", "silver", "gold", "platinum", "diamond", "master", "legend",
];

const HERO_JOBS: [&str; 6] = ["warrior", "archer", "mage", "tank", "assassin", "healer"];
const RARITIES: [&str; 5] = ["common", "uncommon", "rare", "epic", "legendary"];

const SKILL_EFFECTS: [(&str, &[&str]); 4] = [
    ("skill_slash.png", &["slash", "charge", "whirlwind"]),
    (
        "skill_fireball.png",
        &[
            "fireball",
            "precise_shot",
            "multishot",
            "poison_arrow",
            "arcane_blast",
            "frostbolt",
        ],
    ),
    (
        "skill_shield_bash.png",
        &[
            "shield_bash",
            "taunt",
            "iron_wall",
            "backstab",
            "shadow_step",
            "critical_strike",
        ],
    ),
    ("skill_heal.png", &["heal", "bless", "resurrection"]),
];

const AUDIO: [(&str, &[&str]); 2] = [
    (
        "audio/music/bgm_battle.mp3",
        &["audio/music/lobby_theme.mp3", "audio/music/victory_theme.mp3"],
    ),
    (
        "audio/sfx/attack.wav",
        &[
            "audio/sfx/victory.wav",
            "audio/sfx/defeat.wav",
            "audio/sfx/coin.wav",
            "audio/sfx/button.wav",
            "audio/sfx/levelup.wav",
        ],
    ),
];

/// Backgrounds and rank tier badges.
pub fn distribution_mapping() -> AssetMapping {
    AssetMapping::new(vec![
        // shop reuses the lobby art when there is any
        AssetGroup::new(
            "images/backgrounds/lobby_bg.png",
            ["images/backgrounds/shop_bg.png"],
        )
        .optional(),
        AssetGroup::new(
            "images/bg_arena.png",
            RANKS.map(|r| format!("images/backgrounds/arena_{r}.png")),
        ),
        AssetGroup::new(
            "images/skills/skill_shield_bash.png",
            RANKS.map(|r| format!("images/ui/tier_{r}.png")),
        ),
    ])
}

/// Hero rarities, skill effects and audio.
pub fn generation_mapping() -> AssetMapping {
    let mut groups = Vec::new();

    for job in HERO_JOBS {
        groups.push(AssetGroup::new(
            format!("images/heroes/hero_{job}.png"),
            RARITIES.map(|rarity| format!("images/heroes/{job}_{rarity}.png")),
        ));
    }

    for (base, effects) in SKILL_EFFECTS {
        groups.push(AssetGroup::new(
            format!("images/skills/{base}"),
            effects
                .iter()
                .map(|e| format!("images/skills/{e}_effect.png")),
        ));
    }

    for (base, targets) in AUDIO {
        groups.push(AssetGroup::new(base, targets.iter().copied()));
    }

    AssetMapping::new(groups)
}

pub fn builtin_mapping() -> AssetMapping {
    let mut mapping = distribution_mapping();
    mapping.extend(generation_mapping());
    mapping
}
