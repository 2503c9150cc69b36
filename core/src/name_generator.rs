//! Deterministic player handle and e-mail generation from curated word lists.
//!
//! Same RNG stream in, same names out.

use crate::rng::StageRng;

/// Synthetic identity generator for fake accounts.
pub struct NameGenerator;

impl NameGenerator {
    /// Player handle in the form `<Adjective><Noun><0..=9999>`, e.g. `SilentFalcon482`.
    pub fn username(rng: &mut StageRng) -> String {
        let adjective = rng.pick(Self::adjectives());
        let noun = rng.pick(Self::nouns());
        let number = rng.between(0, 9_999);
        format!("{adjective}{noun}{number}")
    }

    /// Lowercase address in the form `<first>.<last><0..=99>@<domain>`.
    pub fn email(rng: &mut StageRng) -> String {
        let first = rng.pick(Self::first_names());
        let last = rng.pick(Self::last_names());
        let number = rng.between(0, 99);
        let domain = rng.pick(Self::domains());
        format!("{first}.{last}{number}@{domain}").to_lowercase()
    }

    fn adjectives() -> &'static [&'static str] {
        &[
            "Silent", "Crimson", "Swift", "Iron", "Golden", "Shadow", "Frozen", "Wild",
            "Brave", "Lucky", "Ancient", "Mystic", "Savage", "Hidden", "Burning", "Storm",
            "Lone", "Rapid", "Noble", "Grim", "Azure", "Feral", "Hollow", "Radiant",
            "Rogue", "Sly", "Thunder", "Velvet", "Wicked", "Zealous", "Arcane", "Bold",
            "Cosmic", "Dire", "Ember", "Fierce", "Gilded", "Jade", "Lunar", "Obsidian",
        ]
    }

    fn nouns() -> &'static [&'static str] {
        &[
            "Falcon", "Wolf", "Blade", "Knight", "Ranger", "Mage", "Dragon", "Tiger",
            "Viper", "Raven", "Golem", "Paladin", "Archer", "Monk", "Warden", "Phoenix",
            "Hunter", "Specter", "Titan", "Lynx", "Cobra", "Druid", "Reaver", "Sentinel",
            "Bard", "Ogre", "Wraith", "Kraken", "Hawk", "Bear", "Shaman", "Samurai",
            "Ninja", "Rook", "Serpent", "Griffin", "Lancer", "Oracle", "Templar", "Yeti",
        ]
    }

    fn first_names() -> &'static [&'static str] {
        &[
            "Aiman", "Hana", "Farid", "Nurul", "Jason", "Mei", "Arjun", "Siti", "Daniel",
            "Priya", "Hafiz", "Aisyah", "Kelvin", "Liyana", "Ravi", "Sofia", "Imran",
            "Chloe", "Zul", "Emma", "Wei", "Nadia", "Ethan", "Yasmin", "Omar", "Grace",
            "Haris", "Amira", "Lucas", "Irene",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Tan", "Lim", "Rahman", "Abdullah", "Wong", "Singh", "Ismail", "Lee", "Kumar",
            "Chong", "Hassan", "Ng", "Ahmad", "Goh", "Nair", "Yusof", "Chan", "Osman",
            "Teo", "Pillai", "Koh", "Aziz", "Ong", "Menon", "Razak",
        ]
    }

    fn domains() -> &'static [&'static str] {
        &[
            "example.com", "example.net", "example.org", "mail.test", "players.test",
        ]
    }
}
