//! Material enum shared across all logistics crates.
//!
//! Carriers move exactly one material kind at a time; building inventories
//! key their slots by `Material`.  New kinds can be added without a breaking
//! change (`#[non_exhaustive]`).

/// A transportable good.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Material {
    Log,
    Plank,
    Stone,
    Grain,
    Flour,
    Bread,
    Fish,
    IronOre,
    IronBar,
    Coal,
    GoldOre,
    GoldBar,
}

impl Material {
    /// Human-readable label, useful for CSV column values and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Material::Log => "log",
            Material::Plank => "plank",
            Material::Stone => "stone",
            Material::Grain => "grain",
            Material::Flour => "flour",
            Material::Bread => "bread",
            Material::Fish => "fish",
            Material::IronOre => "iron_ore",
            Material::IronBar => "iron_bar",
            Material::Coal => "coal",
            Material::GoldOre => "gold_ore",
            Material::GoldBar => "gold_bar",
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
