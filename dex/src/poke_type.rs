//! Pokemon type system and effectiveness chart

/// Pokemon types (18 types as of Gen 6+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 Pokemon types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Parse an API type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Canonical API name (lowercase)
    pub fn name(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }

    /// Badge color used when rendering this type
    pub fn color(&self) -> &'static str {
        match self {
            Type::Normal => "#A8A878",
            Type::Fire => "#F08030",
            Type::Water => "#6890F0",
            Type::Electric => "#F8D030",
            Type::Grass => "#78C850",
            Type::Ice => "#98D8D8",
            Type::Fighting => "#C03028",
            Type::Poison => "#A040A0",
            Type::Ground => "#E0C068",
            Type::Flying => "#A890F0",
            Type::Psychic => "#F85888",
            Type::Bug => "#A8B820",
            Type::Rock => "#B8A038",
            Type::Ghost => "#705898",
            Type::Dragon => "#7038F8",
            Type::Dark => "#705848",
            Type::Steel => "#B8B8D0",
            Type::Fairy => "#EE99AC",
        }
    }

    /// Effectiveness of this type attacking a single defending type
    pub fn effectiveness(&self, defender: Type) -> f32 {
        TYPE_CHART[*self as usize][defender as usize]
    }

    /// Effectiveness of this type attacking a dual-typed defender
    /// (multipliers multiply across the defender's types)
    pub fn effectiveness_against(&self, defenders: &[Type]) -> f32 {
        defenders.iter().map(|t| self.effectiveness(*t)).product()
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 18x18 type effectiveness chart
/// Row = attacking type, Column = defending type
/// Values: 0.0 = immune, 0.5 = not very effective, 1.0 = neutral, 2.0 = super effective
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
pub static TYPE_CHART: [[f32; 18]; 18] = [
    // Normal attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0],
    // Fire attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0],
    // Water attacking
    [1.0, 2.0, 0.5, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Electric attacking
    [1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0],
    // Grass attacking
    [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 0.5, 1.0],
    // Ice attacking
    [1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0],
    // Fighting attacking
    [2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 0.0, 1.0, 2.0, 2.0, 0.5],
    // Poison attacking
    [1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 0.0, 2.0],
    // Ground attacking
    [1.0, 2.0, 1.0, 2.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0],
    // Flying attacking
    [1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Psychic attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.0, 0.5, 1.0],
    // Bug attacking
    [1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 0.5, 1.0, 0.5, 2.0, 1.0, 1.0, 0.5, 1.0, 2.0, 0.5, 0.5],
    // Rock attacking
    [1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 0.5, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0],
    // Ghost attacking
    [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0],
    // Dragon attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.5, 0.0],
    // Dark attacking
    [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 0.5],
    // Steel attacking
    [1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0],
    // Fairy attacking
    [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 0.5, 1.0],
];
