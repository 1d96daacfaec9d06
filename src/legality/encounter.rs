// 孵蛋遭遇 - 生成器输出的候选记录
// 交给外部合法性评分流水线消费

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::pokemon::species::{species_name, SpeciesId};
use crate::pokemon::version::GameVersion;

// 主候选、姊妹版本、分裂候选、分裂姊妹版本
pub type EggCandidates = SmallVec<[EggCandidate; 4]>;

// 培育屋蛋的获得地点
pub const DAYCARE_LOCATION_4: u16 = 2000;
pub const DAYCARE_LOCATION_5: u16 = 60002;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncounterEgg {
    pub species: SpeciesId,
    pub form: u8,
    pub level: u8,
    pub generation: u8,
    pub version: GameVersion,
}

impl EncounterEgg {
    pub fn new(species: SpeciesId, form: u8, level: u8, generation: u8, version: GameVersion) -> Self {
        Self { species, form, level, generation, version }
    }

    /// 孵化等级：第3世代及以前为5，之后为1。
    pub fn hatch_level(generation: u8) -> u8 {
        if generation <= 3 { 5 } else { 1 }
    }

    // 同一只蛋记录为姊妹版本出身
    pub fn with_version(self, version: GameVersion) -> Self {
        Self { version, ..self }
    }

    pub fn egg_location(&self) -> u16 {
        match self.generation {
            0..=3 => 0,
            4 => DAYCARE_LOCATION_4,
            _ => DAYCARE_LOCATION_5,
        }
    }
}

impl fmt::Display for EncounterEgg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match species_name(self.species) {
            Some(name) => write!(f, "{}", name)?,
            None => write!(f, "#{}", self.species)?,
        }
        if self.form != 0 {
            write!(f, "-{}", self.form)?;
        }
        write!(f, " Lv.{} Gen{} ({})", self.level, self.generation, self.version)
    }
}

/// 分裂繁殖出的蛋，记录另一方亲代链的基础种族。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncounterEggSplit {
    pub egg: EncounterEgg,
    pub other_species: SpeciesId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EggCandidate {
    Egg(EncounterEgg),
    Split(EncounterEggSplit),
}

impl EggCandidate {
    pub fn split(egg: EncounterEgg, other_species: SpeciesId) -> Self {
        EggCandidate::Split(EncounterEggSplit { egg, other_species })
    }

    pub fn egg(&self) -> &EncounterEgg {
        match self {
            EggCandidate::Egg(egg) => egg,
            EggCandidate::Split(split) => &split.egg,
        }
    }

    pub fn other_species(&self) -> Option<SpeciesId> {
        match self {
            EggCandidate::Egg(_) => None,
            EggCandidate::Split(split) => Some(split.other_species),
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, EggCandidate::Split(_))
    }

    pub fn species(&self) -> SpeciesId {
        self.egg().species
    }

    pub fn version(&self) -> GameVersion {
        self.egg().version
    }
}

impl From<EncounterEgg> for EggCandidate {
    fn from(egg: EncounterEgg) -> Self {
        EggCandidate::Egg(egg)
    }
}

impl fmt::Display for EggCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EggCandidate::Egg(egg) => write!(f, "Egg {}", egg),
            EggCandidate::Split(split) => match species_name(split.other_species) {
                Some(name) => write!(f, "Split egg {} (other parent: {})", split.egg, name),
                None => write!(f, "Split egg {} (other parent: #{})", split.egg, split.other_species),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::species::*;

    #[test]
    fn test_hatch_level() {
        assert_eq!(EncounterEgg::hatch_level(2), 5);
        assert_eq!(EncounterEgg::hatch_level(3), 5);
        assert_eq!(EncounterEgg::hatch_level(4), 1);
        assert_eq!(EncounterEgg::hatch_level(8), 1);
    }

    #[test]
    fn test_egg_location() {
        assert_eq!(EncounterEgg::new(PICHU, 0, 5, 3, GameVersion::E).egg_location(), 0);
        assert_eq!(EncounterEgg::new(PICHU, 0, 1, 4, GameVersion::D).egg_location(), 2000);
        assert_eq!(EncounterEgg::new(PICHU, 0, 1, 6, GameVersion::X).egg_location(), 60002);
    }

    #[test]
    fn test_with_version_keeps_other_fields() {
        let egg = EncounterEgg::new(PICHU, 0, 1, 6, GameVersion::X);
        let twin = egg.with_version(GameVersion::AS);
        assert_eq!(twin.species, PICHU);
        assert_eq!(twin.generation, 6);
        assert_eq!(twin.version, GameVersion::AS);
    }

    #[test]
    fn test_candidate_accessors() {
        let egg = EncounterEgg::new(MARILL, 0, 5, 3, GameVersion::E);
        let split = EggCandidate::split(egg, AZURILL);
        assert!(split.is_split());
        assert_eq!(split.species(), MARILL);
        assert_eq!(split.other_species(), Some(AZURILL));

        let plain = EggCandidate::from(egg);
        assert!(!plain.is_split());
        assert_eq!(plain.other_species(), None);
        assert_eq!(plain.version(), GameVersion::E);
    }

    #[test]
    fn test_display() {
        let egg = EncounterEgg::new(PICHU, 0, 1, 6, GameVersion::X);
        assert_eq!(EggCandidate::from(egg).to_string(), "Egg Pichu Lv.1 Gen6 (X)");

        let split = EggCandidate::split(EncounterEgg::new(MARILL, 0, 5, 3, GameVersion::R), AZURILL);
        assert_eq!(split.to_string(), "Split egg Marill Lv.5 Gen3 (R) (other parent: Azurill)");

        let unknown = EncounterEgg::new(999, 2, 1, 8, GameVersion::SW);
        assert_eq!(unknown.to_string(), "#999-2 Lv.1 Gen8 (SW)");
    }

    #[test]
    fn test_json_shape() {
        let egg = EggCandidate::from(EncounterEgg::new(PICHU, 0, 1, 6, GameVersion::X));
        let json = serde_json::to_value(egg).unwrap();
        assert_eq!(json["kind"], "egg");
        assert_eq!(json["species"], 172);
        assert_eq!(json["version"], "X");
    }
}
