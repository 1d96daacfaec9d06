// 形态数据模块
// 各版本中每个种族定义的形态数量，以及第7世代的霸主形态

use hashbrown::HashMap;
use lazy_static::lazy_static;

use super::species::{self, SpeciesId};
use super::version::GameVersion;

/// 游戏数据查询接口：形态数量与各世代的种族上限。
pub trait GameData: Send + Sync {
    fn form_count(&self, species: SpeciesId, form: u8, version: GameVersion) -> u8;

    fn max_species_origin(&self, generation: u8) -> SpeciesId {
        species::max_species_origin(generation)
    }
}

/// 按 (种族, 版本) 记录形态数量，未登记的种族只有一种形态。
#[derive(Debug, Clone, Default)]
pub struct PersonalTable {
    form_counts: HashMap<(SpeciesId, GameVersion), u8>,
}

impl PersonalTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> &'static PersonalTable {
        &STANDARD_PERSONAL
    }

    pub fn set_form_count(&mut self, species: SpeciesId, versions: &[GameVersion], count: u8) -> &mut Self {
        for &version in versions {
            self.form_counts.insert((species, version), count);
        }
        self
    }

    // 从某世代起的所有版本
    pub fn set_form_count_since(&mut self, species: SpeciesId, generation: u8, count: u8) -> &mut Self {
        let versions: Vec<GameVersion> = GameVersion::ALL
            .iter()
            .copied()
            .filter(|v| v.generation() >= generation && v.generation() >= 3)
            .collect();
        self.set_form_count(species, &versions, count)
    }
}

impl GameData for PersonalTable {
    fn form_count(&self, species: SpeciesId, _form: u8, version: GameVersion) -> u8 {
        self.form_counts.get(&(species, version)).copied().unwrap_or(1)
    }
}

const GEN7_VERSIONS: &[GameVersion] = &[GameVersion::SN, GameVersion::MN, GameVersion::US, GameVersion::UM];
const USUM_VERSIONS: &[GameVersion] = &[GameVersion::US, GameVersion::UM];
const LGPE_VERSIONS: &[GameVersion] = &[GameVersion::GP, GameVersion::GE];
const SWSH_VERSIONS: &[GameVersion] = &[GameVersion::SW, GameVersion::SH];

lazy_static! {
    static ref STANDARD_PERSONAL: PersonalTable = {
        use species::*;

        let mut table = PersonalTable::new();

        table
            .set_form_count_since(UNOWN, 3, 28)
            .set_form_count_since(CASTFORM, 3, 4)
            .set_form_count_since(BURMY, 4, 3)
            .set_form_count_since(SHELLOS, 4, 2)
            .set_form_count_since(GASTRODON, 4, 2)
            .set_form_count_since(BASCULIN, 5, 2)
            .set_form_count_since(DEERLING, 5, 4)
            .set_form_count_since(SAWSBUCK, 5, 4)
            .set_form_count_since(FLABEBE, 6, 5)
            .set_form_count_since(FLOETTE, 6, 6)
            .set_form_count_since(FLORGES, 6, 5)
            .set_form_count_since(ORICORIO, 7, 4)
            .set_form_count_since(MINIOR, 7, 14)
            .set_form_count_since(MIMIKYU, 7, 2)
            // 白金之前洛托姆只有一种形态
            .set_form_count(ROTOM, &[GameVersion::Pt, GameVersion::HG, GameVersion::SS], 6)
            .set_form_count_since(ROTOM, 5, 6)
            // 刺刺耳皮丘只存在于心金魂银
            .set_form_count(PICHU, &[GameVersion::HG, GameVersion::SS], 2)
            .set_form_count(PIKACHU, &[GameVersion::AS, GameVersion::OR], 7)
            .set_form_count(PIKACHU, &[GameVersion::SN, GameVersion::MN], 7)
            .set_form_count(PIKACHU, USUM_VERSIONS, 8)
            .set_form_count(PIKACHU, LGPE_VERSIONS, 2);

        // 阿罗拉形态
        for &alolan in &[RATTATA, RAICHU, SANDSHREW, SANDSLASH, VULPIX, NINETALES, DIGLETT, DUGTRIO, MEOWTH, PERSIAN, GEODUDE, GRIMER, MAROWAK] {
            table.set_form_count(alolan, GEN7_VERSIONS, 2);
            table.set_form_count(alolan, LGPE_VERSIONS, 2);
        }
        // 含霸主形态
        table.set_form_count(RATICATE, &[GameVersion::SN, GameVersion::MN], 2);
        table.set_form_count(RATICATE, USUM_VERSIONS, 3);
        table.set_form_count(MAROWAK, GEN7_VERSIONS, 3);
        table.set_form_count(MIMIKYU, GEN7_VERSIONS, 4);
        table.set_form_count(ROCKRUFF, USUM_VERSIONS, 2);
        table.set_form_count(LYCANROC, USUM_VERSIONS, 3);
        for &totem in &[GUMSHOOS, VIKAVOLT, RIBOMBEE, ARAQUANID, LURANTIS, SALAZZLE, TOGEDEMARU, KOMMO_O] {
            table.set_form_count(totem, GEN7_VERSIONS, 2);
        }

        // 伽勒尔形态
        for &galarian in &[MEOWTH, PONYTA, SLOWPOKE, FARFETCHD, MR_MIME, CORSOLA, WEEZING, ZIGZAGOON, LINOONE, DARUMAKA, YAMASK, STUNFISK] {
            table.set_form_count(galarian, SWSH_VERSIONS, 2);
        }
        table.set_form_count(MEOWTH, SWSH_VERSIONS, 3);
        for &swsh in &[SINISTEA, POLTEAGEIST, TOXTRICITY, INDEEDEE, ROCKRUFF] {
            table.set_form_count(swsh, SWSH_VERSIONS, 2);
        }
        table.set_form_count(LYCANROC, SWSH_VERSIONS, 3);

        table
    };
}

const TOTEM_USUM: &[SpeciesId] = &[
    species::RATICATE,
    species::GUMSHOOS,
    species::VIKAVOLT,
    species::LURANTIS,
    species::SALAZZLE,
    species::MIMIKYU,
    species::KOMMO_O,
    species::MAROWAK,
    species::ARAQUANID,
    species::TOGEDEMARU,
    species::RIBOMBEE,
];

// 阿罗拉形态的霸主排在形态2
const TOTEM_ALOLAN: &[SpeciesId] = &[species::RATICATE, species::MAROWAK];

/// 是否为第7世代的霸主形态（只能在霸主战中遇到）。
pub fn is_totem_form(species: SpeciesId, form: u8, generation: u8) -> bool {
    if generation != 7 || form == 0 {
        return false;
    }
    if !TOTEM_USUM.contains(&species) {
        return false;
    }
    if species == species::MIMIKYU {
        return form == 2 || form == 3;
    }
    if TOTEM_ALOLAN.contains(&species) {
        return form == 2;
    }
    form == 1
}
