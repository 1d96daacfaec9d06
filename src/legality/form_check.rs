// 形态合法性检查
// 判断某个种族/形态能否作为孵蛋出身

use crate::pokemon::forms::{is_totem_form, GameData};
use crate::pokemon::species::{self, SpeciesId};
use crate::pokemon::version::GameVersion;

// 洛托姆的家电形态在任何版本都视为存在
const ROTOM_MAX_FORM: u8 = 5;

/// 生物自身的形态不可能来自孵蛋。
///
/// 在查看进化链之前使用，针对的是生物当前的种族与形态。
pub fn no_hatch_from_egg_form(species: SpeciesId, form: u8, generation: u8) -> bool {
    if form == 0 {
        return false;
    }
    if is_totem_form(species, form, generation) {
        return true;
    }
    // 刺刺耳皮丘
    if species == species::PICHU {
        return true;
    }
    // 古董形态
    species == species::SINISTEA || species == species::POLTEAGEIST
}

/// 出身版本中该形态不存在。
pub fn no_hatch_from_egg_form_gen(data: &dyn GameData, species: SpeciesId, form: u8, version: GameVersion) -> bool {
    let form_count = data.form_count(species, form, version);
    form >= form_count && !(species == species::ROTOM && form <= ROTOM_MAX_FORM)
}
