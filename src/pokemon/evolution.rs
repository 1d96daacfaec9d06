// 宝可梦进化链模块
// 从当前形态向前追溯所有可能的前置进化，供孵蛋来源判断使用
// 链的顺序为 最早祖先 -> 当前形态，下标0即最基础的形态

use hashbrown::HashMap;
use lazy_static::lazy_static;
use log::trace;
use serde::{Deserialize, Serialize};

use super::creature::CreatureRecord;
use super::species::{self, SpeciesId};

// 进化链最多三段，加上破壳而出的幼崽共四段
const MAX_CHAIN_LENGTH: usize = 4;

/// 进化链中的一个祖先条目。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvoCriteria {
    pub species: SpeciesId,
    pub form: u8,
    // 该形态能达到的最高等级
    pub level: u8,
}

impl EvoCriteria {
    pub fn new(species: SpeciesId, form: u8, level: u8) -> Self {
        Self { species, form, level }
    }
}

/// 有序进化链，下标0为最早的祖先。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvoChain {
    entries: Vec<EvoCriteria>,
}

impl EvoChain {
    pub fn new(entries: Vec<EvoCriteria>) -> Self {
        Self { entries }
    }

    // 从最早一端数第 skip 个祖先
    pub fn base(&self, skip: usize) -> Option<&EvoCriteria> {
        self.entries.get(skip)
    }

    pub fn current(&self) -> Option<&EvoCriteria> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EvoCriteria> {
        self.entries.iter()
    }

    pub fn species(&self) -> Vec<SpeciesId> {
        self.entries.iter().map(|e| e.species).collect()
    }
}

impl From<Vec<EvoCriteria>> for EvoChain {
    fn from(entries: Vec<EvoCriteria>) -> Self {
        Self::new(entries)
    }
}

/// 追溯进化链时的约束条件。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainBounds {
    pub max_level: u8,
    pub min_level: u8,
    // 出身世代不存在的种族不会出现在链中
    pub max_species: SpeciesId,
    // 跳过等级检查，只按种族关系追溯
    pub skip_checks: bool,
}

impl ChainBounds {
    pub fn unchecked(max_species: SpeciesId) -> Self {
        Self {
            max_level: 100,
            min_level: 1,
            max_species,
            skip_checks: true,
        }
    }

    pub fn checked(max_level: u8, min_level: u8, max_species: SpeciesId) -> Self {
        Self {
            max_level,
            min_level,
            max_species,
            skip_checks: false,
        }
    }
}

/// 进化链提供者。孵蛋生成器只依赖这个接口。
pub trait EvolutionSource: Send + Sync {
    fn pre_evolutions(&self, creature: &CreatureRecord, bounds: ChainBounds) -> EvoChain;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvolutionMethod {
    LevelUp(u8),           // 达到指定等级
    LevelUpCondition,      // 升级时满足亲密度、道具、时间等条件
    UseItem,               // 使用道具
    Trade,                 // 交换
}

impl EvolutionMethod {
    pub fn requires_level_up(&self) -> bool {
        matches!(self, EvolutionMethod::LevelUp(_) | EvolutionMethod::LevelUpCondition)
    }
}

/// 一条退化关系：从 (species, from_form) 退回 (pre_species, pre_form)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionLink {
    // None 表示任意形态
    pub from_form: Option<u8>,
    pub pre_species: SpeciesId,
    // None 表示保持原形态
    pub pre_form: Option<u8>,
    pub method: EvolutionMethod,
}

/// 内存中的退化关系表。
#[derive(Debug, Clone, Default)]
pub struct EvolutionTable {
    links: HashMap<SpeciesId, Vec<EvolutionLink>>,
}

impl EvolutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> &'static EvolutionTable {
        &STANDARD_EVOLUTIONS
    }

    pub fn add_link(&mut self, species: SpeciesId, link: EvolutionLink) -> &mut Self {
        self.links.entry(species).or_default().push(link);
        self
    }

    // 任意形态，保持形态
    pub fn add(&mut self, species: SpeciesId, pre_species: SpeciesId, method: EvolutionMethod) -> &mut Self {
        self.add_link(species, EvolutionLink { from_form: None, pre_species, pre_form: None, method })
    }

    pub fn add_form(
        &mut self,
        species: SpeciesId,
        from_form: Option<u8>,
        pre_species: SpeciesId,
        pre_form: u8,
        method: EvolutionMethod,
    ) -> &mut Self {
        self.add_link(species, EvolutionLink { from_form, pre_species, pre_form: Some(pre_form), method })
    }

    pub fn find_link(&self, species: SpeciesId, form: u8) -> Option<&EvolutionLink> {
        self.links
            .get(&species)?
            .iter()
            .find(|link| link.from_form.map_or(true, |f| f == form))
    }

    pub fn len(&self) -> usize {
        self.links.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl EvolutionSource for EvolutionTable {
    fn pre_evolutions(&self, creature: &CreatureRecord, bounds: ChainBounds) -> EvoChain {
        let mut species = creature.species;
        let mut form = creature.form;
        let mut level = bounds.max_level;
        let mut entries = vec![EvoCriteria::new(species, form, level)];

        while entries.len() < MAX_CHAIN_LENGTH {
            let Some(link) = self.find_link(species, form) else {
                break;
            };
            if link.pre_species > bounds.max_species {
                trace!("前置进化 {} 超出种族上限 {}", link.pre_species, bounds.max_species);
                break;
            }

            if !bounds.skip_checks {
                if let EvolutionMethod::LevelUp(required) = link.method {
                    if level < required {
                        trace!("种族 {} 等级 {} 未达到进化等级 {}", species, level, required);
                        break;
                    }
                }
                if link.method.requires_level_up() {
                    level = level.saturating_sub(1);
                }
                if level < bounds.min_level {
                    break;
                }
            }

            species = link.pre_species;
            form = link.pre_form.unwrap_or(form);
            entries.push(EvoCriteria::new(species, form, level));
        }

        entries.reverse();
        EvoChain::new(entries)
    }
}

lazy_static! {
    static ref STANDARD_EVOLUTIONS: EvolutionTable = {
        use species::*;
        use EvolutionMethod::*;

        let mut table = EvolutionTable::new();
        table
            .add(IVYSAUR, BULBASAUR, LevelUp(16))
            .add(VENUSAUR, IVYSAUR, LevelUp(32))
            .add(CHARMELEON, CHARMANDER, LevelUp(16))
            .add(CHARIZARD, CHARMELEON, LevelUp(36))
            .add(WARTORTLE, SQUIRTLE, LevelUp(16))
            .add(BLASTOISE, WARTORTLE, LevelUp(36))
            // 阿罗拉与主形态的拉达
            .add_form(RATICATE, Some(2), RATTATA, 1, LevelUp(20))
            .add(RATICATE, RATTATA, LevelUp(20))
            .add_form(PIKACHU, Some(0), PICHU, 0, LevelUpCondition)
            .add_form(RAICHU, None, PIKACHU, 0, UseItem)
            .add(SANDSLASH, SANDSHREW, LevelUp(22))
            .add(NINETALES, VULPIX, UseItem)
            .add(CLEFAIRY, CLEFFA, LevelUpCondition)
            .add(CLEFABLE, CLEFAIRY, UseItem)
            .add(JIGGLYPUFF, IGGLYBUFF, LevelUpCondition)
            .add(WIGGLYTUFF, JIGGLYPUFF, UseItem)
            .add(PERSIAN, MEOWTH, LevelUp(28))
            .add_form(MAROWAK, None, CUBONE, 0, LevelUp(28))
            .add(HITMONLEE, TYROGUE, LevelUp(20))
            .add(HITMONCHAN, TYROGUE, LevelUp(20))
            .add(HITMONTOP, TYROGUE, LevelUp(20))
            .add(CHANSEY, HAPPINY, LevelUpCondition)
            .add(BLISSEY, CHANSEY, LevelUpCondition)
            .add_form(MR_MIME, None, MIME_JR, 0, LevelUpCondition)
            .add_form(MR_RIME, None, MR_MIME, 1, LevelUp(42))
            .add(JYNX, SMOOCHUM, LevelUp(30))
            .add(ELECTABUZZ, ELEKID, LevelUp(30))
            .add(ELECTIVIRE, ELECTABUZZ, Trade)
            .add(MAGMAR, MAGBY, LevelUp(30))
            .add(MAGMORTAR, MAGMAR, Trade)
            .add(VAPOREON, EEVEE, UseItem)
            .add(SNORLAX, MUNCHLAX, LevelUpCondition)
            .add(TOGETIC, TOGEPI, LevelUpCondition)
            .add(TOGEKISS, TOGETIC, UseItem)
            .add(MARILL, AZURILL, LevelUpCondition)
            .add(AZUMARILL, MARILL, LevelUp(18))
            .add(SUDOWOODO, BONSLY, LevelUpCondition)
            .add(WOBBUFFET, WYNAUT, LevelUp(15))
            .add(MANTINE, MANTYKE, LevelUpCondition)
            .add(NINJASK, NINCADA, LevelUp(20))
            // 铁面忍者在土居忍士进化时额外出现
            .add(SHEDINJA, NINCADA, LevelUp(20))
            .add(ROSELIA, BUDEW, LevelUpCondition)
            .add(ROSERADE, ROSELIA, UseItem)
            .add(CHIMECHO, CHINGLING, LevelUpCondition)
            .add(GASTRODON, SHELLOS, LevelUp(30))
            .add(GUMSHOOS, YUNGOOS, LevelUp(20))
            .add_form(LYCANROC, None, ROCKRUFF, 0, LevelUp(25))
            .add_form(TOXTRICITY, None, TOXEL, 0, LevelUp(30))
            .add(POLTEAGEIST, SINISTEA, UseItem);
        log::debug!("退化关系表初始化完成，共{}条", table.len());
        table
    };
}
