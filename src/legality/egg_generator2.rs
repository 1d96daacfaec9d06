// 第2世代孵蛋遭遇生成
// 第2世代没有可繁殖的多形态种族（只有不能繁殖的未知图腾），没有分裂繁殖，也没有姊妹版本
// 出身只可能是金/银或水晶

use log::trace;

use super::encounter::{EggCandidates, EncounterEgg};
use super::{EggContext, EggGenerator};
use crate::pokemon::creature::CreatureRecord;
use crate::pokemon::evolution::{ChainBounds, EvoChain, EvoCriteria};
use crate::pokemon::version::GameVersion;

const GENERATION: u8 = 2;
const EGG_LEVEL: u8 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegacyEggRules;

impl LegacyEggRules {
    fn can_be_egg(ctx: &EggContext<'_>, creature: &CreatureRecord) -> bool {
        if creature.gen1_not_tradeback {
            return false;
        }
        if !Self::is_plausible_record(creature) {
            return false;
        }
        if ctx.rules.is_non_hatching(creature.species) {
            return false;
        }
        Self::is_evolution_valid(ctx, creature)
    }

    fn is_plausible_record(creature: &CreatureRecord) -> bool {
        if creature.is_egg {
            return creature.format == GENERATION;
        }

        if creature.format > GENERATION {
            if creature.met_level < EGG_LEVEL {
                return false;
            }
        } else if creature.met_location != 0 && creature.met_level != 1 {
            // 2->1->2 往返会清空遇见信息
            trace!("第2世代记录的遇见信息不一致: 地点 {} 等级 {}", creature.met_location, creature.met_level);
            return false;
        }

        creature.current_level >= EGG_LEVEL
    }

    // 按真实等级追溯的进化链必须和不限等级时一样完整
    fn is_evolution_valid(ctx: &EggContext<'_>, creature: &CreatureRecord) -> bool {
        let max_species = ctx.game_data.max_species_origin(GENERATION);
        let current = ctx
            .evolutions
            .pre_evolutions(creature, ChainBounds::checked(creature.current_level, EGG_LEVEL, max_species));
        let possible = ctx.evolutions.pre_evolutions(creature, ChainBounds::unchecked(max_species));
        current.len() >= possible.len()
    }

    fn select_base<'c>(ctx: &EggContext<'_>, chain: &'c EvoChain) -> Option<&'c EvoCriteria> {
        let base = chain.base(0)?;
        let max_species = ctx.game_data.max_species_origin(GENERATION);
        if (base.species >= max_species || base.form != 0) && chain.len() != 1 {
            return chain.base(1);
        }
        Some(base)
    }
}

impl EggGenerator for LegacyEggRules {
    fn chain_bounds(&self, ctx: &EggContext<'_>, _creature: &CreatureRecord) -> ChainBounds {
        ChainBounds::unchecked(ctx.game_data.max_species_origin(GENERATION))
    }

    fn generate(&self, ctx: &EggContext<'_>, creature: &CreatureRecord, chain: &EvoChain, all: bool) -> EggCandidates {
        let mut eggs = EggCandidates::new();
        if !all && !Self::can_be_egg(ctx, creature) {
            return eggs;
        }

        let Some(base) = Self::select_base(ctx, chain) else {
            return eggs;
        };
        // 第2世代没有形态变化
        if base.form != 0 {
            return eggs;
        }

        let species = base.species;
        if ctx.rules.allow_gen2_crystal {
            eggs.push(EncounterEgg::new(species, 0, EGG_LEVEL, GENERATION, GameVersion::C).into());
        }
        eggs.push(EncounterEgg::new(species, 0, EGG_LEVEL, GENERATION, GameVersion::GS).into());
        eggs
    }
}
