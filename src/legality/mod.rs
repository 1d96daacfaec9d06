// 合法性检查 - 孵蛋来源候选
// 按出身世代分派到固定的规则实现，输出有序的孵蛋遭遇候选
// 空结果即“不可能由孵蛋得到”

pub mod egg_generator;
pub mod egg_generator2;
pub mod encounter;
pub mod form_check;
pub mod rules;

pub use egg_generator::ModernEggRules;
pub use egg_generator2::LegacyEggRules;
pub use encounter::{EggCandidate, EggCandidates, EncounterEgg, EncounterEggSplit};
pub use rules::{EggRules, SplitBreedRules};

use log::debug;

use crate::pokemon::creature::CreatureRecord;
use crate::pokemon::evolution::{ChainBounds, EvoChain, EvolutionSource, EvolutionTable};
use crate::pokemon::forms::{GameData, PersonalTable};

/// 某一类世代的孵蛋规则。
pub trait EggGenerator {
    /// 生成器自行计算进化链时使用的约束。
    fn chain_bounds(&self, ctx: &EggContext<'_>, creature: &CreatureRecord) -> ChainBounds;

    fn generate(&self, ctx: &EggContext<'_>, creature: &CreatureRecord, chain: &EvoChain, all: bool) -> EggCandidates;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EggStrategy {
    Legacy(LegacyEggRules),
    Modern(ModernEggRules),
}

impl EggStrategy {
    pub fn for_generation(generation: u8) -> Self {
        match generation {
            2 => EggStrategy::Legacy(LegacyEggRules),
            _ => EggStrategy::Modern(ModernEggRules),
        }
    }
}

impl EggGenerator for EggStrategy {
    fn chain_bounds(&self, ctx: &EggContext<'_>, creature: &CreatureRecord) -> ChainBounds {
        match self {
            EggStrategy::Legacy(rules) => rules.chain_bounds(ctx, creature),
            EggStrategy::Modern(rules) => rules.chain_bounds(ctx, creature),
        }
    }

    fn generate(&self, ctx: &EggContext<'_>, creature: &CreatureRecord, chain: &EvoChain, all: bool) -> EggCandidates {
        match self {
            EggStrategy::Legacy(rules) => rules.generate(ctx, creature, chain, all),
            EggStrategy::Modern(rules) => rules.generate(ctx, creature, chain, all),
        }
    }
}

/// 生成器的全部外部依赖：规则常量、游戏数据、进化链提供者。
///
/// 只持有只读引用，可以在多个线程间复制使用。
#[derive(Clone, Copy)]
pub struct EggContext<'a> {
    pub rules: &'a EggRules,
    pub game_data: &'a dyn GameData,
    pub evolutions: &'a dyn EvolutionSource,
}

impl<'a> EggContext<'a> {
    pub fn new(rules: &'a EggRules, game_data: &'a dyn GameData, evolutions: &'a dyn EvolutionSource) -> Self {
        Self { rules, game_data, evolutions }
    }

    // 内置规则与数据表
    pub fn standard() -> EggContext<'static> {
        EggContext::new(EggRules::standard(), PersonalTable::standard(), EvolutionTable::standard())
    }

    /// 从提供者取得进化链后生成候选。
    pub fn generate_eggs(&self, creature: &CreatureRecord, all: bool) -> EggCandidates {
        let strategy = EggStrategy::for_generation(creature.generation);
        let chain = self.evolutions.pre_evolutions(creature, strategy.chain_bounds(self, creature));
        let eggs = strategy.generate(self, creature, &chain, all);
        debug!(
            "种族 {} 第{}世代 ({}) 孵蛋候选 {} 个",
            creature.species,
            creature.generation,
            creature.version,
            eggs.len()
        );
        eggs
    }

    pub fn generate_eggs_with_chain(&self, creature: &CreatureRecord, chain: &EvoChain, all: bool) -> EggCandidates {
        EggStrategy::for_generation(creature.generation).generate(self, creature, chain, all)
    }
}

/// 使用内置规则生成孵蛋候选。
pub fn generate_eggs(creature: &CreatureRecord, all: bool) -> EggCandidates {
    EggContext::standard().generate_eggs(creature, all)
}
