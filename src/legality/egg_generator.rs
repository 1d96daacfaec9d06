// 第3世代及以后的孵蛋遭遇生成
// 包括分裂繁殖和第6、7世代交换后的姊妹版本改写

use log::trace;

use super::encounter::{EggCandidate, EggCandidates, EncounterEgg};
use super::form_check::{no_hatch_from_egg_form, no_hatch_from_egg_form_gen};
use super::{EggContext, EggGenerator};
use crate::pokemon::creature::CreatureRecord;
use crate::pokemon::evolution::{ChainBounds, EvoChain, EvoCriteria};
use crate::pokemon::species::SpeciesId;
use crate::pokemon::version::GameVersion;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModernEggRules;

impl ModernEggRules {
    // 孵化时会写入当前游戏，交换过的蛋可能记录为姊妹版本
    fn sister_version(creature: &CreatureRecord, all: bool) -> Option<GameVersion> {
        if creature.generation <= 5 {
            return None;
        }
        if !(creature.was_traded_egg || all) {
            return None;
        }
        creature.version.sister()
    }

    fn is_valid_origin(ctx: &EggContext<'_>, entry: &EvoCriteria, max_species: SpeciesId, version: GameVersion) -> bool {
        entry.species <= max_species && !no_hatch_from_egg_form_gen(ctx.game_data, entry.species, entry.form, version)
    }
}

impl EggGenerator for ModernEggRules {
    fn chain_bounds(&self, ctx: &EggContext<'_>, creature: &CreatureRecord) -> ChainBounds {
        ChainBounds::unchecked(ctx.game_data.max_species_origin(creature.generation))
    }

    fn generate(&self, ctx: &EggContext<'_>, creature: &CreatureRecord, chain: &EvoChain, all: bool) -> EggCandidates {
        let mut eggs = EggCandidates::new();
        let species = creature.species;
        let generation = creature.generation;

        if ctx.rules.is_non_hatching(species) {
            trace!("种族 {} 不可能孵化", species);
            return eggs;
        }
        if generation <= 1 {
            return eggs;
        }
        if no_hatch_from_egg_form(species, creature.form, generation) {
            trace!("种族 {} 形态 {} 不可能孵化", species, creature.form);
            return eggs;
        }

        // 第3到5世代的版本字段就是真实出身
        let version = creature.version;
        let level = EncounterEgg::hatch_level(generation);
        let max_species = ctx.game_data.max_species_origin(generation);
        let sister = Self::sister_version(creature, all);

        let Some(base) = chain.base(0) else {
            return eggs;
        };
        if Self::is_valid_origin(ctx, base, max_species, version) {
            let egg = EncounterEgg::new(base.species, base.form, level, generation, version);
            eggs.push(egg.into());
            if let Some(sister) = sister {
                eggs.push(egg.with_version(sister).into());
            }
        }

        if !ctx.rules.can_split_breed(generation, species) {
            return eggs;
        }

        let Some(other) = chain.base(1) else {
            return eggs;
        };
        if other.species == base.species {
            return eggs;
        }
        if Self::is_valid_origin(ctx, other, max_species, version) {
            let egg = EncounterEgg::new(other.species, other.form, level, generation, version);
            eggs.push(EggCandidate::split(egg, base.species));
            if let Some(sister) = sister {
                eggs.push(EggCandidate::split(egg.with_version(sister), base.species));
            }
        }

        eggs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legality::rules::EggRules;
    use crate::pokemon::evolution::{EvolutionSource, EvolutionTable};
    use crate::pokemon::forms::PersonalTable;
    use crate::pokemon::species::*;

    fn eggs_for(creature: &CreatureRecord, all: bool) -> Vec<EggCandidate> {
        EggContext::standard().generate_eggs(creature, all).into_vec()
    }

    fn eggs_with_chain(creature: &CreatureRecord, chain: Vec<EvoCriteria>, all: bool) -> Vec<EggCandidate> {
        let ctx = EggContext::standard();
        ModernEggRules.generate(&ctx, creature, &EvoChain::from(chain), all).into_vec()
    }

    fn egg(species: SpeciesId, form: u8, generation: u8, version: GameVersion) -> EggCandidate {
        EncounterEgg::new(species, form, EncounterEgg::hatch_level(generation), generation, version).into()
    }

    fn split(species: SpeciesId, other: SpeciesId, generation: u8, version: GameVersion) -> EggCandidate {
        let egg = EncounterEgg::new(species, 0, EncounterEgg::hatch_level(generation), generation, version);
        EggCandidate::split(egg, other)
    }

    #[test]
    fn test_pikachu_hatches_from_pichu() {
        let pikachu = CreatureRecord::new(PIKACHU, GameVersion::X).with_level(10);
        assert_eq!(eggs_for(&pikachu, false), vec![egg(PICHU, 0, 6, GameVersion::X)]);
    }

    #[test]
    fn test_traded_egg_adds_sister_version() {
        let pikachu = CreatureRecord::new(PIKACHU, GameVersion::X).with_level(10).traded_egg();
        assert_eq!(
            eggs_for(&pikachu, false),
            vec![egg(PICHU, 0, 6, GameVersion::X), egg(PICHU, 0, 6, GameVersion::AS)]
        );
    }

    #[test]
    fn test_all_flag_adds_sister_version() {
        let pikachu = CreatureRecord::new(PIKACHU, GameVersion::UM).with_level(10);
        assert_eq!(
            eggs_for(&pikachu, true),
            vec![egg(PICHU, 0, 7, GameVersion::UM), egg(PICHU, 0, 7, GameVersion::MN)]
        );
    }

    #[test]
    fn test_no_sister_for_single_releases_or_old_generations() {
        let sword = CreatureRecord::new(PIKACHU, GameVersion::SW).traded_egg();
        assert_eq!(eggs_for(&sword, true), vec![egg(PICHU, 0, 8, GameVersion::SW)]);

        let black = CreatureRecord::new(PIKACHU, GameVersion::B).traded_egg();
        assert_eq!(eggs_for(&black, true), vec![egg(PICHU, 0, 5, GameVersion::B)]);
    }

    #[test]
    fn test_non_hatching_species_is_empty() {
        for species in [MEW, DITTO, CELEBI, MELTAN] {
            let creature = CreatureRecord::new(species, GameVersion::US).traded_egg();
            assert!(eggs_for(&creature, true).is_empty());
        }
    }

    #[test]
    fn test_generation_one_is_empty() {
        let creature = CreatureRecord::new(PIKACHU, GameVersion::RD).with_level(20);
        assert_eq!(creature.generation, 1);
        assert!(eggs_for(&creature, true).is_empty());
        let chain = vec![EvoCriteria::new(PIKACHU, 0, 20)];
        assert!(eggs_with_chain(&creature, chain, true).is_empty());
    }

    #[test]
    fn test_non_hatching_creature_forms() {
        let spiky = CreatureRecord::new(PICHU, GameVersion::HG).with_form(1);
        assert!(eggs_for(&spiky, false).is_empty());

        let totem = CreatureRecord::new(RATICATE, GameVersion::US).with_form(2).with_level(30);
        assert!(eggs_for(&totem, false).is_empty());

        let antique = CreatureRecord::new(POLTEAGEIST, GameVersion::SH).with_form(1);
        assert!(eggs_for(&antique, false).is_empty());
    }

    #[test]
    fn test_regional_form_requires_form_in_origin_version() {
        let alolan = CreatureRecord::new(NINETALES, GameVersion::SN).with_form(1).with_level(40);
        assert_eq!(eggs_for(&alolan, false), vec![egg(VULPIX, 1, 7, GameVersion::SN)]);

        let impossible = CreatureRecord::new(NINETALES, GameVersion::X).with_form(1).with_level(40);
        assert!(eggs_for(&impossible, false).is_empty());
    }

    #[test]
    fn test_rotom_appliance_forms_exempt_from_form_count() {
        let rotom = CreatureRecord::new(ROTOM, GameVersion::D).with_form(3).with_level(20);
        assert_eq!(eggs_for(&rotom, false), vec![egg(ROTOM, 3, 4, GameVersion::D)]);
    }

    #[test]
    fn test_split_breed_gen3() {
        let azumarill = CreatureRecord::new(AZUMARILL, GameVersion::E).with_level(30);
        assert_eq!(
            eggs_for(&azumarill, false),
            vec![egg(AZURILL, 0, 3, GameVersion::E), split(MARILL, AZURILL, 3, GameVersion::E)]
        );
    }

    #[test]
    fn test_split_breed_order_with_sister_versions() {
        let snorlax = CreatureRecord::new(SNORLAX, GameVersion::SN).with_level(50).traded_egg();
        assert_eq!(
            eggs_for(&snorlax, false),
            vec![
                egg(MUNCHLAX, 0, 7, GameVersion::SN),
                egg(MUNCHLAX, 0, 7, GameVersion::US),
                split(SNORLAX, MUNCHLAX, 7, GameVersion::SN),
                split(SNORLAX, MUNCHLAX, 7, GameVersion::US),
            ]
        );
    }

    #[test]
    fn test_split_breed_keeps_alternate_form() {
        let rime = CreatureRecord::new(MR_RIME, GameVersion::SW).with_level(50);
        let eggs = eggs_for(&rime, false);
        assert_eq!(eggs.len(), 2);
        assert_eq!(eggs[0], egg(MIME_JR, 0, 8, GameVersion::SW));
        assert_eq!(eggs[1].species(), MR_MIME);
        assert_eq!(eggs[1].egg().form, 1);
        assert_eq!(eggs[1].other_species(), Some(MIME_JR));
    }

    #[test]
    fn test_split_alternate_rejected_by_form_count() {
        let rime = CreatureRecord::new(MR_RIME, GameVersion::SW).with_level(50);
        // 剑盾的魔墙人偶只有两种形态
        let chain = vec![
            EvoCriteria::new(MIME_JR, 0, 50),
            EvoCriteria::new(MR_MIME, 5, 50),
            EvoCriteria::new(MR_RIME, 0, 50),
        ];
        assert_eq!(eggs_with_chain(&rime, chain, false), vec![egg(MIME_JR, 0, 8, GameVersion::SW)]);
    }

    #[test]
    fn test_split_breed_requires_species_in_generation_set() {
        // 第3世代还没有小福蛋
        let chansey = CreatureRecord::new(CHANSEY, GameVersion::E).with_level(30);
        assert_eq!(eggs_for(&chansey, false), vec![egg(CHANSEY, 0, 3, GameVersion::E)]);

        let chansey = CreatureRecord::new(CHANSEY, GameVersion::P).with_level(30);
        assert_eq!(
            eggs_for(&chansey, false),
            vec![egg(HAPPINY, 0, 4, GameVersion::P), split(CHANSEY, HAPPINY, 4, GameVersion::P)]
        );
    }

    #[test]
    fn test_split_breed_stops_without_distinct_alternate() {
        let marill = CreatureRecord::new(MARILL, GameVersion::R).with_level(20);
        let same = vec![EvoCriteria::new(MARILL, 0, 20), EvoCriteria::new(MARILL, 0, 20)];
        assert_eq!(eggs_with_chain(&marill, same, false), vec![egg(MARILL, 0, 3, GameVersion::R)]);

        let single = vec![EvoCriteria::new(MARILL, 0, 20)];
        assert_eq!(eggs_with_chain(&marill, single, false), vec![egg(MARILL, 0, 3, GameVersion::R)]);
    }

    #[test]
    fn test_species_cap_rejects_base_from_later_generation() {
        let wobbuffet = CreatureRecord::new(WOBBUFFET, GameVersion::E).with_level(20);
        let chain = vec![EvoCriteria::new(HAPPINY, 0, 20), EvoCriteria::new(WOBBUFFET, 0, 20)];
        // 主候选超出上限，分裂候选仍然保留
        assert_eq!(
            eggs_with_chain(&wobbuffet, chain, false),
            vec![split(WOBBUFFET, HAPPINY, 3, GameVersion::E)]
        );
    }

    #[test]
    fn test_empty_chain_is_empty() {
        let pikachu = CreatureRecord::new(PIKACHU, GameVersion::X);
        assert!(eggs_with_chain(&pikachu, Vec::new(), true).is_empty());
    }

    #[test]
    fn test_hatch_level_by_generation() {
        for version in [GameVersion::R, GameVersion::CXD, GameVersion::HG, GameVersion::W, GameVersion::Y, GameVersion::SH] {
            let creature = CreatureRecord::new(PIKACHU, version).with_level(50);
            let expected = if version.generation() <= 3 { 5 } else { 1 };
            for candidate in eggs_for(&creature, true) {
                assert_eq!(candidate.egg().level, expected);
                assert_eq!(candidate.egg().generation, version.generation());
            }
        }
    }

    #[test]
    fn test_non_split_species_yields_at_most_two() {
        for version in GameVersion::ALL {
            let creature = CreatureRecord::new(CHARIZARD, version).with_level(50).traded_egg();
            assert!(eggs_for(&creature, true).len() <= 2);
        }
    }

    #[test]
    fn test_deterministic_output() {
        let creature = CreatureRecord::new(AZUMARILL, GameVersion::OR).with_level(40).traded_egg();
        assert_eq!(eggs_for(&creature, false), eggs_for(&creature, false));
    }

    #[test]
    fn test_custom_rules_and_tables() {
        let mut rules = EggRules::default();
        rules.non_hatching.insert(PIKACHU);
        let data = PersonalTable::new();
        let evolutions = EvolutionTable::new();
        let ctx = EggContext::new(&rules, &data, &evolutions);

        let pikachu = CreatureRecord::new(PIKACHU, GameVersion::X).with_level(10);
        let chain = evolutions.pre_evolutions(&pikachu, ModernEggRules.chain_bounds(&ctx, &pikachu));
        assert!(ModernEggRules.generate(&ctx, &pikachu, &chain, true).is_empty());

        let raichu = CreatureRecord::new(RAICHU, GameVersion::X).with_level(10);
        assert_eq!(ctx.generate_eggs(&raichu, false).into_vec(), vec![egg(RAICHU, 0, 6, GameVersion::X)]);
    }
}
