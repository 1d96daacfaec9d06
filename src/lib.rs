// 宝可梦孵蛋来源合法性库入口
// 给定一只生物的记录，枚举它可能来自的所有孵蛋遭遇
// 上层合法性流水线逐个比对候选，任何一个吻合即视为合法

pub mod core;
pub mod legality;
pub mod pokemon;

// 重新导出核心类型
pub use core::{LegalityError, Result, RulesConfigManager};
pub use legality::{
    generate_eggs, EggCandidate, EggCandidates, EggContext, EggGenerator, EggRules, EggStrategy,
    EncounterEgg, EncounterEggSplit, LegacyEggRules, ModernEggRules,
};
pub use pokemon::{CreatureRecord, EvoChain, EvoCriteria, GameVersion, SpeciesId};

// 版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = "pokelegal";

/// 初始化日志，未设置 RUST_LOG 时默认输出本库的 info 级别。
///
/// 重复调用不会报错。
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("pokelegal=info");
    if env_logger::Builder::from_env(env).try_init().is_ok() {
        log::info!("{} v{} 初始化完成", NAME, VERSION);
    }
}
