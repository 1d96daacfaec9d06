// 宝可梦数据模块 - 合法性检查所需的基础数据
// 种族编号、游戏版本、生物记录、进化链、形态数据

pub mod creature;
pub mod evolution;
pub mod forms;
pub mod species;
pub mod version;

// 重新导出主要类型
pub use creature::CreatureRecord;
pub use evolution::{ChainBounds, EvoChain, EvoCriteria, EvolutionLink, EvolutionMethod, EvolutionSource, EvolutionTable};
pub use forms::{is_totem_form, GameData, PersonalTable};
pub use species::{max_species_origin, species_name, SpeciesId};
pub use version::GameVersion;
