// 核心模块 - 错误处理与规则配置
// 只在输入边界出现错误，生成器本身不依赖这里的任何状态

pub mod config;
pub mod error;

// 重新导出核心类型
pub use config::RulesConfigManager;
pub use error::{LegalityError, Result};
