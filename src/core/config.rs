// 规则配置管理
// 从TOML文件加载孵蛋规则，校验后交给生成器；没有文件时使用内置规则

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{LegalityError, Result};
use crate::legality::rules::EggRules;
use crate::legality_bail;

#[derive(Debug, Clone)]
pub struct RulesConfigManager {
    rules: EggRules,
    config_path: Option<PathBuf>,
}

impl Default for RulesConfigManager {
    fn default() -> Self {
        Self { rules: EggRules::default(), config_path: None }
    }
}

impl RulesConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取规则文件；未给出路径时使用内置规则。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self {
                rules: Self::load_from_file(path)?,
                config_path: Some(path.to_path_buf()),
            }),
            None => {
                debug!("未指定规则文件，使用内置规则");
                Ok(Self::new())
            }
        }
    }

    pub fn rules(&self) -> &EggRules {
        &self.rules
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// 修改规则并校验，有文件路径时写回。
    pub fn update_rules<F>(&mut self, updater: F) -> Result<()>
    where
        F: FnOnce(&mut EggRules),
    {
        let mut rules = self.rules.clone();
        updater(&mut rules);
        Self::validate_rules(&rules)?;
        self.rules = rules;

        if let Some(path) = &self.config_path {
            Self::save_rules_to_file(&self.rules, path)?;
            info!("规则已更新并保存");
        }
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<EggRules> {
        if !path.exists() {
            return Err(LegalityError::FileError(format!("规则文件不存在: {:?}", path)));
        }

        let content = fs::read_to_string(path)?;
        let rules: EggRules = toml::from_str(&content)
            .map_err(|e| LegalityError::ConfigError(format!("解析规则文件失败: {}", e)))?;

        Self::validate_rules(&rules)?;
        info!("成功加载规则文件: {:?}", path);
        Ok(rules)
    }

    pub fn save_rules_to_file(rules: &EggRules, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(rules)
            .map_err(|e| LegalityError::ConfigError(format!("序列化规则失败: {}", e)))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)?;
        debug!("规则已保存到: {:?}", path);
        Ok(())
    }

    pub fn validate_rules(rules: &EggRules) -> Result<()> {
        if rules.non_hatching.is_empty() {
            legality_bail!(ConfigError, "不可孵化种族列表为空");
        }

        let split = &rules.split_breed;
        for (generation, set) in [(3, &split.gen3), (4, &split.gen4), (8, &split.gen8)] {
            if set.is_empty() {
                legality_bail!(ConfigError, "第{}世代分裂繁殖列表为空", generation);
            }
            if let Some(species) = set.iter().find(|s| rules.is_non_hatching(**s)) {
                legality_bail!(ConfigError, "第{}世代分裂繁殖种族 {} 不可孵化", generation, species);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::species::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_rules() {
        let manager = RulesConfigManager::new();
        assert_eq!(manager.rules(), EggRules::standard());
        assert!(manager.config_path().is_none());
        assert!(RulesConfigManager::validate_rules(manager.rules()).is_ok());
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let manager = RulesConfigManager::load(None).unwrap();
        assert!(manager.rules().allow_gen2_crystal);
    }

    #[test]
    fn test_rules_validation() {
        let mut rules = EggRules::default();
        rules.split_breed.gen4.insert(MEW);
        let err = RulesConfigManager::validate_rules(&rules).unwrap_err();
        assert!(matches!(err, LegalityError::ConfigError(_)));

        let mut rules = EggRules::default();
        rules.split_breed.gen8.clear();
        assert!(RulesConfigManager::validate_rules(&rules).is_err());

        let mut rules = EggRules::default();
        rules.non_hatching.clear();
        assert!(RulesConfigManager::validate_rules(&rules).is_err());
    }

    #[test]
    fn test_rules_file_operations() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rules").join("egg.toml");

        let rules = EggRules::default().with_gen2_crystal(false);
        RulesConfigManager::save_rules_to_file(&rules, &path).unwrap();
        assert!(path.exists());

        let loaded = RulesConfigManager::load_from_file(&path).unwrap();
        assert_eq!(loaded, rules);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("egg.toml");
        fs::write(&path, "allow_gen2_crystal = false\n").unwrap();

        let manager = RulesConfigManager::load(Some(&path)).unwrap();
        assert!(!manager.rules().allow_gen2_crystal);
        assert_eq!(manager.rules().non_hatching, EggRules::standard().non_hatching);
        assert_eq!(manager.config_path(), Some(path.as_path()));
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(matches!(RulesConfigManager::load(Some(&missing)), Err(LegalityError::FileError(_))));

        let broken = temp_dir.path().join("broken.toml");
        fs::write(&broken, "allow_gen2_crystal = \"maybe\"").unwrap();
        assert!(matches!(RulesConfigManager::load(Some(&broken)), Err(LegalityError::ConfigError(_))));
    }

    #[test]
    fn test_update_rules_saves_and_rejects_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("egg.toml");
        RulesConfigManager::save_rules_to_file(&EggRules::default(), &path).unwrap();

        let mut manager = RulesConfigManager::load(Some(&path)).unwrap();
        manager.update_rules(|rules| rules.allow_gen2_crystal = false).unwrap();
        assert!(!RulesConfigManager::load_from_file(&path).unwrap().allow_gen2_crystal);

        // 不合法的修改不生效
        assert!(manager.update_rules(|rules| { rules.split_breed.gen3.insert(CELEBI); }).is_err());
        assert!(!manager.rules().split_breed.gen3.contains(&CELEBI));
    }
}
