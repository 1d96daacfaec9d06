// 生物记录 - 合法性检查的只读输入
// 来自存档解析层，调用方保证字段已经过基本校验

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::species::SpeciesId;
use super::version::GameVersion;
use crate::core::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub species: SpeciesId,
    #[serde(default)]
    pub form: u8,
    // 出身世代
    pub generation: u8,
    // 当前存储格式的世代，2代宝可梦传到7代后为7
    pub format: u8,
    pub version: GameVersion,
    pub current_level: u8,
    #[serde(default)]
    pub met_level: u8,
    #[serde(default)]
    pub met_location: u16,
    #[serde(default)]
    pub is_egg: bool,
    // 只在1代游戏之间流通过，不能回传到2代
    #[serde(default)]
    pub gen1_not_tradeback: bool,
    #[serde(default)]
    pub was_traded_egg: bool,
}

impl CreatureRecord {
    /// 以版本推断出身世代和存储格式，等级默认为1。
    pub fn new(species: SpeciesId, version: GameVersion) -> Self {
        let generation = version.generation();
        Self {
            species,
            form: 0,
            generation,
            format: generation,
            version,
            current_level: 1,
            met_level: 1,
            met_location: 0,
            is_egg: false,
            gen1_not_tradeback: false,
            was_traded_egg: false,
        }
    }

    pub fn with_form(mut self, form: u8) -> Self {
        self.form = form;
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.current_level = level;
        self
    }

    pub fn with_met(mut self, level: u8, location: u16) -> Self {
        self.met_level = level;
        self.met_location = location;
        self
    }

    pub fn with_format(mut self, format: u8) -> Self {
        self.format = format;
        self
    }

    pub fn as_egg(mut self) -> Self {
        self.is_egg = true;
        self
    }

    pub fn traded_egg(mut self) -> Self {
        self.was_traded_egg = true;
        self
    }

    pub fn gen1_locked(mut self) -> Self {
        self.gen1_not_tradeback = true;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let record = Self::from_json(&content)?;
        log::debug!("读取生物记录: {:?} 种族 {}", path, record.species);
        Ok(record)
    }
}
