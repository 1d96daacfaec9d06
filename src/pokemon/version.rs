// 游戏版本模块
// 版本编号按世代分组，孵化后交换的蛋会把出身版本改写为姊妹版本

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::{LegalityError, Result};

/// 单一发行版本以及第2世代孵蛋使用的 `GS` 合并版本。
///
/// 判别值即存档中记录的版本编号，姊妹版本的换算直接在编号上进行。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum GameVersion {
    // 第3世代
    S = 1,
    R = 2,
    E = 3,
    FR = 4,
    LG = 5,
    CXD = 15,
    // 第4世代
    HG = 7,
    SS = 8,
    D = 10,
    P = 11,
    Pt = 12,
    // 第5世代
    W = 20,
    B = 21,
    W2 = 22,
    B2 = 23,
    // 第6世代
    X = 24,
    Y = 25,
    AS = 26,
    OR = 27,
    // 第7世代
    SN = 30,
    MN = 31,
    US = 32,
    UM = 33,
    GO = 34,
    // 虚拟主机
    RD = 35,
    GN = 36,
    BU = 37,
    YW = 38,
    GD = 39,
    SI = 40,
    C = 41,
    // Let's Go 与 剑/盾
    GP = 42,
    GE = 43,
    SW = 44,
    SH = 45,
    // 合并版本
    GS = 65,
}

impl GameVersion {
    pub const ALL: [GameVersion; 36] = [
        GameVersion::S, GameVersion::R, GameVersion::E, GameVersion::FR, GameVersion::LG,
        GameVersion::CXD, GameVersion::HG, GameVersion::SS, GameVersion::D, GameVersion::P,
        GameVersion::Pt, GameVersion::W, GameVersion::B, GameVersion::W2, GameVersion::B2,
        GameVersion::X, GameVersion::Y, GameVersion::AS, GameVersion::OR, GameVersion::SN,
        GameVersion::MN, GameVersion::US, GameVersion::UM, GameVersion::GO, GameVersion::RD,
        GameVersion::GN, GameVersion::BU, GameVersion::YW, GameVersion::GD, GameVersion::SI,
        GameVersion::C, GameVersion::GP, GameVersion::GE, GameVersion::SW, GameVersion::SH,
        GameVersion::GS,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<GameVersion> {
        Self::ALL.iter().copied().find(|v| v.code() == code)
    }

    /// 该版本出身的宝可梦所属世代。
    pub fn generation(self) -> u8 {
        use GameVersion::*;
        match self {
            RD | GN | BU | YW => 1,
            GD | SI | C | GS => 2,
            S | R | E | FR | LG | CXD => 3,
            HG | SS | D | P | Pt => 4,
            W | B | W2 | B2 => 5,
            X | Y | AS | OR => 6,
            SN | MN | US | UM | GP | GE => 7,
            GO | SW | SH => 8,
        }
    }

    // 只有第6、7世代的主系列成对发行
    pub fn has_sister(self) -> bool {
        use GameVersion::*;
        matches!(self, X | Y | AS | OR | SN | MN | US | UM)
    }

    /// 交换后会被改写成的姊妹版本，例如 X -> AS、SN -> US、UM -> MN。
    pub fn sister(self) -> Option<GameVersion> {
        use GameVersion::*;
        if !self.has_sister() {
            return None;
        }
        let code = self.code();
        let paired = match self {
            X | Y | AS | OR => code ^ 2,
            SN | MN => code + 2,
            US | UM => code - 2,
            _ => return None,
        };
        Self::from_code(paired)
    }

    pub fn name(self) -> &'static str {
        use GameVersion::*;
        match self {
            S => "Sapphire",
            R => "Ruby",
            E => "Emerald",
            FR => "FireRed",
            LG => "LeafGreen",
            CXD => "Colosseum/XD",
            HG => "HeartGold",
            SS => "SoulSilver",
            D => "Diamond",
            P => "Pearl",
            Pt => "Platinum",
            W => "White",
            B => "Black",
            W2 => "White 2",
            B2 => "Black 2",
            X => "X",
            Y => "Y",
            AS => "Alpha Sapphire",
            OR => "Omega Ruby",
            SN => "Sun",
            MN => "Moon",
            US => "Ultra Sun",
            UM => "Ultra Moon",
            GO => "GO",
            RD => "Red",
            GN => "Green",
            BU => "Blue",
            YW => "Yellow",
            GD => "Gold",
            SI => "Silver",
            C => "Crystal",
            GP => "Let's Go Pikachu",
            GE => "Let's Go Eevee",
            SW => "Sword",
            SH => "Shield",
            GS => "Gold/Silver",
        }
    }
}

impl TryFrom<u8> for GameVersion {
    type Error = LegalityError;

    fn try_from(code: u8) -> Result<Self> {
        GameVersion::from_code(code).ok_or(LegalityError::UnknownVersion(code))
    }
}

// 命令行可以写缩写 (X, AS, UM) 或数字编号
impl FromStr for GameVersion {
    type Err = LegalityError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return GameVersion::try_from(code);
        }
        GameVersion::ALL
            .iter()
            .copied()
            .find(|v| format!("{:?}", v).eq_ignore_ascii_case(trimmed) || v.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| LegalityError::InvalidInput(format!("未知版本: {}", trimmed)))
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip_for_every_version() {
        for version in GameVersion::ALL {
            assert_eq!(GameVersion::from_code(version.code()), Some(version));
        }
        assert_eq!(GameVersion::from_code(0), None);
        assert_eq!(GameVersion::from_code(99), None);
    }

    #[test]
    fn test_gen6_sister_flips_bit() {
        assert_eq!(GameVersion::X.sister(), Some(GameVersion::AS));
        assert_eq!(GameVersion::Y.sister(), Some(GameVersion::OR));
        assert_eq!(GameVersion::AS.sister(), Some(GameVersion::X));
        assert_eq!(GameVersion::OR.sister(), Some(GameVersion::Y));
    }

    #[test]
    fn test_gen7_sister_offsets() {
        assert_eq!(GameVersion::SN.sister(), Some(GameVersion::US));
        assert_eq!(GameVersion::MN.sister(), Some(GameVersion::UM));
        assert_eq!(GameVersion::US.sister(), Some(GameVersion::SN));
        assert_eq!(GameVersion::UM.sister(), Some(GameVersion::MN));
    }

    #[test]
    fn test_single_releases_have_no_sister() {
        for version in [GameVersion::GP, GameVersion::GE, GameVersion::SW, GameVersion::SH, GameVersion::GO] {
            assert!(!version.has_sister());
            assert_eq!(version.sister(), None);
        }
        assert_eq!(GameVersion::B.sister(), None);
        assert_eq!(GameVersion::E.sister(), None);
    }

    #[test]
    fn test_has_sister_agrees_with_sister() {
        for version in GameVersion::ALL {
            assert_eq!(version.has_sister(), version.sister().is_some(), "{:?}", version);
        }
    }

    #[test]
    fn test_sister_is_an_involution() {
        for version in GameVersion::ALL.iter().copied().filter(|v| v.has_sister()) {
            let sister = version.sister().unwrap();
            assert_eq!(sister.generation(), version.generation());
            assert_eq!(sister.sister(), Some(version));
        }
    }

    #[test]
    fn test_generation() {
        assert_eq!(GameVersion::GS.generation(), 2);
        assert_eq!(GameVersion::C.generation(), 2);
        assert_eq!(GameVersion::E.generation(), 3);
        assert_eq!(GameVersion::Pt.generation(), 4);
        assert_eq!(GameVersion::B2.generation(), 5);
        assert_eq!(GameVersion::OR.generation(), 6);
        assert_eq!(GameVersion::GE.generation(), 7);
        assert_eq!(GameVersion::SH.generation(), 8);
    }

    #[test]
    fn test_parse_version() {
        assert_eq!("X".parse::<GameVersion>(), Ok(GameVersion::X));
        assert_eq!("um".parse::<GameVersion>(), Ok(GameVersion::UM));
        assert_eq!("24".parse::<GameVersion>(), Ok(GameVersion::X));
        assert_eq!("Crystal".parse::<GameVersion>(), Ok(GameVersion::C));
        assert_eq!("200".parse::<GameVersion>(), Err(LegalityError::UnknownVersion(200)));
        assert!("Stadium".parse::<GameVersion>().is_err());
    }
}
