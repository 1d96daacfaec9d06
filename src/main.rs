// 孵蛋来源查询命令行入口
// 用参数或JSON文件描述一只生物，输出它可能来自的孵蛋遭遇

use anyhow::{bail, Context};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use pokelegal::pokemon::{EvolutionTable, PersonalTable};
use pokelegal::{CreatureRecord, EggCandidate, EggContext, GameVersion, RulesConfigManager, SpeciesId};

#[derive(Debug, Parser)]
#[command(name = "pokelegal", version, about = "列出一只宝可梦可能来自的孵蛋遭遇")]
struct Cli {
    /// TOML规则文件，不指定时使用内置规则
    #[arg(long)]
    rules: Option<PathBuf>,

    /// 从JSON文件读取生物记录，忽略其余生物参数
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 种族编号
    #[arg(short, long)]
    species: Option<SpeciesId>,

    #[arg(long, default_value_t = 0)]
    form: u8,

    /// 出身版本，可以是编号、缩写或全名
    #[arg(short, long)]
    game: Option<GameVersion>,

    #[arg(short, long, default_value_t = 1)]
    level: u8,

    #[arg(long)]
    met_level: Option<u8>,

    #[arg(long, default_value_t = 0)]
    met_location: u16,

    /// 当前存储格式的世代，默认与出身世代相同
    #[arg(long)]
    format: Option<u8>,

    #[arg(long)]
    egg: bool,

    #[arg(long)]
    traded_egg: bool,

    #[arg(long)]
    gen1_locked: bool,

    /// 跳过合理性检查，列出所有候选
    #[arg(short, long)]
    all: bool,

    /// 以JSON输出
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn creature(&self) -> anyhow::Result<CreatureRecord> {
        if let Some(path) = &self.input {
            return CreatureRecord::load_from_file(path)
                .with_context(|| format!("读取生物记录失败: {}", path.display()));
        }

        let (Some(species), Some(version)) = (self.species, self.game) else {
            bail!("需要 --input 或者同时指定 --species 与 --game");
        };

        let mut creature = CreatureRecord::new(species, version)
            .with_form(self.form)
            .with_level(self.level)
            .with_met(self.met_level.unwrap_or(self.level), self.met_location);
        if let Some(format) = self.format {
            creature = creature.with_format(format);
        }
        if self.egg {
            creature = creature.as_egg();
        }
        if self.traded_egg {
            creature = creature.traded_egg();
        }
        if self.gen1_locked {
            creature = creature.gen1_locked();
        }
        Ok(creature)
    }
}

fn print_candidates(eggs: &[EggCandidate], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(eggs)?);
        return Ok(());
    }

    if eggs.is_empty() {
        println!("不可能由孵蛋得到");
        return Ok(());
    }
    for (i, egg) in eggs.iter().enumerate() {
        println!("{:>2}. {}", i + 1, egg);
    }
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = RulesConfigManager::load(cli.rules.as_deref()).context("加载规则失败")?;
    let creature = cli.creature()?;
    info!(
        "查询种族 {} 形态 {} 第{}世代 ({})",
        creature.species, creature.form, creature.generation, creature.version
    );

    let ctx = EggContext::new(config.rules(), PersonalTable::standard(), EvolutionTable::standard());
    let eggs = ctx.generate_eggs(&creature, cli.all);
    print_candidates(&eggs, cli.json)
}

fn main() {
    pokelegal::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("查询失败: {:#}", e);
        eprintln!("错误: {:#}", e);
        std::process::exit(1);
    }
}
