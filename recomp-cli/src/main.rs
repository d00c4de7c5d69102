//! recomp CLI - inspect and evaluate algorithm-configuration strings.
//! recomp CLI - 检查并求值算法配置字符串。

mod commands;
mod demo;
mod output;

use clap::{Parser, Subcommand};

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "recomp")]
#[command(author, version, about = "recomp - configuration language for compression pipelines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Parse a configuration string and print its AST. / 解析配置字符串并打印 AST。
    Parse {
        /// The configuration string. / 配置字符串。
        config: String,
    },

    /// Compute the static dispatch pattern. / 计算静态分发模式。
    Pattern {
        /// The algorithm family type, e.g. "compressor". / 算法家族类型。
        ty: String,
        /// The configuration string. / 配置字符串。
        config: String,
    },

    /// Run the full two-phase evaluation. / 运行完整的两阶段求值。
    Eval {
        /// The algorithm family type, e.g. "compressor". / 算法家族类型。
        ty: String,
        /// The configuration string. / 配置字符串。
        config: String,
    },

    /// List registered algorithm declarations. / 列出已注册的算法声明。
    List {
        /// Restrict to one family type. / 限定到一个家族类型。
        ty: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { config } => commands::parse::run(&config, cli.verbose),
        Commands::Pattern { ty, config } => commands::pattern::run(&ty, &config),
        Commands::Eval { ty, config } => commands::eval::run(&ty, &config, cli.verbose),
        Commands::List { ty } => commands::list::run(ty.as_deref()),
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}
