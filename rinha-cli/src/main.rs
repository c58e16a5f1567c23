//! Rinha CLI - runs programs given as JSON ASTs.
//! Rinha CLI - 运行以 JSON AST 形式给出的程序。

mod commands;
mod logging;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::EvalArgs;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "rinha")]
#[command(author, version, about = "Rinha - a tree-walking interpreter for the Rinha JSON AST", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress the final error line. / 抑制最终的错误行。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Run a program from its JSON AST file. / 运行 JSON AST 文件中的程序。
    Run {
        /// The JSON AST file. / JSON AST 文件。
        file: PathBuf,

        /// Source text the AST locations point into, for annotated errors.
        /// 位置信息所指向的源码，用于带注释的错误信息。
        #[arg(long)]
        source: Option<PathBuf>,

        #[command(flatten)]
        eval: EvalArgs,
    },

    /// Evaluate a single JSON term and show its value. / 求值单个 JSON 项并显示其值。
    Eval {
        /// The term, e.g. '{"kind":"Int","value":1}'. / 要求值的项。
        term: String,

        #[command(flatten)]
        eval: EvalArgs,
    },

    /// Decode a JSON AST file without running it. / 仅解码 JSON AST 文件而不运行。
    Check {
        /// The JSON AST file. / JSON AST 文件。
        file: PathBuf,
    },
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Run { file, source, eval } => {
            commands::run::run(&file, source.as_deref(), eval.config(), cli.verbose)
        }
        Commands::Eval { term, eval } => commands::eval::run(&term, eval.config(), cli.verbose),
        Commands::Check { file } => commands::check::run(&file, cli.verbose),
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}
