use clap::Parser;
use colored::Colorize;
use lexp::cli;
use lexp::writer::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexp")]
#[command(about = "Export spreadsheet locale tables to JSON or XML")]
#[command(long_about = "Lexp - spreadsheet locale exporter

Reads one or more sheets from a localization workbook and writes a single
output file next to the input. Each sheet's first column holds translation
keys; the remaining columns hold per-language values, with the header row
naming the languages.

OUTPUT SHAPES:
  json - one object per language: { \"en\": { \"greeting\": \"Hello\" } }
  xml  - one element per key:     <Root><greeting><en>Hello</en></greeting></Root>

Sheets are processed in the order given. In JSON mode a key seen again in a
later sheet overwrites the earlier value; in XML mode every row produces its
own element, duplicates included.

EXAMPLES:
  lexp locales.xlsx json 1
  lexp locales.xlsx xml 1 2 3

Supported inputs: .xlsx, .xls, .ods")]
#[command(version)]
struct Cli {
    /// Path to the spreadsheet workbook
    file: PathBuf,

    /// Output format
    #[arg(value_enum, ignore_case = true)]
    format: OutputFormat,

    /// 1-based sheet indices to export, in processing order
    #[arg(required = true, value_parser = cli::parse_sheet_index)]
    sheets: Vec<usize>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::convert(cli.file, cli.format, cli.sheets) {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}
