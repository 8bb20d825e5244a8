use clap::{Args, Parser, Subcommand};
use rust_aztec::Result;
use rust_aztec::encoder::{AztecEncoder, EncoderConfig};
use rust_aztec::models::AztecCode;
use rust_aztec::tools::{Input, ascii_art, load_input, parse_color};
use rust_aztec::utils::render::{RenderOptions, preferred_size, save_png};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aztectool", version, about = "Aztec barcode encoder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Text payload (trimmed, Latin-1)
    #[arg(long)]
    text: Option<String>,
    /// Read raw bytes from a file
    #[arg(long)]
    file: Option<PathBuf>,
    /// Bytes as hex digits, e.g. "80 81"
    #[arg(long)]
    hex: Option<String>,
}

impl InputArgs {
    fn into_input(self) -> Input {
        match (self.text, self.file, self.hex) {
            (Some(text), _, _) => Input::Text(text),
            (_, Some(path), _) => Input::File(path),
            (_, _, Some(hex)) => Input::Hex(hex),
            (None, None, None) => Input::Text(String::new()),
        }
    }
}

#[derive(Args)]
struct SymbolArgs {
    /// Check word share in percent
    #[arg(long)]
    ecc_percent: Option<u32>,
    /// Check words added on top of the percentage
    #[arg(long)]
    min_ecc: Option<usize>,
    /// Never choose a compact symbol
    #[arg(long)]
    full_only: bool,
}

impl SymbolArgs {
    fn config(&self) -> EncoderConfig {
        let mut config = EncoderConfig::default();
        if let Some(percent) = self.ecc_percent {
            config = config.with_ecc_percent(percent);
        }
        if let Some(min) = self.min_ecc {
            config = config.with_min_ecc_codewords(min);
        }
        if self.full_only {
            config = config.with_compact(false);
        }
        config
    }
}

#[derive(Subcommand)]
enum Command {
    /// Encode a payload and write a PNG
    Encode {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        symbol: SymbolArgs,
        #[arg(long, short)]
        output: PathBuf,
        /// Pixels per module
        #[arg(long, default_value_t = 4)]
        scale: u32,
        /// Light border in modules
        #[arg(long, default_value_t = 0)]
        quiet_zone: u32,
        #[arg(long, default_value = "#000000")]
        foreground: String,
        #[arg(long, default_value = "#ffffff")]
        background: String,
    },
    /// Print the symbol to the terminal
    Ascii {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        symbol: SymbolArgs,
        #[arg(long, default_value_t = 2)]
        quiet_zone: usize,
        /// Light modules as blocks, for dark terminals
        #[arg(long)]
        invert: bool,
    },
    /// Print symbol parameters
    Info {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        symbol: SymbolArgs,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Encode {
            input,
            symbol,
            output,
            scale,
            quiet_zone,
            foreground,
            background,
        } => encode_cmd(
            input.into_input(),
            &symbol,
            &output,
            scale,
            quiet_zone,
            &foreground,
            &background,
        ),
        Command::Ascii {
            input,
            symbol,
            quiet_zone,
            invert,
        } => ascii_cmd(input.into_input(), &symbol, quiet_zone, invert),
        Command::Info { input, symbol } => info_cmd(input.into_input(), &symbol),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("aztectool: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn build(input: &Input, symbol: &SymbolArgs) -> Result<AztecCode> {
    let encoder = AztecEncoder::with_config(symbol.config());
    match input {
        Input::Text(text) => encoder.encode_text(text),
        _ => encoder.encode(&load_input(input)?),
    }
}

#[allow(clippy::too_many_arguments)]
fn encode_cmd(
    input: Input,
    symbol: &SymbolArgs,
    output: &Path,
    scale: u32,
    quiet_zone: u32,
    foreground: &str,
    background: &str,
) -> Result<()> {
    let code = build(&input, symbol)?;
    let options = RenderOptions::default()
        .with_module_size(scale)
        .with_quiet_zone(quiet_zone)
        .with_colors(parse_color(foreground)?, parse_color(background)?);
    save_png(&code, output, &options)?;
    println!(
        "Wrote {} ({} modules, {:?} {} layers)",
        output.display(),
        code.size(),
        code.form(),
        code.layers()
    );
    Ok(())
}

fn ascii_cmd(
    input: Input,
    symbol: &SymbolArgs,
    quiet_zone: usize,
    invert: bool,
) -> Result<()> {
    let code = build(&input, symbol)?;
    print!("{}", ascii_art(code.modules(), quiet_zone, invert));
    Ok(())
}

fn info_cmd(input: Input, symbol: &SymbolArgs) -> Result<()> {
    let code = build(&input, symbol)?;
    let (pw, ph) = preferred_size(&code, 1.0);
    println!("Form: {:?}", code.form());
    println!("Layers: {}", code.layers());
    println!("Size: {}x{} modules", code.size(), code.size());
    println!("Preferred size: {}x{} px", pw, ph);
    println!("Codeword width: {} bits", code.codeword_width());
    println!("Data codewords: {}", code.data_codewords());
    println!("Check codewords: {}", code.parity_codewords());
    Ok(())
}
