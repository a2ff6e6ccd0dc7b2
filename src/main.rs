//! QRSTAMP command-line entrypoint

use clap::{ArgGroup, Parser, Subcommand};
use qrstamp::output::{DecodedTimestamp, Rendered, render_decoded, render_generated};
use qrstamp::{
    EncodingScheme, Error, QrDecoder, QrGenerator, QrstampConfig, Result, SystemClock, char_to_millis,
    logging, split_payload,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "qrstamp",
    version,
    about = "Timestamped friend QR code generator and decoder"
)]
struct Cli {
    /// Optional configuration file (toml/yaml). Defaults to qrstamp.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Output results as formatted JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Creates QR codes for every configured friend
    #[command(alias = "c")]
    Create {
        /// Existing directory receiving the PNG files
        #[arg(long, value_name = "PATH")]
        dir: Option<PathBuf>,

        /// Protocol version (4 or 5)
        #[arg(long = "version", value_name = "4|5")]
        protocol: Option<EncodingScheme>,
    },

    /// Decodes an encoded timestamp
    #[command(alias = "d")]
    #[command(group(ArgGroup::new("source").required(true).args(["ts", "image"])))]
    Decode {
        /// Encoded timestamp (letters only)
        #[arg(long, value_name = "CODE")]
        ts: Option<String>,

        /// QR code image whose payload should be decoded
        #[arg(long, value_name = "PATH")]
        image: Option<PathBuf>,

        /// Protocol version whose dictionary decodes the code
        #[arg(long = "version", value_name = "4|5", default_value = "4")]
        protocol: EncodingScheme,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = QrstampConfig::load(cli.config.as_deref())?;
    logging::init(&config.logging)?;

    let rendered = match cli.command {
        Command::Create { dir, protocol } => {
            let dir = dir.unwrap_or_else(|| config.output.dir.clone());
            let scheme = protocol.unwrap_or(config.output.version);
            info!(dir = %dir.display(), %scheme, "Creating QR codes");

            let generator = QrGenerator::new(dir, scheme)?;
            let codes = generator.create_all(&config.friends, &SystemClock)?;
            render_generated(&codes)
        }
        Command::Decode {
            ts,
            image,
            protocol,
        } => decode(&config, ts, image, protocol)?,
    };

    emit(&rendered, cli.json)
}

fn decode(
    config: &QrstampConfig,
    ts: Option<String>,
    image: Option<PathBuf>,
    scheme: EncodingScheme,
) -> Result<Rendered> {
    let (code, friend_id) = match (ts, image) {
        (Some(code), _) => (code, None),
        (None, Some(path)) => {
            let text = QrDecoder::new().decode_file(&path)?;
            info!(path = %path.display(), %text, "Scanned QR payload");
            let payload = split_payload(&text, scheme, &config.friend_ids())?;
            (payload.code, Some(payload.friend_id))
        }
        (None, None) => return Err(Error::Other("one of --ts or --image is required".into())),
    };

    let millis = char_to_millis(&code, scheme.dictionary())?;
    Ok(render_decoded(&DecodedTimestamp {
        code,
        friend_id,
        scheme,
        millis,
    }))
}

fn emit(rendered: &Rendered, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&rendered.json)?);
    } else {
        for line in &rendered.human {
            println!("{line}");
        }
    }
    Ok(())
}
