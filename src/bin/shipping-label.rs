// shipping-label: render a 6x4 inch shipping label to a PDF file

use clap::Parser;
use log::info;
use shipping_label::{
    AddressBlock, LabelConfig, LabelDocumentBuilder, LabelError, PostalAddress, ShipmentRequest,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use uuid::Uuid;

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Render a 6x4 inch shipping label as a PDF")]
struct Args {
    /// Shipment request JSON (`{"shipment": {"to_address": {...}}}`); `-` reads stdin
    #[arg(short, long, conflicts_with_all = ["name", "street1", "street2", "city", "state", "zip"])]
    request: Option<PathBuf>,

    /// Recipient name
    #[arg(long)]
    name: Option<String>,

    /// First street line
    #[arg(long)]
    street1: Option<String>,

    /// Second street line (apartment, suite, ...)
    #[arg(long)]
    street2: Option<String>,

    #[arg(long)]
    city: Option<String>,

    #[arg(long)]
    state: Option<String>,

    #[arg(long)]
    zip: Option<String>,

    /// JSON configuration file; when omitted the return address is read from
    /// RETURN_ADDRESS_* environment variables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory to write the label into, as label_<id>.pdf
    #[arg(short = 'd', long, default_value = ".")]
    out_dir: PathBuf,

    /// Exact output path; overrides --out-dir
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn read_request(path: &Path) -> Result<ShipmentRequest, LabelError> {
    let json = if path.as_os_str() == "-" {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .map_err(|e| LabelError::InvalidInput(format!("can't read request from stdin: {e}")))?;
        json
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            LabelError::InvalidInput(format!("can't read request {}: {e}", path.display()))
        })?
    };
    ShipmentRequest::from_json(&json)
}

fn destination(args: &Args) -> Result<AddressBlock, LabelError> {
    if let Some(path) = &args.request {
        return read_request(path)?.destination();
    }

    let address = PostalAddress {
        name: args.name.clone(),
        street1: args.street1.clone(),
        street2: args.street2.clone(),
        city: args.city.clone(),
        state: args.state.clone(),
        zip: args.zip.clone(),
        ..Default::default()
    };
    Ok(address.to_block())
}

fn run(args: Args) -> Result<PathBuf, LabelError> {
    let config = match &args.config {
        Some(path) => LabelConfig::load(path)?,
        None => LabelConfig::from_env(),
    };

    let destination = destination(&args)?;
    let builder = LabelDocumentBuilder::new(config);
    let label = builder.build(&destination)?;

    let path = args.output.clone().unwrap_or_else(|| {
        args.out_dir
            .join(format!("label_{}.pdf", Uuid::new_v4().simple()))
    });
    label.save(&path)?;
    info!("wrote {}", path.display());
    Ok(path)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
