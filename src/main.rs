use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use openapi_compose::diagnostics::{self, error_message};
use openapi_compose::{DocumentConfig, OpenApi, Reference, sample};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "openapi-compose")]
#[command(about = "Compose and normalize OpenAPI 3.0 documents", long_about = None)]
struct Cli {
    /// More logging on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Args)]
struct OutputArgs {
    #[arg(long)]
    pretty: bool,

    #[arg(long, default_value_t = 2)]
    indent: usize,
}

impl OutputArgs {
    fn config(&self) -> DocumentConfig {
        DocumentConfig {
            pretty: self.pretty,
            indent: self.indent,
            ..DocumentConfig::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bundled petstore document.
    Sample {
        /// Version written to the `openapi` field.
        #[arg(long, default_value = openapi_compose::config::DEFAULT_OPENAPI_VERSION)]
        openapi_version: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Decode a document and print it re-encoded. Its `openapi` field is
    /// kept as read.
    Normalize {
        #[arg(long)]
        json: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show how a `$ref` string is interpreted.
    Pointer { pointer: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    diagnostics::init(cli.verbose);

    match cli.cmd {
        Commands::Sample {
            openapi_version,
            output,
        } => {
            let config = output.config();
            let mut doc = sample::petstore();
            doc.object.openapi = openapi_version;
            let text = doc
                .to_json_with(&config)
                .with_context(|| error_message("failed to encode sample document"))?;
            println!("{}", text);
        }
        Commands::Normalize { json, output } => {
            let doc = OpenApi::from_json(&json)
                .with_context(|| error_message("failed to decode document"))?;
            let text = doc
                .to_json_with(&output.config())
                .with_context(|| error_message("failed to encode document"))?;
            println!("{}", text);
        }
        Commands::Pointer { pointer } => match Reference::parse(&pointer) {
            Reference::Component { group, id } => {
                println!("component group={} id={}", group, id);
            }
            Reference::External(target) => {
                println!("external {}", target);
            }
        },
    }

    Ok(())
}
