use clap::{Parser, Subcommand};
use modelfetch::catalog::{docs, CatalogClient, ModelMetadata};
use modelfetch::config::Config;
use modelfetch::download::{self, DownloadOutcome, DownloadRequest};
use modelfetch::error::Result;

#[derive(Parser)]
#[command(name = "modelfetch")]
#[command(about = "Fetch catalog models into Stable Diffusion WebUI folders", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview model metadata for a catalog page URL
    Preview { url: String },
    /// Download the model behind a catalog page URL
    Download {
        url: String,
        /// Skip saving the preview image sidecar
        #[arg(long)]
        no_image: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let client = CatalogClient::new(&config.catalog.api_base);

    match cli.command {
        Commands::Preview { url } => run_preview(&client, &config, &url).await,
        Commands::Download { url, no_image } => {
            run_download(&client, &config, &url, no_image).await
        }
    }
}

async fn run_preview(client: &CatalogClient, config: &Config, url: &str) -> Result<()> {
    let (banner, footer) = docs::fetch_docs(client.http(), &config.catalog.api_base).await;
    println!("{banner}\n");

    let meta = client.fetch_detail(url).await?;
    print_metadata(&meta);

    if meta.downloadable() {
        println!("\nDownload available: {}", meta.file_name);
        println!("Run: modelfetch download {url}");
    } else {
        println!("\nNo downloadable file published for this model");
    }

    println!("\n{footer}");
    Ok(())
}

async fn run_download(
    client: &CatalogClient,
    config: &Config,
    url: &str,
    no_image: bool,
) -> Result<()> {
    let meta = client.fetch_detail(url).await?;

    let image = if no_image {
        None
    } else {
        match meta.image_url.as_deref() {
            Some(image_url) => client.fetch_preview_image(image_url).await,
            None => None,
        }
    };

    let request = DownloadRequest::from_metadata(&meta, image);
    let outcome = download::run(&request, config);
    println!("{outcome}");

    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_metadata(meta: &ModelMetadata) {
    println!("Name:          {}", meta.name);
    println!("Type:          {}", meta.category);
    println!("Trigger words: {}", meta.trained_words.join(", "));
    println!("Author:        {}", meta.creator);
    println!("Tags:          {}", meta.tags.join(", "));
    println!("Last updated:  {}", meta.updated_at.to_rfc3339());
    if !meta.description.is_empty() {
        println!("\n{}", meta.description);
    }
}
