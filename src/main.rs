mod cli;

use std::process::exit;

use imgur_dl::{download_images, Album, AlbumClient, AlbumError, AlbumOptions, Settings};
use tracing_subscriber::EnvFilter;

use crate::cli::{build_cli, DownloadCmd};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .with_writer(std::io::stderr)
        .init();

    let cmd = DownloadCmd::build(&build_cli().get_matches());

    match run(cmd).await {
        Ok(_) => exit(0),
        Err(err) => {
            println!("[ERROR] {}", err);
            exit(1);
        }
    }
}

async fn run(cmd: DownloadCmd) -> Result<(), AlbumError> {
    let client = AlbumClient::new(Settings::default())?;
    let options = AlbumOptions { destination: cmd.destination, use_name: cmd.use_name };
    let album = Album::load(&client, &cmd.url, options).await?;

    println!(
        "📚 {} by {} ({} images)",
        album.title().trim(),
        album.uploader(),
        album.image_count()
    );

    download_images(&client, &album, None).await?;
    Ok(())
}
