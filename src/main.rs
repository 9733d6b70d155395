use clap::Parser;
use generate_md_icons::{cli::Cli, generate, magick::Magick};

fn setup_logger() -> eyre::Result<()> {
    use tracing::Level;
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    Registry::default()
        .with(LevelFilter::from(Level::INFO))
        .with(layer().with_ansi(true).with_target(false).without_time())
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    setup_logger()?;

    let args = Cli::parse();
    let magick = Magick::new_with_paths(args.convert_binary, args.mogrify_binary);
    generate::generate(&magick, &args.md_dir).await
}
