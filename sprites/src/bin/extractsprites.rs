use {
    anyhow::{Context as _, Result as Anyhow},
    camino::{Utf8Path as Path, Utf8PathBuf as PathBuf},
    clap::Parser,
    sprites::{write, Sprites},
};

/// Extracts every sprite of a sprite sheet container to numbered PNGs.
#[derive(Debug, Parser)]
#[command(version)]
struct Config {
    /// Sprite container to read
    input: PathBuf,

    /// Directory for the PNGs; created if missing
    out_dir: PathBuf,

    /// Stop at the first sprite that fails to validate or decode
    #[arg(long)]
    strict: bool,

    /// Print the sprite headers to stdout; nothing is decoded, validated or written
    #[arg(long)]
    list: bool,

    /// Debug output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Warnings and errors only
    #[arg(short, long)]
    quiet: bool,

    /// Also write the log to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Config {
    fn level(&self) -> log::LevelFilter {
        if self.verbose    {log::LevelFilter::Debug}
        else if self.quiet {log::LevelFilter::Warn}
        else               {log::LevelFilter::Info}
    }
}

fn main() -> Anyhow<()> {
    let config = Config::parse();
    log_init(config.level(), config.log_file.as_deref())?;
    extract(&config)
}

fn extract(config: &Config) -> Anyhow<()> {
    let base = write::base_name(&config.input);
    log::info!("{base}");

    let file = std::fs::File::open(&config.input)
        .with_context(|| format!("opening {}", config.input))?;
    let sprites = Sprites::new(std::io::BufReader::new(file))
        .with_context(|| format!("reading {}", config.input))?
        .strict(config.strict);
    let total = sprites.sprite_count();

    if config.list {
        return list(config, sprites)
    }

    if total != 0 {
        std::fs::create_dir_all(&config.out_dir)
            .with_context(|| format!("creating {}", config.out_dir))?;
    }

    let mut failed = 0;
    for result in sprites {
        let sprite = match result {
            Ok(sprite) => sprite,
            Err(e) if e.is_fatal() || config.strict => {
                return Err(e).with_context(|| format!("reading {}", config.input))
            }
            Err(e) => {
                log::error!("{e}");
                failed += 1;
                continue;
            }
        };

        let path = write::output_path(&config.out_dir, base, sprite.index);
        write::save(&sprite.image, &path)
            .with_context(|| format!("writing {path}"))?;
        log::info!("sprite {}: wrote {path}", sprite.index);
    }

    if failed != 0 {
        log::warn!("{failed} of {total} sprites failed");
    }

    Ok(())
}

fn list(config: &Config, sprites: Sprites<impl std::io::Read>) -> Anyhow<()> {
    for result in sprites.headers() {
        let (index, header) = result.with_context(|| format!("reading {}", config.input))?;
        println!("{}", header.listing(index));
    }
    Ok(())
}

fn log_init(level: log::LevelFilter, file: Option<&Path>) -> Anyhow<()> {
    use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ));
    if let Some(path) = file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating log file {path}"))?;
        loggers.push(WriteLogger::new(level, simplelog::Config::default(), file));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}
