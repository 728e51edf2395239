use std::io;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;

use rastrs::config::{ConfigError, RenderConfig, USAGE};
use rastrs::{console, export, render_model, FrameBuffer, Model, OrthoProjection};

fn run(config: &RenderConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading {}", config.model.display());
    let model = Model::from_obj(&config.model)?;
    println!(
        "  {} vertices, {} faces",
        model.vertices().len(),
        model.face_count()
    );

    let mut buffer = FrameBuffer::new(config.width, config.height);

    let Some((min, max)) = model.bounds() else {
        println!("Model is empty, writing a blank image");
        export::save(&buffer, &config.output)?;
        return Ok(());
    };

    let projection = OrthoProjection::fit(min, max, config.width, config.height);
    let mut rng = StdRng::seed_from_u64(config.seed);

    println!(
        "Rendering {}x{} ({}, seed {})",
        config.width, config.height, config.mode, config.seed
    );
    let stats = render_model(&mut buffer, &model, &projection, config.mode, &mut rng)?;
    println!("  {} faces drawn", stats.faces);

    export::save(&buffer, &config.output)?;
    println!("Saved {}", config.output.display());

    if config.console {
        console::write_buffer(&mut io::stdout().lock(), &buffer)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let config = match RenderConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(ConfigError::MissingModel) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
