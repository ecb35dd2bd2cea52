//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::Settings;
use crate::app::ExtractInteractor;
use crate::cli::args::{AudioEffectArgs, CommonArgs, ImageArgs, MotionArgs};
use crate::cli::Commands;
use crate::domain::errors::DomainError;
use crate::domain::model::{Effects, ExtractionRequest};

/// Turn parsed arguments into a raw request, filling format defaults from settings
pub fn build_request(command: &Commands, settings: &Settings) -> Result<ExtractionRequest, DomainError> {
    let common = command.common();
    let mut request = ExtractionRequest::new(command.method(), common.filepath.clone());
    apply_common(&mut request, common, settings);
    request.audio_format = settings.audio_format;
    request.image_format = settings.image_format;

    match command {
        Commands::Audio(args) => {
            apply_audio(&mut request.effects, &args.audio);
            apply_motion(&mut request.effects, &args.motion);
            if let Some(format) = args.audio_format {
                request.audio_format = format;
            }
        }
        Commands::Clip(args) => {
            apply_audio(&mut request.effects, &args.audio);
            apply_image(&mut request, &args.image)?;
            apply_motion(&mut request.effects, &args.motion);
        }
        Commands::Frames(args) => {
            apply_image(&mut request, &args.image)?;
            request.capture_rate = args.capture_rate;
            if let Some(format) = args.image_format {
                request.image_format = format;
            }
        }
        Commands::Gif(args) => {
            apply_image(&mut request, &args.image)?;
            apply_motion(&mut request.effects, &args.motion);
        }
    }

    Ok(request)
}

/// Resolve the command into a job and print it as JSON unless quiet
pub fn execute(command: &Commands, settings: &Settings, interactor: &ExtractInteractor) -> Result<()> {
    let request = build_request(command, settings)?;
    info!("Resolving {} extraction for {}", request.method, request.video_path.display());

    let job = interactor
        .resolve(request)
        .with_context(|| format!("Failed to prepare {} extraction", command.method()))?;

    if !command.common().quiet {
        let json = serde_json::to_string_pretty(&job).context("Failed to serialize resolved job to JSON")?;
        println!("{}", json);
    }

    Ok(())
}

fn apply_common(request: &mut ExtractionRequest, common: &CommonArgs, settings: &Settings) {
    request.start_time = common.start_time.clone();
    request.stop_time = common.stop_time.clone();
    request.fps = common.fps;
    request.destdir = common.destdir.clone();
    request.filename = common.filename.clone();
    request.overwrite = common.overwrite || settings.overwrite;
}

fn apply_audio(effects: &mut Effects, args: &AudioEffectArgs) {
    effects.volume = args.volume;
    effects.normalize = args.normalize;
}

fn apply_image(request: &mut ExtractionRequest, args: &ImageArgs) -> Result<(), DomainError> {
    request.dimensions = args.dimensions()?;
    request.resize = args.resize;
    request.effects.rotate = args.rotate;
    request.effects.monochrome = args.monochrome;
    Ok(())
}

fn apply_motion(effects: &mut Effects, args: &MotionArgs) {
    effects.speed = args.speed;
    effects.bounce = args.bounce;
    effects.reverse = args.reverse;
}
