use crate::config::PipelineConfig;
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::transliterate::transliterate;
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Options for the encrypt/decrypt commands
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Input file; stdin when `None`
    pub input: Option<PathBuf>,
    /// Output file; stdout when `None`
    pub output: Option<PathBuf>,
    pub pipeline: PipelineConfig,
}

/// Read, transliterate, run the cipher pipeline and write the result.
/// Returns the processed text.
pub fn run_cipher(options: &RunOptions) -> Result<String> {
    // Build first so a bad key fails before any input is consumed
    let pipeline = Pipeline::build(&options.pipeline)?;

    let raw = match &options.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let text = transliterate(&raw);
    debug!("Transliterated {} input bytes to {} letters", raw.len(), text.len());

    let output = pipeline.apply(&text);

    match &options.output {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            writeln!(file, "{}", output)?;
            info!("Wrote {} letters to {}", output.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output)?;
        }
    }

    Ok(output)
}
