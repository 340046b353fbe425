use crate::cipher::{make_cipher, Cipher, CipherMode, CipherType};
use crate::config::PipelineConfig;
use crate::error::{CipherError, Result};
use crate::pipeline::chunk::apply_chunked;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Ordered chain of keyed ciphers, ready to run in one mode.
///
/// For decryption the stages are stored in reverse so that the last cipher
/// applied during encryption is undone first.
pub struct Pipeline {
    mode: CipherMode,
    stages: Vec<Box<dyn Cipher>>,
    chunks: usize,
    slow_stage_warning: Duration,
    /// Only built when a Caesar stage is present
    pool: Option<rayon::ThreadPool>,
}

/// Worker threads for a chunk count: never more than the machine offers
pub fn worker_thread_count(chunks: usize) -> usize {
    let available = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    chunks.clamp(1, available)
}

impl Pipeline {
    /// Construct every cipher in the configuration.
    ///
    /// Fails on the first invalid key; no partially built pipeline is returned.
    pub fn build(config: &PipelineConfig) -> Result<Self> {
        let mut stages = Vec::with_capacity(config.stages.len());
        for (i, stage) in config.stages.iter().enumerate() {
            match make_cipher(stage.cipher, &stage.key) {
                Ok(cipher) => stages.push(cipher),
                Err(e) => {
                    warn!("Stage {} ({}) rejected: {}", i, stage.cipher, e);
                    return Err(e);
                }
            }
        }

        if config.mode == CipherMode::Decrypt {
            stages.reverse();
        }

        let chunks = config.effective_chunks();
        let pool = if stages.iter().any(|c| c.cipher_type() == CipherType::Caesar) {
            let threads = worker_thread_count(chunks);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("cipherchain-chunk-{}", i))
                .build()
                .map_err(|e| CipherError::WorkerPool(e.to_string()))?;
            Some(pool)
        } else {
            None
        };

        info!(
            "Built {} pipeline with {} stage(s), {} chunk(s) on {} worker thread(s)",
            config.mode,
            stages.len(),
            chunks,
            pool.as_ref().map_or(0, |p| p.current_num_threads())
        );

        Ok(Self {
            mode: config.mode,
            stages,
            chunks,
            slow_stage_warning: Duration::from_millis(config.slow_stage_warning_ms),
            pool,
        })
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn chunks(&self) -> usize {
        self.chunks
    }

    /// Threads in the chunk worker pool; zero when no stage needs one
    pub fn worker_threads(&self) -> usize {
        self.pool.as_ref().map_or(0, |p| p.current_num_threads())
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Cipher types in the order they will be applied
    pub fn stage_types(&self) -> Vec<CipherType> {
        self.stages.iter().map(|c| c.cipher_type()).collect()
    }

    /// Run the text through every stage in order.
    ///
    /// Caesar stages are split across the chunk workers; Playfair and
    /// Vigenere depend on position so they run over the whole buffer.
    pub fn apply(&self, input: &str) -> String {
        let mut text = input.to_string();
        for (i, cipher) in self.stages.iter().enumerate() {
            let started = Instant::now();
            text = match (cipher.cipher_type(), &self.pool) {
                (CipherType::Caesar, Some(pool)) => {
                    apply_chunked(cipher.as_ref(), &text, self.mode, pool, self.chunks)
                }
                _ => cipher.apply_cipher(&text, self.mode),
            };
            let elapsed = started.elapsed();
            debug!(
                "Stage {} ({}) produced {} bytes in {:?}",
                i,
                cipher.cipher_type(),
                text.len(),
                elapsed
            );
            if elapsed > self.slow_stage_warning {
                warn!(
                    "Stage {} ({}) took {:?}, longer than the {:?} warning threshold",
                    i,
                    cipher.cipher_type(),
                    elapsed,
                    self.slow_stage_warning
                );
            }
        }
        text
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("mode", &self.mode)
            .field("stages", &self.stage_types())
            .field("chunks", &self.chunks)
            .finish()
    }
}

/// Build a pipeline from `config` and run `input` through it
pub fn run_pipeline(config: &PipelineConfig, input: &str) -> Result<String> {
    let pipeline = Pipeline::build(config)?;
    Ok(pipeline.apply(input))
}
