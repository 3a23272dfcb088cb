use thiserror::Error;

/// Errors that can occur while setting up or finishing a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("image size must be at least 1 pixel, got {0}")]
    InvalidSize(u32),

    #[error("thread count must be at least 1")]
    InvalidThreads,

    #[error("cannot allocate a {width}x{height} frame buffer")]
    BufferSize { width: u32, height: u32 },

    #[error("frame buffer is {width}x{height} but the camera renders {size}x{size}")]
    SizeMismatch { width: u32, height: u32, size: u32 },

    #[error("worker pool has {pool} thread(s) but {threads} were requested")]
    PoolMismatch { pool: usize, threads: usize },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
