pub type Result<T> = std::result::Result<T, Error>;

/// Failure kinds of a single render.
///
/// Every variant is terminal for that render: the adapter converts it into an
/// inline error block and nothing propagates to the host.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("diagram renderer is not available")]
    RendererUnavailable,

    #[error("theme \"{requested}\" not found. Available themes: {available}")]
    ThemeNotFound { requested: String, available: String },

    #[error("diagram render failed: {message}")]
    RenderFailed { message: String },

    #[error("no <svg> element found in rendered output")]
    NoSvgInOutput,

    #[error("could not rewrite rendered output: {message}")]
    Rewrite { message: String },
}
