use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "fractal-drift", version, about = "Autonomous drift animator for fractal shader parameters (Mandelbrot tour + Julia constant)")]
pub struct Config {
    #[arg(long, default_value_t = 0xF2AC_7A1D)]
    pub seed: u64,

    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    #[arg(long, default_value_t = 30.0)]
    pub seconds: f32,

    #[arg(long, default_value_t = 0.5)]
    pub transition_rate: f32,

    #[arg(long, default_value_t = 1.0)]
    pub dwell: f32,

    #[arg(long, default_value_t = 2.0)]
    pub ease_strength: f32,

    #[arg(long, default_value_t = 0.005)]
    pub center_jitter: f32,

    #[arg(long, default_value_t = 0.5)]
    pub min_zoom: f32,

    #[arg(long, default_value_t = 10.0)]
    pub max_zoom: f32,

    #[arg(long, default_value_t = 0.1)]
    pub c_rate: f32,

    #[arg(long, default_value_t = 10)]
    pub c_frame_interval: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Pace output to wall clock at --fps instead of emitting as fast as
    /// possible.
    #[arg(long, default_value_t = false)]
    pub realtime: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    #[value(alias = "shader")]
    Uniforms,
}
