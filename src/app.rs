use std::io::{BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::Context;

use crate::config::{Config, OutputFormat};
use crate::rig::{DriftRig, RigOptions, ShaderParams};

pub fn run(cfg: Config) -> anyhow::Result<()> {
    if cfg.fps == 0 {
        return Err(anyhow::anyhow!("--fps must be at least 1"));
    }
    if !cfg.seconds.is_finite() || cfg.seconds <= 0.0 {
        return Err(anyhow::anyhow!(
            "--seconds must be positive, got {}",
            cfg.seconds
        ));
    }

    let opts = RigOptions {
        seed: cfg.seed,
        transition_rate: cfg.transition_rate,
        dwell_seconds: cfg.dwell,
        ease_strength: cfg.ease_strength,
        center_jitter: cfg.center_jitter,
        min_zoom: cfg.min_zoom,
        max_zoom: cfg.max_zoom,
        c_rate: cfg.c_rate,
        c_frame_interval: cfg.c_frame_interval,
        ..RigOptions::default()
    };
    let mut rig = DriftRig::new(&opts).context("build drift rig")?;

    let dt = 1.0 / cfg.fps as f32;
    let frames = (cfg.seconds * cfg.fps as f32).ceil() as u64;
    log::info!(
        "driving {} frames at {} fps (seed {:#x})",
        frames,
        cfg.fps,
        cfg.seed
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cfg.format == OutputFormat::Csv {
        writeln!(out, "t,center_x,center_y,zoom,c_x,c_y,c_z,c_w").context("write header")?;
    }

    let frame_budget = Duration::from_secs_f32(dt);
    let mut t = 0.0f32;
    for _ in 0..frames {
        let frame_start = Instant::now();
        t += dt;
        let params = rig.tick(dt);
        write_row(&mut out, cfg.format, t, &params).context("write frame")?;

        if cfg.realtime {
            out.flush().context("flush frame")?;
            let elapsed = frame_start.elapsed();
            if elapsed < frame_budget {
                std::thread::sleep(frame_budget - elapsed);
            }
        }
    }
    out.flush().context("flush output")?;
    Ok(())
}

fn write_row(
    out: &mut impl Write,
    format: OutputFormat,
    t: f32,
    params: &ShaderParams,
) -> std::io::Result<()> {
    let [cx, cy] = params.center;
    let [jx, jy, jz, jw] = params.c;
    let zoom = params.zoom;
    match format {
        OutputFormat::Csv => {
            writeln!(out, "{t:.4},{cx},{cy},{zoom},{jx},{jy},{jz},{jw}")
        }
        OutputFormat::Uniforms => {
            writeln!(
                out,
                "t={t:.4} _Center=({cx}, {cy}) _Zoom={zoom} _c=({jx}, {jy}, {jz}, {jw})"
            )
        }
    }
}
