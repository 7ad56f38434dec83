//! Standalone ruler binary.
//!
//! Usage: `frameruler [FRAMES_DIR]`
//!
//! With a directory argument, plays the image files inside it (sorted by
//! name) as a frame stream; the session ends once the stream is exhausted.
//! Without arguments, shows a synthetic
//! moving test pattern with a 100 px grid, handy for trying out calibration.
//! Real capture transports plug in through the `FrameSource` trait and stay
//! outside the core.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use frameruler::{channel, run_ruler, FrameSink, RulerConfig, VideoFrame};

const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn main() -> eframe::Result<()> {
    env_logger::init();

    let (sink, source) = channel();
    match std::env::args().nth(1) {
        Some(dir) => spawn_directory_feed(sink, PathBuf::from(dir)),
        None => spawn_pattern_feed(sink),
    }

    run_ruler(Box::new(source), RulerConfig::default())
}

/// Feed a synthetic test pattern until the UI goes away.
fn spawn_pattern_feed(sink: FrameSink) {
    thread::spawn(move || {
        let (w, h) = (960u32, 540u32);
        let mut tick = 0u32;
        loop {
            let frame = pattern_frame(w, h, tick);
            if sink.send(frame).is_err() {
                break;
            }
            tick = tick.wrapping_add(1);
            thread::sleep(FRAME_INTERVAL);
        }
    });
}

/// A dark gradient with a 100 px grid and a slowly moving vertical bar.
fn pattern_frame(w: u32, h: u32, tick: u32) -> VideoFrame {
    let bar_x = (tick * 2) % w;
    let mut rgb = Vec::with_capacity((w * h * 3) as usize);
    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = if x % 100 == 0 || y % 100 == 0 {
                (70, 70, 70)
            } else if x == bar_x {
                (200, 200, 40)
            } else {
                let shade = (40 + (y * 40 / h)) as u8;
                (20, shade, 60)
            };
            rgb.extend_from_slice(&[r, g, b]);
        }
    }
    VideoFrame::new(w, h, rgb)
}

/// Feed the image files of `dir` once, in name order, then end the stream.
fn spawn_directory_feed(sink: FrameSink, dir: PathBuf) {
    thread::spawn(move || {
        let mut paths: Vec<PathBuf> = match std::fs::read_dir(&dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| {
                    matches!(
                        p.extension().and_then(|e| e.to_str()),
                        Some("png" | "jpg" | "jpeg" | "bmp")
                    )
                })
                .collect(),
            Err(e) => {
                log::error!("cannot read frame directory {:?}: {}", dir, e);
                return;
            }
        };
        paths.sort();
        if paths.is_empty() {
            log::error!("no image frames found in {:?}", dir);
            return;
        }
        log::info!("playing {} frames from {:?}", paths.len(), dir);

        for path in paths {
            let img = match image::open(&path) {
                Ok(img) => img.to_rgb8(),
                Err(e) => {
                    log::warn!("skipping {:?}: {}", path, e);
                    continue;
                }
            };
            let (w, h) = img.dimensions();
            if sink.send(VideoFrame::new(w, h, img.into_raw())).is_err() {
                return;
            }
            thread::sleep(FRAME_INTERVAL);
        }
        // Dropping the sink here marks the stream as exhausted.
    });
}
