use std::thread;
use std::time::{Duration, Instant};

/// Blocks the sole thread of control between frames.
pub trait Delay {
    fn wait(&mut self, millis: u32);
}

pub struct FrameTimer {
    thread_name: String,
    measure_fps: bool,
    last_fps_print: Instant,
    frames: u32,
}

impl FrameTimer {
    pub fn new(measure_fps: bool) -> FrameTimer {
        let cur_thread = thread::current();
        let thread_name = if let Some(name) = cur_thread.name() {
            name
        } else {
            "unnamed"
        };

        FrameTimer {
            thread_name: thread_name.to_string(),
            measure_fps,
            last_fps_print: Instant::now(),
            frames: 0,
        }
    }

    fn update_fps(&mut self) {
        self.frames += 1;

        if Instant::now() - self.last_fps_print > Duration::from_secs(1) {
            log::debug!("{} FPS: {}", self.thread_name, self.frames);
            self.frames = 0;
            self.last_fps_print = Instant::now();
        }
    }
}

impl Delay for FrameTimer {
    fn wait(&mut self, millis: u32) {
        if self.measure_fps {
            self.update_fps();
        }

        if millis > 0 {
            thread::sleep(Duration::from_millis(millis as u64));
        }
    }
}
