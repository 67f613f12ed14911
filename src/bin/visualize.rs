//! Animated Sorting Visualizer
//!
//! Renders the array under sort as a bar chart in a minifb window, repainting
//! after every mutation the selected algorithm reports through its observer.
//! Bar height is proportional to value, scaled against the maximum element.
//! Once the sort finishes the final frame stays on screen until the window is
//! closed or Escape is pressed.
//!
//! Usage:
//!   visualize <file> <mode>
//!
//! where <file> holds one line of whitespace-separated integers and <mode>
//! selects the algorithm: 0=insertion, 1=merge, 2=quick, 3=radix.

use std::env;
use std::process;
use std::thread;
use std::time::Duration;

use minifb::{Key, Window, WindowOptions};

use sort_lab::{input, Algorithm, SortObserver};

/// Rendering parameters; one instance is built per run and threaded through
/// explicitly instead of living in process-wide globals.
#[derive(Debug, Clone)]
struct RenderConfig {
    /// Window width in pixels.
    width: usize,
    /// Window height in pixels.
    height: usize,
    /// Gap between adjacent bars in pixels.
    bar_spacing: usize,
    /// Height of the tallest bar; leaves a small margin at the top.
    max_bar_height: usize,
    /// Pause after each repaint.
    frame_delay: Duration,
    /// Bar fill color (0RGB).
    bar_color: u32,
    /// Background color (0RGB).
    background_color: u32,
}

impl RenderConfig {
    /// Default 800x600 configuration with a per-algorithm frame delay,
    /// slower for algorithms that mutate in coarser steps.
    fn for_algorithm(algorithm: Algorithm) -> Self {
        let frame_delay = match algorithm {
            Algorithm::Insertion => Duration::from_millis(25),
            Algorithm::Merge => Duration::from_millis(50),
            Algorithm::Quick => Duration::from_millis(75),
            Algorithm::Radix => Duration::from_millis(350),
        };

        RenderConfig {
            width: 800,
            height: 600,
            bar_spacing: 1,
            max_bar_height: 590,
            frame_delay,
            bar_color: 0x002596be,
            background_color: 0x00000000,
        }
    }
}

/// Draws bar-chart frames into a minifb window.
struct BarRenderer {
    window: Window,
    buffer: Vec<u32>,
    config: RenderConfig,
    /// Scale reference, fixed at construction; sorting never changes the
    /// maximum element.
    max_value: i32,
}

impl BarRenderer {
    fn new(config: RenderConfig, bars: &[i32]) -> Result<Self, minifb::Error> {
        let window = Window::new(
            "Sort Visualizer",
            config.width,
            config.height,
            WindowOptions::default(),
        )?;

        let max_value = bars.iter().copied().max().unwrap_or(0).max(1);
        let buffer = vec![config.background_color; config.width * config.height];

        Ok(BarRenderer {
            window,
            buffer,
            config,
            max_value,
        })
    }

    /// Repaint the full frame for the given array state.
    fn draw(&mut self, bars: &[i32]) {
        self.buffer.fill(self.config.background_color);

        if !bars.is_empty() {
            let n = bars.len();
            let total_spacing = (n - 1) * self.config.bar_spacing;
            let bar_width = self.config.width.saturating_sub(total_spacing) / n;

            for (i, &value) in bars.iter().enumerate() {
                let bar_height =
                    (value.max(0) as usize * self.config.max_bar_height) / self.max_value as usize;
                let x0 = i * (bar_width + self.config.bar_spacing);
                self.fill_rect(x0, bar_width.max(1), bar_height);
            }
        }

        self.window
            .update_with_buffer(&self.buffer, self.config.width, self.config.height)
            .ok();
    }

    /// Fill a bar of `width` pixels rising `height` pixels from the bottom
    /// edge, clipped to the window.
    fn fill_rect(&mut self, x0: usize, width: usize, height: usize) {
        let y_top = self.config.height.saturating_sub(height);
        for y in y_top..self.config.height {
            for x in x0..(x0 + width).min(self.config.width) {
                self.buffer[y * self.config.width + x] = self.config.bar_color;
            }
        }
    }

    /// Keep the last frame on screen until the window closes or Escape is
    /// pressed.
    fn hold_open(&mut self, bars: &[i32]) {
        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            self.draw(bars);
            thread::sleep(Duration::from_millis(16));
        }
    }
}

impl SortObserver for BarRenderer {
    fn on_step(&mut self, snapshot: &[i32]) {
        self.draw(snapshot);
        thread::sleep(self.config.frame_delay);
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <file> <mode>", args[0]);
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  file    Path to a file holding whitespace-separated integers");
        eprintln!("  mode    0=insertion, 1=merge, 2=quick, 3=radix");
        process::exit(1);
    }

    let path = &args[1];

    let algorithm = match args[2].parse::<usize>().ok().and_then(Algorithm::from_index) {
        Some(a) => a,
        None => {
            eprintln!("Invalid mode '{}': expected 0, 1, 2 or 3", args[2]);
            process::exit(1);
        }
    };

    let mut array = match input::read_integers(path) {
        Ok(array) => array,
        Err(e) => {
            eprintln!("File could not be read, exiting... ({})", e);
            process::exit(1);
        }
    };

    if array.is_empty() {
        eprintln!("Input file holds no integers, nothing to visualize.");
        process::exit(1);
    }

    if algorithm == Algorithm::Radix && array.iter().any(|&v| v < 0) {
        eprintln!("Radix sort requires non-negative input.");
        process::exit(1);
    }

    println!(
        "Visualizing {} on {} elements from {}",
        algorithm.name(),
        array.len(),
        path
    );

    let config = RenderConfig::for_algorithm(algorithm);
    let mut renderer = match BarRenderer::new(config, &array) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to open window: {}", e);
            process::exit(1);
        }
    };

    // Show the unsorted state once before the first mutation
    renderer.draw(&array);
    thread::sleep(renderer.config.frame_delay);

    algorithm.sort_observed(&mut array, &mut renderer);

    renderer.hold_open(&array);
}
