//! Desktop preview app for strip-composer effects
//!
//! Renders effect templates and named palettes in a window with
//! interactive controls. Frames are produced on a synthetic clock, one
//! per frame delay, straight through the [`Effect`] trait.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use rand::{SeedableRng, rngs::SmallRng};
use strip_composer::{
    BrightnessLevel, Duration, Effect, FrameContext, Palette, PaletteName, PaletteParams,
    PixelBuffer, Rgb,
    color::{BLACK, PURPLE},
    effect::{
        ChaseEffect, ChaseMode, FadeEffect, PulseEffect, PulseStyle, RainbowDirection,
        RainbowEffect, RandomColorEffect, SegmentEffect, SequenceEffect, SineWave,
        StaticColorEffect, TwinkleEffect,
    },
    frame_clock::DEFAULT_FRAME_DELAY,
};

/// Maximum number of LEDs the preview supports
const MAX_LEDS: usize = 180;

/// Palette capacity
const PALETTE_SIZE: usize = 32;

/// Default number of LEDs in the simulated strip
const DEFAULT_LED_COUNT: usize = 60;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Size of each palette swatch in pixels
const SWATCH_SIZE: f32 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EffectKind {
    Static,
    Sequence,
    Segments,
    Rainbow,
    RainbowMirrored,
    Blink,
    Breathe,
    Wipe,
    Chase,
    Scanner,
    Random,
    Twinkle,
    Sine,
    FadeOut,
}

impl EffectKind {
    const ALL: [Self; 14] = [
        Self::Static,
        Self::Sequence,
        Self::Segments,
        Self::Rainbow,
        Self::RainbowMirrored,
        Self::Blink,
        Self::Breathe,
        Self::Wipe,
        Self::Chase,
        Self::Scanner,
        Self::Random,
        Self::Twinkle,
        Self::Sine,
        Self::FadeOut,
    ];

    const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Sequence => "sequence",
            Self::Segments => "segments",
            Self::Rainbow => "rainbow",
            Self::RainbowMirrored => "rainbow_mirrored",
            Self::Blink => "blink",
            Self::Breathe => "breathe",
            Self::Wipe => "wipe",
            Self::Chase => "chase",
            Self::Scanner => "scanner",
            Self::Random => "random",
            Self::Twinkle => "twinkle",
            Self::Sine => "sine",
            Self::FadeOut => "fade_out",
        }
    }

    fn build(self, color: Rgb, seed: u64) -> Box<dyn Effect> {
        let rng = SmallRng::seed_from_u64(seed);
        match self {
            Self::Static => Box::new(StaticColorEffect::new(color)),
            Self::Sequence => Box::new(SequenceEffect),
            Self::Segments => Box::new(SegmentEffect::new(5, BLACK)),
            Self::Rainbow => Box::new(RainbowEffect::default()),
            Self::RainbowMirrored => Box::new(
                RainbowEffect::default().with_direction(RainbowDirection::Mirrored),
            ),
            Self::Blink => Box::new(PulseEffect::new(
                Duration::from_millis(1000),
                PulseStyle::Blink,
            )),
            Self::Breathe => Box::new(PulseEffect::default()),
            Self::Wipe => Box::new(ChaseEffect::new(ChaseMode::Wipe)),
            Self::Chase => Box::new(ChaseEffect::new(ChaseMode::Chase).with_length(4)),
            Self::Scanner => Box::new(ChaseEffect::new(ChaseMode::Scanner).with_length(3)),
            Self::Random => Box::new(RandomColorEffect::new(rng)),
            Self::Twinkle => Box::new(TwinkleEffect::new(rng)),
            Self::Sine => Box::new(SineWave::default()),
            Self::FadeOut => Box::new(FadeEffect::out(32)),
        }
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Strip Composer Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "strip-composer-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// Simulated strip contents
    buffer: PixelBuffer<MAX_LEDS>,
    /// Working palette
    palette: Palette<PALETTE_SIZE>,
    /// Running effect
    effect: Box<dyn Effect>,
    /// Palette generator for harmonies
    rng: SmallRng,

    // UI state
    effect_kind: EffectKind,
    palette_name: PaletteName,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Synthetic time the last frame was rendered at
    last_frame_ms: u64,
    /// Frames rendered since the effect started
    frame_index: u32,
    /// Wall-clock reference for delta time
    last_tick: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Brightness step, 1..=10
    brightness: u8,
    /// Color for the static effect
    color: [u8; 3],
    /// LED pixel size for display
    led_size: f32,
    /// Number of LEDs to display
    led_count: usize,
    /// Inputs for parameterized palettes
    params: PaletteParams,
}

impl PreviewApp {
    fn new() -> Self {
        let effect_kind = EffectKind::Rainbow;
        let palette_name = PaletteName::ThreeColors;
        let params = PaletteParams {
            num_colors: 16,
            ..PaletteParams::default()
        };
        let mut rng = SmallRng::seed_from_u64(0);
        let palette = palette_name
            .build(&params, &mut rng)
            .unwrap_or_default();
        let buffer = match PixelBuffer::new(DEFAULT_LED_COUNT, PURPLE) {
            Ok(buffer) => buffer,
            Err(err) => panic!("default strip does not fit: {err}"),
        };

        Self {
            buffer,
            palette,
            effect: effect_kind.build(PURPLE, 0),
            rng,
            effect_kind,
            palette_name,
            t_ms: 0,
            last_frame_ms: 0,
            frame_index: 0,
            last_tick: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            brightness: 10,
            color: [PURPLE.r, PURPLE.g, PURPLE.b],
            led_size: LED_SIZE,
            led_count: DEFAULT_LED_COUNT,
            params,
        }
    }

    fn color(&self) -> Rgb {
        Rgb::new(self.color[0], self.color[1], self.color[2])
    }

    /// Restart the selected effect from frame zero
    fn restart_effect(&mut self) {
        self.effect = self.effect_kind.build(self.color(), self.t_ms);
        self.effect.reset();
        self.frame_index = 0;
        self.t_ms = 0;
        self.last_frame_ms = 0;
    }

    fn rebuild_palette(&mut self) {
        match self.palette_name.build(&self.params, &mut self.rng) {
            Ok(palette) => self.palette = palette,
            Err(err) => eprintln!("palette {}: {err}", self.palette_name.as_str()),
        }
    }

    fn resize(&mut self) {
        match PixelBuffer::new(self.led_count, PURPLE) {
            Ok(buffer) => self.buffer = buffer,
            Err(err) => eprintln!("resize: {err}"),
        }
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_tick);
        self.last_tick = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Render every frame that became due since the last repaint
    fn advance_frames(&mut self) {
        let delay = DEFAULT_FRAME_DELAY.as_millis();
        while self.t_ms.saturating_sub(self.last_frame_ms) >= delay {
            self.last_frame_ms += delay;
            let ctx = FrameContext {
                index: self.frame_index,
                elapsed: Duration::from_millis(self.last_frame_ms),
            };
            self.effect
                .render(ctx, self.buffer.as_mut_slice(), &self.palette);
            self.frame_index = self.frame_index.wrapping_add(1);
        }
    }

    fn displayed_frame(&self) -> Vec<Rgb> {
        let level = BrightnessLevel::from_index(self.brightness.saturating_sub(1))
            .unwrap_or(BrightnessLevel::FULL);
        self.buffer.with_brightness(level).as_slice().to_vec()
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.advance_frames();
        let frame = self.displayed_frame();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Restart").clicked() {
                            self.restart_effect();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                    });

                    ui.add_space(4.0);

                    let secs = self.t_ms / 1000;
                    let ms = self.t_ms % 1000;
                    ui.label(format!("Time: {secs}.{ms:03}s  frame {}", self.frame_index));

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <LayoutControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("LEDs:");
                        let old_led_count = self.led_count;
                        ui.add(egui::Slider::new(&mut self.led_count, 1usize..=MAX_LEDS));
                        if self.led_count != old_led_count {
                            self.resize();
                        }
                    });
                });
                // </LayoutControls>
            });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                ui.label("Effect:");
                let mut selected = self.effect_kind;
                egui::ComboBox::from_id_salt("effect_selector")
                    .selected_text(self.effect_kind.as_str())
                    .show_ui(ui, |ui| {
                        for kind in EffectKind::ALL {
                            ui.selectable_value(&mut selected, kind, kind.as_str());
                        }
                    });
                if selected != self.effect_kind {
                    self.effect_kind = selected;
                    self.restart_effect();
                }

                ui.add_space(8.0);

                ui.label("Palette:");
                let mut selected = self.palette_name;
                egui::ComboBox::from_id_salt("palette_selector")
                    .selected_text(self.palette_name.as_str())
                    .show_ui(ui, |ui| {
                        for name in PaletteName::ALL {
                            ui.selectable_value(&mut selected, name, name.as_str());
                        }
                    });
                if selected != self.palette_name {
                    self.palette_name = selected;
                    self.rebuild_palette();
                }
                if ui.button("🎲").clicked() {
                    self.rebuild_palette();
                }
            });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Color:");
                let old_color = self.color;
                if ui.color_edit_button_srgb(&mut self.color).changed()
                    && old_color != self.color
                    && self.effect_kind == EffectKind::Static
                {
                    self.restart_effect();
                }

                ui.add_space(8.0);

                ui.label("Brightness:");
                ui.add(egui::Slider::new(&mut self.brightness, 1u8..=10u8));

                ui.add_space(8.0);

                ui.label("Palette size:");
                let old_num_colors = self.params.num_colors;
                ui.add(egui::Slider::new(&mut self.params.num_colors, 1usize..=PALETTE_SIZE));
                if self.params.num_colors != old_num_colors {
                    self.rebuild_palette();
                }
            });

            ui.add_space(8.0);

            // === Palette swatches ===
            #[allow(clippy::cast_precision_loss)]
            let swatch_width = self.palette.len() as f32 * (SWATCH_SIZE + LED_GAP);
            let (response, painter) = ui.allocate_painter(
                egui::vec2(swatch_width.max(1.0), SWATCH_SIZE),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;
            #[allow(clippy::cast_precision_loss)]
            for (i, color) in self.palette.iter().enumerate() {
                let x = origin.x + i as f32 * (SWATCH_SIZE + LED_GAP);
                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, origin.y),
                    egui::vec2(SWATCH_SIZE, SWATCH_SIZE),
                );
                painter.rect_filled(rect, 2.0, egui::Color32::from_rgb(color.r, color.g, color.b));
            }

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = frame.len().div_ceil(leds_per_row);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, height), egui::Sense::hover());
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                painter.rect_filled(rect, 3.0, egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b));
            }
        });
    }
}
