//! Desktop preview app for strip-animations
//!
//! Drives the animations through a `FrameScheduler` on a simulated strip,
//! with the ambient sensors and the audio input replaced by UI controls.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use strip_animations::{
    AmbientState, Animation, AnimationId, AnimationSlot, AudioFeatures, DarknessSwitch, Duration,
    FrameContext, FrameScheduler, Instant, OutputDriver, Rgb, RotatingCollection, SyntheticAudio,
};

/// Number of LEDs in the simulated strip
const LEDS: usize = 60;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Default beat interval of the synthetic audio (120 BPM)
const DEFAULT_BPM: u32 = 120;

/// Daylight rotation of the combined day/night entry
const DAY_ROTATION: [AnimationId; 3] = [
    AnimationId::Plasma,
    AnimationId::RainbowGlitter,
    AnimationId::Fireworks,
];

/// Time each daylight animation stays on
const DAY_DWELL: Duration = Duration::from_secs(10);

const DAY_NIGHT_NAME: &str = "day_night_rotation";

type DayNight = DarknessSwitch<AnimationSlot<LEDS>, RotatingCollection<'static, LEDS, 3>>;

/// Fairy dust at night, the daylight rotation otherwise
///
/// The rotation children are leaked once; the app keeps the switch for its
/// whole lifetime.
fn day_night(color: Rgb) -> DayNight {
    let [first, second, third] = DAY_ROTATION.map(|id| -> &'static mut dyn Animation<LEDS> {
        Box::leak(Box::new(id.to_slot::<LEDS>(color)))
    });
    let rotation = RotatingCollection::new(DAY_DWELL, first)
        .with(second)
        .with(third);
    DarknessSwitch::new(AnimationId::FairyDust.to_slot(color), rotation)
}

/// What the scheduler drives: one registry animation or the day/night switch
enum PreviewAnimation {
    Single(AnimationSlot<LEDS>),
    DayNight(DayNight),
}

impl Animation<LEDS> for PreviewAnimation {
    fn init(&mut self, ctx: &mut FrameContext<'_, LEDS>) {
        match self {
            Self::Single(animation) => animation.init(ctx),
            Self::DayNight(animation) => animation.init(ctx),
        }
    }

    fn run(&mut self, ctx: &mut FrameContext<'_, LEDS>) -> Duration {
        match self {
            Self::Single(animation) => animation.run(ctx),
            Self::DayNight(animation) => animation.run(ctx),
        }
    }
}

/// Keeps the last frame pushed by the scheduler for painting
#[derive(Default)]
struct PreviewOutput {
    frame: Vec<Rgb>,
}

impl OutputDriver for PreviewOutput {
    fn write(&mut self, colors: &[Rgb]) {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Strip Animations Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "strip-animations-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    scheduler: FrameScheduler<PreviewOutput, PreviewAnimation, LEDS>,
    audio: SyntheticAudio,
    /// Day/night switch while another animation is selected
    parked_day_night: Option<DayNight>,

    /// Currently selected animation ID, `None` for the day/night entry
    animation_id: Option<AnimationId>,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Color for the solid color animation (RGB)
    color: [u8; 3],
    /// Simulated darkness sensor
    dark: bool,
    /// Simulated 12-bit light level
    light_level: u16,
    /// Simulated battery gauge, `None` when disabled
    battery: Option<u8>,
    /// Whether the synthetic audio input is connected
    audio_enabled: bool,
    bpm: u32,
    /// LED pixel size for display
    led_size: f32,
    /// Set when the animation must be re-initialized before the next tick
    needs_init: bool,
}

impl PreviewApp {
    fn new() -> Self {
        let initial_color = Rgb {
            r: 255,
            g: 180,
            b: 100,
        };
        let initial_animation = AnimationId::Rainbow;

        Self {
            scheduler: FrameScheduler::new(
                PreviewAnimation::Single(initial_animation.to_slot(initial_color)),
                PreviewOutput::default(),
            ),
            audio: SyntheticAudio::new(),
            parked_day_night: Some(day_night(initial_color)),
            animation_id: Some(initial_animation),
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            color: [initial_color.r, initial_color.g, initial_color.b],
            dark: false,
            light_level: 2048,
            battery: Some(80),
            audio_enabled: true,
            bpm: DEFAULT_BPM,
            led_size: LED_SIZE,
            needs_init: true,
        }
    }

    fn color(&self) -> Rgb {
        Rgb {
            r: self.color[0],
            g: self.color[1],
            b: self.color[2],
        }
    }

    fn ambient(&self) -> AmbientState {
        let mut ambient = AmbientState::new(self.dark).with_light_level(self.light_level);
        ambient.battery = self.battery;
        ambient
    }

    fn change_animation(&mut self, animation_id: Option<AnimationId>) {
        let color = self.color();
        let next = match animation_id {
            Some(id) => PreviewAnimation::Single(id.to_slot(color)),
            None => PreviewAnimation::DayNight(
                self.parked_day_night
                    .take()
                    .unwrap_or_else(|| day_night(color)),
            ),
        };

        if let PreviewAnimation::DayNight(previous) = self.scheduler.set_animation(next) {
            self.parked_day_night = Some(previous);
        }
        self.animation_id = animation_id;
        self.needs_init = true;
    }

    fn animation_name(&self) -> &'static str {
        self.animation_id.map_or(DAY_NIGHT_NAME, AnimationId::as_str)
    }

    fn change_bpm(&mut self, bpm: u32) {
        self.bpm = bpm;
        let beat = Duration::from_millis(60_000 / u64::from(bpm.max(1)));
        self.audio = SyntheticAudio::new().with_beat(beat);
    }

    /// Reset time to zero
    fn reset_time(&mut self) {
        self.t_ms = 0;
        self.last_frame = StdInstant::now();
        self.needs_init = true;
    }

    /// Toggle playing state
    fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

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

    /// Run the scheduler if the animation asked for a new frame
    fn step(&mut self) {
        let now = Instant::from_millis(self.t_ms);
        let ambient = self.ambient();

        if self.audio_enabled {
            self.audio.update(now);
        }
        let audio = if self.audio_enabled {
            Some(&mut self.audio as &mut dyn AudioFeatures)
        } else {
            None
        };

        if self.needs_init {
            self.needs_init = false;
            self.scheduler.init(now, &ambient, audio);
            return;
        }
        if self.playing && self.scheduler.is_due(now) {
            self.scheduler.tick(now, &ambient, audio);
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.step();
        let frame = self.scheduler.output().frame.clone();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.reset_time();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.toggle_playing();
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        let secs = self.t_ms / 1000;
                        let ms = self.t_ms % 1000;
                        ui.label(format!("Time: {secs}.{ms:03}s"));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(
                            egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true),
                        );
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <SensorControls>
                ui.vertical(|ui| {
                    ui.checkbox(&mut self.dark, "Dark");

                    ui.horizontal(|ui| {
                        ui.label("Light level:");
                        ui.add(egui::Slider::new(&mut self.light_level, 0..=4095));
                    });

                    ui.horizontal(|ui| {
                        let mut has_battery = self.battery.is_some();
                        ui.checkbox(&mut has_battery, "Battery");
                        let mut percent = self.battery.unwrap_or(0);
                        ui.add_enabled(has_battery, egui::Slider::new(&mut percent, 0..=100));
                        self.battery = has_battery.then_some(percent);
                    });

                    ui.horizontal(|ui| {
                        ui.checkbox(&mut self.audio_enabled, "Audio");
                        let mut bpm = self.bpm;
                        ui.add_enabled(
                            self.audio_enabled,
                            egui::Slider::new(&mut bpm, 40..=200).text("BPM"),
                        );
                        if bpm != self.bpm {
                            self.change_bpm(bpm);
                        }
                    });
                });
                // </SensorControls>
            });

            ui.add_space(16.0);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label("Animation:");
                    let mut selected = self.animation_id;
                    egui::ComboBox::from_id_salt("animation_selector")
                        .selected_text(self.animation_name())
                        .show_ui(ui, |ui| {
                            for id in AnimationId::ALL {
                                ui.selectable_value(&mut selected, Some(id), id.as_str());
                            }
                            ui.selectable_value(&mut selected, None, DAY_NIGHT_NAME);
                        });
                    if selected != self.animation_id {
                        self.change_animation(selected);
                    }
                });

                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.label("Color:");
                    let old_color = self.color;
                    if ui.color_edit_button_srgb(&mut self.color).changed()
                        && old_color != self.color
                    {
                        let color = self.color();
                        if let PreviewAnimation::Single(slot) = self.scheduler.animation_mut() {
                            slot.set_color(color);
                        }
                    }
                });

                ui.add_space(4.0);

                let brightness = self.scheduler.canvas().brightness();
                ui.label(format!("Brightness: {brightness}"));
            });

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = LEDS.div_ceil(leds_per_row);
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
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
