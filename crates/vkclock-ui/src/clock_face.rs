use std::time::Duration;

use vkclock_engine::coords::{Rect, Vec2, Viewport};
use vkclock_engine::scene::{DrawCmd, DrawList};
use vkclock_engine::text::{ApproxTextMeasure, TextMeasure};
use vkclock_engine::time::{SchedulerError, TickScheduler, TickTrigger, TimeOfDay, TimeSource};

use crate::constraints::Constraints;
use crate::geometry::{
    angle_to_point, hour_hand_angle, minute_hand_angle, second_hand_angle, ClockGeometry,
    HOUR_ANGLE, MINUTE_ANGLE, NUMERALS,
};
use crate::painter::Painter;
use crate::style::{Dimension, ResolvedStyle, StyleConfig, StyleError, StyleOption, StyleValue};
use crate::widget::Widget;

/// Period of the resynchronization timer.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Primitives produced by one render pass: 12 hour ticks, 60 minute ticks,
/// 12 numerals, 3 hands, the center dot and the face circle.
pub const PRIMITIVES_PER_FRAME: usize = 12 + 60 + 12 + 3 + 1 + 1;

/// Result of [`ClockFace::on_tick`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TickOutcome {
    /// The stored time was refreshed from the time source.
    Updated,
    /// The time source failed; the last known time was kept.
    Skipped,
    /// The trigger arrived while detached and was dropped unread.
    Detached,
}

/// Hand angles in clock degrees (`0°` = 12 o'clock, clockwise).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn at(t: TimeOfDay) -> Self {
        Self {
            hour: hour_hand_angle(t),
            minute: minute_hand_angle(t),
            second: second_hand_angle(t),
        }
    }
}

/// Analog clock face with hour, minute and second hands.
///
/// The widget reads the wall clock through an injected [`TimeSource`] and gets
/// woken by an injected [`TickScheduler`] while attached. Rendering is a pure
/// function of the stored time, size and style.
///
/// # Example
/// ```rust,ignore
/// let mut clock = ClockFace::new(SystemTimeSource::new(), IntervalScheduler::new(tx))
///     .with_density(2.0)
///     .on_time_change(|t| log::info!("now {t}"));
/// clock.attach()?;
/// clock.on_resize(300.0, 300.0);
/// for trigger in rx {
///     clock.handle_trigger(trigger);
///     renderer.execute(&clock.render());
/// }
/// ```
pub struct ClockFace {
    style: StyleConfig,
    density: f32,
    resolved: ResolvedStyle,

    viewport: Viewport,
    sized: bool,
    geometry: ClockGeometry,

    time: Option<TimeOfDay>,
    time_source: Box<dyn TimeSource>,
    scheduler: Box<dyn TickScheduler>,
    registered: bool,

    text: Box<dyn TextMeasure>,
    on_time_change: Option<Box<dyn FnMut(TimeOfDay)>>,
}

impl ClockFace {
    /// Creates a clock with the default style at density 1 and takes an
    /// initial time reading.
    pub fn new(
        time_source: impl TimeSource + 'static,
        scheduler: impl TickScheduler + 'static,
    ) -> Self {
        let style = StyleConfig::default();
        let density = 1.0;
        let time = match time_source.now() {
            Ok(t) => Some(t),
            Err(e) => {
                log::warn!("initial time read failed: {e}");
                None
            }
        };
        Self {
            resolved: ResolvedStyle::resolve(&style, density),
            geometry: ClockGeometry::initial(density),
            style,
            density,
            viewport: Viewport::default(),
            sized: false,
            time,
            time_source: Box::new(time_source),
            scheduler: Box::new(scheduler),
            registered: false,
            text: Box::new(ApproxTextMeasure::default()),
            on_time_change: None,
        }
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self { self.set_style(style); self }
    pub fn with_density(mut self, density: f32) -> Self { self.set_density(density); self }
    pub fn with_text_measure(mut self, text: impl TextMeasure + 'static) -> Self {
        self.text = Box::new(text);
        self
    }

    /// Registers the host hook invoked after every successful tick, before
    /// the host re-renders.
    pub fn on_time_change(mut self, f: impl FnMut(TimeOfDay) + 'static) -> Self {
        self.on_time_change = Some(Box::new(f));
        self
    }

    // ── state ─────────────────────────────────────────────────────────────

    /// Last known time, if any reading has succeeded.
    #[inline]
    pub fn time(&self) -> Option<TimeOfDay> { self.time }
    #[inline]
    pub fn viewport(&self) -> Viewport { self.viewport }
    #[inline]
    pub fn geometry(&self) -> ClockGeometry { self.geometry }
    #[inline]
    pub fn style(&self) -> &StyleConfig { &self.style }
    #[inline]
    pub fn resolved_style(&self) -> &ResolvedStyle { &self.resolved }
    #[inline]
    pub fn density(&self) -> f32 { self.density }
    #[inline]
    pub fn is_attached(&self) -> bool { self.registered }

    /// Hand angles for the current time (midnight when no time is known).
    pub fn hand_angles(&self) -> HandAngles {
        HandAngles::at(self.time.unwrap_or(TimeOfDay::MIDNIGHT))
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Starts the periodic timer and time-change subscription.
    ///
    /// Calling it while already attached is a no-op.
    pub fn attach(&mut self) -> Result<(), SchedulerError> {
        if self.registered {
            log::debug!("clock already attached");
            return Ok(());
        }
        self.scheduler.register(TICK_PERIOD)?;
        self.registered = true;
        log::debug!("clock attached: period={TICK_PERIOD:?}");
        Ok(())
    }

    /// Stops the timer and subscription. Calling it while detached is a no-op.
    pub fn detach(&mut self) {
        if !self.registered {
            log::debug!("clock already detached");
            return;
        }
        self.scheduler.unregister();
        self.registered = false;
        log::debug!("clock detached");
    }

    // ── updates ───────────────────────────────────────────────────────────

    /// Resynchronizes with the wall clock.
    pub fn on_tick(&mut self) -> TickOutcome {
        match self.time_source.now() {
            Ok(t) => {
                self.time = Some(t);
                log::trace!("tick: {t}");
                if let Some(f) = &mut self.on_time_change {
                    f(t);
                }
                TickOutcome::Updated
            }
            Err(e) => {
                match self.time {
                    Some(last) => log::warn!("tick skipped, keeping {last}: {e}"),
                    None => log::warn!("tick skipped, no time known yet: {e}"),
                }
                TickOutcome::Skipped
            }
        }
    }

    /// Entry point for scheduler and time-change notifications.
    ///
    /// Triggers still queued when the clock detaches are dropped here.
    pub fn handle_trigger(&mut self, trigger: TickTrigger) -> TickOutcome {
        if !self.registered {
            log::debug!("dropping {} trigger: clock detached", trigger.as_str());
            return TickOutcome::Detached;
        }
        log::trace!("trigger: {}", trigger.as_str());
        self.on_tick()
    }

    /// Records the view size and rescales the hands to it.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.sized = true;
        self.recompute_geometry();
        log::debug!(
            "clock resized: {}x{} hands={:.1}/{:.1}/{:.1} radius={:.1}",
            self.viewport.width,
            self.viewport.height,
            self.geometry.hour_len,
            self.geometry.minute_len,
            self.geometry.second_len,
            self.geometry.circle_radius,
        );
    }

    // ── style ─────────────────────────────────────────────────────────────

    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style;
        self.restyle();
    }

    /// Sets the pixels-per-dp ratio. Non-positive values are ignored.
    pub fn set_density(&mut self, density: f32) {
        if !(density.is_finite() && density > 0.0) {
            log::warn!("ignoring invalid density {density}");
            return;
        }
        self.density = density;
        self.restyle();
    }

    /// Sets one option by name-independent key.
    pub fn set_option(&mut self, option: StyleOption, value: StyleValue) -> Result<(), StyleError> {
        self.style.set(option, value)?;
        self.restyle();
        Ok(())
    }

    pub fn set_center_color(&mut self, argb: u32) { self.style.center_color = argb; self.restyle(); }
    pub fn set_hour_hand_color(&mut self, argb: u32) { self.style.hour_hand_color = argb; self.restyle(); }
    pub fn set_minute_hand_color(&mut self, argb: u32) { self.style.minute_hand_color = argb; self.restyle(); }
    pub fn set_second_hand_color(&mut self, argb: u32) { self.style.second_hand_color = argb; self.restyle(); }
    pub fn set_circle_color(&mut self, argb: u32) { self.style.circle_color = argb; self.restyle(); }
    pub fn set_tick_color(&mut self, argb: u32) { self.style.tick_color = argb; self.restyle(); }
    pub fn set_numeral_color(&mut self, argb: u32) { self.style.numeral_color = argb; self.restyle(); }
    pub fn set_center_radius(&mut self, v: Dimension) { self.style.center_radius = v; self.restyle(); }
    pub fn set_hour_hand_width(&mut self, v: Dimension) { self.style.hour_hand_width = v; self.restyle(); }
    pub fn set_minute_hand_width(&mut self, v: Dimension) { self.style.minute_hand_width = v; self.restyle(); }
    pub fn set_second_hand_width(&mut self, v: Dimension) { self.style.second_hand_width = v; self.restyle(); }
    pub fn set_circle_width(&mut self, v: Dimension) { self.style.circle_width = v; self.restyle(); }
    pub fn set_tick_width(&mut self, v: Dimension) { self.style.tick_width = v; self.restyle(); }
    pub fn set_tick_length(&mut self, v: Dimension) { self.style.tick_length = v; self.restyle(); }
    pub fn set_numeral_text_size(&mut self, v: Dimension) { self.style.numeral_text_size = v; self.restyle(); }

    fn restyle(&mut self) {
        self.resolved = ResolvedStyle::resolve(&self.style, self.density);
        self.recompute_geometry();
    }

    fn recompute_geometry(&mut self) {
        self.geometry = if self.sized {
            ClockGeometry::for_width(self.viewport.width, &self.resolved)
        } else {
            ClockGeometry::initial(self.density)
        };
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// Draw commands for the current frame, in paint order.
    pub fn render(&self) -> Vec<DrawCmd> {
        let mut list = DrawList::with_capacity(PRIMITIVES_PER_FRAME);
        self.render_into(&mut list);
        list.into_vec()
    }

    /// Like [`render`](Self::render) but reuses `list`'s allocation.
    pub fn render_into(&self, list: &mut DrawList) {
        list.clear();
        let mut painter = Painter::new(list, self.text.as_ref());
        self.paint_face(&mut painter, self.viewport.center(), self.geometry);
    }

    fn paint_face(&self, painter: &mut Painter, center: Vec2, g: ClockGeometry) {
        let style = &self.resolved;
        let tick_len = style.tick_length;

        for i in 0..12 {
            let angle = HOUR_ANGLE * i as f64;
            let start = angle_to_point(center, angle, g.circle_radius);
            let end = angle_to_point(center, angle, (g.circle_radius - tick_len).max(0.0));
            painter.line(start, end, style.tick);
        }

        // Positions 0, 5, .. 55 repeat the hour marks underneath; kept as is.
        for i in 0..60 {
            let angle = MINUTE_ANGLE * i as f64;
            let start = angle_to_point(center, angle, g.circle_radius);
            let end = angle_to_point(center, angle, (g.circle_radius - tick_len / 2.0).max(0.0));
            painter.line(start, end, style.tick);
        }

        let numeral_radius = (g.circle_radius - tick_len * 2.5).max(0.0);
        for (i, numeral) in NUMERALS.iter().enumerate() {
            let anchor = angle_to_point(center, HOUR_ANGLE * i as f64, numeral_radius);
            let half_height = painter.text_height(numeral, style.numeral.size) / 2.0;
            painter.text(*numeral, Vec2::new(anchor.x, anchor.y + half_height), style.numeral);
        }

        let angles = self.hand_angles();
        painter.line(center, angle_to_point(center, angles.hour, g.hour_len), style.hour_hand);
        painter.line(center, angle_to_point(center, angles.minute, g.minute_len), style.minute_hand);
        painter.line(center, angle_to_point(center, angles.second, g.second_len), style.second_hand);

        painter.dot(center, style.center);
        painter.circle(center, g.circle_radius, style.circle);
    }
}

impl Widget for ClockFace {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        let initial = ClockGeometry::initial(self.density);
        let natural = 2.0 * (initial.circle_radius + self.resolved.circle.width);
        constraints.largest_square(natural)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let size = rect.viewport();
        let geometry = if !self.sized || size == self.viewport {
            self.geometry
        } else {
            ClockGeometry::for_width(size.width, &self.resolved)
        };
        let parent = painter.origin();
        painter.set_origin(parent + rect.origin);
        self.paint_face(painter, size.center(), geometry);
        painter.set_origin(parent);
    }

    fn on_size_changed(&mut self, size: Viewport) {
        self.on_resize(size.width, size.height);
    }

    fn on_attach(&mut self) {
        if let Err(e) = self.attach() {
            log::error!("clock attach failed: {e}");
        }
    }

    fn on_detach(&mut self) {
        self.detach();
    }
}

impl Drop for ClockFace {
    fn drop(&mut self) {
        self.detach();
    }
}
