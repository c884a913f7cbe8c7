//! Carousel view
//!
//! Composes the controller, animator, theme, and presentational transitions
//! into the component a host drives with events and frame ticks.

use crate::animator::Animator;
use crate::catalog::{copy, product, CATALOG, ITEM_COUNT};
use crate::config::CarouselConfig;
use crate::controller::{CarouselController, ControllerTask, Direction};
use crate::display::{DisplayText, DisplayTransitions, TextStyle, TileView};
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use vitrine_animation::{TimerQueue, TweenEngine, TweenScheduler};
use vitrine_core::{StyleProps, UiEvent};
use vitrine_theme::{ColorScheme, RootScope, ThemeBundle, ThemeIcon, ThemeState};

/// The product showcase component
pub struct CarouselView<E: TweenEngine = TweenScheduler> {
    engine: E,
    animator: Animator<E>,
    controller: CarouselController,
    timers: TimerQueue<ControllerTask>,
    transitions: DisplayTransitions,
    theme: ThemeState,
    elapsed_ms: f64,
}

impl CarouselView<TweenScheduler> {
    /// View on the built-in tween scheduler
    pub fn new(config: &CarouselConfig) -> Result<Self> {
        let engine = TweenScheduler::with_easing(config.easing()?);
        Self::with_engine(config, engine)
    }
}

impl<E: TweenEngine> CarouselView<E> {
    /// Mount the view on `engine`: image slots are placed, nothing animates
    pub fn with_engine(config: &CarouselConfig, mut engine: E) -> Result<Self> {
        config.validate()?;

        let animator = Animator::mount(&mut engine, config.tween_duration_secs());
        let controller = CarouselController::new(config.initial_index, config.transition_reset_ms)
            .with_overlap(config.allow_overlap);
        let transitions = DisplayTransitions::new(config.initial_index, config.text_transition_ms);
        let mut theme = ThemeState::with_bundle(
            ThemeBundle::default(),
            config.initial_scheme,
            config.theme_fade_ms,
        );
        for (token, color) in config.color_overrides()? {
            theme.set_color_override(token, color);
        }

        tracing::debug!(
            index = config.initial_index,
            scheme = config.initial_scheme.name(),
            "carousel mounted"
        );

        Ok(Self {
            engine,
            animator,
            controller,
            timers: TimerQueue::new(),
            transitions,
            theme,
            elapsed_ms: 0.0,
        })
    }

    // ========== Input ==========

    /// Navigate one step; `None` if the click was dropped
    pub fn advance(&mut self, direction: Direction) -> Option<usize> {
        let moved = self.controller.advance(
            direction,
            &self.animator,
            &mut self.engine,
            &self.timers,
        );
        self.sync_display();
        moved
    }

    /// Show the next record; returns the index now displayed
    pub fn next(&mut self) -> usize {
        self.advance(Direction::Next);
        self.current_index()
    }

    /// Show the previous record; returns the index now displayed
    pub fn prev(&mut self) -> usize {
        self.advance(Direction::Prev);
        self.current_index()
    }

    pub fn toggle_theme(&mut self) -> ColorScheme {
        self.theme.toggle()
    }

    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::Prev => {
                self.prev();
            }
            UiEvent::Next => {
                self.next();
            }
            UiEvent::ToggleTheme => {
                self.toggle_theme();
            }
        }
    }

    // ========== Frame ==========

    /// Advance logical time: tweens, the deferred flag reset, text and
    /// tile transitions, and the theme fade
    ///
    /// Negative deltas count as zero so every clock moves together.
    pub fn tick(&mut self, dt_ms: f32) {
        let dt_ms = dt_ms.max(0.0);
        self.elapsed_ms += f64::from(dt_ms);
        self.engine.advance(dt_ms);

        for task in self.timers.advance(dt_ms) {
            self.controller.on_task(task);
        }
        self.sync_display();
        self.transitions.tick(dt_ms);
        self.theme.tick(dt_ms);
    }

    /// Whether anything still needs frames
    pub fn is_animating(&self) -> bool {
        self.engine.is_animating()
            || self.controller.is_transitioning()
            || !self.transitions.is_settled()
            || self.theme.is_animating()
    }

    fn sync_display(&mut self) {
        self.transitions
            .sync(self.controller.current_index(), self.controller.is_transitioning());
    }

    // ========== Read ==========

    pub fn current_index(&self) -> usize {
        self.controller.current_index()
    }

    pub fn is_transitioning(&self) -> bool {
        self.controller.is_transitioning()
    }

    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    /// Text for the current index
    pub fn display(&self) -> DisplayText {
        DisplayText::for_index(self.current_index(), self.is_transitioning())
    }

    pub fn text_style(&self) -> TextStyle {
        self.transitions.text_style()
    }

    pub fn tiles(&self) -> Vec<TileView> {
        self.transitions.tiles(self.current_index())
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn animator(&self) -> &Animator<E> {
        &self.animator
    }

    /// Current style of each image slot, when the engine exposes it
    pub fn slot_styles(&self) -> [Option<StyleProps>; ITEM_COUNT] {
        let slots = self.animator.slots();
        std::array::from_fn(|slot| self.engine.style(slots[slot]))
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Serializable state of everything on screen
    pub fn snapshot(&self) -> ViewSnapshot {
        let images = self
            .slot_styles()
            .into_iter()
            .enumerate()
            .map(|(slot, style)| ImageSlotView {
                slot,
                image_path: CATALOG[slot].image_path,
                alt: CATALOG[slot].model,
                style,
            })
            .collect();

        ViewSnapshot {
            elapsed_ms: self.elapsed_ms,
            index: self.current_index(),
            transitioning: self.is_transitioning(),
            scheme: self.theme.scheme(),
            root_classes: self.theme.root().clone(),
            toggle_icon: self.theme.toggle_icon(),
            text: self.display(),
            text_style: self.text_style(),
            tiles: self.tiles(),
            images,
            colors: self.theme.to_css_variable_map(),
        }
    }
}

/// One product image element
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImageSlotView {
    pub slot: usize,
    pub image_path: &'static str,
    pub alt: &'static str,
    pub style: Option<StyleProps>,
}

/// Point-in-time view state
#[derive(Clone, Debug, Serialize)]
pub struct ViewSnapshot {
    pub elapsed_ms: f64,
    pub index: usize,
    pub transitioning: bool,
    pub scheme: ColorScheme,
    pub root_classes: RootScope,
    pub toggle_icon: ThemeIcon,
    pub text: DisplayText,
    pub text_style: TextStyle,
    pub tiles: Vec<TileView>,
    pub images: Vec<ImageSlotView>,
    pub colors: BTreeMap<String, String>,
}

impl ViewSnapshot {
    /// Ids of every text-bearing element
    pub fn element_ids() -> Vec<String> {
        let mut ids: Vec<String> = [
            "title.name",
            "title.model",
            "price",
            "badge",
            "care.heading",
            "care.body",
            "theme.icon",
        ]
        .iter()
        .map(|id| id.to_string())
        .collect();
        ids.extend((0..ITEM_COUNT).map(|i| format!("tile.{i}")));
        ids.extend((0..ITEM_COUNT).map(|i| format!("image.{i}")));
        ids
    }

    /// Text content of an element by id
    pub fn element_text(&self, id: &str) -> Option<String> {
        let text = match id {
            "title.name" => self.text.name,
            "title.model" => self.text.model,
            "price" => self.text.price,
            "badge" => copy::BADGE,
            "care.heading" => copy::CARE_HEADING,
            "care.body" => copy::CARE_BODY,
            "theme.icon" => self.toggle_icon.name(),
            _ => {
                if let Some(index) = indexed(id, "tile.") {
                    self.tiles.get(index)?.label
                } else if let Some(index) = indexed(id, "image.") {
                    self.images.get(index)?.alt
                } else {
                    return None;
                }
            }
        };
        Some(text.to_string())
    }

    /// Record shown at the snapshot's index
    pub fn product(&self) -> &'static crate::catalog::ProductRecord {
        product(self.index)
    }
}

fn indexed(id: &str, prefix: &str) -> Option<usize> {
    id.strip_prefix(prefix)?.parse().ok()
}
